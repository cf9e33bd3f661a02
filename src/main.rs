use std::process::ExitCode;

use clap::Parser;
use print_pricing_toolbox::app::{self, AppError};
use print_pricing_toolbox::cli::{Cli, Command};
use print_pricing_toolbox::{config, init_tracing};

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 CLI 애플리케이션을 실행한다.
fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match try_run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            // 견적 오류는 run_quote가 이미 사람이 읽을 형태로 출력했다.
            if !matches!(err, AppError::Pricing(_)) {
                eprintln!("error: {err}");
            }
            tracing::debug!(error = ?err, "exiting with error");
            ExitCode::from(err.exit_code())
        }
    }
}

fn try_run(cli: Cli) -> Result<(), AppError> {
    let mut cfg = config::load_or_default_from(&cli.config)?;
    match cli.command {
        None => app::run(&mut cfg, &cli.lang),
        Some(Command::Quote(args)) => app::run_quote(&cfg, &cli.lang, &args),
        Some(Command::Defaults) => app::print_defaults(&cfg),
    }
}
