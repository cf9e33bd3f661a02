//! 핵심 계산 로직을 라이브러리로 분리하여 CLI 외의 화면에서도 그대로 쓸 수 있게 한다.

pub mod app;
pub mod cli;
pub mod config;
pub mod i18n;
pub mod pricing;
pub mod ui_cli;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// tracing 구독자를 초기화한다. RUST_LOG가 있으면 그 값을 우선한다.
///
/// 로그는 stderr로 보내 표준 출력(결과, JSON)과 섞이지 않게 한다.
pub fn init_tracing(verbosity: u8) {
    let default_level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
        .try_init();
}
