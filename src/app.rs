use std::io;

use serde::Serialize;

use crate::cli::QuoteArgs;
use crate::config::{Config, ConfigError};
use crate::i18n::{self, Translator};
use crate::pricing::{self, PriceBreakdown, PriceSummary, PricingError, PricingForm};
use crate::ui_cli::{self, MenuChoice};

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// 파일/터미널 입출력 오류
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    /// 설정 저장/로드 오류
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
    /// 입력 검증 또는 마크업 오류
    #[error("{0}")]
    Pricing(#[from] PricingError),
    /// JSON 직렬화 오류
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl AppError {
    /// 프로세스 종료 코드. 사용자 입력 문제는 2, 그 외는 1.
    pub fn exit_code(&self) -> u8 {
        match self {
            AppError::Pricing(_) => 2,
            _ => 1,
        }
    }
}

/// `quote --json` 출력 형식.
#[derive(Debug, Serialize)]
pub struct QuoteReport<'a> {
    pub breakdown: &'a PriceBreakdown,
    pub summary: PriceSummary,
}

/// 설정 기본값 위에 인자를 덮어써 폼을 만든다.
pub fn form_from_args(config: &Config, args: &QuoteArgs) -> PricingForm {
    let mut form = PricingForm::from_input(&config.defaults);
    args.apply_to(&mut form);
    form
}

/// CLI 애플리케이션의 메인 루프를 실행한다.
pub fn run(config: &mut Config, lang_arg: &str) -> Result<(), AppError> {
    let mut tr = translator_for(config, lang_arg);
    let mut form = PricingForm::from_input(&config.defaults);
    let mut input = io::stdin().lock();
    loop {
        match ui_cli::main_menu(&tr, &mut input)? {
            MenuChoice::EditForm => ui_cli::handle_edit_form(&tr, config, &mut form, &mut input)?,
            MenuChoice::Calculate => ui_cli::handle_calculate(&tr, config, &form)?,
            MenuChoice::Reset => ui_cli::handle_reset(&tr, config, &mut form, &mut input)?,
            MenuChoice::Settings => {
                if ui_cli::handle_settings(&tr, config, &form, &mut input)? {
                    // 설정에서 고른 언어가 시작 인자보다 우선한다.
                    tr = translator_for(config, "auto");
                }
                config.save()?;
            }
            MenuChoice::Exit => {
                config.save()?;
                println!("{}", tr.t(i18n::keys::APP_EXIT));
                break;
            }
        }
    }
    Ok(())
}

/// 한 번 견적을 계산해 출력한다.
pub fn run_quote(config: &Config, lang_arg: &str, args: &QuoteArgs) -> Result<(), AppError> {
    let tr = translator_for(config, lang_arg);
    let form = form_from_args(config, args);
    match pricing::quote_form(&form) {
        Ok(breakdown) => {
            if args.json {
                let report = QuoteReport {
                    breakdown: &breakdown,
                    summary: PriceSummary::from_breakdown(&breakdown),
                };
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print!(
                    "{}",
                    ui_cli::render_breakdown(&tr, &config.currency_symbol, &breakdown)
                );
            }
            Ok(())
        }
        Err(err) => {
            eprint!("{}", ui_cli::render_pricing_error(&tr, &err));
            Err(err.into())
        }
    }
}

/// 설정된 폼 기본값을 TOML로 출력한다.
pub fn print_defaults(config: &Config) -> Result<(), AppError> {
    print!("{}", config.to_toml()?);
    Ok(())
}

fn translator_for(config: &Config, lang_arg: &str) -> Translator {
    let lang = i18n::resolve_language(lang_arg, Some(config.language.as_str()));
    tracing::debug!(lang = %lang, "language resolved");
    Translator::new_with_pack(&lang, None)
}
