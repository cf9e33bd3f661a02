use std::io::{self, BufRead, Write};

use crate::app::AppError;
use crate::config::Config;
use crate::i18n::{self, keys, Translator};
use crate::pricing::validation::{FieldErrorKind, ValidationError};
use crate::pricing::{
    self, Field, LivePreview, PriceBreakdown, PriceSummary, PricingError, PricingForm, PrintTime,
    ValidationErrors,
};

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    EditForm,
    Calculate,
    Reset,
    Settings,
    Exit,
}

/// 입력 폼의 구역과 소속 항목.
const SECTIONS: [(&str, &[Field]); 4] = [
    (
        keys::SECTION_PART,
        &[Field::Name, Field::WeightGrams, Field::Hours, Field::Minutes],
    ),
    (
        keys::SECTION_ENERGY,
        &[
            Field::MaterialCostPerKg,
            Field::PrinterPowerWatts,
            Field::EnergyCostPerKwh,
        ],
    ),
    (
        keys::SECTION_PRINTER,
        &[
            Field::PrinterValue,
            Field::PrinterLifetimeHours,
            Field::MaintenancePct,
        ],
    ),
    (
        keys::SECTION_PRICING,
        &[
            Field::FailureRatePct,
            Field::TaxPct,
            Field::OnlineSaleFeePct,
            Field::ProfitMarginPct,
            Field::ExtraFixedCost,
        ],
    ),
];

/// 메인 메뉴를 표시하고 선택값을 반환한다. 입력이 닫히면 종료로 본다.
pub fn main_menu(tr: &Translator, input: &mut impl BufRead) -> Result<MenuChoice, AppError> {
    println!("{}", tr.t(keys::MAIN_MENU_TITLE));
    println!("{}", tr.t(keys::MAIN_MENU_EDIT_FORM));
    println!("{}", tr.t(keys::MAIN_MENU_CALCULATE));
    println!("{}", tr.t(keys::MAIN_MENU_RESET));
    println!("{}", tr.t(keys::MAIN_MENU_SETTINGS));
    println!("{}", tr.t(keys::MAIN_MENU_EXIT));
    loop {
        let Some(sel) = read_line(input, tr.t(keys::PROMPT_MENU_SELECT))? else {
            return Ok(MenuChoice::Exit);
        };
        match sel.trim() {
            "1" => return Ok(MenuChoice::EditForm),
            "2" => return Ok(MenuChoice::Calculate),
            "3" => return Ok(MenuChoice::Reset),
            "4" => return Ok(MenuChoice::Settings),
            "0" => return Ok(MenuChoice::Exit),
            _ => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    }
}

/// 항목별로 값을 입력받는다. 빈 입력은 현재 값을 유지한다.
/// 입력이 닫히면 그때까지 받은 값만 반영하고 돌아간다.
pub fn handle_edit_form(
    tr: &Translator,
    cfg: &Config,
    form: &mut PricingForm,
    input: &mut impl BufRead,
) -> Result<(), AppError> {
    println!("{}", tr.t(keys::FORM_HEADING));
    println!("{}", tr.t(keys::FORM_KEEP_HINT));
    for (section, fields) in SECTIONS {
        println!("{}", tr.t(section));
        for &field in fields {
            let prompt = format!("  {} [{}]: ", tr.t(field.label_key()), form.get(field));
            let Some(raw) = read_line(input, &prompt)? else {
                println!();
                return Ok(());
            };
            let raw = raw.trim();
            if !raw.is_empty() {
                form.set(field, raw);
            }
        }
        if section == keys::SECTION_ENERGY || section == keys::SECTION_PRINTER {
            print!("{}", render_preview(tr, &cfg.currency_symbol, &LivePreview::from_form(form)));
        }
    }
    Ok(())
}

/// 현재 폼으로 판매가를 계산해 출력한다. 입력 오류는 화면에만 보고한다.
pub fn handle_calculate(tr: &Translator, cfg: &Config, form: &PricingForm) -> Result<(), AppError> {
    match pricing::quote_form(form) {
        Ok(breakdown) => print!("{}", render_breakdown(tr, &cfg.currency_symbol, &breakdown)),
        Err(err) => print!("{}", render_pricing_error(tr, &err)),
    }
    Ok(())
}

/// 확인 후 폼을 설정 기본값으로 되돌린다.
pub fn handle_reset(
    tr: &Translator,
    cfg: &Config,
    form: &mut PricingForm,
    input: &mut impl BufRead,
) -> Result<(), AppError> {
    if confirm(tr, input, tr.t(keys::RESET_CONFIRM))? {
        form.reset(&cfg.defaults);
        println!("{}", tr.t(keys::RESET_DONE));
    }
    Ok(())
}

/// 설정 메뉴를 처리한다. 언어가 바뀌면 true를 돌려준다. 입력이 닫히면 아무것도 바꾸지 않는다.
pub fn handle_settings(
    tr: &Translator,
    cfg: &mut Config,
    form: &PricingForm,
    input: &mut impl BufRead,
) -> Result<bool, AppError> {
    println!("{}", tr.t(keys::SETTINGS_HEADING));
    println!(
        "{} {} / {}",
        tr.t(keys::SETTINGS_CURRENT),
        cfg.language,
        cfg.currency_symbol
    );
    println!("{}", tr.t(keys::SETTINGS_OPTIONS));
    let Some(sel) = read_line(input, tr.t(keys::PROMPT_MENU_SELECT))? else {
        return Ok(false);
    };
    match sel.trim() {
        "" => Ok(false),
        "1" => {
            let Some(code) = read_line(input, tr.t(keys::SETTINGS_PROMPT_LANGUAGE))? else {
                return Ok(false);
            };
            let code = code.trim().to_lowercase();
            if matches!(code.as_str(), "auto" | "ko" | "en" | "en-us" | "pt" | "pt-br") {
                cfg.language = code;
                println!("{}", tr.t(keys::SETTINGS_SAVED));
                Ok(true)
            } else {
                println!("{}", tr.t(keys::SETTINGS_INVALID));
                Ok(false)
            }
        }
        "2" => {
            let Some(symbol) = read_line(input, tr.t(keys::SETTINGS_PROMPT_CURRENCY))? else {
                return Ok(false);
            };
            let symbol = symbol.trim();
            if symbol.is_empty() {
                println!("{}", tr.t(keys::SETTINGS_INVALID));
            } else {
                cfg.currency_symbol = symbol.to_string();
                println!("{}", tr.t(keys::SETTINGS_SAVED));
            }
            Ok(false)
        }
        "3" => {
            // 이름은 부품마다 다르므로 필수 검사에서 빼고 숫자 항목만 본다.
            let mut candidate = form.clone();
            if candidate.get(Field::Name).trim().is_empty() {
                candidate.set(Field::Name, "-");
            }
            match pricing::validate_form(&candidate) {
                Ok(mut defaults) => {
                    defaults.name = form.get(Field::Name).trim().to_string();
                    cfg.defaults = defaults;
                    println!("{}", tr.t(keys::SETTINGS_DEFAULTS_SAVED));
                }
                Err(errors) => print!("{}", render_validation_errors(tr, &errors)),
            }
            Ok(false)
        }
        _ => {
            println!("{}", tr.t(keys::SETTINGS_INVALID));
            Ok(false)
        }
    }
}

/// 금액 표시. 소수점 둘째 자리까지.
pub fn format_money(symbol: &str, value: f64) -> String {
    format!("{symbol} {value:.2}")
}

/// 미리보기 블록을 문자열로 만든다.
pub fn render_preview(tr: &Translator, symbol: &str, preview: &LivePreview) -> String {
    let na = tr.t(keys::PREVIEW_UNAVAILABLE);
    let consumption = preview
        .energy_consumed_kwh
        .map(|v| format!("{v:.2} kWh"))
        .unwrap_or_else(|| na.to_string());
    let maintenance = preview
        .maintenance_value
        .map(|v| format_money(symbol, v))
        .unwrap_or_else(|| na.to_string());
    let depreciation = preview
        .depreciation_per_hour
        .map(|v| format!("{}/h", format_money(symbol, v)))
        .unwrap_or_else(|| na.to_string());
    format!(
        "{}\n  {} {}\n  {} {}\n  {} {}\n",
        tr.t(keys::PREVIEW_HEADING),
        tr.t(keys::PREVIEW_CONSUMPTION),
        consumption,
        tr.t(keys::PREVIEW_MAINTENANCE),
        maintenance,
        tr.t(keys::PREVIEW_DEPRECIATION),
        depreciation,
    )
}

/// 결과 화면을 문자열로 만든다.
pub fn render_breakdown(tr: &Translator, symbol: &str, b: &PriceBreakdown) -> String {
    let summary = PriceSummary::from_breakdown(b);
    let time = PrintTime::from_total_hours(b.total_hours);
    let of_price = tr.t(keys::RESULT_OF_PRICE);
    let money = |v: f64| format_money(symbol, v);

    let mut out = String::new();
    out.push_str(tr.t(keys::RESULT_HEADING));
    out.push('\n');
    out.push_str(&format!("{} {}\n", tr.t(keys::RESULT_PART), b.name));
    out.push_str(&format!(
        "{} {} ({}% {of_price})\n",
        tr.t(keys::RESULT_TAXES),
        money(summary.tax_amount),
        b.tax_pct
    ));
    out.push_str(&format!(
        "{} {} ({}% {of_price})\n",
        tr.t(keys::RESULT_ONLINE_FEE),
        money(summary.fee_amount),
        b.online_sale_fee_pct
    ));
    out.push_str(&format!(
        "{} {} ({:.2}% {of_price})\n",
        tr.t(keys::RESULT_PRODUCTION_COST),
        money(b.production_cost),
        summary.production_cost_share_pct
    ));
    let time_text = tr.tf(
        keys::RESULT_PRINT_TIME_VALUE,
        &[
            ("hours", time.hours.to_string().as_str()),
            ("minutes", time.minutes.to_string().as_str()),
        ],
    );
    out.push_str(&format!("{} {}\n", tr.t(keys::RESULT_PRINT_TIME), time_text));
    out.push_str(&format!("{} {:.2}\n", tr.t(keys::RESULT_MARKUP), b.markup));
    out.push_str(&format!(
        "{} {} ({:.2}% {of_price})\n",
        tr.t(keys::RESULT_NET_PROFIT),
        money(summary.net_profit),
        summary.net_profit_share_pct
    ));
    out.push_str(&format!(
        "{} {}\n  {}\n",
        tr.t(keys::RESULT_FINAL_PRICE),
        money(b.final_price),
        tr.t(keys::RESULT_FINAL_PRICE_NOTE)
    ));

    out.push_str(tr.t(keys::RESULT_DETAILS_HEADING));
    out.push('\n');
    let details = [
        (keys::RESULT_MATERIAL_COST, money(b.material_cost)),
        (keys::RESULT_DEPRECIATION_COST, money(b.depreciation_cost)),
        (keys::RESULT_ELECTRICITY_COST, money(b.electricity_cost)),
        (keys::RESULT_EXTRA_FIXED, money(b.extra_fixed_cost)),
        (keys::RESULT_FAILURE_FACTOR, format!("{:.4}", b.failure_factor)),
        (keys::RESULT_PRICE_WITH_MARGIN, money(b.price_with_margin)),
    ];
    for (key, value) in details {
        out.push_str(&format!("  {} {}\n", tr.t(key), value));
    }
    out
}

/// 검증 오류를 항목 이름과 함께 나열한다.
pub fn render_validation_errors(tr: &Translator, errors: &ValidationErrors) -> String {
    let mut out = format!("{}\n", tr.t(keys::ERROR_VALIDATION_HEADING));
    for err in &errors.errors {
        let line = match err {
            ValidationError::Field { field, kind } => {
                let reason = match kind {
                    FieldErrorKind::Missing => tr.t(keys::ERROR_REQUIRED).to_string(),
                    FieldErrorKind::NotANumber(_) => tr.t(keys::ERROR_NOT_A_NUMBER).to_string(),
                    FieldErrorKind::BelowMinimum { min } => {
                        tr.tf(keys::ERROR_BELOW_MIN, &[("min", min.to_string().as_str())])
                    }
                    FieldErrorKind::AboveMaximum { max } => {
                        tr.tf(keys::ERROR_ABOVE_MAX, &[("max", max.to_string().as_str())])
                    }
                };
                format!("{}: {}", tr.t(field.label_key()), reason)
            }
            ValidationError::CombinedRatesTooHigh { combined_pct } => tr.tf(
                keys::ERROR_COMBINED_RATES,
                &[("combined", combined_pct.to_string().as_str())],
            ),
        };
        out.push_str(&format!("  - {line}\n"));
    }
    out
}

/// 견적 실패를 화면 문자열로 만든다.
pub fn render_pricing_error(tr: &Translator, err: &PricingError) -> String {
    match err {
        PricingError::Invalid(errors) => render_validation_errors(tr, errors),
        PricingError::DegenerateMarkup { combined_pct } => format!(
            "{}: {}\n",
            tr.t(i18n::keys::ERROR_PREFIX),
            tr.tf(
                keys::ERROR_COMBINED_RATES,
                &[("combined", combined_pct.to_string().as_str())]
            )
        ),
    }
}

fn confirm(tr: &Translator, input: &mut impl BufRead, question: &str) -> Result<bool, AppError> {
    let prompt = format!("{question}{}", tr.t(keys::PROMPT_YES_NO));
    let Some(answer) = read_line(input, &prompt)? else {
        return Ok(false);
    };
    Ok(matches!(answer.trim().to_lowercase().as_str(), "y" | "yes" | "s" | "sim" | "예"))
}

/// 프롬프트를 출력하고 한 줄을 읽는다. 입력이 닫혔으면 `None`.
fn read_line(input: &mut impl BufRead, prompt: &str) -> Result<Option<String>, AppError> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut buf = String::new();
    if input.read_line(&mut buf)? == 0 {
        return Ok(None);
    }
    Ok(Some(buf))
}
