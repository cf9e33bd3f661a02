//! 명령행 인자 정의.

use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::config::DEFAULT_CONFIG_PATH;
use crate::pricing::{Field, PricingForm};

#[derive(Debug, Parser)]
#[command(name = "print_pricing_toolbox", version, about = "3D printing sale price calculator")]
pub struct Cli {
    /// 표시 언어 (auto/ko/en-us/pt-br)
    #[arg(short = 'L', long, default_value = "auto")]
    pub lang: String,

    /// 설정 파일 경로
    #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,

    /// 로그 상세도 (-v: info, -vv: debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// 대화형 메뉴 없이 한 번 견적을 계산한다
    Quote(QuoteArgs),
    /// 설정된 폼 기본값을 TOML로 출력한다
    Defaults,
}

/// `quote` 인자. 지정하지 않은 항목은 설정 기본값을 쓴다.
/// 값은 문자열 그대로 받아 폼 검증에 넘긴다.
#[derive(Debug, Clone, Default, Args)]
pub struct QuoteArgs {
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub weight_grams: Option<String>,
    #[arg(long)]
    pub material_cost_per_kg: Option<String>,
    #[arg(long)]
    pub hours: Option<String>,
    #[arg(long)]
    pub minutes: Option<String>,
    #[arg(long)]
    pub printer_value: Option<String>,
    #[arg(long)]
    pub printer_lifetime_hours: Option<String>,
    #[arg(long)]
    pub energy_cost_per_kwh: Option<String>,
    #[arg(long)]
    pub profit_margin_pct: Option<String>,
    #[arg(long)]
    pub extra_fixed_cost: Option<String>,
    #[arg(long)]
    pub printer_power_watts: Option<String>,
    #[arg(long)]
    pub maintenance_pct: Option<String>,
    #[arg(long)]
    pub tax_pct: Option<String>,
    #[arg(long)]
    pub online_sale_fee_pct: Option<String>,
    #[arg(long)]
    pub failure_rate_pct: Option<String>,

    /// 결과를 JSON으로 출력
    #[arg(long)]
    pub json: bool,
}

impl QuoteArgs {
    /// 지정된 항목만 (항목, 원문) 목록으로 돌려준다.
    pub fn overrides(&self) -> Vec<(Field, &str)> {
        let pairs = [
            (Field::Name, &self.name),
            (Field::WeightGrams, &self.weight_grams),
            (Field::MaterialCostPerKg, &self.material_cost_per_kg),
            (Field::Hours, &self.hours),
            (Field::Minutes, &self.minutes),
            (Field::PrinterValue, &self.printer_value),
            (Field::PrinterLifetimeHours, &self.printer_lifetime_hours),
            (Field::EnergyCostPerKwh, &self.energy_cost_per_kwh),
            (Field::ProfitMarginPct, &self.profit_margin_pct),
            (Field::ExtraFixedCost, &self.extra_fixed_cost),
            (Field::PrinterPowerWatts, &self.printer_power_watts),
            (Field::MaintenancePct, &self.maintenance_pct),
            (Field::TaxPct, &self.tax_pct),
            (Field::OnlineSaleFeePct, &self.online_sale_fee_pct),
            (Field::FailureRatePct, &self.failure_rate_pct),
        ];
        pairs
            .into_iter()
            .filter_map(|(field, value)| value.as_deref().map(|v| (field, v)))
            .collect()
    }

    /// 기본값 폼 위에 지정된 항목을 덮어쓴다.
    pub fn apply_to(&self, form: &mut PricingForm) {
        for (field, raw) in self.overrides() {
            form.set(field, raw);
        }
    }
}
