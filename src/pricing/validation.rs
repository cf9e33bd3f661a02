//! 폼 입력 검증. 문자열 → 숫자 변환, 필수값, 범위 검사를 수행한다.

use std::collections::BTreeMap;
use std::fmt;

use super::params::PricingInput;
use crate::i18n::keys;

/// 입력 폼의 각 항목.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    WeightGrams,
    Hours,
    Minutes,
    MaterialCostPerKg,
    PrinterPowerWatts,
    EnergyCostPerKwh,
    PrinterValue,
    PrinterLifetimeHours,
    MaintenancePct,
    FailureRatePct,
    TaxPct,
    OnlineSaleFeePct,
    ProfitMarginPct,
    ExtraFixedCost,
}

impl Field {
    /// 화면 표시 순서. 폼 섹션(부품, 에너지/재료, 프린터, 가격/수수료) 순이다.
    pub const ALL: [Field; 15] = [
        Field::Name,
        Field::WeightGrams,
        Field::Hours,
        Field::Minutes,
        Field::MaterialCostPerKg,
        Field::PrinterPowerWatts,
        Field::EnergyCostPerKwh,
        Field::PrinterValue,
        Field::PrinterLifetimeHours,
        Field::MaintenancePct,
        Field::FailureRatePct,
        Field::TaxPct,
        Field::OnlineSaleFeePct,
        Field::ProfitMarginPct,
        Field::ExtraFixedCost,
    ];

    /// 설정 파일/CLI에서 쓰는 키.
    pub fn key(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::WeightGrams => "weight_grams",
            Field::Hours => "hours",
            Field::Minutes => "minutes",
            Field::MaterialCostPerKg => "material_cost_per_kg",
            Field::PrinterPowerWatts => "printer_power_watts",
            Field::EnergyCostPerKwh => "energy_cost_per_kwh",
            Field::PrinterValue => "printer_value",
            Field::PrinterLifetimeHours => "printer_lifetime_hours",
            Field::MaintenancePct => "maintenance_pct",
            Field::FailureRatePct => "failure_rate_pct",
            Field::TaxPct => "tax_pct",
            Field::OnlineSaleFeePct => "online_sale_fee_pct",
            Field::ProfitMarginPct => "profit_margin_pct",
            Field::ExtraFixedCost => "extra_fixed_cost",
        }
    }

    /// 번역 키.
    pub fn label_key(self) -> &'static str {
        match self {
            Field::Name => keys::FIELD_NAME,
            Field::WeightGrams => keys::FIELD_WEIGHT,
            Field::Hours => keys::FIELD_HOURS,
            Field::Minutes => keys::FIELD_MINUTES,
            Field::MaterialCostPerKg => keys::FIELD_MATERIAL_COST,
            Field::PrinterPowerWatts => keys::FIELD_POWER,
            Field::EnergyCostPerKwh => keys::FIELD_ENERGY_COST,
            Field::PrinterValue => keys::FIELD_PRINTER_VALUE,
            Field::PrinterLifetimeHours => keys::FIELD_LIFETIME,
            Field::MaintenancePct => keys::FIELD_MAINTENANCE,
            Field::FailureRatePct => keys::FIELD_FAILURE_RATE,
            Field::TaxPct => keys::FIELD_TAX,
            Field::OnlineSaleFeePct => keys::FIELD_ONLINE_FEE,
            Field::ProfitMarginPct => keys::FIELD_MARGIN,
            Field::ExtraFixedCost => keys::FIELD_EXTRA_FIXED,
        }
    }

    /// 허용 범위 (최소, 최대). 이름 항목은 숫자 범위가 없다.
    pub fn range(self) -> Option<(f64, Option<f64>)> {
        match self {
            Field::Name => None,
            Field::WeightGrams => Some((1.0, None)),
            Field::Hours => Some((0.0, None)),
            Field::Minutes => Some((0.0, Some(59.0))),
            Field::MaterialCostPerKg => Some((0.01, None)),
            Field::PrinterPowerWatts => Some((0.0, None)),
            Field::EnergyCostPerKwh => Some((0.01, None)),
            Field::PrinterValue => Some((1.0, None)),
            Field::PrinterLifetimeHours => Some((1.0, None)),
            Field::MaintenancePct
            | Field::FailureRatePct
            | Field::TaxPct
            | Field::OnlineSaleFeePct => Some((0.0, Some(100.0))),
            Field::ProfitMarginPct => Some((0.0, None)),
            Field::ExtraFixedCost => Some((0.0, None)),
        }
    }

    pub fn from_key(key: &str) -> Option<Field> {
        Field::ALL.into_iter().find(|f| f.key() == key)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// 항목별 오류 종류.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FieldErrorKind {
    #[error("required")]
    Missing,
    #[error("not a number: {0:?}")]
    NotANumber(String),
    #[error("must be at least {min}")]
    BelowMinimum { min: f64 },
    #[error("must be at most {max}")]
    AboveMaximum { max: f64 },
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("{field}: {kind}")]
    Field { field: Field, kind: FieldErrorKind },
    #[error("combined tax, fee, and margin percentages must sum to less than 100 (got {combined_pct})")]
    CombinedRatesTooHigh { combined_pct: f64 },
}

/// 검증 실패 목록. 실패한 항목을 폼 순서대로 모두 담는다.
#[derive(Debug, Clone, PartialEq, Default, thiserror::Error)]
#[error("{} invalid input(s)", .errors.len())]
pub struct ValidationErrors {
    pub errors: Vec<ValidationError>,
}

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// 해당 항목의 오류를 찾는다.
    pub fn for_field(&self, field: Field) -> Option<&FieldErrorKind> {
        self.errors.iter().find_map(|e| match e {
            ValidationError::Field { field: f, kind } if *f == field => Some(kind),
            _ => None,
        })
    }

    pub fn has_combined_rate_error(&self) -> bool {
        self.errors
            .iter()
            .any(|e| matches!(e, ValidationError::CombinedRatesTooHigh { .. }))
    }

    fn push_field(&mut self, field: Field, kind: FieldErrorKind) {
        self.errors.push(ValidationError::Field { field, kind });
    }
}

/// 사용자가 입력한 원문 문자열 폼.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PricingForm {
    values: BTreeMap<Field, String>,
}

impl PricingForm {
    /// 빈 폼.
    pub fn new() -> Self {
        Self::default()
    }

    /// 기본값으로 채운 폼.
    pub fn from_input(input: &PricingInput) -> Self {
        let mut form = Self::new();
        form.fill_from(input);
        form
    }

    /// 폼을 주어진 기본값으로 되돌린다.
    pub fn reset(&mut self, defaults: &PricingInput) {
        self.values.clear();
        self.fill_from(defaults);
    }

    fn fill_from(&mut self, input: &PricingInput) {
        for field in Field::ALL {
            let text = match field {
                Field::Name => input.name.clone(),
                _ => format_number(numeric_value(input, field)),
            };
            self.values.insert(field, text);
        }
    }

    pub fn set(&mut self, field: Field, raw: impl Into<String>) {
        self.values.insert(field, raw.into());
    }

    /// 원문 값. 입력되지 않았으면 빈 문자열.
    pub fn get(&self, field: Field) -> &str {
        self.values.get(&field).map(String::as_str).unwrap_or("")
    }

    /// 숫자로 해석 가능한 경우에만 값을 돌려준다. 범위는 보지 않는다.
    pub fn parse_number(&self, field: Field) -> Option<f64> {
        parse_number(self.get(field)).ok()
    }
}

fn format_number(value: f64) -> String {
    format!("{value}")
}

fn parse_number(raw: &str) -> Result<f64, FieldErrorKind> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(FieldErrorKind::Missing);
    }
    match trimmed.replace(',', ".").parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(FieldErrorKind::NotANumber(trimmed.to_string())),
    }
}

fn check_range(field: Field, value: f64) -> Result<(), FieldErrorKind> {
    if let Some((min, max)) = field.range() {
        if value < min {
            return Err(FieldErrorKind::BelowMinimum { min });
        }
        if let Some(max) = max {
            if value > max {
                return Err(FieldErrorKind::AboveMaximum { max });
            }
        }
    }
    Ok(())
}

fn numeric_value(input: &PricingInput, field: Field) -> f64 {
    match field {
        Field::Name => f64::NAN,
        Field::WeightGrams => input.weight_grams,
        Field::Hours => input.hours,
        Field::Minutes => input.minutes,
        Field::MaterialCostPerKg => input.material_cost_per_kg,
        Field::PrinterPowerWatts => input.printer_power_watts,
        Field::EnergyCostPerKwh => input.energy_cost_per_kwh,
        Field::PrinterValue => input.printer_value,
        Field::PrinterLifetimeHours => input.printer_lifetime_hours,
        Field::MaintenancePct => input.maintenance_pct,
        Field::FailureRatePct => input.failure_rate_pct,
        Field::TaxPct => input.tax_pct,
        Field::OnlineSaleFeePct => input.online_sale_fee_pct,
        Field::ProfitMarginPct => input.profit_margin_pct,
        Field::ExtraFixedCost => input.extra_fixed_cost,
    }
}

fn set_numeric_value(input: &mut PricingInput, field: Field, value: f64) {
    match field {
        Field::Name => {}
        Field::WeightGrams => input.weight_grams = value,
        Field::Hours => input.hours = value,
        Field::Minutes => input.minutes = value,
        Field::MaterialCostPerKg => input.material_cost_per_kg = value,
        Field::PrinterPowerWatts => input.printer_power_watts = value,
        Field::EnergyCostPerKwh => input.energy_cost_per_kwh = value,
        Field::PrinterValue => input.printer_value = value,
        Field::PrinterLifetimeHours => input.printer_lifetime_hours = value,
        Field::MaintenancePct => input.maintenance_pct = value,
        Field::FailureRatePct => input.failure_rate_pct = value,
        Field::TaxPct => input.tax_pct = value,
        Field::OnlineSaleFeePct => input.online_sale_fee_pct = value,
        Field::ProfitMarginPct => input.profit_margin_pct = value,
        Field::ExtraFixedCost => input.extra_fixed_cost = value,
    }
}

fn check_combined_rates(input: &PricingInput, report: &mut ValidationErrors) {
    let rate_fields = [Field::TaxPct, Field::OnlineSaleFeePct, Field::ProfitMarginPct];
    if rate_fields.iter().any(|f| report.for_field(*f).is_some()) {
        return;
    }
    let combined_pct = input.combined_rate_pct();
    if combined_pct >= 100.0 {
        report
            .errors
            .push(ValidationError::CombinedRatesTooHigh { combined_pct });
    }
}

/// 폼 문자열을 검증해 계산 입력으로 변환한다.
pub fn validate_form(form: &PricingForm) -> Result<PricingInput, ValidationErrors> {
    let mut report = ValidationErrors::default();
    let mut input = PricingInput::default();

    for field in Field::ALL {
        let raw = form.get(field);
        if field == Field::Name {
            let name = raw.trim();
            if name.is_empty() {
                report.push_field(field, FieldErrorKind::Missing);
            } else {
                input.name = name.to_string();
            }
            continue;
        }
        match parse_number(raw).and_then(|v| check_range(field, v).map(|_| v)) {
            Ok(v) => set_numeric_value(&mut input, field, v),
            Err(kind) => report.push_field(field, kind),
        }
    }

    check_combined_rates(&input, &mut report);

    if report.is_empty() {
        Ok(input)
    } else {
        tracing::debug!(errors = report.errors.len(), "form validation failed");
        Err(report)
    }
}

/// 이미 숫자로 주어진 입력에 같은 규칙을 적용한다.
pub fn validate_input(input: &PricingInput) -> Result<(), ValidationErrors> {
    let mut report = ValidationErrors::default();
    for field in Field::ALL {
        if field == Field::Name {
            if input.name.trim().is_empty() {
                report.push_field(field, FieldErrorKind::Missing);
            }
            continue;
        }
        let value = numeric_value(input, field);
        if !value.is_finite() {
            report.push_field(field, FieldErrorKind::NotANumber(value.to_string()));
            continue;
        }
        if let Err(kind) = check_range(field, value) {
            report.push_field(field, kind);
        }
    }
    check_combined_rates(input, &mut report);
    if report.is_empty() {
        Ok(())
    } else {
        Err(report)
    }
}

/// 범위를 벗어난 항목을 `fallback` 값으로 되돌리고 되돌린 항목을 돌려준다.
///
/// 이름은 부품마다 입력하므로 비어 있어도 건드리지 않는다. 세율 합계가
/// 100% 이상이면 세금, 수수료, 이익률 세 항목을 함께 되돌린다.
pub fn restore_invalid_fields(input: &mut PricingInput, fallback: &PricingInput) -> Vec<Field> {
    let Err(report) = validate_input(input) else {
        return Vec::new();
    };
    let mut restored = Vec::new();
    for err in &report.errors {
        let fields: &[Field] = match err {
            ValidationError::Field {
                field: Field::Name, ..
            } => &[],
            ValidationError::Field { field, .. } => std::slice::from_ref(field),
            ValidationError::CombinedRatesTooHigh { .. } => {
                &[Field::TaxPct, Field::OnlineSaleFeePct, Field::ProfitMarginPct]
            }
        };
        for &field in fields {
            set_numeric_value(input, field, numeric_value(fallback, field));
            restored.push(field);
        }
    }
    restored
}
