//! 입력 중인 폼에서 바로 보여주는 읽기 전용 값.

use super::calculator;
use super::validation::{Field, PricingForm};

/// 실시간 미리보기. 계산 조건이 안 되면 `None`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LivePreview {
    /// 전력 소비량 [kWh]
    pub energy_consumed_kwh: Option<f64>,
    /// 유지보수비 [통화]
    pub maintenance_value: Option<f64>,
    /// 시간당 감가상각비 [통화/h]
    pub depreciation_per_hour: Option<f64>,
}

impl LivePreview {
    pub fn from_form(form: &PricingForm) -> Self {
        let power = form.parse_number(Field::PrinterPowerWatts);
        let hours = form.parse_number(Field::Hours);
        let minutes = form.parse_number(Field::Minutes);
        let printer_value = form.parse_number(Field::PrinterValue);
        let maintenance_pct = form.parse_number(Field::MaintenancePct);
        let lifetime = form.parse_number(Field::PrinterLifetimeHours);

        let energy_consumed_kwh = match (power, hours, minutes) {
            (Some(p), Some(h), Some(m)) if p > 0.0 && h >= 0.0 && m >= 0.0 => Some(
                calculator::energy_consumed_kwh(p, calculator::total_print_hours(h, m)),
            ),
            _ => None,
        };

        let maintenance_value = match (printer_value, maintenance_pct) {
            (Some(v), Some(pct)) if v > 0.0 && pct > 0.0 => {
                Some(calculator::maintenance_value(v, pct))
            }
            _ => None,
        };

        let depreciation_per_hour = match (printer_value, lifetime) {
            (Some(v), Some(life)) if v > 0.0 && life > 0.0 => {
                let maintenance = calculator::maintenance_value(v, maintenance_pct.unwrap_or(0.0));
                Some(calculator::depreciation_per_hour(v, maintenance, life))
            }
            _ => None,
        };

        Self {
            energy_consumed_kwh,
            maintenance_value,
            depreciation_per_hour,
        }
    }
}
