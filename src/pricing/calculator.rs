//! 3D 출력물 판매가 계산.
//!
//! 각 단계 공식은 별도 함수로 두고 미리보기(`preview`)와 공유한다.

use super::params::{PriceBreakdown, PricingInput};

/// 총 출력 시간 [h].
pub fn total_print_hours(hours: f64, minutes: f64) -> f64 {
    hours + minutes / 60.0
}

/// 재료비. 무게는 g, 단가는 kg 기준.
pub fn material_cost(weight_grams: f64, material_cost_per_kg: f64) -> f64 {
    (weight_grams / 1000.0) * material_cost_per_kg
}

/// 프린터 구매가 대비 유지보수비.
pub fn maintenance_value(printer_value: f64, maintenance_pct: f64) -> f64 {
    printer_value * (maintenance_pct / 100.0)
}

/// 시간당 감가상각비. 유지보수비를 구매가에 더해 수명으로 나눈다.
pub fn depreciation_per_hour(
    printer_value: f64,
    maintenance_value: f64,
    printer_lifetime_hours: f64,
) -> f64 {
    (printer_value + maintenance_value) / printer_lifetime_hours
}

/// 전력 소비량 [kWh]. 소비전력은 W 기준.
pub fn energy_consumed_kwh(printer_power_watts: f64, total_hours: f64) -> f64 {
    (printer_power_watts / 1000.0) * total_hours
}

/// 전기 요금.
pub fn electricity_cost(energy_consumed_kwh: f64, energy_cost_per_kwh: f64) -> f64 {
    energy_consumed_kwh * energy_cost_per_kwh
}

/// 실패율 보정 계수. 실패한 출력만큼 원가를 부풀린다.
pub fn failure_factor(failure_rate_pct: f64) -> f64 {
    1.0 + failure_rate_pct / 100.0
}

/// 세금, 수수료, 이익이 모두 최종 판매가 대비 비율이 되도록 역산한 배수.
///
/// `1 / (1 - (세율 + 수수료율 + 이익률) / 100)`. 합계가 100 이상이면
/// 무한대 또는 음수가 나오며, 이 판단은 호출자 몫이다.
pub fn markup_multiplier(tax_pct: f64, online_sale_fee_pct: f64, profit_margin_pct: f64) -> f64 {
    1.0 / (1.0 - (tax_pct + online_sale_fee_pct + profit_margin_pct) / 100.0)
}

/// 입력 파라미터로 원가/판매가 내역을 계산한다.
pub fn compute_price(input: &PricingInput) -> PriceBreakdown {
    let total_hours = total_print_hours(input.hours, input.minutes);
    let material_cost = material_cost(input.weight_grams, input.material_cost_per_kg);

    let maintenance_value = maintenance_value(input.printer_value, input.maintenance_pct);
    let depreciation_per_hour = depreciation_per_hour(
        input.printer_value,
        maintenance_value,
        input.printer_lifetime_hours,
    );
    let depreciation_cost = total_hours * depreciation_per_hour;

    let energy_consumed_kwh = energy_consumed_kwh(input.printer_power_watts, total_hours);
    let electricity_cost = electricity_cost(energy_consumed_kwh, input.energy_cost_per_kwh);

    let failure_factor = failure_factor(input.failure_rate_pct);
    let production_cost =
        (material_cost + depreciation_cost + electricity_cost + input.extra_fixed_cost)
            * failure_factor;
    tracing::debug!(part = %input.name, production_cost, "production cost computed");

    let price_with_margin = production_cost * (1.0 + input.profit_margin_pct / 100.0);

    let markup = markup_multiplier(
        input.tax_pct,
        input.online_sale_fee_pct,
        input.profit_margin_pct,
    );
    let final_price = production_cost * markup;

    PriceBreakdown {
        name: input.name.clone(),
        markup,
        material_cost,
        depreciation_cost,
        electricity_cost,
        extra_fixed_cost: input.extra_fixed_cost,
        maintenance_value,
        depreciation_per_hour,
        total_hours,
        energy_consumed_kwh,
        failure_factor,
        production_cost,
        price_with_margin,
        final_price,
        failure_rate_pct: input.failure_rate_pct,
        tax_pct: input.tax_pct,
        online_sale_fee_pct: input.online_sale_fee_pct,
        profit_margin_pct: input.profit_margin_pct,
    }
}
