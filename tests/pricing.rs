//! 판매가 계산 회귀 테스트. 기본 폼 값(200 g, 7 h 30 min ...)을 기준 시나리오로 쓴다.
use print_pricing_toolbox::pricing::{
    self, compute_price, markup_multiplier, PricingError, PricingInput,
};

fn assert_close(label: &str, actual: f64, expected: f64, rel_tol: f64) {
    let denom = expected.abs().max(1.0);
    let diff = (actual - expected).abs();
    assert!(
        diff <= rel_tol * denom,
        "{label} expected {expected:.9} got {actual:.9} (diff {diff:.3e}, tol {rel_tol})"
    );
}

fn reference_input() -> PricingInput {
    PricingInput {
        name: "bracket".to_string(),
        ..PricingInput::default()
    }
}

#[test]
fn reference_scenario_intermediate_values() {
    let b = compute_price(&reference_input());
    assert_close("total_hours", b.total_hours, 7.5, 1e-9);
    assert_close("material_cost", b.material_cost, 19.98, 1e-9);
    assert_close("maintenance_value", b.maintenance_value, 407.5, 1e-9);
    assert_close("depreciation_per_hour", b.depreciation_per_hour, 0.4075, 1e-9);
    assert_close("depreciation_cost", b.depreciation_cost, 3.05625, 1e-9);
    assert_close("energy_consumed_kwh", b.energy_consumed_kwh, 3.0, 1e-9);
    assert_close("electricity_cost", b.electricity_cost, 2.7, 1e-9);
    assert_close("failure_factor", b.failure_factor, 1.15, 1e-12);
    // (19.98 + 3.05625 + 2.7 + 0) * 1.15
    assert_close("production_cost", b.production_cost, 29.596_687_5, 1e-9);
    assert_close("price_with_margin", b.price_with_margin, 44.395_031_25, 1e-9);
    // 8 + 20 + 50 = 78 -> 1 / 0.22
    assert_close("markup", b.markup, 1.0 / 0.22, 1e-9);
    assert_close("final_price", b.final_price, 134.530_397_727, 1e-9);
}

#[test]
fn echoes_rates_and_name() {
    let b = compute_price(&reference_input());
    assert_eq!(b.name, "bracket");
    assert_eq!(b.failure_rate_pct, 15.0);
    assert_eq!(b.tax_pct, 8.0);
    assert_eq!(b.online_sale_fee_pct, 20.0);
    assert_eq!(b.profit_margin_pct, 50.0);
    assert_eq!(b.extra_fixed_cost, 0.0);
}

#[test]
fn same_input_gives_bit_identical_output() {
    let input = reference_input();
    let first = compute_price(&input);
    let second = compute_price(&input);
    assert_eq!(first.final_price.to_bits(), second.final_price.to_bits());
    assert_eq!(first.markup.to_bits(), second.markup.to_bits());
    assert_eq!(first, second);
}

#[test]
fn baseline_without_failures_margin_or_fixed_cost() {
    let input = PricingInput {
        failure_rate_pct: 0.0,
        profit_margin_pct: 0.0,
        extra_fixed_cost: 0.0,
        ..reference_input()
    };
    let b = compute_price(&input);
    assert_eq!(b.failure_factor, 1.0);
    assert_eq!(
        b.production_cost,
        b.material_cost + b.depreciation_cost + b.electricity_cost
    );
    assert_eq!(b.price_with_margin, b.production_cost);
}

#[test]
fn final_price_is_production_cost_times_markup() {
    let b = compute_price(&reference_input());
    assert_eq!(b.final_price, b.production_cost * b.markup);
    assert_eq!(b.markup, 1.0 / (1.0 - (8.0 + 20.0 + 50.0) / 100.0));
    assert_eq!(b.markup, markup_multiplier(8.0, 20.0, 50.0));
}

#[test]
fn markup_is_not_additive() {
    let b = compute_price(&reference_input());
    let additive = b.production_cost * (1.0 + 0.08 + 0.20 + 0.50);
    assert!(b.final_price > additive * 2.0);
}

#[test]
fn doubling_weight_doubles_material_cost() {
    let base = compute_price(&reference_input());
    let doubled = compute_price(&PricingInput {
        weight_grams: 400.0,
        ..reference_input()
    });
    assert_close(
        "material_cost",
        doubled.material_cost,
        base.material_cost * 2.0,
        1e-12,
    );
    assert_eq!(doubled.depreciation_cost, base.depreciation_cost);
    assert_eq!(doubled.electricity_cost, base.electricity_cost);
}

#[test]
fn extra_fixed_cost_is_inflated_by_failure_factor() {
    let base = compute_price(&reference_input());
    let with_fixed = compute_price(&PricingInput {
        extra_fixed_cost: 10.0,
        ..reference_input()
    });
    assert_close(
        "production_cost delta",
        with_fixed.production_cost - base.production_cost,
        10.0 * 1.15,
        1e-9,
    );
}

#[test]
fn zero_power_means_no_electricity() {
    let b = compute_price(&PricingInput {
        printer_power_watts: 0.0,
        ..reference_input()
    });
    assert_eq!(b.energy_consumed_kwh, 0.0);
    assert_eq!(b.electricity_cost, 0.0);
}

#[test]
fn quote_accepts_reference_scenario() {
    let b = pricing::quote(&reference_input()).expect("valid quote");
    assert!(b.final_price.is_finite() && b.final_price > 0.0);
}

#[test]
fn quote_flags_rates_over_one_hundred() {
    let input = PricingInput {
        tax_pct: 50.0,
        online_sale_fee_pct: 30.0,
        profit_margin_pct: 25.0,
        ..reference_input()
    };
    let raw = compute_price(&input);
    assert!(raw.markup < 0.0, "markup={}", raw.markup);
    match pricing::quote(&input) {
        Err(PricingError::DegenerateMarkup { combined_pct }) => {
            assert_close("combined_pct", combined_pct, 105.0, 1e-12)
        }
        other => panic!("expected degenerate markup, got {other:?}"),
    }
}

#[test]
fn quote_flags_rates_exactly_one_hundred() {
    let input = PricingInput {
        tax_pct: 30.0,
        online_sale_fee_pct: 20.0,
        profit_margin_pct: 50.0,
        ..reference_input()
    };
    assert!(compute_price(&input).markup.is_infinite());
    assert!(matches!(
        pricing::quote(&input),
        Err(PricingError::DegenerateMarkup { .. })
    ));
}
