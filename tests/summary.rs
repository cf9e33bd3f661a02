use print_pricing_toolbox::pricing::{compute_price, PriceSummary, PricingInput, PrintTime};

fn assert_close(label: &str, actual: f64, expected: f64, rel_tol: f64) {
    let denom = expected.abs().max(1.0);
    let diff = (actual - expected).abs();
    assert!(
        diff <= rel_tol * denom,
        "{label} expected {expected:.9} got {actual:.9}"
    );
}

#[test]
fn reference_summary_values() {
    let b = compute_price(&PricingInput::default());
    let s = PriceSummary::from_breakdown(&b);
    assert_close("tax_amount", s.tax_amount, 134.530_397_727 * 0.08, 1e-9);
    assert_close("fee_amount", s.fee_amount, 134.530_397_727 * 0.20, 1e-9);
    assert_close("production share", s.production_cost_share_pct, 22.0, 1e-9);
    assert_close("net_profit", s.net_profit, 67.265_198_864, 1e-9);
}

#[test]
fn net_profit_share_matches_margin() {
    for (tax, fee, margin) in [(8.0, 20.0, 50.0), (0.0, 0.0, 0.0), (12.5, 9.0, 30.0)] {
        let b = compute_price(&PricingInput {
            tax_pct: tax,
            online_sale_fee_pct: fee,
            profit_margin_pct: margin,
            ..PricingInput::default()
        });
        let s = PriceSummary::from_breakdown(&b);
        assert_close("net share", s.net_profit_share_pct, margin, 1e-9);
    }
}

#[test]
fn print_time_splits_hours_and_minutes() {
    assert_eq!(
        PrintTime::from_total_hours(7.5),
        PrintTime { hours: 7, minutes: 30 }
    );
    assert_eq!(
        PrintTime::from_total_hours(0.0),
        PrintTime { hours: 0, minutes: 0 }
    );
    // 2 h 59 min
    assert_eq!(
        PrintTime::from_total_hours(2.0 + 59.0 / 60.0),
        PrintTime { hours: 2, minutes: 59 }
    );
}
