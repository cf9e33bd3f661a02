use print_pricing_toolbox::pricing::validation::{
    restore_invalid_fields, FieldErrorKind, ValidationError,
};
use print_pricing_toolbox::pricing::{
    self, validate_form, validate_input, Field, PricingError, PricingForm, PricingInput,
};

fn filled_form() -> PricingForm {
    let mut form = PricingForm::from_input(&PricingInput::default());
    form.set(Field::Name, "Suporte de parede");
    form
}

#[test]
fn default_form_with_name_validates() {
    let input = validate_form(&filled_form()).expect("valid form");
    assert_eq!(input.name, "Suporte de parede");
    assert_eq!(input.weight_grams, 200.0);
    assert_eq!(input.material_cost_per_kg, 99.9);
    assert_eq!(input.minutes, 30.0);
}

#[test]
fn empty_name_is_required() {
    let mut form = filled_form();
    form.set(Field::Name, "   ");
    let errors = validate_form(&form).unwrap_err();
    assert_eq!(errors.for_field(Field::Name), Some(&FieldErrorKind::Missing));
    assert_eq!(errors.errors.len(), 1);
}

#[test]
fn reports_every_bad_field_in_form_order() {
    let mut form = filled_form();
    form.set(Field::WeightGrams, "0.5");
    form.set(Field::Minutes, "60");
    form.set(Field::EnergyCostPerKwh, "abc");
    form.set(Field::PrinterLifetimeHours, "");
    form.set(Field::TaxPct, "101");
    let errors = validate_form(&form).unwrap_err();

    let fields: Vec<Field> = errors
        .errors
        .iter()
        .filter_map(|e| match e {
            ValidationError::Field { field, .. } => Some(*field),
            _ => None,
        })
        .collect();
    assert_eq!(
        fields,
        vec![
            Field::WeightGrams,
            Field::Minutes,
            Field::EnergyCostPerKwh,
            Field::PrinterLifetimeHours,
            Field::TaxPct,
        ]
    );
    assert_eq!(
        errors.for_field(Field::WeightGrams),
        Some(&FieldErrorKind::BelowMinimum { min: 1.0 })
    );
    assert_eq!(
        errors.for_field(Field::Minutes),
        Some(&FieldErrorKind::AboveMaximum { max: 59.0 })
    );
    assert!(matches!(
        errors.for_field(Field::EnergyCostPerKwh),
        Some(FieldErrorKind::NotANumber(_))
    ));
    assert_eq!(
        errors.for_field(Field::PrinterLifetimeHours),
        Some(&FieldErrorKind::Missing)
    );
    // 세율 자체가 잘못되면 합계 검사는 건너뛴다.
    assert!(!errors.has_combined_rate_error());
}

#[test]
fn boundary_values_are_accepted() {
    let mut form = filled_form();
    form.set(Field::WeightGrams, "1");
    form.set(Field::MaterialCostPerKg, "0.01");
    form.set(Field::Hours, "0");
    form.set(Field::Minutes, "59");
    form.set(Field::PrinterPowerWatts, "0");
    form.set(Field::MaintenancePct, "100");
    form.set(Field::FailureRatePct, "100");
    form.set(Field::TaxPct, "0");
    form.set(Field::OnlineSaleFeePct, "0");
    form.set(Field::ProfitMarginPct, "99");
    assert!(validate_form(&form).is_ok());
}

#[test]
fn combined_rates_must_stay_below_one_hundred() {
    let mut form = filled_form();
    form.set(Field::TaxPct, "50");
    form.set(Field::OnlineSaleFeePct, "30");
    form.set(Field::ProfitMarginPct, "25");
    let errors = validate_form(&form).unwrap_err();
    assert_eq!(
        errors.errors,
        vec![ValidationError::CombinedRatesTooHigh { combined_pct: 105.0 }]
    );
}

#[test]
fn quote_form_surfaces_validation_errors() {
    let mut form = filled_form();
    form.set(Field::Hours, "-1");
    match pricing::quote_form(&form) {
        Err(PricingError::Invalid(errors)) => assert_eq!(
            errors.for_field(Field::Hours),
            Some(&FieldErrorKind::BelowMinimum { min: 0.0 })
        ),
        other => panic!("expected invalid input, got {other:?}"),
    }
}

#[test]
fn reset_restores_defaults() {
    let defaults = PricingInput::default();
    let mut form = filled_form();
    form.set(Field::WeightGrams, "999");
    form.reset(&defaults);
    assert_eq!(form.get(Field::WeightGrams), "200");
    assert_eq!(form.get(Field::Name), "");
}

#[test]
fn typed_input_uses_same_rules() {
    let mut input = PricingInput {
        name: "gear".to_string(),
        ..PricingInput::default()
    };
    assert!(validate_input(&input).is_ok());

    input.maintenance_pct = 120.0;
    input.energy_cost_per_kwh = f64::NAN;
    let errors = validate_input(&input).unwrap_err();
    assert_eq!(
        errors.for_field(Field::MaintenancePct),
        Some(&FieldErrorKind::AboveMaximum { max: 100.0 })
    );
    assert!(matches!(
        errors.for_field(Field::EnergyCostPerKwh),
        Some(FieldErrorKind::NotANumber(_))
    ));
}

#[test]
fn field_error_messages() {
    assert_eq!(FieldErrorKind::Missing.to_string(), "required");
    assert_eq!(
        FieldErrorKind::NotANumber("abc".to_string()).to_string(),
        "not a number: \"abc\""
    );
    assert_eq!(
        FieldErrorKind::BelowMinimum { min: 1.0 }.to_string(),
        "must be at least 1"
    );
    assert_eq!(
        FieldErrorKind::AboveMaximum { max: 59.0 }.to_string(),
        "must be at most 59"
    );
    let err = ValidationError::Field {
        field: Field::Minutes,
        kind: FieldErrorKind::AboveMaximum { max: 59.0 },
    };
    assert_eq!(err.to_string(), "minutes: must be at most 59");
}

#[test]
fn restore_keeps_valid_fields_and_empty_name() {
    let fallback = PricingInput::default();
    let mut input = PricingInput {
        weight_grams: 0.0,
        minutes: 75.0,
        printer_value: 2500.0,
        ..PricingInput::default()
    };
    let restored = restore_invalid_fields(&mut input, &fallback);
    assert_eq!(restored, vec![Field::WeightGrams, Field::Minutes]);
    assert_eq!(input.weight_grams, fallback.weight_grams);
    assert_eq!(input.minutes, fallback.minutes);
    assert_eq!(input.printer_value, 2500.0);
    assert!(input.name.is_empty());
}

#[test]
fn restore_resets_all_rates_when_sum_reaches_100() {
    let fallback = PricingInput::default();
    let mut input = PricingInput {
        tax_pct: 50.0,
        online_sale_fee_pct: 30.0,
        profit_margin_pct: 25.0,
        ..PricingInput::default()
    };
    let restored = restore_invalid_fields(&mut input, &fallback);
    assert_eq!(
        restored,
        vec![Field::TaxPct, Field::OnlineSaleFeePct, Field::ProfitMarginPct]
    );
    assert_eq!(input.tax_pct, 8.0);
    assert_eq!(input.online_sale_fee_pct, 20.0);
    assert_eq!(input.profit_margin_pct, 50.0);
    assert!(restore_invalid_fields(&mut input, &fallback).is_empty());
}
