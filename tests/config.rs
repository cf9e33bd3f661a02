use std::fs;
use std::path::PathBuf;

use print_pricing_toolbox::config::{self, Config};
use print_pricing_toolbox::pricing::PricingInput;

fn temp_config_path(tag: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "print_pricing_toolbox_{tag}_{}",
        std::process::id()
    ));
    fs::create_dir_all(&dir).expect("create temp dir");
    dir.join("config.toml")
}

#[test]
fn missing_file_writes_defaults() {
    let path = temp_config_path("missing");
    let _ = fs::remove_file(&path);
    let cfg = config::load_or_default_from(&path).expect("load");
    assert!(path.exists());
    assert_eq!(cfg.language, "auto");
    assert_eq!(cfg.currency_symbol, "R$");
    assert_eq!(cfg.defaults.weight_grams, 200.0);
    let _ = fs::remove_file(&path);
}

#[test]
fn saved_changes_round_trip() {
    let path = temp_config_path("roundtrip");
    let _ = fs::remove_file(&path);
    let mut cfg = config::load_or_default_from(&path).expect("load");
    cfg.currency_symbol = "€".to_string();
    cfg.defaults.printer_power_watts = 250.0;
    cfg.defaults.name = "tile".to_string();
    cfg.save().expect("save");

    let reloaded = config::load_or_default_from(&path).expect("reload");
    assert_eq!(reloaded.currency_symbol, "€");
    assert_eq!(reloaded.defaults, cfg.defaults);
    let _ = fs::remove_file(&path);
}

#[test]
fn partial_file_falls_back_per_field() {
    let path = temp_config_path("partial");
    fs::write(&path, "language = \"pt-br\"\n[defaults]\ntax_pct = 12.0\n").expect("write");
    let cfg = config::load_or_default_from(&path).expect("load");
    assert_eq!(cfg.language, "pt-br");
    assert_eq!(cfg.currency_symbol, Config::default().currency_symbol);
    assert_eq!(cfg.defaults.tax_pct, 12.0);
    assert_eq!(cfg.defaults.online_sale_fee_pct, 20.0);
    let _ = fs::remove_file(&path);
}

#[test]
fn broken_file_is_a_parse_error() {
    let path = temp_config_path("broken");
    fs::write(&path, "language = [").expect("write");
    let err = config::load_or_default_from(&path).unwrap_err();
    assert!(matches!(err, config::ConfigError::Parse(_)), "{err}");
    let _ = fs::remove_file(&path);
}

#[test]
fn out_of_range_default_falls_back_to_built_in() {
    let path = temp_config_path("out_of_range");
    fs::write(
        &path,
        "[defaults]\ntax_pct = 200.0\nminutes = 90.0\nweight_grams = 350.0\n",
    )
    .expect("write");
    let cfg = config::load_or_default_from(&path).expect("load");
    assert_eq!(cfg.defaults.tax_pct, 8.0);
    assert_eq!(cfg.defaults.minutes, 30.0);
    assert_eq!(cfg.defaults.weight_grams, 350.0);
    let _ = fs::remove_file(&path);
}

#[test]
fn combined_rates_at_100_fall_back_together() {
    let path = temp_config_path("combined_rates");
    fs::write(
        &path,
        "[defaults]\ntax_pct = 50.0\nonline_sale_fee_pct = 30.0\nprofit_margin_pct = 25.0\n",
    )
    .expect("write");
    let cfg = config::load_or_default_from(&path).expect("load");
    assert_eq!(cfg.defaults.tax_pct, 8.0);
    assert_eq!(cfg.defaults.online_sale_fee_pct, 20.0);
    assert_eq!(cfg.defaults.profit_margin_pct, 50.0);
    assert!(print_pricing_toolbox::pricing::quote(&PricingInput {
        name: "check".to_string(),
        ..cfg.defaults.clone()
    })
    .is_ok());
    let _ = fs::remove_file(&path);
}
