use coinplan_selection::config::{ensure_config_exists, Config, SelectionConfig};
use coinplan_selection::logging::LogLevel;
use coinplan_selection::types::{ScriptType, SelectionTarget};
use coinplan_selection::utxo_selection::{CoinSelector, SortingOrder};
use tempfile::tempdir;

mod test_helpers;
use test_helpers::p2pkh_outputs;

#[test]
fn test_empty_config_uses_defaults() {
    let config = Config::from_toml_str("").unwrap();

    assert_eq!(config, Config::default());
    assert_eq!(config.selection.fee_per_byte, 1);
    assert_eq!(config.selection.sorting_order, SortingOrder::AscentDraw);
    assert_eq!(config.selection.change_output_type, ScriptType::P2pkh);
    assert_eq!(config.logging.level, LogLevel::Info);
    assert!(config.validate().is_ok());
}

#[test]
fn test_partial_config_keeps_other_defaults() {
    let config = Config::from_toml_str(
        r#"
        [selection]
        sorting_order = "descent_draw"
        change_output_type = "p2wpkh"

        [logging]
        level = "Debug"
        json_format = true
        "#,
    )
    .unwrap();

    assert_eq!(config.selection.sorting_order, SortingOrder::DescentDraw);
    assert_eq!(config.selection.change_output_type, ScriptType::P2wpkh);
    assert_eq!(config.selection.max_fee_per_byte, 10_000);
    assert_eq!(config.logging.level, LogLevel::Debug);
    assert!(config.logging.json_format);
    assert!(config.logging.include_timestamps);
}

#[test]
fn test_invalid_values_are_rejected() {
    assert!(Config::from_toml_str("[selection]\nsorting_order = \"random\"").is_err());
    assert!(Config::from_toml_str("[selection]\nchange_output_type = \"p2pk\"").is_err());
    assert!(Config::from_toml_str("not toml at all [").is_err());
}

#[test]
fn test_validate_rejects_fee_above_maximum() {
    let mut config = Config::default();
    config.selection.fee_per_byte = 20_000;
    assert!(config.validate().is_err());

    config.selection.fee_per_byte = 1;
    config.selection.max_fee_per_byte = 0;
    assert!(config.validate().is_err());
}

#[test]
fn test_save_and_load_round_trip() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("coinplan.toml");

    let mut config = Config::default();
    config.selection.fee_per_byte = 42;
    config.selection.sorting_order = SortingOrder::DescentDraw;
    config.logging.log_file = Some("coinplan.log".to_string());

    config.save(&path).unwrap();
    let loaded = Config::load(&path).unwrap();

    assert_eq!(loaded, config);
}

#[test]
fn test_load_missing_file_fails() {
    let dir = tempdir().unwrap();
    assert!(Config::load(dir.path().join("missing.toml")).is_err());
}

#[test]
fn test_ensure_config_exists_creates_default_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nested").join("coinplan.toml");

    ensure_config_exists(&path).unwrap();
    assert!(path.exists());
    assert_eq!(Config::load(&path).unwrap(), Config::default());

    // An existing file is left alone
    let mut custom = Config::default();
    custom.selection.fee_per_byte = 7;
    custom.save(&path).unwrap();
    ensure_config_exists(&path).unwrap();
    assert_eq!(Config::load(&path).unwrap().selection.fee_per_byte, 7);
}

#[test]
fn test_inputs_for_uses_configured_defaults() {
    let selection = SelectionConfig {
        fee_per_byte: 55,
        sorting_order: SortingOrder::DescentDraw,
        ..SelectionConfig::default()
    };

    let inputs = selection.inputs_for(
        SelectionTarget::new(100_000, ScriptType::P2pkh),
        p2pkh_outputs(&[1, 20_000, 0, 0, 300_000, 50_000, 30_000]),
    );
    assert_eq!(inputs.fee_per_byte, 55);
    assert_eq!(inputs.sorting_strategy, SortingOrder::DescentDraw);

    let result = CoinSelector::new().select(&inputs).unwrap();
    assert_eq!(result.absolute_fee, 12_430);
}
