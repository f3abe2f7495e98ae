use numfmt_standard::{ConfigError, FormatConfig};

#[test]
fn test_decimal_digits_accept_full_range() {
    let mut config = FormatConfig::default();
    for digits in 0..=99 {
        config.set_currency_decimal_digits(digits).unwrap();
        assert_eq!(config.currency_decimal_digits(), digits);
    }
}

#[test]
fn test_decimal_digits_reject_and_retain() {
    let mut config = FormatConfig::default();
    config.set_currency_decimal_digits(7).unwrap();

    let err = config.set_currency_decimal_digits(100).unwrap_err();
    assert!(matches!(err, ConfigError::OutOfRange(_)));
    assert_eq!(config.currency_decimal_digits(), 7);

    assert!(config.set_number_decimal_digits(100).is_err());
    assert!(config.set_percent_decimal_digits(100).is_err());
}

#[test]
fn test_decimal_separator_must_not_be_empty() {
    let mut config = FormatConfig::default();
    let err = config.set_currency_decimal_separator("").unwrap_err();
    assert!(matches!(err, ConfigError::EmptyValue(_)));
    assert_eq!(config.currency_decimal_separator(), ".");

    config.set_currency_decimal_separator(",").unwrap();
    assert_eq!(config.currency_decimal_separator(), ",");
}

#[test]
fn test_group_separator_may_be_empty() {
    let mut config = FormatConfig::default();
    config.set_currency_group_separator("").unwrap();
    assert_eq!(config.currency_group_separator(), "");

    config.set_number_group_separator("\u{a0}").unwrap();
    assert_eq!(config.number_group_separator(), "\u{a0}");
}

#[test]
fn test_group_sizes_valid_shapes() {
    let mut config = FormatConfig::default();
    for sizes in [&[3][..], &[3, 2][..], &[0][..], &[3, 0][..]] {
        config.set_currency_group_sizes(sizes).unwrap();
        assert_eq!(config.currency_group_sizes(), sizes);
    }
}

#[test]
fn test_group_sizes_reject_and_retain() {
    let mut config = FormatConfig::default();
    config.set_currency_group_sizes(&[3, 2]).unwrap();

    let err = config.set_currency_group_sizes(&[3, 0, 2]).unwrap_err();
    assert!(matches!(err, ConfigError::GroupAfterZero(_)));
    assert_eq!(config.currency_group_sizes(), &[3, 2]);

    let err = config.set_currency_group_sizes(&[3, 10]).unwrap_err();
    assert!(matches!(err, ConfigError::OutOfRange(_)));
    assert_eq!(config.currency_group_sizes(), &[3, 2]);
}

#[test]
fn test_pattern_bounds() {
    let mut config = FormatConfig::default();

    config.set_currency_negative_pattern(15).unwrap();
    assert!(config.set_currency_negative_pattern(16).is_err());
    assert_eq!(config.currency_negative_pattern(), 15);

    config.set_currency_positive_pattern(3).unwrap();
    assert!(config.set_currency_positive_pattern(4).is_err());

    config.set_number_negative_pattern(4).unwrap();
    assert!(config.set_number_negative_pattern(5).is_err());

    config.set_percent_negative_pattern(11).unwrap();
    assert!(config.set_percent_negative_pattern(12).is_err());

    config.set_percent_positive_pattern(3).unwrap();
    assert!(config.set_percent_positive_pattern(4).is_err());
}

#[test]
fn test_setting_current_value_is_idempotent() {
    let mut config = FormatConfig::default();
    let before = config.clone();

    config
        .set_currency_decimal_digits(config.currency_decimal_digits())
        .unwrap();
    let separator = config.currency_decimal_separator().to_string();
    config.set_currency_decimal_separator(&separator).unwrap();
    let sizes = config.currency_group_sizes().to_vec();
    config.set_currency_group_sizes(&sizes).unwrap();
    config
        .set_currency_negative_pattern(config.currency_negative_pattern())
        .unwrap();

    assert_eq!(config, before);
}

#[test]
fn test_group_sizes_are_copied_from_caller() {
    let mut config = FormatConfig::default();
    let mut sizes = vec![3, 2];
    config.set_currency_group_sizes(&sizes).unwrap();

    sizes[0] = 9;
    assert_eq!(config.currency_group_sizes(), &[3, 2]);
}

#[test]
fn test_from_toml_full_table() {
    let config = FormatConfig::from_toml_str(
        r#"
        currency_decimal_digits = 0
        currency_decimal_separator = ","
        currency_group_separator = "."
        currency_group_sizes = [3, 0]
        currency_negative_pattern = 8
        currency_positive_pattern = 3
        currency_symbol = "kr"
        number_decimal_digits = 3
        number_decimal_separator = ","
        number_group_separator = " "
        number_group_sizes = [3]
        number_negative_pattern = 0
        percent_decimal_digits = 1
        percent_symbol = "pct"
        negative_sign = "!"
        nan_symbol = "not-a-number"
        "#,
    )
    .unwrap();

    assert_eq!(config.currency_decimal_digits(), 0);
    assert_eq!(config.currency_group_sizes(), &[3, 0]);
    assert_eq!(config.currency_negative_pattern(), 8);
    assert_eq!(config.currency_symbol(), "kr");
    assert_eq!(config.number_decimal_digits(), 3);
    assert_eq!(config.number_negative_pattern(), 0);
    assert_eq!(config.percent_symbol(), "pct");
    assert_eq!(config.negative_sign(), "!");
    assert_eq!(config.nan_symbol(), "not-a-number");
    // Untouched fields keep their defaults.
    assert_eq!(config.percent_positive_pattern(), 1);
    assert_eq!(config.positive_infinity_symbol(), "Infinity");
}

#[test]
fn test_from_toml_rejects_out_of_domain_values() {
    assert!(matches!(
        FormatConfig::from_toml_str("currency_decimal_digits = 100"),
        Err(ConfigError::OutOfRange(_))
    ));
    assert!(matches!(
        FormatConfig::from_toml_str("currency_decimal_digits = -1"),
        Err(ConfigError::Parse(_))
    ));
    assert!(matches!(
        FormatConfig::from_toml_str("currency_group_sizes = [3, 0, 2]"),
        Err(ConfigError::GroupAfterZero(_))
    ));
    assert!(matches!(
        FormatConfig::from_toml_str("number_decimal_separator = \"\""),
        Err(ConfigError::EmptyValue(_))
    ));
    assert!(matches!(
        FormatConfig::from_toml_str("not toml at all ["),
        Err(ConfigError::Parse(_))
    ));
}

#[test]
fn test_from_toml_ignores_unknown_keys() {
    let config = FormatConfig::from_toml_str(
        r#"
        some_future_field = 42
        number_decimal_digits = 4
        "#,
    )
    .unwrap();
    assert_eq!(config.number_decimal_digits(), 4);
}
