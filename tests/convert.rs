//! Tests for the conversion facade and registry: lookup, error paths, and
//! message construction.

use std::str::FromStr;
use unitval::{
    ConversionOptions, Error, Interpretation, Registry, convert, convert_or_error,
    convert_or_usage_error, create_value, format_value,
};

#[test]
fn unknown_interpretation_is_none() {
    assert_eq!(convert(1, "bogus"), None);
    assert_eq!(format_value(42.0, "bogus"), None);
}

#[test]
fn unknown_interpretation_error_lists_known_names() {
    let err = convert_or_error(1, "bogus").unwrap_err();
    assert_eq!(
        err.to_string(),
        "couldn't convert '1' as bogus: possible interpretations: storage-size, time"
    );
}

#[test]
fn unparsable_error_quotes_examples() {
    let err = convert_or_error("12k", "storage-size").unwrap_err();
    assert_eq!(
        err.to_string(),
        "couldn't convert '12k' as storage-size: examples: 1, 2B, 1.5KiB, 2MB, 4GiB, 1TB"
    );

    let err = convert_or_error("++wrong-value++", "time").unwrap_err();
    assert_eq!(
        err.to_string(),
        "couldn't convert '++wrong-value++' as time: examples: 1, 2.5s, 4ms, 30min, 2h, 1:02:07.5"
    );
}

#[test]
fn usage_errors_wrap_the_same_message() {
    assert_eq!(convert_or_usage_error("6 KiB", "storage-size").unwrap(), 6144.0);

    let err = convert_or_usage_error("12k", "storage-size").unwrap_err();
    assert!(matches!(err, Error::Usage(_)));
    assert_eq!(err.exit_code(), 2);
    assert_eq!(
        err.to_string(),
        "couldn't convert '12k' as storage-size: examples: 1, 2B, 1.5KiB, 2MB, 4GiB, 1TB"
    );

    // Internal-class errors keep exit code 1
    let err = convert_or_error("12k", "storage-size").unwrap_err();
    assert_eq!(err.exit_code(), 1);
}

#[test]
fn create_value_binds_the_matched_converter() {
    let v = create_value("12KiB", "storage-size").unwrap();
    assert_eq!(v.value(), 12.0 * 1024.0);
    assert_eq!(v.to_string(), "12KiB");
    assert_eq!(v.interpretation(), Interpretation::StorageSize);

    assert!(create_value("1KiB", "bogus").is_err());
}

#[test]
fn registry_lookup() {
    let registry = Registry::new();
    assert!(registry.lookup("storage-size").is_some());
    assert!(registry.lookup("time").is_some());
    assert!(registry.lookup("bogus").is_none());
    assert_eq!(registry.interpretation_names(), "storage-size, time");
    assert_eq!(registry.converters().count(), Interpretation::all().len());
}

#[test]
fn registry_options_control_bare_numbers() {
    let strict = Registry::with_options(ConversionOptions {
        allow_bare_number: false,
    });
    assert_eq!(strict.convert("200", "storage-size"), None);
    assert_eq!(strict.convert("200B", "storage-size"), Some(200.0));
    // Durations have an unambiguous base unit, so bare numerals stay valid
    assert_eq!(strict.convert("200", "time"), Some(200.0));
    // Pre-converted numbers are canonical and never re-parsed
    assert_eq!(strict.convert(200, "storage-size"), Some(200.0));
}

#[test]
fn interpretation_round_trips_through_names() {
    for interpretation in Interpretation::all() {
        assert_eq!(
            Interpretation::from_str(interpretation.as_str()).unwrap(),
            interpretation
        );
    }
    assert!(Interpretation::from_str("bogus").is_err());
    assert_eq!(Interpretation::StorageSize.to_string(), "storage-size");
}

#[test]
fn converter_parse_never_errors() {
    let registry = Registry::new();
    let converter = registry.lookup("storage-size").unwrap();
    assert_eq!(converter.parse("nonsense".into()), None);
    assert_eq!(converter.parse("3KiB".into()), Some(3072.0));
    assert_eq!(converter.examples(), "1, 2B, 1.5KiB, 2MB, 4GiB, 1TB");
}
