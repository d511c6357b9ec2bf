//! Tests for parameter validation: conversion with parameter-prefixed
//! errors plus inclusive range checking.

use unitval::{Error, parameter_value};

#[test]
fn valid_parameter_converts_and_wraps() {
    let v = parameter_value("size", "12KiB", "storage-size", None, None).unwrap();
    assert_eq!(v.value(), 12.0 * 1024.0);
    assert_eq!(v.to_string(), "12KiB");
}

#[test]
fn bounds_are_inclusive() {
    let v = parameter_value("size", "8KiB", "storage-size", Some("7KiB"), Some("8KiB")).unwrap();
    assert_eq!(v.value(), 8192.0);

    let v = parameter_value("size", "7KiB", "storage-size", Some("7KiB"), Some("8KiB")).unwrap();
    assert_eq!(v.value(), 7168.0);
}

#[test]
fn out_of_range_message_is_exact() {
    let err =
        parameter_value("size", "8KiB", "storage-size", Some("8.1KiB"), Some("9KiB")).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Parameter 'size': value 8KiB is out of valid range: [8.1KiB..9KiB]"
    );
    assert!(matches!(err, Error::OutOfRange { .. }));
    assert_eq!(err.exit_code(), 2);
}

#[test]
fn absent_bounds_render_as_empty_sides() {
    let err = parameter_value("size", "10KiB", "storage-size", None, Some("9KiB")).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Parameter 'size': value 10KiB is out of valid range: [..9KiB]"
    );

    let err = parameter_value("size", "1KiB", "storage-size", Some("2KiB"), None).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Parameter 'size': value 1KiB is out of valid range: [2KiB..]"
    );
}

#[test]
fn no_bounds_means_unbounded_not_zero() {
    // A negative value with no bounds passes; absence of min is not "min 0"
    let v = parameter_value("offset", "-1KiB", "storage-size", None, None).unwrap();
    assert_eq!(v.value(), -1024.0);
}

#[test]
fn conversion_failure_carries_the_parameter_name() {
    let err = parameter_value("size", "12k", "storage-size", None, None).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Parameter 'size': couldn't convert '12k' as storage-size: examples: 1, 2B, 1.5KiB, 2MB, 4GiB, 1TB"
    );

    let err = parameter_value("size", "1KiB", "bogus", None, None).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Parameter 'size': couldn't convert '1KiB' as bogus: possible interpretations: storage-size, time"
    );
}

#[test]
fn bound_conversion_failures_have_no_parameter_prefix() {
    let err =
        parameter_value("size", "8KiB", "storage-size", Some("not-a-size"), None).unwrap_err();
    assert_eq!(
        err.to_string(),
        "couldn't convert 'not-a-size' as storage-size: examples: 1, 2B, 1.5KiB, 2MB, 4GiB, 1TB"
    );
}

#[test]
fn time_parameters_validate_too() {
    let v = parameter_value("timeout", "90s", "time", Some("1min"), Some("2min")).unwrap();
    assert_eq!(v.value(), 90.0);

    let err = parameter_value("timeout", "3min", "time", Some("1min"), Some("2min")).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Parameter 'timeout': value 3min is out of valid range: [1min..2min]"
    );
}
