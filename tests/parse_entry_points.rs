//! Tests for the parse entry points and error surface

use pretty_assertions::assert_eq;
use serde_json::json;
use typeguard::{
    ValidationError, Validator, array, literal, min, nullable, number, object, one_of,
    one_of_type, parse, parse_unknown, range_length, string,
};

#[test]
fn parse_returns_the_typed_value() {
    let validator = object()
        .field("name", range_length(string(), 1, 32))
        .field("age", nullable(min(number(), 0.0)));

    let value = json!({"name": "Al", "age": null});
    let parsed = parse(&validator, value.clone()).expect("conforming value");
    assert_eq!(parsed, value);
}

#[test]
fn parse_error_message_matches_describe_failure() {
    let validator = string();
    let err = parse(&validator, json!(true)).unwrap_err();
    assert_eq!(err.message(), "Expected string, got boolean");
    assert_eq!(err, ValidationError::new("Expected string, got boolean"));
}

#[test]
fn parse_unknown_borrows_the_value() {
    let validator = array(number());
    let value = json!([1, 2]);
    let parsed = parse_unknown(&validator, &value).expect("conforming value");
    assert!(std::ptr::eq(parsed, &value));

    let bad = json!(["1", 2]);
    let err = parse_unknown(&validator, &bad).unwrap_err();
    assert_eq!(err.message(), "Expected array, got array");
}

#[test]
fn parse_through_a_shared_validator() {
    let validator: typeguard::SharedValidator = std::sync::Arc::new(string());
    assert!(parse(&validator, json!("ok")).is_ok());
    assert!(parse(&validator, json!(0)).is_err());
}

#[test]
fn set_membership_failures_surface_candidates() {
    let err = parse(&one_of(["red", "green"]), json!("blue")).unwrap_err();
    assert_eq!(
        err.message(),
        "Expected one of \"red\", \"green\", got \"blue\""
    );

    let err = parse(&one_of_type(string(), ["red", "green"]), json!(7)).unwrap_err();
    assert_eq!(
        err.message(),
        "Expected one of \"red\", \"green\", Expected string, got integer"
    );

    let err = parse(&literal(json!(1)), json!(2)).unwrap_err();
    assert_eq!(err.message(), "Expected 1, got 2");
}

#[test]
fn repeated_parsing_is_idempotent() {
    let validator = nullable(min(number(), 0.0));
    for _ in 0..3 {
        assert!(parse(&validator, json!(5)).is_ok());
        assert!(parse(&validator, json!(null)).is_ok());
        assert!(parse(&validator, json!(-5)).is_err());
    }
}

#[test]
fn validators_are_shareable_across_threads() {
    let validator = std::sync::Arc::new(
        object().field("n", min(number(), 0.0)),
    );

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let validator = validator.clone();
            std::thread::spawn(move || {
                let value = json!({"n": i});
                assert!(validator.test(&value));
                assert!(!validator.test(&json!({"n": -1})));
            })
        })
        .collect();
    for handle in handles {
        handle.join().expect("validation thread");
    }
}
