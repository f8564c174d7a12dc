//! Parse entry points
//!
//! Bare validator invocation never errors: failure is a boolean. These two
//! functions are the only place a `false` becomes a [`ValidationError`],
//! which then propagates to the caller with no retry or recovery.

use serde_json::Value;

use super::error::ValidationError;
use super::traits::Validator;

/// Validates `value` and returns it unchanged, now known to conform.
///
/// # Errors
///
/// Returns a [`ValidationError`] carrying the validator's failure
/// description when the value does not conform.
///
/// # Examples
///
/// ```rust
/// use typeguard::{parse, string};
/// use serde_json::json;
///
/// assert_eq!(parse(&string(), json!("hi")).unwrap(), json!("hi"));
/// assert!(parse(&string(), json!(42)).is_err());
/// ```
pub fn parse<V>(validator: &V, value: Value) -> Result<Value, ValidationError>
where
    V: Validator + ?Sized,
{
    if validator.test(&value) {
        Ok(value)
    } else {
        Err(ValidationError::new(validator.describe_failure(&value)))
    }
}

/// Borrowed variant of [`parse`] for values the caller does not own.
///
/// Identical semantics: the same reference is handed back on success.
///
/// # Errors
///
/// Returns a [`ValidationError`] carrying the validator's failure
/// description when the value does not conform.
pub fn parse_unknown<'a, V>(
    validator: &V,
    value: &'a Value,
) -> Result<&'a Value, ValidationError>
where
    V: Validator + ?Sized,
{
    if validator.test(value) {
        Ok(value)
    } else {
        Err(ValidationError::new(validator.describe_failure(value)))
    }
}
