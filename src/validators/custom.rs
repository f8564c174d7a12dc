//! Custom validators built from plain functions
//!
//! The foundational constructor every other validator in this crate could
//! be expressed through: pair an arbitrary membership predicate with a
//! failure describer and the result is a full [`Validator`], composable
//! with every combinator.

use serde_json::Value;

use crate::core::Validator;

/// Validator wrapping a membership predicate and a failure describer.
///
/// Neither function is inspected or checked at construction time; the
/// predicate is trusted to be pure and panic-free.
///
/// # Examples
///
/// ```rust
/// use typeguard::{Validator, custom};
/// use serde_json::json;
///
/// let even = custom(
///     |v| v.as_i64().is_some_and(|n| n % 2 == 0),
///     |v| format!("Expected an even integer, got {v}"),
/// );
/// assert!(even.test(&json!(4)));
/// assert!(!even.test(&json!(5)));
/// ```
pub struct Custom<T, D> {
    test_fn: T,
    describe_fn: D,
}

impl<T, D> Custom<T, D>
where
    T: Fn(&Value) -> bool + Send + Sync,
    D: Fn(&Value) -> String + Send + Sync,
{
    pub fn new(test_fn: T, describe_fn: D) -> Self {
        Self {
            test_fn,
            describe_fn,
        }
    }
}

impl<T, D> Validator for Custom<T, D>
where
    T: Fn(&Value) -> bool + Send + Sync,
    D: Fn(&Value) -> String + Send + Sync,
{
    fn test(&self, value: &Value) -> bool {
        (self.test_fn)(value)
    }

    fn describe_failure(&self, value: &Value) -> String {
        (self.describe_fn)(value)
    }
}

/// Creates a [`Custom`] validator from a predicate and a failure describer.
pub fn custom<T, D>(test_fn: T, describe_fn: D) -> Custom<T, D>
where
    T: Fn(&Value) -> bool + Send + Sync,
    D: Fn(&Value) -> String + Send + Sync,
{
    Custom::new(test_fn, describe_fn)
}
