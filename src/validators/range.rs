//! Numeric range refinements
//!
//! AND-compositions over an inner validator: the inner validator is always
//! evaluated first, then the numeric bound. Bounds are inclusive at both
//! ends. Non-numeric values are rejected, never panicked on.

use serde_json::Value;

use crate::core::Validator;

fn as_number(value: &Value) -> Option<f64> {
    value.as_f64()
}

// ==================== MIN ====================

/// Refines an inner validator with an inclusive lower bound.
///
/// # Examples
///
/// ```rust
/// use typeguard::{Validator, min, number};
/// use serde_json::json;
///
/// let v = min(number(), 0.0);
/// assert!(v.test(&json!(0)));
/// assert!(v.test(&json!(7.5)));
/// assert!(!v.test(&json!(-1)));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Min<V> {
    inner: V,
    bound: f64,
}

impl<V> Min<V> {
    pub fn new(inner: V, bound: f64) -> Self {
        Self { inner, bound }
    }
}

impl<V: Validator> Validator for Min<V> {
    fn test(&self, value: &Value) -> bool {
        self.inner.test(value) && as_number(value).is_some_and(|n| n >= self.bound)
    }

    fn describe_failure(&self, value: &Value) -> String {
        format!(
            "Expected {} >= {}, got {}",
            self.inner.describe_failure(value),
            self.bound,
            value
        )
    }

    fn accepts_missing(&self) -> bool {
        self.inner.accepts_missing()
    }
}

/// Creates a [`Min`] refinement over `inner`.
pub fn min<V: Validator>(inner: V, bound: f64) -> Min<V> {
    Min::new(inner, bound)
}

// ==================== MAX ====================

/// Refines an inner validator with an inclusive upper bound.
#[derive(Debug, Clone, Copy)]
pub struct Max<V> {
    inner: V,
    bound: f64,
}

impl<V> Max<V> {
    pub fn new(inner: V, bound: f64) -> Self {
        Self { inner, bound }
    }
}

impl<V: Validator> Validator for Max<V> {
    fn test(&self, value: &Value) -> bool {
        self.inner.test(value) && as_number(value).is_some_and(|n| n <= self.bound)
    }

    fn describe_failure(&self, value: &Value) -> String {
        format!(
            "Expected {} <= {}, got {}",
            self.inner.describe_failure(value),
            self.bound,
            value
        )
    }

    fn accepts_missing(&self) -> bool {
        self.inner.accepts_missing()
    }
}

/// Creates a [`Max`] refinement over `inner`.
pub fn max<V: Validator>(inner: V, bound: f64) -> Max<V> {
    Max::new(inner, bound)
}

// ==================== RANGE ====================

/// Refines an inner validator with inclusive bounds at both ends.
///
/// # Examples
///
/// ```rust
/// use typeguard::{Validator, number, range};
/// use serde_json::json;
///
/// let v = range(number(), 0.0, 10.0);
/// assert!(v.test(&json!(0)));
/// assert!(v.test(&json!(10)));
/// assert!(!v.test(&json!(11)));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Range<V> {
    inner: V,
    min: f64,
    max: f64,
}

impl<V> Range<V> {
    pub fn new(inner: V, min: f64, max: f64) -> Self {
        Self { inner, min, max }
    }
}

impl<V: Validator> Validator for Range<V> {
    fn test(&self, value: &Value) -> bool {
        self.inner.test(value)
            && as_number(value).is_some_and(|n| n >= self.min && n <= self.max)
    }

    fn describe_failure(&self, value: &Value) -> String {
        format!(
            "Expected {} >= {} && <= {}, got {}",
            self.inner.describe_failure(value),
            self.min,
            self.max,
            value
        )
    }

    fn accepts_missing(&self) -> bool {
        self.inner.accepts_missing()
    }
}

/// Creates a [`Range`] refinement over `inner`.
pub fn range<V: Validator>(inner: V, min: f64, max: f64) -> Range<V> {
    Range::new(inner, min, max)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validators::types::{integer, number};
    use serde_json::json;

    #[test]
    fn bounds_are_inclusive_both_ends() {
        let v = range(number(), 0.0, 10.0);
        assert!(v.test(&json!(0)));
        assert!(v.test(&json!(5)));
        assert!(v.test(&json!(10)));
        assert!(!v.test(&json!(-1)));
        assert!(!v.test(&json!(11)));
    }

    #[test]
    fn inner_validator_is_checked_first() {
        // 5 is within bounds but fails the inner integer check.
        let v = min(integer(), 0.0);
        assert!(v.test(&json!(5)));
        assert!(!v.test(&json!(5.5)));
        assert!(!v.test(&json!("5")));
    }

    #[test]
    fn non_numeric_values_are_rejected_not_panicked() {
        let v = max(number(), 10.0);
        assert!(!v.test(&json!("abc")));
        assert!(!v.test(&json!(null)));
        assert!(!v.test(&json!([1])));
    }

    #[test]
    fn messages_nest_the_inner_failure() {
        let v = min(number(), 0.0);
        assert_eq!(
            v.describe_failure(&json!(-1)),
            "Expected Expected number, got integer >= 0, got -1"
        );
        let v = range(number(), 0.0, 10.0);
        assert_eq!(
            v.describe_failure(&json!(11)),
            "Expected Expected number, got integer >= 0 && <= 10, got 11"
        );
    }
}
