//! Optionality combinators
//!
//! Widen a validator to also accept `null` ([`Nullable`]) or an absent
//! object key ([`Undefinable`]). Absence only reifies inside an object
//! shape, so [`Undefinable`] signals it through
//! [`Validator::accepts_missing`] rather than through a sentinel value.

use serde_json::Value;

use crate::core::{ValueExt, Validator};

// ==================== NULLABLE ====================

/// Widens a validator to also accept `null`.
///
/// # Examples
///
/// ```rust
/// use typeguard::{Validator, nullable, string};
/// use serde_json::json;
///
/// let v = nullable(string());
/// assert!(v.test(&json!(null)));
/// assert!(v.test(&json!("hi")));
/// assert!(!v.test(&json!(42)));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Nullable<V> {
    inner: V,
}

impl<V> Nullable<V> {
    pub fn new(inner: V) -> Self {
        Self { inner }
    }

    /// Returns a reference to the inner validator.
    pub fn inner(&self) -> &V {
        &self.inner
    }
}

impl<V: Validator> Validator for Nullable<V> {
    fn test(&self, value: &Value) -> bool {
        value.is_null() || self.inner.test(value)
    }

    fn describe_failure(&self, value: &Value) -> String {
        format!(
            "Expected null or {}, got {}",
            self.inner.describe_failure(value),
            value.kind()
        )
    }

    fn accepts_missing(&self) -> bool {
        self.inner.accepts_missing()
    }
}

/// Creates a [`Nullable`] combinator around `inner`.
pub fn nullable<V: Validator>(inner: V) -> Nullable<V> {
    Nullable::new(inner)
}

// ==================== UNDEFINABLE ====================

/// Widens a validator to also accept an absent object key.
///
/// A present value must still satisfy the inner validator; absence is
/// reported to [`ObjectShape`](crate::validators::structural::ObjectShape)
/// via `accepts_missing`.
///
/// # Examples
///
/// ```rust
/// use typeguard::{Validator, object, string, undefinable};
/// use serde_json::json;
///
/// let v = object().field("nickname", undefinable(string()));
/// assert!(v.test(&json!({})));
/// assert!(v.test(&json!({"nickname": "Al"})));
/// assert!(!v.test(&json!({"nickname": 42})));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Undefinable<V> {
    inner: V,
}

impl<V> Undefinable<V> {
    pub fn new(inner: V) -> Self {
        Self { inner }
    }

    /// Returns a reference to the inner validator.
    pub fn inner(&self) -> &V {
        &self.inner
    }
}

impl<V: Validator> Validator for Undefinable<V> {
    fn test(&self, value: &Value) -> bool {
        self.inner.test(value)
    }

    fn describe_failure(&self, value: &Value) -> String {
        format!(
            "Expected missing or {}, got {}",
            self.inner.describe_failure(value),
            value.kind()
        )
    }

    fn accepts_missing(&self) -> bool {
        true
    }
}

/// Creates an [`Undefinable`] combinator around `inner`.
pub fn undefinable<V: Validator>(inner: V) -> Undefinable<V> {
    Undefinable::new(inner)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validators::types::{number, string};
    use serde_json::json;

    #[test]
    fn nullable_accepts_null_and_inner() {
        let v = nullable(string());
        assert!(v.test(&json!(null)));
        assert!(v.test(&json!("a")));
        assert!(!v.test(&json!(1)));
        assert!(!v.accepts_missing());
    }

    #[test]
    fn nullable_message_embeds_inner_message() {
        let v = nullable(number());
        assert_eq!(
            v.describe_failure(&json!("x")),
            "Expected null or Expected number, got string, got string"
        );
    }

    #[test]
    fn undefinable_accepts_absence_not_null() {
        let v = undefinable(string());
        assert!(v.accepts_missing());
        assert!(v.test(&json!("a")));
        assert!(!v.test(&json!(null)));
    }
}
