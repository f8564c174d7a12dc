//! Extension helpers for inspecting `serde_json::Value`
//!
//! Every failure message in this crate is phrased in terms of a value's
//! kind ("Expected string, got integer"), so the kind taxonomy lives here
//! together with the equality and size helpers the validators share.

use serde_json::Value;
use std::fmt;

// ============================================================================
// VALUE KIND
// ============================================================================

/// The fundamental kind of a JSON value, as used in failure messages.
///
/// Integral and fractional numbers are distinguished so that the
/// `integer()` primitive can reject `5.5` with a meaningful message while
/// `number()` accepts both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Null,
    Boolean,
    Integer,
    Number,
    String,
    Array,
    Object,
}

impl ValueKind {
    /// Determines the kind of a value.
    #[must_use]
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => ValueKind::Null,
            Value::Bool(_) => ValueKind::Boolean,
            Value::Number(n) if n.is_i64() || n.is_u64() => ValueKind::Integer,
            Value::Number(_) => ValueKind::Number,
            Value::String(_) => ValueKind::String,
            Value::Array(_) => ValueKind::Array,
            Value::Object(_) => ValueKind::Object,
        }
    }

    /// The lowercase name used in failure messages.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ValueKind::Null => "null",
            ValueKind::Boolean => "boolean",
            ValueKind::Integer => "integer",
            ValueKind::Number => "number",
            ValueKind::String => "string",
            ValueKind::Array => "array",
            ValueKind::Object => "object",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// VALUE EXTENSIONS
// ============================================================================

/// Convenience methods on `Value` used throughout the validators.
pub trait ValueExt {
    /// The fundamental kind of this value.
    fn kind(&self) -> ValueKind;

    /// Identity-style equality against a candidate value.
    ///
    /// Scalars compare by value. Composite values (arrays, objects) never
    /// match: membership checks use identity semantics, not deep equality,
    /// and an owned JSON tree has no identity to share.
    ///
    /// Numbers compare by representation, matching the [`ValueKind`] split:
    /// the integer `42` and the float `42.0` are distinct values and do not
    /// match each other.
    fn strict_eq(&self, candidate: &Value) -> bool;

    /// The size of this value, if it has one: Unicode scalar values for
    /// strings, element count for arrays, `None` for everything else.
    fn size(&self) -> Option<usize>;
}

impl ValueExt for Value {
    fn kind(&self) -> ValueKind {
        ValueKind::of(self)
    }

    fn strict_eq(&self, candidate: &Value) -> bool {
        match (self, candidate) {
            (Value::Array(_) | Value::Object(_), _) => false,
            (_, Value::Array(_) | Value::Object(_)) => false,
            _ => self == candidate,
        }
    }

    fn size(&self) -> Option<usize> {
        match self {
            Value::String(s) => Some(s.chars().count()),
            Value::Array(items) => Some(items.len()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn kind_distinguishes_integers_from_floats() {
        assert_eq!(json!(5).kind(), ValueKind::Integer);
        assert_eq!(json!(-5).kind(), ValueKind::Integer);
        assert_eq!(json!(5.5).kind(), ValueKind::Number);
        assert_eq!(json!("5").kind(), ValueKind::String);
        assert_eq!(json!(null).kind(), ValueKind::Null);
    }

    #[test]
    fn strict_eq_matches_scalars_only() {
        assert!(json!(42).strict_eq(&json!(42)));
        assert!(json!("a").strict_eq(&json!("a")));
        assert!(!json!(42).strict_eq(&json!("42")));
        // Composites never match, even when structurally equal.
        assert!(!json!([1, 2]).strict_eq(&json!([1, 2])));
        assert!(!json!({"a": 1}).strict_eq(&json!({"a": 1})));
    }

    #[test]
    fn strict_eq_distinguishes_numeric_representations() {
        // The integer 42 and the float 42.0 are different values.
        assert!(!json!(42).strict_eq(&json!(42.0)));
        assert!(!json!(42.0).strict_eq(&json!(42)));
        assert!(json!(42.0).strict_eq(&json!(42.0)));
    }

    #[test]
    fn size_counts_chars_and_elements() {
        assert_eq!(json!("héllo").size(), Some(5));
        assert_eq!(json!([1, 2, 3]).size(), Some(3));
        assert_eq!(json!(7).size(), None);
        assert_eq!(json!(null).size(), None);
    }
}
