//! Value-set validators
//!
//! Exact-value and enumerated-set membership. Matching uses identity-style
//! equality ([`ValueExt::strict_eq`]): scalars compare by value, composite
//! candidates never match.

use serde_json::Value;

use crate::core::{ValueExt, Validator};

fn join_candidates(candidates: &[Value]) -> String {
    candidates
        .iter()
        .map(Value::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

// ==================== LITERAL ====================

/// Validator that accepts exactly one candidate value.
///
/// # Examples
///
/// ```rust
/// use typeguard::{Validator, literal};
/// use serde_json::json;
///
/// let v = literal(json!("on"));
/// assert!(v.test(&json!("on")));
/// assert!(!v.test(&json!("off")));
/// ```
#[derive(Debug, Clone)]
pub struct Literal {
    expected: Value,
}

impl Literal {
    pub fn new(expected: impl Into<Value>) -> Self {
        Self {
            expected: expected.into(),
        }
    }

    /// The candidate value.
    pub fn expected(&self) -> &Value {
        &self.expected
    }
}

impl Validator for Literal {
    fn test(&self, value: &Value) -> bool {
        value.strict_eq(&self.expected)
    }

    fn describe_failure(&self, value: &Value) -> String {
        format!("Expected {}, got {}", self.expected, value)
    }
}

/// Creates a [`Literal`] validator for `expected`.
pub fn literal(expected: impl Into<Value>) -> Literal {
    Literal::new(expected)
}

// ==================== ONE OF ====================

/// Validator that accepts any value from an enumerated candidate list.
#[derive(Debug, Clone)]
pub struct OneOf {
    candidates: Vec<Value>,
}

impl OneOf {
    pub fn new(candidates: Vec<Value>) -> Self {
        Self { candidates }
    }

    /// The candidate values.
    pub fn candidates(&self) -> &[Value] {
        &self.candidates
    }
}

impl Validator for OneOf {
    fn test(&self, value: &Value) -> bool {
        self.candidates.iter().any(|c| value.strict_eq(c))
    }

    fn describe_failure(&self, value: &Value) -> String {
        format!(
            "Expected one of {}, got {}",
            join_candidates(&self.candidates),
            value
        )
    }
}

/// Creates a [`OneOf`] validator over `candidates`.
pub fn one_of<I, T>(candidates: I) -> OneOf
where
    I: IntoIterator<Item = T>,
    T: Into<Value>,
{
    OneOf::new(candidates.into_iter().map(Into::into).collect())
}

// ==================== ONE OF TYPE ====================

/// Validator that accepts any value from an enumerated candidate list,
/// phrasing failures through a type validator.
///
/// The type validator is never consulted for the membership decision; it
/// only shapes the failure message. Membership remains the same equality
/// scan as [`OneOf`].
#[derive(Debug, Clone)]
pub struct OneOfType<V> {
    type_validator: V,
    candidates: Vec<Value>,
}

impl<V> OneOfType<V> {
    pub fn new(type_validator: V, candidates: Vec<Value>) -> Self {
        Self {
            type_validator,
            candidates,
        }
    }

    /// The candidate values.
    pub fn candidates(&self) -> &[Value] {
        &self.candidates
    }
}

impl<V: Validator> Validator for OneOfType<V> {
    fn test(&self, value: &Value) -> bool {
        self.candidates.iter().any(|c| value.strict_eq(c))
    }

    fn describe_failure(&self, value: &Value) -> String {
        format!(
            "Expected one of {}, {}",
            join_candidates(&self.candidates),
            self.type_validator.describe_failure(value)
        )
    }
}

/// Creates a [`OneOfType`] validator over `candidates`, with failures
/// phrased through `type_validator`.
pub fn one_of_type<V, I, T>(type_validator: V, candidates: I) -> OneOfType<V>
where
    V: Validator,
    I: IntoIterator<Item = T>,
    T: Into<Value>,
{
    OneOfType::new(
        type_validator,
        candidates.into_iter().map(Into::into).collect(),
    )
}
