//! Logical combinators
//!
//! Union (OR) and intersection (AND) over any number of child validators.
//! Children are shared by reference and evaluated in order; the order never
//! changes the truth value, only how the failure message reads.

use serde_json::Value;
use std::sync::Arc;

use crate::core::{SharedValidator, Validator};

fn join_failures(children: &[SharedValidator], value: &Value) -> String {
    children
        .iter()
        .map(|child| child.describe_failure(value))
        .collect::<Vec<_>>()
        .join(", ")
}

// ==================== UNION ====================

/// Validator that accepts a value accepted by at least one child.
///
/// Short-circuits on the first accepting child. The failure message joins
/// every child's failure text.
///
/// # Examples
///
/// ```rust
/// use typeguard::{Validator, ValidatorExt, number, string, union};
/// use serde_json::json;
///
/// let v = union(vec![string().boxed(), number().boxed()]);
/// assert!(v.test(&json!("a")));
/// assert!(v.test(&json!(1)));
/// assert!(!v.test(&json!(true)));
/// ```
#[derive(Clone)]
pub struct Union {
    children: Vec<SharedValidator>,
}

impl Union {
    #[must_use]
    pub fn new(children: Vec<SharedValidator>) -> Self {
        Self { children }
    }

    /// Adds another alternative to this union.
    #[must_use]
    pub fn or<V: Validator + 'static>(mut self, other: V) -> Self {
        self.children.push(Arc::new(other));
        self
    }

    /// The child validators.
    pub fn children(&self) -> &[SharedValidator] {
        &self.children
    }
}

impl Validator for Union {
    fn test(&self, value: &Value) -> bool {
        self.children.iter().any(|child| child.test(value))
    }

    fn describe_failure(&self, value: &Value) -> String {
        format!("Expected one of {}", join_failures(&self.children, value))
    }

    fn accepts_missing(&self) -> bool {
        self.children.iter().any(|child| child.accepts_missing())
    }
}

/// Creates a [`Union`] over `children`.
#[must_use]
pub fn union(children: Vec<SharedValidator>) -> Union {
    Union::new(children)
}

// ==================== INTERSECTION ====================

/// Validator that accepts a value accepted by every child.
///
/// Short-circuits on the first rejecting child. The failure message joins
/// every child's failure text.
///
/// # Examples
///
/// ```rust
/// use typeguard::{Validator, ValidatorExt, min, number};
/// use serde_json::json;
///
/// let v = number().and(min(number(), 0.0));
/// assert!(v.test(&json!(5)));
/// assert!(!v.test(&json!(-5)));
/// ```
#[derive(Clone)]
pub struct Intersection {
    children: Vec<SharedValidator>,
}

impl Intersection {
    #[must_use]
    pub fn new(children: Vec<SharedValidator>) -> Self {
        Self { children }
    }

    /// Adds another requirement to this intersection.
    #[must_use]
    pub fn and<V: Validator + 'static>(mut self, other: V) -> Self {
        self.children.push(Arc::new(other));
        self
    }

    /// The child validators.
    pub fn children(&self) -> &[SharedValidator] {
        &self.children
    }
}

impl Validator for Intersection {
    fn test(&self, value: &Value) -> bool {
        self.children.iter().all(|child| child.test(value))
    }

    fn describe_failure(&self, value: &Value) -> String {
        format!(
            "Expected intersection of {}",
            join_failures(&self.children, value)
        )
    }

    fn accepts_missing(&self) -> bool {
        !self.children.is_empty() && self.children.iter().all(|child| child.accepts_missing())
    }
}

/// Creates an [`Intersection`] over `children`.
#[must_use]
pub fn intersection(children: Vec<SharedValidator>) -> Intersection {
    Intersection::new(children)
}
