//! Structural validators
//!
//! Shape-based checks: an object with declared fields ([`ObjectShape`]) and
//! a homogeneous array ([`ArrayOf`]). Both short-circuit on the first
//! failing member and both report a constant, kind-level failure message —
//! which field or index failed is not surfaced.

use serde_json::Value;
use std::sync::Arc;

use crate::core::{SharedValidator, ValueExt, Validator};

// ==================== OBJECT SHAPE ====================

/// Validator that accepts objects whose declared fields all conform.
///
/// Width-permissive: keys present on the value but not declared in the
/// shape are never inspected. Declared keys missing from the value are
/// accepted only when the field validator reports
/// [`accepts_missing`](Validator::accepts_missing).
///
/// # Examples
///
/// ```rust
/// use typeguard::{Validator, object, string};
/// use serde_json::json;
///
/// let v = object().field("name", string());
/// assert!(v.test(&json!({"name": "Al", "extra": 1})));
/// assert!(!v.test(&json!({"name": 1})));
/// assert!(!v.test(&json!(null)));
/// ```
#[derive(Clone, Default)]
pub struct ObjectShape {
    fields: Vec<(String, SharedValidator)>,
}

impl ObjectShape {
    #[must_use]
    pub fn new() -> Self {
        Self { fields: Vec::new() }
    }

    /// Declares a field and the validator its value must satisfy.
    ///
    /// Fields are checked in declaration order.
    #[must_use]
    pub fn field(
        mut self,
        name: impl Into<String>,
        validator: impl Validator + 'static,
    ) -> Self {
        self.fields.push((name.into(), Arc::new(validator)));
        self
    }

    /// Declares a field backed by an already-shared validator.
    #[must_use]
    pub fn field_shared(mut self, name: impl Into<String>, validator: SharedValidator) -> Self {
        self.fields.push((name.into(), validator));
        self
    }

    /// The declared field names, in declaration order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(name, _)| name.as_str())
    }
}

impl Validator for ObjectShape {
    fn test(&self, value: &Value) -> bool {
        let Value::Object(map) = value else {
            return false;
        };
        for (name, validator) in &self.fields {
            match map.get(name) {
                Some(field) => {
                    if !validator.test(field) {
                        return false;
                    }
                }
                None => {
                    if !validator.accepts_missing() {
                        return false;
                    }
                }
            }
        }
        true
    }

    fn describe_failure(&self, value: &Value) -> String {
        format!("Expected object, got {}", value.kind())
    }
}

/// Creates an empty [`ObjectShape`]; declare fields with
/// [`field`](ObjectShape::field).
#[must_use]
pub fn object() -> ObjectShape {
    ObjectShape::new()
}

/// Declares an [`ObjectShape`] from `key => validator` pairs.
///
/// # Examples
///
/// ```rust
/// use typeguard::{Validator, number, string};
/// use serde_json::json;
///
/// let person = typeguard::object! {
///     "name" => string(),
///     "age" => number(),
/// };
/// assert!(person.test(&json!({"name": "Al", "age": 30})));
/// ```
#[macro_export]
macro_rules! object {
    ( $( $key:expr => $validator:expr ),* $(,)? ) => {{
        let shape = $crate::validators::structural::ObjectShape::new();
        $( let shape = shape.field($key, $validator); )*
        shape
    }};
}

// ==================== ARRAY OF ====================

/// Validator that accepts arrays whose every element conforms.
///
/// # Examples
///
/// ```rust
/// use typeguard::{Validator, array, number};
/// use serde_json::json;
///
/// let v = array(number());
/// assert!(v.test(&json!([1, 2, 3])));
/// assert!(v.test(&json!([])));
/// assert!(!v.test(&json!([1, "2"])));
/// assert!(!v.test(&json!("not an array")));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ArrayOf<V> {
    element: V,
}

impl<V> ArrayOf<V> {
    pub fn new(element: V) -> Self {
        Self { element }
    }

    /// Returns a reference to the element validator.
    pub fn element(&self) -> &V {
        &self.element
    }
}

impl<V: Validator> Validator for ArrayOf<V> {
    fn test(&self, value: &Value) -> bool {
        let Value::Array(items) = value else {
            return false;
        };
        items.iter().all(|item| self.element.test(item))
    }

    fn describe_failure(&self, value: &Value) -> String {
        format!("Expected array, got {}", value.kind())
    }
}

/// Creates an [`ArrayOf`] validator with `element` checking every item.
pub fn array<V: Validator>(element: V) -> ArrayOf<V> {
    ArrayOf::new(element)
}
