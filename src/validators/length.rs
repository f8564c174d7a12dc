//! Length refinements
//!
//! AND-compositions over an inner validator, constraining the size of the
//! accepted value: Unicode scalar values for strings, element count for
//! arrays. Values with no size are rejected. Bounds are inclusive.

use serde_json::Value;

use crate::core::{ValueExt, Validator};

// ==================== LENGTH ====================

/// Refines an inner validator with an exact size.
///
/// # Examples
///
/// ```rust
/// use typeguard::{Validator, length, string};
/// use serde_json::json;
///
/// let v = length(string(), 2);
/// assert!(v.test(&json!("ab")));
/// assert!(!v.test(&json!("abc")));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Length<V> {
    inner: V,
    len: usize,
}

impl<V> Length<V> {
    pub fn new(inner: V, len: usize) -> Self {
        Self { inner, len }
    }
}

impl<V: Validator> Validator for Length<V> {
    fn test(&self, value: &Value) -> bool {
        self.inner.test(value) && value.size() == Some(self.len)
    }

    fn describe_failure(&self, value: &Value) -> String {
        format!(
            "Expected {}.length == {}, got {}",
            self.inner.describe_failure(value),
            self.len,
            value
        )
    }

    fn accepts_missing(&self) -> bool {
        self.inner.accepts_missing()
    }
}

/// Creates a [`Length`] refinement over `inner`.
pub fn length<V: Validator>(inner: V, len: usize) -> Length<V> {
    Length::new(inner, len)
}

// ==================== MIN LENGTH ====================

/// Refines an inner validator with an inclusive minimum size.
#[derive(Debug, Clone, Copy)]
pub struct MinLength<V> {
    inner: V,
    min: usize,
}

impl<V> MinLength<V> {
    pub fn new(inner: V, min: usize) -> Self {
        Self { inner, min }
    }
}

impl<V: Validator> Validator for MinLength<V> {
    fn test(&self, value: &Value) -> bool {
        self.inner.test(value) && value.size().is_some_and(|len| len >= self.min)
    }

    fn describe_failure(&self, value: &Value) -> String {
        format!(
            "Expected {}.length >= {}, got {}",
            self.inner.describe_failure(value),
            self.min,
            value
        )
    }

    fn accepts_missing(&self) -> bool {
        self.inner.accepts_missing()
    }
}

/// Creates a [`MinLength`] refinement over `inner`.
pub fn min_length<V: Validator>(inner: V, min: usize) -> MinLength<V> {
    MinLength::new(inner, min)
}

// ==================== MAX LENGTH ====================

/// Refines an inner validator with an inclusive maximum size.
#[derive(Debug, Clone, Copy)]
pub struct MaxLength<V> {
    inner: V,
    max: usize,
}

impl<V> MaxLength<V> {
    pub fn new(inner: V, max: usize) -> Self {
        Self { inner, max }
    }
}

impl<V: Validator> Validator for MaxLength<V> {
    fn test(&self, value: &Value) -> bool {
        self.inner.test(value) && value.size().is_some_and(|len| len <= self.max)
    }

    fn describe_failure(&self, value: &Value) -> String {
        format!(
            "Expected {}.length <= {}, got {}",
            self.inner.describe_failure(value),
            self.max,
            value
        )
    }

    fn accepts_missing(&self) -> bool {
        self.inner.accepts_missing()
    }
}

/// Creates a [`MaxLength`] refinement over `inner`.
pub fn max_length<V: Validator>(inner: V, max: usize) -> MaxLength<V> {
    MaxLength::new(inner, max)
}

// ==================== RANGE LENGTH ====================

/// Refines an inner validator with inclusive size bounds at both ends.
///
/// # Examples
///
/// ```rust
/// use typeguard::{Validator, range_length, string};
/// use serde_json::json;
///
/// let v = range_length(string(), 1, 3);
/// assert!(v.test(&json!("ab")));
/// assert!(!v.test(&json!("")));
/// assert!(!v.test(&json!("abcd")));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct RangeLength<V> {
    inner: V,
    min: usize,
    max: usize,
}

impl<V> RangeLength<V> {
    pub fn new(inner: V, min: usize, max: usize) -> Self {
        Self { inner, min, max }
    }
}

impl<V: Validator> Validator for RangeLength<V> {
    fn test(&self, value: &Value) -> bool {
        self.inner.test(value)
            && value
                .size()
                .is_some_and(|len| len >= self.min && len <= self.max)
    }

    fn describe_failure(&self, value: &Value) -> String {
        format!(
            "Expected {}.length >= {} && <= {}, got {}",
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

/// Creates a [`RangeLength`] refinement over `inner`.
pub fn range_length<V: Validator>(inner: V, min: usize, max: usize) -> RangeLength<V> {
    RangeLength::new(inner, min, max)
}
