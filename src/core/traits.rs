//! Core validation traits
//!
//! A [`Validator`] is an immutable pair of a membership test and a failure
//! describer. Combinators build new validators out of existing ones without
//! ever mutating or copying their children, so a constructed validator tree
//! is a pure value that can be shared freely across threads.

use serde_json::Value;
use std::sync::Arc;

use crate::validators::length::{Length, MaxLength, MinLength, RangeLength};
use crate::validators::logical::{Intersection, Union};
use crate::validators::optional::{Nullable, Undefinable};
use crate::validators::range::{Max, Min, Range};

/// Main validation trait - the core interface for all validators.
///
/// Implementations must be pure: `test` returns `false` on mismatched
/// input rather than panicking, and repeated calls on the same value
/// always produce the same answer.
pub trait Validator: Send + Sync {
    /// Membership test: does `value` conform to this validator's type?
    ///
    /// Never panics and never coerces; a numeric string is not a number.
    fn test(&self, value: &Value) -> bool;

    /// Produces a human-readable explanation of why `value` was rejected.
    ///
    /// Assumes `test` returned `false`; may be called regardless of the
    /// actual outcome, so it must not panic either.
    fn describe_failure(&self, value: &Value) -> String;

    /// Whether an absent object key satisfies this validator.
    ///
    /// Consulted by [`ObjectShape`] for keys declared in the shape but
    /// missing from the value. Only [`Undefinable`] (and combinators
    /// wrapping one) answer `true`.
    ///
    /// [`ObjectShape`]: crate::validators::structural::ObjectShape
    fn accepts_missing(&self) -> bool {
        false
    }
}

// Validators are shared by reference, never copied, so the trait is
// implemented for all the usual indirections.

impl<V: Validator + ?Sized> Validator for &V {
    fn test(&self, value: &Value) -> bool {
        (**self).test(value)
    }

    fn describe_failure(&self, value: &Value) -> String {
        (**self).describe_failure(value)
    }

    fn accepts_missing(&self) -> bool {
        (**self).accepts_missing()
    }
}

impl<V: Validator + ?Sized> Validator for Box<V> {
    fn test(&self, value: &Value) -> bool {
        (**self).test(value)
    }

    fn describe_failure(&self, value: &Value) -> String {
        (**self).describe_failure(value)
    }

    fn accepts_missing(&self) -> bool {
        (**self).accepts_missing()
    }
}

impl<V: Validator + ?Sized> Validator for Arc<V> {
    fn test(&self, value: &Value) -> bool {
        (**self).test(value)
    }

    fn describe_failure(&self, value: &Value) -> String {
        (**self).describe_failure(value)
    }

    fn accepts_missing(&self) -> bool {
        (**self).accepts_missing()
    }
}

/// A shared, type-erased validator, as held by variadic combinators.
pub type SharedValidator = Arc<dyn Validator>;

// ============================================================================
// EXTENSION TRAIT
// ============================================================================

/// Extension trait providing fluent combinator methods on any validator.
pub trait ValidatorExt: Validator + Sized {
    /// Widens this validator to also accept `null`.
    fn nullable(self) -> Nullable<Self> {
        Nullable::new(self)
    }

    /// Widens this validator to also accept an absent object key.
    fn undefinable(self) -> Undefinable<Self> {
        Undefinable::new(self)
    }

    /// Combines this validator with another using OR logic.
    fn or<V: Validator + 'static>(self, other: V) -> Union
    where
        Self: 'static,
    {
        Union::new(vec![Arc::new(self), Arc::new(other)])
    }

    /// Combines this validator with another using AND logic.
    fn and<V: Validator + 'static>(self, other: V) -> Intersection
    where
        Self: 'static,
    {
        Intersection::new(vec![Arc::new(self), Arc::new(other)])
    }

    /// Refines accepted numbers with an inclusive lower bound.
    fn min(self, bound: f64) -> Min<Self> {
        Min::new(self, bound)
    }

    /// Refines accepted numbers with an inclusive upper bound.
    fn max(self, bound: f64) -> Max<Self> {
        Max::new(self, bound)
    }

    /// Refines accepted numbers with inclusive bounds at both ends.
    fn range(self, min: f64, max: f64) -> Range<Self> {
        Range::new(self, min, max)
    }

    /// Refines accepted values with an exact size.
    fn length(self, len: usize) -> Length<Self> {
        Length::new(self, len)
    }

    /// Refines accepted values with an inclusive minimum size.
    fn min_length(self, min: usize) -> MinLength<Self> {
        MinLength::new(self, min)
    }

    /// Refines accepted values with an inclusive maximum size.
    fn max_length(self, max: usize) -> MaxLength<Self> {
        MaxLength::new(self, max)
    }

    /// Refines accepted values with inclusive size bounds at both ends.
    fn range_length(self, min: usize, max: usize) -> RangeLength<Self> {
        RangeLength::new(self, min, max)
    }

    /// Erases this validator's type so it can be shared and stored.
    fn boxed(self) -> SharedValidator
    where
        Self: 'static,
    {
        Arc::new(self)
    }
}

impl<T: Validator> ValidatorExt for T {}
