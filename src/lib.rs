//! Typeguard - runtime structural validation for JSON values
//!
//! Given a [`Value`] of unknown shape, decide whether it conforms to a
//! declared structural type. A [`Validator`] is an immutable pair of a
//! membership test and a failure describer; a small set of primitives and
//! composable combinators builds up arbitrarily complex checks (objects,
//! arrays, unions, intersections, ranges) from simple ones. The
//! [`parse`] / [`parse_unknown`] entry points turn the boolean outcome
//! into a returned value or a [`ValidationError`].
//!
//! Validation is synchronous, side-effect-free and performed freshly on
//! every call; nothing is coerced, cached or mutated.
//!
//! # Examples
//!
//! ```rust
//! use typeguard::{Validator, min, nullable, number, object, parse, range_length, string};
//! use serde_json::json;
//!
//! let person = object()
//!     .field("name", range_length(string(), 1, 32))
//!     .field("age", nullable(min(number(), 0.0)));
//!
//! assert!(person.test(&json!({"name": "Al", "age": null})));
//! assert!(!person.test(&json!({"name": "", "age": 5})));
//!
//! let value = parse(&person, json!({"name": "Al", "age": 30})).unwrap();
//! assert_eq!(value["age"], json!(30));
//! ```

pub mod core;
pub mod validators;

// Re-export core types and traits
pub use self::core::{
    SharedValidator, ValidationError, Validator, ValidatorExt, ValueExt, ValueKind, parse,
    parse_unknown,
};

// Re-export validators
pub use validators::{
    custom::*, length::*, logical::*, optional::*, range::*, sets::*, structural::*, types::*,
};

// Re-export the value type validators operate on
pub use serde_json::Value;
