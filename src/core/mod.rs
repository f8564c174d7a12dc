//! Core functionality for typeguard
//!
//! This module contains the fundamental pieces of the validation system:
//! - The [`Validator`] trait and its fluent [`ValidatorExt`] extension
//! - [`ValidationError`] and the [`parse`] / [`parse_unknown`] entry points
//! - Value-kind helpers shared by every failure message

mod error;
mod parse;
mod traits;
mod value_ext;

pub use error::ValidationError;
pub use parse::{parse, parse_unknown};
pub use traits::{SharedValidator, Validator, ValidatorExt};
pub use value_ext::{ValueExt, ValueKind};
