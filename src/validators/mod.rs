//! Validators (concrete implementations)
//!
//! Primitives check a value's fundamental kind; everything else is a
//! combinator that builds a new validator out of existing ones. All of
//! them are plain structs implementing [`Validator`](crate::Validator),
//! constructed either directly or through the lowercase factory functions
//! re-exported from the crate root.

pub mod custom;
pub mod length;
pub mod logical;
pub mod optional;
pub mod range;
pub mod sets;
pub mod structural;
pub mod types;

pub use custom::{Custom, custom};
pub use length::{
    Length, MaxLength, MinLength, RangeLength, length, max_length, min_length, range_length,
};
pub use logical::{Intersection, Union, intersection, union};
pub use optional::{Nullable, Undefinable, nullable, undefinable};
pub use range::{Max, Min, Range, max, min, range};
pub use sets::{Literal, OneOf, OneOfType, literal, one_of, one_of_type};
pub use structural::{ArrayOf, ObjectShape, array, object};
pub use types::{IsBoolean, IsInteger, IsNull, IsNumber, IsString, boolean, integer, null, number, string};
