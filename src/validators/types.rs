//! Primitive type validators
//!
//! Atomic kind checks with no children and no coercion: `"123"` fails
//! [`number()`], `5.5` fails [`integer()`]. Each primitive's failure message
//! is `"Expected <kind>, got <actual-kind>"`.

use serde_json::Value;

use crate::core::{ValueExt, ValueKind, Validator};

// ==================== TYPE VALIDATORS ====================

macro_rules! primitive {
    (
        $(#[$attr:meta])*
        $name:ident, $factory:ident, $kind:ident, $check:expr
    ) => {
        $(#[$attr])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
        pub struct $name;

        impl $name {
            #[must_use]
            pub fn new() -> Self {
                Self
            }
        }

        impl Validator for $name {
            fn test(&self, value: &Value) -> bool {
                let check: fn(&Value) -> bool = $check;
                check(value)
            }

            fn describe_failure(&self, value: &Value) -> String {
                format!("Expected {}, got {}", ValueKind::$kind, value.kind())
            }
        }

        #[doc = concat!("Creates an [`", stringify!($name), "`] validator.")]
        #[must_use]
        pub fn $factory() -> $name {
            $name::new()
        }
    };
}

primitive!(
    /// Validator that accepts string values.
    IsString, string, String, |v| v.is_string()
);

primitive!(
    /// Validator that accepts any numeric value, integral or fractional.
    IsNumber, number, Number, |v| v.is_number()
);

primitive!(
    /// Validator that accepts integral numeric values only.
    IsInteger, integer, Integer, |v| v.is_i64() || v.is_u64()
);

primitive!(
    /// Validator that accepts boolean values.
    IsBoolean, boolean, Boolean, |v| v.is_boolean()
);

primitive!(
    /// Validator that accepts `null`.
    IsNull, null, Null, |v| v.is_null()
);
