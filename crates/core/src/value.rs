//! Value model for cellstore.
//!
//! Every cell in a store holds exactly one [`Value`]. The enum is a tagged
//! container: the variant is the value's runtime type, and all type checks
//! in the system reduce to comparing [`ValueType`] tokens.
//!
//! ## Equality Rules
//!
//! - Different variants are NEVER equal (no type coercion)
//! - `Int(1)` != `Float(1.0)`, `Bool(true)` != `Int(1)`
//! - Float uses IEEE-754 equality: `NaN != NaN`, `-0.0 == 0.0`

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A value stored in a cell.
///
/// This is the only value model in the system: every dispatched message
/// carries one, and every cell holds one. There is deliberately no `Null`
/// variant — an empty cell is an absent map entry, so "no value" and
/// "value of the wrong type" can never be confused.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    /// Boolean true or false
    Bool(bool),

    /// 64-bit signed integer
    Int(i64),

    /// 64-bit IEEE-754 floating point
    /// PartialEq follows IEEE-754: `NaN != NaN`, `-0.0 == 0.0`
    Float(f64),

    /// UTF-8 encoded string
    String(String),

    /// UTC timestamp
    Timestamp(DateTime<Utc>),
}

impl Value {
    /// The runtime type token for this value.
    pub const fn value_type(&self) -> ValueType {
        match self {
            Value::Bool(_) => ValueType::Bool,
            Value::Int(_) => ValueType::Int,
            Value::Float(_) => ValueType::Float,
            Value::String(_) => ValueType::String,
            Value::Timestamp(_) => ValueType::Timestamp,
        }
    }

    /// Returns the type name as a string (for error messages and logs).
    pub const fn type_name(&self) -> &'static str {
        self.value_type().name()
    }

    /// Try to get as bool.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Try to get as i64.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Try to get as f64.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Try to get as string slice.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Try to get as timestamp.
    pub fn as_timestamp(&self) -> Option<DateTime<Utc>> {
        match self {
            Value::Timestamp(t) => Some(*t),
            _ => None,
        }
    }
}

/// Runtime type token for [`Value`].
///
/// This enum identifies which variant a value holds, or which variant a
/// caller is asking for. It is the type-descriptor half of the provider's
/// dual accessor: the generic spelling resolves to one of these tokens at
/// compile time, and both spellings validate against the same token.
///
/// ## Invariant
///
/// This enum has exactly one variant per `Value` variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ValueType {
    /// Boolean
    Bool,
    /// 64-bit signed integer
    Int,
    /// 64-bit IEEE-754 floating point
    Float,
    /// UTF-8 encoded string
    String,
    /// UTC timestamp
    Timestamp,
}

impl ValueType {
    /// All value types (for iteration)
    pub const ALL: [ValueType; 5] = [
        ValueType::Bool,
        ValueType::Int,
        ValueType::Float,
        ValueType::String,
        ValueType::Timestamp,
    ];

    /// Human-readable display name
    pub const fn name(&self) -> &'static str {
        match self {
            ValueType::Bool => "Bool",
            ValueType::Int => "Int",
            ValueType::Float => "Float",
            ValueType::String => "String",
            ValueType::Timestamp => "Timestamp",
        }
    }

    /// Fully qualified Rust name of the type this token stands for.
    ///
    /// Used verbatim in the `ValueNotFound` message, which is a
    /// compatibility contract asserted on by tests.
    pub const fn qualified_name(&self) -> &'static str {
        match self {
            ValueType::Bool => "bool",
            ValueType::Int => "i64",
            ValueType::Float => "f64",
            ValueType::String => "std::string::String",
            ValueType::Timestamp => "chrono::DateTime<chrono::Utc>",
        }
    }
}

impl std::fmt::Display for ValueType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A Rust type that can live in a store cell.
///
/// Links a concrete type to its [`ValueType`] token at compile time, so the
/// generic accessor spelling and the type-token spelling cannot drift:
/// `get::<T>()` is defined as the token lookup for `T::TYPE` followed by an
/// unwrap of the already-validated variant.
pub trait StoreValue: Sized {
    /// The token for this type's `Value` variant.
    const TYPE: ValueType;

    /// Wrap into a [`Value`].
    fn into_value(self) -> Value;

    /// Unwrap from a [`Value`]. Returns `None` if the variant differs.
    fn from_value(value: Value) -> Option<Self>;
}

impl StoreValue for bool {
    const TYPE: ValueType = ValueType::Bool;

    fn into_value(self) -> Value {
        Value::Bool(self)
    }

    fn from_value(value: Value) -> Option<Self> {
        value.as_bool()
    }
}

impl StoreValue for i64 {
    const TYPE: ValueType = ValueType::Int;

    fn into_value(self) -> Value {
        Value::Int(self)
    }

    fn from_value(value: Value) -> Option<Self> {
        value.as_int()
    }
}

impl StoreValue for f64 {
    const TYPE: ValueType = ValueType::Float;

    fn into_value(self) -> Value {
        Value::Float(self)
    }

    fn from_value(value: Value) -> Option<Self> {
        value.as_float()
    }
}

impl StoreValue for String {
    const TYPE: ValueType = ValueType::String;

    fn into_value(self) -> Value {
        Value::String(self)
    }

    fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::String(s) => Some(s),
            _ => None,
        }
    }
}

impl StoreValue for DateTime<Utc> {
    const TYPE: ValueType = ValueType::Timestamp;

    fn into_value(self) -> Value {
        Value::Timestamp(self)
    }

    fn from_value(value: Value) -> Option<Self> {
        value.as_timestamp()
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(t: DateTime<Utc>) -> Self {
        Value::Timestamp(t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod type_token_tests {
        use super::*;

        #[test]
        fn every_variant_reports_its_own_token() {
            assert_eq!(Value::Bool(true).value_type(), ValueType::Bool);
            assert_eq!(Value::Int(42).value_type(), ValueType::Int);
            assert_eq!(Value::Float(2.5).value_type(), ValueType::Float);
            assert_eq!(
                Value::String("x".to_string()).value_type(),
                ValueType::String
            );
            assert_eq!(
                Value::Timestamp(DateTime::from_timestamp(0, 0).unwrap()).value_type(),
                ValueType::Timestamp
            );
        }

        #[test]
        fn all_tokens_are_distinct() {
            let names: std::collections::HashSet<_> =
                ValueType::ALL.iter().map(|t| t.name()).collect();
            assert_eq!(names.len(), ValueType::ALL.len());
        }

        #[test]
        fn qualified_names_are_distinct() {
            let names: std::collections::HashSet<_> =
                ValueType::ALL.iter().map(|t| t.qualified_name()).collect();
            assert_eq!(names.len(), ValueType::ALL.len());
        }

        #[test]
        fn qualified_names_are_rust_type_paths() {
            assert_eq!(ValueType::Bool.qualified_name(), "bool");
            assert_eq!(ValueType::Int.qualified_name(), "i64");
            assert_eq!(ValueType::Float.qualified_name(), "f64");
            assert_eq!(ValueType::String.qualified_name(), "std::string::String");
            assert_eq!(
                ValueType::Timestamp.qualified_name(),
                "chrono::DateTime<chrono::Utc>"
            );
        }

        #[test]
        fn display_uses_short_name() {
            assert_eq!(ValueType::Timestamp.to_string(), "Timestamp");
        }
    }

    mod accessor_tests {
        use super::*;

        #[test]
        fn accessors_return_matching_variant_only() {
            assert_eq!(Value::Bool(true).as_bool(), Some(true));
            assert_eq!(Value::Int(1).as_bool(), None);

            assert_eq!(Value::Int(42).as_int(), Some(42));
            assert_eq!(Value::Float(42.0).as_int(), None);

            assert_eq!(Value::Float(1.5).as_float(), Some(1.5));
            assert_eq!(Value::Int(1).as_float(), None);

            assert_eq!(Value::String("hi".to_string()).as_str(), Some("hi"));
            assert_eq!(Value::Bool(false).as_str(), None);

            let now = DateTime::from_timestamp(1_700_000_000, 0).unwrap();
            assert_eq!(Value::Timestamp(now).as_timestamp(), Some(now));
            assert_eq!(Value::Int(0).as_timestamp(), None);
        }
    }

    mod no_coercion_tests {
        use super::*;

        #[test]
        fn int_one_not_float_one() {
            assert_ne!(Value::Int(1), Value::Float(1.0));
        }

        #[test]
        fn bool_true_not_int_one() {
            assert_ne!(Value::Bool(true), Value::Int(1));
        }

        #[test]
        fn string_number_not_int() {
            assert_ne!(Value::String("123".to_string()), Value::Int(123));
        }

        #[test]
        fn nan_not_equal_to_nan() {
            assert_ne!(Value::Float(f64::NAN), Value::Float(f64::NAN));
        }

        #[test]
        fn negative_zero_equals_positive_zero() {
            assert_eq!(Value::Float(-0.0), Value::Float(0.0));
        }
    }

    mod store_value_tests {
        use super::*;

        #[test]
        fn const_tokens_match_wrapped_variant() {
            assert_eq!(true.into_value().value_type(), bool::TYPE);
            assert_eq!(7_i64.into_value().value_type(), i64::TYPE);
            assert_eq!(1.25_f64.into_value().value_type(), f64::TYPE);
            assert_eq!("s".to_string().into_value().value_type(), String::TYPE);
            let ts = DateTime::from_timestamp(1, 0).unwrap();
            assert_eq!(ts.into_value().value_type(), <DateTime<Utc>>::TYPE);
        }

        #[test]
        fn from_value_rejects_other_variants() {
            assert_eq!(bool::from_value(Value::Int(1)), None);
            assert_eq!(i64::from_value(Value::Bool(true)), None);
            assert_eq!(String::from_value(Value::Float(0.0)), None);
            assert_eq!(<DateTime<Utc>>::from_value(Value::Int(0)), None);
        }

        #[test]
        fn str_conversion_stores_owned_string() {
            let v: Value = "hello".into();
            assert_eq!(v, Value::String("hello".to_string()));
        }
    }

    mod serialization_tests {
        use super::*;

        #[test]
        fn value_round_trips_through_json() {
            let samples = vec![
                Value::Bool(true),
                Value::Int(-42),
                Value::Float(3.5),
                Value::String("テスト".to_string()),
                Value::Timestamp(DateTime::from_timestamp(1_700_000_000, 0).unwrap()),
            ];
            for value in samples {
                let encoded = serde_json::to_string(&value).unwrap();
                let decoded: Value = serde_json::from_str(&encoded).unwrap();
                assert_eq!(value, decoded);
            }
        }

        #[test]
        fn value_type_round_trips_through_json() {
            for ty in ValueType::ALL {
                let encoded = serde_json::to_string(&ty).unwrap();
                let decoded: ValueType = serde_json::from_str(&encoded).unwrap();
                assert_eq!(ty, decoded);
            }
        }
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn int_survives_wrap_and_unwrap(i in any::<i64>()) {
                prop_assert_eq!(i64::from_value(i.into_value()), Some(i));
            }

            #[test]
            fn bool_survives_wrap_and_unwrap(b in any::<bool>()) {
                prop_assert_eq!(bool::from_value(b.into_value()), Some(b));
            }

            #[test]
            fn string_survives_wrap_and_unwrap(s in ".*") {
                prop_assert_eq!(String::from_value(s.clone().into_value()), Some(s));
            }

            #[test]
            fn float_bits_survive_wrap_and_unwrap(f in any::<f64>()) {
                let back = f64::from_value(f.into_value()).unwrap();
                prop_assert_eq!(back.to_bits(), f.to_bits());
            }
        }
    }
}
