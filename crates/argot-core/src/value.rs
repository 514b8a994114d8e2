// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Run-time view of descriptor field values.
//!
//! Every field exposes its value through [`ToValue`], which classifies it into
//! one [`Value`] variant. The emitter never inspects Rust types directly; it
//! only pattern-matches on these variants.
//!
//! # Conversions
//!
//! | Rust type | Value |
//! |-----------|-------|
//! | `bool` | [`Value::Bool`] |
//! | integers, floats, `char`, strings, paths | [`Value::Scalar`] |
//! | `Option<T>` | [`Value::Nil`] or the inner value |
//! | `Box<T>`, `&T` | the inner value |
//! | `Vec<T>`, `[T]`, `[T; N]` | [`Value::List`] |
//! | `BTreeMap<K, V>`, `HashMap<K, V>` | [`Value::Map`] (hash maps sorted by key) |
//! | derived descriptors | [`Value::Record`] |
//! | [`CommandName`](crate::CommandName) | [`Value::CommandName`] |
//! | [`ArgName`](crate::ArgName) | [`Value::ArgName`] |
//!
//! Dynamic values can be built directly:
//!
//! ```rust
//! use argot_core::Value;
//!
//! let value = Value::map([("a", Value::map([("b", Value::from(1))]))]);
//! assert_eq!(value.kind(), "map");
//! ```

use std::{
    borrow::Cow,
    collections::{BTreeMap, HashMap},
    ffi::{OsStr, OsString},
    fmt,
    path::{Path, PathBuf}
};

use crate::descriptor::Descriptor;

/// A classified field value.
#[derive(Clone)]
pub enum Value<'a> {
    /// Absent value, e.g. `None`.
    Nil,

    /// Boolean flag value.
    Bool(bool),

    /// Any value rendered as a single string.
    Scalar {
        /// Rendered text.
        text: Cow<'a, str>,
        /// Whether the source value was its type's zero value.
        zero: bool
    },

    /// Repeated values.
    List(Vec<Value<'a>>),

    /// Keyed values, visited in stored order.
    Map(Vec<(Cow<'a, str>, Value<'a>)>),

    /// Nested descriptor.
    Record(&'a dyn Descriptor),

    /// Command-name sentinel with its literal override (may be empty).
    CommandName(&'a str),

    /// Argument-name sentinel.
    ArgName
}

impl<'a> Value<'a> {
    /// Build a scalar; empty text counts as zero.
    pub fn scalar(text: impl Into<Cow<'a, str>>) -> Self {
        let text = text.into();
        let zero = text.is_empty();
        Self::Scalar { text, zero }
    }

    /// Build a list from values.
    pub fn list<I>(items: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Value<'a>>
    {
        Self::List(items.into_iter().map(Into::into).collect())
    }

    /// Build a map, keeping the given entry order.
    pub fn map<K, I>(entries: I) -> Self
    where
        K: Into<Cow<'a, str>>,
        I: IntoIterator<Item = (K, Value<'a>)>
    {
        Self::Map(
            entries
                .into_iter()
                .map(|(key, value)| (key.into(), value))
                .collect()
        )
    }

    /// Whether the value is its type's zero value.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        match self {
            Self::Nil | Self::ArgName => true,
            Self::Bool(flag) => !flag,
            Self::Scalar { zero, .. } => *zero,
            Self::List(items) => items.is_empty(),
            Self::Map(entries) => entries.is_empty(),
            Self::Record(_) => false,
            Self::CommandName(name) => name.is_empty()
        }
    }

    /// Short name of the variant, used in error messages.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Nil => "nil",
            Self::Bool(_) => "bool",
            Self::Scalar { .. } => "scalar",
            Self::List(_) => "list",
            Self::Map(_) => "map",
            Self::Record(_) => "record",
            Self::CommandName(_) => "command name",
            Self::ArgName => "argument name"
        }
    }

    /// Render a single value as text, if it has a textual form.
    #[must_use]
    pub fn as_text(&self) -> Option<Cow<'a, str>> {
        match self {
            Self::Scalar { text, .. } => Some(text.clone()),
            Self::Bool(flag) => Some(Cow::Borrowed(if *flag { "true" } else { "false" })),
            _ => None
        }
    }
}

impl fmt::Debug for Value<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Nil => f.write_str("Nil"),
            Self::Bool(flag) => f.debug_tuple("Bool").field(flag).finish(),
            Self::Scalar { text, zero } => f
                .debug_struct("Scalar")
                .field("text", text)
                .field("zero", zero)
                .finish(),
            Self::List(items) => f.debug_tuple("List").field(items).finish(),
            Self::Map(entries) => f.debug_tuple("Map").field(entries).finish(),
            Self::Record(record) => f.debug_tuple("Record").field(&record.type_name()).finish(),
            Self::CommandName(name) => f.debug_tuple("CommandName").field(name).finish(),
            Self::ArgName => f.write_str("ArgName")
        }
    }
}

/// Conversion of a field into its run-time [`Value`].
///
/// Implemented for the common std types and by `#[derive(Command)]` for every
/// descriptor. Implement it by hand to teach the emitter about a custom type:
///
/// ```rust
/// use argot_core::{ToValue, Value};
///
/// struct Duration(u32);
///
/// impl ToValue for Duration {
///     fn to_value(&self) -> Value<'_> {
///         Value::Scalar {
///             text: format!("{}s", self.0).into(),
///             zero: self.0 == 0
///         }
///     }
/// }
/// ```
pub trait ToValue {
    /// Classify this value.
    fn to_value(&self) -> Value<'_>;
}

impl ToValue for Value<'_> {
    fn to_value(&self) -> Value<'_> {
        self.clone()
    }
}

impl ToValue for bool {
    fn to_value(&self) -> Value<'_> {
        Value::Bool(*self)
    }
}

impl ToValue for str {
    fn to_value(&self) -> Value<'_> {
        Value::scalar(self)
    }
}

impl ToValue for String {
    fn to_value(&self) -> Value<'_> {
        Value::scalar(self.as_str())
    }
}

impl ToValue for Cow<'_, str> {
    fn to_value(&self) -> Value<'_> {
        Value::scalar(self.as_ref())
    }
}

impl ToValue for char {
    fn to_value(&self) -> Value<'_> {
        Value::Scalar {
            text: Cow::Owned(self.to_string()),
            zero: *self == '\0'
        }
    }
}

impl ToValue for OsStr {
    fn to_value(&self) -> Value<'_> {
        Value::scalar(self.to_string_lossy())
    }
}

impl ToValue for OsString {
    fn to_value(&self) -> Value<'_> {
        self.as_os_str().to_value()
    }
}

impl ToValue for Path {
    fn to_value(&self) -> Value<'_> {
        self.as_os_str().to_value()
    }
}

impl ToValue for PathBuf {
    fn to_value(&self) -> Value<'_> {
        self.as_os_str().to_value()
    }
}

macro_rules! numeric_values {
    ($zero:expr => $($ty:ty),*) => {
        $(
            impl ToValue for $ty {
                fn to_value(&self) -> Value<'_> {
                    Value::Scalar {
                        text: Cow::Owned(self.to_string()),
                        zero: *self == $zero
                    }
                }
            }

            impl From<$ty> for Value<'static> {
                fn from(value: $ty) -> Self {
                    Value::Scalar {
                        text: Cow::Owned(value.to_string()),
                        zero: value == $zero
                    }
                }
            }
        )*
    };
}

numeric_values!(0 => i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
numeric_values!(0.0 => f32, f64);

impl<T: ToValue + ?Sized> ToValue for &T {
    fn to_value(&self) -> Value<'_> {
        (**self).to_value()
    }
}

impl<T: ToValue + ?Sized> ToValue for Box<T> {
    fn to_value(&self) -> Value<'_> {
        (**self).to_value()
    }
}

impl<T: ToValue> ToValue for Option<T> {
    fn to_value(&self) -> Value<'_> {
        self.as_ref().map_or(Value::Nil, ToValue::to_value)
    }
}

impl<T: ToValue> ToValue for [T] {
    fn to_value(&self) -> Value<'_> {
        Value::List(self.iter().map(ToValue::to_value).collect())
    }
}

impl<T: ToValue, const N: usize> ToValue for [T; N] {
    fn to_value(&self) -> Value<'_> {
        self.as_slice().to_value()
    }
}

impl<T: ToValue> ToValue for Vec<T> {
    fn to_value(&self) -> Value<'_> {
        self.as_slice().to_value()
    }
}

impl<K: fmt::Display, V: ToValue> ToValue for BTreeMap<K, V> {
    fn to_value(&self) -> Value<'_> {
        Value::Map(
            self.iter()
                .map(|(key, value)| (Cow::Owned(key.to_string()), value.to_value()))
                .collect()
        )
    }
}

impl<K: fmt::Display, V: ToValue, S> ToValue for HashMap<K, V, S> {
    fn to_value(&self) -> Value<'_> {
        let mut entries: Vec<_> = self
            .iter()
            .map(|(key, value)| (Cow::<str>::Owned(key.to_string()), value.to_value()))
            .collect();
        entries.sort_by(|(a, _), (b, _)| a.cmp(b));
        Value::Map(entries)
    }
}

impl From<bool> for Value<'static> {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<String> for Value<'static> {
    fn from(value: String) -> Self {
        Value::scalar(value)
    }
}

impl<'a> From<&'a str> for Value<'a> {
    fn from(value: &'a str) -> Self {
        Value::scalar(value)
    }
}

impl<'a, T> From<Option<T>> for Value<'a>
where
    T: Into<Value<'a>>
{
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Nil, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(value: &Value<'_>) -> String {
        value.as_text().map(Cow::into_owned).unwrap_or_default()
    }

    #[test]
    fn scalars_track_zero() {
        assert!(0_i32.to_value().is_zero());
        assert!(!7_u8.to_value().is_zero());
        assert!(0.0_f64.to_value().is_zero());
        assert!("".to_value().is_zero());
        assert!(!"x".to_value().is_zero());
        assert_eq!(text(&42_i64.to_value()), "42");
        assert_eq!(text(&'q'.to_value()), "q");
    }

    #[test]
    fn bools_are_flags() {
        assert!(matches!(true.to_value(), Value::Bool(true)));
        assert!(false.to_value().is_zero());
        assert_eq!(text(&true.to_value()), "true");
    }

    #[test]
    fn options_unwrap_one_level() {
        let none: Option<String> = None;
        assert!(matches!(none.to_value(), Value::Nil));

        let some = Some(Box::new(5_u32));
        assert_eq!(text(&some.to_value()), "5");
    }

    #[test]
    fn paths_render_lossy() {
        let path = PathBuf::from("/tmp/out.mkv");
        assert_eq!(text(&path.to_value()), "/tmp/out.mkv");
        assert!(PathBuf::new().to_value().is_zero());
    }

    #[test]
    fn sequences_become_lists() {
        let items = vec!["a", "b"];
        let value = items.to_value();
        match value {
            Value::List(items) => assert_eq!(items.len(), 2),
            other => panic!("expected list, got {other:?}")
        }
        assert!(Vec::<String>::new().to_value().is_zero());
        assert!(matches!([1, 2, 3].to_value(), Value::List(items) if items.len() == 3));
    }

    #[test]
    fn hash_maps_are_sorted_by_key() {
        let map: HashMap<&str, i32> = [("zeta", 1), ("alpha", 2), ("mid", 3)]
            .into_iter()
            .collect();
        let Value::Map(entries) = map.to_value() else {
            panic!("expected map");
        };
        let keys: Vec<_> = entries.iter().map(|(key, _)| key.as_ref()).collect();
        assert_eq!(keys, ["alpha", "mid", "zeta"]);
    }

    #[test]
    fn dynamic_values_round_through_to_value() {
        let value = Value::map([("a", Value::from(1)), ("b", Value::from(None::<i32>))]);
        let again = value.to_value();
        assert_eq!(again.kind(), "map");
        assert!(!again.is_zero());
    }

    #[test]
    fn kinds_and_text_of_composites() {
        assert_eq!(Value::list([1, 2]).kind(), "list");
        assert_eq!(Value::Nil.kind(), "nil");
        assert!(Value::list([1]).as_text().is_none());
        assert!(Value::ArgName.is_zero());
    }
}
