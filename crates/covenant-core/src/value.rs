//! Diagnostic field values.
//!
//! [`FieldValue`] is the heterogeneous value stored under each diagnostic
//! field name. Scalars and strings are kept with their native variant so that
//! callers can assert on them directly (`field == 0`, `field == "abc"`); any
//! other type is carried as an [`FieldValue::Opaque`] display projection.
//!
//! The `Display` impl is the "default string form" used by message rendering
//! and masking. `Null` renders as the empty string.

use std::fmt;

use serde::{Serialize, Serializer};

/// A single diagnostic field value.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// Absent value (`None`).
    Null,
    Bool(bool),
    Int(i64),
    UInt(u64),
    Float(f64),
    Char(char),
    Text(String),
    /// An enum tag, rendered as its variant name.
    Tag { type_name: String, variant: String },
    /// Any other value, reduced to its display string at capture time.
    Opaque { type_name: String, display: String },
}

impl FieldValue {
    /// Captures an arbitrary displayable value as [`FieldValue::Opaque`].
    pub fn display<T: fmt::Display + ?Sized>(value: &T) -> FieldValue {
        FieldValue::Opaque {
            type_name: std::any::type_name::<T>().to_string(),
            display: value.to_string(),
        }
    }

    /// Builds an enum tag value.
    pub fn tag(type_name: impl Into<String>, variant: impl Into<String>) -> FieldValue {
        FieldValue::Tag {
            type_name: type_name.into(),
            variant: variant.into(),
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, FieldValue::Null)
    }

    /// Returns the text payload for `Text` values.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Returns a human-readable description of the carried type.
    pub fn type_name(&self) -> &str {
        match self {
            FieldValue::Null => "Null",
            FieldValue::Bool(_) => "Bool",
            FieldValue::Int(_) => "Int",
            FieldValue::UInt(_) => "UInt",
            FieldValue::Float(_) => "Float",
            FieldValue::Char(_) => "Char",
            FieldValue::Text(_) => "Text",
            FieldValue::Tag { type_name, .. } => type_name,
            FieldValue::Opaque { type_name, .. } => type_name,
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Null => Ok(()),
            FieldValue::Bool(v) => write!(f, "{v}"),
            FieldValue::Int(v) => write!(f, "{v}"),
            FieldValue::UInt(v) => write!(f, "{v}"),
            FieldValue::Float(v) => write!(f, "{v}"),
            FieldValue::Char(v) => write!(f, "{v}"),
            FieldValue::Text(v) => f.write_str(v),
            FieldValue::Tag { variant, .. } => f.write_str(variant),
            FieldValue::Opaque { display, .. } => f.write_str(display),
        }
    }
}

impl Serialize for FieldValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            FieldValue::Null => serializer.serialize_none(),
            FieldValue::Bool(v) => serializer.serialize_bool(*v),
            FieldValue::Int(v) => serializer.serialize_i64(*v),
            FieldValue::UInt(v) => serializer.serialize_u64(*v),
            FieldValue::Float(v) => serializer.serialize_f64(*v),
            FieldValue::Char(v) => serializer.serialize_char(*v),
            FieldValue::Text(v) => serializer.serialize_str(v),
            FieldValue::Tag { variant, .. } => serializer.serialize_str(variant),
            FieldValue::Opaque { display, .. } => serializer.serialize_str(display),
        }
    }
}

// Conversions from native values.

macro_rules! from_signed {
    ($($ty:ty),*) => {
        $(impl From<$ty> for FieldValue {
            fn from(v: $ty) -> Self {
                FieldValue::Int(v as i64)
            }
        })*
    };
}

macro_rules! from_unsigned {
    ($($ty:ty),*) => {
        $(impl From<$ty> for FieldValue {
            fn from(v: $ty) -> Self {
                FieldValue::UInt(v as u64)
            }
        })*
    };
}

from_signed!(i8, i16, i32, i64, isize);
from_unsigned!(u8, u16, u32, u64, usize);

// 128-bit integers narrow to `Int`/`UInt` when they fit; anything wider keeps
// its exact decimal text as an opaque value.
impl From<i128> for FieldValue {
    fn from(v: i128) -> Self {
        if let Ok(narrow) = i64::try_from(v) {
            FieldValue::Int(narrow)
        } else if let Ok(narrow) = u64::try_from(v) {
            FieldValue::UInt(narrow)
        } else {
            FieldValue::display(&v)
        }
    }
}

impl From<u128> for FieldValue {
    fn from(v: u128) -> Self {
        match u64::try_from(v) {
            Ok(narrow) => FieldValue::UInt(narrow),
            Err(_) => FieldValue::display(&v),
        }
    }
}

impl From<f32> for FieldValue {
    fn from(v: f32) -> Self {
        FieldValue::Float(v as f64)
    }
}

impl From<f64> for FieldValue {
    fn from(v: f64) -> Self {
        FieldValue::Float(v)
    }
}

impl From<bool> for FieldValue {
    fn from(v: bool) -> Self {
        FieldValue::Bool(v)
    }
}

impl From<char> for FieldValue {
    fn from(v: char) -> Self {
        FieldValue::Char(v)
    }
}

impl From<&str> for FieldValue {
    fn from(v: &str) -> Self {
        FieldValue::Text(v.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(v: String) -> Self {
        FieldValue::Text(v)
    }
}

impl From<&String> for FieldValue {
    fn from(v: &String) -> Self {
        FieldValue::Text(v.clone())
    }
}

impl<T: Into<FieldValue>> From<Option<T>> for FieldValue {
    fn from(v: Option<T>) -> Self {
        match v {
            Some(inner) => inner.into(),
            None => FieldValue::Null,
        }
    }
}

// Comparisons against native values, so assertions read `field == 0`.

macro_rules! eq_integer {
    ($($ty:ty),*) => {
        $(impl PartialEq<$ty> for FieldValue {
            fn eq(&self, other: &$ty) -> bool {
                match self {
                    FieldValue::Int(v) => i128::from(*v) == *other as i128,
                    FieldValue::UInt(v) => i128::from(*v) == *other as i128,
                    _ => false,
                }
            }
        })*
    };
}

eq_integer!(i32, i64, u32, u64, usize);

impl PartialEq<f64> for FieldValue {
    fn eq(&self, other: &f64) -> bool {
        matches!(self, FieldValue::Float(v) if v == other)
    }
}

impl PartialEq<bool> for FieldValue {
    fn eq(&self, other: &bool) -> bool {
        matches!(self, FieldValue::Bool(v) if v == other)
    }
}

impl PartialEq<str> for FieldValue {
    fn eq(&self, other: &str) -> bool {
        match self {
            FieldValue::Text(v) => v == other,
            FieldValue::Tag { variant, .. } => variant == other,
            FieldValue::Opaque { display, .. } => display == other,
            _ => false,
        }
    }
}

impl PartialEq<&str> for FieldValue {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}
