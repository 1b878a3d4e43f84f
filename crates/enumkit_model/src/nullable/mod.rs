//! Runtime values that may be null or undefined.
//!
//! Enum-valued data arriving from a loosely typed source distinguishes an
//! explicit `null` from a missing (`undefined`) value. `Nullable` keeps that
//! distinction so dispatch can route each case separately.

use std::fmt;

/// A value that is present, explicitly null, or undefined.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Nullable<T> {
    /// A concrete value.
    Value(T),
    /// An explicit null.
    Null,
    /// A missing value.
    Undefined,
}

impl<T> Nullable<T> {
    /// Borrow the contained value.
    #[inline]
    pub fn as_ref(&self) -> Nullable<&T> {
        match self {
            Nullable::Value(v) => Nullable::Value(v),
            Nullable::Null => Nullable::Null,
            Nullable::Undefined => Nullable::Undefined,
        }
    }

    /// Returns the value if present.
    #[inline]
    pub fn value(&self) -> Option<&T> {
        match self {
            Nullable::Value(v) => Some(v),
            Nullable::Null | Nullable::Undefined => None,
        }
    }

    /// Consume and return the value if present.
    #[inline]
    pub fn into_value(self) -> Option<T> {
        match self {
            Nullable::Value(v) => Some(v),
            Nullable::Null | Nullable::Undefined => None,
        }
    }

    /// Map the contained value, keeping null and undefined as they are.
    #[inline]
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Nullable<U> {
        match self {
            Nullable::Value(v) => Nullable::Value(f(v)),
            Nullable::Null => Nullable::Null,
            Nullable::Undefined => Nullable::Undefined,
        }
    }

    #[inline]
    pub fn is_value(&self) -> bool {
        matches!(self, Nullable::Value(_))
    }

    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self, Nullable::Null)
    }

    #[inline]
    pub fn is_undefined(&self) -> bool {
        matches!(self, Nullable::Undefined)
    }
}

/// `None` is treated as a missing value, not an explicit null.
impl<T> From<Option<T>> for Nullable<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => Nullable::Value(v),
            None => Nullable::Undefined,
        }
    }
}

impl<T: fmt::Display> fmt::Display for Nullable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Nullable::Value(v) => v.fmt(f),
            Nullable::Null => f.write_str("null"),
            Nullable::Undefined => f.write_str("undefined"),
        }
    }
}
