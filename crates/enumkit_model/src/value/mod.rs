//! Enum member values.
//!
//! An enum-like model maps names to either numbers or strings. `EnumValue`
//! is that value, with equality and hashing that follow same-value-zero
//! semantics so it can key hash maps and sets.

use std::borrow::Cow;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// A value held by an enum model entry.
///
/// Floats are compared and hashed by canonical bit pattern: `0.0` and `-0.0`
/// are equal, and every `NaN` is equal to every other `NaN`.
#[derive(Clone)]
pub enum EnumValue {
    /// A numeric member value.
    Number(f64),
    /// A string member value.
    Str(Arc<str>),
}

impl EnumValue {
    /// Create a string value.
    pub fn str(s: impl Into<Arc<str>>) -> Self {
        EnumValue::Str(s.into())
    }

    /// Returns the number if this is a numeric value.
    #[inline]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            EnumValue::Number(n) => Some(*n),
            EnumValue::Str(_) => None,
        }
    }

    /// Returns the string if this is a string value.
    #[inline]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            EnumValue::Number(_) => None,
            EnumValue::Str(s) => Some(s),
        }
    }

    #[inline]
    pub fn is_number(&self) -> bool {
        matches!(self, EnumValue::Number(_))
    }

    #[inline]
    pub fn is_str(&self) -> bool {
        matches!(self, EnumValue::Str(_))
    }
}

/// Bit pattern used for equality and hashing of numbers.
#[inline]
fn canonical_bits(n: f64) -> u64 {
    if n == 0.0 {
        0
    } else if n.is_nan() {
        f64::NAN.to_bits()
    } else {
        n.to_bits()
    }
}

impl PartialEq for EnumValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (EnumValue::Number(a), EnumValue::Number(b)) => canonical_bits(*a) == canonical_bits(*b),
            (EnumValue::Str(a), EnumValue::Str(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for EnumValue {}

impl Hash for EnumValue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            EnumValue::Number(n) => {
                state.write_u8(0);
                canonical_bits(*n).hash(state);
            }
            EnumValue::Str(s) => {
                state.write_u8(1);
                s.hash(state);
            }
        }
    }
}

/// Write a number the way a script host stringifies it.
fn fmt_number(n: f64, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if n.is_nan() {
        f.write_str("NaN")
    } else if n.is_infinite() {
        f.write_str(if n > 0.0 { "Infinity" } else { "-Infinity" })
    } else if n == 0.0 {
        f.write_str("0")
    } else {
        // f64's Display already omits a trailing `.0` for integral values.
        write!(f, "{n}")
    }
}

impl fmt::Display for EnumValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EnumValue::Number(n) => fmt_number(*n, f),
            EnumValue::Str(s) => f.write_str(s),
        }
    }
}

impl fmt::Debug for EnumValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EnumValue::Number(n) => {
                f.write_str("Number(")?;
                fmt_number(*n, f)?;
                f.write_str(")")
            }
            EnumValue::Str(s) => write!(f, "Str({s:?})"),
        }
    }
}

impl From<f64> for EnumValue {
    fn from(n: f64) -> Self {
        EnumValue::Number(n)
    }
}

impl From<i32> for EnumValue {
    fn from(n: i32) -> Self {
        EnumValue::Number(f64::from(n))
    }
}

impl From<u32> for EnumValue {
    fn from(n: u32) -> Self {
        EnumValue::Number(f64::from(n))
    }
}

impl From<i64> for EnumValue {
    #[expect(
        clippy::cast_precision_loss,
        reason = "enum member values are small integers; script hosts store them as f64 too"
    )]
    fn from(n: i64) -> Self {
        EnumValue::Number(n as f64)
    }
}

impl From<&str> for EnumValue {
    fn from(s: &str) -> Self {
        EnumValue::Str(Arc::from(s))
    }
}

impl From<String> for EnumValue {
    fn from(s: String) -> Self {
        EnumValue::Str(Arc::from(s))
    }
}

impl From<Arc<str>> for EnumValue {
    fn from(s: Arc<str>) -> Self {
        EnumValue::Str(s)
    }
}

/// A runtime value that can be matched against dispatch-table member keys.
///
/// Dispatch tables key their ordinary entries by the member's string form,
/// so `1` and `"1"` land on the same entry.
pub trait Member {
    /// The string form used as a dispatch-table key.
    fn member_key(&self) -> Cow<'_, str>;
}

impl Member for str {
    fn member_key(&self) -> Cow<'_, str> {
        Cow::Borrowed(self)
    }
}

impl Member for String {
    fn member_key(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.as_str())
    }
}

impl Member for Arc<str> {
    fn member_key(&self) -> Cow<'_, str> {
        Cow::Borrowed(self)
    }
}

impl Member for EnumValue {
    fn member_key(&self) -> Cow<'_, str> {
        match self {
            EnumValue::Str(s) => Cow::Borrowed(s),
            EnumValue::Number(_) => Cow::Owned(self.to_string()),
        }
    }
}

macro_rules! impl_numeric_member {
    ($($ty:ty),*) => {
        $(
            impl Member for $ty {
                fn member_key(&self) -> Cow<'_, str> {
                    Cow::Owned(EnumValue::from(*self).to_string())
                }
            }
        )*
    };
}

impl_numeric_member!(i32, u32, i64, f64);

impl<T: Member + ?Sized> Member for &T {
    fn member_key(&self) -> Cow<'_, str> {
        (**self).member_key()
    }
}

#[cfg(test)]
mod tests;
