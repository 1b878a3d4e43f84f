//! Inputs accepted by wrapper predicates and lookups.
//!
//! Callers validate loosely typed data, so a candidate may be absent. Every
//! candidate type reduces to an optional key or value; an absent candidate is
//! never a member.

use std::borrow::Cow;
use std::sync::Arc;

use enumkit_model::{EnumValue, Nullable};

/// Something that may name an enum key.
pub trait KeyCandidate {
    /// The candidate key, or `None` if absent.
    fn candidate_key(&self) -> Option<&str>;
}

impl KeyCandidate for str {
    fn candidate_key(&self) -> Option<&str> {
        Some(self)
    }
}

impl KeyCandidate for String {
    fn candidate_key(&self) -> Option<&str> {
        Some(self)
    }
}

impl KeyCandidate for Arc<str> {
    fn candidate_key(&self) -> Option<&str> {
        Some(self)
    }
}

impl<T: KeyCandidate + ?Sized> KeyCandidate for &T {
    fn candidate_key(&self) -> Option<&str> {
        (**self).candidate_key()
    }
}

impl<T: KeyCandidate> KeyCandidate for Option<T> {
    fn candidate_key(&self) -> Option<&str> {
        self.as_ref().and_then(KeyCandidate::candidate_key)
    }
}

impl<T: KeyCandidate> KeyCandidate for Nullable<T> {
    fn candidate_key(&self) -> Option<&str> {
        self.value().and_then(KeyCandidate::candidate_key)
    }
}

/// Something that may be an enum value.
pub trait ValueCandidate {
    /// The candidate value, or `None` if absent.
    fn candidate_value(&self) -> Option<Cow<'_, EnumValue>>;
}

impl ValueCandidate for EnumValue {
    fn candidate_value(&self) -> Option<Cow<'_, EnumValue>> {
        Some(Cow::Borrowed(self))
    }
}

impl ValueCandidate for str {
    fn candidate_value(&self) -> Option<Cow<'_, EnumValue>> {
        Some(Cow::Owned(EnumValue::from(self)))
    }
}

impl ValueCandidate for String {
    fn candidate_value(&self) -> Option<Cow<'_, EnumValue>> {
        Some(Cow::Owned(EnumValue::from(self.as_str())))
    }
}

macro_rules! impl_numeric_candidate {
    ($($ty:ty),*) => {
        $(
            impl ValueCandidate for $ty {
                fn candidate_value(&self) -> Option<Cow<'_, EnumValue>> {
                    Some(Cow::Owned(EnumValue::from(*self)))
                }
            }
        )*
    };
}

impl_numeric_candidate!(i32, u32, i64, f64);

impl<T: ValueCandidate + ?Sized> ValueCandidate for &T {
    fn candidate_value(&self) -> Option<Cow<'_, EnumValue>> {
        (**self).candidate_value()
    }
}

impl<T: ValueCandidate> ValueCandidate for Option<T> {
    fn candidate_value(&self) -> Option<Cow<'_, EnumValue>> {
        self.as_ref().and_then(ValueCandidate::candidate_value)
    }
}

impl<T: ValueCandidate> ValueCandidate for Nullable<T> {
    fn candidate_value(&self) -> Option<Cow<'_, EnumValue>> {
        self.value().and_then(ValueCandidate::candidate_value)
    }
}

/// Render a key candidate for error messages.
pub(crate) fn describe_key<C: KeyCandidate + ?Sized>(candidate: &C) -> String {
    candidate
        .candidate_key()
        .map_or_else(|| "undefined".to_string(), str::to_string)
}

/// Render a value candidate for error messages.
pub(crate) fn describe_value<C: ValueCandidate + ?Sized>(candidate: &C) -> String {
    candidate
        .candidate_value()
        .map_or_else(|| "undefined".to_string(), |v| v.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_candidates() {
        assert_eq!("A".candidate_key(), Some("A"));
        assert_eq!(String::from("B").candidate_key(), Some("B"));
        assert_eq!(Some("C").candidate_key(), Some("C"));
        assert_eq!(None::<&str>.candidate_key(), None);
        assert_eq!(Nullable::<&str>::Null.candidate_key(), None);
        assert_eq!(Nullable::Value("D").candidate_key(), Some("D"));
    }

    #[test]
    fn test_value_candidates() {
        assert_eq!(
            1_i32.candidate_value().as_deref(),
            Some(&EnumValue::from(1))
        );
        assert_eq!(
            "r".candidate_value().as_deref(),
            Some(&EnumValue::from("r"))
        );
        assert_eq!(None::<i32>.candidate_value(), None);
        assert_eq!(Nullable::<i32>::Undefined.candidate_value(), None);
    }

    #[test]
    fn test_describe() {
        assert_eq!(describe_key("Z"), "Z");
        assert_eq!(describe_key(&None::<&str>), "undefined");
        assert_eq!(describe_value(&7_i32), "7");
        assert_eq!(describe_value(&Nullable::<i32>::Null), "undefined");
    }
}
