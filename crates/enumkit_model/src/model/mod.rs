//! Ordered name/value models.
//!
//! An `EnumModel` is the enum-like object every other part of enumkit wraps:
//! an immutable mapping from member names to values, kept in declaration
//! order. Keys are unique; values may repeat.
//!
//! Models are usually built once and shared behind an `Arc`. Wrapper caches
//! key on that `Arc`'s identity, so two models with equal contents are still
//! distinct models.

use std::sync::Arc;

use rustc_hash::FxHashMap;

use crate::EnumValue;

/// Error building an [`EnumModel`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ModelError {
    /// The same member name was declared twice.
    #[error("duplicate enum key: {key}")]
    DuplicateKey { key: String },
}

/// An immutable, ordered mapping from member names to values.
#[derive(Clone, Debug, Default)]
pub struct EnumModel {
    /// Entries in declaration order.
    entries: Vec<(Arc<str>, EnumValue)>,
    /// Map from key to position in `entries`.
    index: FxHashMap<Arc<str>, usize>,
}

impl EnumModel {
    /// Start building a model.
    pub fn builder() -> EnumModelBuilder {
        EnumModelBuilder::default()
    }

    /// Build a model from `(key, value)` pairs in declaration order.
    pub fn from_entries<K, V, I>(entries: I) -> Result<Self, ModelError>
    where
        K: Into<Arc<str>>,
        V: Into<EnumValue>,
        I: IntoIterator<Item = (K, V)>,
    {
        entries
            .into_iter()
            .fold(EnumModelBuilder::default(), |builder, (k, v)| builder.entry(k, v))
            .build()
    }

    /// Number of entries, including numeric-looking keys.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up the value declared for `key`.
    #[inline]
    pub fn get(&self, key: &str) -> Option<&EnumValue> {
        self.index.get(key).map(|&i| &self.entries[i].1)
    }

    #[inline]
    pub fn contains_key(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    /// Iterate entries in declaration order.
    pub fn entries(&self) -> impl ExactSizeIterator<Item = (&Arc<str>, &EnumValue)> + '_ {
        self.entries.iter().map(|(k, v)| (k, v))
    }

    /// Iterate keys in declaration order.
    pub fn keys(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.entries.iter().map(|(k, _)| &**k)
    }
}

/// Builder for [`EnumModel`].
///
/// Duplicate keys are reported by [`EnumModelBuilder::build`] rather than at
/// insertion so the builder can be chained.
#[derive(Debug, Default)]
pub struct EnumModelBuilder {
    entries: Vec<(Arc<str>, EnumValue)>,
}

impl EnumModelBuilder {
    /// Append an entry.
    #[must_use]
    pub fn entry(mut self, key: impl Into<Arc<str>>, value: impl Into<EnumValue>) -> Self {
        self.entries.push((key.into(), value.into()));
        self
    }

    /// Finish the model, rejecting duplicate keys.
    pub fn build(self) -> Result<EnumModel, ModelError> {
        let mut index =
            FxHashMap::with_capacity_and_hasher(self.entries.len(), rustc_hash::FxBuildHasher);
        for (i, (key, _)) in self.entries.iter().enumerate() {
            if index.insert(Arc::clone(key), i).is_some() {
                return Err(ModelError::DuplicateKey {
                    key: key.to_string(),
                });
            }
        }
        Ok(EnumModel {
            entries: self.entries,
            index,
        })
    }
}

/// Returns `true` if `key` consists only of ASCII digits.
///
/// Numeric enums compiled for a script host carry an extra reverse entry per
/// member (`"0" -> "A"`). Those entries are recognized by this check.
#[inline]
pub fn is_numeric_key(key: &str) -> bool {
    !key.is_empty() && key.bytes().all(|b| b.is_ascii_digit())
}

/// Declare an [`EnumModel`] inline.
///
/// Expands to a `Result<EnumModel, ModelError>`.
///
/// ```text
/// let color = enum_model! { Red = "r", Green = "g", Blue = "b" }?;
/// let level = enum_model! { Low = 0, Mid = 1, High = 2 }?;
/// ```
#[macro_export]
macro_rules! enum_model {
    ($($key:ident = $value:expr),* $(,)?) => {
        $crate::EnumModel::builder()
            $(.entry(stringify!($key), $value))*
            .build()
    };
}
