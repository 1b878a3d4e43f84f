//! Bidirectional lookup over one enum model.
//!
//! An `EnumWrapper` derives, once, everything needed to validate and
//! translate keys and values of a model:
//!
//! - the member keys in declaration order (numeric reverse entries filtered
//!   out by default, see [`KeyFilter`](crate::KeyFilter))
//! - the set of unique values, in order of first occurrence
//! - a value to key map where the last-declared key for a value wins
//!
//! The wrapper is immutable after construction and can be shared freely.
//!
//! # Example
//!
//! ```text
//! let model = Arc::new(enum_model! { A = 0, B = 1, C = 2 }?);
//! let wrapper = EnumWrapper::new(model);
//! assert_eq!(wrapper.get_keys(), ["A", "B", "C"]);
//! assert_eq!(wrapper.get_key(1)?, "B");
//! assert!(wrapper.as_key("Z").is_err());
//! ```

use std::iter::FusedIterator;
use std::sync::Arc;

use enumkit_model::{EnumModel, EnumValue};
use rustc_hash::{FxHashMap, FxHashSet};

use crate::candidate::{describe_key, describe_value, KeyCandidate, ValueCandidate};
use crate::{WrapperConfig, WrapperError};

/// Derived lookup structures for one [`EnumModel`].
pub struct EnumWrapper {
    model: Arc<EnumModel>,
    /// Member entries in declaration order, after key filtering.
    entries: Vec<(Arc<str>, EnumValue)>,
    /// Map from member key to position in `entries`.
    key_index: FxHashMap<Arc<str>, usize>,
    /// Unique values in order of first occurrence.
    values: Vec<EnumValue>,
    value_set: FxHashSet<EnumValue>,
    /// Last-declared key for each value.
    keys_by_value: FxHashMap<EnumValue, Arc<str>>,
}

impl EnumWrapper {
    /// Build a wrapper with the default configuration.
    ///
    /// Always builds a new wrapper; use an
    /// [`InstanceCache`](crate::InstanceCache) to share one wrapper per model.
    pub fn new(model: Arc<EnumModel>) -> Self {
        Self::with_config(model, &WrapperConfig::default())
    }

    /// Build a wrapper with an explicit configuration.
    pub fn with_config(model: Arc<EnumModel>, config: &WrapperConfig) -> Self {
        let entries: Vec<(Arc<str>, EnumValue)> = model
            .entries()
            .filter(|(key, _)| config.key_filter.keeps(key))
            .map(|(key, value)| (Arc::clone(key), value.clone()))
            .collect();

        let mut key_index = FxHashMap::default();
        let mut values = Vec::new();
        let mut value_set = FxHashSet::default();
        let mut keys_by_value = FxHashMap::default();
        for (i, (key, value)) in entries.iter().enumerate() {
            key_index.insert(Arc::clone(key), i);
            if value_set.insert(value.clone()) {
                values.push(value.clone());
            }
            keys_by_value.insert(value.clone(), Arc::clone(key));
        }

        tracing::debug!(
            model_entries = model.len(),
            keys = entries.len(),
            unique_values = values.len(),
            "built enum wrapper"
        );

        EnumWrapper {
            model,
            entries,
            key_index,
            values,
            value_set,
            keys_by_value,
        }
    }

    /// The wrapped model.
    #[inline]
    pub fn model(&self) -> &Arc<EnumModel> {
        &self.model
    }

    /// Number of member keys.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Member keys in declaration order.
    ///
    /// Returns a fresh vector on every call.
    pub fn get_keys(&self) -> Vec<&str> {
        self.entries.iter().map(|(k, _)| &**k).collect()
    }

    /// Unique values in order of first occurrence.
    ///
    /// Returns a fresh vector on every call. Shorter than [`len`](Self::len)
    /// when the model repeats a value.
    pub fn get_values(&self) -> Vec<EnumValue> {
        self.values.clone()
    }

    /// `(key, value)` pairs in declaration order.
    ///
    /// Returns a fresh vector on every call.
    pub fn get_entries(&self) -> Vec<(&str, EnumValue)> {
        self.entries
            .iter()
            .map(|(k, v)| (&**k, v.clone()))
            .collect()
    }

    /// Position of a key in declaration order.
    pub fn index_of_key<C: KeyCandidate + ?Sized>(&self, candidate: &C) -> Option<usize> {
        candidate
            .candidate_key()
            .and_then(|key| self.key_index.get(key).copied())
    }

    // Keys

    /// Returns `true` if the candidate is a member key.
    pub fn is_key<C: KeyCandidate + ?Sized>(&self, candidate: &C) -> bool {
        self.index_of_key(candidate).is_some()
    }

    /// The candidate as a member key.
    pub fn as_key<C: KeyCandidate + ?Sized>(&self, candidate: &C) -> Result<&str, WrapperError> {
        let i = self.key_position(candidate)?;
        Ok(&*self.entries[i].0)
    }

    fn key_position<C: KeyCandidate + ?Sized>(&self, candidate: &C) -> Result<usize, WrapperError> {
        self.index_of_key(candidate)
            .ok_or_else(|| WrapperError::InvalidKey {
                key: describe_key(candidate),
                expected: self.entries.iter().map(|(k, _)| k.to_string()).collect(),
            })
    }

    /// The candidate as a member key, or `default` if it is not one.
    ///
    /// The default need not itself be a member key.
    pub fn as_key_or_default<'a, C: KeyCandidate + ?Sized>(
        &'a self,
        candidate: &C,
        default: Option<&'a str>,
    ) -> Option<&'a str> {
        self.index_of_key(candidate)
            .map(|i| &*self.entries[i].0)
            .or(default)
    }

    // Values

    /// Look up the stored copy of a candidate value.
    fn find_value<C: ValueCandidate + ?Sized>(&self, candidate: &C) -> Option<&EnumValue> {
        let value = candidate.candidate_value()?;
        self.value_set.get(&*value)
    }

    /// Returns `true` if the candidate is a member value.
    pub fn is_value<C: ValueCandidate + ?Sized>(&self, candidate: &C) -> bool {
        self.find_value(candidate).is_some()
    }

    /// The candidate as a member value.
    pub fn as_value<C: ValueCandidate + ?Sized>(
        &self,
        candidate: &C,
    ) -> Result<EnumValue, WrapperError> {
        self.find_value(candidate)
            .cloned()
            .ok_or_else(|| self.invalid_value(candidate))
    }

    fn invalid_value<C: ValueCandidate + ?Sized>(&self, candidate: &C) -> WrapperError {
        WrapperError::InvalidValue {
            value: describe_value(candidate),
            expected: self.values.iter().map(ToString::to_string).collect(),
        }
    }

    /// The candidate as a member value, or `default` if it is not one.
    pub fn as_value_or_default<C: ValueCandidate + ?Sized>(
        &self,
        candidate: &C,
        default: Option<EnumValue>,
    ) -> Option<EnumValue> {
        self.find_value(candidate).cloned().or(default)
    }

    // Reverse lookup

    /// The key declared for a value. With duplicate values, the
    /// last-declared key wins.
    pub fn get_key<C: ValueCandidate + ?Sized>(&self, value: &C) -> Result<&str, WrapperError> {
        self.find_value(value)
            .and_then(|found| self.key_for(found))
            .ok_or_else(|| self.invalid_value(value))
    }

    /// The key declared for a value, or `default` if it is not a member value.
    pub fn get_key_or_default<'a, C: ValueCandidate + ?Sized>(
        &'a self,
        value: &C,
        default: Option<&'a str>,
    ) -> Option<&'a str> {
        self.find_value(value)
            .and_then(|found| self.key_for(found))
            .or(default)
    }

    #[inline]
    fn key_for(&self, value: &EnumValue) -> Option<&str> {
        self.keys_by_value.get(value).map(|k| &**k)
    }

    // Forward lookup

    /// The value declared for a key.
    pub fn get_value<C: KeyCandidate + ?Sized>(&self, key: &C) -> Result<EnumValue, WrapperError> {
        let i = self.key_position(key)?;
        Ok(self.value_at(i))
    }

    /// The value declared for a key, or `default` if it is not a member key.
    pub fn get_value_or_default<C: KeyCandidate + ?Sized>(
        &self,
        key: &C,
        default: Option<EnumValue>,
    ) -> Option<EnumValue> {
        match self.index_of_key(key) {
            Some(i) => Some(self.value_at(i)),
            None => default,
        }
    }

    /// Read the value of the member at `i` through the model.
    fn value_at(&self, i: usize) -> EnumValue {
        let (key, value) = &self.entries[i];
        self.model.get(key).unwrap_or(value).clone()
    }

    // Iteration

    /// Call `f(value, key, model)` for every member in declaration order.
    pub fn for_each(&self, mut f: impl FnMut(&EnumValue, &str, &EnumModel)) {
        for (key, value) in &self.entries {
            f(value, key, &self.model);
        }
    }

    /// Collect `f(value, key, model)` for every member in declaration order.
    pub fn map<R>(&self, mut f: impl FnMut(&EnumValue, &str, &EnumModel) -> R) -> Vec<R> {
        self.entries
            .iter()
            .map(|(key, value)| f(value, key, &self.model))
            .collect()
    }

    /// Iterate `(key, value)` pairs in declaration order.
    ///
    /// Each call starts a fresh iterator.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.entries.iter(),
        }
    }
}

impl std::fmt::Debug for EnumWrapper {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map()
            .entries(self.entries.iter().map(|(k, v)| (&**k, v)))
            .finish()
    }
}

/// Iterator over a wrapper's `(key, value)` pairs.
#[derive(Clone)]
pub struct Iter<'a> {
    inner: std::slice::Iter<'a, (Arc<str>, EnumValue)>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, &'a EnumValue);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(k, v)| (&**k, v))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for Iter<'_> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(k, v)| (&**k, v))
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl FusedIterator for Iter<'_> {}

impl<'a> IntoIterator for &'a EnumWrapper {
    type Item = (&'a str, &'a EnumValue);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}

#[cfg(test)]
mod tests;
