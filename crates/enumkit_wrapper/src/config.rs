//! Wrapper configuration.

/// Which model keys a wrapper treats as enum members.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum KeyFilter {
    /// Drop keys made only of ASCII digits.
    ///
    /// A numeric enum compiled for a script host carries a reverse entry per
    /// member (`"0" -> "A"`); those entries are not members.
    #[default]
    NumericReverseEntries,
    /// Keep every key. For dictionary-style models whose keys may
    /// legitimately be digit strings.
    KeepAll,
}

impl KeyFilter {
    /// Returns `true` if `key` is a member key under this filter.
    #[inline]
    pub fn keeps(self, key: &str) -> bool {
        match self {
            KeyFilter::NumericReverseEntries => !enumkit_model::is_numeric_key(key),
            KeyFilter::KeepAll => true,
        }
    }
}

/// Configuration applied when building wrappers.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct WrapperConfig {
    /// Filter deciding which model keys are members.
    pub key_filter: KeyFilter,
}

impl WrapperConfig {
    /// Create a config with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the key filter.
    #[must_use]
    pub fn with_key_filter(mut self, key_filter: KeyFilter) -> Self {
        self.key_filter = key_filter;
        self
    }
}
