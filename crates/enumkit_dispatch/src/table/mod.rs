//! Dispatch tables.
//!
//! A `DispatchTable<E>` pairs member keys (the string form of each member
//! value) with entries, plus three reserved slots for null, undefined and
//! unexpected values. The mapper and visitor flavors differ only in what `E`
//! is; both resolve through [`DispatchTable::resolve`].
//!
//! # Resolution
//!
//! 1. `Null` uses the null slot, `Undefined` the undefined slot, and a
//!    concrete value the member entry for its string form.
//! 2. With no primary match, the unexpected slot is used.
//! 3. With no unexpected slot either, resolution fails with
//!    [`DispatchError::Unexpected`].
//!
//! Whichever entry is chosen, the [`UNHANDLED_ENTRY`](crate::UNHANDLED_ENTRY)
//! sentinel fails with [`DispatchError::Unhandled`].

use std::borrow::Cow;

use enumkit_model::{EnumValue, Member, Nullable};
use enumkit_wrapper::EnumWrapper;
use rustc_hash::FxHashMap;

use crate::{DispatchError, ReservedKey, UnhandledEntry};

/// Key of a dispatch-table entry.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum TableKey {
    /// An ordinary member, by its string form.
    Member(Box<str>),
    /// A reserved slot.
    Reserved(ReservedKey),
}

impl From<ReservedKey> for TableKey {
    fn from(key: ReservedKey) -> Self {
        TableKey::Reserved(key)
    }
}

impl From<&str> for TableKey {
    fn from(key: &str) -> Self {
        TableKey::Member(key.into())
    }
}

impl From<String> for TableKey {
    fn from(key: String) -> Self {
        TableKey::Member(key.into_boxed_str())
    }
}

impl From<&EnumValue> for TableKey {
    fn from(value: &EnumValue) -> Self {
        TableKey::Member(value.member_key().into())
    }
}

impl From<EnumValue> for TableKey {
    fn from(value: EnumValue) -> Self {
        TableKey::from(&value)
    }
}

macro_rules! impl_numeric_table_key {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for TableKey {
                fn from(value: $ty) -> Self {
                    TableKey::Member(value.member_key().into())
                }
            }
        )*
    };
}

impl_numeric_table_key!(i32, u32, i64, f64);

/// An entry: a handled case or the unhandled sentinel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TableEntry<E> {
    Handled(E),
    Unhandled,
}

impl<E> From<UnhandledEntry> for TableEntry<E> {
    fn from(_: UnhandledEntry) -> Self {
        TableEntry::Unhandled
    }
}

/// Member entries plus reserved slots.
pub struct DispatchTable<E> {
    members: FxHashMap<Box<str>, TableEntry<E>>,
    on_null: Option<TableEntry<E>>,
    on_undefined: Option<TableEntry<E>>,
    on_unexpected: Option<TableEntry<E>>,
}

impl<E> DispatchTable<E> {
    /// Create an empty table.
    pub fn new() -> Self {
        DispatchTable {
            members: FxHashMap::default(),
            on_null: None,
            on_undefined: None,
            on_unexpected: None,
        }
    }

    /// Insert an entry, replacing any previous entry under the same key.
    pub fn insert(&mut self, key: impl Into<TableKey>, entry: impl Into<TableEntry<E>>) {
        let entry = entry.into();
        match key.into() {
            TableKey::Member(member) => {
                self.members.insert(member, entry);
            }
            TableKey::Reserved(reserved) => *self.slot_mut(reserved) = Some(entry),
        }
    }

    /// Add a handled entry.
    #[must_use]
    pub fn with_entry(mut self, key: impl Into<TableKey>, entry: E) -> Self {
        self.insert(key, TableEntry::Handled(entry));
        self
    }

    /// Mark a key as intentionally unimplemented.
    #[must_use]
    pub fn with_unhandled(mut self, key: impl Into<TableKey>) -> Self {
        self.insert(key, TableEntry::Unhandled);
        self
    }

    /// The entry stored under `key`, if any.
    pub fn get(&self, key: &TableKey) -> Option<&TableEntry<E>> {
        match key {
            TableKey::Member(member) => self.members.get(member),
            TableKey::Reserved(reserved) => self.slot(*reserved).as_ref(),
        }
    }

    /// Returns `true` if an entry (handled or not) exists under `key`.
    pub fn contains_key(&self, key: &TableKey) -> bool {
        self.get(key).is_some()
    }

    /// Number of entries, reserved slots included.
    pub fn len(&self) -> usize {
        self.members.len()
            + [&self.on_null, &self.on_undefined, &self.on_unexpected]
                .iter()
                .filter(|slot| slot.is_some())
                .count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn slot(&self, key: ReservedKey) -> &Option<TableEntry<E>> {
        match key {
            ReservedKey::HandleNull => &self.on_null,
            ReservedKey::HandleUndefined => &self.on_undefined,
            ReservedKey::HandleUnexpected => &self.on_unexpected,
        }
    }

    fn slot_mut(&mut self, key: ReservedKey) -> &mut Option<TableEntry<E>> {
        match key {
            ReservedKey::HandleNull => &mut self.on_null,
            ReservedKey::HandleUndefined => &mut self.on_undefined,
            ReservedKey::HandleUnexpected => &mut self.on_unexpected,
        }
    }

    /// Resolve a value to its entry.
    pub fn resolve<V: Member>(&self, value: &Nullable<V>) -> Result<&E, DispatchError> {
        let primary = match value {
            Nullable::Value(v) => self.members.get(&*v.member_key()),
            Nullable::Null => self.on_null.as_ref(),
            Nullable::Undefined => self.on_undefined.as_ref(),
        };

        let entry = match primary.or(self.on_unexpected.as_ref()) {
            Some(entry) => entry,
            None => {
                let value = describe(value).into_owned();
                tracing::debug!(%value, "no dispatch entry matched");
                return Err(DispatchError::Unexpected { value });
            }
        };

        match entry {
            TableEntry::Handled(e) => Ok(e),
            TableEntry::Unhandled => Err(DispatchError::Unhandled {
                value: describe(value).into_owned(),
            }),
        }
    }

    /// Values of `wrapper` with no member entry in this table.
    ///
    /// The unexpected slot does not count as covering a member.
    pub fn missing_members(&self, wrapper: &EnumWrapper) -> Vec<EnumValue> {
        wrapper
            .get_values()
            .into_iter()
            .filter(|value| !self.members.contains_key(&*value.member_key()))
            .collect()
    }

    /// Check that every value of `wrapper` has a member entry.
    pub fn ensure_covers(&self, wrapper: &EnumWrapper) -> Result<(), DispatchError> {
        let missing = self.missing_members(wrapper);
        if missing.is_empty() {
            Ok(())
        } else {
            Err(DispatchError::MissingMembers {
                missing: missing.iter().map(ToString::to_string).collect(),
            })
        }
    }
}

impl<E> Default for DispatchTable<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E, K: Into<TableKey>> FromIterator<(K, E)> for DispatchTable<E> {
    fn from_iter<I: IntoIterator<Item = (K, E)>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::new(), |table, (key, entry)| table.with_entry(key, entry))
    }
}

impl<E: std::fmt::Debug> std::fmt::Debug for DispatchTable<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DispatchTable")
            .field("members", &self.members)
            .field("on_null", &self.on_null)
            .field("on_undefined", &self.on_undefined)
            .field("on_unexpected", &self.on_unexpected)
            .finish()
    }
}

/// Render a dispatched value for error messages.
pub(crate) fn describe<V: Member>(value: &Nullable<V>) -> Cow<'_, str> {
    match value {
        Nullable::Value(v) => v.member_key(),
        Nullable::Null => Cow::Borrowed("null"),
        Nullable::Undefined => Cow::Borrowed("undefined"),
    }
}
