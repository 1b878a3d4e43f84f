//! Value mapping.
//!
//! Maps an enum value (or null/undefined) to a pre-computed result through a
//! [`MapperTable`]:
//!
//! ```text
//! let table = MapperTable::new()
//!     .with_entry("r", "Red!")
//!     .with_entry("g", "Green!")
//!     .with_entry(HANDLE_UNEXPECTED, "Unexpected!");
//! assert_eq!(map_value("g").with(&table)?, &"Green!");
//! ```

use enumkit_model::{Member, Nullable};

use crate::{DispatchError, DispatchTable};

/// Dispatch table whose entries are plain results.
pub type MapperTable<R> = DispatchTable<R>;

/// A value waiting to be mapped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[must_use = "a mappee does nothing until `with` is called"]
pub struct Mappee<V> {
    value: Nullable<V>,
}

/// Start mapping a concrete value.
pub fn map_value<V: Member>(value: V) -> Mappee<V> {
    Mappee {
        value: Nullable::Value(value),
    }
}

/// Start mapping a value that may be null or undefined.
pub fn map_nullable<V: Member>(value: Nullable<V>) -> Mappee<V> {
    Mappee { value }
}

impl<V: Member> Mappee<V> {
    /// The value being mapped.
    pub fn value(&self) -> &Nullable<V> {
        &self.value
    }

    /// Look the value up in `table`.
    ///
    /// # Errors
    ///
    /// [`DispatchError::Unhandled`] if the chosen entry is the unhandled
    /// sentinel, [`DispatchError::Unexpected`] if nothing matched and the
    /// table has no unexpected-value entry.
    pub fn with<R>(self, table: &MapperTable<R>) -> Result<&R, DispatchError> {
        table.resolve(&self.value)
    }
}
