//! Value visiting.
//!
//! Like [mapping](crate::mapper), but entries are handlers called with the
//! visited value, so results can depend on it or be computed lazily.

use enumkit_model::{Member, Nullable};

use crate::{DispatchError, DispatchTable, TableKey};

/// Handler invoked with the visited value.
pub type Handler<'h, V, R> = Box<dyn Fn(Nullable<V>) -> R + 'h>;

/// Dispatch table whose entries are handlers.
pub type VisitorTable<'h, V, R> = DispatchTable<Handler<'h, V, R>>;

impl<'h, V, R> DispatchTable<Handler<'h, V, R>> {
    /// Add a handler.
    #[must_use]
    pub fn with_handler(
        self,
        key: impl Into<TableKey>,
        handler: impl Fn(Nullable<V>) -> R + 'h,
    ) -> Self {
        self.with_entry(key, Box::new(handler))
    }
}

/// A value waiting to be visited.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[must_use = "a visitee does nothing until `with` is called"]
pub struct Visitee<V> {
    value: Nullable<V>,
}

/// Start visiting a concrete value.
pub fn visit_value<V: Member>(value: V) -> Visitee<V> {
    Visitee {
        value: Nullable::Value(value),
    }
}

/// Start visiting a value that may be null or undefined.
pub fn visit_nullable<V: Member>(value: Nullable<V>) -> Visitee<V> {
    Visitee { value }
}

impl<V: Member> Visitee<V> {
    /// The value being visited.
    pub fn value(&self) -> &Nullable<V> {
        &self.value
    }

    /// Resolve the value in `table` and call the chosen handler with it.
    ///
    /// The handler receives the original value, including for the null,
    /// undefined and unexpected entries.
    ///
    /// # Errors
    ///
    /// Fails as [`Mappee::with`](crate::Mappee::with) does; no handler runs
    /// on error.
    pub fn with<R>(self, table: &VisitorTable<'_, V, R>) -> Result<R, DispatchError> {
        let handler = table.resolve(&self.value)?;
        Ok(handler(self.value))
    }
}
