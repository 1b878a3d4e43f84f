//! Reserved dispatch-table keys and the unhandled-entry sentinel.
//!
//! Reserved keys are enum variants, not strings, and live in slots separate
//! from member entries. A member literally named `"handleNull"` can never
//! land in the null slot.

/// A dispatch-table slot outside the ordinary member entries.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ReservedKey {
    /// Entry used when the value is null.
    HandleNull,
    /// Entry used when the value is undefined.
    HandleUndefined,
    /// Entry used when no other entry matches.
    HandleUnexpected,
}

/// Key of the entry used for null values.
pub const HANDLE_NULL: ReservedKey = ReservedKey::HandleNull;

/// Key of the entry used for undefined values.
pub const HANDLE_UNDEFINED: ReservedKey = ReservedKey::HandleUndefined;

/// Key of the fallback entry used when nothing else matches.
pub const HANDLE_UNEXPECTED: ReservedKey = ReservedKey::HandleUnexpected;

/// Marker for a case declared on purpose but left unimplemented.
///
/// Resolving to an entry set to this sentinel fails with
/// [`DispatchError::Unhandled`](crate::DispatchError::Unhandled).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct UnhandledEntry;

/// The unhandled-entry sentinel.
pub const UNHANDLED_ENTRY: UnhandledEntry = UnhandledEntry;
