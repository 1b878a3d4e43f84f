//! Dispatch errors.

/// Error resolving a value against a dispatch table.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DispatchError {
    /// The matched entry is the unhandled-entry sentinel.
    ///
    /// A programmer signal: the case was declared but never implemented.
    #[error("Unhandled value: {value}")]
    Unhandled { value: String },

    /// No entry matched and the table has no unexpected-value fallback.
    ///
    /// A data error: the value is outside the declared members.
    #[error("Unexpected value: {value}")]
    Unexpected { value: String },

    /// The table lacks entries for some values of a wrapped enum.
    #[error("dispatch table has no entry for: {}", .missing.join(", "))]
    MissingMembers { missing: Vec<String> },
}
