//! Wrapper lookup errors.

/// Error from a strict wrapper lookup.
///
/// Messages list every valid alternative so a bad input can be corrected
/// from the message alone.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum WrapperError {
    /// The candidate is not a declared key.
    #[error("Unexpected key: {key}. Expected one of: {}", .expected.join(", "))]
    InvalidKey { key: String, expected: Vec<String> },

    /// The candidate is not a declared value.
    #[error("Unexpected value: {value}. Expected one of: {}", .expected.join(", "))]
    InvalidValue { value: String, expected: Vec<String> },
}
