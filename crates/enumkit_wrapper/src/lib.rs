//! Enumkit wrappers.
//!
//! Wraps an [`EnumModel`](enumkit_model::EnumModel) with derived lookup
//! structures for key/value validation, translation, and iteration:
//! - [`EnumWrapper`]: bidirectional lookup over one model
//! - [`InstanceCache`]: one shared wrapper per model identity
//! - [`WrapperConfig`]: which model keys count as members
//!
//! # Strict and Soft Lookups
//!
//! Every lookup comes in two flavors. Strict lookups (`as_key`, `get_value`,
//! ...) return a [`WrapperError`] listing the valid alternatives. Soft
//! lookups (`as_key_or_default`, `get_value_or_default`, ...) fall back to a
//! caller-supplied default.

mod cache;
mod candidate;
mod config;
mod errors;
mod wrapper;

pub use cache::{InstanceCache, SharedInstanceCache};
pub use candidate::{KeyCandidate, ValueCandidate};
pub use config::{KeyFilter, WrapperConfig};
pub use errors::WrapperError;
pub use wrapper::{EnumWrapper, Iter};
