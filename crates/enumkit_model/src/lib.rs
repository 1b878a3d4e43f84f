//! Enumkit model types.
//!
//! This crate holds the data every other enumkit crate works on:
//! - [`EnumValue`]: a number or string member value with same-value-zero
//!   equality
//! - [`Member`]: how a runtime value is keyed in a dispatch table
//! - [`Nullable`]: a value that may be null or undefined
//! - [`EnumModel`]: an ordered, immutable name to value mapping
//!
//! # Features
//!
//! - `serde`: `Serialize`/`Deserialize` for [`EnumValue`] and [`EnumModel`].
//!   A model deserializes only from a map, in document order.

mod model;
mod nullable;
#[cfg(feature = "serde")]
mod serde_impl;
mod value;

pub use model::{is_numeric_key, EnumModel, EnumModelBuilder, ModelError};
pub use nullable::Nullable;
pub use value::{EnumValue, Member};
