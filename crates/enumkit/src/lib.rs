//! Enumkit: enum key/value validation, reverse lookup and dispatch.
//!
//! An enum is modeled as an ordered [`EnumModel`] of `key -> value` entries.
//! [`wrap`] derives an [`EnumWrapper`] for it once per model and shares it
//! through a process-wide [`InstanceCache`]. The wrapper validates keys and
//! values, translates between them and iterates members. The dispatch side
//! ([`map_value`], [`visit_value`]) maps values through tables with
//! null, undefined and unexpected fallbacks.
//!
//! ```text
//! let model = Arc::new(enum_model! { R = "r", G = "g", B = "b" }?);
//! let colors = enumkit::wrap(&model);
//! assert_eq!(colors.get_key("g")?, "G");
//!
//! let table = MapperTable::new()
//!     .with_entry("r", "Red!")
//!     .with_entry(HANDLE_UNEXPECTED, "Unexpected!");
//! assert_eq!(map_value("x").with(&table)?, &"Unexpected!");
//! ```
//!
//! # Crates
//!
//! - `enumkit_model`: values, nullables and models
//! - `enumkit_wrapper`: wrappers, configuration and the instance cache
//! - `enumkit_dispatch`: mapper and visitor tables

use std::sync::{Arc, LazyLock, Once};

pub use enumkit_dispatch::{
    map_nullable, map_value, visit_nullable, visit_value, DispatchError, DispatchTable, Handler,
    Mappee, MapperTable, ReservedKey, TableEntry, TableKey, UnhandledEntry, Visitee, VisitorTable,
    HANDLE_NULL, HANDLE_UNDEFINED, HANDLE_UNEXPECTED, UNHANDLED_ENTRY,
};
pub use enumkit_model::{
    enum_model, is_numeric_key, EnumModel, EnumModelBuilder, EnumValue, Member, ModelError,
    Nullable,
};
pub use enumkit_wrapper::{
    EnumWrapper, InstanceCache, Iter, KeyCandidate, KeyFilter, SharedInstanceCache,
    ValueCandidate, WrapperConfig, WrapperError,
};

/// Any error raised by enumkit.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Model(#[from] ModelError),
    #[error(transparent)]
    Wrapper(#[from] WrapperError),
    #[error(transparent)]
    Dispatch(#[from] DispatchError),
}

/// Result alias over [`Error`].
pub type Result<T, E = Error> = std::result::Result<T, E>;

static DEFAULT_CACHE: LazyLock<InstanceCache> = LazyLock::new(InstanceCache::new);

/// The process-wide cache used by [`wrap`].
pub fn default_cache() -> &'static InstanceCache {
    &DEFAULT_CACHE
}

/// The shared wrapper for `model`.
///
/// Calls with the same `Arc` return the same wrapper.
pub fn wrap(model: &Arc<EnumModel>) -> Arc<EnumWrapper> {
    DEFAULT_CACHE.get_instance(model)
}

/// A fresh wrapper for `model`, bypassing the cache.
pub fn wrap_uncached(model: &Arc<EnumModel>) -> Arc<EnumWrapper> {
    Arc::new(EnumWrapper::new(Arc::clone(model)))
}

static TRACING_INIT: Once = Once::new();

/// Initialize tracing subscriber for debug output.
///
/// Controlled by `RUST_LOG`:
/// - `RUST_LOG=enumkit_wrapper=debug`: wrapper construction
/// - `RUST_LOG=enumkit_wrapper=trace`: cache hits and misses
/// - `RUST_LOG=enumkit_dispatch=debug`: dispatch misses
///
/// Does nothing when `RUST_LOG` is unset or after the first call.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}
