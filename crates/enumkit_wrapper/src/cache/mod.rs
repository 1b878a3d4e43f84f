//! Wrapper instance cache.
//!
//! Maps a model's identity to the one wrapper built for it, so wrapping the
//! same model twice yields the same `Arc<EnumWrapper>`.
//!
//! Identity is the address of the model's `Arc` allocation, not its
//! contents: two equal models built separately get separate wrappers. A
//! cached wrapper holds its model, so a cached address is never freed and
//! reused while the entry exists.
//!
//! # Thread Safety
//!
//! The map sits behind a `parking_lot::RwLock`. Lookups take the read lock;
//! a miss upgrades to the write lock and checks again before building, so
//! concurrent first access to one model still yields a single wrapper.

use std::sync::Arc;

use enumkit_model::EnumModel;
use parking_lot::RwLock;
use rustc_hash::FxHashMap;

use crate::{EnumWrapper, WrapperConfig};

/// Identity of a model: the address of its `Arc` allocation.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
struct ModelId(usize);

impl ModelId {
    #[inline]
    fn of(model: &Arc<EnumModel>) -> Self {
        ModelId(Arc::as_ptr(model) as usize)
    }
}

/// Cache of one wrapper per model.
///
/// Entries are never evicted; dropping the cache releases every wrapper and
/// model it holds.
pub struct InstanceCache {
    config: WrapperConfig,
    wrappers: RwLock<FxHashMap<ModelId, Arc<EnumWrapper>>>,
}

impl InstanceCache {
    /// Create an empty cache building wrappers with the default config.
    pub fn new() -> Self {
        Self::with_config(WrapperConfig::default())
    }

    /// Create an empty cache building wrappers with `config`.
    pub fn with_config(config: WrapperConfig) -> Self {
        InstanceCache {
            config,
            wrappers: RwLock::new(FxHashMap::default()),
        }
    }

    /// The config applied to wrappers this cache builds.
    #[inline]
    pub fn config(&self) -> &WrapperConfig {
        &self.config
    }

    /// The cached wrapper for `model`, if any.
    pub fn get(&self, model: &Arc<EnumModel>) -> Option<Arc<EnumWrapper>> {
        self.wrappers.read().get(&ModelId::of(model)).cloned()
    }

    /// Store a wrapper under its own model.
    ///
    /// The first wrapper stored for a model stays; the returned `Arc` is the
    /// one now cached.
    pub fn set(&self, wrapper: Arc<EnumWrapper>) -> Arc<EnumWrapper> {
        let id = ModelId::of(wrapper.model());
        Arc::clone(self.wrappers.write().entry(id).or_insert(wrapper))
    }

    /// The wrapper for `model`, building and caching it on first use.
    pub fn get_instance(&self, model: &Arc<EnumModel>) -> Arc<EnumWrapper> {
        let id = ModelId::of(model);

        // Fast path: already cached
        if let Some(wrapper) = self.wrappers.read().get(&id) {
            tracing::trace!(model = id.0, "enum wrapper cache hit");
            return Arc::clone(wrapper);
        }

        // Slow path: build under the write lock
        let mut guard = self.wrappers.write();

        // Double-check after acquiring write lock
        if let Some(wrapper) = guard.get(&id) {
            return Arc::clone(wrapper);
        }

        tracing::trace!(model = id.0, "enum wrapper cache miss");
        let wrapper = Arc::new(EnumWrapper::with_config(Arc::clone(model), &self.config));
        guard.insert(id, Arc::clone(&wrapper));
        wrapper
    }

    /// Number of cached wrappers (O(1)).
    pub fn len(&self) -> usize {
        self.wrappers.read().len()
    }

    /// Check if nothing has been cached yet.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for InstanceCache {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for InstanceCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InstanceCache")
            .field("config", &self.config)
            .field("len", &self.len())
            .finish()
    }
}

/// Shared instance cache for handing one cache to several components.
///
/// Cloning shares the underlying cache. Borrow `&InstanceCache` instead when
/// the owner outlives every user.
#[derive(Clone, Default, Debug)]
pub struct SharedInstanceCache(Arc<InstanceCache>);

impl SharedInstanceCache {
    /// Create a new shared cache with the default config.
    pub fn new() -> Self {
        SharedInstanceCache(Arc::new(InstanceCache::new()))
    }

    /// Create a new shared cache with `config`.
    pub fn with_config(config: WrapperConfig) -> Self {
        SharedInstanceCache(Arc::new(InstanceCache::with_config(config)))
    }
}

impl std::ops::Deref for SharedInstanceCache {
    type Target = InstanceCache;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
