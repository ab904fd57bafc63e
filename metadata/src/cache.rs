//! MetadataCache - compute-once metadata per class.

use crate::{BeanMetadata, BeanMetadataBuilder, MetadataConfig, MetadataResult};
use beanmeta_core::{ClassId, RawTypeIntrospector};
use once_cell::sync::OnceCell;
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::{debug, trace, warn};

/// A class's cache slot. Empty until a build for the class succeeds.
type Slot = Arc<OnceCell<Arc<BeanMetadata>>>;

/// Whether a slot can leave the map without orphaning a build. An empty
/// slot held by anyone besides the map has a caller building or waiting on it.
fn is_settled(slot: &Slot) -> bool {
    slot.get().is_some() || Arc::strong_count(slot) == 1
}

#[derive(Default)]
struct Entries {
    slots: HashMap<ClassId, Slot>,
    /// Insertion order, oldest first.
    order: VecDeque<ClassId>,
}

impl Entries {
    fn remove(&mut self, class: &ClassId) -> Option<Slot> {
        let slot = self.slots.remove(class)?;
        self.order.retain(|c| c != class);
        Some(slot)
    }

    /// Evict settled entries, oldest first, until at most `limit` remain.
    /// Slots whose build is still in flight are never evicted.
    fn evict_to(&mut self, limit: usize) {
        while self.slots.len() > limit {
            let victim = self
                .order
                .iter()
                .find(|c| self.slots.get(*c).is_some_and(is_settled))
                .cloned();
            match victim {
                Some(class) => {
                    debug!(class = %class, "evicting cached metadata");
                    self.remove(&class);
                }
                None => break,
            }
        }
    }
}

/// Memoizes BeanMetadata per class.
///
/// Concurrent requests for the same uncached class share one build: the
/// first caller builds, the others block until it finishes. A failed build
/// publishes nothing; a caller already waiting on the slot builds next and
/// its result is the instance every later request sees. A slot is only
/// dropped from the map once nobody is building or waiting on it.
pub struct MetadataCache {
    introspector: Arc<dyn RawTypeIntrospector>,
    config: MetadataConfig,
    entries: Mutex<Entries>,
}

impl MetadataCache {
    /// Create a cache with the default configuration.
    pub fn new(introspector: impl RawTypeIntrospector + 'static) -> Self {
        Self::with_config(introspector, MetadataConfig::default())
    }

    /// Create a cache with the given configuration.
    pub fn with_config(introspector: impl RawTypeIntrospector + 'static, config: MetadataConfig) -> Self {
        Self {
            introspector: Arc::new(introspector),
            config,
            entries: Mutex::new(Entries::default()),
        }
    }

    /// Get the metadata for `class`, building it on first request.
    pub fn get_metadata(&self, class: &ClassId) -> MetadataResult<Arc<BeanMetadata>> {
        let slot = self.slot(class);
        if let Some(metadata) = slot.get() {
            trace!(class = %class, "metadata cache hit");
            return Ok(Arc::clone(metadata));
        }

        let result = slot
            .get_or_try_init(|| {
                debug!(class = %class, "metadata cache miss");
                BeanMetadataBuilder::new(self.introspector.as_ref(), &self.config).build(class)
            })
            .map(Arc::clone);

        match result {
            Ok(metadata) => Ok(metadata),
            Err(error) => {
                warn!(class = %class, error = %error, "failed to build bean metadata");
                drop(slot);
                self.discard_if_idle(class);
                Err(error)
            }
        }
    }

    /// Get the metadata for `class` only if it is already cached.
    pub fn cached(&self, class: &ClassId) -> Option<Arc<BeanMetadata>> {
        self.lock().slots.get(class).and_then(|s| s.get().cloned())
    }

    /// Check if metadata for `class` is cached.
    pub fn contains(&self, class: &ClassId) -> bool {
        self.cached(class).is_some()
    }

    /// Number of cached classes.
    pub fn len(&self) -> usize {
        self.lock().slots.values().filter(|s| s.get().is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop the cached metadata for `class`. Holders of the old metadata
    /// keep it; the next request rebuilds. A build still in flight is left
    /// alone, and `false` is returned.
    pub fn invalidate(&self, class: &ClassId) -> bool {
        let mut entries = self.lock();
        let cached = entries.slots.get(class).is_some_and(|s| s.get().is_some());
        if cached {
            entries.remove(class);
            debug!(class = %class, "invalidated cached metadata");
        }
        cached
    }

    /// Drop all cached metadata. Builds in flight keep their slots.
    pub fn clear(&self) {
        let mut entries = self.lock();
        let Entries { slots, order } = &mut *entries;
        slots.retain(|_, slot| !is_settled(slot));
        order.retain(|c| slots.contains_key(c));
        debug!(in_flight = slots.len(), "cleared metadata cache");
    }

    fn slot(&self, class: &ClassId) -> Slot {
        let mut entries = self.lock();
        if let Some(slot) = entries.slots.get(class) {
            return Arc::clone(slot);
        }

        if let Some(capacity) = self.config.cache_capacity {
            entries.evict_to(capacity.saturating_sub(1));
        }

        let slot = Slot::default();
        entries.slots.insert(class.clone(), Arc::clone(&slot));
        entries.order.push_back(class.clone());
        slot
    }

    /// Remove the slot for `class` if it is empty and nobody else holds it.
    /// The caller must have dropped its own handle first.
    fn discard_if_idle(&self, class: &ClassId) {
        let mut entries = self.lock();
        let idle = entries
            .slots
            .get(class)
            .is_some_and(|s| s.get().is_none() && Arc::strong_count(s) == 1);
        if idle {
            entries.remove(class);
        }
    }

    // The map is never left half-updated, so a poisoned lock is still usable.
    fn lock(&self) -> MutexGuard<'_, Entries> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl std::fmt::Debug for MetadataCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MetadataCache")
            .field("config", &self.config)
            .field("len", &self.len())
            .finish()
    }
}
