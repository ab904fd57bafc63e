//! DescriptorProvider - entry point for descriptor queries.

use crate::BeanDescriptor;
use beanmeta_core::{ClassId, RawTypeIntrospector};
use beanmeta_metadata::{MetadataCache, MetadataConfig, MetadataResult};
use tracing::trace;

/// Hands out bean descriptors backed by a metadata cache.
#[derive(Debug)]
pub struct DescriptorProvider {
    cache: MetadataCache,
}

impl DescriptorProvider {
    /// Create a provider with the default configuration.
    pub fn new(introspector: impl RawTypeIntrospector + 'static) -> Self {
        Self::from_cache(MetadataCache::new(introspector))
    }

    /// Create a provider with the given configuration.
    pub fn with_config(introspector: impl RawTypeIntrospector + 'static, config: MetadataConfig) -> Self {
        Self::from_cache(MetadataCache::with_config(introspector, config))
    }

    pub fn from_cache(cache: MetadataCache) -> Self {
        Self { cache }
    }

    /// Describe the constraints of `class`.
    pub fn constraints_for_class(&self, class: impl Into<ClassId>) -> MetadataResult<BeanDescriptor> {
        let class = class.into();
        trace!(class = %class, "describing class");
        let metadata = self.cache.get_metadata(&class)?;
        Ok(BeanDescriptor::new(metadata))
    }

    pub fn cache(&self) -> &MetadataCache {
        &self.cache
    }
}
