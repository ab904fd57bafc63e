//! Metadata configuration.

/// How a property's members are allowed to disagree on cascading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CascadePolicy {
    /// Cascade if any member of the property cascades.
    #[default]
    Permissive,
    /// Fail when one declaring member cascades and another does not.
    Strict,
}

/// Settings for building and caching metadata.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MetadataConfig {
    /// Cascade agreement policy within one class.
    pub cascade_policy: CascadePolicy,
    /// Maximum number of cached classes. `None` is unbounded.
    pub cache_capacity: Option<usize>,
}

impl MetadataConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_cascade_policy(mut self, policy: CascadePolicy) -> Self {
        self.cascade_policy = policy;
        self
    }

    pub fn with_cache_capacity(mut self, capacity: usize) -> Self {
        self.cache_capacity = Some(capacity);
        self
    }

    pub fn strict(self) -> Self {
        self.with_cascade_policy(CascadePolicy::Strict)
    }
}
