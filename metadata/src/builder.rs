//! BeanMetadataBuilder for resolving a class and its ancestors.

use crate::types::push_unique;
use crate::{BeanMetadata, MetadataConfig, MetadataError, MetadataResult, PropertyIdentityResolver};
use beanmeta_core::{ClassId, RawTypeIntrospector};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, trace};

/// Builds flattened metadata for one class.
///
/// Ancestors are resolved first, superclass before interfaces, by walking
/// the introspector directly rather than any cache. Each class is
/// introspected at most once per builder, so diamond-shaped interface
/// hierarchies do not repeat work.
pub struct BeanMetadataBuilder<'a> {
    introspector: &'a dyn RawTypeIntrospector,
    resolver: PropertyIdentityResolver,
    /// Classes resolved so far in this build.
    resolved: HashMap<ClassId, Arc<BeanMetadata>>,
    /// Classes whose resolution is underway, innermost last.
    in_progress: Vec<ClassId>,
}

impl<'a> BeanMetadataBuilder<'a> {
    /// Create a new builder.
    pub fn new(introspector: &'a dyn RawTypeIntrospector, config: &MetadataConfig) -> Self {
        Self {
            introspector,
            resolver: PropertyIdentityResolver::new(config.cascade_policy),
            resolved: HashMap::new(),
            in_progress: Vec::new(),
        }
    }

    /// Build the metadata for `class`.
    pub fn build(mut self, class: &ClassId) -> MetadataResult<Arc<BeanMetadata>> {
        debug!(class = %class, "building bean metadata");
        let metadata = self.resolve(class)?;
        debug!(
            class = %class,
            introspected = self.resolved.len(),
            properties = metadata.properties().count(),
            bean_constrained = metadata.is_bean_constrained(),
            "built bean metadata"
        );
        Ok(metadata)
    }

    fn resolve(&mut self, class: &ClassId) -> MetadataResult<Arc<BeanMetadata>> {
        if let Some(metadata) = self.resolved.get(class) {
            return Ok(Arc::clone(metadata));
        }
        if self.in_progress.contains(class) {
            return Err(MetadataError::InheritanceCycle(class.clone()));
        }

        self.in_progress.push(class.clone());
        let result = self.resolve_uncached(class);
        self.in_progress.pop();

        let metadata = Arc::new(result?);
        self.resolved.insert(class.clone(), Arc::clone(&metadata));
        Ok(metadata)
    }

    fn resolve_uncached(&mut self, class: &ClassId) -> MetadataResult<BeanMetadata> {
        let raw = self.introspector.introspect(class)?;
        trace!(class = %class, members = raw.members.len(), "introspected class");

        // Ancestors first
        let ancestor_ids: Vec<ClassId> = raw.ancestors().cloned().collect();
        let mut ancestors = Vec::with_capacity(ancestor_ids.len());
        for ancestor in &ancestor_ids {
            ancestors.push(self.resolve(ancestor)?);
        }

        // Own members
        let own = self.resolver.resolve(&raw)?;
        let mut class_constraints = own.class_constraints;
        let mut properties = own.properties;
        let mut cascaded = raw.cascaded;

        // Merge ancestors into own declarations
        for ancestor in &ancestors {
            for constraint in ancestor.class_constraints() {
                push_unique(&mut class_constraints, constraint.clone());
            }
            for inherited in ancestor.properties() {
                match properties.get_mut(inherited.name()) {
                    Some(property) => property.inherit(inherited),
                    None => {
                        properties.insert(inherited.name().to_string(), inherited.clone());
                    }
                }
            }
            cascaded |= ancestor.is_cascaded();
        }

        Ok(BeanMetadata::new(
            raw.id,
            ancestor_ids,
            class_constraints,
            properties,
            cascaded,
        ))
    }
}
