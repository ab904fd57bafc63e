//! Bean descriptors.

use crate::{ConstrainedProperties, ElementDescriptor, PropertyDescriptor};
use beanmeta_core::{ClassId, ConstraintDescriptor};
use beanmeta_metadata::BeanMetadata;
use std::sync::Arc;

/// Read-only view of one class's constraint metadata.
///
/// Cheap to create; it only holds a reference to the shared metadata.
#[derive(Debug, Clone)]
pub struct BeanDescriptor {
    metadata: Arc<BeanMetadata>,
}

impl BeanDescriptor {
    pub fn new(metadata: Arc<BeanMetadata>) -> Self {
        Self { metadata }
    }

    /// The described class.
    pub fn element_class(&self) -> &ClassId {
        self.metadata.class()
    }

    /// True iff the class itself carries at least one constraint.
    /// Property constraints and cascading do not count.
    pub fn has_constraints(&self) -> bool {
        self.metadata.has_class_constraints()
    }

    /// True if the class has a constraint of its own, any constrained or
    /// cascaded property, or is itself cascaded.
    pub fn is_bean_constrained(&self) -> bool {
        self.metadata.is_bean_constrained()
    }

    /// Class-level constraints.
    pub fn constraint_descriptors(&self) -> &[ConstraintDescriptor] {
        self.metadata.class_constraints()
    }

    /// The property named `name`, if it has a constraint or is cascaded.
    ///
    /// Unknown and unconstrained properties yield `None`; this never fails.
    pub fn constraints_for_property(&self, name: &str) -> Option<PropertyDescriptor<'_>> {
        self.metadata
            .property(name)
            .filter(|p| p.is_constrained())
            .map(PropertyDescriptor::new)
    }

    /// Like [`constraints_for_property`](Self::constraints_for_property),
    /// for callers probing with a name that may be absent. `None` yields `None`.
    pub fn constraints_for_optional_property(&self, name: Option<&str>) -> Option<PropertyDescriptor<'_>> {
        name.and_then(|name| self.constraints_for_property(name))
    }

    /// All properties with at least one constraint or a cascade marker.
    pub fn constrained_properties(&self) -> ConstrainedProperties<'_> {
        ConstrainedProperties::new(
            self.metadata
                .constrained_properties()
                .map(PropertyDescriptor::new)
                .collect(),
        )
    }

    /// The metadata behind this descriptor.
    pub fn metadata(&self) -> &Arc<BeanMetadata> {
        &self.metadata
    }
}

impl ElementDescriptor for BeanDescriptor {
    fn constraint_descriptors(&self) -> &[ConstraintDescriptor] {
        self.metadata.class_constraints()
    }

    fn element_type(&self) -> Option<&str> {
        Some(self.metadata.class().name())
    }
}
