//! Property descriptors.

use crate::ElementDescriptor;
use beanmeta_core::{ConstraintDescriptor, MemberKind};
use beanmeta_metadata::PropertyMetadata;
use std::fmt;

/// Read-only view of one constrained or cascaded property.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct PropertyDescriptor<'a> {
    property: &'a PropertyMetadata,
}

impl<'a> PropertyDescriptor<'a> {
    pub(crate) fn new(property: &'a PropertyMetadata) -> Self {
        Self { property }
    }

    /// Property name.
    pub fn property_name(&self) -> &'a str {
        self.property.name()
    }

    /// Constraints on the property, field and getter combined, including
    /// inherited ones. Order is not significant.
    pub fn constraint_descriptors(&self) -> &'a [ConstraintDescriptor] {
        self.property.constraints()
    }

    /// Check if validation walks into the property's value.
    pub fn is_cascaded(&self) -> bool {
        self.property.is_cascaded()
    }

    /// Member kinds the property was declared through.
    pub fn member_kinds(&self) -> impl Iterator<Item = MemberKind> + 'a {
        self.property.member_kinds()
    }
}

impl ElementDescriptor for PropertyDescriptor<'_> {
    fn constraint_descriptors(&self) -> &[ConstraintDescriptor] {
        self.property.constraints()
    }

    fn element_type(&self) -> Option<&str> {
        self.property.value_type()
    }
}

impl fmt::Debug for PropertyDescriptor<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PropertyDescriptor")
            .field("name", &self.property_name())
            .field("constraints", &self.property.constraints().len())
            .field("cascaded", &self.is_cascaded())
            .finish()
    }
}

/// Snapshot of a bean's constrained properties.
///
/// The snapshot offers no way to add or remove properties; shared metadata
/// cannot be changed through it.
///
/// ```compile_fail
/// use beanmeta_descriptor::{ConstrainedProperties, PropertyDescriptor};
///
/// fn add<'a>(properties: &mut ConstrainedProperties<'a>, property: PropertyDescriptor<'a>) {
///     properties.insert(property);
/// }
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct ConstrainedProperties<'a> {
    properties: Vec<PropertyDescriptor<'a>>,
}

impl<'a> ConstrainedProperties<'a> {
    pub(crate) fn new(properties: Vec<PropertyDescriptor<'a>>) -> Self {
        Self { properties }
    }

    /// Number of constrained properties.
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Iterate over the properties, ordered by name.
    pub fn iter(&self) -> std::slice::Iter<'_, PropertyDescriptor<'a>> {
        self.properties.iter()
    }

    /// Get a property by name.
    pub fn get(&self, name: &str) -> Option<PropertyDescriptor<'a>> {
        self.properties
            .iter()
            .find(|p| p.property_name() == name)
            .copied()
    }

    /// Check if a property is in the snapshot.
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Property names, ordered.
    pub fn names(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.properties.iter().map(|p| p.property_name())
    }
}

impl<'a> IntoIterator for ConstrainedProperties<'a> {
    type Item = PropertyDescriptor<'a>;
    type IntoIter = std::vec::IntoIter<PropertyDescriptor<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.properties.into_iter()
    }
}

impl<'s, 'a> IntoIterator for &'s ConstrainedProperties<'a> {
    type Item = &'s PropertyDescriptor<'a>;
    type IntoIter = std::slice::Iter<'s, PropertyDescriptor<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.properties.iter()
    }
}

impl fmt::Debug for ConstrainedProperties<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.properties.iter()).finish()
    }
}
