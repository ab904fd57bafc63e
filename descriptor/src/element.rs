//! Behavior shared by bean and property descriptors.

use beanmeta_core::ConstraintDescriptor;

/// A constrained element: a bean or one of its properties.
pub trait ElementDescriptor {
    /// Constraints declared on the element.
    fn constraint_descriptors(&self) -> &[ConstraintDescriptor];

    /// Name of the element's type: the class for a bean, the declared value
    /// type for a property.
    fn element_type(&self) -> Option<&str>;

    /// Check if the element carries at least one constraint.
    fn has_constraints(&self) -> bool {
        !self.constraint_descriptors().is_empty()
    }
}
