//! Metadata error types.

use beanmeta_core::{ClassId, IntrospectionError};
use thiserror::Error;

/// Result type for metadata operations.
pub type MetadataResult<T> = Result<T, MetadataError>;

/// Errors that abort building metadata for a class.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MetadataError {
    #[error(transparent)]
    Introspection(#[from] IntrospectionError),

    #[error("Conflicting cascade declarations for property {property} of {class}")]
    ConflictingCascadeDeclaration { class: ClassId, property: String },

    #[error("Inheritance cycle detected involving class: {0}")]
    InheritanceCycle(ClassId),

    #[error("Member {member} of {class} carries constraints but is not a property")]
    NotAProperty { class: ClassId, member: String },
}

impl MetadataError {
    pub fn conflicting_cascade(class: &ClassId, property: impl Into<String>) -> Self {
        Self::ConflictingCascadeDeclaration {
            class: class.clone(),
            property: property.into(),
        }
    }

    pub fn not_a_property(class: &ClassId, member: impl Into<String>) -> Self {
        Self::NotAProperty {
            class: class.clone(),
            member: member.into(),
        }
    }
}
