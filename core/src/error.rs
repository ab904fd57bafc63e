//! Common error types for beanmeta.

use crate::ClassId;
use thiserror::Error;

/// Errors an introspector raises when it cannot describe a class.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IntrospectionError {
    /// The class is not known to the introspector.
    #[error("Unknown class: {0}")]
    UnknownClass(ClassId),

    /// The class uses a construct the introspector cannot describe.
    #[error("Cannot introspect {class}: {reason}")]
    Unsupported { class: ClassId, reason: String },
}

impl IntrospectionError {
    pub fn unsupported(class: impl Into<ClassId>, reason: impl Into<String>) -> Self {
        Self::Unsupported {
            class: class.into(),
            reason: reason.into(),
        }
    }

    /// The class the error is about.
    pub fn class(&self) -> &ClassId {
        match self {
            Self::UnknownClass(class) => class,
            Self::Unsupported { class, .. } => class,
        }
    }
}

/// Result type for introspection.
pub type IntrospectionResult<T> = Result<T, IntrospectionError>;
