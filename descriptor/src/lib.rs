//! Beanmeta Descriptor
//!
//! Read-only query views over resolved bean metadata.
//!
//! A DescriptorProvider hands out a fresh BeanDescriptor per request; every
//! descriptor for a class wraps the same shared, immutable metadata.

mod bean;
mod element;
mod property;
mod provider;

pub use bean::BeanDescriptor;
pub use element::ElementDescriptor;
pub use property::{ConstrainedProperties, PropertyDescriptor};
pub use provider::DescriptorProvider;
