//! Beanmeta Metadata
//!
//! Resolve, merge and cache constraint metadata per class.
//!
//! Responsibilities:
//! - Merge a field and its getter into one property identity
//! - Build flattened metadata for a class and its ancestors
//! - Memoize metadata per class, computing it at most once under concurrency

mod builder;
mod cache;
mod config;
mod error;
mod property;
mod types;

pub use builder::BeanMetadataBuilder;
pub use cache::MetadataCache;
pub use config::{CascadePolicy, MetadataConfig};
pub use error::{MetadataError, MetadataResult};
pub use property::{decapitalize, property_name, PropertyIdentityResolver, ResolvedMembers};
pub use types::{BeanMetadata, PropertyMetadata};
