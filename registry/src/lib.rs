//! Beanmeta Registry
//!
//! In-memory class declarations. A ClassRegistry answers raw introspection
//! requests for the classes registered through ClassRegistryBuilder, and is
//! immutable after construction.

mod builder;
mod registry;
mod types;

pub use builder::{ClassBuilder, ClassRegistryBuilder, RegistryError};
pub use registry::ClassRegistry;
pub(crate) use types::{ClassDef, ClassKind};
