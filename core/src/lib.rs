//! Beanmeta Core Types
//!
//! This crate provides the foundational types shared by every beanmeta crate:
//! - Class identifiers (ClassId)
//! - Constraint parameter values (the Value enum)
//! - Raw constraint declarations and their immutable descriptors
//! - The raw introspection model and the RawTypeIntrospector contract
//! - Introspection errors

mod constraint;
mod error;
mod id;
mod introspect;
mod value;

pub use constraint::*;
pub use error::*;
pub use id::*;
pub use introspect::*;
pub use value::*;
