//! The raw introspection model.
//!
//! An introspector reports what a class declares, one class at a time:
//! its direct ancestors, its members with their raw constraint
//! declarations, and its class-level constraints. Ancestors are walked by
//! the caller, not by the introspector.

use crate::{ClassId, ConstraintDeclaration, IntrospectionResult};
use std::sync::Arc;

/// Kind of member a constraint was declared on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MemberKind {
    /// A field.
    Field,
    /// A method. Only getter-style methods denote a property.
    Method,
}

/// One declared member of a class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawMember {
    /// Member name as declared (`orderNumber`, `getOrderNumber`).
    pub name: String,
    /// Field or method.
    pub kind: MemberKind,
    /// Number of parameters (always 0 for fields).
    pub parameter_count: usize,
    /// Whether a method returns a value (always true for fields).
    pub returns_value: bool,
    /// Declared field type or method return type, if known.
    pub value_type: Option<String>,
    /// Constraints declared on the member.
    pub constraints: Vec<ConstraintDeclaration>,
    /// Whether the member carries a cascade marker.
    pub cascaded: bool,
}

impl RawMember {
    /// A field.
    pub fn field(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: MemberKind::Field,
            parameter_count: 0,
            returns_value: true,
            value_type: None,
            constraints: Vec::new(),
            cascaded: false,
        }
    }

    /// A no-argument method returning a value.
    pub fn getter(name: impl Into<String>) -> Self {
        Self {
            kind: MemberKind::Method,
            ..Self::field(name)
        }
    }

    /// An arbitrary method.
    pub fn method(name: impl Into<String>, parameter_count: usize, returns_value: bool) -> Self {
        Self {
            kind: MemberKind::Method,
            parameter_count,
            returns_value,
            ..Self::field(name)
        }
    }

    pub fn typed(mut self, value_type: impl Into<String>) -> Self {
        self.value_type = Some(value_type.into());
        self
    }

    pub fn constraint(mut self, constraint: ConstraintDeclaration) -> Self {
        self.constraints.push(constraint);
        self
    }

    pub fn cascaded(mut self) -> Self {
        self.cascaded = true;
        self
    }

    /// Whether the member declares anything the metadata model cares about.
    pub fn is_declaring(&self) -> bool {
        self.cascaded || !self.constraints.is_empty()
    }
}

/// Everything one class declares directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawClass {
    /// The class described.
    pub id: ClassId,
    /// Direct superclass, if any.
    pub superclass: Option<ClassId>,
    /// Directly implemented interfaces, in declaration order.
    pub interfaces: Vec<ClassId>,
    /// Constraints declared on the class itself.
    pub class_constraints: Vec<ConstraintDeclaration>,
    /// Declared members, in declaration order.
    pub members: Vec<RawMember>,
    /// Whether the type itself is marked for cascaded validation.
    pub cascaded: bool,
}

impl RawClass {
    pub fn new(id: impl Into<ClassId>) -> Self {
        Self {
            id: id.into(),
            superclass: None,
            interfaces: Vec::new(),
            class_constraints: Vec::new(),
            members: Vec::new(),
            cascaded: false,
        }
    }

    /// Direct ancestors: superclass first, then interfaces in declaration order.
    pub fn ancestors(&self) -> impl Iterator<Item = &ClassId> {
        self.superclass.iter().chain(self.interfaces.iter())
    }
}

/// Source of raw class declarations.
///
/// Implementations report only what a class declares itself; they do not
/// merge ancestors.
pub trait RawTypeIntrospector: Send + Sync {
    /// Describe one class.
    fn introspect(&self, class: &ClassId) -> IntrospectionResult<RawClass>;
}

impl<T: RawTypeIntrospector + ?Sized> RawTypeIntrospector for Arc<T> {
    fn introspect(&self, class: &ClassId) -> IntrospectionResult<RawClass> {
        (**self).introspect(class)
    }
}

impl<T: RawTypeIntrospector + ?Sized> RawTypeIntrospector for &T {
    fn introspect(&self, class: &ClassId) -> IntrospectionResult<RawClass> {
        (**self).introspect(class)
    }
}
