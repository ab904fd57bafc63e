//! ClassRegistryBuilder for constructing an immutable ClassRegistry.

use crate::{ClassDef, ClassKind, ClassRegistry};
use beanmeta_core::{ClassId, ConstraintDeclaration, RawClass, RawMember};
use std::collections::HashMap;
use thiserror::Error;

/// Errors that can occur during registry construction.
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("Duplicate class name: {0}")]
    DuplicateClass(String),

    #[error("Unknown ancestor {ancestor} of class {class}")]
    UnknownAncestor { class: String, ancestor: String },

    #[error("{ancestor} is not an interface (implemented by {class})")]
    NotAnInterface { class: String, ancestor: String },

    #[error("{ancestor} is an interface and cannot be extended by class {class}")]
    NotAClass { class: String, ancestor: String },

    #[error("Class {class} extends more than one class")]
    MultipleSuperclasses { class: String },

    #[error("Duplicate member {member} on class {class}")]
    DuplicateMember { class: String, member: String },
}

/// Builder for constructing an immutable ClassRegistry.
///
/// Ancestors must be registered before the classes that extend them, so a
/// registry built this way never contains an inheritance cycle.
#[derive(Debug, Default)]
pub struct ClassRegistryBuilder {
    classes: HashMap<ClassId, ClassDef>,
}

impl ClassRegistryBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a class definition.
    pub fn add_class(&mut self, name: impl Into<ClassId>) -> ClassBuilder<'_> {
        self.start(name.into(), ClassKind::Class)
    }

    /// Add an interface definition.
    pub fn add_interface(&mut self, name: impl Into<ClassId>) -> ClassBuilder<'_> {
        self.start(name.into(), ClassKind::Interface)
    }

    fn start(&mut self, id: ClassId, kind: ClassKind) -> ClassBuilder<'_> {
        ClassBuilder {
            builder: self,
            raw: RawClass::new(id),
            kind,
            unsupported: None,
            extends: Vec::new(),
        }
    }

    /// Check whether a class has been registered.
    pub fn contains(&self, name: &str) -> bool {
        self.classes.contains_key(&ClassId::new(name))
    }

    /// Build the immutable ClassRegistry.
    pub fn build(self) -> ClassRegistry {
        ClassRegistry::new(self.classes)
    }
}

/// Builder for a class definition.
pub struct ClassBuilder<'a> {
    builder: &'a mut ClassRegistryBuilder,
    raw: RawClass,
    kind: ClassKind,
    unsupported: Option<String>,
    extends: Vec<ClassId>,
}

impl<'a> ClassBuilder<'a> {
    /// Set the superclass (for classes) or add a super-interface (for interfaces).
    pub fn extends(mut self, ancestor: impl Into<ClassId>) -> Self {
        self.extends.push(ancestor.into());
        self
    }

    /// Add an implemented interface.
    pub fn implements(mut self, interface: impl Into<ClassId>) -> Self {
        self.raw.interfaces.push(interface.into());
        self
    }

    /// Add a class-level constraint.
    pub fn constraint(mut self, constraint: ConstraintDeclaration) -> Self {
        self.raw.class_constraints.push(constraint);
        self
    }

    /// Add a member.
    pub fn member(mut self, member: RawMember) -> Self {
        self.raw.members.push(member);
        self
    }

    /// Mark the type itself for cascaded validation.
    pub fn cascaded(mut self) -> Self {
        self.raw.cascaded = true;
        self
    }

    /// Register the class, but fail every introspection of it.
    pub fn unsupported(mut self, reason: impl Into<String>) -> Self {
        self.unsupported = Some(reason.into());
        self
    }

    /// Finish building this class.
    pub fn done(mut self) -> Result<ClassId, RegistryError> {
        let class_name = self.raw.id.name().to_string();

        // Check for duplicate name
        if self.builder.classes.contains_key(&self.raw.id) {
            return Err(RegistryError::DuplicateClass(class_name));
        }

        // Check for duplicate members
        for (i, member) in self.raw.members.iter().enumerate() {
            let duplicate = self.raw.members[..i].iter().any(|other| {
                other.name == member.name
                    && other.kind == member.kind
                    && other.parameter_count == member.parameter_count
            });
            if duplicate {
                return Err(RegistryError::DuplicateMember {
                    class: class_name,
                    member: member.name.clone(),
                });
            }
        }

        // Resolve ancestors
        match self.kind {
            ClassKind::Class => {
                if self.extends.len() > 1 {
                    return Err(RegistryError::MultipleSuperclasses { class: class_name });
                }
                if let Some(parent) = self.extends.pop() {
                    self.check_ancestor(&parent, ClassKind::Class)?;
                    self.raw.superclass = Some(parent);
                }
            }
            ClassKind::Interface => {
                let mut interfaces = std::mem::take(&mut self.extends);
                interfaces.append(&mut self.raw.interfaces);
                self.raw.interfaces = interfaces;
            }
        }
        for interface in &self.raw.interfaces {
            self.check_ancestor(interface, ClassKind::Interface)?;
        }

        let id = self.raw.id.clone();
        let def = ClassDef {
            raw: self.raw,
            kind: self.kind,
            unsupported: self.unsupported,
        };
        self.builder.classes.insert(id.clone(), def);

        Ok(id)
    }

    fn check_ancestor(&self, ancestor: &ClassId, expected: ClassKind) -> Result<(), RegistryError> {
        let class = self.raw.id.name().to_string();
        let ancestor_name = ancestor.name().to_string();
        match self.builder.classes.get(ancestor) {
            None => Err(RegistryError::UnknownAncestor {
                class,
                ancestor: ancestor_name,
            }),
            Some(def) if def.kind != expected => match expected {
                ClassKind::Interface => Err(RegistryError::NotAnInterface {
                    class,
                    ancestor: ancestor_name,
                }),
                ClassKind::Class => Err(RegistryError::NotAClass {
                    class,
                    ancestor: ancestor_name,
                }),
            },
            Some(_) => Ok(()),
        }
    }
}
