//! Resolved metadata types.
//!
//! Both types are only mutated while a builder assembles them; once a
//! BeanMetadata is handed out it is shared behind an `Arc` and never
//! changes.

use beanmeta_core::{ClassId, ConstraintDescriptor, MemberKind, RawMember};
use std::collections::{BTreeMap, BTreeSet};

/// One logical property of a class: a field and/or its getter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyMetadata {
    name: String,
    constraints: Vec<ConstraintDescriptor>,
    cascaded: bool,
    member_kinds: BTreeSet<MemberKind>,
    value_type: Option<String>,
}

impl PropertyMetadata {
    pub(crate) fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            constraints: Vec::new(),
            cascaded: false,
            member_kinds: BTreeSet::new(),
            value_type: None,
        }
    }

    /// Property name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// All constraints on the property, including inherited ones.
    pub fn constraints(&self) -> &[ConstraintDescriptor] {
        &self.constraints
    }

    /// Check if the property has at least one constraint.
    pub fn has_constraints(&self) -> bool {
        !self.constraints.is_empty()
    }

    /// Check if validation should walk into the property's value.
    pub fn is_cascaded(&self) -> bool {
        self.cascaded
    }

    /// Check if the property is of interest to validation at all.
    pub fn is_constrained(&self) -> bool {
        self.cascaded || self.has_constraints()
    }

    /// Member kinds the property was merged from.
    pub fn member_kinds(&self) -> impl Iterator<Item = MemberKind> + '_ {
        self.member_kinds.iter().copied()
    }

    /// Declared value type, if the introspector reported one.
    pub fn value_type(&self) -> Option<&str> {
        self.value_type.as_deref()
    }

    /// Fold one member of the same class into this property.
    pub(crate) fn absorb_member(&mut self, member: &RawMember) {
        for declaration in &member.constraints {
            self.add_constraint(ConstraintDescriptor::from_declaration(declaration));
        }
        self.cascaded |= member.cascaded;
        self.member_kinds.insert(member.kind);
        if self.value_type.is_none() {
            self.value_type = member.value_type.clone();
        }
    }

    /// Fold the same property of an ancestor into this one.
    pub(crate) fn inherit(&mut self, ancestor: &PropertyMetadata) {
        for constraint in &ancestor.constraints {
            self.add_constraint(constraint.clone());
        }
        self.cascaded |= ancestor.cascaded;
        self.member_kinds.extend(ancestor.member_kinds.iter().copied());
        if self.value_type.is_none() {
            self.value_type = ancestor.value_type.clone();
        }
    }

    fn add_constraint(&mut self, constraint: ConstraintDescriptor) {
        push_unique(&mut self.constraints, constraint);
    }
}

/// Add a descriptor unless an equal one is already present.
pub(crate) fn push_unique(constraints: &mut Vec<ConstraintDescriptor>, constraint: ConstraintDescriptor) {
    if !constraints.contains(&constraint) {
        constraints.push(constraint);
    }
}

/// Fully resolved, inheritance-merged metadata for one class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BeanMetadata {
    class: ClassId,
    ancestors: Vec<ClassId>,
    class_constraints: Vec<ConstraintDescriptor>,
    properties: BTreeMap<String, PropertyMetadata>,
    cascaded: bool,
    bean_constrained: bool,
}

impl BeanMetadata {
    pub(crate) fn new(
        class: ClassId,
        ancestors: Vec<ClassId>,
        class_constraints: Vec<ConstraintDescriptor>,
        properties: BTreeMap<String, PropertyMetadata>,
        cascaded: bool,
    ) -> Self {
        let bean_constrained = !class_constraints.is_empty()
            || cascaded
            || properties.values().any(PropertyMetadata::is_constrained);
        Self {
            class,
            ancestors,
            class_constraints,
            properties,
            cascaded,
            bean_constrained,
        }
    }

    /// The class described.
    pub fn class(&self) -> &ClassId {
        &self.class
    }

    /// Direct ancestors: superclass first, then interfaces.
    pub fn direct_ancestors(&self) -> &[ClassId] {
        &self.ancestors
    }

    /// Class-level constraints, including those declared on ancestors.
    pub fn class_constraints(&self) -> &[ConstraintDescriptor] {
        &self.class_constraints
    }

    /// Check if the class itself carries constraints.
    pub fn has_class_constraints(&self) -> bool {
        !self.class_constraints.is_empty()
    }

    /// Get a property by name.
    pub fn property(&self, name: &str) -> Option<&PropertyMetadata> {
        self.properties.get(name)
    }

    /// All properties, ordered by name.
    pub fn properties(&self) -> impl Iterator<Item = &PropertyMetadata> {
        self.properties.values()
    }

    /// All property names, ordered.
    pub fn property_names(&self) -> impl Iterator<Item = &str> {
        self.properties.keys().map(|s| s.as_str())
    }

    /// Properties with at least one constraint or a cascade marker.
    pub fn constrained_properties(&self) -> impl Iterator<Item = &PropertyMetadata> {
        self.properties.values().filter(|p| p.is_constrained())
    }

    /// Check if the type itself is marked for cascaded validation.
    pub fn is_cascaded(&self) -> bool {
        self.cascaded
    }

    /// True if the class has a constraint of its own, a constrained or
    /// cascaded property, or is itself cascaded.
    pub fn is_bean_constrained(&self) -> bool {
        self.bean_constrained
    }
}
