//! Constraint declarations and descriptors.
//!
//! A ConstraintDeclaration is what an introspector extracts from a type's
//! definition. A ConstraintDescriptor is the normalized, immutable form the
//! metadata model hands out to callers.

use crate::{ClassId, Parameters, Value};
use std::collections::BTreeSet;

/// Name of the group a constraint belongs to when it declares none.
pub const DEFAULT_GROUP: &str = "Default";

/// One raw constraint declaration attached to a type, field or accessor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstraintDeclaration {
    /// Constraint kind (e.g. "NotNull", "Size").
    pub kind: String,
    /// Configuration parameters by name.
    pub parameters: Parameters,
    /// Value types the constraint can validate.
    pub validated_types: Vec<String>,
    /// Constraints this one is composed of.
    pub composing: Vec<ConstraintDeclaration>,
    /// Declared groups (empty means the default group).
    pub groups: Vec<String>,
    /// Declared payload types.
    pub payload: Vec<ClassId>,
    /// Whether composing constraints report as a single violation.
    pub report_as_single_violation: bool,
}

impl ConstraintDeclaration {
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            parameters: Parameters::new(),
            validated_types: Vec::new(),
            composing: Vec::new(),
            groups: Vec::new(),
            payload: Vec::new(),
            report_as_single_violation: false,
        }
    }

    pub fn with_param(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.parameters.insert(name.into(), value.into());
        self
    }

    pub fn with_params(mut self, parameters: Parameters) -> Self {
        self.parameters.extend(parameters);
        self
    }

    pub fn validates(mut self, type_name: impl Into<String>) -> Self {
        self.validated_types.push(type_name.into());
        self
    }

    pub fn composed_of(mut self, constraint: ConstraintDeclaration) -> Self {
        self.composing.push(constraint);
        self
    }

    pub fn in_group(mut self, group: impl Into<String>) -> Self {
        self.groups.push(group.into());
        self
    }

    pub fn with_payload(mut self, payload: impl Into<ClassId>) -> Self {
        self.payload.push(payload.into());
        self
    }

    pub fn report_as_single_violation(mut self) -> Self {
        self.report_as_single_violation = true;
        self
    }
}

/// Immutable description of one constraint.
///
/// Two descriptors are equal when their whole configuration is equal,
/// including composing constraints. A declaration repeated verbatim on a
/// field and its accessor therefore yields a single descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ConstraintDescriptor {
    kind: String,
    parameters: Parameters,
    validated_types: BTreeSet<String>,
    composing: Vec<ConstraintDescriptor>,
    groups: BTreeSet<String>,
    payload: BTreeSet<ClassId>,
    report_as_single_violation: bool,
}

impl ConstraintDescriptor {
    /// Build a descriptor from a raw declaration, normalizing groups and
    /// building composing descriptors recursively.
    pub fn from_declaration(declaration: &ConstraintDeclaration) -> Self {
        let mut groups: BTreeSet<String> = declaration.groups.iter().cloned().collect();
        if groups.is_empty() {
            groups.insert(DEFAULT_GROUP.to_string());
        }

        let mut composing: Vec<ConstraintDescriptor> = Vec::new();
        for child in &declaration.composing {
            let child = Self::from_declaration(child);
            if !composing.contains(&child) {
                composing.push(child);
            }
        }

        Self {
            kind: declaration.kind.clone(),
            parameters: declaration.parameters.clone(),
            validated_types: declaration.validated_types.iter().cloned().collect(),
            composing,
            groups,
            payload: declaration.payload.iter().cloned().collect(),
            report_as_single_violation: declaration.report_as_single_violation,
        }
    }

    /// Constraint kind identifier.
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// All configuration parameters.
    pub fn parameters(&self) -> &Parameters {
        &self.parameters
    }

    /// Get one configuration parameter.
    pub fn parameter(&self, name: &str) -> Option<&Value> {
        self.parameters.get(name)
    }

    /// Value types this constraint applies to.
    pub fn validated_types(&self) -> impl Iterator<Item = &str> {
        self.validated_types.iter().map(|s| s.as_str())
    }

    /// Constraints this one is composed of.
    pub fn composing_constraints(&self) -> &[ConstraintDescriptor] {
        &self.composing
    }

    /// Whether this constraint is composed of other constraints.
    pub fn is_composed(&self) -> bool {
        !self.composing.is_empty()
    }

    /// Groups this constraint belongs to. Never empty.
    pub fn groups(&self) -> impl Iterator<Item = &str> {
        self.groups.iter().map(|s| s.as_str())
    }

    /// Check group membership.
    pub fn in_group(&self, group: &str) -> bool {
        self.groups.contains(group)
    }

    /// Payload types attached to the constraint.
    pub fn payload(&self) -> impl Iterator<Item = &ClassId> {
        self.payload.iter()
    }

    pub fn reports_as_single_violation(&self) -> bool {
        self.report_as_single_violation
    }
}

impl From<&ConstraintDeclaration> for ConstraintDescriptor {
    fn from(declaration: &ConstraintDeclaration) -> Self {
        Self::from_declaration(declaration)
    }
}
