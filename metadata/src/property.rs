//! Property identity resolution.
//!
//! A field `name` and a getter `getName()`/`isName()` denote the same
//! property. This module groups the members of one class by that identity
//! and folds their declarations together. Ancestors are not consulted here.

use crate::types::push_unique;
use crate::{CascadePolicy, MetadataError, MetadataResult, PropertyMetadata};
use beanmeta_core::{ConstraintDescriptor, MemberKind, RawClass, RawMember};
use std::collections::BTreeMap;
use tracing::trace;

/// Members of one class, grouped by property identity.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedMembers {
    /// Constraints declared on the class itself.
    pub class_constraints: Vec<ConstraintDescriptor>,
    /// Properties by name.
    pub properties: BTreeMap<String, PropertyMetadata>,
}

/// Groups a class's own members into properties.
#[derive(Debug, Clone, Copy, Default)]
pub struct PropertyIdentityResolver {
    policy: CascadePolicy,
}

impl PropertyIdentityResolver {
    pub fn new(policy: CascadePolicy) -> Self {
        Self { policy }
    }

    /// Resolve the members declared directly on `raw`.
    pub fn resolve(&self, raw: &RawClass) -> MetadataResult<ResolvedMembers> {
        let mut class_constraints = Vec::new();
        for declaration in &raw.class_constraints {
            push_unique(&mut class_constraints, ConstraintDescriptor::from_declaration(declaration));
        }

        let mut identities: BTreeMap<String, Vec<&RawMember>> = BTreeMap::new();
        for member in &raw.members {
            match property_name(member) {
                Some(name) => identities.entry(name).or_default().push(member),
                None if member.is_declaring() => {
                    return Err(MetadataError::not_a_property(&raw.id, &member.name));
                }
                None => {
                    trace!(class = %raw.id, member = %member.name, "skipping non-property member");
                }
            }
        }

        let mut properties = BTreeMap::new();
        for (name, members) in identities {
            if self.policy == CascadePolicy::Strict && !cascade_agrees(&members) {
                return Err(MetadataError::conflicting_cascade(&raw.id, name));
            }

            let mut property = PropertyMetadata::new(name.clone());
            for member in members {
                property.absorb_member(member);
            }
            properties.insert(name, property);
        }

        Ok(ResolvedMembers {
            class_constraints,
            properties,
        })
    }
}

/// Members without declarations do not take part in the agreement check.
fn cascade_agrees(members: &[&RawMember]) -> bool {
    let mut declaring = members.iter().filter(|m| m.is_declaring());
    match declaring.next() {
        Some(first) => declaring.all(|m| m.cascaded == first.cascaded),
        None => true,
    }
}

/// The property a member denotes, if any.
///
/// Fields denote the property of the same name. Methods denote one only
/// when they take no parameters, return a value and follow the
/// `get<Name>`/`is<Name>` convention.
pub fn property_name(member: &RawMember) -> Option<String> {
    match member.kind {
        MemberKind::Field => Some(member.name.clone()),
        MemberKind::Method => {
            if member.parameter_count != 0 || !member.returns_value {
                return None;
            }
            let rest = member
                .name
                .strip_prefix("get")
                .or_else(|| member.name.strip_prefix("is"))?;
            if !rest.chars().next()?.is_uppercase() {
                return None;
            }
            Some(decapitalize(rest))
        }
    }
}

/// Lower-case the first character, unless the first two are both
/// upper-case (`URL` stays `URL`).
pub fn decapitalize(name: &str) -> String {
    let mut chars = name.chars();
    let first = match chars.next() {
        Some(c) => c,
        None => return String::new(),
    };
    if let Some(second) = chars.clone().next() {
        if first.is_uppercase() && second.is_uppercase() {
            return name.to_string();
        }
    }
    first.to_lowercase().chain(chars).collect()
}
