//! The ClassRegistry - immutable class declaration lookup.

use crate::ClassDef;
use beanmeta_core::{ClassId, IntrospectionError, IntrospectionResult, RawClass, RawTypeIntrospector};
use std::collections::HashMap;

/// The ClassRegistry provides raw declarations for registered classes.
/// It is immutable after construction.
#[derive(Debug, Default)]
pub struct ClassRegistry {
    classes: HashMap<ClassId, ClassDef>,
}

impl ClassRegistry {
    pub(crate) fn new(classes: HashMap<ClassId, ClassDef>) -> Self {
        Self { classes }
    }
}

impl RawTypeIntrospector for ClassRegistry {
    fn introspect(&self, class: &ClassId) -> IntrospectionResult<RawClass> {
        let def = self
            .classes
            .get(class)
            .ok_or_else(|| IntrospectionError::UnknownClass(class.clone()))?;
        if let Some(reason) = &def.unsupported {
            return Err(IntrospectionError::unsupported(class, reason.clone()));
        }
        Ok(def.raw.clone())
    }
}
