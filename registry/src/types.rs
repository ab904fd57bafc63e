//! Class definition types.

use beanmeta_core::RawClass;

/// Whether a registered type is a class or an interface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum ClassKind {
    #[default]
    Class,
    Interface,
}

/// A registered class definition.
#[derive(Debug, Clone)]
pub(crate) struct ClassDef {
    /// Raw declarations handed out on introspection.
    pub(crate) raw: RawClass,
    /// Class or interface.
    pub(crate) kind: ClassKind,
    /// Set when the class cannot be introspected; the reason is reported
    /// on every introspection attempt.
    pub(crate) unsupported: Option<String>,
}
