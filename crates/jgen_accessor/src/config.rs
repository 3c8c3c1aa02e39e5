use jgen_ir::IrVisibility;
use serde::{Deserialize, Serialize};

/// Access level requested for a generated accessor. `None` suppresses
/// generation entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccessLevel {
    Public,
    Protected,
    Package,
    Private,
    None,
}

impl AccessLevel {
    pub fn visibility(self) -> Option<IrVisibility> {
        match self {
            AccessLevel::Public => Some(IrVisibility::Public),
            AccessLevel::Protected => Some(IrVisibility::Protected),
            AccessLevel::Package => Some(IrVisibility::Package),
            AccessLevel::Private => Some(IrVisibility::Private),
            AccessLevel::None => None,
        }
    }
}

/// Accessor naming configuration, read-only for name derivation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct AccessorConfig {
    /// Recognized field-name prefixes, tried in order. An empty list means
    /// field names are used as-is.
    pub prefixes: Vec<String>,
    /// Accessors keep the bare field name instead of a get/is prefix.
    pub fluent: bool,
    /// Chained setter-style accessors; recorded here because the same
    /// configuration block drives the sibling setter generator.
    pub chain: bool,
    /// Mark generated accessors `final`.
    pub make_final: bool,
}

/// Global options looked up from the surrounding pipeline configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct GeneratorOptions {
    /// Attach `@SuppressWarnings` to lazy getters; the cast out of the
    /// erased holder slot is inherently unchecked.
    pub emit_suppress_warnings: bool,
    /// Include `"all"` alongside `"unchecked"` in the suppression list.
    pub suppress_all: bool,
    /// Checker-framework integration: getters of final fields get `@Pure`.
    pub generate_pure: bool,
    /// Checker-framework integration: getters of non-final fields get
    /// `@SideEffectFree`.
    pub generate_side_effect_free: bool,
}
