use jgen_ir::{IrAnnotation, Span};

use crate::config::AccessLevel;

/// One getter-generation request, either explicit (per field) or part of a
/// type-level batch sweep.
#[derive(Debug, Clone, PartialEq)]
pub struct GetterRequest {
    pub access_level: AccessLevel,
    /// Rewrite the field into a lazily initialized holder with
    /// double-checked locking; takes precedence over `map_backed`.
    pub lazy: bool,
    /// Body reads from a runtime property map keyed by field name instead of
    /// the field's own storage.
    pub map_backed: bool,
    /// Extra annotations attached verbatim to the generated method.
    pub on_method: Vec<IrAnnotation>,
    /// Explicit per-field requests warn when a user-authored method already
    /// claims the name; batch sweeps stay silent.
    pub whine_if_exists: bool,
    /// Source position of the request, used for diagnostics and for
    /// attributing synthesized code.
    pub span: Span,
}

impl GetterRequest {
    /// Explicit per-field request: conflicts with user methods are reported.
    pub fn explicit(access_level: AccessLevel, span: Span) -> Self {
        Self {
            access_level,
            lazy: false,
            map_backed: false,
            on_method: Vec::new(),
            whine_if_exists: true,
            span,
        }
    }

    /// Type-level batch request: conflicts are skipped silently.
    pub fn batch(access_level: AccessLevel, span: Span) -> Self {
        Self {
            whine_if_exists: false,
            ..Self::explicit(access_level, span)
        }
    }
}
