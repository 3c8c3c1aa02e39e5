//! Field and type eligibility checks for getter synthesis.

use jgen_ir::{IrModifiers, IrStatement, TypeDeclarationKind};

use crate::pipeline::{MethodExistenceIndex, MethodProvenance};

/// Compiler-synthesized fields carry this marker in their name and are never
/// eligible for accessors.
pub const SYNTHETIC_FIELD_MARKER: char = '$';

/// Simple name of the annotation that opts a field or type into getter
/// generation.
pub const GETTER_MARKER_ANNOTATION: &str = "Getter";

/// A field qualifies for a getter when it is an actual field declaration,
/// not compiler-synthesized, and not static.
pub fn field_qualifies_for_getter(field: &IrStatement) -> bool {
    match field {
        IrStatement::FieldDeclaration { name, modifiers, .. } => {
            !name.starts_with(SYNTHETIC_FIELD_MARKER) && !modifiers.is_static
        }
        _ => false,
    }
}

pub fn has_getter_marker(modifiers: &IrModifiers) -> bool {
    modifiers
        .annotations
        .iter()
        .any(|annotation| annotation.simple_name() == GETTER_MARKER_ANNOTATION)
}

/// Getter sweeps apply to classes and enums only.
pub fn type_qualifies_for_getter(kind: &TypeDeclarationKind) -> bool {
    matches!(kind, TypeDeclarationKind::Class | TypeDeclarationKind::Enum)
}

/// Outcome of probing every plausible getter name against the existing
/// method index. The first non-clear provenance wins, scanning in the order
/// the names were derived.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum NameConflict {
    Clear,
    GeneratedEarlier,
    UserAuthored { name: String },
}

pub(crate) fn scan_for_conflicts(names: &[String], index: &dyn MethodExistenceIndex) -> NameConflict {
    for name in names {
        match index.query(name) {
            MethodProvenance::NotExists => continue,
            MethodProvenance::ExistsByGenerator => return NameConflict::GeneratedEarlier,
            MethodProvenance::ExistsByUser => {
                return NameConflict::UserAuthored { name: name.clone() }
            }
        }
    }
    NameConflict::Clear
}
