//! Annotation propagation from fields onto synthesized getters.

use std::collections::HashSet;

use jgen_ir::{
    IrAnnotation, IrAnnotationArgument, IrAnnotationValue, IrModifiers, Literal, Span,
};
use once_cell::sync::Lazy;

use crate::config::GeneratorOptions;

pub const DELEGATE_ANNOTATION: &str = "Delegate";
pub const DEPRECATED_ANNOTATION: &str = "java.lang.Deprecated";
pub const PURE_ANNOTATION: &str = "org.checkerframework.dataflow.qual.Pure";
pub const SIDE_EFFECT_FREE_ANNOTATION: &str = "org.checkerframework.dataflow.qual.SideEffectFree";
pub const SUPPRESS_WARNINGS_ANNOTATION: &str = "java.lang.SuppressWarnings";

/// Nullability annotations that are copied from the field onto the getter,
/// matched by simple name regardless of package.
static COPYABLE_ANNOTATIONS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    ["NonNull", "Nullable", "NotNull", "Nonnull", "CheckForNull"]
        .into_iter()
        .collect()
});

pub(crate) fn copyable_annotations(modifiers: &IrModifiers) -> Vec<IrAnnotation> {
    modifiers
        .annotations
        .iter()
        .filter(|annotation| COPYABLE_ANNOTATIONS.contains(annotation.simple_name()))
        .cloned()
        .collect()
}

pub(crate) fn is_field_deprecated(modifiers: &IrModifiers) -> bool {
    modifiers
        .annotations
        .iter()
        .any(|annotation| annotation.simple_name() == "Deprecated")
}

/// Splits delegation markers off an annotation list. Delegation attaches to
/// the accessor, not the field, so the markers migrate onto the getter and
/// the rest stay behind.
pub(crate) fn extract_delegates(
    annotations: Vec<IrAnnotation>,
) -> (Vec<IrAnnotation>, Vec<IrAnnotation>) {
    let (kept, delegates): (Vec<_>, Vec<_>) = annotations
        .into_iter()
        .partition(|annotation| annotation.simple_name() != DELEGATE_ANNOTATION);
    (kept, delegates)
}

/// Checker-framework purity marker: a getter over a final field is `@Pure`,
/// one over a mutable field is only `@SideEffectFree`.
pub(crate) fn purity_annotation(
    field_is_final: bool,
    options: &GeneratorOptions,
    span: &Span,
) -> Option<IrAnnotation> {
    if field_is_final && options.generate_pure {
        return Some(IrAnnotation::marker(PURE_ANNOTATION, span.clone()));
    }
    if !field_is_final && options.generate_side_effect_free {
        return Some(IrAnnotation::marker(SIDE_EFFECT_FREE_ANNOTATION, span.clone()));
    }
    None
}

/// `@SuppressWarnings({"all", "unchecked"})` (or just `"unchecked"`) for
/// bodies containing an unchecked cast.
pub(crate) fn suppress_warnings_annotation(options: &GeneratorOptions, span: &Span) -> IrAnnotation {
    let mut keys = Vec::new();
    if options.suppress_all {
        keys.push(IrAnnotationValue::Literal(Literal::String("all".to_string())));
    }
    keys.push(IrAnnotationValue::Literal(Literal::String(
        "unchecked".to_string(),
    )));
    IrAnnotation {
        name: jgen_ir::AnnotationName::parse(SUPPRESS_WARNINGS_ANNOTATION),
        arguments: vec![IrAnnotationArgument::Positional(IrAnnotationValue::Array(
            keys,
        ))],
        span: span.clone(),
    }
}

/// Annotations placed on a synthesized getter, in emission order:
/// deprecation first, then purity, then the caller-requested extras, then
/// nullability copied from the field.
pub(crate) fn method_annotations(
    field_modifiers: &IrModifiers,
    options: &GeneratorOptions,
    on_method: &[IrAnnotation],
    span: &Span,
) -> Vec<IrAnnotation> {
    let mut annotations = Vec::new();
    if is_field_deprecated(field_modifiers) {
        annotations.push(IrAnnotation::marker(DEPRECATED_ANNOTATION, span.clone()));
    }
    if let Some(purity) = purity_annotation(field_modifiers.is_final, options, span) {
        annotations.push(purity);
    }
    annotations.extend(on_method.iter().cloned());
    annotations.extend(copyable_annotations(field_modifiers));
    annotations
}
