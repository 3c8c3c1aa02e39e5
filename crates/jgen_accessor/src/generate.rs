//! Getter generation entry points.
//!
//! `generate_getter_for_field` handles one explicit request;
//! `generate_getters_for_type` sweeps a class or enum. Both hand finished
//! artifacts to the session's injector and report problems through its
//! diagnostic sink, so a caller never observes a partially applied rewrite.

use jgen_ir::{IrExpression, IrModifiers, IrStatement, IrVisibility, JavaType, Span};
use tracing::debug;

use crate::body::{map_getter_body, plain_getter_body};
use crate::config::{AccessLevel, AccessorConfig, GeneratorOptions};
use crate::eligibility::{
    field_qualifies_for_getter, has_getter_marker, scan_for_conflicts, type_qualifies_for_getter,
    NameConflict,
};
use crate::error::GetterDiagnostic;
use crate::lazy::{check_lazy_preconditions, lower_lazy_getter};
use crate::metadata::{extract_delegates, method_annotations, suppress_warnings_annotation};
use crate::naming::{all_getter_names, getter_name};
use crate::pipeline::{GeneratorSession, GetterArtifact};
use crate::request::GetterRequest;

/// Result of one field-level generation attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GetterOutcome {
    Generated,
    Skipped(SkipReason),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// `AccessLevel::None` suppresses generation.
    AccessLevelNone,
    /// Target was not a field declaration, or the field is static or
    /// compiler-synthesized.
    InvalidTarget,
    /// Field carries its own marker; the batch sweep defers to the explicit
    /// per-field request.
    ExplicitRequestPending,
    LazyPreconditionViolated,
    NoMatchingPrefix,
    /// A previous run already synthesized this accessor.
    GeneratedEarlier,
    UserMethodExists,
}

/// Synthesizes a getter for a single field and injects it into `owner`.
pub fn generate_getter_for_field(
    field: &IrStatement,
    owner: &str,
    request: &GetterRequest,
    session: &mut GeneratorSession<'_>,
) -> GetterOutcome {
    if let Some(outcome) = check_access_level(request, session) {
        return outcome;
    }
    create_getter_for_field(field, owner, request, session)
}

/// Sweeps every eligible field of a class or enum. Returns the per-field
/// outcomes paired with field names, in declaration order.
pub fn generate_getters_for_type(
    type_decl: &IrStatement,
    request: &GetterRequest,
    session: &mut GeneratorSession<'_>,
) -> Vec<(String, GetterOutcome)> {
    let (type_name, kind, fields, type_modifiers) = match type_decl {
        IrStatement::ClassDeclaration {
            name,
            kind,
            fields,
            modifiers,
            ..
        } => (name, kind, fields, modifiers),
        other => {
            GetterDiagnostic::UnsupportedTarget {
                span: statement_span(other).clone(),
            }
            .report(session.diagnostics);
            return Vec::new();
        }
    };
    // Level suppression comes first: AccessLevel::None turns the whole
    // sweep into a no-op, even on kinds that would otherwise be rejected.
    if let Some(outcome) = check_access_level(request, session) {
        return fields
            .iter()
            .filter_map(|field| match field {
                IrStatement::FieldDeclaration { name, .. } => Some((name.clone(), outcome)),
                _ => None,
            })
            .collect();
    }
    if !type_qualifies_for_getter(kind) {
        GetterDiagnostic::UnsupportedTarget {
            span: request.span.clone(),
        }
        .report(session.diagnostics);
        return Vec::new();
    }
    // The type's own marker annotation claims the sweep for the explicit
    // handler; running here too would double-generate.
    if has_getter_marker(type_modifiers) {
        debug!(owner = %type_name, "type carries its own accessor marker, deferring");
        return Vec::new();
    }

    // Sweeps never warn about user-claimed names; only explicit per-field
    // requests do.
    let sweep_request = GetterRequest {
        whine_if_exists: false,
        ..request.clone()
    };

    let mut outcomes = Vec::new();
    for field in fields {
        let (field_name, field_modifiers) = match field {
            IrStatement::FieldDeclaration {
                name, modifiers, ..
            } => (name, modifiers),
            _ => continue,
        };
        if !field_qualifies_for_getter(field) {
            continue;
        }
        if has_getter_marker(field_modifiers) {
            outcomes.push((
                field_name.clone(),
                GetterOutcome::Skipped(SkipReason::ExplicitRequestPending),
            ));
            continue;
        }
        let outcome = create_getter_for_field(field, type_name, &sweep_request, session);
        outcomes.push((field_name.clone(), outcome));
    }
    outcomes
}

/// `AccessLevel::None` short-circuits generation; combined with `lazy` it
/// additionally warns, because the requested field rewrite will not happen.
fn check_access_level(
    request: &GetterRequest,
    session: &mut GeneratorSession<'_>,
) -> Option<GetterOutcome> {
    if request.access_level != AccessLevel::None {
        return None;
    }
    if request.lazy {
        GetterDiagnostic::LazyWithAccessLevelNone {
            span: request.span.clone(),
        }
        .report(session.diagnostics);
    }
    Some(GetterOutcome::Skipped(SkipReason::AccessLevelNone))
}

fn create_getter_for_field(
    field: &IrStatement,
    owner: &str,
    request: &GetterRequest,
    session: &mut GeneratorSession<'_>,
) -> GetterOutcome {
    let (field_name, declared_type, initializer, field_modifiers, field_span) = match field {
        IrStatement::FieldDeclaration {
            name,
            java_type,
            initializer,
            modifiers,
            span,
        } => (name, java_type, initializer, modifiers, span),
        other => {
            GetterDiagnostic::UnsupportedTarget {
                span: statement_span(other).clone(),
            }
            .report(session.diagnostics);
            return GetterOutcome::Skipped(SkipReason::InvalidTarget);
        }
    };

    // Static and compiler-synthesized fields never get accessors, no matter
    // how the request arrived.
    if !field_qualifies_for_getter(field) {
        debug!(field = %field_name, "field does not qualify for accessor synthesis, skipping");
        return GetterOutcome::Skipped(SkipReason::InvalidTarget);
    }

    if request.lazy {
        if let Err(diagnostic) =
            check_lazy_preconditions(field_modifiers, initializer.as_ref(), &request.span)
        {
            diagnostic.report(session.diagnostics);
            return GetterOutcome::Skipped(SkipReason::LazyPreconditionViolated);
        }
    }

    let method_name = match getter_name(field_name, declared_type, &session.accessors) {
        Some(name) => name,
        None => {
            GetterDiagnostic::NoMatchingPrefix {
                span: request.span.clone(),
            }
            .report(session.diagnostics);
            return GetterOutcome::Skipped(SkipReason::NoMatchingPrefix);
        }
    };

    let candidates = all_getter_names(field_name, declared_type, &session.accessors);
    match scan_for_conflicts(&candidates, session.index) {
        NameConflict::Clear => {}
        NameConflict::GeneratedEarlier => {
            debug!(field = %field_name, method = %method_name, "accessor already synthesized, skipping");
            return GetterOutcome::Skipped(SkipReason::GeneratedEarlier);
        }
        NameConflict::UserAuthored { name } => {
            if request.whine_if_exists {
                let alternate = if name != method_name {
                    format!(" ({name})")
                } else {
                    String::new()
                };
                GetterDiagnostic::MethodAlreadyExists {
                    method: method_name,
                    alternate,
                    span: request.span.clone(),
                }
                .report(session.diagnostics);
            }
            return GetterOutcome::Skipped(SkipReason::UserMethodExists);
        }
    }

    let artifact = build_getter(
        field_name,
        declared_type,
        initializer,
        field_modifiers,
        field_span,
        &method_name,
        request,
        &session.accessors,
        &session.options,
    );
    debug!(owner = %owner, field = %field_name, method = %method_name, "injecting synthesized getter");
    session.injector.inject(owner, artifact);
    GetterOutcome::Generated
}

#[allow(clippy::too_many_arguments)]
fn build_getter(
    field_name: &str,
    declared_type: &JavaType,
    initializer: &Option<IrExpression>,
    field_modifiers: &IrModifiers,
    field_span: &Span,
    method_name: &str,
    request: &GetterRequest,
    accessors: &AccessorConfig,
    options: &GeneratorOptions,
) -> GetterArtifact {
    // Delegation markers migrate off the field onto the method.
    let (kept_field_annotations, delegates) =
        extract_delegates(field_modifiers.annotations.clone());

    let mut rewritten_field = None;
    let mut is_lazy_body = false;
    let (body, return_type) = match (request.lazy, initializer.as_ref()) {
        (true, Some(init)) => {
            let lowering = lower_lazy_getter(
                field_name,
                declared_type,
                init.clone(),
                field_modifiers,
                field_span,
                &request.span,
            );
            rewritten_field = Some(lowering.rewritten_field);
            is_lazy_body = true;
            (lowering.body, lowering.return_type)
        }
        _ if request.map_backed => (
            map_getter_body(field_name, declared_type, &request.span),
            declared_type.clone(),
        ),
        _ => (
            plain_getter_body(field_name, declared_type, &request.span),
            declared_type.clone(),
        ),
    };

    // The replacement field (if any) keeps the field's annotations minus
    // the migrated delegates.
    if let Some(IrStatement::FieldDeclaration { modifiers, .. }) = rewritten_field.as_mut() {
        modifiers.annotations = kept_field_annotations.clone();
    } else if !delegates.is_empty() {
        rewritten_field = Some(IrStatement::FieldDeclaration {
            name: field_name.to_string(),
            java_type: declared_type.clone(),
            initializer: initializer.clone(),
            modifiers: IrModifiers {
                annotations: kept_field_annotations,
                ..field_modifiers.clone()
            },
            span: field_span.clone(),
        });
    }

    let mut annotations =
        method_annotations(field_modifiers, options, &request.on_method, &request.span);
    annotations.extend(delegates);
    if is_lazy_body && options.emit_suppress_warnings {
        annotations.push(suppress_warnings_annotation(options, &request.span));
    }

    let method = IrStatement::MethodDeclaration {
        name: method_name.to_string(),
        parameters: Vec::new(),
        return_type,
        body,
        throws: Vec::new(),
        modifiers: IrModifiers {
            visibility: request
                .access_level
                .visibility()
                .unwrap_or(IrVisibility::Package),
            is_final: accessors.make_final,
            annotations,
            ..IrModifiers::default()
        },
        span: request.span.clone(),
    };

    GetterArtifact {
        method,
        rewritten_field,
    }
}

fn statement_span(statement: &IrStatement) -> &Span {
    match statement {
        IrStatement::VariableDeclaration { span, .. }
        | IrStatement::FieldDeclaration { span, .. }
        | IrStatement::MethodDeclaration { span, .. }
        | IrStatement::ClassDeclaration { span, .. }
        | IrStatement::Expression { span, .. }
        | IrStatement::Return { span, .. }
        | IrStatement::If { span, .. }
        | IrStatement::Synchronized { span, .. }
        | IrStatement::Block { span, .. } => span,
    }
}
