use jgen_ir::Span;
use thiserror::Error;

use crate::pipeline::DiagnosticSink;

/// Severity of a getter diagnostic. Errors abort generation for the field;
/// warnings only explain why it was skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

/// Diagnostics produced while deciding on or synthesizing a getter. All of
/// them are local to one field; batch sweeps continue with the next field.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GetterDiagnostic {
    #[error("getter generation is only supported on a class, an enum, or a field")]
    UnsupportedTarget { span: Span },

    #[error("'lazy' requires the field to be private and final")]
    LazyRequiresPrivateFinal { span: Span },

    #[error("'lazy' is not supported on transient fields")]
    LazyOnTransientField { span: Span },

    #[error("'lazy' requires field initialization")]
    LazyRequiresInitializer { span: Span },

    #[error("not generating a getter for this field: its name does not match the configured prefix list")]
    NoMatchingPrefix { span: Span },

    #[error("not generating {method}(): a method with that name already exists{alternate}")]
    MethodAlreadyExists {
        method: String,
        /// Pre-rendered ` (<altName>)` suffix when the clash was on an
        /// alternate name rather than the canonical one.
        alternate: String,
        span: Span,
    },

    #[error("'lazy' does not work with AccessLevel.NONE")]
    LazyWithAccessLevelNone { span: Span },
}

impl GetterDiagnostic {
    pub fn span(&self) -> &Span {
        match self {
            GetterDiagnostic::UnsupportedTarget { span }
            | GetterDiagnostic::LazyRequiresPrivateFinal { span }
            | GetterDiagnostic::LazyOnTransientField { span }
            | GetterDiagnostic::LazyRequiresInitializer { span }
            | GetterDiagnostic::NoMatchingPrefix { span }
            | GetterDiagnostic::MethodAlreadyExists { span, .. }
            | GetterDiagnostic::LazyWithAccessLevelNone { span } => span,
        }
    }

    pub fn severity(&self) -> Severity {
        match self {
            GetterDiagnostic::UnsupportedTarget { .. }
            | GetterDiagnostic::LazyRequiresPrivateFinal { .. }
            | GetterDiagnostic::LazyOnTransientField { .. }
            | GetterDiagnostic::LazyRequiresInitializer { .. } => Severity::Error,
            GetterDiagnostic::NoMatchingPrefix { .. }
            | GetterDiagnostic::MethodAlreadyExists { .. }
            | GetterDiagnostic::LazyWithAccessLevelNone { .. } => Severity::Warning,
        }
    }

    pub(crate) fn report(self, sink: &mut dyn DiagnosticSink) {
        let span = self.span().clone();
        match self.severity() {
            Severity::Error => sink.add_error(self.to_string(), span),
            Severity::Warning => sink.add_warning(self.to_string(), span),
        }
    }
}
