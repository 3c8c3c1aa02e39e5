use jgen_ir::{IrStatement, Span};

use crate::config::{AccessorConfig, GeneratorOptions};

/// Classification of why a candidate method name already exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MethodProvenance {
    NotExists,
    ExistsByGenerator,
    ExistsByUser,
}

/// Method-existence index maintained by the surrounding pipeline.
pub trait MethodExistenceIndex {
    fn query(&self, name: &str) -> MethodProvenance;
}

/// Receives the engine's diagnostics; rendering is owned by the pipeline.
pub trait DiagnosticSink {
    fn add_error(&mut self, message: String, span: Span);
    fn add_warning(&mut self, message: String, span: Span);
}

/// Result of one successful synthesis, handed to the pipeline in one piece
/// so a field is never left half-rewritten.
#[derive(Debug, Clone, PartialEq)]
pub struct GetterArtifact {
    pub method: IrStatement,
    /// Replacement field when the synthesis changed the field's storage
    /// (lazy holder rewrite) or its annotations (delegate transfer). `None`
    /// means the original field stays as it is.
    pub rewritten_field: Option<IrStatement>,
}

/// Attaches a synthesized method (and field replacement, when present) to
/// the owning type. Called at most once per successful synthesis.
pub trait MethodInjector {
    fn inject(&mut self, owner: &str, artifact: GetterArtifact);
}

/// Collaborators and configuration for one generation run.
pub struct GeneratorSession<'a> {
    pub index: &'a dyn MethodExistenceIndex,
    pub diagnostics: &'a mut dyn DiagnosticSink,
    pub injector: &'a mut dyn MethodInjector,
    pub accessors: AccessorConfig,
    pub options: GeneratorOptions,
}
