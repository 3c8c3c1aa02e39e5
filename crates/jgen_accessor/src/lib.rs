// jgen_accessor - synthesizes getter methods for fields of the Java-oriented IR
mod body;
mod config;
mod eligibility;
mod error;
mod generate;
mod lazy;
mod metadata;
mod naming;
mod pipeline;
mod request;

pub use config::{AccessLevel, AccessorConfig, GeneratorOptions};
pub use eligibility::{
    field_qualifies_for_getter, has_getter_marker, type_qualifies_for_getter,
    GETTER_MARKER_ANNOTATION, SYNTHETIC_FIELD_MARKER,
};
pub use error::{GetterDiagnostic, Severity};
pub use generate::{
    generate_getter_for_field, generate_getters_for_type, GetterOutcome, SkipReason,
};
pub use lazy::HOLDER_TYPE;
pub use metadata::{
    DELEGATE_ANNOTATION, DEPRECATED_ANNOTATION, PURE_ANNOTATION, SIDE_EFFECT_FREE_ANNOTATION,
    SUPPRESS_WARNINGS_ANNOTATION,
};
pub use naming::{all_getter_names, getter_name};
pub use pipeline::{
    DiagnosticSink, GeneratorSession, GetterArtifact, MethodExistenceIndex, MethodInjector,
    MethodProvenance,
};
pub use request::GetterRequest;
