use jgen_ir::Span;
use thiserror::Error;

/// Error variants produced while rendering IR to Java source.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CodeGenError {
    #[error("Unsupported IR construct: {construct}")]
    UnsupportedConstruct {
        construct: String,
        span: Option<Span>,
    },

    #[error("Type generation error: {message}")]
    TypeGenerationError { message: String, span: Option<Span> },

    #[error("Invalid method signature: {message}")]
    InvalidMethodSignature { message: String, span: Option<Span> },

    #[error("Source formatting error: {message}")]
    FormattingError { message: String },
}
