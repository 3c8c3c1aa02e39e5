// jgen_codegen - Java source rendering for the jgen IR
mod builder;
mod config;
mod error;
mod generator;

pub use builder::{JavaCompilationUnit, JavaSourceBuilder};
pub use config::JavaCodeGenConfig;
pub use error::CodeGenError;
pub use generator::JavaCodeGenerator;

#[cfg(test)]
mod tests;
