// jgen_ir - Java-oriented IR shared by the jgen synthesis and rendering crates
mod types;

pub use types::*;

#[cfg(test)]
mod tests;
