use crate::config::JavaCodeGenConfig;

/// Accumulates Java source text while tracking the current indentation depth.
#[derive(Debug, Default, Clone)]
pub struct JavaSourceBuilder {
    content: String,
    depth: usize,
    indent: String,
}

impl JavaSourceBuilder {
    pub fn new(indent: String) -> Self {
        Self {
            content: String::new(),
            depth: 0,
            indent,
        }
    }

    /// Appends one line at the current depth.
    pub fn push_line(&mut self, line: &str) {
        for _ in 0..self.depth {
            self.content.push_str(&self.indent);
        }
        self.content.push_str(line);
        self.content.push('\n');
    }

    /// Appends raw text, no indentation and no trailing newline.
    pub fn push(&mut self, text: &str) {
        self.content.push_str(text);
    }

    pub fn indent(&mut self) {
        self.depth += 1;
    }

    pub fn dedent(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    pub fn build(self) -> String {
        self.content
    }
}

/// A rendered compilation unit: package, imports, and the rendered type
/// declarations, assembled into one source file by `to_source`.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct JavaCompilationUnit {
    pub package_declaration: Option<String>,
    pub imports: Vec<String>,
    pub type_declarations: Vec<String>,
}

impl JavaCompilationUnit {
    pub fn to_source(&self, config: &JavaCodeGenConfig) -> String {
        let mut out = JavaSourceBuilder::new(config.indent.clone());

        if let Some(package) = &self.package_declaration {
            out.push_line(&format!("package {package};"));
            out.push("\n");
        }

        for import in &self.imports {
            out.push_line(&format!("import {import};"));
        }
        if !self.imports.is_empty() {
            out.push("\n");
        }

        for (index, declaration) in self.type_declarations.iter().enumerate() {
            if index > 0 {
                out.push("\n");
            }
            out.push(declaration);
            if !declaration.ends_with('\n') {
                out.push("\n");
            }
        }

        out.build()
    }
}
