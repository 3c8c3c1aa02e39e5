use crate::builder::JavaSourceBuilder;
use crate::config::JavaCodeGenConfig;
use crate::error::CodeGenError;
use jgen_ir::{
    BinaryOp, IrAnnotation, IrAnnotationArgument, IrAnnotationValue, IrExpression, IrModifiers,
    IrStatement, IrVisibility, JavaType, Literal, TypeDeclarationKind,
};

/// Renders IR statements and expressions to Java source text.
pub struct JavaCodeGenerator {
    config: JavaCodeGenConfig,
}

impl Default for JavaCodeGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl JavaCodeGenerator {
    pub fn new() -> Self {
        Self::with_config(JavaCodeGenConfig::default())
    }

    pub fn with_config(config: JavaCodeGenConfig) -> Self {
        Self { config }
    }

    fn builder(&self) -> JavaSourceBuilder {
        JavaSourceBuilder::new(self.config.indent.clone())
    }

    pub fn generate_type(&self, java_type: &JavaType) -> Result<String, CodeGenError> {
        Ok(match java_type {
            JavaType::Primitive(name) => name.clone(),
            JavaType::Reference { name, generic_args } => {
                if generic_args.is_empty() {
                    name.clone()
                } else {
                    let args = generic_args
                        .iter()
                        .map(|arg| self.generate_type(arg))
                        .collect::<Result<Vec<_>, _>>()?
                        .join(", ");
                    format!("{}<{}>", name, args)
                }
            }
            JavaType::Array {
                element_type,
                dimensions,
            } => {
                let mut rendered = self.generate_type(element_type)?;
                for _ in 0..*dimensions {
                    rendered.push_str("[]");
                }
                rendered
            }
            JavaType::Void => "void".to_string(),
        })
    }

    pub fn generate_modifiers(&self, modifiers: &IrModifiers) -> String {
        let mut parts = Vec::new();
        match modifiers.visibility {
            IrVisibility::Public => parts.push("public"),
            IrVisibility::Protected => parts.push("protected"),
            IrVisibility::Package => {}
            IrVisibility::Private => parts.push("private"),
        }
        if modifiers.is_static {
            parts.push("static");
        }
        if modifiers.is_abstract {
            parts.push("abstract");
        }
        if modifiers.is_final {
            parts.push("final");
        }
        if modifiers.is_transient {
            parts.push("transient");
        }
        if modifiers.is_volatile {
            parts.push("volatile");
        }
        if modifiers.is_synchronized {
            parts.push("synchronized");
        }
        let mut rendered = parts.join(" ");
        if !rendered.is_empty() {
            rendered.push(' ');
        }
        rendered
    }

    pub fn generate_annotation(&self, annotation: &IrAnnotation) -> String {
        let name = if self.config.qualified_annotations {
            annotation.name.qualified_name()
        } else {
            annotation.simple_name().to_string()
        };
        if annotation.arguments.is_empty() {
            return format!("@{}", name);
        }
        let arguments = annotation
            .arguments
            .iter()
            .map(|argument| match argument {
                IrAnnotationArgument::Positional(value) => self.generate_annotation_value(value),
                IrAnnotationArgument::Named { name, value } => {
                    format!("{} = {}", name, self.generate_annotation_value(value))
                }
            })
            .collect::<Vec<_>>()
            .join(", ");
        format!("@{}({})", name, arguments)
    }

    fn generate_annotation_value(&self, value: &IrAnnotationValue) -> String {
        match value {
            IrAnnotationValue::Literal(literal) => render_literal(literal),
            IrAnnotationValue::Array(values) => {
                let rendered = values
                    .iter()
                    .map(|value| self.generate_annotation_value(value))
                    .collect::<Vec<_>>()
                    .join(", ");
                format!("{{{}}}", rendered)
            }
            IrAnnotationValue::ClassLiteral(name) => format!("{}.class", name),
        }
    }

    pub fn generate_expression(&self, expr: &IrExpression) -> Result<String, CodeGenError> {
        Ok(match expr {
            IrExpression::Literal(literal, _) => render_literal(literal),
            IrExpression::Identifier { name, .. } => name.clone(),
            IrExpression::FieldAccess {
                receiver,
                field_name,
                ..
            } => format!("{}.{}", self.generate_expression(receiver)?, field_name),
            IrExpression::MethodCall {
                receiver,
                method_name,
                args,
                ..
            } => {
                let rendered_args = self.generate_arguments(args)?;
                match receiver {
                    Some(receiver) => format!(
                        "{}.{}({})",
                        self.generate_expression(receiver)?,
                        method_name,
                        rendered_args
                    ),
                    None => format!("{}({})", method_name, rendered_args),
                }
            }
            IrExpression::Binary {
                left, op, right, ..
            } => {
                let op = match op {
                    BinaryOp::Equal => "==",
                    BinaryOp::NotEqual => "!=",
                };
                format!(
                    "{} {} {}",
                    self.generate_expression(left)?,
                    op,
                    self.generate_expression(right)?
                )
            }
            IrExpression::Conditional {
                condition,
                then_expr,
                else_expr,
                ..
            } => format!(
                "{} ? {} : {}",
                self.generate_expression(condition)?,
                self.generate_expression(then_expr)?,
                self.generate_expression(else_expr)?
            ),
            IrExpression::Assignment { target, value, .. } => format!(
                "{} = {}",
                self.generate_expression(target)?,
                self.generate_expression(value)?
            ),
            IrExpression::Cast {
                expr, target_type, ..
            } => {
                let inner = self.generate_expression(expr)?;
                let inner = if needs_parentheses(expr) {
                    format!("({})", inner)
                } else {
                    inner
                };
                format!("({}) {}", self.generate_type(target_type)?, inner)
            }
            IrExpression::ObjectCreation {
                class_name,
                generic_args,
                args,
                ..
            } => {
                let generics = if generic_args.is_empty() {
                    String::new()
                } else {
                    let rendered = generic_args
                        .iter()
                        .map(|arg| self.generate_type(arg))
                        .collect::<Result<Vec<_>, _>>()?
                        .join(", ");
                    format!("<{}>", rendered)
                };
                format!(
                    "new {}{}({})",
                    class_name,
                    generics,
                    self.generate_arguments(args)?
                )
            }
            IrExpression::This { .. } => "this".to_string(),
        })
    }

    fn generate_arguments(&self, args: &[IrExpression]) -> Result<String, CodeGenError> {
        Ok(args
            .iter()
            .map(|arg| self.generate_expression(arg))
            .collect::<Result<Vec<_>, _>>()?
            .join(", "))
    }

    pub fn generate_statement(&self, stmt: &IrStatement) -> Result<String, CodeGenError> {
        Ok(match stmt {
            IrStatement::VariableDeclaration {
                name,
                java_type,
                initializer,
                is_final,
                ..
            } => {
                let prefix = if *is_final { "final " } else { "" };
                match initializer {
                    Some(init) => format!(
                        "{}{} {} = {};",
                        prefix,
                        self.generate_type(java_type)?,
                        name,
                        self.generate_expression(init)?
                    ),
                    None => format!("{}{} {};", prefix, self.generate_type(java_type)?, name),
                }
            }
            IrStatement::FieldDeclaration { .. } => self.generate_field(stmt)?,
            IrStatement::MethodDeclaration { .. } => self.generate_method(stmt)?,
            IrStatement::ClassDeclaration { .. } => self.generate_class(stmt)?,
            IrStatement::Expression { expr, .. } => {
                format!("{};", self.generate_expression(expr)?)
            }
            IrStatement::Return { value, .. } => match value {
                Some(value) => format!("return {};", self.generate_expression(value)?),
                None => "return;".to_string(),
            },
            IrStatement::If {
                condition,
                then_stmt,
                else_stmt,
                ..
            } => {
                let mut builder = self.builder();
                builder.push_line(&format!(
                    "if ({}) {{",
                    self.generate_expression(condition)?
                ));
                builder.indent();
                self.push_nested(&mut builder, then_stmt)?;
                builder.dedent();
                match else_stmt {
                    Some(else_stmt) => {
                        builder.push_line("} else {");
                        builder.indent();
                        self.push_nested(&mut builder, else_stmt)?;
                        builder.dedent();
                        builder.push_line("}");
                    }
                    None => builder.push_line("}"),
                }
                trim_trailing_newline(builder.build())
            }
            IrStatement::Synchronized { lock, body, .. } => {
                let mut builder = self.builder();
                builder.push_line(&format!(
                    "synchronized ({}) {{",
                    self.generate_expression(lock)?
                ));
                builder.indent();
                for statement in body {
                    self.push_nested(&mut builder, statement)?;
                }
                builder.dedent();
                builder.push_line("}");
                trim_trailing_newline(builder.build())
            }
            IrStatement::Block { statements, .. } => {
                let mut builder = self.builder();
                for statement in statements {
                    self.push_nested(&mut builder, statement)?;
                }
                trim_trailing_newline(builder.build())
            }
        })
    }

    pub fn generate_field(&self, field: &IrStatement) -> Result<String, CodeGenError> {
        let (name, java_type, initializer, modifiers) = match field {
            IrStatement::FieldDeclaration {
                name,
                java_type,
                initializer,
                modifiers,
                ..
            } => (name, java_type, initializer, modifiers),
            other => {
                return Err(CodeGenError::UnsupportedConstruct {
                    construct: format!("expected field declaration, found {other:?}"),
                    span: None,
                })
            }
        };
        let mut builder = self.builder();
        for annotation in &modifiers.annotations {
            builder.push_line(&self.generate_annotation(annotation));
        }
        let declaration = match initializer {
            Some(init) => format!(
                "{}{} {} = {};",
                self.generate_modifiers(modifiers),
                self.generate_type(java_type)?,
                name,
                self.generate_expression(init)?
            ),
            None => format!(
                "{}{} {};",
                self.generate_modifiers(modifiers),
                self.generate_type(java_type)?,
                name
            ),
        };
        builder.push_line(&declaration);
        Ok(trim_trailing_newline(builder.build()))
    }

    pub fn generate_method(&self, method: &IrStatement) -> Result<String, CodeGenError> {
        let (name, parameters, return_type, body, modifiers, throws) = match method {
            IrStatement::MethodDeclaration {
                name,
                parameters,
                return_type,
                body,
                modifiers,
                throws,
                ..
            } => (name, parameters, return_type, body, modifiers, throws),
            other => {
                return Err(CodeGenError::InvalidMethodSignature {
                    message: format!("expected method declaration, found {other:?}"),
                    span: None,
                })
            }
        };

        let mut builder = self.builder();
        for annotation in &modifiers.annotations {
            builder.push_line(&self.generate_annotation(annotation));
        }

        let rendered_params = parameters
            .iter()
            .map(|param| {
                let prefix = if param.is_final { "final " } else { "" };
                Ok(format!(
                    "{}{} {}",
                    prefix,
                    self.generate_type(&param.java_type)?,
                    param.name
                ))
            })
            .collect::<Result<Vec<_>, CodeGenError>>()?
            .join(", ");
        let throws_clause = if throws.is_empty() {
            String::new()
        } else {
            format!(" throws {}", throws.join(", "))
        };
        builder.push_line(&format!(
            "{}{} {}({}){} {{",
            self.generate_modifiers(modifiers),
            self.generate_type(return_type)?,
            name,
            rendered_params,
            throws_clause
        ));
        builder.indent();
        for statement in body {
            self.push_nested(&mut builder, statement)?;
        }
        builder.dedent();
        builder.push_line("}");
        Ok(trim_trailing_newline(builder.build()))
    }

    pub fn generate_class(&self, class: &IrStatement) -> Result<String, CodeGenError> {
        let (name, kind, fields, methods, modifiers) = match class {
            IrStatement::ClassDeclaration {
                name,
                kind,
                fields,
                methods,
                modifiers,
                ..
            } => (name, kind, fields, methods, modifiers),
            other => {
                return Err(CodeGenError::UnsupportedConstruct {
                    construct: format!("expected class declaration, found {other:?}"),
                    span: None,
                })
            }
        };
        let keyword = match kind {
            TypeDeclarationKind::Class => "class",
            TypeDeclarationKind::Interface => "interface",
            TypeDeclarationKind::Enum => "enum",
            TypeDeclarationKind::Record => "record",
            TypeDeclarationKind::Annotation => "@interface",
        };

        let mut builder = self.builder();
        for annotation in &modifiers.annotations {
            builder.push_line(&self.generate_annotation(annotation));
        }
        builder.push_line(&format!(
            "{}{} {} {{",
            self.generate_modifiers(modifiers),
            keyword,
            name
        ));
        builder.indent();
        for field in fields {
            self.push_nested(&mut builder, field)?;
        }
        if !fields.is_empty() && !methods.is_empty() {
            builder.push("\n");
        }
        for (index, method) in methods.iter().enumerate() {
            if index > 0 {
                builder.push("\n");
            }
            self.push_nested(&mut builder, method)?;
        }
        builder.dedent();
        builder.push_line("}");
        Ok(trim_trailing_newline(builder.build()))
    }

    /// Renders a nested statement and re-indents each of its lines into the
    /// surrounding builder.
    fn push_nested(
        &self,
        builder: &mut JavaSourceBuilder,
        stmt: &IrStatement,
    ) -> Result<(), CodeGenError> {
        let rendered = self.generate_statement(stmt)?;
        for line in rendered.lines() {
            if line.is_empty() {
                builder.push("\n");
            } else {
                builder.push_line(line);
            }
        }
        Ok(())
    }
}

fn render_literal(literal: &Literal) -> String {
    match literal {
        Literal::String(value) => format!("\"{}\"", escape_string(value)),
        Literal::Number(value) => value.clone(),
        Literal::Boolean(value) => value.to_string(),
        Literal::Character(value) => format!("'{}'", escape_char(*value)),
        Literal::Null => "null".to_string(),
    }
}

fn escape_string(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            other => escaped.push(other),
        }
    }
    escaped
}

fn escape_char(value: char) -> String {
    match value {
        '\\' => "\\\\".to_string(),
        '\'' => "\\'".to_string(),
        '\n' => "\\n".to_string(),
        '\r' => "\\r".to_string(),
        '\t' => "\\t".to_string(),
        other => other.to_string(),
    }
}

/// Low-precedence expressions get wrapped when used as a cast operand.
fn needs_parentheses(expr: &IrExpression) -> bool {
    matches!(
        expr,
        IrExpression::Conditional { .. }
            | IrExpression::Binary { .. }
            | IrExpression::Assignment { .. }
    )
}

fn trim_trailing_newline(mut rendered: String) -> String {
    while rendered.ends_with('\n') {
        rendered.pop();
    }
    rendered
}
