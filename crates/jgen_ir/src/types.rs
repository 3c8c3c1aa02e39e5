// jgen_ir/types - Java types, expressions, statements, and position information
use serde::{Deserialize, Serialize};

/// Position information carried by every IR node, used for diagnostic
/// attribution after code has been synthesized or relocated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Span {
    pub start_line: usize,
    pub start_column: usize,
    pub end_line: usize,
    pub end_column: usize,
}

impl Span {
    pub fn new(start_line: usize, start_column: usize, end_line: usize, end_column: usize) -> Self {
        Self {
            start_line,
            start_column,
            end_line,
            end_column,
        }
    }

    pub fn dummy() -> Self {
        Self::default()
    }
}

/// Literal values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Literal {
    String(String),
    Number(String), // Kept as source text for precision
    Boolean(bool),
    Character(char),
    Null,
}

/// Java-compatible type representation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum JavaType {
    /// Primitive types: int, boolean, char, etc.
    Primitive(String),
    /// Reference types: String, Object, custom classes
    Reference {
        name: String,
        generic_args: Vec<JavaType>,
    },
    /// Array types: int[], String[][]
    Array {
        element_type: Box<JavaType>,
        dimensions: usize,
    },
    /// Void type
    Void,
}

impl JavaType {
    pub fn int() -> Self {
        JavaType::Primitive("int".to_string())
    }

    pub fn boolean() -> Self {
        JavaType::Primitive("boolean".to_string())
    }

    pub fn string() -> Self {
        JavaType::reference("String")
    }

    pub fn object() -> Self {
        JavaType::reference("Object")
    }

    pub fn void() -> Self {
        JavaType::Void
    }

    pub fn reference(name: impl Into<String>) -> Self {
        JavaType::Reference {
            name: name.into(),
            generic_args: vec![],
        }
    }

    pub fn is_primitive(&self) -> bool {
        matches!(self, JavaType::Primitive(_))
    }

    pub fn is_nullable(&self) -> bool {
        !matches!(self, JavaType::Primitive(_) | JavaType::Void)
    }

    /// Simple (unqualified) name of the type, e.g. `java.util.Date` -> `Date`.
    pub fn simple_name(&self) -> Option<&str> {
        match self {
            JavaType::Primitive(name) => Some(name.as_str()),
            JavaType::Reference { name, .. } => {
                Some(name.rsplit('.').next().unwrap_or(name.as_str()))
            }
            JavaType::Array { .. } | JavaType::Void => None,
        }
    }
}

/// Binary operators appearing in synthesized bodies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BinaryOp {
    Equal,
    NotEqual,
}

/// Expressions of the synthesized Java subset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum IrExpression {
    Literal(Literal, Span),

    Identifier {
        name: String,
        java_type: JavaType,
        span: Span,
    },

    FieldAccess {
        receiver: Box<IrExpression>,
        field_name: String,
        java_type: JavaType,
        span: Span,
    },

    MethodCall {
        receiver: Option<Box<IrExpression>>, // None for implicit receiver
        method_name: String,
        args: Vec<IrExpression>,
        java_type: JavaType,
        span: Span,
    },

    Binary {
        left: Box<IrExpression>,
        op: BinaryOp,
        right: Box<IrExpression>,
        java_type: JavaType,
        span: Span,
    },

    // Conditional expression (ternary)
    Conditional {
        condition: Box<IrExpression>,
        then_expr: Box<IrExpression>,
        else_expr: Box<IrExpression>,
        java_type: JavaType,
        span: Span,
    },

    Assignment {
        target: Box<IrExpression>,
        value: Box<IrExpression>,
        java_type: JavaType,
        span: Span,
    },

    Cast {
        expr: Box<IrExpression>,
        target_type: JavaType,
        span: Span,
    },

    // Object creation (new Constructor(args))
    ObjectCreation {
        class_name: String,
        generic_args: Vec<JavaType>,
        args: Vec<IrExpression>,
        java_type: JavaType,
        span: Span,
    },

    This {
        java_type: JavaType,
        span: Span,
    },
}

impl IrExpression {
    pub fn span(&self) -> &Span {
        match self {
            IrExpression::Literal(_, span)
            | IrExpression::Identifier { span, .. }
            | IrExpression::FieldAccess { span, .. }
            | IrExpression::MethodCall { span, .. }
            | IrExpression::Binary { span, .. }
            | IrExpression::Conditional { span, .. }
            | IrExpression::Assignment { span, .. }
            | IrExpression::Cast { span, .. }
            | IrExpression::ObjectCreation { span, .. }
            | IrExpression::This { span, .. } => span,
        }
    }

    pub fn span_mut(&mut self) -> &mut Span {
        match self {
            IrExpression::Literal(_, span)
            | IrExpression::Identifier { span, .. }
            | IrExpression::FieldAccess { span, .. }
            | IrExpression::MethodCall { span, .. }
            | IrExpression::Binary { span, .. }
            | IrExpression::Conditional { span, .. }
            | IrExpression::Assignment { span, .. }
            | IrExpression::Cast { span, .. }
            | IrExpression::ObjectCreation { span, .. }
            | IrExpression::This { span, .. } => span,
        }
    }
}

/// Kind of a type declaration; accessor generation only targets classes
/// and enums.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TypeDeclarationKind {
    Class,
    Interface,
    Enum,
    Record,
    Annotation,
}

/// Statements of the synthesized Java subset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum IrStatement {
    // Local variable declarations with explicit types
    VariableDeclaration {
        name: String,
        java_type: JavaType,
        initializer: Option<IrExpression>,
        is_final: bool,
        span: Span,
    },

    FieldDeclaration {
        name: String,
        java_type: JavaType,
        initializer: Option<IrExpression>,
        modifiers: IrModifiers,
        span: Span,
    },

    MethodDeclaration {
        name: String,
        parameters: Vec<IrParameter>,
        return_type: JavaType,
        body: Vec<IrStatement>,
        modifiers: IrModifiers,
        throws: Vec<String>,
        span: Span,
    },

    ClassDeclaration {
        name: String,
        kind: TypeDeclarationKind,
        fields: Vec<IrStatement>,   // FieldDeclaration statements
        methods: Vec<IrStatement>,  // MethodDeclaration statements
        modifiers: IrModifiers,
        span: Span,
    },

    Expression {
        expr: IrExpression,
        span: Span,
    },

    Return {
        value: Option<IrExpression>,
        span: Span,
    },

    If {
        condition: IrExpression,
        then_stmt: Box<IrStatement>,
        else_stmt: Option<Box<IrStatement>>,
        span: Span,
    },

    // synchronized (lock) { ... }
    Synchronized {
        lock: IrExpression,
        body: Vec<IrStatement>,
        span: Span,
    },

    Block {
        statements: Vec<IrStatement>,
        span: Span,
    },
}

/// Method parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IrParameter {
    pub name: String,
    pub java_type: JavaType,
    pub is_final: bool,
    pub span: Span,
}

/// Qualified annotation name broken into package segments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnotationName {
    pub segments: Vec<String>,
}

impl AnnotationName {
    pub fn new(segments: Vec<String>) -> Self {
        Self { segments }
    }

    pub fn parse(name: &str) -> Self {
        Self {
            segments: name.split('.').map(str::to_string).collect(),
        }
    }

    pub fn simple_name(&self) -> &str {
        self.segments.last().map(String::as_str).unwrap_or("")
    }

    pub fn qualified_name(&self) -> String {
        self.segments.join(".")
    }
}

/// Structured representation of an annotation applied to declarations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IrAnnotation {
    pub name: AnnotationName,
    pub arguments: Vec<IrAnnotationArgument>,
    pub span: Span,
}

impl IrAnnotation {
    /// Marker annotation without arguments, e.g. `@Deprecated`.
    pub fn marker(name: &str, span: Span) -> Self {
        Self {
            name: AnnotationName::parse(name),
            arguments: Vec::new(),
            span,
        }
    }

    pub fn simple_name(&self) -> &str {
        self.name.simple_name()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum IrAnnotationArgument {
    Positional(IrAnnotationValue),
    Named {
        name: String,
        value: IrAnnotationValue,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum IrAnnotationValue {
    Literal(Literal),
    Array(Vec<IrAnnotationValue>),
    ClassLiteral(String),
}

/// Java modifiers (visibility, static, final, etc.)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct IrModifiers {
    pub visibility: IrVisibility,
    pub is_static: bool,
    pub is_final: bool,
    pub is_abstract: bool,
    pub is_synchronized: bool,
    pub is_transient: bool,
    pub is_volatile: bool,
    pub annotations: Vec<IrAnnotation>,
}

/// Java visibility modifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum IrVisibility {
    Public,
    Protected,
    #[default]
    Package, // Default (no modifier)
    Private,
}
