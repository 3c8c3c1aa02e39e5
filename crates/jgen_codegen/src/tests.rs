use jgen_ir::{
    IrAnnotation, IrAnnotationArgument, IrAnnotationValue, IrExpression, IrModifiers, IrStatement,
    IrVisibility, JavaType, Literal, Span, TypeDeclarationKind,
};

use jgen_accessor::{
    generate_getter_for_field, AccessLevel, AccessorConfig, DiagnosticSink, GeneratorOptions,
    GeneratorSession, GetterArtifact, GetterRequest, MethodExistenceIndex, MethodInjector,
    MethodProvenance,
};

use crate::builder::JavaCompilationUnit;
use crate::config::JavaCodeGenConfig;
use crate::generator::JavaCodeGenerator;

fn dummy_span() -> Span {
    Span::dummy()
}

#[test]
fn renders_primitive_reference_and_array_types() {
    let generator = JavaCodeGenerator::new();
    assert_eq!(generator.generate_type(&JavaType::int()).unwrap(), "int");
    assert_eq!(
        generator
            .generate_type(&JavaType::Reference {
                name: "java.util.concurrent.atomic.AtomicReference".to_string(),
                generic_args: vec![JavaType::object()],
            })
            .unwrap(),
        "java.util.concurrent.atomic.AtomicReference<Object>"
    );
    assert_eq!(
        generator
            .generate_type(&JavaType::Array {
                element_type: Box::new(JavaType::string()),
                dimensions: 2,
            })
            .unwrap(),
        "String[][]"
    );
    assert_eq!(generator.generate_type(&JavaType::void()).unwrap(), "void");
}

#[test]
fn renders_annotation_with_array_argument() {
    let generator = JavaCodeGenerator::new();
    let annotation = IrAnnotation {
        name: jgen_ir::AnnotationName::parse("java.lang.SuppressWarnings"),
        arguments: vec![IrAnnotationArgument::Positional(IrAnnotationValue::Array(
            vec![
                IrAnnotationValue::Literal(Literal::String("all".to_string())),
                IrAnnotationValue::Literal(Literal::String("unchecked".to_string())),
            ],
        ))],
        span: dummy_span(),
    };
    assert_eq!(
        generator.generate_annotation(&annotation),
        "@java.lang.SuppressWarnings({\"all\", \"unchecked\"})"
    );

    let simple = JavaCodeGenerator::with_config(JavaCodeGenConfig {
        qualified_annotations: false,
        ..JavaCodeGenConfig::default()
    });
    assert_eq!(
        simple.generate_annotation(&annotation),
        "@SuppressWarnings({\"all\", \"unchecked\"})"
    );
}

#[test]
fn renders_string_literals_with_escapes() {
    let generator = JavaCodeGenerator::new();
    let literal = IrExpression::Literal(
        Literal::String("line\n\"quoted\"".to_string()),
        dummy_span(),
    );
    assert_eq!(
        generator.generate_expression(&literal).unwrap(),
        "\"line\\n\\\"quoted\\\"\""
    );
}

#[test]
fn compilation_unit_renders_package_and_imports() {
    let unit = JavaCompilationUnit {
        package_declaration: Some("com.example".to_string()),
        imports: vec!["java.util.concurrent.atomic.AtomicReference".to_string()],
        type_declarations: vec!["class Empty {\n}".to_string()],
    };
    let source = unit.to_source(&JavaCodeGenConfig::default());
    assert_eq!(
        source,
        "package com.example;\n\nimport java.util.concurrent.atomic.AtomicReference;\n\nclass Empty {\n}\n"
    );
}

// --- end-to-end rendering of synthesized accessors ---

struct EmptyIndex;

impl MethodExistenceIndex for EmptyIndex {
    fn query(&self, _name: &str) -> MethodProvenance {
        MethodProvenance::NotExists
    }
}

#[derive(Default)]
struct NullSink;

impl DiagnosticSink for NullSink {
    fn add_error(&mut self, message: String, _span: Span) {
        panic!("unexpected error diagnostic: {message}");
    }

    fn add_warning(&mut self, message: String, _span: Span) {
        panic!("unexpected warning diagnostic: {message}");
    }
}

#[derive(Default)]
struct CollectingInjector {
    artifacts: Vec<GetterArtifact>,
}

impl MethodInjector for CollectingInjector {
    fn inject(&mut self, _owner: &str, artifact: GetterArtifact) {
        self.artifacts.push(artifact);
    }
}

fn synthesize(field: IrStatement, request: GetterRequest) -> GetterArtifact {
    let index = EmptyIndex;
    let mut sink = NullSink;
    let mut injector = CollectingInjector::default();
    let mut session = GeneratorSession {
        index: &index,
        diagnostics: &mut sink,
        injector: &mut injector,
        accessors: AccessorConfig::default(),
        options: GeneratorOptions::default(),
    };
    generate_getter_for_field(&field, "Sample", &request, &mut session);
    drop(session);
    injector
        .artifacts
        .into_iter()
        .next()
        .expect("synthesis produced an artifact")
}

#[test]
fn plain_getter_renders_as_expected_java() {
    let field = IrStatement::FieldDeclaration {
        name: "name".to_string(),
        java_type: JavaType::string(),
        initializer: None,
        modifiers: IrModifiers::default(),
        span: dummy_span(),
    };
    let artifact = synthesize(
        field,
        GetterRequest::explicit(AccessLevel::Public, dummy_span()),
    );

    let generator = JavaCodeGenerator::new();
    let rendered = generator.generate_method(&artifact.method).unwrap();
    assert_eq!(
        rendered,
        "public String getName() {\n    return this.name;\n}"
    );
}

#[test]
fn lazy_getter_renders_double_checked_locking() {
    let field = IrStatement::FieldDeclaration {
        name: "expensive".to_string(),
        java_type: JavaType::string(),
        initializer: Some(IrExpression::MethodCall {
            receiver: None,
            method_name: "compute".to_string(),
            args: Vec::new(),
            java_type: JavaType::string(),
            span: dummy_span(),
        }),
        modifiers: IrModifiers {
            visibility: IrVisibility::Private,
            is_final: true,
            ..IrModifiers::default()
        },
        span: dummy_span(),
    };
    let request = GetterRequest {
        lazy: true,
        ..GetterRequest::explicit(AccessLevel::Public, dummy_span())
    };
    let artifact = synthesize(field, request);

    let generator = JavaCodeGenerator::new();

    let rewritten = artifact
        .rewritten_field
        .as_ref()
        .expect("lazy synthesis rewrites the field");
    let rendered_field = generator.generate_field(rewritten).unwrap();
    assert_eq!(
        rendered_field,
        "private final java.util.concurrent.atomic.AtomicReference<Object> expensive = \
         new java.util.concurrent.atomic.AtomicReference<Object>();"
    );

    let rendered_method = generator.generate_method(&artifact.method).unwrap();
    assert!(rendered_method.starts_with("public String getExpensive() {"));
    assert!(rendered_method.contains("Object value = this.expensive.get();"));
    assert!(rendered_method.contains("if (value == null) {"));
    assert!(rendered_method.contains("synchronized (this.expensive) {"));
    assert!(rendered_method.contains("final String actualValue = compute();"));
    assert!(rendered_method.contains("value = actualValue == null ? this.expensive : actualValue;"));
    assert!(rendered_method.contains("this.expensive.set(value);"));
    assert!(rendered_method.contains("return (String) (value == this.expensive ? null : value);"));
}

#[test]
fn renders_class_with_fields_and_methods() {
    let field = IrStatement::FieldDeclaration {
        name: "count".to_string(),
        java_type: JavaType::int(),
        initializer: Some(IrExpression::Literal(
            Literal::Number("0".to_string()),
            dummy_span(),
        )),
        modifiers: IrModifiers {
            visibility: IrVisibility::Private,
            ..IrModifiers::default()
        },
        span: dummy_span(),
    };
    let method = IrStatement::MethodDeclaration {
        name: "getCount".to_string(),
        parameters: Vec::new(),
        return_type: JavaType::int(),
        body: vec![IrStatement::Return {
            value: Some(IrExpression::FieldAccess {
                receiver: Box::new(IrExpression::This {
                    java_type: JavaType::object(),
                    span: dummy_span(),
                }),
                field_name: "count".to_string(),
                java_type: JavaType::int(),
                span: dummy_span(),
            }),
            span: dummy_span(),
        }],
        modifiers: IrModifiers {
            visibility: IrVisibility::Public,
            ..IrModifiers::default()
        },
        throws: Vec::new(),
        span: dummy_span(),
    };
    let class = IrStatement::ClassDeclaration {
        name: "Counter".to_string(),
        kind: TypeDeclarationKind::Class,
        fields: vec![field],
        methods: vec![method],
        modifiers: IrModifiers {
            visibility: IrVisibility::Public,
            ..IrModifiers::default()
        },
        span: dummy_span(),
    };

    let generator = JavaCodeGenerator::new();
    let rendered = generator.generate_class(&class).unwrap();
    assert_eq!(
        rendered,
        "public class Counter {\n    private int count = 0;\n\n    public int getCount() {\n        return this.count;\n    }\n}"
    );
}
