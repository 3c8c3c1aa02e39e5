use super::*;

fn dummy_span() -> Span {
    Span::dummy()
}

#[test]
fn java_type_constructors() {
    assert_eq!(JavaType::int(), JavaType::Primitive("int".to_string()));
    assert_eq!(
        JavaType::boolean(),
        JavaType::Primitive("boolean".to_string())
    );
    assert_eq!(
        JavaType::string(),
        JavaType::Reference {
            name: "String".to_string(),
            generic_args: vec![],
        }
    );
    assert_eq!(JavaType::void(), JavaType::Void);

    assert!(JavaType::int().is_primitive());
    assert!(!JavaType::int().is_nullable());
    assert!(JavaType::string().is_nullable());
    assert!(!JavaType::void().is_nullable());
}

#[test]
fn simple_name_strips_package_qualifier() {
    assert_eq!(
        JavaType::reference("java.util.Date").simple_name(),
        Some("Date")
    );
    assert_eq!(JavaType::string().simple_name(), Some("String"));
    assert_eq!(JavaType::int().simple_name(), Some("int"));
    assert_eq!(JavaType::void().simple_name(), None);
}

#[test]
fn annotation_name_parsing_and_qualification() {
    let name = AnnotationName::parse("java.lang.SuppressWarnings");
    assert_eq!(name.simple_name(), "SuppressWarnings");
    assert_eq!(name.qualified_name(), "java.lang.SuppressWarnings");

    let bare = AnnotationName::parse("Deprecated");
    assert_eq!(bare.simple_name(), "Deprecated");
    assert_eq!(bare.qualified_name(), "Deprecated");
}

#[test]
fn marker_annotation_has_no_arguments() {
    let annotation = IrAnnotation::marker("Deprecated", dummy_span());
    assert_eq!(annotation.simple_name(), "Deprecated");
    assert!(annotation.arguments.is_empty());
}

#[test]
fn expression_span_accessor_covers_all_variants() {
    let span = Span::new(3, 1, 3, 9);
    let expr = IrExpression::Binary {
        left: Box::new(IrExpression::Identifier {
            name: "value".to_string(),
            java_type: JavaType::object(),
            span: dummy_span(),
        }),
        op: BinaryOp::Equal,
        right: Box::new(IrExpression::Literal(Literal::Null, dummy_span())),
        java_type: JavaType::boolean(),
        span: span.clone(),
    };
    assert_eq!(expr.span(), &span);

    let mut call = IrExpression::MethodCall {
        receiver: None,
        method_name: "get".to_string(),
        args: vec![],
        java_type: JavaType::object(),
        span: dummy_span(),
    };
    *call.span_mut() = span.clone();
    assert_eq!(call.span(), &span);
}

#[test]
fn modifiers_default_to_package_visibility() {
    let modifiers = IrModifiers::default();
    assert_eq!(modifiers.visibility, IrVisibility::Package);
    assert!(!modifiers.is_static);
    assert!(!modifiers.is_final);
    assert!(!modifiers.is_transient);
    assert!(modifiers.annotations.is_empty());
}
