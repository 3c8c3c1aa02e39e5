//! Plain and map-backed getter bodies.

use std::collections::HashSet;

use jgen_ir::{IrExpression, IrStatement, JavaType, Literal, Span};
use once_cell::sync::Lazy;

/// Property types a map-backed store can answer directly via `get`. Anything
/// else goes through `parseProperty` for conversion.
static MAP_LOOKUP_BUILTINS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "BigDecimal", "Long", "Boolean", "String", "Integer", "Double", "Float", "Short",
        "Byte", "Date",
    ]
    .into_iter()
    .collect()
});

/// `this.<field>` access expression.
pub(crate) fn this_field_access(field_name: &str, java_type: JavaType, span: Span) -> IrExpression {
    IrExpression::FieldAccess {
        receiver: Box::new(IrExpression::This {
            java_type: JavaType::object(),
            span: span.clone(),
        }),
        field_name: field_name.to_string(),
        java_type,
        span,
    }
}

/// `return this.<field>;`
pub(crate) fn plain_getter_body(field_name: &str, field_type: &JavaType, span: &Span) -> Vec<IrStatement> {
    vec![IrStatement::Return {
        value: Some(this_field_access(field_name, field_type.clone(), span.clone())),
        span: span.clone(),
    }]
}

/// `return (T) get("<field>");` or `return (T) parseProperty("<field>");`
/// depending on whether the declared type is a directly storable builtin.
pub(crate) fn map_getter_body(field_name: &str, field_type: &JavaType, span: &Span) -> Vec<IrStatement> {
    let direct = field_type
        .simple_name()
        .map_or(false, |name| MAP_LOOKUP_BUILTINS.contains(name));
    let method_name = if direct { "get" } else { "parseProperty" };
    let lookup = IrExpression::MethodCall {
        receiver: None,
        method_name: method_name.to_string(),
        args: vec![IrExpression::Literal(
            Literal::String(field_name.to_string()),
            span.clone(),
        )],
        java_type: JavaType::object(),
        span: span.clone(),
    };
    vec![IrStatement::Return {
        value: Some(IrExpression::Cast {
            expr: Box::new(lookup),
            target_type: field_type.clone(),
            span: span.clone(),
        }),
        span: span.clone(),
    }]
}
