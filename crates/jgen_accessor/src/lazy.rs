//! Lowering of lazy getters to double-checked locking.
//!
//! The field `private final T value = <init>;` is rewritten to an
//! `AtomicReference<Object>` holder and the getter body becomes:
//!
//! ```java
//! Object value = this.value.get();
//! if (value == null) {
//!     synchronized (this.value) {
//!         value = this.value.get();
//!         if (value == null) {
//!             final T actualValue = <init>;
//!             value = actualValue == null ? this.value : actualValue;
//!             this.value.set(value);
//!         }
//!     }
//! }
//! return (T) (value == this.value ? null : value);
//! ```
//!
//! The holder itself doubles as the sentinel for a computed `null`, so the
//! initializer runs at most once even when it evaluates to `null`. Primitive
//! fields skip the sentinel (their initializer cannot produce `null`) and
//! the getter returns the boxed equivalent.

use std::collections::HashMap;

use jgen_ir::{
    BinaryOp, IrExpression, IrModifiers, IrStatement, IrVisibility, JavaType, Literal, Span,
};
use once_cell::sync::Lazy;

use crate::error::GetterDiagnostic;

/// Holder type that backs every lazily initialized field.
pub const HOLDER_TYPE: &str = "java.util.concurrent.atomic.AtomicReference";

static PRIMITIVE_BOXES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    [
        ("int", "Integer"),
        ("long", "Long"),
        ("short", "Short"),
        ("byte", "Byte"),
        ("float", "Float"),
        ("double", "Double"),
        ("boolean", "Boolean"),
        ("char", "Character"),
    ]
    .into_iter()
    .collect()
});

/// Result of lowering a lazy field: the rewritten holder field, the getter
/// body, and the getter's declared return type.
pub(crate) struct LazyLowering {
    pub rewritten_field: IrStatement,
    pub body: Vec<IrStatement>,
    pub return_type: JavaType,
}

/// Lazy initialization only works on private final non-transient fields
/// with an initializer.
pub(crate) fn check_lazy_preconditions(
    modifiers: &IrModifiers,
    initializer: Option<&IrExpression>,
    span: &Span,
) -> Result<(), GetterDiagnostic> {
    if modifiers.visibility != IrVisibility::Private || !modifiers.is_final {
        return Err(GetterDiagnostic::LazyRequiresPrivateFinal { span: span.clone() });
    }
    if modifiers.is_transient {
        return Err(GetterDiagnostic::LazyOnTransientField { span: span.clone() });
    }
    if initializer.is_none() {
        return Err(GetterDiagnostic::LazyRequiresInitializer { span: span.clone() });
    }
    Ok(())
}

/// Boxed form of the declared type, plus whether boxing happened. The boxed
/// type is what the lazy getter declares as its return type.
fn boxed_equivalent(declared: &JavaType) -> (JavaType, bool) {
    if let JavaType::Primitive(name) = declared {
        if let Some(boxed) = PRIMITIVE_BOXES.get(name.as_str()) {
            return (JavaType::reference(*boxed), true);
        }
    }
    (declared.clone(), false)
}

pub(crate) fn lower_lazy_getter(
    field_name: &str,
    declared_type: &JavaType,
    mut initializer: IrExpression,
    field_modifiers: &IrModifiers,
    field_span: &Span,
    request_span: &Span,
) -> LazyLowering {
    let (boxed_type, is_primitive) = boxed_equivalent(declared_type);
    let holder_type = JavaType::Reference {
        name: HOLDER_TYPE.to_string(),
        generic_args: vec![JavaType::object()],
    };

    // The initializer is relocated into the synthesized body; its top-level
    // call arguments keep their original spans while everything the
    // generator adds around them is stamped with the request span.
    let argument_spans = capture_argument_spans(&initializer);
    stamp_expression_spans(&mut initializer, request_span);

    let holder = |span: &Span| {
        crate::body::this_field_access(field_name, holder_type.clone(), span.clone())
    };
    let value_var = |span: &Span| IrExpression::Identifier {
        name: "value".to_string(),
        java_type: JavaType::object(),
        span: span.clone(),
    };
    let holder_get = |span: &Span| IrExpression::MethodCall {
        receiver: Some(Box::new(holder(span))),
        method_name: "get".to_string(),
        args: Vec::new(),
        java_type: JavaType::object(),
        span: span.clone(),
    };
    let null_literal = |span: &Span| IrExpression::Literal(Literal::Null, span.clone());
    let span = request_span;

    // Object value = this.<field>.get();
    let read_once = IrStatement::VariableDeclaration {
        name: "value".to_string(),
        java_type: JavaType::object(),
        initializer: Some(holder_get(span)),
        is_final: false,
        span: span.clone(),
    };

    // final <Raw> actualValue = <init>;
    let compute = IrStatement::VariableDeclaration {
        name: "actualValue".to_string(),
        java_type: declared_type.clone(),
        initializer: Some(initializer),
        is_final: true,
        span: span.clone(),
    };

    // value = actualValue;                       (primitive)
    // value = actualValue == null ? this.f : actualValue;  (reference)
    let actual_value = IrExpression::Identifier {
        name: "actualValue".to_string(),
        java_type: declared_type.clone(),
        span: span.clone(),
    };
    let cached = if is_primitive {
        actual_value
    } else {
        IrExpression::Conditional {
            condition: Box::new(IrExpression::Binary {
                left: Box::new(actual_value.clone()),
                op: BinaryOp::Equal,
                right: Box::new(null_literal(span)),
                java_type: JavaType::boolean(),
                span: span.clone(),
            }),
            then_expr: Box::new(holder(span)),
            else_expr: Box::new(actual_value),
            java_type: JavaType::object(),
            span: span.clone(),
        }
    };
    let store_local = IrStatement::Expression {
        expr: IrExpression::Assignment {
            target: Box::new(value_var(span)),
            value: Box::new(cached),
            java_type: JavaType::object(),
            span: span.clone(),
        },
        span: span.clone(),
    };

    // this.<field>.set(value);
    let publish = IrStatement::Expression {
        expr: IrExpression::MethodCall {
            receiver: Some(Box::new(holder(span))),
            method_name: "set".to_string(),
            args: vec![value_var(span)],
            java_type: JavaType::void(),
            span: span.clone(),
        },
        span: span.clone(),
    };

    let value_is_null = |span: &Span| IrExpression::Binary {
        left: Box::new(value_var(span)),
        op: BinaryOp::Equal,
        right: Box::new(null_literal(span)),
        java_type: JavaType::boolean(),
        span: span.clone(),
    };

    let inner_check = IrStatement::If {
        condition: value_is_null(span),
        then_stmt: Box::new(IrStatement::Block {
            statements: vec![compute, store_local, publish],
            span: span.clone(),
        }),
        else_stmt: None,
        span: span.clone(),
    };

    let reread = IrStatement::Expression {
        expr: IrExpression::Assignment {
            target: Box::new(value_var(span)),
            value: Box::new(holder_get(span)),
            java_type: JavaType::object(),
            span: span.clone(),
        },
        span: span.clone(),
    };

    let synchronized = IrStatement::Synchronized {
        lock: holder(span),
        body: vec![reread, inner_check],
        span: span.clone(),
    };

    let outer_check = IrStatement::If {
        condition: value_is_null(span),
        then_stmt: Box::new(IrStatement::Block {
            statements: vec![synchronized],
            span: span.clone(),
        }),
        else_stmt: None,
        span: span.clone(),
    };

    // return (Boxed) value;                        (primitive)
    // return (T) (value == this.f ? null : value); (reference)
    let result = if is_primitive {
        value_var(span)
    } else {
        IrExpression::Conditional {
            condition: Box::new(IrExpression::Binary {
                left: Box::new(value_var(span)),
                op: BinaryOp::Equal,
                right: Box::new(holder(span)),
                java_type: JavaType::boolean(),
                span: span.clone(),
            }),
            then_expr: Box::new(null_literal(span)),
            else_expr: Box::new(value_var(span)),
            java_type: JavaType::object(),
            span: span.clone(),
        }
    };
    let return_stmt = IrStatement::Return {
        value: Some(IrExpression::Cast {
            expr: Box::new(result),
            target_type: boxed_type.clone(),
            span: span.clone(),
        }),
        span: span.clone(),
    };

    let mut body = vec![read_once, outer_check, return_stmt];
    restore_argument_spans(&mut body, &argument_spans);

    // private final AtomicReference<Object> <field> = new AtomicReference<Object>();
    let rewritten_field = IrStatement::FieldDeclaration {
        name: field_name.to_string(),
        java_type: holder_type.clone(),
        initializer: Some(IrExpression::ObjectCreation {
            class_name: HOLDER_TYPE.to_string(),
            generic_args: vec![JavaType::object()],
            args: Vec::new(),
            java_type: holder_type,
            span: field_span.clone(),
        }),
        modifiers: field_modifiers.clone(),
        span: field_span.clone(),
    };

    LazyLowering {
        rewritten_field,
        body,
        return_type: boxed_type,
    }
}

/// Spans of the initializer's top-level call or constructor arguments,
/// recorded before the whole expression gets stamped with the request span.
fn capture_argument_spans(initializer: &IrExpression) -> Vec<Span> {
    match initializer {
        IrExpression::MethodCall { args, .. } | IrExpression::ObjectCreation { args, .. } => {
            args.iter().map(|arg| arg.span().clone()).collect()
        }
        _ => Vec::new(),
    }
}

/// Puts the captured argument spans back onto the relocated initializer,
/// which the lowering placed in the `actualValue` local.
fn restore_argument_spans(body: &mut [IrStatement], spans: &[Span]) {
    if spans.is_empty() {
        return;
    }
    let initializer = match find_actual_value_initializer(body) {
        Some(expr) => expr,
        None => return,
    };
    if let IrExpression::MethodCall { args, .. } | IrExpression::ObjectCreation { args, .. } =
        initializer
    {
        for (arg, span) in args.iter_mut().zip(spans) {
            *arg.span_mut() = span.clone();
        }
    }
}

fn find_actual_value_initializer(body: &mut [IrStatement]) -> Option<&mut IrExpression> {
    body.iter_mut().find_map(find_in_statement)
}

fn find_in_statement(statement: &mut IrStatement) -> Option<&mut IrExpression> {
    match statement {
        IrStatement::VariableDeclaration {
            name, initializer, ..
        } if name == "actualValue" => initializer.as_mut(),
        IrStatement::If {
            then_stmt,
            else_stmt,
            ..
        } => find_in_statement(then_stmt)
            .or_else(|| else_stmt.as_mut().and_then(|s| find_in_statement(s))),
        IrStatement::Synchronized { body, .. } | IrStatement::Block { statements: body, .. } => {
            body.iter_mut().find_map(find_in_statement)
        }
        _ => None,
    }
}

/// Recursively stamps every span in the expression with the request site.
fn stamp_expression_spans(expr: &mut IrExpression, span: &Span) {
    *expr.span_mut() = span.clone();
    match expr {
        IrExpression::FieldAccess { receiver, .. } | IrExpression::Cast { expr: receiver, .. } => {
            stamp_expression_spans(receiver, span);
        }
        IrExpression::MethodCall { receiver, args, .. } => {
            if let Some(receiver) = receiver {
                stamp_expression_spans(receiver, span);
            }
            for arg in args {
                stamp_expression_spans(arg, span);
            }
        }
        IrExpression::ObjectCreation { args, .. } => {
            for arg in args {
                stamp_expression_spans(arg, span);
            }
        }
        IrExpression::Binary { left, right, .. } => {
            stamp_expression_spans(left, span);
            stamp_expression_spans(right, span);
        }
        IrExpression::Conditional {
            condition,
            then_expr,
            else_expr,
            ..
        } => {
            stamp_expression_spans(condition, span);
            stamp_expression_spans(then_expr, span);
            stamp_expression_spans(else_expr, span);
        }
        IrExpression::Assignment { target, value, .. } => {
            stamp_expression_spans(target, span);
            stamp_expression_spans(value, span);
        }
        IrExpression::Literal(..) | IrExpression::Identifier { .. } | IrExpression::This { .. } => {}
    }
}
