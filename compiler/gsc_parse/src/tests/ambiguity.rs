//! The five grammar ambiguities, resolved deterministically.

use gsc_diagnostic::ErrorCode;
use gsc_ir::{BinaryOp, BuiltinVar, Dialect, ExprKind, StmtKind};
use pretty_assertions::assert_eq;

use super::{expr_kind, parse_clean, parse_with};

// 1. `new_expression` vs `call_expression`: the leading `new` decides.

#[test]
fn new_is_never_a_call() {
    let parsed = parse_clean("new Foo(1, 2);");
    let ExprKind::New { class, args } = expr_kind(&parsed, 0) else {
        panic!("expected new expression, got {:?}", parsed.top_expr(0).kind);
    };
    assert_eq!(parsed.lookup(class), "Foo");
    assert_eq!(args.len(), 2);
}

#[test]
fn new_without_args_list_is_an_error() {
    let parsed = parse_with("x = new;", Dialect::Extended);
    assert!(parsed.unit.has_errors());
}

// 2. Expression vs assignment: lookahead after the parsed left side.

#[test]
fn assignment_reinterprets_parsed_left_side() {
    let parsed = parse_clean("a.b[0] = c + 1;");
    let ExprKind::Assign { target, .. } = expr_kind(&parsed, 0) else {
        panic!("expected assignment");
    };
    assert!(matches!(
        parsed.expr(target).kind,
        ExprKind::Subscript { .. }
    ));
}

#[test]
fn plain_expression_stays_expression() {
    let parsed = parse_clean("a == b;");
    assert!(matches!(
        expr_kind(&parsed, 0),
        ExprKind::Binary {
            op: BinaryOp::Eq,
            ..
        }
    ));
}

// 3. Subscript vs array literal: decided purely by position.

#[test]
fn bracket_after_postfix_is_subscript() {
    let parsed = parse_clean("x[0];");
    let ExprKind::Subscript { object, index } = expr_kind(&parsed, 0) else {
        panic!("expected subscript, got {:?}", parsed.top_expr(0).kind);
    };
    assert!(matches!(parsed.expr(object).kind, ExprKind::Ident(_)));
    assert!(matches!(parsed.expr(index).kind, ExprKind::Int(0)));
}

#[test]
fn bracket_in_operand_position_is_array_literal() {
    let parsed = parse_clean("[1, 2, 3];");
    let ExprKind::ArrayLit(range) = expr_kind(&parsed, 0) else {
        panic!("expected array literal, got {:?}", parsed.top_expr(0).kind);
    };
    assert_eq!(range.len(), 3);
}

#[test]
fn array_literal_as_assignment_source() {
    let parsed = parse_clean("a = [];");
    let ExprKind::Assign { value, .. } = expr_kind(&parsed, 0) else {
        panic!("expected assignment");
    };
    let ExprKind::ArrayLit(range) = parsed.expr(value).kind else {
        panic!("expected array literal");
    };
    assert!(range.is_empty());
}

#[test]
fn subscript_of_subscript_keeps_single_brackets() {
    let parsed = parse_clean("a[b[0]];");
    let ExprKind::Subscript { index, .. } = expr_kind(&parsed, 0) else {
        panic!("expected subscript");
    };
    assert!(matches!(
        parsed.expr(index).kind,
        ExprKind::Subscript { .. }
    ));
}

// 4. Pointer call vs plain call: an object expression before the callee.

#[test]
fn bare_call_is_plain_call() {
    let parsed = parse_clean("foo(1);");
    assert!(matches!(expr_kind(&parsed, 0), ExprKind::Call { .. }));
}

#[test]
fn object_before_callee_is_pointer_call() {
    let parsed = parse_clean("self foo(1);");
    let ExprKind::PointerCall {
        object,
        threaded,
        callee,
        args,
    } = expr_kind(&parsed, 0)
    else {
        panic!("expected pointer call, got {:?}", parsed.top_expr(0).kind);
    };
    assert!(!threaded);
    assert!(matches!(
        parsed.expr(object).kind,
        ExprKind::Builtin(BuiltinVar::SelfRef)
    ));
    assert!(matches!(parsed.expr(callee).kind, ExprKind::Ident(_)));
    assert_eq!(args.len(), 1);
}

#[test]
fn thread_between_object_and_callee() {
    let parsed = parse_clean("self thread ns::watch_damage(attacker);");
    let ExprKind::PointerCall {
        threaded, callee, ..
    } = expr_kind(&parsed, 0)
    else {
        panic!("expected pointer call");
    };
    assert!(threaded);
    assert!(matches!(
        parsed.expr(callee).kind,
        ExprKind::NamespaceRef { .. }
    ));
}

#[test]
fn pointer_call_through_dereference() {
    let parsed = parse_clean("self [[ handler ]](a, b);");
    let ExprKind::PointerCall { callee, args, .. } = expr_kind(&parsed, 0) else {
        panic!("expected pointer call");
    };
    assert!(matches!(parsed.expr(callee).kind, ExprKind::FuncDeref(_)));
    assert_eq!(args.len(), 2);
}

#[test]
fn chained_pointer_call_object_is_any_expression() {
    // The object of the pointer call is itself a call.
    let parsed = parse_clean("get_player() foo();");
    let ExprKind::PointerCall { object, .. } = expr_kind(&parsed, 0) else {
        panic!("expected pointer call");
    };
    assert!(matches!(parsed.expr(object).kind, ExprKind::Call { .. }));
}

#[test]
fn event_heads_are_not_pointer_callees() {
    // `self notify(...)` must stay a statement, never a pointer call.
    let parsed = parse_clean("self notify(\"damage\", 10);");
    assert!(matches!(parsed.top(0).kind, StmtKind::Notify { .. }));
}

// 5. Vector literal vs parenthesized expression: the comma decides.

#[test]
fn three_components_make_a_vector() {
    let parsed = parse_clean("(1, 2, 3);");
    let ExprKind::VectorLit { x, y, z } = expr_kind(&parsed, 0) else {
        panic!("expected vector literal, got {:?}", parsed.top_expr(0).kind);
    };
    assert!(matches!(parsed.expr(x).kind, ExprKind::Int(1)));
    assert!(matches!(parsed.expr(y).kind, ExprKind::Int(2)));
    assert!(matches!(parsed.expr(z).kind, ExprKind::Int(3)));
}

#[test]
fn no_comma_makes_a_parenthesized_expression() {
    let parsed = parse_clean("(1 + 2);");
    let ExprKind::Paren(inner) = expr_kind(&parsed, 0) else {
        panic!("expected parenthesized expression");
    };
    assert!(matches!(
        parsed.expr(inner).kind,
        ExprKind::Binary {
            op: BinaryOp::Add,
            ..
        }
    ));
}

#[test]
fn two_component_list_is_an_arity_error() {
    let parsed = parse_with("(1, 2);", Dialect::Extended);
    assert!(parsed
        .unit
        .errors
        .iter()
        .any(|e| e.code == ErrorCode::E1005));
}

#[test]
fn four_component_list_is_an_arity_error() {
    let parsed = parse_with("(1, 2, 3, 4);", Dialect::Extended);
    assert!(parsed
        .unit
        .errors
        .iter()
        .any(|e| e.code == ErrorCode::E1005));
}

#[test]
fn vector_components_take_full_expressions() {
    let parsed = parse_clean("(x + 1, f(y), z[0]);");
    assert!(matches!(expr_kind(&parsed, 0), ExprKind::VectorLit { .. }));
}
