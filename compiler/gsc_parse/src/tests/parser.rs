//! Statement and expression grammar coverage.

use gsc_ir::{
    BinaryOp, BuiltinVar, ClassMember, DirectiveKind, ExprKind, FnModifier, IncDecOp, Span,
    StmtKind, UnaryOp,
};
use pretty_assertions::assert_eq;

use super::{expr_kind, parse_clean, parse_with};
use gsc_ir::Dialect;

#[test]
fn empty_source() {
    let parsed = parse_clean("");
    assert!(parsed.unit.file.stmts.is_empty());
}

#[test]
fn precedence_mul_nests_under_add() {
    let parsed = parse_clean("a + b * c;");
    let ExprKind::Binary { op, left, right } = expr_kind(&parsed, 0) else {
        panic!("expected binary");
    };
    assert_eq!(op, BinaryOp::Add);
    assert!(matches!(parsed.expr(left).kind, ExprKind::Ident(_)));
    // `*` is a strictly nested child of `+`'s right operand.
    let ExprKind::Binary { op: inner, .. } = parsed.expr(right).kind else {
        panic!("expected nested binary");
    };
    assert_eq!(inner, BinaryOp::Mul);
}

#[test]
fn left_associativity() {
    let parsed = parse_clean("a - b - c;");
    let ExprKind::Binary { op, left, .. } = expr_kind(&parsed, 0) else {
        panic!("expected binary");
    };
    assert_eq!(op, BinaryOp::Sub);
    // (a - b) - c
    assert!(matches!(
        parsed.expr(left).kind,
        ExprKind::Binary {
            op: BinaryOp::Sub,
            ..
        }
    ));
}

#[test]
fn logical_and_bitwise_levels() {
    // `a || b && c & d` => a || (b && (c & d))
    let parsed = parse_clean("a || b && c & d;");
    let ExprKind::Binary { op, right, .. } = expr_kind(&parsed, 0) else {
        panic!("expected binary");
    };
    assert_eq!(op, BinaryOp::Or);
    let ExprKind::Binary { op, right, .. } = parsed.expr(right).kind else {
        panic!("expected nested binary");
    };
    assert_eq!(op, BinaryOp::And);
    let ExprKind::Binary { op, .. } = parsed.expr(right).kind else {
        panic!("expected nested binary");
    };
    assert_eq!(op, BinaryOp::BitAnd);
}

#[test]
fn unary_binds_tighter_than_binary() {
    let parsed = parse_clean("!a && b;");
    let ExprKind::Binary { op, left, .. } = expr_kind(&parsed, 0) else {
        panic!("expected binary");
    };
    assert_eq!(op, BinaryOp::And);
    assert!(matches!(
        parsed.expr(left).kind,
        ExprKind::Unary {
            op: UnaryOp::Not,
            ..
        }
    ));
}

#[test]
fn ternary_and_assignment_are_right_associative() {
    let parsed = parse_clean("x = y = a ? b : c ? d : e;");
    let ExprKind::Assign { value, .. } = expr_kind(&parsed, 0) else {
        panic!("expected assignment");
    };
    // y = (ternary)
    let ExprKind::Assign { value, .. } = parsed.expr(value).kind else {
        panic!("expected nested assignment");
    };
    // a ? b : (c ? d : e)
    let ExprKind::Ternary { alternative, .. } = parsed.expr(value).kind else {
        panic!("expected ternary");
    };
    assert!(matches!(
        parsed.expr(alternative).kind,
        ExprKind::Ternary { .. }
    ));
}

#[test]
fn compound_assignment_ops() {
    for source in ["x += 1;", "x <<= 2;", "x %= 3;", "x |= 4;"] {
        let parsed = parse_clean(source);
        assert!(matches!(expr_kind(&parsed, 0), ExprKind::Assign { .. }));
    }
}

#[test]
fn update_expressions() {
    let parsed = parse_clean("i++; --j;");
    assert!(matches!(
        expr_kind(&parsed, 0),
        ExprKind::Update {
            op: IncDecOp::Increment,
            prefix: false,
            ..
        }
    ));
    assert!(matches!(
        expr_kind(&parsed, 1),
        ExprKind::Update {
            op: IncDecOp::Decrement,
            prefix: true,
            ..
        }
    ));
}

#[test]
fn member_and_subscript_chain() {
    let parsed = parse_clean("a.b[0].c->d;");
    let ExprKind::Member {
        object,
        property,
        arrow,
    } = expr_kind(&parsed, 0)
    else {
        panic!("expected member");
    };
    assert!(arrow);
    assert_eq!(parsed.lookup(property), "d");
    let ExprKind::Member { object, arrow, .. } = parsed.expr(object).kind else {
        panic!("expected member");
    };
    assert!(!arrow);
    assert!(matches!(
        parsed.expr(object).kind,
        ExprKind::Subscript { .. }
    ));
}

#[test]
fn calls_and_namespace_calls() {
    let parsed = parse_clean("foo(); ns::bar(1, 2); obj.method(x);");
    let ExprKind::Call { callee, args } = expr_kind(&parsed, 0) else {
        panic!("expected call");
    };
    assert!(matches!(parsed.expr(callee).kind, ExprKind::Ident(_)));
    assert!(args.is_empty());

    let ExprKind::Call { callee, args } = expr_kind(&parsed, 1) else {
        panic!("expected call");
    };
    assert!(matches!(
        parsed.expr(callee).kind,
        ExprKind::NamespaceRef { .. }
    ));
    assert_eq!(args.len(), 2);

    let ExprKind::Call { callee, .. } = expr_kind(&parsed, 2) else {
        panic!("expected call");
    };
    assert!(matches!(parsed.expr(callee).kind, ExprKind::Member { .. }));
}

#[test]
fn builtin_variables() {
    let parsed = parse_clean("self; level; game; world; anim; vararg;");
    for (n, expected) in [
        BuiltinVar::SelfRef,
        BuiltinVar::Level,
        BuiltinVar::Game,
        BuiltinVar::World,
        BuiltinVar::Anim,
        BuiltinVar::Vararg,
    ]
    .into_iter()
    .enumerate()
    {
        assert_eq!(expr_kind(&parsed, n), ExprKind::Builtin(expected));
    }
}

#[test]
fn literals() {
    let parsed = parse_clean(
        "42; 0x10; 1.5; true; false; undefined; \"s\"; &\"loc\"; #\"h\"; #animtree; %idle;",
    );
    assert!(matches!(expr_kind(&parsed, 0), ExprKind::Int(42)));
    assert!(matches!(expr_kind(&parsed, 1), ExprKind::Int(16)));
    assert!(matches!(expr_kind(&parsed, 2), ExprKind::Float(_)));
    assert!(matches!(expr_kind(&parsed, 3), ExprKind::Bool(true)));
    assert!(matches!(expr_kind(&parsed, 4), ExprKind::Bool(false)));
    assert!(matches!(expr_kind(&parsed, 5), ExprKind::Undefined));
    assert!(matches!(expr_kind(&parsed, 6), ExprKind::String(_)));
    assert!(matches!(expr_kind(&parsed, 7), ExprKind::IString(_)));
    assert!(matches!(expr_kind(&parsed, 8), ExprKind::HashString(_)));
    assert!(matches!(expr_kind(&parsed, 9), ExprKind::AnimTree));
    assert!(matches!(expr_kind(&parsed, 10), ExprKind::AnimIdent(_)));
}

#[test]
fn anim_reference() {
    let parsed = parse_clean("%tree::walk_cycle;");
    let ExprKind::AnimRef { tree, anim } = expr_kind(&parsed, 0) else {
        panic!("expected anim ref");
    };
    assert_eq!(parsed.lookup(tree), "tree");
    assert_eq!(parsed.lookup(anim), "walk_cycle");
}

#[test]
fn isdefined_is_a_primary() {
    let parsed = parse_clean("isdefined(x) && isdefined(y.z);");
    let ExprKind::Binary { left, .. } = expr_kind(&parsed, 0) else {
        panic!("expected binary");
    };
    assert!(matches!(parsed.expr(left).kind, ExprKind::IsDefined(_)));
}

#[test]
fn function_pointers() {
    let parsed = parse_clean("f = &callback; g = &ns::callback;");
    let ExprKind::Assign { value, .. } = expr_kind(&parsed, 0) else {
        panic!("expected assignment");
    };
    let ExprKind::FuncPointer { namespace, name } = parsed.expr(value).kind else {
        panic!("expected function pointer");
    };
    assert!(!namespace.is_present());
    assert_eq!(parsed.lookup(name), "callback");

    let ExprKind::Assign { value, .. } = expr_kind(&parsed, 1) else {
        panic!("expected assignment");
    };
    let ExprKind::FuncPointer { namespace, .. } = parsed.expr(value).kind else {
        panic!("expected function pointer");
    };
    assert_eq!(parsed.lookup(namespace), "ns");
}

#[test]
fn function_dereference_call() {
    let parsed = parse_clean("[[ handler ]](1);");
    let ExprKind::Call { callee, args } = expr_kind(&parsed, 0) else {
        panic!("expected call");
    };
    assert!(matches!(parsed.expr(callee).kind, ExprKind::FuncDeref(_)));
    assert_eq!(args.len(), 1);
}

#[test]
fn thread_expression() {
    let parsed = parse_clean("thread do_stuff(1);");
    let ExprKind::Thread(inner) = expr_kind(&parsed, 0) else {
        panic!("expected thread");
    };
    assert!(matches!(parsed.expr(inner).kind, ExprKind::Call { .. }));
}

#[test]
fn thread_as_plain_identifier() {
    // Not followed by a callable: an ordinary variable named `thread`.
    let parsed = parse_clean("x = thread;");
    let ExprKind::Assign { value, .. } = expr_kind(&parsed, 0) else {
        panic!("expected assignment");
    };
    assert!(matches!(parsed.expr(value).kind, ExprKind::Ident(_)));
}

#[test]
fn if_else_while() {
    let parsed = parse_clean("if (a) { b(); } else { c(); } while (d) e();");
    let StmtKind::If { alternative, .. } = parsed.top(0).kind else {
        panic!("expected if");
    };
    assert!(alternative.is_valid());
    assert!(matches!(parsed.top(1).kind, StmtKind::While { .. }));
}

#[test]
fn dangling_else_binds_to_nearest_if() {
    let parsed = parse_clean("if (a) if (b) {} else {}");
    let StmtKind::If {
        consequence,
        alternative,
        ..
    } = parsed.top(0).kind
    else {
        panic!("expected if");
    };
    // The outer if has no else.
    assert!(!alternative.is_valid());
    // The inner if (the consequence) took it.
    let StmtKind::If { alternative, .. } = parsed.stmt(consequence).kind else {
        panic!("expected nested if");
    };
    assert!(alternative.is_valid());
}

#[test]
fn do_while_and_for() {
    let parsed = parse_clean("do { a(); } while (b); for (i = 0; i < 5; i++) { b(); }");
    assert!(matches!(parsed.top(0).kind, StmtKind::DoWhile { .. }));
    let StmtKind::For {
        initializer,
        condition,
        update,
        ..
    } = parsed.top(1).kind
    else {
        panic!("expected for");
    };
    assert!(initializer.is_valid());
    assert!(condition.is_valid());
    assert!(update.is_valid());
}

#[test]
fn for_with_empty_header() {
    let parsed = parse_clean("for (;;) { wait 1; }");
    let StmtKind::For {
        initializer,
        condition,
        update,
        ..
    } = parsed.top(0).kind
    else {
        panic!("expected for");
    };
    assert!(!initializer.is_valid());
    assert!(!condition.is_valid());
    assert!(!update.is_valid());
}

#[test]
fn for_with_var_initializer() {
    let parsed = parse_clean("for (var i = 0; i < 3; i++) {}");
    let StmtKind::For { initializer, .. } = parsed.top(0).kind else {
        panic!("expected for");
    };
    assert!(matches!(
        parsed.stmt(initializer).kind,
        StmtKind::VarDecl { .. }
    ));
}

#[test]
fn foreach_statement() {
    let parsed = parse_clean("foreach (player in level.players) { player doDamage(); }");
    let StmtKind::Foreach { element, .. } = parsed.top(0).kind else {
        panic!("expected foreach");
    };
    assert_eq!(parsed.lookup(element), "player");
}

#[test]
fn switch_with_fallthrough_cases() {
    let parsed = parse_clean(
        "switch (x) { case 1: case 2: a(); break; default: b(); }",
    );
    let StmtKind::Switch { cases, .. } = parsed.top(0).kind else {
        panic!("expected switch");
    };
    let cases = parsed.unit.ast.cases(cases);
    assert_eq!(cases.len(), 3);
    // `case 1:` has an empty body (falls through into `case 2:`).
    assert!(cases[0].body.is_empty());
    assert!(!cases[0].is_default());
    assert_eq!(cases[1].body.len(), 2); // a(); break;
    assert!(cases[2].is_default());
}

#[test]
fn wait_statements() {
    let parsed = parse_clean("wait 0.5; waitrealtime 2; waittillframeend;");
    assert!(matches!(
        parsed.top(0).kind,
        StmtKind::Wait {
            realtime: false,
            ..
        }
    ));
    assert!(matches!(
        parsed.top(1).kind,
        StmtKind::Wait { realtime: true, .. }
    ));
    assert!(matches!(
        parsed.top(2).kind,
        StmtKind::WaittillFrameEnd(id) if !id.is_valid()
    ));
}

#[test]
fn notify_statement_with_args() {
    let parsed = parse_clean("self notify(\"damage\", 10);");
    let StmtKind::Notify {
        object,
        event,
        args,
    } = parsed.top(0).kind
    else {
        panic!("expected notify, got {:?}", parsed.top(0).kind);
    };
    assert!(matches!(
        parsed.expr(object).kind,
        ExprKind::Builtin(BuiltinVar::SelfRef)
    ));
    assert!(matches!(parsed.expr(event).kind, ExprKind::String(_)));
    let args = parsed.unit.ast.expr_list(args);
    assert_eq!(args.len(), 1);
    assert!(matches!(parsed.expr(args[0]).kind, ExprKind::Int(10)));
}

#[test]
fn endon_and_waittill() {
    let parsed = parse_clean(
        "self endon(\"death\"); self waittill(\"spawned\", origin, angles); \
         self waittillmatch(\"anim\", which);",
    );
    assert!(matches!(parsed.top(0).kind, StmtKind::Endon { .. }));

    let StmtKind::Waittill {
        bindings, matched, ..
    } = parsed.top(1).kind
    else {
        panic!("expected waittill");
    };
    assert!(!matched);
    let names = parsed.unit.ast.names(bindings);
    assert_eq!(names.len(), 2);
    assert_eq!(parsed.lookup(names[0]), "origin");

    let StmtKind::Waittill { matched, .. } = parsed.top(2).kind else {
        panic!("expected waittillmatch");
    };
    assert!(matched);
}

#[test]
fn var_and_const_declarations() {
    let parsed = parse_clean("var x; var y = 3; const Z = 4;");
    assert!(matches!(
        parsed.top(0).kind,
        StmtKind::VarDecl { init, .. } if !init.is_valid()
    ));
    assert!(matches!(
        parsed.top(1).kind,
        StmtKind::VarDecl { init, .. } if init.is_valid()
    ));
    assert!(matches!(parsed.top(2).kind, StmtKind::ConstDecl { .. }));
}

#[test]
fn function_definition() {
    let parsed = parse_clean("function private do_thing(a, b = 5, ...) { return a; }");
    let StmtKind::FunctionDef(id) = parsed.top(0).kind else {
        panic!("expected function");
    };
    let func = parsed.unit.ast.function(id);
    assert_eq!(parsed.lookup(func.name), "do_thing");
    assert_eq!(func.modifier, FnModifier::Private);

    let params = parsed.unit.ast.params(func.params);
    assert_eq!(params.len(), 3);
    assert!(!params[0].default.is_valid());
    assert!(params[1].default.is_valid());
    assert!(params[2].vararg);
}

#[test]
fn autoexec_function() {
    let parsed = parse_clean("function autoexec init() {}");
    let StmtKind::FunctionDef(id) = parsed.top(0).kind else {
        panic!("expected function");
    };
    assert_eq!(
        parsed.unit.ast.function(id).modifier,
        FnModifier::Autoexec
    );
}

#[test]
fn vararg_must_be_last() {
    let parsed = parse_with("function f(..., a) {}", Dialect::Extended);
    assert!(parsed
        .unit
        .errors
        .iter()
        .any(|e| e.code == gsc_diagnostic::ErrorCode::E1007));
}

#[test]
fn class_definition() {
    let parsed = parse_clean(
        "class Zombie : Actor {\n\
         var health;\n\
         var speed = 10;\n\
         constructor(hp) { self.health = hp; }\n\
         destructor() {}\n\
         function attack(target) { target notify(\"hit\"); }\n\
         }",
    );
    let StmtKind::ClassDef(id) = parsed.top(0).kind else {
        panic!("expected class");
    };
    let class = parsed.unit.ast.class(id);
    assert_eq!(parsed.lookup(class.name), "Zombie");
    assert_eq!(parsed.lookup(class.parent), "Actor");

    let members = parsed.unit.ast.members(class.members);
    assert_eq!(members.len(), 5);
    assert!(matches!(members[0], ClassMember::Field { .. }));
    assert!(matches!(members[2], ClassMember::Constructor(_)));
    assert!(matches!(members[3], ClassMember::Destructor(_)));
    assert!(matches!(members[4], ClassMember::Method(_)));
}

#[test]
fn class_without_parent() {
    let parsed = parse_clean("class Simple {}");
    let StmtKind::ClassDef(id) = parsed.top(0).kind else {
        panic!("expected class");
    };
    assert!(!parsed.unit.ast.class(id).parent.is_present());
}

#[test]
fn duplicate_constructor_reports() {
    let parsed = parse_with(
        "class C { constructor() {} constructor(x) {} }",
        Dialect::Extended,
    );
    assert!(parsed
        .unit
        .errors
        .iter()
        .any(|e| e.code == gsc_diagnostic::ErrorCode::E1008));
}

#[test]
fn directives() {
    let parsed = parse_clean(
        "#using scripts\\shared\\util;\n\
         #insert scripts\\shared\\shared.gsh;\n\
         #namespace zm_utility;\n\
         #precache(\"model\", \"p7_zm_door\");\n\
         #using_animtree(\"generic\");\n",
    );
    let kinds: Vec<_> = (0..5)
        .map(|n| {
            let StmtKind::Directive(id) = parsed.top(n).kind else {
                panic!("expected directive");
            };
            parsed.unit.ast.directive(id).kind
        })
        .collect();
    assert!(matches!(kinds[0], DirectiveKind::Using { path } if parsed.lookup(path) == "scripts\\shared\\util"));
    assert!(matches!(kinds[1], DirectiveKind::Insert { .. }));
    assert!(
        matches!(kinds[2], DirectiveKind::Namespace { name } if parsed.lookup(name) == "zm_utility")
    );
    assert!(matches!(kinds[3], DirectiveKind::Precache { asset_type, .. } if parsed.lookup(asset_type) == "model"));
    assert!(matches!(kinds[4], DirectiveKind::UsingAnimtree { tree } if parsed.lookup(tree) == "generic"));
}

#[test]
fn define_directive_raw_capture() {
    let parsed = parse_clean("#define FOO(x) (x)+1\n");
    let StmtKind::Directive(id) = parsed.top(0).kind else {
        panic!("expected directive");
    };
    let DirectiveKind::Define { name, params, body } = parsed.unit.ast.directive(id).kind else {
        panic!("expected define");
    };
    assert_eq!(parsed.lookup(name), "FOO");
    assert_eq!(parsed.lookup(params), "x");
    // The body is exactly the raw text; no expression parse is attempted.
    assert_eq!(parsed.lookup(body), "(x)+1");
}

#[test]
fn conditional_directives_are_bare_markers() {
    let parsed = parse_clean("#if FEATURE > 1\nx();\n#else\ny();\n#endif\n");
    assert_eq!(parsed.unit.file.stmts.len(), 5);
    let StmtKind::Directive(id) = parsed.top(0).kind else {
        panic!("expected directive");
    };
    // The condition is parsed but not evaluated: both branches' statements
    // appear in the tree.
    assert!(matches!(
        parsed.unit.ast.directive(id).kind,
        DirectiveKind::If { condition } if condition.is_valid()
    ));
    assert!(matches!(parsed.top(1).kind, StmtKind::Expr(_)));
    assert!(matches!(parsed.top(3).kind, StmtKind::Expr(_)));
}

#[test]
fn idempotent_parse() {
    let source = "function f(a) { if (a) return a * 2; return 0; }\nx = f(21);";
    let a = parse_clean(source);
    let b = parse_clean(source);
    assert_eq!(a.unit.file, b.unit.file);
    assert_eq!(a.unit.ast, b.unit.ast);
}

#[test]
fn node_spans_contain_children() {
    let parsed = parse_clean("if (a + b) { wait 1; } else c();");
    let StmtKind::If {
        condition,
        consequence,
        alternative,
    } = parsed.top(0).kind
    else {
        panic!("expected if");
    };
    let if_span = parsed.top(0).span;
    assert!(if_span.contains_span(parsed.expr(condition).span));
    assert!(if_span.contains_span(parsed.stmt(consequence).span));
    assert!(if_span.contains_span(parsed.stmt(alternative).span));

    // Children are contiguously ordered.
    assert!(parsed.expr(condition).span.end <= parsed.stmt(consequence).span.start);
    assert!(parsed.stmt(consequence).span.end <= parsed.stmt(alternative).span.start);
}

#[test]
fn top_level_spans_and_trivia_tile_the_input() {
    let source = "// header\nfunction f() { wait 1; } /* mid */ x = f();\n";
    let parsed = parse_clean(source);

    let mut spans: Vec<Span> = parsed
        .unit
        .file
        .stmts
        .iter()
        .map(|&id| parsed.stmt(id).span)
        .chain(parsed.unit.trivia.iter().map(|t| t.span))
        .collect();
    spans.sort_by_key(|s| (s.start, s.end));

    // Union covers the whole input with no gaps.
    let mut covered_to = 0u32;
    for span in &spans {
        assert!(span.start <= covered_to, "gap before {span:?}");
        covered_to = covered_to.max(span.end);
    }
    assert_eq!(covered_to as usize, source.len());
}
