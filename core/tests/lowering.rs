use go2c_core::ast::{BinaryOperator, Expr, ExprKind, LiteralKind, Stmt, StmtKind, TypeRef, UnaryOperator};
use go2c_core::lower::{EXPR_PLACEHOLDER, LowerContext, Lowered, lower_block, lower_expr, lower_stmt};

fn ident(name: &str) -> Expr {
    Expr::new(
        ExprKind::Ident {
            name: name.to_string(),
        },
        None,
        None,
    )
}

fn int_lit(text: &str) -> Expr {
    Expr::new(
        ExprKind::Literal {
            kind: LiteralKind::Int,
            value: text.to_string(),
        },
        None,
        None,
    )
}

fn binary(left: Expr, op: BinaryOperator, right: Expr) -> Expr {
    Expr::new(
        ExprKind::Binary {
            left: Box::new(left),
            op,
            right: Box::new(right),
        },
        None,
        None,
    )
}

fn stmt(kind: StmtKind) -> Stmt {
    Stmt::new(kind, None, None)
}

#[test]
fn lowers_identifiers_and_literals_verbatim() {
    assert_eq!(lower_expr(&ident("count")).unwrap(), "count");
    assert_eq!(lower_expr(&int_lit("42")).unwrap(), "42");

    // String literals keep their quotes; no re-encoding happens.
    let s = Expr::new(
        ExprKind::Literal {
            kind: LiteralKind::String,
            value: "\"hi\"".to_string(),
        },
        None,
        None,
    );
    assert_eq!(lower_expr(&s).unwrap(), "\"hi\"");
}

#[test]
fn lowers_binary_expressions_with_canonical_operator_text() {
    let e = binary(ident("a"), BinaryOperator::Add, ident("b"));
    assert_eq!(lower_expr(&e).unwrap(), "a + b");

    let e = binary(ident("a"), BinaryOperator::Le, int_lit("10"));
    assert_eq!(lower_expr(&e).unwrap(), "a <= 10");

    // Nested operands are emitted verbatim, without re-parenthesizing.
    let e = binary(
        binary(ident("a"), BinaryOperator::Add, ident("b")),
        BinaryOperator::Mul,
        ident("c"),
    );
    assert_eq!(lower_expr(&e).unwrap(), "a + b * c");
}

#[test]
fn lowers_calls_with_comma_joined_arguments() {
    let call = Expr::new(
        ExprKind::Call {
            callee: Box::new(ident("add")),
            args: vec![int_lit("1"), int_lit("2")],
        },
        None,
        None,
    );
    assert_eq!(lower_expr(&call).unwrap(), "add(1, 2)");

    let empty = Expr::new(
        ExprKind::Call {
            callee: Box::new(ident("main")),
            args: vec![],
        },
        None,
        None,
    );
    assert_eq!(lower_expr(&empty).unwrap(), "main()");
}

#[test]
fn call_with_non_identifier_callee_is_fatal() {
    let callee = Expr::new(
        ExprKind::Selector {
            object: Box::new(ident("fmt")),
            field: "Println".to_string(),
        },
        None,
        None,
    );
    let call = Expr::new(
        ExprKind::Call {
            callee: Box::new(callee),
            args: vec![int_lit("1")],
        },
        None,
        None,
    );
    let err = lower_expr(&call).unwrap_err();
    assert!(err.message().contains("plain identifier"));
    assert_eq!(err.issuer(), "go2c.lower.lower_expr");
}

#[test]
fn unmapped_expression_kinds_lower_to_the_placeholder() {
    let unary = Expr::new(
        ExprKind::Unary {
            op: UnaryOperator::Minus,
            expr: Box::new(int_lit("1")),
        },
        None,
        None,
    );
    assert_eq!(lower_expr(&unary).unwrap(), EXPR_PLACEHOLDER);

    let index = Expr::new(
        ExprKind::Index {
            object: Box::new(ident("xs")),
            index: Box::new(int_lit("0")),
        },
        None,
        None,
    );
    assert_eq!(lower_expr(&index).unwrap(), EXPR_PLACEHOLDER);
}

#[test]
fn expression_lowering_is_deterministic() {
    let e = binary(
        ident("a"),
        BinaryOperator::Add,
        binary(ident("b"), BinaryOperator::Mul, int_lit("3")),
    );
    assert_eq!(lower_expr(&e).unwrap(), lower_expr(&e).unwrap());
}

#[test]
fn lowers_var_declaration() {
    let mut ctx = LowerContext::new();
    let s = stmt(StmtKind::Var {
        names: vec!["x".to_string()],
        ty: Some(TypeRef::Named {
            name: "string".to_string(),
        }),
        values: vec![Expr::new(
            ExprKind::Literal {
                kind: LiteralKind::String,
                value: "\"hi\"".to_string(),
            },
            None,
            None,
        )],
    });
    assert_eq!(
        lower_stmt(&s, &mut ctx).unwrap(),
        Lowered::Text("char* x = \"hi\";\n".to_string())
    );
}

#[test]
fn var_declaration_preconditions_are_fatal() {
    let mut ctx = LowerContext::new();

    // No type.
    let s = stmt(StmtKind::Var {
        names: vec!["x".to_string()],
        ty: None,
        values: vec![int_lit("1")],
    });
    assert!(lower_stmt(&s, &mut ctx).is_err());

    // Two names.
    let s = stmt(StmtKind::Var {
        names: vec!["a".to_string(), "b".to_string()],
        ty: Some(TypeRef::Named {
            name: "int".to_string(),
        }),
        values: vec![int_lit("1"), int_lit("2")],
    });
    assert!(lower_stmt(&s, &mut ctx).is_err());

    // No initializer.
    let s = stmt(StmtKind::Var {
        names: vec!["x".to_string()],
        ty: Some(TypeRef::Named {
            name: "int".to_string(),
        }),
        values: vec![],
    });
    assert!(lower_stmt(&s, &mut ctx).is_err());
}

#[test]
fn lowers_return_and_expression_statements() {
    let mut ctx = LowerContext::new();

    let r = stmt(StmtKind::Return {
        results: vec![binary(ident("a"), BinaryOperator::Add, ident("b"))],
    });
    assert_eq!(
        lower_stmt(&r, &mut ctx).unwrap(),
        Lowered::Text("return a + b;\n".to_string())
    );

    let e = stmt(StmtKind::Expr {
        expr: Expr::new(
            ExprKind::Call {
                callee: Box::new(ident("tick")),
                args: vec![],
            },
            None,
            None,
        ),
    });
    assert_eq!(
        lower_stmt(&e, &mut ctx).unwrap(),
        Lowered::Text("tick();\n".to_string())
    );
}

#[test]
fn return_without_results_is_fatal() {
    let mut ctx = LowerContext::new();
    let r = stmt(StmtKind::Return { results: vec![] });
    let err = lower_stmt(&r, &mut ctx).unwrap_err();
    assert!(err.message().contains("no result expression"));
}

#[test]
fn lowers_if_without_else_as_single_braced_block() {
    let mut ctx = LowerContext::new();
    let s = stmt(StmtKind::If {
        cond: binary(ident("a"), BinaryOperator::Lt, ident("b")),
        body: vec![stmt(StmtKind::Return {
            results: vec![ident("a")],
        })],
        else_body: vec![],
    });
    let lowered = lower_stmt(&s, &mut ctx).unwrap();
    assert_eq!(
        lowered,
        Lowered::Text("if (a < b)\n{\n\treturn a;\n}\n".to_string())
    );
    assert_eq!(ctx.depth(), 0);
}

#[test]
fn lowers_if_else_with_both_braced_blocks() {
    let mut ctx = LowerContext::new();
    let s = stmt(StmtKind::If {
        cond: binary(ident("a"), BinaryOperator::Lt, ident("b")),
        body: vec![stmt(StmtKind::Return {
            results: vec![ident("a")],
        })],
        else_body: vec![stmt(StmtKind::Return {
            results: vec![ident("b")],
        })],
    });
    let lowered = lower_stmt(&s, &mut ctx).unwrap();
    assert_eq!(
        lowered,
        Lowered::Text(
            "if (a < b)\n{\n\treturn a;\n}\nelse\n{\n\treturn b;\n}\n".to_string()
        )
    );
    assert_eq!(ctx.depth(), 0);
}

#[test]
fn indentation_depth_is_restored_after_nested_conditionals() {
    let mut ctx = LowerContext::new();
    let innermost = stmt(StmtKind::If {
        cond: ident("c"),
        body: vec![stmt(StmtKind::Return {
            results: vec![int_lit("1")],
        })],
        else_body: vec![],
    });
    let middle = stmt(StmtKind::If {
        cond: ident("b"),
        body: vec![innermost],
        else_body: vec![],
    });
    let outer = stmt(StmtKind::If {
        cond: ident("a"),
        body: vec![middle],
        else_body: vec![stmt(StmtKind::Return {
            results: vec![int_lit("0")],
        })],
    });

    let lowered = lower_stmt(&outer, &mut ctx).unwrap();
    assert_eq!(ctx.depth(), 0);

    // Lowered at top level, the innermost return sits three blocks in.
    match lowered {
        Lowered::Text(text) => assert!(text.contains("\t\t\treturn 1;\n")),
        other => panic!("expected text, got {:?}", other),
    }
}

#[test]
fn depth_is_restored_when_a_nested_statement_is_fatal() {
    let mut ctx = LowerContext::new();
    let bad = stmt(StmtKind::Return { results: vec![] });
    let outer = stmt(StmtKind::If {
        cond: ident("a"),
        body: vec![bad],
        else_body: vec![],
    });
    assert!(lower_stmt(&outer, &mut ctx).is_err());
    assert_eq!(ctx.depth(), 0);
}

#[test]
fn unsupported_statements_become_tagged_results() {
    let mut ctx = LowerContext::new();
    let s = stmt(StmtKind::Assign {
        target: ident("x"),
        value: int_lit("1"),
    });
    assert_eq!(lower_stmt(&s, &mut ctx).unwrap(), Lowered::Unsupported("Assign"));

    let s = stmt(StmtKind::For {
        cond: None,
        body: vec![],
    });
    assert_eq!(lower_stmt(&s, &mut ctx).unwrap(), Lowered::Unsupported("For"));
}

#[test]
fn lower_block_turns_unsupported_into_blank_line_and_warning() {
    let mut ctx = LowerContext::new();
    let stmts = vec![
        stmt(StmtKind::Assign {
            target: ident("x"),
            value: int_lit("1"),
        }),
        stmt(StmtKind::Return {
            results: vec![ident("x")],
        }),
    ];
    let text = lower_block(&stmts, &mut ctx).unwrap();
    assert_eq!(text, "\t\n\treturn x;\n");
    assert_eq!(ctx.depth(), 0);
    assert_eq!(ctx.reports.len(), 1);
    assert!(ctx.reports.reports[0]
        .message
        .contains("skipped unsupported Assign statement"));
}
