use go2c_core::lower::{LowerContext, NodeRef, translate, visit};
use go2c_core::{Source, ast, transpile_source};

#[test]
fn translates_a_function_declaration() {
    let source = Source::inline(
        "add.go",
        "package main\n\nfunc add(a int, b int) int {\n\treturn a + b\n}\n",
    );
    let (code, reports) = transpile_source(&source).unwrap();
    assert!(code.contains("int add(int a, int b)\n{\n\treturn a + b;\n}\n"));
    assert!(reports.is_empty());
}

#[test]
fn translates_variable_declarations_with_mapped_and_unmapped_types() {
    let source = Source::inline(
        "vars.go",
        "func setup() int {\n\tvar x string = \"hi\"\n\tvar v Vec3 = origin\n\treturn 0\n}\n",
    );
    let (code, reports) = transpile_source(&source).unwrap();
    // The recognized type maps; the string literal keeps its quotes.
    assert!(code.contains("\tchar* x = \"hi\";\n"));
    // The unknown type passes through unchanged and is announced.
    assert!(code.contains("\tVec3 v = origin;\n"));
    assert_eq!(reports.len(), 1);
    assert!(reports.reports[0]
        .message
        .contains("could not convert type Vec3"));
}

#[test]
fn translates_imports_as_includes() {
    let source = Source::inline("io.go", "import \"fmt\"\n");
    let (code, _) = transpile_source(&source).unwrap();
    assert_eq!(code, "#include \"fmt\"\n");
}

#[test]
fn translates_if_else_with_one_tab_deeper_bodies() {
    let source = Source::inline(
        "branch.go",
        "func check(a int, b int) int {\n\tif a < b {\n\t\treturn a\n\t} else {\n\t\treturn b\n\t}\n}\n",
    );
    let (code, _) = transpile_source(&source).unwrap();
    assert_eq!(
        code,
        "\nint check(int a, int b)\n{\n\tif (a < b)\n\t{\n\t\treturn a;\n\t}\n\telse\n\t{\n\t\treturn b;\n\t}\n}\n"
    );
}

#[test]
fn if_without_else_emits_no_else_block() {
    let source = Source::inline(
        "branch.go",
        "func check(a int) int {\n\tif a < 0 {\n\t\treturn 0\n\t}\n\treturn a\n}\n",
    );
    let (code, _) = transpile_source(&source).unwrap();
    assert!(code.contains("\tif (a < 0)\n\t{\n\t\treturn 0;\n\t}\n\treturn a;\n"));
    assert!(!code.contains("else"));
}

#[test]
fn package_clause_contributes_no_output() {
    let source = Source::inline("pkg.go", "package main\n\nimport \"fmt\"\n");
    let (code, _) = transpile_source(&source).unwrap();
    assert_eq!(code, "#include \"fmt\"\n");
}

#[test]
fn unsupported_statements_skip_to_a_blank_line_without_aborting() {
    let source = Source::inline(
        "skip.go",
        "func run(n int) int {\n\tn = 3\n\tfor n > 0 {\n\t\tn = 0\n\t}\n\treturn n\n}\n",
    );
    let (code, reports) = transpile_source(&source).unwrap();
    assert!(code.contains("\treturn n;\n"));
    // The assignment and the loop each skip to a blank line.
    assert!(code.contains("\t\n"));
    assert_eq!(reports.len(), 2);
    assert!(reports.reports[0]
        .message
        .contains("skipped unsupported Assign statement"));
    assert!(reports.reports[1]
        .message
        .contains("skipped unsupported For statement"));
}

#[test]
fn unmapped_expressions_translate_to_placeholders() {
    let source = Source::inline(
        "neg.go",
        "func negate(a int) int {\n\treturn -a\n}\n",
    );
    let (code, _) = transpile_source(&source).unwrap();
    assert!(code.contains("\treturn /* unsupported expr */;\n"));
}

#[test]
fn call_with_selector_callee_aborts_translation() {
    let source = Source::inline(
        "hello.go",
        "func main() int {\n\tfmt.Println(\"hi\")\n\treturn 0\n}\n",
    );
    let err = transpile_source(&source).unwrap_err();
    assert!(err.message().contains("plain identifier"));
    assert!(err.location().is_some());
}

#[test]
fn function_without_return_type_aborts_translation() {
    let source = Source::inline("void.go", "func run() {\n\treturn 0\n}\n");
    let err = transpile_source(&source).unwrap_err();
    assert!(err.message().contains("declares no return type"));
}

#[test]
fn parameter_with_pointer_type_aborts_translation() {
    let source = Source::inline("ptr.go", "func deref(p *int) int {\n\treturn 0\n}\n");
    let err = transpile_source(&source).unwrap_err();
    assert!(err.message().contains("identifier type"));
}

#[test]
fn var_declaration_without_type_aborts_translation() {
    let source = Source::inline("untyped.go", "func f() int {\n\tvar x = 1\n\treturn x\n}\n");
    let err = transpile_source(&source).unwrap_err();
    assert!(err.message().contains("no explicit type"));
}

#[test]
fn bare_return_aborts_translation() {
    let source = Source::inline("bare.go", "func f() int {\n\treturn\n}\n");
    let err = transpile_source(&source).unwrap_err();
    assert!(err.message().contains("no result expression"));
}

#[test]
fn walker_visits_every_node_in_preorder() {
    let source = Source::inline(
        "add.go",
        "package main\n\nfunc add(a int, b int) int {\n\treturn a + b\n}\n",
    );
    let file = ast::generate_ast_from_source(&source).unwrap();

    let mut total = 0usize;
    let mut exprs = 0usize;
    for item in &file.items {
        visit(NodeRef::Item(item), &mut |node| {
            total += 1;
            if let NodeRef::Expr(_) = node {
                exprs += 1;
            }
            Ok(())
        })
        .unwrap();
    }

    // package, func, three type refs, the return statement, and the
    // binary expression with its two operands.
    assert_eq!(total, 9);
    assert_eq!(exprs, 3);
}

#[test]
fn translation_output_is_deterministic_for_the_same_tree() {
    let source = Source::inline(
        "det.go",
        "import \"fmt\"\n\nfunc add(a int, b int) int {\n\treturn a + b\n}\n",
    );
    let file = ast::generate_ast_from_source(&source).unwrap();

    let mut first_ctx = LowerContext::new();
    let first = translate(&file, &mut first_ctx).unwrap();
    let mut second_ctx = LowerContext::new();
    let second = translate(&file, &mut second_ctx).unwrap();
    assert_eq!(first, second);
    assert_eq!(first_ctx.depth(), 0);
}
