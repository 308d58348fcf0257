//! file: core/src/ast/stmt.rs
//! description: parsing helpers for top-level items and statements.
//!
//! This module contains functions that parse `file`, `item` and
//! `statement` rules from the `pest`-generated `RulesParser` into the
//! typed AST. Parsing helpers attach `Location`/`Span` metadata using
//! the `rules` helpers to aid diagnostics.
//!
use crate::{
    ast::{
        Expr, File, FuncDecl, Go2cErrorExt, Item, ItemKind, Param, Rule, Stmt, StmtKind, TypeRef,
        expr, rules,
    },
    source,
};

/// Parse a whole `file` rule into the tree root.
pub(crate) fn parse_file_rule(
    pair: pest::iterators::Pair<Rule>,
    source: &source::Source,
) -> Result<File, Box<dyn Go2cErrorExt>> {
    let (inner_pairs, _, _) = rules::descend(&pair, source);

    let mut items = Vec::new();
    for next_pair in inner_pairs {
        match next_pair.as_rule() {
            Rule::package_clause => items.push(parse_package_clause(next_pair, source)?),
            Rule::item => items.push(parse_item_rule(next_pair, source)?),
            Rule::EOI => {}
            other => {
                let (_, location, span) = rules::descend(&next_pair, source);
                return Err(Box::<dyn Go2cErrorExt>::from(Box::new(
                    crate::ast::err::SyntaxError::with(
                        crate::Level::Error,
                        format!("Unexpected rule in file parsing: {:?}", other),
                        "go2c.ast.stmt.parse_file_rule".into(),
                        location,
                        span,
                    ),
                )));
            }
        }
    }

    Ok(File::new(items))
}

fn parse_package_clause(
    pair: pest::iterators::Pair<Rule>,
    source: &source::Source,
) -> Result<Item, Box<dyn Go2cErrorExt>> {
    let (mut inner_pairs, location, span) = rules::descend(&pair, source);
    let _keyword = rules::fetch_next_pair(&mut inner_pairs, &location, &span)?;
    let name_pair = rules::fetch_next_pair(&mut inner_pairs, &location, &span)?;
    Ok(Item::new(
        ItemKind::Package {
            name: name_pair.as_str().to_string(),
        },
        location,
        span,
    ))
}

/// Parse a single top-level `item` rule into an `Item`.
///
/// An `item` in the grammar is either an import declaration or a
/// function declaration. The returned node carries the `Location` and
/// `Span` produced by the `rules` helpers so error reporting can point
/// back to precise positions in the source file.
pub(crate) fn parse_item_rule(
    pair: pest::iterators::Pair<Rule>,
    source: &source::Source,
) -> Result<Item, Box<dyn Go2cErrorExt>> {
    let (mut inner_pairs, location, span) = rules::descend(&pair, source);
    let next_pair = rules::fetch_next_pair(&mut inner_pairs, &location, &span)?;
    match next_pair.as_rule() {
        Rule::import_decl => parse_import_decl(next_pair, source),
        Rule::func_decl => parse_func_decl(next_pair, source),
        _ => Err(Box::<dyn Go2cErrorExt>::from(Box::new(
            crate::ast::err::SyntaxError::with(
                crate::Level::Error,
                format!("Unexpected rule in item parsing: {:?}", next_pair.as_rule()),
                "go2c.ast.stmt.parse_item_rule".into(),
                location,
                span,
            ),
        ))),
    }
}

fn parse_import_decl(
    pair: pest::iterators::Pair<Rule>,
    source: &source::Source,
) -> Result<Item, Box<dyn Go2cErrorExt>> {
    let (mut inner_pairs, location, span) = rules::descend(&pair, source);
    let _keyword = rules::fetch_next_pair(&mut inner_pairs, &location, &span)?;
    let path_pair = rules::fetch_next_pair(&mut inner_pairs, &location, &span)?;
    // The path literal keeps its surrounding quote characters; the
    // lowering stage passes it through exactly as written.
    Ok(Item::new(
        ItemKind::Import {
            path: path_pair.as_str().to_string(),
        },
        location,
        span,
    ))
}

fn parse_func_decl(
    pair: pest::iterators::Pair<Rule>,
    source: &source::Source,
) -> Result<Item, Box<dyn Go2cErrorExt>> {
    let (inner_pairs, location, span) = rules::descend(&pair, source);

    let mut name = String::new();
    let mut params: Vec<Param> = Vec::new();
    let mut results: Vec<TypeRef> = Vec::new();
    let mut body: Vec<Stmt> = Vec::new();

    for next_pair in inner_pairs {
        match next_pair.as_rule() {
            Rule::kw_func => {}
            Rule::identifier => name = next_pair.as_str().to_string(),
            Rule::param_list => {
                for param_pair in next_pair.into_inner() {
                    params.push(parse_param(param_pair, source)?);
                }
            }
            Rule::result_list => {
                for type_pair in next_pair.into_inner() {
                    results.push(parse_type_ref(type_pair, source)?);
                }
            }
            Rule::block => body = parse_block_rule(next_pair, source)?,
            other => {
                return Err(Box::<dyn Go2cErrorExt>::from(Box::new(
                    crate::ast::err::SyntaxError::with(
                        crate::Level::Error,
                        format!("Unexpected rule in function parsing: {:?}", other),
                        "go2c.ast.stmt.parse_func_decl".into(),
                        location,
                        span,
                    ),
                )));
            }
        }
    }

    Ok(Item::new(
        ItemKind::Func(FuncDecl {
            name,
            params,
            results,
            body,
        }),
        location,
        span,
    ))
}

fn parse_param(
    pair: pest::iterators::Pair<Rule>,
    source: &source::Source,
) -> Result<Param, Box<dyn Go2cErrorExt>> {
    let (mut inner_pairs, location, span) = rules::descend(&pair, source);
    let name_pair = rules::fetch_next_pair(&mut inner_pairs, &location, &span)?;
    let type_pair = rules::fetch_next_pair(&mut inner_pairs, &location, &span)?;
    Ok(Param {
        name: name_pair.as_str().to_string(),
        ty: parse_type_ref(type_pair, source)?,
    })
}

fn parse_type_ref(
    pair: pest::iterators::Pair<Rule>,
    source: &source::Source,
) -> Result<TypeRef, Box<dyn Go2cErrorExt>> {
    let (mut inner_pairs, location, span) = rules::descend(&pair, source);
    let next_pair = rules::fetch_next_pair(&mut inner_pairs, &location, &span)?;
    match next_pair.as_rule() {
        Rule::identifier => Ok(TypeRef::Named {
            name: next_pair.as_str().to_string(),
        }),
        Rule::pointer_type => {
            let inner_pair =
                rules::fetch_next_pair(&mut next_pair.into_inner(), &location, &span)?;
            Ok(TypeRef::Pointer {
                inner: Box::new(parse_type_ref(inner_pair, source)?),
            })
        }
        _ => Err(Box::<dyn Go2cErrorExt>::from(Box::new(
            crate::ast::err::SyntaxError::with(
                crate::Level::Error,
                "Unexpected type reference.".into(),
                "go2c.ast.stmt.parse_type_ref".into(),
                location,
                span,
            ),
        ))),
    }
}

fn parse_block_rule(
    pair: pest::iterators::Pair<Rule>,
    source: &source::Source,
) -> Result<Vec<Stmt>, Box<dyn Go2cErrorExt>> {
    let (inner_pairs, _, _) = rules::descend(&pair, source);
    let mut statements = Vec::new();
    for stmt_pair in inner_pairs {
        statements.push(parse_statement_rule(stmt_pair, source)?);
    }
    Ok(statements)
}

fn parse_statement_rule(
    pair: pest::iterators::Pair<Rule>,
    source: &source::Source,
) -> Result<Stmt, Box<dyn Go2cErrorExt>> {
    let (mut inner_pairs, location, span) = rules::descend(&pair, source);
    let next_pair = rules::fetch_next_pair(&mut inner_pairs, &location, &span)?;
    match next_pair.as_rule() {
        Rule::var_decl => parse_var_decl(next_pair, source),
        Rule::return_stmt => parse_return_stmt(next_pair, source),
        Rule::conditional_stmt => parse_conditional_stmt(next_pair, source),
        Rule::loop_stmt => parse_loop_stmt(next_pair, source),
        Rule::assign_stmt => parse_assign_stmt(next_pair, source),
        Rule::expr_stmt => {
            let expr_pair =
                rules::fetch_next_pair(&mut next_pair.into_inner(), &location, &span)?;
            Ok(Stmt::new(
                StmtKind::Expr {
                    expr: expr::parse_expression_rule(expr_pair, source)?,
                },
                location,
                span,
            ))
        }
        _ => Err(Box::<dyn Go2cErrorExt>::from(Box::new(
            crate::ast::err::SyntaxError::with(
                crate::Level::Error,
                format!("Unexpected statement type: {:?}", next_pair.as_rule()),
                "go2c.ast.stmt.parse_statement_rule".into(),
                location,
                span,
            ),
        ))),
    }
}

fn parse_var_decl(
    pair: pest::iterators::Pair<Rule>,
    source: &source::Source,
) -> Result<Stmt, Box<dyn Go2cErrorExt>> {
    let (inner_pairs, location, span) = rules::descend(&pair, source);

    let mut names: Vec<String> = Vec::new();
    let mut ty: Option<TypeRef> = None;
    let mut values: Vec<Expr> = Vec::new();

    for next_pair in inner_pairs {
        match next_pair.as_rule() {
            Rule::kw_var => {}
            Rule::ident_list => {
                names = next_pair
                    .into_inner()
                    .map(|p| p.as_str().to_string())
                    .collect();
            }
            Rule::type_ref => ty = Some(parse_type_ref(next_pair, source)?),
            Rule::expr_list => {
                for value_pair in next_pair.into_inner() {
                    values.push(expr::parse_expression_rule(value_pair, source)?);
                }
            }
            other => {
                return Err(Box::<dyn Go2cErrorExt>::from(Box::new(
                    crate::ast::err::SyntaxError::with(
                        crate::Level::Error,
                        format!("Unexpected rule in var declaration: {:?}", other),
                        "go2c.ast.stmt.parse_var_decl".into(),
                        location,
                        span,
                    ),
                )));
            }
        }
    }

    Ok(Stmt::new(StmtKind::Var { names, ty, values }, location, span))
}

fn parse_return_stmt(
    pair: pest::iterators::Pair<Rule>,
    source: &source::Source,
) -> Result<Stmt, Box<dyn Go2cErrorExt>> {
    let (inner_pairs, location, span) = rules::descend(&pair, source);

    let mut results: Vec<Expr> = Vec::new();
    for next_pair in inner_pairs {
        if next_pair.as_rule() == Rule::expr_list {
            for value_pair in next_pair.into_inner() {
                results.push(expr::parse_expression_rule(value_pair, source)?);
            }
        }
    }

    Ok(Stmt::new(StmtKind::Return { results }, location, span))
}

fn parse_conditional_stmt(
    pair: pest::iterators::Pair<Rule>,
    source: &source::Source,
) -> Result<Stmt, Box<dyn Go2cErrorExt>> {
    let (inner_pairs, location, span) = rules::descend(&pair, source);

    let mut cond: Option<Expr> = None;
    let mut body: Vec<Stmt> = Vec::new();
    let mut else_body: Vec<Stmt> = Vec::new();

    for next_pair in inner_pairs {
        match next_pair.as_rule() {
            Rule::kw_if => {}
            Rule::expression => cond = Some(expr::parse_expression_rule(next_pair, source)?),
            Rule::block => body = parse_block_rule(next_pair, source)?,
            Rule::else_clause => else_body = parse_else_clause(next_pair, source)?,
            other => {
                return Err(Box::<dyn Go2cErrorExt>::from(Box::new(
                    crate::ast::err::SyntaxError::with(
                        crate::Level::Error,
                        format!("Unexpected rule in conditional: {:?}", other),
                        "go2c.ast.stmt.parse_conditional_stmt".into(),
                        location,
                        span,
                    ),
                )));
            }
        }
    }

    let cond = match cond {
        Some(c) => c,
        None => {
            return Err(Box::<dyn Go2cErrorExt>::from(Box::new(
                crate::ast::err::SyntaxError::with(
                    crate::Level::Error,
                    "Conditional statement without a condition.".into(),
                    "go2c.ast.stmt.parse_conditional_stmt".into(),
                    location,
                    span,
                ),
            )));
        }
    };

    Ok(Stmt::new(
        StmtKind::If {
            cond,
            body,
            else_body,
        },
        location,
        span,
    ))
}

/// An absent else clause never reaches this function; the caller keeps
/// the empty vector as the explicit "no else" marker.
fn parse_else_clause(
    pair: pest::iterators::Pair<Rule>,
    source: &source::Source,
) -> Result<Vec<Stmt>, Box<dyn Go2cErrorExt>> {
    let (inner_pairs, location, span) = rules::descend(&pair, source);
    for next_pair in inner_pairs {
        match next_pair.as_rule() {
            Rule::kw_else => {}
            Rule::block => return parse_block_rule(next_pair, source),
            // `else if` chains nest: the whole trailing conditional
            // becomes the single statement of the else branch.
            Rule::conditional_stmt => {
                return Ok(vec![parse_conditional_stmt(next_pair, source)?]);
            }
            other => {
                return Err(Box::<dyn Go2cErrorExt>::from(Box::new(
                    crate::ast::err::SyntaxError::with(
                        crate::Level::Error,
                        format!("Unexpected rule in else clause: {:?}", other),
                        "go2c.ast.stmt.parse_else_clause".into(),
                        location,
                        span,
                    ),
                )));
            }
        }
    }
    Ok(Vec::new())
}

fn parse_loop_stmt(
    pair: pest::iterators::Pair<Rule>,
    source: &source::Source,
) -> Result<Stmt, Box<dyn Go2cErrorExt>> {
    let (inner_pairs, location, span) = rules::descend(&pair, source);

    let mut cond: Option<Expr> = None;
    let mut body: Vec<Stmt> = Vec::new();

    for next_pair in inner_pairs {
        match next_pair.as_rule() {
            Rule::kw_for => {}
            Rule::expression => cond = Some(expr::parse_expression_rule(next_pair, source)?),
            Rule::block => body = parse_block_rule(next_pair, source)?,
            _ => {}
        }
    }

    Ok(Stmt::new(StmtKind::For { cond, body }, location, span))
}

fn parse_assign_stmt(
    pair: pest::iterators::Pair<Rule>,
    source: &source::Source,
) -> Result<Stmt, Box<dyn Go2cErrorExt>> {
    let (mut inner_pairs, location, span) = rules::descend(&pair, source);
    let target_pair = rules::fetch_next_pair(&mut inner_pairs, &location, &span)?;
    let target = expr::parse_identifier_rule(target_pair, source)?;
    let _op = rules::fetch_next_pair(&mut inner_pairs, &location, &span)?;
    let value_pair = rules::fetch_next_pair(&mut inner_pairs, &location, &span)?;
    let value = expr::parse_expression_rule(value_pair, source)?;

    Ok(Stmt::new(
        StmtKind::Assign {
            target,
            value,
        },
        location,
        span,
    ))
}
