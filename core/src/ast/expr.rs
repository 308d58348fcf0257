use crate::{
    ast::{BinaryOperator, Expr, ExprKind, Go2cErrorExt, LiteralKind, Rule, UnaryOperator, rules},
    source,
};

pub(crate) fn parse_expression_rule(
    pair: pest::iterators::Pair<Rule>,
    source: &source::Source,
) -> Result<Expr, Box<dyn Go2cErrorExt>> {
    let (mut inner_pairs, location, span) = rules::descend(&pair, source);
    let next_pair = rules::fetch_next_pair(&mut inner_pairs, &location, &span)?;
    match next_pair.as_rule() {
        Rule::expression => parse_expression_rule(next_pair, source),
        Rule::equality_expression => parse_binary_tier(next_pair, source),
        _ => Err(Box::<dyn Go2cErrorExt>::from(Box::new(
            crate::ast::err::SyntaxError::with(
                crate::Level::Error,
                format!("Unexpected expression type. {:?}", next_pair.as_rule()),
                "go2c.ast.expr.parse_expression_rule".into(),
                location,
                span,
            ),
        ))),
    }
}

/// Parse one binary-precedence tier, folding `(op, operand)`
/// repetitions left-associatively. The same shape serves the equality,
/// relational, additive and multiplicative tiers; which operand parser
/// to recurse into is chosen from the pair's own rule.
fn parse_binary_tier(
    pair: pest::iterators::Pair<Rule>,
    source: &source::Source,
) -> Result<Expr, Box<dyn Go2cErrorExt>> {
    let (mut inner_pairs, location, span) = rules::descend(&pair, source);

    let first_pair = rules::fetch_next_pair(&mut inner_pairs, &location, &span)?;
    let mut node = parse_operand(first_pair, source)?;

    // Handle zero-or-more (op, right) repetitions
    while let Some(op_pair) = inner_pairs.next() {
        let op = match binary_operator_from_text(op_pair.as_str()) {
            Some(op) => op,
            None => {
                return Err(Box::<dyn Go2cErrorExt>::from(Box::new(
                    crate::ast::err::SyntaxError::with(
                        crate::Level::Error,
                        format!("Invalid binary operator '{}'.", op_pair.as_str()),
                        "go2c.ast.expr.parse_binary_tier".into(),
                        location.clone(),
                        span.clone(),
                    ),
                )));
            }
        };
        let right_pair = rules::fetch_next_pair(&mut inner_pairs, &location, &span)?;
        let right_node = parse_operand(right_pair, source)?;

        node = Expr::new(
            ExprKind::Binary {
                left: Box::new(node),
                op,
                right: Box::new(right_node),
            },
            rules::pair_location(&op_pair, source),
            rules::pair_span(&op_pair, source),
        );
    }

    Ok(node)
}

fn parse_operand(
    pair: pest::iterators::Pair<Rule>,
    source: &source::Source,
) -> Result<Expr, Box<dyn Go2cErrorExt>> {
    match pair.as_rule() {
        Rule::equality_expression
        | Rule::relational_expression
        | Rule::additive_expression
        | Rule::multiplicative_expression => parse_binary_tier(pair, source),
        Rule::unary_expression => parse_unary_expression_rule(pair, source),
        other => {
            let (_, location, span) = rules::descend(&pair, source);
            Err(Box::<dyn Go2cErrorExt>::from(Box::new(
                crate::ast::err::SyntaxError::with(
                    crate::Level::Error,
                    format!("Unexpected operand type. {:?}", other),
                    "go2c.ast.expr.parse_operand".into(),
                    location,
                    span,
                ),
            )))
        }
    }
}

fn binary_operator_from_text(text: &str) -> Option<BinaryOperator> {
    match text {
        "==" => Some(BinaryOperator::Eq),
        "!=" => Some(BinaryOperator::Ne),
        "<" => Some(BinaryOperator::Lt),
        "<=" => Some(BinaryOperator::Le),
        ">" => Some(BinaryOperator::Gt),
        ">=" => Some(BinaryOperator::Ge),
        "+" => Some(BinaryOperator::Add),
        "-" => Some(BinaryOperator::Sub),
        "*" => Some(BinaryOperator::Mul),
        "/" => Some(BinaryOperator::Div),
        "%" => Some(BinaryOperator::Mod),
        _ => None,
    }
}

fn parse_unary_expression_rule(
    pair: pest::iterators::Pair<Rule>,
    source: &source::Source,
) -> Result<Expr, Box<dyn Go2cErrorExt>> {
    let (mut inner_pairs, location, span) = rules::descend(&pair, source);
    let next_pair = rules::fetch_next_pair(&mut inner_pairs, &location, &span)?;
    match next_pair.as_rule() {
        Rule::unary_op => {
            let op = match next_pair.as_str() {
                "+" => UnaryOperator::Plus,
                "-" => UnaryOperator::Minus,
                "!" => UnaryOperator::Not,
                _ => {
                    return Err(Box::<dyn Go2cErrorExt>::from(Box::new(
                        crate::ast::err::SyntaxError::with(
                            crate::Level::Error,
                            "Invalid unary operator.".into(),
                            "go2c.ast.expr.parse_unary_expression_rule".into(),
                            location,
                            span,
                        ),
                    )));
                }
            };
            let expr_pair = rules::fetch_next_pair(&mut inner_pairs, &location, &span)?;
            Ok(Expr::new(
                ExprKind::Unary {
                    op,
                    expr: Box::new(parse_unary_expression_rule(expr_pair, source)?),
                },
                location,
                span,
            ))
        }
        Rule::postfix_expression => parse_postfix_expression_rule(next_pair, source),
        _ => Err(Box::<dyn Go2cErrorExt>::from(Box::new(
            crate::ast::err::SyntaxError::with(
                crate::Level::Error,
                "Unexpected unary expression type.".into(),
                "go2c.ast.expr.parse_unary_expression_rule".into(),
                location,
                span,
            ),
        ))),
    }
}

fn parse_postfix_expression_rule(
    pair: pest::iterators::Pair<Rule>,
    source: &source::Source,
) -> Result<Expr, Box<dyn Go2cErrorExt>> {
    let (mut inner_pairs, location, span) = rules::descend(&pair, source);
    let next_pair = rules::fetch_next_pair(&mut inner_pairs, &location, &span)?;
    // Start with the primary expression, then apply zero-or-more
    // postfix ops left-to-right.
    let mut node = parse_primary_expression_rule(next_pair, source)?;

    while let Some(op_pair) = inner_pairs.next() {
        let (mut op_inner, op_location, op_span) = rules::descend(&op_pair, source);
        let shape_pair = rules::fetch_next_pair(&mut op_inner, &op_location, &op_span)?;
        match shape_pair.as_rule() {
            Rule::arguments => {
                let mut args: Vec<Expr> = Vec::new();
                if let Some(list_pair) = shape_pair.into_inner().next() {
                    for arg_pair in list_pair.into_inner() {
                        args.push(parse_expression_rule(arg_pair, source)?);
                    }
                }
                node = Expr::new(
                    ExprKind::Call {
                        callee: Box::new(node),
                        args,
                    },
                    op_location.clone(),
                    op_span.clone(),
                );
            }
            Rule::selector => {
                let field_pair = rules::fetch_next_pair(
                    &mut shape_pair.into_inner(),
                    &op_location,
                    &op_span,
                )?;
                node = Expr::new(
                    ExprKind::Selector {
                        object: Box::new(node),
                        field: field_pair.as_str().to_string(),
                    },
                    op_location.clone(),
                    op_span.clone(),
                );
            }
            Rule::index_op => {
                let index_pair = rules::fetch_next_pair(
                    &mut shape_pair.into_inner(),
                    &op_location,
                    &op_span,
                )?;
                let index_node = parse_expression_rule(index_pair, source)?;
                node = Expr::new(
                    ExprKind::Index {
                        object: Box::new(node),
                        index: Box::new(index_node),
                    },
                    op_location.clone(),
                    op_span.clone(),
                );
            }
            _ => {
                return Err(Box::<dyn Go2cErrorExt>::from(Box::new(
                    crate::ast::err::SyntaxError::with(
                        crate::Level::Error,
                        "Unsupported postfix operator.".into(),
                        "go2c.ast.expr.parse_postfix_expression_rule".into(),
                        op_location,
                        op_span,
                    ),
                )));
            }
        }
    }

    Ok(node)
}

fn parse_primary_expression_rule(
    pair: pest::iterators::Pair<Rule>,
    source: &source::Source,
) -> Result<Expr, Box<dyn Go2cErrorExt>> {
    let (mut inner_pairs, location, span) = rules::descend(&pair, source);
    let next_pair = rules::fetch_next_pair(&mut inner_pairs, &location, &span)?;
    match next_pair.as_rule() {
        Rule::value => parse_value_rule(next_pair, source),
        Rule::expression => parse_expression_rule(next_pair, source),
        Rule::identifier => parse_identifier_rule(next_pair, source),
        _ => Err(Box::<dyn Go2cErrorExt>::from(Box::new(
            crate::ast::err::SyntaxError::with(
                crate::Level::Error,
                "Unexpected primary expression type.".into(),
                "go2c.ast.expr.parse_primary_expression_rule".into(),
                location,
                span,
            ),
        ))),
    }
}

fn parse_value_rule(
    pair: pest::iterators::Pair<Rule>,
    source: &source::Source,
) -> Result<Expr, Box<dyn Go2cErrorExt>> {
    let (mut inner_pairs, location, span) = rules::descend(&pair, source);
    let next_pair = rules::fetch_next_pair(&mut inner_pairs, &location, &span)?;
    // The literal's raw source text is preserved as-is; lowering emits
    // it without re-encoding.
    let text = next_pair.as_str().to_string();
    let kind = match next_pair.as_rule() {
        Rule::string => LiteralKind::String,
        Rule::number => {
            if text.contains('.') {
                LiteralKind::Float
            } else {
                LiteralKind::Int
            }
        }
        Rule::boolean => LiteralKind::Bool,
        _ => {
            return Err(Box::<dyn Go2cErrorExt>::from(Box::new(
                crate::ast::err::SyntaxError::with(
                    crate::Level::Error,
                    "Unexpected value type.".into(),
                    "go2c.ast.expr.parse_value_rule".into(),
                    location,
                    span,
                ),
            )));
        }
    };
    Ok(Expr::new(
        ExprKind::Literal { kind, value: text },
        location,
        span,
    ))
}

pub(crate) fn parse_identifier_rule(
    pair: pest::iterators::Pair<Rule>,
    source: &source::Source,
) -> Result<Expr, Box<dyn Go2cErrorExt>> {
    let (_, location, span) = rules::descend(&pair, source);
    Ok(Expr::new(
        ExprKind::Ident {
            name: pair.as_str().to_string(),
        },
        location,
        span,
    ))
}
