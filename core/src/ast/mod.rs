pub mod err;
pub mod expr;
pub mod kind;
pub mod node;
pub mod rules;
pub mod stmt;

pub use kind::{
    BinaryOperator, ExprKind, FuncDecl, ItemKind, LiteralKind, Param, StmtKind, TypeRef,
    UnaryOperator,
};
pub use node::{Expr, File, Item, Stmt};
pub use rules::{Rule, RulesParser};

pub use crate::error::Go2cErrorExt;

use pest::Parser;

use crate::location::Location;
use crate::source::Source;

/// Parse one source file into the tree the lowering stage consumes.
///
/// This is the whole input boundary: raw text in, a well-formed tree
/// out, or a `SyntaxError` carrying the position the parser stopped
/// at. Nothing downstream of this function recovers from malformed
/// trees.
pub fn generate_ast_from_source(source: &Source) -> Result<File, Box<dyn Go2cErrorExt>> {
    if source.is_empty() {
        return Err(Box::<dyn Go2cErrorExt>::from(Box::new(
            err::EmptySourceError::new("go2c.ast.generate_ast_from_source".into(), None, None),
        )));
    }

    let mut pairs = RulesParser::parse(Rule::file, &source.content)
        .map_err(|e| syntax_error_from_pest(e, source))?;

    let file_pair = match pairs.next() {
        Some(pair) => pair,
        None => {
            return Err(Box::<dyn Go2cErrorExt>::from(Box::new(
                err::SyntaxError::with(
                    crate::Level::Error,
                    "Parser produced no file rule.".into(),
                    "go2c.ast.generate_ast_from_source".into(),
                    None,
                    None,
                ),
            )));
        }
    };

    stmt::parse_file_rule(file_pair, source)
}

fn syntax_error_from_pest(
    error: pest::error::Error<Rule>,
    source: &Source,
) -> Box<dyn Go2cErrorExt> {
    let (line, column) = match error.line_col {
        pest::error::LineColLocation::Pos((line, column)) => (line, column),
        pest::error::LineColLocation::Span((line, column), _) => (line, column),
    };
    Box::new(err::SyntaxError::with(
        crate::Level::Error,
        error.variant.message().to_string(),
        "go2c.ast.generate_ast_from_source".into(),
        Some(Location::new(source.name.clone(), line, column)),
        None,
    ))
}
