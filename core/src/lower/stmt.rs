//! file: core/src/lower/stmt.rs
//! description: statement lowering and the block sequence driver.
//!
//! One statement node in, one newline-terminated block of C text out.
//! Nested blocks recurse through `lower_block`, which threads the
//! context's indentation depth and turns `Unsupported` results into
//! blank lines plus a recorded warning.

use crate::ast::{Stmt, StmtKind};
use crate::error::Go2cErrorExt;
use crate::reports::{E_UNSUPPORTED, Report};

use super::context::LowerContext;
use super::err::LoweringError;
use super::expr::lower_expr;
use super::types::map_type;

/// The outcome of lowering one statement: either C text, or the name
/// of a statement kind the mapping rules do not cover. Callers decide
/// what an unmapped kind becomes; `lower_block` emits a blank line and
/// records a warning.
#[derive(Debug, Clone, PartialEq)]
pub enum Lowered {
    Text(String),
    Unsupported(&'static str),
}

pub fn lower_stmt(stmt: &Stmt, ctx: &mut LowerContext) -> Result<Lowered, Box<dyn Go2cErrorExt>> {
    match &stmt.kind {
        StmtKind::Var { names, ty, values } => {
            if names.len() != 1 || values.len() != 1 {
                return Err(Box::new(LoweringError::new(
                    format!(
                        "variable declaration must bind exactly one name to one value, found {} name(s) and {} value(s)",
                        names.len(),
                        values.len()
                    ),
                    "go2c.lower.lower_stmt.var".into(),
                    stmt.location.clone(),
                    stmt.span.clone(),
                )));
            }
            let ty = match ty {
                Some(ty) => ty,
                None => {
                    return Err(Box::new(LoweringError::new(
                        format!("variable declaration of {} carries no explicit type", names[0]),
                        "go2c.lower.lower_stmt.var".into(),
                        stmt.location.clone(),
                        stmt.span.clone(),
                    )));
                }
            };
            let mapped = map_type(&ty.spelling(), ctx);
            let value = lower_expr(&values[0])?;
            Ok(Lowered::Text(format!("{} {} = {};\n", mapped, names[0], value)))
        }

        StmtKind::Return { results } => {
            let first = match results.first() {
                Some(expr) => expr,
                None => {
                    return Err(Box::new(LoweringError::new(
                        "return statement carries no result expression".into(),
                        "go2c.lower.lower_stmt.return".into(),
                        stmt.location.clone(),
                        stmt.span.clone(),
                    )));
                }
            };
            if results.len() > 1 {
                log::debug!("return carries {} results, lowering the first", results.len());
            }
            Ok(Lowered::Text(format!("return {};\n", lower_expr(first)?)))
        }

        StmtKind::Expr { expr } => Ok(Lowered::Text(format!("{};\n", lower_expr(expr)?))),

        StmtKind::If {
            cond,
            body,
            else_body,
        } => {
            let mut out = format!("if ({})\n", lower_expr(cond)?);
            out.push_str(&ctx.tabs());
            out.push_str("{\n");
            out.push_str(&lower_block(body, ctx)?);
            out.push_str(&ctx.tabs());
            out.push_str("}\n");

            // An empty else branch means no else clause; nothing is
            // emitted for it.
            if !else_body.is_empty() {
                out.push_str(&ctx.tabs());
                out.push_str("else\n");
                out.push_str(&ctx.tabs());
                out.push_str("{\n");
                out.push_str(&lower_block(else_body, ctx)?);
                out.push_str(&ctx.tabs());
                out.push_str("}\n");
            }

            Ok(Lowered::Text(out))
        }

        StmtKind::Assign { .. } | StmtKind::For { .. } => {
            Ok(Lowered::Unsupported(stmt.kind.name()))
        }
    }
}

/// Lower a statement sequence one indentation level deeper than the
/// caller, prefixing every line-producing statement with the current
/// run of tabs. Depth is restored before returning, on the error path
/// included.
pub fn lower_block(stmts: &[Stmt], ctx: &mut LowerContext) -> Result<String, Box<dyn Go2cErrorExt>> {
    let mut out = String::new();
    ctx.push_indent();
    for stmt in stmts {
        let lowered = match lower_stmt(stmt, ctx) {
            Ok(lowered) => lowered,
            Err(e) => {
                ctx.pop_indent();
                return Err(e);
            }
        };
        match lowered {
            Lowered::Text(text) => {
                out.push_str(&ctx.tabs());
                out.push_str(&text);
            }
            Lowered::Unsupported(kind) => {
                log::debug!("skipping unsupported {} statement", kind);
                ctx.reports.push(Report::warning(
                    &format!("skipped unsupported {} statement", kind),
                    stmt.location.clone(),
                    Some(E_UNSUPPORTED),
                ));
                out.push_str(&ctx.tabs());
                out.push('\n');
            }
        }
    }
    ctx.pop_indent();
    Ok(out)
}
