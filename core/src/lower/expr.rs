use crate::ast::{Expr, ExprKind};
use crate::error::Go2cErrorExt;

use super::err::LoweringError;

/// Fixed fallback text for expression kinds the mapping rules do not
/// cover. Spelled as a C comment so the surrounding line stays
/// scannable in the generated output.
pub const EXPR_PLACEHOLDER: &str = "/* unsupported expr */";

/// Lower one expression node to a single line of C.
///
/// Unmapped expression kinds lower to `EXPR_PLACEHOLDER` rather than
/// erroring; the only failure is the call-callee precondition. The
/// input tree is immutable, so lowering the same node twice yields
/// identical text.
pub fn lower_expr(expr: &Expr) -> Result<String, Box<dyn Go2cErrorExt>> {
    match &expr.kind {
        ExprKind::Ident { name } => Ok(name.clone()),
        ExprKind::Literal { value, .. } => Ok(value.clone()),
        ExprKind::Binary { left, op, right } => {
            // Operands are emitted verbatim; grouping is whatever the
            // tree's nesting encodes.
            Ok(format!("{} {} {}", lower_expr(left)?, op, lower_expr(right)?))
        }
        ExprKind::Call { callee, args } => {
            let name = match &callee.kind {
                ExprKind::Ident { name } => name.clone(),
                other => {
                    return Err(Box::new(LoweringError::new(
                        format!("call target must be a plain identifier, found {}", other),
                        "go2c.lower.lower_expr".into(),
                        callee.location.clone(),
                        callee.span.clone(),
                    )));
                }
            };
            let mut lowered_args = Vec::with_capacity(args.len());
            for arg in args {
                lowered_args.push(lower_expr(arg)?);
            }
            Ok(format!("{}({})", name, lowered_args.join(", ")))
        }
        ExprKind::Unary { .. } | ExprKind::Selector { .. } | ExprKind::Index { .. } => {
            log::debug!("no lowering rule for {} expression, emitting placeholder", expr.kind);
            Ok(EXPR_PLACEHOLDER.to_string())
        }
    }
}
