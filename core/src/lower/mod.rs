pub mod context;
pub mod err;
pub mod expr;
pub mod item;
pub mod stmt;
pub mod types;

pub use context::LowerContext;
pub use err::LoweringError;
pub use expr::{EXPR_PLACEHOLDER, lower_expr};
pub use item::lower_item;
pub use stmt::{Lowered, lower_block, lower_stmt};
pub use types::map_type;

use crate::ast::{Expr, ExprKind, File, Item, ItemKind, Stmt, StmtKind, TypeRef};
use crate::error::Go2cErrorExt;

/// Borrowed view over any node in the tree, letting the walker hand
/// every visited node to one dispatch function regardless of its
/// syntax category.
#[derive(Clone, Copy)]
pub enum NodeRef<'a> {
    Item(&'a Item),
    Stmt(&'a Stmt),
    Expr(&'a Expr),
    Type(&'a TypeRef),
}

/// Translate one parsed file into C text.
///
/// Walks every node of the tree depth-first in pre-order, dispatches
/// each through the top-level lowerer (which yields text for items and
/// nothing for nested nodes), and concatenates the fragments in
/// visitation order.
pub fn translate(file: &File, ctx: &mut LowerContext) -> Result<String, Box<dyn Go2cErrorExt>> {
    let mut output = String::new();
    for item in &file.items {
        visit(NodeRef::Item(item), &mut |node| {
            let fragment = dispatch(node, ctx)?;
            output.push_str(&fragment);
            Ok(())
        })?;
    }
    Ok(output)
}

fn dispatch(node: NodeRef<'_>, ctx: &mut LowerContext) -> Result<String, Box<dyn Go2cErrorExt>> {
    match node {
        NodeRef::Item(item) => lower_item(item, ctx),
        NodeRef::Stmt(_) | NodeRef::Expr(_) | NodeRef::Type(_) => Ok(String::new()),
    }
}

/// Depth-first pre-order traversal: `f` sees `node` first, then every
/// descendant in source order.
pub fn visit<'a, F>(node: NodeRef<'a>, f: &mut F) -> Result<(), Box<dyn Go2cErrorExt>>
where
    F: FnMut(NodeRef<'a>) -> Result<(), Box<dyn Go2cErrorExt>>,
{
    f(node)?;
    match node {
        NodeRef::Item(item) => match &item.kind {
            ItemKind::Func(decl) => {
                for param in &decl.params {
                    visit(NodeRef::Type(&param.ty), f)?;
                }
                for result in &decl.results {
                    visit(NodeRef::Type(result), f)?;
                }
                for stmt in &decl.body {
                    visit(NodeRef::Stmt(stmt), f)?;
                }
                Ok(())
            }
            ItemKind::Package { .. } | ItemKind::Import { .. } => Ok(()),
        },
        NodeRef::Stmt(stmt) => match &stmt.kind {
            StmtKind::Var { ty, values, .. } => {
                if let Some(ty) = ty {
                    visit(NodeRef::Type(ty), f)?;
                }
                for value in values {
                    visit(NodeRef::Expr(value), f)?;
                }
                Ok(())
            }
            StmtKind::Return { results } => {
                for result in results {
                    visit(NodeRef::Expr(result), f)?;
                }
                Ok(())
            }
            StmtKind::Expr { expr } => visit(NodeRef::Expr(expr), f),
            StmtKind::If {
                cond,
                body,
                else_body,
            } => {
                visit(NodeRef::Expr(cond), f)?;
                for stmt in body {
                    visit(NodeRef::Stmt(stmt), f)?;
                }
                for stmt in else_body {
                    visit(NodeRef::Stmt(stmt), f)?;
                }
                Ok(())
            }
            StmtKind::Assign { target, value } => {
                visit(NodeRef::Expr(target), f)?;
                visit(NodeRef::Expr(value), f)
            }
            StmtKind::For { cond, body } => {
                if let Some(cond) = cond {
                    visit(NodeRef::Expr(cond), f)?;
                }
                for stmt in body {
                    visit(NodeRef::Stmt(stmt), f)?;
                }
                Ok(())
            }
        },
        NodeRef::Expr(expr) => match &expr.kind {
            ExprKind::Ident { .. } | ExprKind::Literal { .. } => Ok(()),
            ExprKind::Unary { expr, .. } => visit(NodeRef::Expr(expr), f),
            ExprKind::Binary { left, right, .. } => {
                visit(NodeRef::Expr(left), f)?;
                visit(NodeRef::Expr(right), f)
            }
            ExprKind::Call { callee, args } => {
                visit(NodeRef::Expr(callee), f)?;
                for arg in args {
                    visit(NodeRef::Expr(arg), f)?;
                }
                Ok(())
            }
            ExprKind::Selector { object, .. } => visit(NodeRef::Expr(object), f),
            ExprKind::Index { object, index } => {
                visit(NodeRef::Expr(object), f)?;
                visit(NodeRef::Expr(index), f)
            }
        },
        NodeRef::Type(ty) => match ty {
            TypeRef::Named { .. } => Ok(()),
            TypeRef::Pointer { inner } => visit(NodeRef::Type(inner), f),
        },
    }
}
