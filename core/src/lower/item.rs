use crate::ast::{FuncDecl, Item, ItemKind, TypeRef};
use crate::error::Go2cErrorExt;

use super::context::LowerContext;
use super::err::LoweringError;
use super::stmt::lower_block;
use super::types::map_type;

/// Lower one top-level node. Item kinds with no C counterpart at the
/// top level contribute no output.
pub fn lower_item(item: &Item, ctx: &mut LowerContext) -> Result<String, Box<dyn Go2cErrorExt>> {
    match &item.kind {
        // The path literal passes through exactly as written, quotes
        // included.
        ItemKind::Import { path } => Ok(format!("#include {}\n", path)),
        ItemKind::Func(decl) => lower_func(decl, item, ctx),
        ItemKind::Package { .. } => Ok(String::new()),
    }
}

fn lower_func(
    decl: &FuncDecl,
    item: &Item,
    ctx: &mut LowerContext,
) -> Result<String, Box<dyn Go2cErrorExt>> {
    let result = match decl.results.first() {
        Some(result) => result,
        None => {
            return Err(Box::new(LoweringError::new(
                format!("function {} declares no return type", decl.name),
                "go2c.lower.lower_func".into(),
                item.location.clone(),
                item.span.clone(),
            )));
        }
    };
    if decl.results.len() > 1 {
        log::debug!(
            "function {} declares {} result types, lowering the first",
            decl.name,
            decl.results.len()
        );
    }
    let return_type = map_type(&result.spelling(), ctx);

    let mut params = Vec::with_capacity(decl.params.len());
    for param in &decl.params {
        let type_name = match &param.ty {
            TypeRef::Named { name } => name,
            other => {
                return Err(Box::new(LoweringError::new(
                    format!(
                        "parameter {} of function {} must have an identifier type, found {}",
                        param.name,
                        decl.name,
                        other.spelling()
                    ),
                    "go2c.lower.lower_func".into(),
                    item.location.clone(),
                    item.span.clone(),
                )));
            }
        };
        params.push(format!("{} {}", map_type(type_name, ctx), param.name));
    }

    let mut out = format!(
        "\n{} {}({})\n{{\n",
        return_type,
        decl.name,
        params.join(", ")
    );
    out.push_str(&lower_block(&decl.body, ctx)?);
    out.push_str("}\n");
    Ok(out)
}
