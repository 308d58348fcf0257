use std::collections::HashMap;

use lazy_static::lazy_static;

use super::context::LowerContext;
use crate::reports::{E_UNSUPPORTED, Report};

lazy_static! {
    /// Source primitive name -> C spelling. Built once at first use and
    /// never mutated; every translation run reads the same table.
    static ref TYPE_TABLE: HashMap<&'static str, &'static str> = {
        let mut table = HashMap::new();
        table.insert("int", "int");
        table.insert("string", "char*");
        table.insert("bool", "int");
        table.insert("uint8", "uint8_t");
        table.insert("uint16", "uint16_t");
        table.insert("uint32", "uint32_t");
        table.insert("uint64", "uint64_t");
        table
    };
}

/// Translate a source type name into its C spelling.
///
/// Names outside the table pass through unchanged; each such call
/// records exactly one warning on the context and mirrors it on the
/// log facade. Translation always continues.
pub fn map_type(name: &str, ctx: &mut LowerContext) -> String {
    match TYPE_TABLE.get(name) {
        Some(spelling) => (*spelling).to_string(),
        None => {
            log::warn!("could not convert type {}", name);
            ctx.reports.push(Report::warning(
                &format!("could not convert type {}", name),
                None,
                Some(E_UNSUPPORTED),
            ));
            name.to_string()
        }
    }
}
