pub mod ast;
pub mod error;
pub mod location;
pub mod lower;
pub mod reports;
pub mod source;

pub use ast::RulesParser;
pub use error::{Go2cErrorExt, Level};
pub use location::{Location, Span};
pub use lower::{LowerContext, translate};
pub use reports::{Report, ReportCollector, Severity};
pub use source::Source;

pub fn generate_error_report<E: Go2cErrorExt + ?Sized>(error: &E) -> String {
    let level = error.level();
    let location = match error.location() {
        Some(loc) => loc.to_string(),
        None => "unknown location".to_string(),
    };
    let message = error.message();

    format!("GO2C | {} | {} | {}", level, location, message)
}

/// Parse and lower one source file.
///
/// Returns the generated C text together with the non-fatal
/// diagnostics collected along the way; a syntax error or a lowering
/// precondition violation aborts the run instead.
pub fn transpile_source(
    source: &Source,
) -> Result<(String, ReportCollector), Box<dyn Go2cErrorExt>> {
    let file = ast::generate_ast_from_source(source)?;
    let mut ctx = LowerContext::new();
    let code = translate(&file, &mut ctx)?;
    Ok((code, ctx.into_reports()))
}
