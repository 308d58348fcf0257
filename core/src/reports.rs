// Core module for collecting non-fatal translation diagnostics.
// Fatal errors travel as `Go2cErrorExt` values and abort the run;
// everything the transpiler merely wants to announce (an unmapped
// type name, a skipped statement) lands here instead.

use console::Style;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt;

use crate::location::Location;

/// Severity levels for reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    Fatal,
    Error,
    Warning,
    Info,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Severity::Fatal => "FATAL",
            Severity::Error => "ERROR",
            Severity::Warning => "WARNING",
            Severity::Info => "INFO",
        };
        write!(f, "{}", s)
    }
}

/// Optional stable error code for programmatic handling
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ErrorCode(pub u32);

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl ErrorCode {
    pub fn new(code: u32) -> Self {
        ErrorCode(code)
    }
    pub fn as_str(&self) -> String {
        format!("E_{}", self.0)
    }
}

pub const E_NONE: ErrorCode = ErrorCode(0);
pub const E_IO: ErrorCode = ErrorCode(1);
pub const E_SYNTAX: ErrorCode = ErrorCode(2);
pub const E_UNSUPPORTED: ErrorCode = ErrorCode(3);
pub const E_PRECONDITION: ErrorCode = ErrorCode(4);
pub const E_INTERNAL: ErrorCode = ErrorCode(999);

/// One diagnostic raised during a translation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    pub message: String,
    pub severity: Severity,
    pub location: Option<Location>,
    pub code: Option<ErrorCode>,
}

impl Report {
    pub fn new(
        message: &str,
        severity: Severity,
        location: Option<Location>,
        code: Option<ErrorCode>,
    ) -> Self {
        Report {
            message: message.to_string(),
            severity,
            location,
            code,
        }
    }

    pub fn info(message: &str, location: Option<Location>, code: Option<ErrorCode>) -> Self {
        Report::new(message, Severity::Info, location, code)
    }
    pub fn warning(message: &str, location: Option<Location>, code: Option<ErrorCode>) -> Self {
        Report::new(message, Severity::Warning, location, code)
    }
    pub fn error(message: &str, location: Option<Location>, code: Option<ErrorCode>) -> Self {
        Report::new(message, Severity::Error, location, code)
    }

    // convenience conversion to JSON
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Pretty-print with a source snippet and caret under the column
    /// (uses console crate styling). `source` should be the contents of
    /// the file the location refers to.
    pub fn pretty_with_source(&self, source: &str) {
        let header = Style::new().bold();
        let sev = match self.severity {
            Severity::Fatal => Style::new().on_red().white().bold(),
            Severity::Error => Style::new().red().bold(),
            Severity::Warning => Style::new().yellow().bold(),
            Severity::Info => Style::new().blue().bold(),
        };

        println!(
            "{} {}",
            sev.apply_to(format!("[{}]", self.severity)),
            header.apply_to(&self.message)
        );

        if let Some(loc) = &self.location {
            println!(" --> {}:{}:{}", loc.file, loc.line, loc.column);

            if let Some(line_str) = source.lines().nth(loc.line.saturating_sub(1)) {
                println!(" {:4} | {}", loc.line, line_str);
                let col = loc.column.saturating_sub(1);
                let mut caret_line = String::new();
                caret_line.push_str("      | ");
                caret_line.push_str(&" ".repeat(col));
                caret_line.push('^');
                println!("{}", Style::new().green().apply_to(caret_line));
            }
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let loc = if let Some(l) = &self.location {
            format!(" at {}:{}:{}", l.file, l.line, l.column)
        } else {
            "".to_string()
        };
        if let Some(code) = &self.code {
            write!(f, "[{}]{} ({}): {}", self.severity, loc, code, self.message)
        } else {
            write!(f, "[{}]{}: {}", self.severity, loc, self.message)
        }
    }
}

impl Error for Report {}

/// Collector that aggregates reports, with counts and JSON export.
/// Every push is kept: repeated warnings (say, two uses of the same
/// unmapped type) stay distinct entries.
#[derive(Debug, Clone, Default)]
pub struct ReportCollector {
    pub reports: Vec<Report>,
}

impl ReportCollector {
    pub fn new() -> Self {
        Self {
            reports: Vec::new(),
        }
    }

    pub fn push(&mut self, r: Report) {
        self.reports.push(r);
    }

    pub fn extend(&mut self, others: impl IntoIterator<Item = Report>) {
        for r in others {
            self.push(r);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.reports.is_empty()
    }

    pub fn len(&self) -> usize {
        self.reports.len()
    }

    pub fn has_errors(&self) -> bool {
        self.reports.iter().any(|r| r.severity == Severity::Error)
    }

    pub fn has_warnings(&self) -> bool {
        self.reports.iter().any(|r| r.severity == Severity::Warning)
    }

    pub fn counts(&self) -> (usize, usize, usize, usize) {
        let mut f = 0;
        let mut e = 0;
        let mut w = 0;
        let mut i = 0;
        for r in &self.reports {
            match r.severity {
                Severity::Fatal => f += 1,
                Severity::Error => e += 1,
                Severity::Warning => w += 1,
                Severity::Info => i += 1,
            }
        }
        (f, e, w, i)
    }

    /// Get an appropriate exit code based on the reports collected
    /// 0 = no issues or warnings only, 1 = errors, 2 = fatals
    pub fn exit_code(&self) -> i32 {
        let (f, e, _, _) = self.counts();
        if f > 0 {
            2
        } else if e > 0 {
            1
        } else {
            0
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.reports)
    }
}
