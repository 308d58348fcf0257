//! file: core/src/lower/context.rs
//! description: shared lowering context for one translation run.
//!
//! `LowerContext` owns the indentation depth and the diagnostics
//! collector for a single `translate` call. Depth lives here, not in a
//! process-wide counter, so independent translations never observe
//! each other's nesting state.

use crate::reports::ReportCollector;

pub struct LowerContext {
    depth: usize,
    pub reports: ReportCollector,
}

impl LowerContext {
    /// Create a fresh context: depth zero, no diagnostics.
    pub fn new() -> Self {
        LowerContext {
            depth: 0,
            reports: ReportCollector::new(),
        }
    }

    pub fn push_indent(&mut self) {
        self.depth = self.depth.saturating_add(1);
    }

    pub fn pop_indent(&mut self) {
        if self.depth > 0 {
            self.depth -= 1;
        }
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    /// The indentation prefix for the current depth: one tab per level.
    pub fn tabs(&self) -> String {
        "\t".repeat(self.depth)
    }

    pub fn into_reports(self) -> ReportCollector {
        self.reports
    }
}

impl Default for LowerContext {
    fn default() -> Self {
        Self::new()
    }
}
