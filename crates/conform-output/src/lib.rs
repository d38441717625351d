//! Output formatters for conform command results.
//!
//! Provides three output modes:
//! - **Human** (default): One line per violation with its vendor breakdown
//! - **JSON** (`--json`): Machine-readable structured output
//! - **LLM** (`--llm`): Compact key=value format for AI agents

pub mod human;
pub(crate) mod human_helpers;
pub mod json;
pub mod llm;

use conform_check::types::{ConformanceReport, DiffResult};

pub trait OutputFormatter {
    fn format_report(&self, report: &ConformanceReport) -> String;
    fn format_diff(&self, result: &DiffResult) -> String;
}

/// Whole-number percentage of `part` in `total`, truncated toward zero.
pub fn percent_of(part: u32, total: u32) -> u32 {
    if total == 0 {
        return 0;
    }
    ((part as u64 * 100) / total as u64) as u32
}
