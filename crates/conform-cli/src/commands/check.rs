use std::path::PathBuf;

use conform_check::engine::ConformanceEngine;
use conform_core::config::ConformConfig;
use conform_core::paging::WindowedTable;
use conform_core::table::open_rows;
use conform_core::types::ReferenceSequence;
use conform_output::OutputFormatter;

/// Flags of `conform check` after clap parsing.
#[derive(Debug)]
pub struct CheckArgs {
    pub file: PathBuf,
    pub reference: Option<String>,
    pub top: Option<usize>,
    pub window: Option<usize>,
    pub max_rows: Option<usize>,
    pub strict: bool,
}

/// Run `conform check`: load the table, rank deviations, print the report.
///
/// Exit codes: 0 when the check ran, 1 in strict mode when violations were
/// found, 2 on load errors.
pub fn run(formatter: &dyn OutputFormatter, config: &ConformConfig, args: CheckArgs) -> i32 {
    let mut limits = config.paging_limits();
    if let Some(window) = args.window {
        limits.window_size = window;
    }
    if let Some(max_rows) = args.max_rows {
        limits.max_rows = max_rows;
    }

    let source = match open_rows(&args.file) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("conform check: {}", e);
            return 2;
        }
    };
    let loaded = match WindowedTable::new(source, limits).load_all() {
        Ok(l) => l,
        Err(e) => {
            eprintln!("conform check: {}: {}", args.file.display(), e);
            return 2;
        }
    };
    tracing::debug!(
        rows = loaded.rows.len(),
        windows = loaded.windows_loaded,
        file = %args.file.display(),
        "table loaded"
    );

    let mut engine = ConformanceEngine::with_config(config).with_top_n(args.top);
    if let Some(raw) = args.reference.as_deref() {
        engine = engine.with_reference(ReferenceSequence::parse(raw, &config.reference.delimiter));
    }

    let report = engine.run(&loaded.rows);
    emit(&formatter.format_report(&report));

    if args.strict && report.has_violations() {
        1
    } else {
        0
    }
}

pub(crate) fn emit(output: &str) {
    if output.is_empty() {
        return;
    }
    if output.ends_with('\n') {
        print!("{}", output);
    } else {
        println!("{}", output);
    }
}
