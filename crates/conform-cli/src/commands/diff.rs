use conform_check::engine::ConformanceEngine;
use conform_core::config::ConformConfig;
use conform_core::types::ReferenceSequence;
use conform_output::OutputFormatter;

use super::check::emit;

/// Run `conform diff`: compare one variant against the happy path.
pub fn run(
    formatter: &dyn OutputFormatter,
    config: &ConformConfig,
    variant: String,
    reference: Option<String>,
) -> i32 {
    let reference = match reference {
        Some(raw) => ReferenceSequence::parse(&raw, &config.reference.delimiter),
        None => config.explicit_reference().unwrap_or_default(),
    };
    if reference.is_empty() {
        eprintln!(
            "conform diff: no reference. Pass --reference or set reference.activities with `conform config`."
        );
        return 2;
    }

    let result = ConformanceEngine::with_config(config).diff_variant(&variant, &reference);
    emit(&formatter.format_diff(&result));
    0
}
