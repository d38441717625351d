//! conform CLI: happy-path conformance checking for process execution logs.
//!
//! Provides the `conform` command with subcommands for initialization,
//! checking tables, diffing single variants, and configuration. See
//! `conform --help` for usage.

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

mod cli_args;
mod commands;

use cli_args::{Cli, Commands};
use conform_core::config::{ConformConfig, CONFORM_DIR};

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let conform_dir = resolve_conform_dir(cli.conform_dir.clone());
    let config = ConformConfig::load(&conform_dir);

    let breakdown_override = match &cli.command {
        Commands::Check { breakdown, .. } => *breakdown,
        _ => None,
    };

    let formatter: Box<dyn conform_output::OutputFormatter> = if cli.json {
        Box::new(conform_output::json::JsonFormatter)
    } else if cli.llm {
        Box::new(conform_output::llm::LlmFormatter::new().with_max_breakdowns(
            breakdown_override.unwrap_or(config.display.max_breakdowns),
        ))
    } else {
        Box::new(conform_output::human::HumanFormatter::new().with_limits(
            config.display.max_groups,
            breakdown_override.unwrap_or(config.display.max_breakdowns),
        ))
    };

    let exit_code = match cli.command {
        Commands::Init => commands::init::run(cli.verbose, &conform_dir),
        Commands::Check {
            file,
            reference,
            top,
            breakdown: _,
            window,
            max_rows,
            strict,
        } => commands::check::run(
            &*formatter,
            &config,
            commands::check::CheckArgs {
                file,
                reference,
                top,
                window,
                max_rows,
                strict,
            },
        ),
        Commands::Diff { variant, reference } => {
            commands::diff::run(&*formatter, &config, variant, reference)
        }
        Commands::Config { key, value } => commands::config::run(&conform_dir, key, value),
        Commands::Completion { shell } => commands::completion::run(&shell),
    };

    std::process::exit(exit_code);
}

/// Log to stderr so stdout stays machine-readable. `RUST_LOG` wins over `--verbose`.
fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .without_time(),
        )
        .try_init();
}

fn resolve_conform_dir(explicit: Option<PathBuf>) -> PathBuf {
    explicit.unwrap_or_else(|| match std::env::current_dir() {
        Ok(cwd) => cwd.join(CONFORM_DIR),
        Err(_) => PathBuf::from(CONFORM_DIR),
    })
}
