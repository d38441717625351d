use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "conform",
    version,
    about = "Happy-path conformance checking for process execution logs"
)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output as structured JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Output as compact LLM format
    #[arg(long, global = true, conflicts_with = "json")]
    pub llm: bool,

    /// Enable debug logging on stderr (RUST_LOG overrides)
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Directory holding conform.json (default: ./.conform)
    #[arg(long, global = true, env = "CONFORM_DIR")]
    pub conform_dir: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub(crate) enum Commands {
    /// Create .conform/conform.json with default settings
    Init,

    /// Check every case in a table against the happy path
    Check {
        /// Table file (JSON array or JSON lines)
        file: PathBuf,
        /// Happy path, e.g. "Create PO -> Pay Invoice" (overrides flagged rows)
        #[arg(long)]
        reference: Option<String>,
        /// Keep only the N most frequent violations
        #[arg(long)]
        top: Option<usize>,
        /// Maximum specification lines shown per violation
        #[arg(long)]
        breakdown: Option<usize>,
        /// Rows loaded per fetch
        #[arg(long)]
        window: Option<usize>,
        /// Stop loading after this many rows
        #[arg(long)]
        max_rows: Option<usize>,
        /// Exit non-zero when any violation is found
        #[arg(long)]
        strict: bool,
    },

    /// Diff a single variant against the happy path
    Diff {
        /// Variant, e.g. "Create PO -> Record Invoice Receipt"
        variant: String,
        /// Happy path (default: reference.activities from config)
        #[arg(long)]
        reference: Option<String>,
    },

    /// Get or set configuration values
    Config {
        /// Dot-separated key, e.g. display.max_groups
        key: Option<String>,
        /// New value
        value: Option<String>,
    },

    /// Generate shell completion scripts
    Completion {
        /// Shell name: bash, zsh, fish, elvish, powershell
        shell: String,
    },
}

#[cfg(test)]
#[path = "cli_args_tests.rs"]
mod tests;
