//! Configuration file loading for conform.
//!
//! Reads `.conform/conform.json` and provides typed access to all settings.
//! Falls back to sensible defaults when the config file is missing or incomplete.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::paging::PagingLimits;
use crate::row::{CaseIdPolicy, ReferenceMarker, RowSettings};
use crate::types::{ConformError, ReferenceSequence, DEFAULT_DELIMITER};

/// Name of the per-project directory holding the config file.
pub const CONFORM_DIR: &str = ".conform";
/// Config file name inside [`CONFORM_DIR`].
pub const CONFIG_FILE: &str = "conform.json";

/// Top-level conform configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConformConfig {
    pub version: String,
    #[serde(default)]
    pub reference: ReferenceConfig,
    #[serde(default)]
    pub case_id: CaseIdConfig,
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub paging: PagingConfig,
}

/// How the happy path is found.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceConfig {
    #[serde(default)]
    pub marker: ReferenceMarker,
    /// Explicit happy path. When set, row flags are ignored.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub activities: Option<Vec<String>>,
    #[serde(default = "default_delimiter")]
    pub delimiter: String,
}

/// Handling of case ids that are not integers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CaseIdConfig {
    #[serde(default)]
    pub policy: CaseIdPolicy,
}

/// Rendering limits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    #[serde(default = "default_max_groups")]
    pub max_groups: usize,
    #[serde(default = "default_max_breakdowns")]
    pub max_breakdowns: usize,
}

/// Windowed loading tuning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PagingConfig {
    #[serde(default = "default_window_size")]
    pub window_size: usize,
    #[serde(default = "default_max_rows")]
    pub max_rows: usize,
}

fn default_delimiter() -> String {
    DEFAULT_DELIMITER.to_string()
}
fn default_max_groups() -> usize {
    19
}
fn default_max_breakdowns() -> usize {
    10
}
fn default_window_size() -> usize {
    PagingLimits::default().window_size
}
fn default_max_rows() -> usize {
    PagingLimits::default().max_rows
}

impl Default for ReferenceConfig {
    fn default() -> Self {
        Self {
            marker: ReferenceMarker::default(),
            activities: None,
            delimiter: default_delimiter(),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            max_groups: default_max_groups(),
            max_breakdowns: default_max_breakdowns(),
        }
    }
}

impl Default for PagingConfig {
    fn default() -> Self {
        Self {
            window_size: default_window_size(),
            max_rows: default_max_rows(),
        }
    }
}

impl Default for ConformConfig {
    fn default() -> Self {
        Self {
            version: "0.1.0".to_string(),
            reference: ReferenceConfig::default(),
            case_id: CaseIdConfig::default(),
            display: DisplayConfig::default(),
            paging: PagingConfig::default(),
        }
    }
}

impl ConformConfig {
    /// Load configuration from `conform.json` inside the given conform directory.
    /// Returns defaults if the file doesn't exist or can't be parsed.
    pub fn load(conform_dir: &Path) -> Self {
        let config_path = conform_dir.join(CONFIG_FILE);
        let content = match std::fs::read_to_string(&config_path) {
            Ok(c) => c,
            Err(_) => return Self::default(),
        };
        match serde_json::from_str(&content) {
            Ok(cfg) => cfg,
            Err(e) => {
                tracing::warn!(
                    "failed to parse {}: {}, using defaults",
                    config_path.display(),
                    e
                );
                Self::default()
            }
        }
    }

    /// Write this config to `conform.json` inside the given conform directory.
    pub fn save(&self, conform_dir: &Path) -> Result<(), ConformError> {
        let config_path = conform_dir.join(CONFIG_FILE);
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| ConformError::Config(format!("failed to serialize config: {}", e)))?;
        std::fs::write(&config_path, json).map_err(|source| ConformError::Io {
            path: config_path.display().to_string(),
            source,
        })
    }

    /// Row conversion settings derived from this config.
    pub fn row_settings(&self) -> RowSettings {
        RowSettings {
            marker: self.reference.marker,
            case_id_policy: self.case_id.policy,
            delimiter: self.reference.delimiter.clone(),
        }
    }

    /// The explicitly configured happy path, if any.
    pub fn explicit_reference(&self) -> Option<ReferenceSequence> {
        self.reference
            .activities
            .as_ref()
            .map(|a| ReferenceSequence::new(a.iter()))
    }

    pub fn paging_limits(&self) -> PagingLimits {
        PagingLimits {
            window_size: self.paging.window_size,
            max_rows: self.paging.max_rows,
        }
    }
}
