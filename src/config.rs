//! Configuration loading for the report analyzer.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::error::AnalyzerError;

/// Input path used when neither the command line nor the config names one.
/// This is where the communication test harness drops its report.
pub const DEFAULT_LOG_PATH: &str = "tests/log.txt";

/// Optional settings loaded from a TOML file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct AnalyzerConfig {
    /// Report file to aggregate when none is given on the command line
    pub log_path: Option<PathBuf>,
    /// Warn and continue on malformed lines instead of halting
    pub skip_malformed: bool,
}

impl AnalyzerConfig {
    /// Load configuration from a TOML file.
    ///
    /// # Arguments
    /// * `config_path` - Path to the config.toml file
    ///
    /// # Returns
    /// * `Ok(AnalyzerConfig)` if the file was successfully loaded and parsed
    /// * `Err(AnalyzerError::Config)` with a descriptive message otherwise
    pub fn load(config_path: &Path) -> Result<Self, AnalyzerError> {
        let content = std::fs::read_to_string(config_path)
            .map_err(|e| AnalyzerError::Config(format!("failed to read {config_path:?}: {e}")))?;

        toml::from_str(&content).map_err(|e| AnalyzerError::Config(format!("failed to parse {config_path:?}: {e}")))
    }
}
