//! Report configuration, read from TOML.
//!
//! ```toml
//! dataset = "data/Wine-Data.json"
//! class_field = "Alcohol"
//! precision = 3
//! ```
//!
//! Every key is optional; missing keys take the [`Default`] value.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::record::ALCOHOL;

pub const DEFAULT_DATASET: &str = "Wine-Data.json";
pub const DEFAULT_PRECISION: usize = 3;

/// Where to read the dataset from and how to render the tables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReportConfig {
    /// Path of the JSON dataset.
    pub dataset: PathBuf,
    /// Field holding the class label.
    pub class_field: String,
    /// Decimal places in rendered tables.
    pub precision: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            dataset: PathBuf::from(DEFAULT_DATASET),
            class_field: ALCOHOL.to_string(),
            precision: DEFAULT_PRECISION,
        }
    }
}

impl ReportConfig {
    /// Parses a config from TOML text.
    ///
    /// # Errors
    /// [`ConfigError::Parse`] for malformed TOML, unknown keys or wrongly
    /// typed values.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Reads and parses the config file at `path`.
    ///
    /// # Errors
    /// [`ConfigError::Io`] if the file cannot be read, otherwise as
    /// [`ReportConfig::from_toml_str`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }
}
