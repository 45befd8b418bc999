//! Error types.
//!
//! Numeric coercion and Gamma fallback never produce errors; only
//! structural problems (empty samples, unreadable datasets, bad config)
//! are reported here.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by the statistics functions in [`crate::stats`].
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatsError {
    #[error("empty sample")]
    EmptySample,
}

/// Errors raised while loading or grouping a dataset.
#[derive(Error, Debug)]
pub enum DatasetError {
    #[error("dataset not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("failed to read dataset: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse dataset: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("dataset contains no records")]
    Empty,
    #[error("record {index}: class field `{field}` is not an integer label")]
    InvalidClass { index: usize, field: String },
    #[error("statistics failed: {0}")]
    Stats(#[from] StatsError),
}

/// Errors raised while loading a [`crate::config::ReportConfig`].
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}
