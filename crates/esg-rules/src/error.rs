//! Rule set error types.
//!
//! Every loader error carries the offending file path. Validation failures
//! collect all violations instead of stopping at the first one, so an
//! operator can fix a rule set file in a single pass.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading or validating a rule set.
#[derive(Debug, Error)]
pub enum RulesError {
    /// YAML parsing failed.
    #[error("failed to parse YAML at {path}: {source}")]
    YamlParse {
        path: PathBuf,
        source: serde_yaml::Error,
    },

    /// JSON parsing failed.
    #[error("failed to parse JSON at {path}: {source}")]
    JsonParse {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// The rule set file does not exist.
    #[error("rule set file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// File extension is neither YAML nor JSON.
    #[error("unsupported rule set format at {path} (expected .yaml, .yml or .json)")]
    UnsupportedFormat { path: PathBuf },

    /// The rule set parsed but violates one or more constraints.
    #[error("invalid rule set: {}", violations.join("; "))]
    Invalid { violations: Vec<String> },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience alias for rule set operations.
pub type RulesResult<T> = Result<T, RulesError>;
