//! # Error Hierarchy
//!
//! Validation errors for the domain primitives in this crate. Rule set files
//! are deserialized through these constructors, so a bad severity or pillar
//! code is reported by the loader together with the file it came from.

use thiserror::Error;

/// Validation errors for domain primitive construction.
///
/// Each variant carries the rejected input so that misconfigured rule sets
/// can be diagnosed without guesswork.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Keyword severity outside the 1–5 scale.
    #[error("invalid severity {0} (expected an integer from 1 to 5)")]
    InvalidSeverity(i64),

    /// Pillar code is not one of `E`, `S`, `G`.
    #[error("unknown pillar code: \"{0}\" (expected E, S or G)")]
    UnknownPillar(String),
}
