//! Engine error types.

use thiserror::Error;

/// Errors raised at the engine boundary.
///
/// Analysis of a present text never fails; these cover malformed requests
/// and configuration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// The request carried no `text` field, or it was `null`.
    #[error("text is required")]
    MissingText,

    /// `max_text_length` must be a positive number of characters.
    #[error("max text length must be positive, got {0}")]
    InvalidMaxTextLength(usize),
}
