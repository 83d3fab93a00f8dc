//! Text normalization.
//!
//! Lowercase, then keep at most `max_chars` Unicode scalar values.
//! Nothing else changes: punctuation and whitespace survive, because
//! matching is substring containment over this exact string.
//!
//! Truncation is silent. Content past the cutoff cannot produce matches;
//! callers that care can compare [`Normalized::truncated`].

/// Output of [`normalize`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Normalized {
    pub text: String,
    /// Whether characters were dropped to honor the length bound.
    pub truncated: bool,
}

/// Lowercase `raw` and bound it to `max_chars` characters.
pub fn normalize(raw: &str, max_chars: usize) -> Normalized {
    let lower = raw.to_lowercase();
    match lower.char_indices().nth(max_chars) {
        Some((cut, _)) => Normalized {
            text: lower[..cut].to_string(),
            truncated: true,
        },
        None => Normalized {
            text: lower,
            truncated: false,
        },
    }
}
