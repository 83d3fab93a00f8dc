//! # Term Extraction
//!
//! The [`TermExtractor`] trait is the seam between the engine and whatever
//! tokenizer produces candidate terms. The engine only ever sees a
//! [`TermSet`]; it never depends on a tokenizer's object model.
//!
//! Matching is literal containment. A term only counts toward a match if it
//! occurs verbatim in the normalized text, so an extractor can never invent a
//! phrase by joining words across line breaks or repeated whitespace, and it
//! can never hide one that is physically present.
//!
//! The default [`StopwordTermExtractor`] emits alphabetic, non-stopword
//! tokens plus the 2- and 3-token spans formed by adjacent content words
//! within a clause, a cheap stand-in for noun-phrase chunking.

use std::collections::BTreeSet;
use std::fmt;

/// Order-irrelevant set of distinct lowercase terms and phrases.
///
/// Backed by a `BTreeSet` so iteration is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TermSet {
    terms: BTreeSet<String>,
}

impl TermSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a term. Returns `false` if it was already present.
    pub fn insert(&mut self, term: impl Into<String>) -> bool {
        self.terms.insert(term.into())
    }

    pub fn contains(&self, term: &str) -> bool {
        self.terms.contains(term)
    }

    /// Whether some term contains `needle` and itself occurs verbatim in
    /// `text`.
    pub fn any_verbatim_contains(&self, needle: &str, text: &str) -> bool {
        self.terms
            .iter()
            .any(|t| t.contains(needle) && text.contains(t.as_str()))
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.terms.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for TermSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            terms: iter.into_iter().map(Into::into).collect(),
        }
    }
}

/// Capability that turns normalized text into candidate terms.
///
/// Implementations must be deterministic: the same input yields the same
/// set. They receive already-lowercased text.
pub trait TermExtractor: Send + Sync {
    /// Identifier reported by the service health endpoint.
    fn name(&self) -> &str;

    /// Extract candidate terms from normalized text.
    fn extract(&self, normalized: &str) -> TermSet;
}

impl fmt::Debug for dyn TermExtractor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TermExtractor({})", self.name())
    }
}

// ---------------------------------------------------------------------------
// Default implementation
// ---------------------------------------------------------------------------

/// Longest multi-word span emitted by [`StopwordTermExtractor`].
const MAX_SPAN_TOKENS: usize = 3;

/// English function words excluded from single-token terms and used as
/// phrase boundaries.
const STOPWORDS: &[&str] = &[
    "a", "about", "above", "after", "again", "against", "all", "also", "am", "an", "and", "any",
    "are", "as", "at", "be", "because", "been", "before", "being", "below", "between", "both",
    "but", "by", "can", "could", "did", "do", "does", "doing", "down", "due", "during", "each",
    "either", "few", "for", "from", "further", "had", "has", "have", "having", "he", "her",
    "here", "hers", "him", "his", "how", "i", "if", "in", "into", "is", "it", "its", "itself",
    "just", "may", "me", "might", "more", "most", "must", "my", "neither", "no", "nor", "not",
    "now", "of", "off", "on", "once", "only", "or", "other", "our", "ours", "out", "over", "own",
    "same", "she", "should", "so", "some", "such", "than", "that", "the", "their", "theirs",
    "them", "then", "there", "these", "they", "this", "those", "through", "to", "too", "under",
    "until", "up", "very", "was", "we", "were", "what", "when", "where", "which", "while", "who",
    "whom", "why", "will", "with", "would", "you", "your", "yours",
];

/// Stopword-filtered tokens plus adjacent content-word spans.
#[derive(Debug, Clone)]
pub struct StopwordTermExtractor {
    stopwords: BTreeSet<&'static str>,
}

impl StopwordTermExtractor {
    /// Identifier reported by [`TermExtractor::name`].
    pub const NAME: &'static str = "stopword-en";

    pub fn new() -> Self {
        Self {
            stopwords: STOPWORDS.iter().copied().collect(),
        }
    }

    fn is_stopword(&self, token: &str) -> bool {
        self.stopwords.contains(token)
    }
}

impl Default for StopwordTermExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl TermExtractor for StopwordTermExtractor {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn extract(&self, normalized: &str) -> TermSet {
        let mut terms = TermSet::new();

        // Punctuation ends a clause; phrases never span clauses.
        let clauses = normalized.split(|c: char| !c.is_alphanumeric() && !c.is_whitespace());
        for clause in clauses {
            let mut run: Vec<&str> = Vec::new();
            for word in clause.split_whitespace() {
                let is_content = word.chars().all(char::is_alphabetic) && !self.is_stopword(word);
                if is_content {
                    terms.insert(word);
                    run.push(word);
                } else {
                    emit_spans(&run, &mut terms);
                    run.clear();
                }
            }
            emit_spans(&run, &mut terms);
        }

        terms
    }
}

/// Insert every 2..=MAX_SPAN_TOKENS window of `run` as a space-joined phrase.
fn emit_spans(run: &[&str], terms: &mut TermSet) {
    for width in 2..=MAX_SPAN_TOKENS {
        for window in run.windows(width) {
            terms.insert(window.join(" "));
        }
    }
}
