//! Taxonomy and positive-signal matching.
//!
//! A keyword hits at most once per call no matter how often it occurs.
//! Hits come out in pillar order (E, S, G) and, within a pillar, in taxonomy
//! declaration order. Downstream ordering of drivers and incidents relies on
//! this.

use serde::{Deserialize, Serialize};

use esg_core::{Pillar, Severity};
use esg_rules::RuleSet;

use crate::terms::TermSet;

/// A matched negative keyword.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NegativeHit {
    pub pillar: Pillar,
    pub keyword: String,
    pub severity: Severity,
}

/// Everything the matcher found in one text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Matches {
    pub negative: Vec<NegativeHit>,
    pub positive: Vec<String>,
}

impl Matches {
    pub fn has_negative(&self) -> bool {
        !self.negative.is_empty()
    }

    pub fn has_positive(&self) -> bool {
        !self.positive.is_empty()
    }
}

/// Whether `needle` occurs literally in the normalized text, directly or
/// through an extracted term that itself appears verbatim.
fn occurs(needle: &str, normalized: &str, terms: &TermSet) -> bool {
    normalized.contains(needle) || terms.any_verbatim_contains(needle, normalized)
}

/// Match the rule set's taxonomy and positive signals against one text.
pub fn match_rules(normalized: &str, terms: &TermSet, rules: &RuleSet) -> Matches {
    let negative = rules
        .taxonomy()
        .iter()
        .filter(|(_, rule)| occurs(&rule.keyword, normalized, terms))
        .map(|(pillar, rule)| NegativeHit {
            pillar,
            keyword: rule.keyword.clone(),
            severity: rule.severity,
        })
        .collect();

    let positive = rules
        .positive_signals()
        .iter()
        .filter(|phrase| occurs(phrase, normalized, terms))
        .cloned()
        .collect();

    Matches { negative, positive }
}
