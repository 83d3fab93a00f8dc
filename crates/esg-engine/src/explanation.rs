//! Analyst summary composition.
//!
//! Fixed sentences selected by two booleans and joined with a single space,
//! positive fragment first.

use crate::matcher::Matches;

pub const POSITIVE_FRAGMENT: &str =
    "Positive ESG governance and reporting infrastructure signals detected.";
pub const NEGATIVE_FRAGMENT: &str = "Potential ESG risk events detected requiring analyst review.";
pub const FALLBACK_SUMMARY: &str = "No material ESG risk or improvement signals detected.";

pub fn compose_summary(matches: &Matches) -> String {
    let mut fragments = Vec::with_capacity(2);
    if matches.has_positive() {
        fragments.push(POSITIVE_FRAGMENT);
    }
    if matches.has_negative() {
        fragments.push(NEGATIVE_FRAGMENT);
    }
    if fragments.is_empty() {
        return FALLBACK_SUMMARY.to_string();
    }
    fragments.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matcher::NegativeHit;
    use esg_core::{Pillar, Severity};

    fn negative() -> NegativeHit {
        NegativeHit {
            pillar: Pillar::Governance,
            keyword: "fraud".to_string(),
            severity: Severity::MAX,
        }
    }

    #[test]
    fn fallback_when_nothing_matched() {
        assert_eq!(compose_summary(&Matches::default()), FALLBACK_SUMMARY);
    }

    #[test]
    fn positive_only() {
        let m = Matches {
            negative: vec![],
            positive: vec!["committee formed".to_string()],
        };
        assert_eq!(compose_summary(&m), POSITIVE_FRAGMENT);
    }

    #[test]
    fn negative_only() {
        let m = Matches {
            negative: vec![negative()],
            positive: vec![],
        };
        assert_eq!(compose_summary(&m), NEGATIVE_FRAGMENT);
    }

    #[test]
    fn both_in_fixed_order() {
        let m = Matches {
            negative: vec![negative()],
            positive: vec!["committee formed".to_string()],
        };
        assert_eq!(
            compose_summary(&m),
            format!("{POSITIVE_FRAGMENT} {NEGATIVE_FRAGMENT}")
        );
    }
}
