//! # Negative Event Taxonomy
//!
//! Per-pillar keyword lists with their 1–5 severities. Keyword declaration
//! order is significant: it fixes the order of drivers and incidents in the
//! analysis output, so the lists are kept as `Vec`s rather than maps.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use esg_core::{Pillar, Severity};

/// A single negative keyword and its severity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct KeywordRule {
    pub keyword: String,
    pub severity: Severity,
}

impl KeywordRule {
    pub fn new(keyword: impl Into<String>, severity: Severity) -> Self {
        Self {
            keyword: keyword.into(),
            severity,
        }
    }
}

/// Pillar → ordered keyword rules.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Taxonomy {
    #[serde(rename = "E", default)]
    environmental: Vec<KeywordRule>,
    #[serde(rename = "S", default)]
    social: Vec<KeywordRule>,
    #[serde(rename = "G", default)]
    governance: Vec<KeywordRule>,
}

impl Taxonomy {
    pub fn new(
        environmental: Vec<KeywordRule>,
        social: Vec<KeywordRule>,
        governance: Vec<KeywordRule>,
    ) -> Self {
        Self {
            environmental,
            social,
            governance,
        }
    }

    /// Keyword rules for one pillar, in declaration order.
    pub fn keywords(&self, pillar: Pillar) -> &[KeywordRule] {
        match pillar {
            Pillar::Environmental => &self.environmental,
            Pillar::Social => &self.social,
            Pillar::Governance => &self.governance,
        }
    }

    /// Iterate `(pillar, rule)` pairs in pillar order, then declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (Pillar, &KeywordRule)> + '_ {
        Pillar::all()
            .iter()
            .flat_map(move |&p| self.keywords(p).iter().map(move |r| (p, r)))
    }

    /// Total number of keywords across all pillars.
    pub fn len(&self) -> usize {
        self.environmental.len() + self.social.len() + self.governance.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub(crate) fn violations(&self) -> Vec<String> {
        let mut out = Vec::new();
        for &pillar in Pillar::all() {
            let mut seen = HashSet::new();
            for rule in self.keywords(pillar) {
                if let Some(problem) = phrase_problem(&rule.keyword) {
                    out.push(format!("taxonomy.{pillar}: keyword {:?} {problem}", rule.keyword));
                }
                if !seen.insert(rule.keyword.as_str()) {
                    out.push(format!(
                        "taxonomy.{pillar}: duplicate keyword {:?}",
                        rule.keyword
                    ));
                }
            }
        }
        out
    }
}

/// Why a keyword or phrase can never match normalized text, if it can't.
///
/// Normalized text is lowercase, so a phrase carrying uppercase characters
/// would be dead configuration.
pub(crate) fn phrase_problem(phrase: &str) -> Option<&'static str> {
    if phrase.trim().is_empty() {
        Some("is empty")
    } else if phrase.chars().any(char::is_uppercase) {
        Some("contains uppercase characters")
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sev(v: i64) -> Severity {
        Severity::new(v).unwrap()
    }

    #[test]
    fn iter_follows_pillar_then_declaration_order() {
        let t = Taxonomy::new(
            vec![KeywordRule::new("spill", sev(4)), KeywordRule::new("toxic", sev(5))],
            vec![KeywordRule::new("injury", sev(3))],
            vec![KeywordRule::new("fraud", sev(5))],
        );
        let order: Vec<_> = t.iter().map(|(p, r)| (p, r.keyword.as_str())).collect();
        assert_eq!(
            order,
            vec![
                (Pillar::Environmental, "spill"),
                (Pillar::Environmental, "toxic"),
                (Pillar::Social, "injury"),
                (Pillar::Governance, "fraud"),
            ]
        );
        assert_eq!(t.len(), 4);
    }

    #[test]
    fn missing_pillars_deserialize_empty() {
        let t: Taxonomy =
            serde_yaml::from_str("G:\n  - keyword: fraud\n    severity: 5\n").unwrap();
        assert!(t.keywords(Pillar::Environmental).is_empty());
        assert_eq!(t.keywords(Pillar::Governance)[0].keyword, "fraud");
    }

    #[test]
    fn out_of_range_severity_fails_to_parse() {
        let res: Result<Taxonomy, _> =
            serde_yaml::from_str("E:\n  - keyword: toxic\n    severity: 9\n");
        assert!(res.is_err());
    }

    #[test]
    fn duplicates_and_uppercase_are_violations() {
        let t = Taxonomy::new(
            vec![KeywordRule::new("spill", sev(4)), KeywordRule::new("spill", sev(2))],
            vec![KeywordRule::new("Injury", sev(3))],
            vec![KeywordRule::new("  ", sev(1))],
        );
        let v = t.violations();
        assert_eq!(v.len(), 3, "{v:?}");
        assert!(v.iter().any(|m| m.contains("duplicate")));
        assert!(v.iter().any(|m| m.contains("uppercase")));
        assert!(v.iter().any(|m| m.contains("empty")));
    }

    #[test]
    fn same_keyword_in_two_pillars_is_allowed() {
        let t = Taxonomy::new(
            vec![KeywordRule::new("audit", sev(2))],
            vec![],
            vec![KeywordRule::new("audit", sev(3))],
        );
        assert!(t.violations().is_empty());
    }
}
