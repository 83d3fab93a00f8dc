//! # Rule Sets
//!
//! A [`RuleSet`] bundles everything the scoring engine reads: the negative
//! taxonomy, positive signal phrases, the two context term lists, and the
//! scoring parameters. It is built once at startup, validated in full, and
//! shared read-only for the lifetime of the process.
//!
//! The built-in tables ([`RuleSet::builtin`]) carry the reference
//! calibration. A rule set file may override any section; omitted sections
//! fall back to the built-in values.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use esg_core::Severity;

use crate::error::{RulesError, RulesResult};
use crate::params::ScoringParams;
use crate::taxonomy::{phrase_problem, KeywordRule, Taxonomy};

/// Name reported for the built-in rule set.
pub const BUILTIN_RULESET_NAME: &str = "builtin";

/// Validated, immutable scoring configuration.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RuleSet {
    name: String,
    taxonomy: Taxonomy,
    positive_signals: Vec<String>,
    resolution_terms: Vec<String>,
    ongoing_risk_terms: Vec<String>,
    scoring: ScoringParams,
}

impl RuleSet {
    /// Build and validate a rule set.
    ///
    /// # Errors
    ///
    /// Returns [`RulesError::Invalid`] listing every violated constraint.
    pub fn new(
        name: impl Into<String>,
        taxonomy: Taxonomy,
        positive_signals: Vec<String>,
        resolution_terms: Vec<String>,
        ongoing_risk_terms: Vec<String>,
        scoring: ScoringParams,
    ) -> RulesResult<Self> {
        let rules = Self {
            name: name.into(),
            taxonomy,
            positive_signals,
            resolution_terms,
            ongoing_risk_terms,
            scoring,
        };
        rules.validate()?;
        Ok(rules)
    }

    /// The reference rule set compiled into the binary.
    pub fn builtin() -> Self {
        Self {
            name: BUILTIN_RULESET_NAME.to_string(),
            taxonomy: builtin_taxonomy(),
            positive_signals: to_strings(BUILTIN_POSITIVE_SIGNALS),
            resolution_terms: to_strings(BUILTIN_RESOLUTION_TERMS),
            ongoing_risk_terms: to_strings(BUILTIN_ONGOING_RISK_TERMS),
            scoring: ScoringParams::default(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn taxonomy(&self) -> &Taxonomy {
        &self.taxonomy
    }

    pub fn positive_signals(&self) -> &[String] {
        &self.positive_signals
    }

    pub fn resolution_terms(&self) -> &[String] {
        &self.resolution_terms
    }

    pub fn ongoing_risk_terms(&self) -> &[String] {
        &self.ongoing_risk_terms
    }

    pub fn scoring(&self) -> &ScoringParams {
        &self.scoring
    }

    fn validate(&self) -> RulesResult<()> {
        let mut violations = Vec::new();
        if self.name.trim().is_empty() {
            violations.push("name must be non-empty".to_string());
        }
        violations.extend(self.taxonomy.violations());
        for (section, phrases) in [
            ("positive_signals", &self.positive_signals),
            ("resolution_terms", &self.resolution_terms),
            ("ongoing_risk_terms", &self.ongoing_risk_terms),
        ] {
            let mut seen = HashSet::new();
            for phrase in phrases {
                if let Some(problem) = phrase_problem(phrase) {
                    violations.push(format!("{section}: phrase {phrase:?} {problem}"));
                }
                if !seen.insert(phrase.as_str()) {
                    violations.push(format!("{section}: duplicate phrase {phrase:?}"));
                }
            }
        }
        violations.extend(self.scoring.violations());

        if violations.is_empty() {
            Ok(())
        } else {
            Err(RulesError::Invalid { violations })
        }
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::builtin()
    }
}

// ---------------------------------------------------------------------------
// File representation
// ---------------------------------------------------------------------------

/// On-disk shape of a rule set. Every section is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RuleSetFile {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub taxonomy: Option<Taxonomy>,
    #[serde(default)]
    pub positive_signals: Option<Vec<String>>,
    #[serde(default)]
    pub resolution_terms: Option<Vec<String>>,
    #[serde(default)]
    pub ongoing_risk_terms: Option<Vec<String>>,
    #[serde(default)]
    pub scoring: Option<ScoringParams>,
}

impl RuleSetFile {
    /// Merge over the built-in rule set and validate the result.
    pub fn into_rule_set(self) -> RulesResult<RuleSet> {
        let base = RuleSet::builtin();
        RuleSet::new(
            self.name.unwrap_or(base.name),
            self.taxonomy.unwrap_or(base.taxonomy),
            self.positive_signals.unwrap_or(base.positive_signals),
            self.resolution_terms.unwrap_or(base.resolution_terms),
            self.ongoing_risk_terms.unwrap_or(base.ongoing_risk_terms),
            self.scoring.unwrap_or(base.scoring),
        )
    }
}

// ---------------------------------------------------------------------------
// Built-in tables
// ---------------------------------------------------------------------------

const BUILTIN_ENVIRONMENTAL: &[(&str, u8)] = &[
    ("toxic", 5),
    ("contamination", 5),
    ("pollution", 4),
    ("emissions", 4),
    ("spill", 4),
];

const BUILTIN_SOCIAL: &[(&str, u8)] = &[
    ("injury", 3),
    ("fatality", 4),
    ("harassment", 4),
    ("discrimination", 4),
    ("unsafe", 3),
    ("illness", 3),
];

const BUILTIN_GOVERNANCE: &[(&str, u8)] = &[
    ("fraud", 5),
    ("bribery", 5),
    ("investigation", 4),
    ("audit", 3),
    ("regulatory", 4),
    ("whistleblower", 4),
];

const BUILTIN_POSITIVE_SIGNALS: &[&str] = &[
    "policy approved",
    "policy introduced",
    "committee formed",
    "board-level",
    "compliance settlement",
    "paid all fines",
    "third-party verification",
    "publicly disclosed",
    "bonuses linked",
    "whistleblower protection",
    "remediation completed",
    "monitoring installed",
];

const BUILTIN_RESOLUTION_TERMS: &[&str] = &[
    "completed",
    "resolved",
    "settled",
    "approved",
    "introduced",
    "closed",
    "launched",
    "confirmed",
    "signed",
    "implemented",
];

const BUILTIN_ONGOING_RISK_TERMS: &[&str] = &[
    "lawsuit",
    "class action",
    "alleged",
    "pending",
    "claims",
    "ongoing investigation",
];

fn builtin_taxonomy() -> Taxonomy {
    Taxonomy::new(
        keyword_rules(BUILTIN_ENVIRONMENTAL),
        keyword_rules(BUILTIN_SOCIAL),
        keyword_rules(BUILTIN_GOVERNANCE),
    )
}

fn keyword_rules(table: &[(&str, u8)]) -> Vec<KeywordRule> {
    let rules: Vec<KeywordRule> = table
        .iter()
        .filter_map(|&(kw, sev)| {
            Severity::new(i64::from(sev))
                .ok()
                .map(|s| KeywordRule::new(kw, s))
        })
        .collect();
    debug_assert_eq!(rules.len(), table.len(), "built-in severity outside 1-5");
    rules
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
