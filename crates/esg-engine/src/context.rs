//! Call-level context modifiers.
//!
//! Two booleans derived once per analysis from the whole normalized text.
//! They apply uniformly to every matched keyword in every pillar.

use serde::{Deserialize, Serialize};

use esg_rules::RuleSet;

/// Context flags for one analysis call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContextFlags {
    /// Some resolution term (e.g. "settled", "completed") is present.
    pub has_resolution: bool,
    /// Some ongoing-risk term (e.g. "lawsuit", "pending") is present.
    pub has_ongoing_risk: bool,
}

/// The single penalty modifier a call's flags select.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Modifier {
    /// Confirmed remediation and no ongoing dispute.
    RemediationDiscount,
    /// Ongoing dispute, regardless of remediation.
    DisputeSurcharge,
    None,
}

impl ContextFlags {
    /// Scan the normalized text for resolution and ongoing-risk terms.
    pub fn detect(normalized: &str, rules: &RuleSet) -> Self {
        Self {
            has_resolution: contains_any(normalized, rules.resolution_terms()),
            has_ongoing_risk: contains_any(normalized, rules.ongoing_risk_terms()),
        }
    }

    /// Which modifier applies. An ongoing dispute always wins.
    pub fn modifier(self) -> Modifier {
        if self.has_ongoing_risk {
            Modifier::DisputeSurcharge
        } else if self.has_resolution {
            Modifier::RemediationDiscount
        } else {
            Modifier::None
        }
    }

    /// Positive-signal bonuses are suppressed while a dispute is ongoing.
    pub fn bonuses_allowed(self) -> bool {
        !self.has_ongoing_risk
    }
}

fn contains_any(text: &str, phrases: &[String]) -> bool {
    phrases.iter().any(|p| text.contains(p.as_str()))
}
