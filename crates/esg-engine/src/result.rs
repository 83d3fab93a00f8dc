//! Request and result types exchanged with callers.
//!
//! Field names follow the camelCase JSON contract consumed by the
//! dashboard; do not rename without coordinating with it.

use serde::{Deserialize, Serialize};

use esg_core::{Pillar, RiskLevel};

use crate::context::ContextFlags;
use crate::incident::Incident;
use crate::matcher::Matches;
use crate::scoring::{OverallAssessment, PillarAssessments};

/// Inbound analysis request.
///
/// `text` is optional at the serde level so that an absent or `null` field
/// reaches [`crate::EsgEngine::analyze_request`] and is rejected there with a
/// typed error instead of a generic deserialization failure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisRequest {
    #[serde(default)]
    pub text: Option<String>,
}

impl AnalysisRequest {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
        }
    }
}

/// Governance view projected from the G pillar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GovernanceAssessment {
    pub overall_risk: RiskLevel,
    pub concerns: Vec<String>,
}

impl GovernanceAssessment {
    pub fn from_pillars(pillars: &PillarAssessments) -> Self {
        let g = pillars.get(Pillar::Governance);
        Self {
            overall_risk: g.risk,
            concerns: g.drivers.clone(),
        }
    }
}

/// Complete output of one analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub overall_assessment: OverallAssessment,
    pub pillar_assessment: PillarAssessments,
    pub key_incidents: Vec<Incident>,
    pub governance_assessment: GovernanceAssessment,
    pub analyst_summary: String,
}

/// Penalty and bonus totals for one pillar, as reported by a trace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PillarTrace {
    pub pillar: Pillar,
    pub penalty: u32,
    pub bonus: u32,
}

/// Intermediate state of one analysis alongside its result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisTrace {
    pub extractor: String,
    pub ruleset: String,
    pub truncated: bool,
    pub normalized_chars: usize,
    pub term_count: usize,
    pub flags: ContextFlags,
    pub matches: Matches,
    pub totals: Vec<PillarTrace>,
    pub result: AnalysisResult,
}
