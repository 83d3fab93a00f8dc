//! Pillar and overall scoring.

use serde::{Deserialize, Serialize};

use esg_core::{clamp_score, Pillar, RiskLevel};
use esg_rules::ScoringParams;

use crate::penalty::{PillarTotals, Totals};

/// Score, risk bucket and drivers for one pillar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PillarAssessment {
    pub score: u8,
    pub risk: RiskLevel,
    /// Distinct negative keywords behind the penalty. Positive signals never
    /// appear here.
    pub drivers: Vec<String>,
}

/// Assessments keyed by pillar code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PillarAssessments {
    #[serde(rename = "E")]
    pub environmental: PillarAssessment,
    #[serde(rename = "S")]
    pub social: PillarAssessment,
    #[serde(rename = "G")]
    pub governance: PillarAssessment,
}

impl PillarAssessments {
    pub fn get(&self, pillar: Pillar) -> &PillarAssessment {
        match pillar {
            Pillar::Environmental => &self.environmental,
            Pillar::Social => &self.social,
            Pillar::Governance => &self.governance,
        }
    }
}

/// Overall score and risk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverallAssessment {
    pub esg_score: u8,
    pub risk_level: RiskLevel,
}

/// `clamp(0, 100, base − penalty + bonus)` with its bucket.
pub fn score_pillar(totals: &PillarTotals, params: &ScoringParams) -> PillarAssessment {
    let raw = i64::from(params.base_pillar_score) - i64::from(totals.penalty)
        + i64::from(totals.bonus);
    let score = clamp_score(raw);
    PillarAssessment {
        score,
        risk: RiskLevel::from_score(score),
        drivers: totals.drivers.clone(),
    }
}

pub fn score_pillars(totals: &Totals, params: &ScoringParams) -> PillarAssessments {
    PillarAssessments {
        environmental: score_pillar(totals.get(Pillar::Environmental), params),
        social: score_pillar(totals.get(Pillar::Social), params),
        governance: score_pillar(totals.get(Pillar::Governance), params),
    }
}

/// Truncating mean of the three pillar scores.
pub fn score_overall(pillars: &PillarAssessments) -> OverallAssessment {
    let sum: u32 = Pillar::all()
        .iter()
        .map(|&p| u32::from(pillars.get(p).score))
        .sum();
    let esg_score = clamp_score(i64::from(sum / Pillar::COUNT as u32));
    OverallAssessment {
        esg_score,
        risk_level: RiskLevel::from_score(esg_score),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn totals(penalty: u32, bonus: u32) -> PillarTotals {
        PillarTotals {
            penalty,
            bonus,
            drivers: vec![],
        }
    }

    fn assessment(score: u8) -> PillarAssessment {
        PillarAssessment {
            score,
            risk: RiskLevel::from_score(score),
            drivers: vec![],
        }
    }

    #[test]
    fn untouched_pillar_scores_base() {
        let a = score_pillar(&totals(0, 0), &ScoringParams::default());
        assert_eq!(a.score, 70);
        assert_eq!(a.risk, RiskLevel::Low);
    }

    #[test]
    fn penalty_and_bonus_applied() {
        let a = score_pillar(&totals(10, 3), &ScoringParams::default());
        assert_eq!(a.score, 63);
    }

    #[test]
    fn clamped_at_zero_and_hundred() {
        let p = ScoringParams::default();
        assert_eq!(score_pillar(&totals(500, 0), &p).score, 0);
        assert_eq!(score_pillar(&totals(500, 0), &p).risk, RiskLevel::High);
        assert_eq!(score_pillar(&totals(0, 80), &p).score, 100);
    }

    #[test]
    fn overall_truncates() {
        let pillars = PillarAssessments {
            environmental: assessment(16),
            social: assessment(70),
            governance: assessment(41),
        };
        // 127 / 3 = 42.33…
        let o = score_overall(&pillars);
        assert_eq!(o.esg_score, 42);
        assert_eq!(o.risk_level, RiskLevel::Medium);

        let pillars = PillarAssessments {
            environmental: assessment(56),
            social: assessment(56),
            governance: assessment(55),
        };
        // 167 / 3 = 55.67…, never rounded up
        assert_eq!(score_overall(&pillars).esg_score, 55);
    }

    #[test]
    fn serializes_with_contract_field_names() {
        let o = OverallAssessment {
            esg_score: 70,
            risk_level: RiskLevel::Low,
        };
        let json = serde_json::to_value(o).unwrap();
        assert_eq!(json, serde_json::json!({"esgScore": 70, "riskLevel": "LOW"}));
    }
}
