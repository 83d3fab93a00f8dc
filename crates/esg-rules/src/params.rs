//! # Scoring Parameters
//!
//! The calibration constants of the scoring scheme, named and overridable
//! from a rule set file. Defaults reproduce the reference calibration:
//!
//! | Parameter              | Default           |
//! |------------------------|-------------------|
//! | `base_pillar_score`    | 70                |
//! | `severity_scale`       | 6                 |
//! | `remediation_discount` | 0.35              |
//! | `dispute_surcharge`    | E: 3, S: 5, G: 5  |
//! | `positive_bonus`       | E: 3, S: 0, G: 8  |

use serde::{Deserialize, Serialize};

use esg_core::{Pillar, MAX_SCORE};

/// One value per pillar, keyed `E`/`S`/`G` in rule set files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PillarValues<T> {
    #[serde(rename = "E")]
    pub environmental: T,
    #[serde(rename = "S")]
    pub social: T,
    #[serde(rename = "G")]
    pub governance: T,
}

impl<T: Copy> PillarValues<T> {
    pub fn new(environmental: T, social: T, governance: T) -> Self {
        Self {
            environmental,
            social,
            governance,
        }
    }

    /// Value for a pillar.
    pub fn get(&self, pillar: Pillar) -> T {
        match pillar {
            Pillar::Environmental => self.environmental,
            Pillar::Social => self.social,
            Pillar::Governance => self.governance,
        }
    }
}

/// Named calibration constants for penalty and bonus computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScoringParams {
    /// Starting score of every pillar before penalties and bonuses.
    pub base_pillar_score: u8,
    /// Multiplier turning a 1–5 severity into penalty points.
    pub severity_scale: u32,
    /// Fraction of the base penalty kept when remediation is confirmed and
    /// no dispute is ongoing. The discounted penalty is floored.
    pub remediation_discount: f64,
    /// Points added to each penalty when an ongoing dispute is detected.
    pub dispute_surcharge: PillarValues<u32>,
    /// Points added to each pillar per matched positive signal, applied only
    /// when no dispute is ongoing.
    pub positive_bonus: PillarValues<u32>,
}

impl Default for ScoringParams {
    fn default() -> Self {
        Self {
            base_pillar_score: 70,
            severity_scale: 6,
            remediation_discount: 0.35,
            dispute_surcharge: PillarValues::new(3, 5, 5),
            positive_bonus: PillarValues::new(3, 0, 8),
        }
    }
}

impl ScoringParams {
    /// Collect constraint violations. Empty means valid.
    pub(crate) fn violations(&self) -> Vec<String> {
        let mut out = Vec::new();
        if self.base_pillar_score > MAX_SCORE {
            out.push(format!(
                "scoring.base_pillar_score {} exceeds {MAX_SCORE}",
                self.base_pillar_score
            ));
        }
        if self.severity_scale == 0 {
            out.push("scoring.severity_scale must be positive".to_string());
        }
        if !self.remediation_discount.is_finite()
            || !(0.0..=1.0).contains(&self.remediation_discount)
        {
            out.push(format!(
                "scoring.remediation_discount {} must be within [0, 1]",
                self.remediation_discount
            ));
        }
        out
    }
}
