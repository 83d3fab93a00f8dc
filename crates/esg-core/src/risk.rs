//! # Severities, Scores & Risk Buckets
//!
//! ```text
//! score:     0 ────────── 30 ────────── 55 ────────── 100
//! bucket:        HIGH     │    MEDIUM    │     LOW
//!
//! severity:  1   2   3 │ 4 │ 5
//! incident:   MEDIUM   │HIGH│CRITICAL
//! ```
//!
//! Both mappings are pure functions. The score thresholds are shared by every
//! pillar and by the overall assessment.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Upper bound of every score.
pub const MAX_SCORE: u8 = 100;

/// Scores strictly below this are HIGH risk.
const HIGH_RISK_BELOW: u8 = 30;

/// Scores strictly below this (and at least [`HIGH_RISK_BELOW`]) are MEDIUM risk.
const MEDIUM_RISK_BELOW: u8 = 55;

/// Clamp a raw signed score into `[0, MAX_SCORE]`.
pub fn clamp_score(raw: i64) -> u8 {
    // The clamp guarantees the value fits in u8.
    raw.clamp(0, i64::from(MAX_SCORE)) as u8
}

// ---------------------------------------------------------------------------
// Severity
// ---------------------------------------------------------------------------

/// Keyword severity on the 1–5 scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct Severity(u8);

impl Severity {
    /// Lowest valid severity.
    pub const MIN: Severity = Severity(1);
    /// Highest valid severity.
    pub const MAX: Severity = Severity(5);

    /// Create a validated severity.
    pub fn new(value: i64) -> Result<Self, ValidationError> {
        if (1..=5).contains(&value) {
            Ok(Self(value as u8))
        } else {
            Err(ValidationError::InvalidSeverity(value))
        }
    }

    /// The raw 1–5 value.
    pub fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<i64> for Severity {
    type Error = ValidationError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Severity> for u8 {
    fn from(s: Severity) -> u8 {
        s.0
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// RiskLevel
// ---------------------------------------------------------------------------

/// Risk bucket derived from a 0–100 score. Lower scores mean higher risk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RiskLevel {
    /// Score at or above 55.
    Low,
    /// Score in `[30, 55)`.
    Medium,
    /// Score below 30.
    High,
}

impl RiskLevel {
    /// Bucket a score: `<30 → HIGH`, `[30,55) → MEDIUM`, `≥55 → LOW`.
    pub fn from_score(score: u8) -> Self {
        if score < HIGH_RISK_BELOW {
            Self::High
        } else if score < MEDIUM_RISK_BELOW {
            Self::Medium
        } else {
            Self::Low
        }
    }

    /// Uppercase label, matching the serde representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// SeverityBucket
// ---------------------------------------------------------------------------

/// Incident-level severity label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SeverityBucket {
    /// Severity 1–3.
    Medium,
    /// Severity 4.
    High,
    /// Severity 5.
    Critical,
}

impl SeverityBucket {
    /// `CRITICAL` at severity 5, `HIGH` at 4, otherwise `MEDIUM`.
    pub fn from_severity(severity: Severity) -> Self {
        let v = severity.value();
        if v >= 5 {
            Self::Critical
        } else if v >= 4 {
            Self::High
        } else {
            Self::Medium
        }
    }

    /// Uppercase label, matching the serde representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
            Self::Critical => "CRITICAL",
        }
    }
}

impl fmt::Display for SeverityBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
