//! # ESG Pillars — Single Source of Truth
//!
//! Defines the [`Pillar`] enum. Every crate iterates pillars through
//! [`Pillar::all()`], which fixes the E → S → G order that incident lists
//! and pillar maps are reported in.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// One of the three ESG risk categories.
///
/// Serialized by its single-letter code (`"E"`, `"S"`, `"G"`), which is also
/// the key format used by rule set files and the analysis output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Pillar {
    /// Environmental: pollution, spills, emissions.
    #[serde(rename = "E")]
    Environmental,
    /// Social: workplace safety, harassment, discrimination.
    #[serde(rename = "S")]
    Social,
    /// Governance: fraud, bribery, regulatory exposure.
    #[serde(rename = "G")]
    Governance,
}

impl Pillar {
    /// All pillars in their fixed evaluation order.
    pub fn all() -> &'static [Pillar] {
        &[Self::Environmental, Self::Social, Self::Governance]
    }

    /// The number of pillars.
    pub const COUNT: usize = 3;

    /// Single-letter code, matching the serde representation.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Environmental => "E",
            Self::Social => "S",
            Self::Governance => "G",
        }
    }

    /// Position of this pillar in [`Pillar::all()`].
    pub fn index(&self) -> usize {
        match self {
            Self::Environmental => 0,
            Self::Social => 1,
            Self::Governance => 2,
        }
    }
}

impl fmt::Display for Pillar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Pillar {
    type Err = ValidationError;

    /// Parse a pillar from its single-letter code. Case-sensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "E" => Ok(Self::Environmental),
            "S" => Ok(Self::Social),
            "G" => Ok(Self::Governance),
            other => Err(ValidationError::UnknownPillar(other.to_string())),
        }
    }
}
