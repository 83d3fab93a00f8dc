//! # esg-engine — Rule-Based ESG Risk Scoring
//!
//! Turns a free-text disclosure into a structured ESG risk assessment using
//! nothing but a [`RuleSet`](esg_rules::RuleSet): keyword containment,
//! call-level context modifiers, and fixed arithmetic. No model, no I/O.
//!
//! ## Pipeline
//!
//! | Stage | Module |
//! |---|---|
//! | Lowercase and bound the input | [`normalize`] |
//! | Candidate terms via [`TermExtractor`] | [`terms`] |
//! | Resolution / ongoing-risk flags | [`context`] |
//! | Negative keyword and positive signal hits | [`matcher`] |
//! | Per-pillar penalties, bonuses, drivers | [`penalty`] |
//! | Pillar and overall scores | [`scoring`] |
//! | Incident records | [`incident`] |
//! | Analyst summary | [`explanation`] |
//!
//! ## Determinism
//!
//! Identical text and rule set always produce an identical result, including
//! the order of drivers and incidents (pillar order, then taxonomy
//! declaration order).

pub mod context;
pub mod engine;
pub mod error;
pub mod explanation;
pub mod incident;
pub mod matcher;
pub mod normalize;
pub mod penalty;
pub mod result;
pub mod scoring;
pub mod terms;

pub use context::{ContextFlags, Modifier};
pub use engine::{EngineConfig, EsgEngine, DEFAULT_MAX_TEXT_LENGTH};
pub use error::EngineError;
pub use incident::Incident;
pub use matcher::{Matches, NegativeHit};
pub use result::{
    AnalysisRequest, AnalysisResult, AnalysisTrace, GovernanceAssessment, PillarTrace,
};
pub use scoring::{OverallAssessment, PillarAssessment, PillarAssessments};
pub use terms::{StopwordTermExtractor, TermExtractor, TermSet};
