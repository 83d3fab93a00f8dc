#![deny(missing_docs)]

//! # esg-core — Foundational Types for PulseESG
//!
//! This crate defines the vocabulary every other crate in the workspace
//! speaks. It depends on nothing internal, only `serde` and `thiserror`.
//!
//! ## Design Principles
//!
//! 1. **Single [`Pillar`] enum.** One definition, three variants, fixed
//!    iteration order E → S → G. Exhaustive `match` everywhere; no
//!    independent pillar lists that can drift apart.
//!
//! 2. **Validated [`Severity`] newtype.** Keyword severities are 1–5 by
//!    construction. A rule set carrying a severity of 0 or 6 cannot be built.
//!
//! 3. **Pure bucket functions.** [`RiskLevel::from_score`] and
//!    [`SeverityBucket::from_severity`] are total and deterministic; the same
//!    thresholds apply to every pillar and to the overall score.
//!
//! 4. **[`ValidationError`] hierarchy.** Structured errors with `thiserror`,
//!    no `.unwrap()` outside tests.

pub mod error;
pub mod pillar;
pub mod risk;

pub use error::ValidationError;
pub use pillar::Pillar;
pub use risk::{clamp_score, RiskLevel, Severity, SeverityBucket, MAX_SCORE};
