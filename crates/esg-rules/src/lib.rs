//! # esg-rules — Rule Sets for the ESG Scoring Engine
//!
//! Everything the engine matches against lives here, as data:
//!
//! - **Taxonomy** ([`taxonomy`]): per-pillar negative keywords with 1–5
//!   severities, in declaration order.
//! - **Phrase lists** ([`ruleset`]): positive signals, resolution terms and
//!   ongoing-risk terms.
//! - **Scoring parameters** ([`params`]): the named calibration constants
//!   (penalty scale, remediation discount, dispute surcharges, bonuses).
//! - **Loader** ([`loader`]): YAML/JSON rule set files merged over the
//!   built-in tables.
//!
//! A [`RuleSet`] can only be obtained validated. The engine never runs on a
//! partially loaded or guessed configuration.

pub mod error;
pub mod loader;
pub mod params;
pub mod ruleset;
pub mod taxonomy;

pub use error::{RulesError, RulesResult};
pub use loader::{load_or_builtin, load_rule_set};
pub use params::{PillarValues, ScoringParams};
pub use ruleset::{RuleSet, RuleSetFile, BUILTIN_RULESET_NAME};
pub use taxonomy::{KeywordRule, Taxonomy};
