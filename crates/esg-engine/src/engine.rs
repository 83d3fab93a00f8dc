//! # Engine
//!
//! [`EsgEngine`] wires the pipeline together:
//!
//! ```text
//! normalize → extract terms → detect context → match rules
//!           → aggregate → score pillars → score overall
//!           → record incidents → governance view → summary
//! ```
//!
//! The engine holds only immutable state, so a single instance is shared
//! across threads behind an `Arc` with no locking.

use std::sync::Arc;

use esg_core::Pillar;
use esg_rules::RuleSet;

use crate::context::ContextFlags;
use crate::error::EngineError;
use crate::explanation::compose_summary;
use crate::incident::record_incidents;
use crate::matcher::{match_rules, Matches};
use crate::normalize::normalize;
use crate::penalty::{aggregate, Totals};
use crate::result::{
    AnalysisRequest, AnalysisResult, AnalysisTrace, GovernanceAssessment, PillarTrace,
};
use crate::scoring::{score_overall, score_pillars};
use crate::terms::{StopwordTermExtractor, TermExtractor};

/// Characters of input considered per analysis unless configured otherwise.
pub const DEFAULT_MAX_TEXT_LENGTH: usize = 4000;

/// Tunables that are not part of the rule set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    max_text_length: usize,
}

impl EngineConfig {
    /// # Errors
    ///
    /// [`EngineError::InvalidMaxTextLength`] if `max_text_length` is zero.
    pub fn new(max_text_length: usize) -> Result<Self, EngineError> {
        if max_text_length == 0 {
            return Err(EngineError::InvalidMaxTextLength(max_text_length));
        }
        Ok(Self { max_text_length })
    }

    pub fn max_text_length(&self) -> usize {
        self.max_text_length
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_text_length: DEFAULT_MAX_TEXT_LENGTH,
        }
    }
}

/// Rule-based ESG scoring engine.
#[derive(Debug)]
pub struct EsgEngine {
    rules: Arc<RuleSet>,
    extractor: Box<dyn TermExtractor>,
    config: EngineConfig,
}

/// Everything one pass of the pipeline produces.
struct Evaluation {
    truncated: bool,
    normalized_chars: usize,
    term_count: usize,
    flags: ContextFlags,
    matches: Matches,
    totals: Totals,
    result: AnalysisResult,
}

impl EsgEngine {
    /// Engine with the default stopword term extractor.
    pub fn new(rules: Arc<RuleSet>, config: EngineConfig) -> Self {
        Self::with_extractor(rules, Box::new(StopwordTermExtractor::new()), config)
    }

    pub fn with_extractor(
        rules: Arc<RuleSet>,
        extractor: Box<dyn TermExtractor>,
        config: EngineConfig,
    ) -> Self {
        Self {
            rules,
            extractor,
            config,
        }
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    pub fn config(&self) -> EngineConfig {
        self.config
    }

    pub fn extractor_name(&self) -> &str {
        self.extractor.name()
    }

    /// Score a text. Total: every input, including the empty string,
    /// produces a result.
    pub fn analyze(&self, text: &str) -> AnalysisResult {
        self.evaluate(text).result
    }

    /// Score a deserialized request.
    ///
    /// # Errors
    ///
    /// [`EngineError::MissingText`] if the request carries no text.
    pub fn analyze_request(&self, request: &AnalysisRequest) -> Result<AnalysisResult, EngineError> {
        let text = request.text.as_deref().ok_or(EngineError::MissingText)?;
        Ok(self.analyze(text))
    }

    /// Score a text and report the intermediate state behind the result.
    pub fn trace(&self, text: &str) -> AnalysisTrace {
        let eval = self.evaluate(text);
        let totals = Pillar::all()
            .iter()
            .map(|&pillar| {
                let t = eval.totals.get(pillar);
                PillarTrace {
                    pillar,
                    penalty: t.penalty,
                    bonus: t.bonus,
                }
            })
            .collect();

        AnalysisTrace {
            extractor: self.extractor_name().to_string(),
            ruleset: self.rules.name().to_string(),
            truncated: eval.truncated,
            normalized_chars: eval.normalized_chars,
            term_count: eval.term_count,
            flags: eval.flags,
            matches: eval.matches,
            totals,
            result: eval.result,
        }
    }

    fn evaluate(&self, text: &str) -> Evaluation {
        let normalized = normalize(text, self.config.max_text_length);
        if normalized.truncated {
            tracing::debug!(
                max_text_length = self.config.max_text_length,
                "input truncated before analysis"
            );
        }

        let terms = self.extractor.extract(&normalized.text);
        let flags = ContextFlags::detect(&normalized.text, &self.rules);
        let matches = match_rules(&normalized.text, &terms, &self.rules);
        let params = self.rules.scoring();
        let totals = aggregate(&matches, flags, params);

        let pillar_assessment = score_pillars(&totals, params);
        let overall_assessment = score_overall(&pillar_assessment);
        let key_incidents = record_incidents(&matches);
        let governance_assessment = GovernanceAssessment::from_pillars(&pillar_assessment);
        let analyst_summary = compose_summary(&matches);

        tracing::debug!(
            esg_score = overall_assessment.esg_score,
            risk = %overall_assessment.risk_level,
            negative_hits = matches.negative.len(),
            positive_hits = matches.positive.len(),
            has_resolution = flags.has_resolution,
            has_ongoing_risk = flags.has_ongoing_risk,
            "analysis complete"
        );

        Evaluation {
            truncated: normalized.truncated,
            normalized_chars: normalized.text.chars().count(),
            term_count: terms.len(),
            flags,
            matches,
            totals,
            result: AnalysisResult {
                overall_assessment,
                pillar_assessment,
                key_incidents,
                governance_assessment,
                analyst_summary,
            },
        }
    }
}

impl Default for EsgEngine {
    fn default() -> Self {
        Self::new(Arc::new(RuleSet::builtin()), EngineConfig::default())
    }
}
