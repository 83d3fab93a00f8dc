//! # Service Bootstrap
//!
//! Builds the [`AppState`] the server runs on. Any failure here is fatal:
//! the service never starts on a partial or guessed configuration.
//!
//! ## Bootstrap Sequence
//!
//! 1. **Read Configuration** — `PORT`, `MAX_TEXT_LENGTH`, `ESG_RULES`.
//! 2. **Load Rule Set** — From `ESG_RULES` if set, else the built-in tables.
//! 3. **Build Engine** — Validate the text limit and wire the term extractor.
//! 4. **Log Banner** — Structured startup summary.

use std::path::PathBuf;
use std::sync::Arc;

use esg_core::Pillar;
use esg_engine::{EngineConfig, EngineError, EsgEngine};
use esg_rules::{RuleSet, RulesError};

use crate::state::{AppConfig, AppState};

/// Environment variable naming the HTTP port.
pub const ENV_PORT: &str = "PORT";
/// Environment variable bounding analyzed text length.
pub const ENV_MAX_TEXT_LENGTH: &str = "MAX_TEXT_LENGTH";
/// Environment variable pointing at a rule set file.
pub const ENV_RULES: &str = "ESG_RULES";

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

/// Errors during service bootstrap.
#[derive(Debug, thiserror::Error)]
pub enum BootstrapError {
    /// An environment variable is set to an unusable value.
    #[error("invalid {var}={value:?}: {reason}")]
    InvalidConfig {
        var: &'static str,
        value: String,
        reason: String,
    },

    /// The rule set could not be loaded or failed validation.
    #[error("rule set error: {0}")]
    Rules(#[from] RulesError),

    /// The engine rejected its configuration.
    #[error("engine configuration error: {0}")]
    Engine(#[from] EngineError),
}

// ---------------------------------------------------------------------------
// Phase 1: Read Configuration
// ---------------------------------------------------------------------------

/// Read [`AppConfig`] from the process environment.
pub fn config_from_env() -> Result<AppConfig, BootstrapError> {
    config_from_lookup(|key| std::env::var(key).ok())
}

/// Read [`AppConfig`] through `lookup`, which returns the value of a
/// variable if set.
///
/// Unset variables take their defaults. Set but unparsable values are
/// errors, never silently defaulted.
pub fn config_from_lookup<F>(lookup: F) -> Result<AppConfig, BootstrapError>
where
    F: Fn(&str) -> Option<String>,
{
    let defaults = AppConfig::default();

    let port = match lookup(ENV_PORT) {
        Some(raw) => raw.trim().parse::<u16>().map_err(|e| BootstrapError::InvalidConfig {
            var: ENV_PORT,
            value: raw.clone(),
            reason: e.to_string(),
        })?,
        None => defaults.port,
    };

    let max_text_length = match lookup(ENV_MAX_TEXT_LENGTH) {
        Some(raw) => {
            let parsed = raw
                .trim()
                .parse::<usize>()
                .map_err(|e| BootstrapError::InvalidConfig {
                    var: ENV_MAX_TEXT_LENGTH,
                    value: raw.clone(),
                    reason: e.to_string(),
                })?;
            if parsed == 0 {
                return Err(BootstrapError::InvalidConfig {
                    var: ENV_MAX_TEXT_LENGTH,
                    value: raw,
                    reason: "must be a positive integer".to_string(),
                });
            }
            parsed
        }
        None => defaults.max_text_length,
    };

    let rules_path = lookup(ENV_RULES)
        .filter(|p| !p.trim().is_empty())
        .map(PathBuf::from);

    Ok(AppConfig {
        port,
        max_text_length,
        rules_path,
    })
}

// ---------------------------------------------------------------------------
// Public entry point
// ---------------------------------------------------------------------------

/// Load the rule set, build the engine and return state ready for `app()`.
pub fn bootstrap(config: AppConfig) -> Result<AppState, BootstrapError> {
    let rules = esg_rules::load_or_builtin(config.rules_path.as_deref())?;
    let engine_config = EngineConfig::new(config.max_text_length)?;
    let engine = EsgEngine::new(Arc::new(rules), engine_config);
    log_banner(&config, &engine);
    Ok(AppState::with_engine(config, engine))
}

// ---------------------------------------------------------------------------
// Phase 4: Log Banner
// ---------------------------------------------------------------------------

fn keyword_counts(rules: &RuleSet) -> String {
    Pillar::all()
        .iter()
        .map(|&p| format!("{}={}", p.code(), rules.taxonomy().keywords(p).len()))
        .collect::<Vec<_>>()
        .join(" ")
}

fn log_banner(config: &AppConfig, engine: &EsgEngine) {
    let rules = engine.rules();
    let source = config
        .rules_path
        .as_ref()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "built-in".to_string());
    let counts = keyword_counts(rules);

    tracing::info!(
        port = config.port,
        ruleset = rules.name(),
        source = %source,
        keywords = %counts,
        positive_signals = rules.positive_signals().len(),
        max_text_length = config.max_text_length,
        extractor = engine.extractor_name(),
        "bootstrap complete"
    );

    println!("┌──────────────────────────────────────────────────┐");
    println!("│  PulseESG AI Service — v{:<25}│", env!("CARGO_PKG_VERSION"));
    println!("├──────────────────────────────────────────────────┤");
    println!("│  Port:          {:<33}│", config.port);
    println!("│  Rule set:      {:<33}│", rules.name());
    println!("│  Keywords:      {:<33}│", counts);
    println!("│  Max text:      {:<33}│", config.max_text_length);
    println!("│  Extractor:     {:<33}│", engine.extractor_name());
    println!("└──────────────────────────────────────────────────┘");
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
