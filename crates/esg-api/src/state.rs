//! # Application State
//!
//! Shared state handed to every handler. The engine is immutable after
//! bootstrap and shared behind an `Arc`, so cloning `AppState` per request
//! is cheap and needs no locking.

use std::path::PathBuf;
use std::sync::Arc;

use esg_engine::{EngineConfig, EsgEngine, DEFAULT_MAX_TEXT_LENGTH};
use esg_rules::RuleSet;

use crate::middleware::metrics::ApiMetrics;

/// Human-readable service name reported by `/health`.
pub const SERVICE_NAME: &str = "PulseESG AI Service";

/// Default HTTP port.
pub const DEFAULT_PORT: u16 = 8080;

/// Process configuration, read once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Port to bind the HTTP server to.
    pub port: u16,
    /// Characters of input text considered per analysis.
    pub max_text_length: usize,
    /// Optional YAML/JSON rule set file. `None` selects the built-in tables.
    pub rules_path: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            max_text_length: DEFAULT_MAX_TEXT_LENGTH,
            rules_path: None,
        }
    }
}

/// Shared application state.
#[derive(Debug, Clone)]
pub struct AppState {
    pub engine: Arc<EsgEngine>,
    pub metrics: ApiMetrics,
    pub config: AppConfig,
}

impl AppState {
    /// Built-in rule set, default configuration.
    pub fn new() -> Self {
        Self::with_engine(AppConfig::default(), EsgEngine::default())
    }

    pub fn with_engine(config: AppConfig, engine: EsgEngine) -> Self {
        Self {
            engine: Arc::new(engine),
            metrics: ApiMetrics::new(),
            config,
        }
    }

    /// State over a specific rule set and text limit, for embedding and tests.
    pub fn with_rules(rules: RuleSet, engine_config: EngineConfig) -> Self {
        let config = AppConfig {
            max_text_length: engine_config.max_text_length(),
            ..AppConfig::default()
        };
        Self::with_engine(config, EsgEngine::new(Arc::new(rules), engine_config))
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
