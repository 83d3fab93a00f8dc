//! # Analyze Subcommand
//!
//! Scores one text and prints the result as JSON on stdout. Input comes
//! from `--text`, `--file`, or stdin when neither is given.

use std::io::Read;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Args;

use esg_engine::{EngineConfig, EsgEngine, DEFAULT_MAX_TEXT_LENGTH};

/// Arguments for the `esg analyze` subcommand.
#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// Text to analyze.
    #[arg(long, conflicts_with = "file")]
    pub text: Option<String>,

    /// Read the text to analyze from a file.
    #[arg(long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Rule set file (YAML or JSON). Defaults to the built-in tables.
    #[arg(long, value_name = "PATH")]
    pub rules: Option<PathBuf>,

    /// Characters of input considered.
    #[arg(long, default_value_t = DEFAULT_MAX_TEXT_LENGTH)]
    pub max_text_length: usize,

    /// Pretty-print the JSON output.
    #[arg(long)]
    pub pretty: bool,

    /// Print the intermediate analysis state alongside the result.
    #[arg(long)]
    pub explain: bool,
}

/// Execute the analyze subcommand.
pub fn run_analyze(args: &AnalyzeArgs) -> Result<u8> {
    let engine = build_engine(args)?;
    let text = read_input(args, std::io::stdin().lock())?;
    let output = render(&engine, &text, args.pretty, args.explain)?;
    println!("{output}");
    Ok(0)
}

/// Load the rule set and build an engine honoring the arguments.
pub fn build_engine(args: &AnalyzeArgs) -> Result<EsgEngine> {
    let rules = esg_rules::load_or_builtin(args.rules.as_deref()).with_context(|| {
        match &args.rules {
            Some(p) => format!("failed to load rule set from {}", p.display()),
            None => "failed to build the built-in rule set".to_string(),
        }
    })?;
    let config = EngineConfig::new(args.max_text_length).context("invalid --max-text-length")?;
    tracing::info!(
        ruleset = rules.name(),
        max_text_length = config.max_text_length(),
        "engine ready"
    );
    Ok(EsgEngine::new(Arc::new(rules), config))
}

/// Resolve the input text: `--text`, then `--file`, then `stdin`.
pub fn read_input<R: Read>(args: &AnalyzeArgs, mut stdin: R) -> Result<String> {
    if let Some(text) = &args.text {
        return Ok(text.clone());
    }
    if let Some(path) = &args.file {
        return std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()));
    }
    let mut text = String::new();
    stdin
        .read_to_string(&mut text)
        .context("failed to read text from stdin")?;
    Ok(text)
}

/// Analyze `text` and serialize the result, or the full trace with `explain`.
pub fn render(engine: &EsgEngine, text: &str, pretty: bool, explain: bool) -> Result<String> {
    let value = if explain {
        serde_json::to_value(engine.trace(text))
    } else {
        serde_json::to_value(engine.analyze(text))
    }
    .context("failed to serialize analysis")?;

    let output = if pretty {
        serde_json::to_string_pretty(&value)
    } else {
        serde_json::to_string(&value)
    }
    .context("failed to serialize analysis")?;
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn args() -> AnalyzeArgs {
        AnalyzeArgs {
            text: None,
            file: None,
            rules: None,
            max_text_length: DEFAULT_MAX_TEXT_LENGTH,
            pretty: false,
            explain: false,
        }
    }

    #[test]
    fn text_argument_wins_over_stdin() {
        let a = AnalyzeArgs {
            text: Some("toxic".to_string()),
            ..args()
        };
        let text = read_input(&a, Cursor::new("from stdin")).unwrap();
        assert_eq!(text, "toxic");
    }

    #[test]
    fn falls_back_to_stdin() {
        let text = read_input(&args(), Cursor::new("from stdin")).unwrap();
        assert_eq!(text, "from stdin");
    }

    #[test]
    fn reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("disclosure.txt");
        std::fs::write(&path, "Pending lawsuit over pollution.").unwrap();
        let a = AnalyzeArgs {
            file: Some(path),
            ..args()
        };
        let text = read_input(&a, Cursor::new("")).unwrap();
        assert_eq!(text, "Pending lawsuit over pollution.");
    }

    #[test]
    fn missing_file_is_an_error() {
        let a = AnalyzeArgs {
            file: Some(PathBuf::from("/nonexistent/disclosure.txt")),
            ..args()
        };
        let err = read_input(&a, Cursor::new("")).unwrap_err();
        assert!(format!("{err:#}").contains("failed to read"));
    }

    #[test]
    fn zero_max_text_length_rejected() {
        let a = AnalyzeArgs {
            max_text_length: 0,
            ..args()
        };
        assert!(build_engine(&a).is_err());
    }

    #[test]
    fn render_result_json() {
        let engine = build_engine(&args()).unwrap();
        let out = render(&engine, "fraud", false, false).unwrap();
        let v: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(v["pillarAssessment"]["G"]["score"], 40);
        assert!(!out.contains('\n'));
    }

    #[test]
    fn render_trace_json() {
        let engine = build_engine(&args()).unwrap();
        let out = render(&engine, "fraud", true, true).unwrap();
        let v: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(v["ruleset"], "builtin");
        assert_eq!(v["flags"]["hasOngoingRisk"], false);
        assert_eq!(v["result"]["overallAssessment"]["esgScore"], 60);
        assert!(out.contains('\n'));
    }
}
