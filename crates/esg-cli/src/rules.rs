//! # Rules Subcommand
//!
//! Checks rule set files before they are deployed and prints the
//! effective configuration the engine would run with.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Subcommand};

use esg_core::Pillar;
use esg_rules::{RuleSet, RulesError};

/// Arguments for the `esg rules` subcommand.
#[derive(Args, Debug)]
pub struct RulesArgs {
    #[command(subcommand)]
    pub command: RulesCommand,
}

#[derive(Subcommand, Debug)]
pub enum RulesCommand {
    /// Load and validate a rule set file.
    Validate {
        /// Rule set file (YAML or JSON).
        #[arg(value_name = "PATH")]
        path: PathBuf,
    },

    /// Print the effective rule set as YAML.
    Show {
        /// Rule set file. Defaults to the built-in tables.
        #[arg(long, value_name = "PATH")]
        rules: Option<PathBuf>,
    },
}

/// Execute the rules subcommand.
///
/// Returns exit code: 0 when the rule set is valid, 1 otherwise.
pub fn run_rules(args: &RulesArgs) -> Result<u8> {
    match &args.command {
        RulesCommand::Validate { path } => {
            let (code, report) = validate_report(path);
            println!("{report}");
            Ok(code)
        }
        RulesCommand::Show { rules } => {
            let rules = esg_rules::load_or_builtin(rules.as_deref())
                .context("failed to load rule set")?;
            print!("{}", show_yaml(&rules)?);
            Ok(0)
        }
    }
}

/// Validate `path` and describe the outcome.
pub fn validate_report(path: &Path) -> (u8, String) {
    match esg_rules::load_rule_set(path) {
        Ok(rules) => (0, format!("OK: {} — {}", path.display(), summary(&rules))),
        Err(RulesError::Invalid { violations }) => {
            let mut report = format!(
                "FAIL: {} — {} violation(s)",
                path.display(),
                violations.len()
            );
            for v in &violations {
                report.push_str("\n  - ");
                report.push_str(v);
            }
            (1, report)
        }
        Err(e) => (1, format!("FAIL: {e}")),
    }
}

/// One-line description of a rule set's contents.
pub fn summary(rules: &RuleSet) -> String {
    let keywords: Vec<String> = Pillar::all()
        .iter()
        .map(|&p| format!("{}={}", p.code(), rules.taxonomy().keywords(p).len()))
        .collect();
    format!(
        "rule set {:?}: keywords {}, {} positive signals, {} resolution terms, {} ongoing-risk terms",
        rules.name(),
        keywords.join(" "),
        rules.positive_signals().len(),
        rules.resolution_terms().len(),
        rules.ongoing_risk_terms().len()
    )
}

/// The rule set in the same YAML format the loader reads.
pub fn show_yaml(rules: &RuleSet) -> Result<String> {
    serde_yaml::to_string(rules).context("failed to serialize rule set")
}
