//! Rule set file loading.
//!
//! The format is chosen by extension: `.yaml`/`.yml` through `serde_yaml`,
//! `.json` through `serde_json`. Both deserialize into [`RuleSetFile`] and
//! are validated by [`RuleSetFile::into_rule_set`]; a file that parses but
//! violates a constraint is rejected as a whole.

use std::path::Path;

use crate::error::{RulesError, RulesResult};
use crate::ruleset::{RuleSet, RuleSetFile};

enum Format {
    Yaml,
    Json,
}

fn format_of(path: &Path) -> RulesResult<Format> {
    match path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .as_deref()
    {
        Some("yaml") | Some("yml") => Ok(Format::Yaml),
        Some("json") => Ok(Format::Json),
        _ => Err(RulesError::UnsupportedFormat {
            path: path.to_path_buf(),
        }),
    }
}

fn read_file(path: &Path) -> RulesResult<String> {
    std::fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            RulesError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            RulesError::Io(e)
        }
    })
}

/// Load and validate a rule set file.
pub fn load_rule_set(path: &Path) -> RulesResult<RuleSet> {
    let format = format_of(path)?;
    let content = read_file(path)?;
    let file: RuleSetFile = match format {
        Format::Yaml => serde_yaml::from_str(&content).map_err(|e| RulesError::YamlParse {
            path: path.to_path_buf(),
            source: e,
        })?,
        Format::Json => serde_json::from_str(&content).map_err(|e| RulesError::JsonParse {
            path: path.to_path_buf(),
            source: e,
        })?,
    };
    let rules = file.into_rule_set()?;
    tracing::debug!(
        path = %path.display(),
        name = rules.name(),
        keywords = rules.taxonomy().len(),
        "loaded rule set"
    );
    Ok(rules)
}

/// Load a rule set from `path`, or fall back to the built-in rule set.
pub fn load_or_builtin(path: Option<&Path>) -> RulesResult<RuleSet> {
    match path {
        Some(p) => load_rule_set(p),
        None => Ok(RuleSet::builtin()),
    }
}
