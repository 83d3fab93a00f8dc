//! # esg-cli — Command-Line Front End for PulseESG
//!
//! Runs the same engine as the HTTP service without a server, for batch
//! scoring and for checking rule set files before deployment.
//!
//! ## Subcommands
//!
//! - `esg analyze` — Score text from `--text`, `--file` or stdin.
//! - `esg rules validate` — Load and validate a rule set file.
//! - `esg rules show` — Print the effective rule set as YAML.
//!
//! ```bash
//! esg analyze --file disclosure.txt --pretty
//! echo "Alleged bribery under investigation" | esg analyze --explain
//! esg rules validate config/rules.yaml
//! ```
//!
//! Subcommand handlers return an exit code (`0` success, `1` failure) and
//! reserve `Err` for operational problems such as unreadable input.

pub mod analyze;
pub mod rules;
