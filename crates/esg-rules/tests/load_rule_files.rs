//! # Rule Set File Loading
//!
//! Exercises the YAML/JSON loader against real files on disk: the shipped
//! reference rule set, partial overrides, and every class of rejected file.

use std::io::Write;
use std::path::{Path, PathBuf};

use esg_core::Pillar;
use esg_rules::{load_rule_set, RuleSet, RulesError};

fn write_temp(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    let mut f = std::fs::File::create(&path).unwrap();
    f.write_all(content.as_bytes()).unwrap();
    path
}

fn reference_rules_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../../config/rules.yaml")
}

#[test]
fn shipped_reference_file_matches_builtin_tables() {
    let loaded = load_rule_set(&reference_rules_path()).unwrap();
    let builtin = RuleSet::builtin();
    assert_eq!(loaded.name(), "reference");
    assert_eq!(loaded.taxonomy(), builtin.taxonomy());
    assert_eq!(loaded.positive_signals(), builtin.positive_signals());
    assert_eq!(loaded.resolution_terms(), builtin.resolution_terms());
    assert_eq!(loaded.ongoing_risk_terms(), builtin.ongoing_risk_terms());
    assert_eq!(loaded.scoring(), builtin.scoring());
}

#[test]
fn json_rule_set_loads() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_temp(
        dir.path(),
        "rules.json",
        r#"{
            "name": "json-rules",
            "taxonomy": {"G": [{"keyword": "kickback", "severity": 5}]},
            "scoring": {"severity_scale": 4}
        }"#,
    );
    let rules = load_rule_set(&path).unwrap();
    assert_eq!(rules.name(), "json-rules");
    assert!(rules.taxonomy().keywords(Pillar::Environmental).is_empty());
    assert_eq!(rules.taxonomy().keywords(Pillar::Governance)[0].keyword, "kickback");
    assert_eq!(rules.scoring().severity_scale, 4);
    assert_eq!(rules.scoring().base_pillar_score, 70);
}

#[test]
fn malformed_yaml_reports_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_temp(dir.path(), "broken.yaml", "taxonomy: [unclosed\n");
    let err = load_rule_set(&path).unwrap_err();
    match &err {
        RulesError::YamlParse { path: p, .. } => assert_eq!(p, &path),
        other => panic!("expected YamlParse, got {other:?}"),
    }
}

#[test]
fn malformed_json_reports_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_temp(dir.path(), "broken.json", "{\"name\": ");
    assert!(matches!(
        load_rule_set(&path).unwrap_err(),
        RulesError::JsonParse { .. }
    ));
}

#[test]
fn severity_out_of_range_is_a_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_temp(
        dir.path(),
        "rules.yaml",
        "taxonomy:\n  E:\n    - { keyword: toxic, severity: 6 }\n",
    );
    assert!(matches!(
        load_rule_set(&path).unwrap_err(),
        RulesError::YamlParse { .. }
    ));
}

#[test]
fn misspelt_nested_keys_are_rejected() {
    let dir = tempfile::tempdir().unwrap();
    for (name, content) in [
        ("pillar.yaml", "taxonomy:\n  Env:\n    - { keyword: toxic, severity: 5 }\n"),
        ("scoring.yaml", "scoring:\n  severity_scal: 10\n"),
        ("rule.yaml", "taxonomy:\n  E:\n    - { keyword: toxic, severity: 5, weight: 2 }\n"),
        ("bonus.yaml", "scoring:\n  positive_bonus: { E: 3, S: 0, G: 8, X: 1 }\n"),
    ] {
        let path = write_temp(dir.path(), name, content);
        match load_rule_set(&path).unwrap_err() {
            RulesError::YamlParse { source, .. } => {
                assert!(source.to_string().contains("unknown field"), "{name}: {source}");
            }
            other => panic!("{name}: expected YamlParse, got {other:?}"),
        }
    }
}

#[test]
fn constraint_violations_reject_whole_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_temp(
        dir.path(),
        "rules.yml",
        "taxonomy:\n  S:\n    - { keyword: Injury, severity: 3 }\n\
         scoring:\n  remediation_discount: 2.0\n",
    );
    match load_rule_set(&path).unwrap_err() {
        RulesError::Invalid { violations } => {
            assert_eq!(violations.len(), 2, "{violations:?}");
        }
        other => panic!("expected Invalid, got {other:?}"),
    }
}
