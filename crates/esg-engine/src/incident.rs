//! Incident records, one per matched negative keyword.

use serde::{Deserialize, Serialize};

use esg_core::{Pillar, SeverityBucket};

use crate::matcher::Matches;

/// A recorded detection of a negative keyword.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Incident {
    pub pillar: Pillar,
    /// `"<keyword> related issue"`.
    pub incident: String,
    pub severity: SeverityBucket,
    pub evidence: Vec<String>,
}

impl Incident {
    /// The keyword this incident was raised for.
    pub fn keyword(&self) -> Option<&str> {
        self.evidence.first().map(String::as_str)
    }
}

/// Incidents in hit order (pillar order, then taxonomy declaration order).
pub fn record_incidents(matches: &Matches) -> Vec<Incident> {
    matches
        .negative
        .iter()
        .map(|hit| Incident {
            pillar: hit.pillar,
            incident: format!("{} related issue", hit.keyword),
            severity: SeverityBucket::from_severity(hit.severity),
            evidence: vec![hit.keyword.clone()],
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matcher::NegativeHit;
    use esg_core::Severity;

    fn hit(pillar: Pillar, keyword: &str, severity: i64) -> NegativeHit {
        NegativeHit {
            pillar,
            keyword: keyword.to_string(),
            severity: Severity::new(severity).unwrap(),
        }
    }

    #[test]
    fn one_incident_per_hit_with_bucket() {
        let m = Matches {
            negative: vec![
                hit(Pillar::Environmental, "toxic", 5),
                hit(Pillar::Social, "fatality", 4),
                hit(Pillar::Governance, "audit", 3),
            ],
            positive: vec!["paid all fines".to_string()],
        };
        let incidents = record_incidents(&m);
        assert_eq!(incidents.len(), 3);
        assert_eq!(incidents[0].severity, SeverityBucket::Critical);
        assert_eq!(incidents[1].severity, SeverityBucket::High);
        assert_eq!(incidents[2].severity, SeverityBucket::Medium);
        assert_eq!(incidents[0].incident, "toxic related issue");
        assert_eq!(incidents[2].evidence, vec!["audit".to_string()]);
        assert_eq!(incidents[1].keyword(), Some("fatality"));
    }

    #[test]
    fn serialized_shape() {
        let incidents = record_incidents(&Matches {
            negative: vec![hit(Pillar::Governance, "bribery", 5)],
            positive: vec![],
        });
        let json = serde_json::to_value(&incidents[0]).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "pillar": "G",
                "incident": "bribery related issue",
                "severity": "CRITICAL",
                "evidence": ["bribery"]
            })
        );
    }

    #[test]
    fn no_hits_no_incidents() {
        assert!(record_incidents(&Matches::default()).is_empty());
    }
}
