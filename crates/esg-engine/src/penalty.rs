//! # Penalty & Bonus Aggregation
//!
//! Per negative hit, with `base = severity × severity_scale`:
//!
//! ```text
//! has_resolution ∧ ¬has_ongoing_risk  →  floor(base × remediation_discount)
//! has_ongoing_risk                    →  base + dispute_surcharge[pillar]
//! otherwise                           →  base
//! ```
//!
//! Per positive hit, and only while no dispute is ongoing, every pillar `p`
//! receives `positive_bonus[p]` regardless of which phrase matched. With the
//! reference calibration that is G +8, E +3, S +0.
//!
//! Bonuses adjust pillar totals only. They never offset an individual
//! incident.

use esg_core::{Pillar, Severity};
use esg_rules::ScoringParams;

use crate::context::{ContextFlags, Modifier};
use crate::matcher::Matches;

/// Accumulated penalty, bonus and drivers for one pillar.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PillarTotals {
    pub penalty: u32,
    pub bonus: u32,
    /// Distinct negative keywords, in first-hit order.
    pub drivers: Vec<String>,
}

/// Totals for all three pillars, indexed by [`Pillar::index`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Totals {
    pillars: [PillarTotals; Pillar::COUNT],
}

impl Totals {
    pub fn get(&self, pillar: Pillar) -> &PillarTotals {
        &self.pillars[pillar.index()]
    }

    fn get_mut(&mut self, pillar: Pillar) -> &mut PillarTotals {
        &mut self.pillars[pillar.index()]
    }
}

/// Penalty contributed by one keyword hit under the call's context flags.
pub fn keyword_penalty(
    pillar: Pillar,
    severity: Severity,
    flags: ContextFlags,
    params: &ScoringParams,
) -> u32 {
    let base = u32::from(severity.value()).saturating_mul(params.severity_scale);
    match flags.modifier() {
        // `as` saturates; the discount is validated to [0, 1].
        Modifier::RemediationDiscount => (f64::from(base) * params.remediation_discount).floor() as u32,
        Modifier::DisputeSurcharge => base.saturating_add(params.dispute_surcharge.get(pillar)),
        Modifier::None => base,
    }
}

/// Fold all hits into per-pillar totals.
pub fn aggregate(matches: &Matches, flags: ContextFlags, params: &ScoringParams) -> Totals {
    let mut totals = Totals::default();

    for hit in &matches.negative {
        let penalty = keyword_penalty(hit.pillar, hit.severity, flags, params);
        let entry = totals.get_mut(hit.pillar);
        entry.penalty = entry.penalty.saturating_add(penalty);
        if !entry.drivers.contains(&hit.keyword) {
            entry.drivers.push(hit.keyword.clone());
        }
    }

    if flags.bonuses_allowed() {
        for _ in &matches.positive {
            for &pillar in Pillar::all() {
                let entry = totals.get_mut(pillar);
                entry.bonus = entry.bonus.saturating_add(params.positive_bonus.get(pillar));
            }
        }
    }

    totals
}
