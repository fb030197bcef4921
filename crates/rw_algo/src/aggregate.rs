// --------------------------------------------------------------------------------
// FILE: crates/rw_algo/src/aggregate.rs
// --------------------------------------------------------------------------------
//! Final score aggregation.
//!
//! For every alternative name seen under any criterion, collect its score under
//! each criterion (criterion iteration order) and sum them. Entries come back
//! ordered by total descending; equal totals are ordered by name so the output
//! does not depend on iteration order.

#![forbid(unsafe_code)]

use alloc::collections::BTreeMap;
use alloc::vec::Vec;

use rw_core::{determinism::cmp_totals_desc, Criterion, ItemName};

/// One alternative's contribution under one criterion.
#[derive(Clone, Debug, PartialEq)]
pub struct CriterionScore {
    pub criterion: ItemName,
    pub score: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct AlternativeTotal {
    pub name: ItemName,
    /// Per-criterion scores, in criterion iteration order.
    pub scores: Vec<CriterionScore>,
    pub total: f64,
}

impl AlternativeTotal {
    pub fn score_for(&self, criterion: &str) -> Option<f64> {
        self.scores.iter().find(|s| s.criterion == criterion).map(|s| s.score)
    }
}

/// Aggregated totals in final ranking order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FinalScores {
    entries: Vec<AlternativeTotal>,
}

impl FinalScores {
    pub fn entries(&self) -> &[AlternativeTotal] {
        &self.entries
    }

    pub fn get(&self, name: &str) -> Option<&AlternativeTotal> {
        self.entries.iter().find(|e| e.name == name)
    }

    /// Largest total (0 when empty); used to scale bar charts.
    pub fn max_total(&self) -> f64 {
        self.entries.iter().map(|e| e.total).fold(0.0, f64::max)
    }

    pub fn iter(&self) -> impl Iterator<Item = &AlternativeTotal> {
        self.entries.iter()
    }
}

pub fn aggregate_final_scores(criteria: &[Criterion]) -> FinalScores {
    let mut index: BTreeMap<&str, usize> = BTreeMap::new();
    let mut entries: Vec<AlternativeTotal> = Vec::new();

    for criterion in criteria {
        for alt in &criterion.alternatives {
            let slot = *index.entry(alt.name.as_str()).or_insert_with(|| {
                entries.push(AlternativeTotal {
                    name: alt.name.clone(),
                    scores: Vec::with_capacity(criteria.len()),
                    total: 0.0,
                });
                entries.len() - 1
            });
            let entry = &mut entries[slot];
            entry.scores.push(CriterionScore {
                criterion: criterion.name.clone(),
                score: alt.score,
            });
            entry.total += alt.score;
        }
    }

    // Totals are compared on a fixed grid, so float noise cannot split a tie;
    // names are unique, so (grid total, name) is a total order.
    entries.sort_by(|a, b| cmp_totals_desc(a.total, &a.name, b.total, &b.name));
    FinalScores { entries }
}
