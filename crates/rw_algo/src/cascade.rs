// --------------------------------------------------------------------------------
// FILE: crates/rw_algo/src/cascade.rs
// --------------------------------------------------------------------------------
//! Criterion weight + cascade.
//!
//! A criterion's weight comes from its rank among sibling criteria. Each of its
//! alternatives gets a weight from its rank *within that criterion* (the rank
//! sum is per criterion), and a score `alt.weight × criterion.weight`.
//!
//! Every entry point stages the new values on a copy and commits only once all
//! of them were computed, so callers never observe a criterion weight without
//! the matching alternative scores.

#![forbid(unsafe_code)]

use alloc::vec::Vec;

use rw_core::Criterion;

use crate::weighting::{assign_weights, validate_rank_set, weight_for_rank, WeightError};

/// Recompute `criterion.weight` from `total_order_sum` (rank sum across sibling
/// criteria), then its alternatives' weights and scores.
pub fn calculate_criterion_weight(
    criterion: &mut Criterion,
    total_order_sum: u64,
) -> Result<(), WeightError> {
    let mut staged = criterion.clone();
    staged.weight = weight_for_rank(total_order_sum, staged.order)?;
    calculate_alternative_weights(&mut staged)?;
    *criterion = staged;
    Ok(())
}

/// Recompute the alternatives' weights from their ranks within `criterion`
/// and refresh their scores against the criterion's current weight.
pub fn calculate_alternative_weights(criterion: &mut Criterion) -> Result<(), WeightError> {
    // writes nothing on error
    assign_weights(&mut criterion.alternatives)?;
    let criterion_weight = criterion.weight;
    for alt in criterion.alternatives.iter_mut() {
        alt.calculate_score(criterion_weight);
    }
    Ok(())
}

/// Recompute every criterion (weights, then cascaded alternative weights and
/// scores). The criteria ranks must be a dense permutation; on any error the
/// slice is left untouched.
pub fn recompute_criteria(criteria: &mut [Criterion]) -> Result<(), WeightError> {
    let orders: Vec<u32> = criteria.iter().map(|c| c.order).collect();
    let total = validate_rank_set(&orders)?;

    let mut staged: Vec<Criterion> = criteria.to_vec();
    for c in staged.iter_mut() {
        calculate_criterion_weight(c, total)?;
    }
    criteria.clone_from_slice(&staged);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rw_core::DecisionGraph;

    fn graph(criteria: &[&str], alternatives: &[&str]) -> DecisionGraph {
        DecisionGraph::seed(
            criteria.iter().map(|s| s.parse().unwrap()).collect(),
            alternatives.iter().map(|s| s.parse().unwrap()).collect(),
        )
        .unwrap()
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn cascade_sets_weights_and_scores() {
        let mut g = graph(&["Cost", "Quality"], &["A", "B"]);
        recompute_criteria(&mut g.criteria).unwrap();

        let cost = &g.criteria[0];
        assert!(close(cost.weight, 2.0 / 3.0));
        assert!(close(cost.alternatives[0].weight, 2.0 / 3.0));
        assert!(close(cost.alternatives[0].score, 4.0 / 9.0));
        assert!(close(cost.alternatives[1].score, 2.0 / 9.0));

        let quality = &g.criteria[1];
        assert!(close(quality.weight, 1.0 / 3.0));
        assert!(close(quality.alternatives[1].score, 1.0 / 9.0));
    }

    #[test]
    fn alternative_rank_sum_is_per_criterion() {
        let mut g = graph(&["Cost"], &["A", "B", "C"]);
        g.criteria[0].weight = 1.0;
        g.criteria[0].alternatives[0].order = 3;
        g.criteria[0].alternatives[2].order = 1;
        calculate_alternative_weights(&mut g.criteria[0]).unwrap();
        let w: Vec<f64> = g.criteria[0].alternatives.iter().map(|a| a.weight).collect();
        assert!(close(w[0], 1.0 / 6.0) && close(w[1], 2.0 / 6.0) && close(w[2], 3.0 / 6.0));
        assert!(close(g.criteria[0].alternatives[2].score, 0.5));
    }

    #[test]
    fn invalid_alternative_ranks_leave_criterion_untouched() {
        let mut g = graph(&["Cost", "Quality"], &["A", "B"]);
        recompute_criteria(&mut g.criteria).unwrap();
        let before = g.criteria.clone();

        g.criteria[1].alternatives[0].order = 2; // duplicate rank 2
        let broken = g.criteria[1].clone();
        let err = recompute_criteria(&mut g.criteria).unwrap_err();
        assert_eq!(err, WeightError::InvalidRankSet { total: 4, count: Some(2) });
        assert_eq!(g.criteria[0], before[0]);
        assert_eq!(g.criteria[1], broken);
    }

    #[test]
    fn criterion_rank_outside_total_is_reported() {
        let mut g = graph(&["Cost"], &["A"]);
        let before = g.criteria[0].clone();
        let err = calculate_criterion_weight(&mut g.criteria[0], 0).unwrap_err();
        assert_eq!(err, WeightError::RankOutOfRange { rank: 1, n: 0 });
        assert_eq!(g.criteria[0], before);
    }

    #[test]
    fn empty_sets_are_fine() {
        let mut g = graph(&["Cost"], &[]);
        recompute_criteria(&mut g.criteria).unwrap();
        assert!(close(g.criteria[0].weight, 1.0));
        let mut none: Vec<Criterion> = Vec::new();
        assert!(recompute_criteria(&mut none).is_ok());
    }
}
