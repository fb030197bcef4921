// crates/rw_algo/src/lib.rs
#![forbid(unsafe_code)]
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

// Core entities re-exported for callers that only link the algorithm layer.
pub use rw_core::{Alternative, Criterion, DecisionGraph, ItemName, RankedItem};

// ----------------------------- Weighting (rank → weight) -----------------------------

pub mod weighting;

pub use weighting::{
    assign_weights, compute_weights, find_n_from_total, reversed_value_from_total,
    validate_rank_set, weight_for_rank, WeightError,
};

// ----------------------------- Criterion cascade ------------------------------------

pub mod cascade;

pub use cascade::{calculate_alternative_weights, calculate_criterion_weight, recompute_criteria};

// ----------------------------- Final scores -----------------------------------------

pub mod aggregate;

pub use aggregate::{aggregate_final_scores, AlternativeTotal, CriterionScore, FinalScores};
