//! rw_engine — the `RankingEngine` orchestrator.
//!
//! The engine owns one `DecisionGraph` and is the only place where it is
//! mutated: initialization from text, reorder requests, and loads. Math lives
//! in `rw_algo`, persistence in `rw_io`; this crate wires them together and
//! keeps every transition all-or-nothing.

#![forbid(unsafe_code)]

use rw_algo::WeightError;
use rw_core::CoreError;
use rw_io::IoError;
use thiserror::Error;

pub mod engine;
pub mod input;
pub mod reorder;

pub use engine::RankingEngine;
pub use input::parse_names;
pub use rw_algo::{AlternativeTotal, CriterionScore, FinalScores};
pub use rw_io::{LoadResponse, SaveResponse};

/// Single error surface for engine operations.
#[derive(Debug, Error)]
pub enum EngineError {
    /// Rank set or rank lookup failed during recomputation.
    #[error(transparent)]
    Weight(#[from] WeightError),

    /// Load or save failed.
    #[error(transparent)]
    Io(#[from] IoError),

    /// Invalid or duplicate item name.
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("unknown criterion: {0}")]
    UnknownCriterion(String),

    #[error("unknown item in {set}: {name}")]
    UnknownItem { set: String, name: String },

    /// A reorder sequence is not a permutation of the current sibling names.
    #[error("not a permutation of {set}: {reason}")]
    NotAPermutation { set: String, reason: String },
}
