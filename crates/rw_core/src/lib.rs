//! rw_core — Core types and ordering helpers for the rank-weight engine.
//!
//! This crate is **I/O-free**. It defines the stable types used across the
//! workspace (`rw_algo`, `rw_io`, `rw_engine`, `rw_report`, `rw_cli`).
//!
//! - `ItemName`: validated display name for criteria and alternatives
//! - Entities: `Alternative`, `Criterion`, `DecisionGraph`
//! - `RankedItem`: the seam shared by both ranked flavors
//! - Deterministic ordering helpers (rank order, final-score order)
//!
//! Serialization derives are gated behind the `serde` feature.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod determinism;
pub mod entities;
pub mod errors;
pub mod tokens;

pub use entities::{Alternative, Criterion, DecisionGraph, RankedItem};
pub use errors::CoreError;
pub use tokens::ItemName;

/// Tolerance used when checking that a sibling set's weights sum to 1.
pub const WEIGHT_SUM_TOLERANCE: f64 = 1e-9;
