// --------------------------------------------------------------------------------
// FILE: crates/rw_algo/src/weighting.rs
// --------------------------------------------------------------------------------
//! Rank-to-weight conversion (the reversal formula).
//!
//! For a sibling set whose ranks are a dense permutation of `1..=N`, the rank
//! sum is `T = N(N+1)/2`. Rank `a` is reversed to `v(a) = N - a + 1` and its
//! weight is `v(a) / T`, so rank 1 gets the largest share and the shares of
//! the whole set sum to 1.
//!
//! `N` is recovered from `T` by solving `N² + N - 2T = 0`. The square root is
//! taken in integers so large sets never suffer float truncation, and a sum
//! that is not triangular is reported instead of silently rounding down.

#![forbid(unsafe_code)]

use alloc::vec;
use alloc::vec::Vec;
use core::fmt;

use rw_core::RankedItem;

/// Errors raised while converting ranks into weights.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum WeightError {
    /// The ranks (or their sum) do not describe a dense `1..=N` permutation.
    /// `count` is the number of ranks supplied, when known.
    InvalidRankSet { total: u64, count: Option<usize> },
    /// A rank lies outside `1..=n` for a set of size `n`.
    RankOutOfRange { rank: u32, n: usize },
}

impl fmt::Display for WeightError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WeightError::InvalidRankSet { total, count: Some(c) } => {
                write!(f, "invalid rank set: {c} ranks summing to {total} are not a permutation of 1..={c}")
            }
            WeightError::InvalidRankSet { total, count: None } => {
                write!(f, "invalid rank set: rank sum {total} is not triangular")
            }
            WeightError::RankOutOfRange { rank, n } => {
                write!(f, "rank {rank} out of range 1..={n}")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for WeightError {}

/// `floor(sqrt(v))` without floats.
fn isqrt(v: u64) -> u64 {
    if v < 2 {
        return v;
    }
    // Newton iteration from an over-estimate converges monotonically downward.
    let mut x = v;
    let mut y = x / 2 + x % 2;
    while y < x {
        x = y;
        y = (x + v / x) / 2;
    }
    x
}

#[inline]
fn triangular(n: u64) -> Option<u64> {
    n.checked_mul(n + 1).map(|p| p / 2)
}

/// Size `N` of the sibling set whose dense ranks sum to `total`.
///
/// `N = floor((-1 + sqrt(1 + 8T)) / 2)`; fails when `total` is not triangular.
pub fn find_n_from_total(total: u64) -> Result<usize, WeightError> {
    let invalid = WeightError::InvalidRankSet { total, count: None };
    let discriminant = total
        .checked_mul(8)
        .and_then(|x| x.checked_add(1))
        .ok_or(invalid)?;
    let n = (isqrt(discriminant) - 1) / 2;
    if triangular(n) != Some(total) {
        return Err(invalid);
    }
    usize::try_from(n).map_err(|_| invalid)
}

/// Reversed value `v(a) = N - a + 1` for rank `a` in the set summing to `total`.
pub fn reversed_value_from_total(total: u64, rank: u32) -> Result<u64, WeightError> {
    let n = find_n_from_total(total)?;
    if rank < 1 || rank as usize > n {
        return Err(WeightError::RankOutOfRange { rank, n });
    }
    Ok(n as u64 - u64::from(rank) + 1)
}

/// Normalized weight `v(a) / T` of rank `a`.
pub fn weight_for_rank(total: u64, rank: u32) -> Result<f64, WeightError> {
    let v = reversed_value_from_total(total, rank)?;
    Ok(v as f64 / total as f64)
}

/// Check that `orders` is a dense permutation of `1..=orders.len()` and return
/// its rank sum. Catches duplicate ranks even when the sum happens to be
/// triangular (e.g. `[2, 2, 2]`).
pub fn validate_rank_set(orders: &[u32]) -> Result<u64, WeightError> {
    let n = orders.len();
    let total: u64 = orders.iter().map(|&o| u64::from(o)).sum();
    let invalid = WeightError::InvalidRankSet { total, count: Some(n) };

    let mut seen = vec![false; n];
    for &o in orders {
        let idx = (o as usize).checked_sub(1).ok_or(invalid)?;
        match seen.get_mut(idx) {
            Some(slot) if !*slot => *slot = true,
            _ => return Err(invalid),
        }
    }
    Ok(total)
}

/// Weights for `orders`, positionally aligned with the input.
pub fn compute_weights(orders: &[u32]) -> Result<Vec<f64>, WeightError> {
    let total = validate_rank_set(orders)?;
    orders.iter().map(|&o| weight_for_rank(total, o)).collect()
}

/// Recompute the weight of every item in a sibling set. Nothing is written
/// unless every weight could be computed.
pub fn assign_weights<T: RankedItem>(items: &mut [T]) -> Result<(), WeightError> {
    let orders: Vec<u32> = items.iter().map(|i| i.order()).collect();
    let weights = compute_weights(&orders)?;
    for (item, w) in items.iter_mut().zip(weights) {
        item.set_weight(w);
    }
    Ok(())
}
