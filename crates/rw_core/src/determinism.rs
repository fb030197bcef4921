//! Stable ordering helpers.
//!
//! Collections keep entry order; rank order is a view computed on demand.

use alloc::vec::Vec;
use core::cmp::Ordering;

use crate::entities::RankedItem;
use crate::tokens::ItemName;
use crate::WEIGHT_SUM_TOLERANCE;

/// Compare by `order`, then by name (byte order).
#[inline]
pub fn cmp_by_rank<T: RankedItem>(a: &T, b: &T) -> Ordering {
    match a.order().cmp(&b.order()) {
        Ordering::Equal => a.name().as_str().cmp(b.name().as_str()),
        o => o,
    }
}

/// Borrow `items` in rank order without touching the underlying collection.
pub fn sorted_by_rank<T: RankedItem>(items: &[T]) -> Vec<&T> {
    let mut v: Vec<&T> = items.iter().collect();
    v.sort_by(|a, b| cmp_by_rank(*a, *b));
    v
}

/// Totals snapped to a `WEIGHT_SUM_TOLERANCE` grid (round half up).
///
/// Sums of products of rank weights carry float noise: two alternatives whose
/// exact totals are equal can end up one ULP apart. On the grid they compare
/// equal. Totals are never negative.
#[inline]
pub fn total_key(total: f64) -> i64 {
    (total / WEIGHT_SUM_TOLERANCE + 0.5) as i64
}

/// Final ranking order: higher total first; equal totals fall back to name
/// ascending so the result never depends on iteration order.
#[inline]
pub fn cmp_totals_desc(a_total: f64, a_name: &ItemName, b_total: f64, b_name: &ItemName) -> Ordering {
    match total_key(b_total).cmp(&total_key(a_total)) {
        Ordering::Equal => a_name.as_str().cmp(b_name.as_str()),
        o => o,
    }
}
