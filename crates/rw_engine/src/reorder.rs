//! Turning reorder requests into rank vectors.
//!
//! A request names the items of one sibling set from best to worst. Items keep
//! their position in storage; only their `order` changes.

use rw_algo::WeightError;
use rw_core::{determinism::sorted_by_rank, ItemName, RankedItem};

use crate::EngineError;

/// Ranks aligned with `items` positions for a best-to-worst `sequence` of names.
pub fn orders_from_sequence<T, S>(items: &[T], sequence: &[S], set: &str) -> Result<Vec<u32>, EngineError>
where
    T: RankedItem,
    S: AsRef<str>,
{
    let not_perm = |reason: String| EngineError::NotAPermutation { set: set.to_string(), reason };

    if sequence.len() != items.len() {
        return Err(not_perm(format!("expected {} names, got {}", items.len(), sequence.len())));
    }

    let mut orders: Vec<Option<u32>> = vec![None; items.len()];
    for (rank, name) in (1u32..).zip(sequence) {
        let name = name.as_ref();
        let idx = items
            .iter()
            .position(|i| i.name() == name)
            .ok_or_else(|| not_perm(format!("unknown name {name:?}")))?;
        if orders[idx].replace(rank).is_some() {
            return Err(not_perm(format!("{name:?} listed twice")));
        }
    }
    // Lengths match and no slot was filled twice, so every slot is filled.
    Ok(orders.into_iter().flatten().collect())
}

/// Best-to-worst names after moving `name` to `to_rank` (1-based), the way a
/// drag-and-drop list would.
pub fn sequence_with_move<T: RankedItem>(
    items: &[T],
    name: &str,
    to_rank: u32,
    set: &str,
) -> Result<Vec<ItemName>, EngineError> {
    let mut seq: Vec<ItemName> = sorted_by_rank(items).into_iter().map(|i| i.name().clone()).collect();
    let from = seq.iter().position(|n| n == name).ok_or_else(|| EngineError::UnknownItem {
        set: set.to_string(),
        name: name.to_string(),
    })?;
    if to_rank < 1 || to_rank as usize > seq.len() {
        return Err(WeightError::RankOutOfRange { rank: to_rank, n: seq.len() }.into());
    }
    let moved = seq.remove(from);
    seq.insert(to_rank as usize - 1, moved);
    Ok(seq)
}
