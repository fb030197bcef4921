//! Decision entities: criteria, alternatives, and the graph that owns them.
//!
//! `weight` and `score` are cached derived values. This crate only stores
//! them; `rw_algo` is the sole writer during recomputation, and `rw_io`
//! restores them verbatim on load.

use alloc::collections::BTreeSet;
use alloc::vec::Vec;

use crate::errors::CoreError;
use crate::tokens::ItemName;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Shared shape of a ranked sibling: a named item with a 1-based rank and a
/// weight derived from that rank.
pub trait RankedItem {
    fn name(&self) -> &ItemName;
    fn order(&self) -> u32;
    fn set_order(&mut self, order: u32);
    fn weight(&self) -> f64;
    fn set_weight(&mut self, weight: f64);
}

/// Alternative-level item. Inside a criterion it is an independent copy of
/// the global template; `score = weight × criterion.weight`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Alternative {
    pub name: ItemName,
    pub order: u32,
    pub weight: f64,
    pub score: f64,
}

impl Alternative {
    pub fn new(name: ItemName, order: u32) -> Self {
        Self { name, order, weight: 0.0, score: 0.0 }
    }

    #[inline]
    pub fn calculate_score(&mut self, criterion_weight: f64) {
        self.score = self.weight * criterion_weight;
    }
}

impl RankedItem for Alternative {
    fn name(&self) -> &ItemName { &self.name }
    fn order(&self) -> u32 { self.order }
    fn set_order(&mut self, order: u32) { self.order = order; }
    fn weight(&self) -> f64 { self.weight }
    fn set_weight(&mut self, weight: f64) { self.weight = weight; }
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Criterion {
    pub name: ItemName,
    pub order: u32,
    pub weight: f64,
    pub alternatives: Vec<Alternative>,
}

impl Criterion {
    pub fn new(name: ItemName, order: u32) -> Self {
        Self { name, order, weight: 0.0, alternatives: Vec::new() }
    }

    pub fn add_alternative(&mut self, alternative: Alternative) {
        self.alternatives.push(alternative);
    }

    pub fn alternative(&self, name: &str) -> Option<&Alternative> {
        self.alternatives.iter().find(|a| a.name == name)
    }
}

impl RankedItem for Criterion {
    fn name(&self) -> &ItemName { &self.name }
    fn order(&self) -> u32 { self.order }
    fn set_order(&mut self, order: u32) { self.order = order; }
    fn weight(&self) -> f64 { self.weight }
    fn set_weight(&mut self, weight: f64) { self.weight = weight; }
}

/// The whole entity graph: ranked criteria, each holding its own copy of every
/// alternative, plus the global alternative templates used to seed them.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DecisionGraph {
    pub criteria: Vec<Criterion>,
    pub alternatives: Vec<Alternative>,
}

impl DecisionGraph {
    /// Build an unweighted graph from names in entry order (first = rank 1).
    /// Every criterion receives a fresh copy of every alternative.
    pub fn seed(
        criteria: Vec<ItemName>,
        alternatives: Vec<ItemName>,
    ) -> Result<Self, CoreError> {
        ensure_unique(&criteria)?;
        ensure_unique(&alternatives)?;

        let alternatives: Vec<Alternative> = alternatives
            .into_iter()
            .zip(1u32..)
            .map(|(name, order)| Alternative::new(name, order))
            .collect();

        let criteria = criteria
            .into_iter()
            .zip(1u32..)
            .map(|(name, order)| {
                let mut c = Criterion::new(name, order);
                for alt in &alternatives {
                    c.add_alternative(Alternative::new(alt.name.clone(), alt.order));
                }
                c
            })
            .collect();

        Ok(Self { criteria, alternatives })
    }

    pub fn criterion(&self, name: &str) -> Option<&Criterion> {
        self.criteria.iter().find(|c| c.name == name)
    }

    pub fn criterion_mut(&mut self, name: &str) -> Option<&mut Criterion> {
        self.criteria.iter_mut().find(|c| c.name == name)
    }
}

/// Reject the first repeated name in `names`.
pub fn ensure_unique<'a, I>(names: I) -> Result<(), CoreError>
where
    I: IntoIterator<Item = &'a ItemName>,
{
    let mut seen = BTreeSet::new();
    for n in names {
        if !seen.insert(n.as_str()) {
            return Err(CoreError::DuplicateName(n.as_str().into()));
        }
    }
    Ok(())
}
