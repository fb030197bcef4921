//! `RankingEngine`: the one owner of a `DecisionGraph`.
//!
//! Every mutating call stages its changes on a copy and commits only when the
//! whole recompute succeeded, so an `Err` always means "nothing changed".

use std::path::Path;

use rw_algo::{
    aggregate_final_scores, calculate_alternative_weights, recompute_criteria, FinalScores,
};
use rw_core::{determinism::sorted_by_rank, Alternative, Criterion, DecisionGraph, RankedItem};
use rw_io::{graph_file::check_structure, LoadResponse, SaveResponse, SavedGraph};
use tracing::{debug, info, trace};

use crate::input::parse_names;
use crate::reorder::{orders_from_sequence, sequence_with_move};
use crate::EngineError;

const CRITERIA_SET: &str = "criteria";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RankingEngine {
    graph: DecisionGraph,
}

impl RankingEngine {
    /// Engine over an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a weighted graph from two newline-delimited name lists.
    pub fn from_input(criteria_text: &str, alternatives_text: &str) -> Result<Self, EngineError> {
        let mut engine = Self::new();
        engine.parse_input(criteria_text, alternatives_text)?;
        Ok(engine)
    }

    /// Wrap an existing graph. Its structure is checked the same way a loaded
    /// file is (dense ranks, unique names, matching alternative sets, value
    /// ranges); stored weights and scores are then trusted as-is.
    pub fn from_graph(graph: DecisionGraph) -> Result<Self, EngineError> {
        let mut engine = Self::new();
        engine.restore(graph)?;
        Ok(engine)
    }

    /// Replace the whole graph from text input.
    pub fn parse_input(&mut self, criteria_text: &str, alternatives_text: &str) -> Result<(), EngineError> {
        let criteria = parse_names(criteria_text)?;
        let alternatives = parse_names(alternatives_text)?;
        let mut graph = DecisionGraph::seed(criteria, alternatives)?;
        recompute_criteria(&mut graph.criteria)?;

        info!(
            criteria = graph.criteria.len(),
            alternatives = graph.alternatives.len(),
            "graph initialized from input"
        );
        self.graph = graph;
        self.log_state();
        Ok(())
    }

    /// Swap in `graph` without recomputing. A graph that fails the structural
    /// checks is rejected and the current one kept.
    pub fn restore(&mut self, graph: DecisionGraph) -> Result<(), EngineError> {
        check_structure(&graph)?;
        self.install(graph);
        Ok(())
    }

    /// Graphs from `rw_io` loads are already checked.
    fn install(&mut self, graph: DecisionGraph) {
        self.graph = graph;
        self.log_state();
    }

    pub fn graph(&self) -> &DecisionGraph {
        &self.graph
    }

    pub fn into_graph(self) -> DecisionGraph {
        self.graph
    }

    pub fn criteria(&self) -> &[Criterion] {
        &self.graph.criteria
    }

    pub fn alternatives(&self) -> &[Alternative] {
        &self.graph.alternatives
    }

    pub fn criterion(&self, name: &str) -> Option<&Criterion> {
        self.graph.criterion(name)
    }

    // ----------------------------- Reorder -----------------------------

    /// Re-rank the criteria from a best-to-worst name sequence and recompute
    /// every criterion weight and every score.
    pub fn reorder_criteria<S: AsRef<str>>(&mut self, sequence: &[S]) -> Result<(), EngineError> {
        let orders = orders_from_sequence(&self.graph.criteria, sequence, CRITERIA_SET)?;

        let mut staged = self.graph.criteria.clone();
        for (c, order) in staged.iter_mut().zip(orders) {
            c.set_order(order);
        }
        recompute_criteria(&mut staged)?;

        self.graph.criteria = staged;
        debug!("criteria reordered");
        self.log_state();
        Ok(())
    }

    /// Re-rank one criterion's alternatives. Other criteria are not touched.
    pub fn reorder_alternatives<S: AsRef<str>>(
        &mut self,
        criterion: &str,
        sequence: &[S],
    ) -> Result<(), EngineError> {
        let mut staged = self.existing_criterion(criterion)?.clone();
        let orders = orders_from_sequence(&staged.alternatives, sequence, criterion)?;
        for (a, order) in staged.alternatives.iter_mut().zip(orders) {
            a.set_order(order);
        }
        calculate_alternative_weights(&mut staged)?;

        if let Some(slot) = self.graph.criterion_mut(criterion) {
            *slot = staged;
        }
        debug!(criterion, "alternatives reordered");
        self.log_state();
        Ok(())
    }

    /// Move one criterion to `to_rank`, shifting the others.
    pub fn move_criterion(&mut self, name: &str, to_rank: u32) -> Result<(), EngineError> {
        let seq = sequence_with_move(&self.graph.criteria, name, to_rank, CRITERIA_SET)?;
        self.reorder_criteria(&seq)
    }

    /// Move one alternative of `criterion` to `to_rank`.
    pub fn move_alternative(&mut self, criterion: &str, name: &str, to_rank: u32) -> Result<(), EngineError> {
        let current = self.existing_criterion(criterion)?;
        let seq = sequence_with_move(&current.alternatives, name, to_rank, criterion)?;
        self.reorder_alternatives(criterion, &seq)
    }

    /// Recompute every weight and score from the current ranks.
    pub fn recompute(&mut self) -> Result<(), EngineError> {
        let mut staged = self.graph.criteria.clone();
        recompute_criteria(&mut staged)?;
        self.graph.criteria = staged;
        Ok(())
    }

    pub fn final_scores(&self) -> FinalScores {
        aggregate_final_scores(&self.graph.criteria)
    }

    fn existing_criterion(&self, name: &str) -> Result<&Criterion, EngineError> {
        self.graph
            .criterion(name)
            .ok_or_else(|| EngineError::UnknownCriterion(name.to_string()))
    }

    // ----------------------------- Persistence -----------------------------

    pub fn save(&self, path: &Path) -> Result<SavedGraph, EngineError> {
        let saved = rw_io::save_graph(path, &self.graph)?;
        debug!(path = %saved.path.display(), "engine state persisted");
        Ok(saved)
    }

    /// Replace the graph with the file at `path`. Returns the graph digest.
    /// On failure the current graph is kept.
    pub fn load(&mut self, path: &Path) -> Result<String, EngineError> {
        let loaded = rw_io::load_graph(path)?;
        self.install(loaded.graph);
        Ok(loaded.sha256)
    }

    /// Dialog-driven save. `None` means the user canceled.
    pub fn handle_save_request(&self, target: Option<&Path>) -> SaveResponse {
        rw_io::handle_save_request(target, &self.graph)
    }

    /// Dialog-driven load. Successful data replaces the graph.
    pub fn handle_load_request(&mut self, source: Option<&Path>) -> LoadResponse {
        let resp = rw_io::handle_load_request(source);
        if let Some(graph) = &resp.data {
            self.install(graph.clone());
        }
        resp
    }

    /// Dump the full graph at trace level.
    pub fn log_state(&self) {
        if !tracing::enabled!(tracing::Level::TRACE) {
            return;
        }
        for c in sorted_by_rank(&self.graph.criteria) {
            trace!(criterion = %c.name, order = c.order, weight = c.weight, "criterion");
            for a in sorted_by_rank(&c.alternatives) {
                trace!(
                    criterion = %c.name,
                    alternative = %a.name,
                    order = a.order,
                    weight = a.weight,
                    score = a.score,
                    "alternative"
                );
            }
        }
    }
}
