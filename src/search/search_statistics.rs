use crate::search::HeuristicValue;
use ordered_float::Float;
use serde::{Deserialize, Serialize};
use std::time::Instant;
use tracing::info;

/// Search effort counters handed back to the caller once a search is over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SearchMetrics {
    /// Nodes created, the root included
    pub nodes_generated: u64,
    /// Nodes popped from the frontier
    pub nodes_expanded: u64,
    /// Largest frontier size observed
    pub max_frontier_size: u64,
    /// Iterations of the main loop
    pub iterations: u64,
    /// Open nodes replaced by a cheaper path to the same key
    pub relaxed_nodes: u64,
    /// Generated nodes dropped because their key was already expanded or
    /// already open with a cost at least as low
    pub discarded_nodes: u64,
    /// Edges on which the heuristic was found to be inconsistent, only counted
    /// when the consistency check is switched on
    pub consistency_violations: u64,
}

#[derive(Debug)]
pub struct SearchStatistics {
    metrics: SearchMetrics,
    /// Best heuristic value found so far
    best_heuristic_value: HeuristicValue,
    /// Time when the search started
    search_start_time: Instant,
    /// Time when the last log was printed, used for periodic logging
    last_log_time: Instant,
}

impl Default for SearchStatistics {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchStatistics {
    pub fn new() -> Self {
        info!("starting search");
        Self {
            metrics: SearchMetrics::default(),
            best_heuristic_value: HeuristicValue::infinity(),
            search_start_time: Instant::now(),
            last_log_time: Instant::now(),
        }
    }

    pub fn register_heuristic_value(&mut self, heuristic_value: HeuristicValue) {
        if heuristic_value < self.best_heuristic_value {
            self.best_heuristic_value = heuristic_value;
            info!(best_heuristic_value = self.best_heuristic_value.into_inner());
            self.last_log_time = Instant::now();
            self.log();
        }
    }

    pub fn increment_iterations(&mut self) {
        self.metrics.iterations += 1;
    }

    pub fn increment_expanded_nodes(&mut self) {
        self.metrics.nodes_expanded += 1;
        self.log_if_needed();
    }

    pub fn increment_generated_nodes(&mut self, num_nodes: usize) {
        self.metrics.nodes_generated += num_nodes as u64;
        self.log_if_needed();
    }

    pub fn increment_relaxed_nodes(&mut self) {
        self.metrics.relaxed_nodes += 1;
    }

    pub fn increment_discarded_nodes(&mut self) {
        self.metrics.discarded_nodes += 1;
    }

    pub fn increment_consistency_violations(&mut self) {
        self.metrics.consistency_violations += 1;
    }

    pub fn register_frontier_size(&mut self, frontier_size: usize) {
        self.metrics.max_frontier_size = self.metrics.max_frontier_size.max(frontier_size as u64);
    }

    pub fn metrics(&self) -> SearchMetrics {
        self.metrics
    }

    fn log_if_needed(&mut self) {
        if self.last_log_time.elapsed().as_secs() > 10 {
            self.last_log_time = Instant::now();
            self.log();
        }
    }

    fn log(&self) {
        info!(
            nodes_expanded = self.metrics.nodes_expanded,
            nodes_generated = self.metrics.nodes_generated,
            max_frontier_size = self.metrics.max_frontier_size,
            relaxed_nodes = self.metrics.relaxed_nodes,
            discarded_nodes = self.metrics.discarded_nodes,
            best_heuristic_value = self.best_heuristic_value.into_inner(),
        );
    }

    pub fn finalise_search(&self) {
        info!("finalising search");
        self.log();
        if self.metrics.consistency_violations > 0 {
            info!(consistency_violations = self.metrics.consistency_violations);
        }
        info!(search_duration = self.search_start_time.elapsed().as_secs_f64());
    }
}
