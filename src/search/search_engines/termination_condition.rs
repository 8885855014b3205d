use crate::search::search_engines::SearchResult;
use memory_stats::memory_stats;
use std::time::{Duration, Instant};
use tracing::{info, warn};

/// Bounds the work of a search by counting main loop iterations. This is the
/// only way a search can be cut short; there is no time limit and no
/// external cancellation. A limit of zero stops the search before the first
/// expansion.
#[derive(Debug)]
pub struct TerminationCondition {
    iteration_limit: usize,
    iterations: usize,
    start_time: Instant,
    peak_memory_usage_mb: Option<usize>,
    last_log_time: Instant,
}

impl TerminationCondition {
    pub fn new(iteration_limit: usize) -> Self {
        info!(iteration_limit = iteration_limit);
        Self {
            iteration_limit,
            iterations: 0,
            start_time: Instant::now(),
            peak_memory_usage_mb: None,
            last_log_time: Instant::now(),
        }
    }

    /// Count one iteration of the main loop.
    pub fn tick(&mut self) {
        self.iterations += 1;
        self.log_if_needed();
    }

    pub fn iterations(&self) -> usize {
        self.iterations
    }

    pub fn log_if_needed(&mut self) {
        if self.last_log_time.elapsed() > Duration::from_secs(10) {
            self.last_log_time = Instant::now();
            self.log();
        }
    }

    pub fn log(&mut self) {
        let memory_usage = memory_stats().map(|usage| usage.physical_mem / 1024 / 1024);
        self.peak_memory_usage_mb = self.peak_memory_usage_mb.max(memory_usage);
        info!(
            iterations = self.iterations,
            memory_usage_mb = memory_usage,
            time_elapsed = self.start_time.elapsed().as_secs_f64(),
        );
    }

    pub fn finalise(&mut self) {
        info!(
            iterations = self.iterations,
            peak_recorded_memory_usage_mb = self.peak_memory_usage_mb,
            total_time_used = self.start_time.elapsed().as_secs_f64(),
        );
    }

    /// Whether the search has to stop before running another iteration.
    pub fn should_terminate<S>(&self) -> Option<SearchResult<S>> {
        if self.iterations >= self.iteration_limit {
            warn!(
                iteration_limit = self.iteration_limit,
                "iteration limit reached, stopping search"
            );
            return Some(SearchResult::IterationLimitReached);
        }
        None
    }
}
