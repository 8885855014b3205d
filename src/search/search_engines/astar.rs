//! A* search with duplicate detection and no reopening of closed states.

use crate::search::{
    search_engines::{AStarConfig, SearchEngine, SearchResult, TerminationCondition},
    Frontier, Heuristic, HeuristicValue, SearchMetrics, SearchProblem, SearchSpace,
    SearchStatistics,
};
use std::collections::HashSet;
use tracing::{debug, info, trace, warn};

/// A* over an arbitrary [`SearchProblem`].
///
/// The open list holds one node per canonical key. A child whose key is
/// already open replaces the open node only if it was reached more cheaply.
/// A child whose key has already been expanded is dropped, even if it is
/// cheaper than the expanded node, so returned paths are optimal only for
/// consistent heuristics.
#[derive(Debug, Clone, Default)]
pub struct AStar {
    config: AStarConfig,
}

impl AStar {
    pub fn new(config: AStarConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AStarConfig {
        &self.config
    }
}

impl SearchEngine for AStar {
    fn search<P, H>(
        &mut self,
        problem: &P,
        heuristic: &mut H,
    ) -> (SearchResult<P::State>, SearchStatistics)
    where
        P: SearchProblem,
        H: Heuristic<P::State> + ?Sized,
    {
        let mut statistics = SearchStatistics::new();
        let mut termination_condition = TerminationCondition::new(self.config.iteration_limit);

        let initial_state = problem.initial_state();
        let initial_h = heuristic.evaluate(&initial_state);
        let root_key = problem.canonical_key(&initial_state);
        debug!(initial_heuristic_value = initial_h.into_inner());

        let mut search_space: SearchSpace<P::State, P::Action> =
            SearchSpace::new(initial_state, initial_h);
        let mut frontier = Frontier::new();
        let mut explored: HashSet<P::Key> = HashSet::new();

        let root_id = search_space.get_root_id();
        frontier.push(root_key, root_id, initial_h, initial_h);
        statistics.increment_generated_nodes(1);
        statistics.register_frontier_size(frontier.len());

        let result = loop {
            if frontier.is_empty() {
                break SearchResult::ProvablyUnsolvable;
            }
            if let Some(result) = termination_condition.should_terminate() {
                break result;
            }
            termination_condition.tick();
            statistics.increment_iterations();

            let Some((key, node_id)) = frontier.pop() else {
                break SearchResult::ProvablyUnsolvable;
            };
            statistics.increment_expanded_nodes();

            let node = search_space.get_node(node_id);
            let g_value = node.get_g();
            let h_value = node.get_h();
            statistics.register_heuristic_value(h_value);

            let state = search_space.get_state(node_id);
            if problem.is_goal(state) {
                info!(plan_cost = g_value.into_inner(), "goal found");
                break SearchResult::Success(search_space.extract_path(node_id));
            }
            explored.insert(key);

            // Successors are generated in full before any of them is stored,
            // so the borrow of the parent state ends here.
            let (transitions, successors): (Vec<_>, Vec<_>) = problem
                .actions(state)
                .into_iter()
                .map(|action| {
                    let cost = problem.action_cost(state, &action);
                    let successor = problem.apply(state, &action);
                    ((action, cost), successor)
                })
                .unzip();
            let h_values = heuristic.evaluate_batch(&successors);

            for (((action, cost), successor), child_h) in transitions
                .into_iter()
                .zip(successors)
                .zip(h_values)
            {
                statistics.increment_generated_nodes(1);
                if self.config.check_consistency {
                    check_consistency(h_value, cost, child_h, &mut statistics);
                }

                let child_key = problem.canonical_key(&successor);
                if explored.contains(&child_key) {
                    statistics.increment_discarded_nodes();
                    continue;
                }

                let child_g = g_value + cost;
                let child_f = child_g + child_h;
                match frontier.get(&child_key) {
                    Some(open_id) => {
                        if child_g < search_space.get_node(open_id).get_g() {
                            let child_id = search_space
                                .insert_node(successor, action, node_id, child_g, child_h);
                            frontier.relax(&child_key, child_id, child_f, child_h);
                            statistics.increment_relaxed_nodes();
                        } else {
                            statistics.increment_discarded_nodes();
                        }
                    }
                    None => {
                        let child_id =
                            search_space.insert_node(successor, action, node_id, child_g, child_h);
                        frontier.push(child_key, child_id, child_f, child_h);
                    }
                }
            }

            statistics.register_frontier_size(frontier.len());
            trace_expansion(
                self.config.verbose,
                g_value,
                h_value,
                frontier.len(),
                explored.len(),
            );
        };

        statistics.finalise_search();
        termination_condition.finalise();
        (result, statistics)
    }
}

fn check_consistency(
    parent_h: HeuristicValue,
    cost: HeuristicValue,
    child_h: HeuristicValue,
    statistics: &mut SearchStatistics,
) {
    if parent_h > cost + child_h {
        if statistics.metrics().consistency_violations == 0 {
            warn!(
                parent_h = parent_h.into_inner(),
                action_cost = cost.into_inner(),
                child_h = child_h.into_inner(),
                "heuristic is inconsistent, returned paths may be suboptimal"
            );
        }
        statistics.increment_consistency_violations();
    }
}

fn trace_expansion(
    verbose: bool,
    g: HeuristicValue,
    h: HeuristicValue,
    frontier_size: usize,
    explored_size: usize,
) {
    let f = g + h;
    if verbose {
        info!(
            g = g.into_inner(),
            h = h.into_inner(),
            f = f.into_inner(),
            frontier_size,
            explored_size,
            "expanded node"
        );
    } else {
        trace!(
            g = g.into_inner(),
            h = h.into_inner(),
            f = f.into_inner(),
            frontier_size,
            explored_size,
            "expanded node"
        );
    }
}

/// Run A* on `problem` with at most `iteration_limit` expansions.
///
/// Returns the outcome together with the search effort. The outcome tells a
/// search that ran out of iterations apart from one that proved the goal
/// unreachable; use [`SearchResult::path`] when only the path matters.
pub fn search<P, H>(
    problem: &P,
    heuristic: &mut H,
    iteration_limit: usize,
    verbose: bool,
) -> (SearchResult<P::State>, SearchMetrics)
where
    P: SearchProblem,
    H: Heuristic<P::State> + ?Sized,
{
    let mut engine = AStar::new(AStarConfig {
        iteration_limit,
        verbose,
        ..Default::default()
    });
    let (result, statistics) = engine.search(problem, heuristic);
    (result, statistics.metrics())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::{validate_path, ZeroHeuristic};
    use crate::test_utils::*;
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn initial_goal_is_returned_without_expansion() {
        let problem = LineProblem::new(5, 5, &[1, 2], 5);
        let (result, metrics) = search(&problem, &mut HalfDistance::new(5), 100, false);

        assert_eq!(result, SearchResult::Success(vec![5]));
        assert_eq!(metrics.nodes_generated, 1);
        assert_eq!(metrics.nodes_expanded, 1);
        assert_eq!(metrics.max_frontier_size, 1);
    }

    #[test]
    fn finds_shortest_path_on_line() {
        let problem = LineProblem::new(0, 5, &[1, 2], 5);
        let (result, metrics) = search(&problem, &mut HalfDistance::new(5), 100, false);

        let path = result.path().expect("the goal is reachable");
        assert_eq!(path.first(), Some(&0));
        assert_eq!(path.last(), Some(&5));
        assert_eq!(result.steps(), Some(3));
        assert!(validate_path(&problem, path).is_ok());
        assert!(metrics.nodes_expanded <= metrics.nodes_generated);
        assert!(metrics.max_frontier_size >= 1);
    }

    #[test]
    fn unreachable_goal_exhausts_reachable_states() {
        // Odd states only, the goal is even.
        let problem = LineProblem::new(1, 4, &[2], 9);
        let (result, metrics) = search(&problem, &mut ZeroHeuristic::new(), 100, false);

        assert_eq!(result, SearchResult::ProvablyUnsolvable);
        assert_eq!(result.path(), None);
        // 1, 3, 5, 7 and 9
        assert_eq!(metrics.nodes_expanded, 5);
        assert_eq!(metrics.iterations, 5);
        assert!(metrics.nodes_expanded <= metrics.nodes_generated);
    }

    #[test]
    fn iteration_limit_stops_search() {
        let problem = LineProblem::new(0, 5, &[1, 2], 5);
        let (result, metrics) = search(&problem, &mut HalfDistance::new(5), 1, false);

        assert_eq!(result, SearchResult::IterationLimitReached);
        assert_eq!(metrics.nodes_expanded, 1);
        assert_eq!(metrics.nodes_generated, 3);
    }

    #[test]
    fn zero_iteration_limit_expands_nothing() {
        let problem = LineProblem::new(0, 5, &[1, 2], 5);
        let (result, metrics) = search(&problem, &mut HalfDistance::new(5), 0, false);

        assert_eq!(result, SearchResult::IterationLimitReached);
        assert_eq!(metrics.nodes_expanded, 0);
        assert_eq!(metrics.nodes_generated, 1);
    }

    #[test]
    fn cheaper_path_replaces_open_node() {
        // s -> x is expensive, s -> a -> x is cheap, x -> g finishes.
        let problem = GraphProblem::new(
            "s",
            "g",
            &[("s", "x", 5.), ("s", "a", 1.), ("a", "x", 1.), ("x", "g", 1.)],
        );
        let (result, metrics) = search(&problem, &mut ZeroHeuristic::new(), 100, false);

        let path = result.into_path().expect("g is reachable");
        assert_eq!(path, vec!["s", "a", "x", "g"]);
        assert_approx_eq!(problem.path_cost(&path), 3.);
        assert_eq!(metrics.relaxed_nodes, 1);
        // x was open twice but only ever held one frontier slot
        assert_eq!(metrics.max_frontier_size, 2);
    }

    #[test]
    fn not_cheaper_duplicate_is_discarded() {
        let problem = GraphProblem::new(
            "s",
            "g",
            &[("s", "x", 1.), ("s", "a", 1.), ("a", "x", 1.), ("x", "g", 5.)],
        );
        let (result, metrics) = search(&problem, &mut ZeroHeuristic::new(), 100, false);

        assert_eq!(result.into_path(), Some(vec!["s", "x", "g"]));
        assert_eq!(metrics.relaxed_nodes, 0);
        assert!(metrics.discarded_nodes >= 1);
    }

    #[test]
    fn expanded_states_are_never_reopened() {
        // The heuristic is admissible but inconsistent on a -> b, which
        // delays a until b is closed. The cheaper path to b through a is then
        // dropped and the returned path is one unit more expensive than the
        // optimum s -> a -> b -> g.
        let problem = GraphProblem::new(
            "s",
            "g",
            &[("s", "a", 1.), ("s", "b", 3.), ("a", "b", 1.), ("b", "g", 20.)],
        );
        let mut heuristic = TableHeuristic::new(&[("a", 10.)]);
        let mut engine = AStar::new(AStarConfig {
            iteration_limit: 100,
            check_consistency: true,
            ..Default::default()
        });
        let (result, statistics) = engine.search(&problem, &mut heuristic);

        let path = result.into_path().expect("g is reachable");
        assert_eq!(path, vec!["s", "b", "g"]);
        assert_approx_eq!(problem.path_cost(&path), 23.);
        assert!(problem.path_cost(&path) > 22.);

        let metrics = statistics.metrics();
        assert_eq!(metrics.relaxed_nodes, 0);
        assert!(metrics.discarded_nodes >= 1);
        assert!(metrics.consistency_violations >= 1);
    }

    #[test]
    fn consistency_check_is_silent_for_consistent_heuristics() {
        let problem = LineProblem::new(0, 6, &[1, 2], 6);
        let mut engine = AStar::new(AStarConfig {
            check_consistency: true,
            ..Default::default()
        });
        let (result, statistics) = engine.search(&problem, &mut HalfDistance::new(6));

        assert_eq!(result.steps(), Some(3));
        assert_eq!(statistics.metrics().consistency_violations, 0);
    }

    #[test]
    fn weighted_actions_are_respected() {
        // Two hops of cost 1 beat one hop of cost 5.
        let problem = GraphProblem::new(
            "s",
            "g",
            &[("s", "g", 5.), ("s", "m", 1.), ("m", "g", 1.)],
        );
        let (result, _) = search(&problem, &mut ZeroHeuristic::new(), 100, false);

        assert_eq!(result.into_path(), Some(vec!["s", "m", "g"]));
    }

    #[test]
    fn search_is_deterministic() {
        let problem = LineProblem::new(0, 12, &[1, 2, 3], 12);
        let first = search(&problem, &mut ZeroHeuristic::new(), 1_000, true);
        let second = search(&problem, &mut ZeroHeuristic::new(), 1_000, true);

        assert_eq!(first, second);
        assert_eq!(first.0.steps(), Some(4));
    }

    #[test]
    fn boxed_heuristics_can_drive_the_search() {
        let problem = LineProblem::new(0, 5, &[1, 2], 5);
        let mut heuristic: Box<dyn Heuristic<i64>> = Box::new(HalfDistance::new(5));
        let (result, _) = search(&problem, heuristic.as_mut(), 100, false);

        assert_eq!(result.steps(), Some(3));
    }
}
