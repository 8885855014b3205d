//! Problem-agnostic best-first search. Nothing in this module knows about
//! grids: concrete domains plug in through [`SearchProblem`] and
//! [`Heuristic`].

mod frontier;
pub mod heuristics;
pub mod problem_formulations;
pub mod search_engines;
mod search_node;
mod search_space;
mod search_statistics;
mod validate;
mod verbosity;

pub use frontier::{Frontier, FrontierPriority};
pub use heuristics::{Heuristic, HeuristicValue, ZeroHeuristic};
pub use problem_formulations::SearchProblem;
pub use search_engines::{search, AStar, AStarConfig, ConfigError, SearchResult};
pub use search_node::{NodeId, SearchNode, NO_NODE};
pub use search_space::SearchSpace;
pub use search_statistics::{SearchMetrics, SearchStatistics};
pub use validate::{validate_path, ValidationError};
pub use verbosity::Verbosity;
