mod astar;
mod astar_config;
mod search_engine;
mod termination_condition;

pub use astar::{search, AStar};
pub use astar_config::{AStarConfig, ConfigError};
pub use search_engine::{SearchEngine, SearchResult};
pub use termination_condition::TerminationCondition;
