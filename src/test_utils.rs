//! Small problems and puzzles shared by the unit tests.

use crate::search::{Heuristic, HeuristicValue, SearchProblem};
use std::collections::HashMap;

/// The puzzle from the Wikipedia article on Sudoku.
pub const CLASSIC_PUZZLE: &str =
    "530070000600195000098000060800060003400803001700020006060000280000419005000080079";

pub const CLASSIC_SOLUTION: &str =
    "534678912672195348198342567859761423426853791713924856961537284287419635345286179";

/// [`CLASSIC_SOLUTION`] with three cells blanked, each with a single candidate.
pub const NEARLY_SOLVED_PUZZLE: &str =
    ".346789126721953481983425678597614234268.379171392485696153728428741963534528617.";

/// The first empty cell has no candidate left: its row needs a 2 but its
/// column already has one.
pub const DEAD_END_PUZZLE: &str =
    ".34678915672195348198342567859761423426853791713924856961537284287419635345286179";

/// Integers on `[0, max]`, moving forward by one of a fixed set of step sizes.
#[derive(Debug, Clone)]
pub struct LineProblem {
    start: i64,
    goal: i64,
    steps: Vec<i64>,
    max: i64,
}

impl LineProblem {
    pub fn new(start: i64, goal: i64, steps: &[i64], max: i64) -> Self {
        Self {
            start,
            goal,
            steps: steps.to_vec(),
            max,
        }
    }
}

impl SearchProblem for LineProblem {
    type State = i64;
    type Action = i64;
    type Key = i64;

    fn initial_state(&self) -> i64 {
        self.start
    }

    fn actions(&self, state: &i64) -> Vec<i64> {
        self.steps
            .iter()
            .copied()
            .filter(|step| state + step <= self.max)
            .collect()
    }

    fn apply(&self, state: &i64, action: &i64) -> i64 {
        state + action
    }

    fn is_goal(&self, state: &i64) -> bool {
        *state == self.goal
    }

    fn canonical_key(&self, state: &i64) -> i64 {
        *state
    }
}

/// `max(0, goal - s) / 2`, consistent for unit steps of size at most two.
#[derive(Debug, Clone)]
pub struct HalfDistance {
    goal: i64,
}

impl HalfDistance {
    pub fn new(goal: i64) -> Self {
        Self { goal }
    }
}

impl Heuristic<i64> for HalfDistance {
    fn evaluate(&mut self, state: &i64) -> HeuristicValue {
        ((self.goal - state).max(0) as f64 / 2.).into()
    }
}

/// An explicit weighted digraph. Actions are edge indices, offered in the
/// order the edges were given.
#[derive(Debug, Clone)]
pub struct GraphProblem {
    start: &'static str,
    goal: &'static str,
    edges: Vec<(&'static str, &'static str, f64)>,
}

impl GraphProblem {
    pub fn new(
        start: &'static str,
        goal: &'static str,
        edges: &[(&'static str, &'static str, f64)],
    ) -> Self {
        Self {
            start,
            goal,
            edges: edges.to_vec(),
        }
    }

    /// Cost of a path, using the cheapest edge between consecutive vertices.
    pub fn path_cost(&self, path: &[&'static str]) -> f64 {
        path.windows(2)
            .map(|pair| {
                self.edges
                    .iter()
                    .filter(|(from, to, _)| *from == pair[0] && *to == pair[1])
                    .map(|(_, _, cost)| *cost)
                    .fold(f64::INFINITY, f64::min)
            })
            .sum()
    }
}

impl SearchProblem for GraphProblem {
    type State = &'static str;
    type Action = usize;
    type Key = &'static str;

    fn initial_state(&self) -> &'static str {
        self.start
    }

    fn actions(&self, state: &&'static str) -> Vec<usize> {
        self.edges
            .iter()
            .enumerate()
            .filter(|(_, (from, _, _))| from == state)
            .map(|(index, _)| index)
            .collect()
    }

    fn apply(&self, _state: &&'static str, action: &usize) -> &'static str {
        self.edges[*action].1
    }

    fn is_goal(&self, state: &&'static str) -> bool {
        *state == self.goal
    }

    fn canonical_key(&self, state: &&'static str) -> &'static str {
        *state
    }

    fn action_cost(&self, _state: &&'static str, action: &usize) -> HeuristicValue {
        self.edges[*action].2.into()
    }
}

/// Heuristic values looked up per vertex, zero for vertices not listed.
#[derive(Debug, Clone)]
pub struct TableHeuristic {
    values: HashMap<&'static str, f64>,
}

impl TableHeuristic {
    pub fn new(values: &[(&'static str, f64)]) -> Self {
        Self {
            values: values.iter().copied().collect(),
        }
    }
}

impl Heuristic<&'static str> for TableHeuristic {
    fn evaluate(&mut self, state: &&'static str) -> HeuristicValue {
        self.values.get(state).copied().unwrap_or(0.).into()
    }
}
