use crate::search::{Heuristic, SearchProblem, SearchStatistics};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchResult<S> {
    /// The search was successful. Holds every state from the initial state to
    /// the goal state, both inclusive.
    Success(Vec<S>),
    /// Every state reachable from the initial state was expanded without
    /// meeting a goal
    ProvablyUnsolvable,
    /// The search was stopped by its iteration limit, nothing is known about
    /// solvability
    IterationLimitReached,
}

impl<S> SearchResult<S> {
    pub fn is_success(&self) -> bool {
        matches!(self, SearchResult::Success(_))
    }

    /// The path if one was found.
    pub fn path(&self) -> Option<&[S]> {
        match self {
            SearchResult::Success(path) => Some(path),
            _ => None,
        }
    }

    pub fn into_path(self) -> Option<Vec<S>> {
        match self {
            SearchResult::Success(path) => Some(path),
            _ => None,
        }
    }

    /// Number of actions on the path, i.e. one fewer than the number of
    /// states.
    pub fn steps(&self) -> Option<usize> {
        self.path().map(|path| path.len().saturating_sub(1))
    }

    /// Short machine-friendly name of the outcome.
    pub fn outcome(&self) -> &'static str {
        match self {
            SearchResult::Success(_) => "solved",
            SearchResult::ProvablyUnsolvable => "unsolvable",
            SearchResult::IterationLimitReached => "iteration-limit",
        }
    }
}

pub trait SearchEngine {
    fn search<P, H>(
        &mut self,
        problem: &P,
        heuristic: &mut H,
    ) -> (SearchResult<P::State>, SearchStatistics)
    where
        P: SearchProblem,
        H: Heuristic<P::State> + ?Sized;
}
