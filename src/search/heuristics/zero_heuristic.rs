use crate::search::{Heuristic, HeuristicValue};

/// Blind heuristic. With it A* degenerates into uniform-cost search.
#[derive(Clone, Debug, Default)]
pub struct ZeroHeuristic {}

impl ZeroHeuristic {
    pub fn new() -> Self {
        ZeroHeuristic {}
    }
}

impl<S> Heuristic<S> for ZeroHeuristic {
    fn evaluate(&mut self, _state: &S) -> HeuristicValue {
        (0.).into()
    }
}
