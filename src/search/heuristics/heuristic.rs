use ordered_float::OrderedFloat;
use std::fmt::Debug;

/// Costs and heuristic estimates share one totally ordered float type so that
/// `g`, `h` and `f` can be added and compared freely.
pub type HeuristicValue = OrderedFloat<f64>;

/// A heuristic maps a state to a non-negative estimate of the remaining cost
/// to a goal. Admissibility and consistency are the implementor's business;
/// the search engine only assumes the value is finite and non-negative.
pub trait Heuristic<S>: Debug {
    /// Evaluate the given state.
    fn evaluate(&mut self, state: &S) -> HeuristicValue;

    /// Evaluate a batch of states. The default implementation simply calls
    /// `evaluate` for each state sequentially. This method should be
    /// overridden if a more efficient implementation is possible.
    fn evaluate_batch(&mut self, states: &[S]) -> Vec<HeuristicValue> {
        states.iter().map(|state| self.evaluate(state)).collect()
    }
}

impl<S, H> Heuristic<S> for Box<H>
where
    H: Heuristic<S> + ?Sized,
{
    fn evaluate(&mut self, state: &S) -> HeuristicValue {
        (**self).evaluate(state)
    }

    fn evaluate_batch(&mut self, states: &[S]) -> Vec<HeuristicValue> {
        (**self).evaluate_batch(states)
    }
}
