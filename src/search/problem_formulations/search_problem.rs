use crate::search::HeuristicValue;
use std::fmt::Debug;
use std::hash::Hash;

/// An implicit state space: states are vertices, actions are labelled edges.
///
/// Implementations must be pure with respect to their inputs. `apply` returns
/// a fresh state and never mutates the one it was given, and `canonical_key`
/// maps semantically equal states to equal keys. None of this is checked by
/// the search engines; a problem that breaks these rules gets meaningless
/// results rather than an error.
pub trait SearchProblem {
    type State: Clone + Debug;
    type Action: Clone + Debug;
    /// Normalised, hashable representation of a state used for duplicate
    /// detection.
    type Key: Clone + Debug + Hash + Eq;

    fn initial_state(&self) -> Self::State;

    /// The actions to expand `state` with. This may be a subset of every
    /// formally legal action, the engine treats whatever is returned as the
    /// complete expansion of the state.
    fn actions(&self, state: &Self::State) -> Vec<Self::Action>;

    fn apply(&self, state: &Self::State, action: &Self::Action) -> Self::State;

    fn is_goal(&self, state: &Self::State) -> bool;

    fn canonical_key(&self, state: &Self::State) -> Self::Key;

    /// Cost of applying `action` in `state`, must be non-negative. Unit cost
    /// unless overridden.
    fn action_cost(&self, _state: &Self::State, _action: &Self::Action) -> HeuristicValue {
        HeuristicValue::from(1.)
    }
}
