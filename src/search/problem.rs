use std::hash::Hash;

/// A search problem the A* driver can solve.
///
/// States are compared structurally for duplicate detection, so `State` must implement
/// `Eq` and `Hash` over exactly the parts that distinguish one configuration from another.
pub trait Problem {
    type State: Clone + Eq + Hash;
    type Action: Clone;

    fn initial_state(&self) -> &Self::State;

    /// Every action applicable in `state`, in a fixed order.
    fn actions(&self, state: &Self::State) -> Vec<Self::Action>;

    /// The state reached by applying `action`. Only defined for members of `actions(state)`.
    fn result(&self, state: &Self::State, action: &Self::Action) -> Self::State;

    fn goal_test(&self, state: &Self::State) -> bool;

    fn step_cost(&self, _state: &Self::State, _action: &Self::Action, _next: &Self::State) -> u32 {
        1
    }
}

/// Estimated remaining cost from a state to a goal.
pub trait Heuristic<S> {
    fn estimate(&self, state: &S) -> f64;
}

impl<S, F> Heuristic<S> for F
where
    F: Fn(&S) -> f64,
{
    fn estimate(&self, state: &S) -> f64 {
        self(state)
    }
}
