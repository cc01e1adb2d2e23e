use crate::core::heuristics::estimate_remaining_cost;
use crate::core::update::{classify_move, step};
use crate::core::{Direction, GameState, GameUpdate};
use crate::search::{Heuristic, Problem};

/// Sokoban as a search problem over full board snapshots.
pub struct SokobanProblem {
    initial: GameState,
}

impl SokobanProblem {
    pub fn new(initial: GameState) -> Self {
        SokobanProblem { initial }
    }
}

impl Problem for SokobanProblem {
    type State = GameState;
    type Action = Direction;

    fn initial_state(&self) -> &GameState {
        &self.initial
    }

    fn actions(&self, state: &GameState) -> Vec<Direction> {
        Direction::SEARCH_ORDER
            .into_iter()
            .filter(|&direction| classify_move(state, direction).is_ok())
            .collect()
    }

    /// An action outside `actions(state)` leaves the state unchanged.
    fn result(&self, state: &GameState, action: &Direction) -> GameState {
        match step(state, *action) {
            GameUpdate::NextState(next, _) => next,
            GameUpdate::Error(_) => state.clone(),
        }
    }

    fn goal_test(&self, state: &GameState) -> bool {
        state.is_won()
    }
}

/// The default crate/storage distance estimate, see [`estimate_remaining_cost`].
pub struct StorageDistance;

impl Heuristic<GameState> for StorageDistance {
    fn estimate(&self, state: &GameState) -> f64 {
        estimate_remaining_cost(state)
    }
}
