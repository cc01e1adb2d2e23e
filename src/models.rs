use crate::core::{GameChangeType, GameState};

pub struct GameRenderState {
    pub game: GameState,
    pub won: bool,
    pub error: Option<String>,
    pub last_change: Option<GameChangeType>,
    /// Replay position as (moves shown, total moves).
    pub progress: Option<(usize, usize)>,
}
