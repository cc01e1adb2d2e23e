mod bounded_grid;
mod consts;
mod heuristics;
mod model_helpers;
mod models;
mod problem;
mod update;
mod validity;

pub use bounded_grid::BoundedGrid;
pub use consts::*;
pub use heuristics::{FILLED_BASELINE, WinnableState, estimate_remaining_cost, is_winnable};
pub use models::{Cell, Direction, GameChangeType, GameState, GameUpdate, Vec2};
pub use problem::{SokobanProblem, StorageDistance};
pub use update::{apply_moves, classify_move, step};
pub use validity::{LevelError, LevelValidity, check_level_validity, validate_level};
