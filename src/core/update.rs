use crate::core::Cell::{Crate, CrateOnStorage, Empty, Player, PlayerOnStorage, Storage};
use crate::core::{Direction, GameChangeType, GameState, GameUpdate};

/// Checks whether the player can move in `direction` without building the next state.
pub fn classify_move(game: &GameState, direction: Direction) -> Result<GameChangeType, String> {
    let dir = direction.offset();
    let next = game.player + dir;
    let Some(dest) = game.cell(&next) else {
        return Err("Cannot move out of bounds".to_string());
    };

    if dest.has_crate() {
        let beyond = next + dir;
        let Some(beyond_cell) = game.cell(&beyond) else {
            return Err("Cannot push crate out of bounds".to_string());
        };
        if !beyond_cell.is_vacant() {
            return Err("Cannot push crate".to_string());
        }
        return Ok(GameChangeType::PlayerAndCrateMove);
    }

    if !dest.is_vacant() {
        return Err("Cannot walk into a wall".to_string());
    }
    Ok(GameChangeType::PlayerMove)
}

/// Applies one move, returning a new state. The source state is never modified.
pub fn step(game: &GameState, direction: Direction) -> GameUpdate {
    let change_type = match classify_move(game, direction) {
        Ok(change_type) => change_type,
        Err(err) => return GameUpdate::Error(err),
    };

    let dir = direction.offset();
    let next = game.player + dir;
    let mut new_grid = game.grid.clone();

    if change_type == GameChangeType::PlayerAndCrateMove {
        let beyond = next + dir;
        new_grid[&beyond] = if new_grid[&beyond] == Storage {
            CrateOnStorage
        } else {
            Crate
        };
        // Clear old crate spot (player will step into it)
        new_grid[&next] = if new_grid[&next] == CrateOnStorage {
            Storage
        } else {
            Empty
        };
    }

    let current = new_grid[&game.player];
    new_grid[&game.player] = if current == PlayerOnStorage { Storage } else { Empty };
    new_grid[&next] = if new_grid[&next] == Storage {
        PlayerOnStorage
    } else {
        Player
    };

    GameUpdate::NextState(
        GameState {
            grid: new_grid,
            player: next,
        },
        change_type,
    )
}

/// Replays `moves` from `game`, returning every visited state including the first.
pub fn apply_moves(game: &GameState, moves: &[Direction]) -> Result<Vec<GameState>, String> {
    let mut states = Vec::with_capacity(moves.len() + 1);
    states.push(game.clone());
    for (index, &direction) in moves.iter().enumerate() {
        let current = &states[states.len() - 1];
        match step(current, direction) {
            GameUpdate::NextState(next, _) => states.push(next),
            GameUpdate::Error(err) => {
                return Err(format!("move {} ({:?}) is illegal: {}", index, direction, err));
            }
        }
    }
    Ok(states)
}
