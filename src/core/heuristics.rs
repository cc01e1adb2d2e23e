use crate::core::{Cell, GameState, Vec2};

#[derive(Eq, PartialEq, Debug)]
pub enum WinnableState {
    WinMaybePossible,
    WinImpossible,
}

const DIRECTIONS_AROUND: [Vec2; 4] = [
    Vec2 { i: 1, j: 0 },
    Vec2 { i: 0, j: 1 },
    Vec2 { i: -1, j: 0 },
    Vec2 { i: 0, j: -1 },
];

/// Value contributed by the player term once every storage location holds a crate.
pub const FILLED_BASELINE: f64 = 1.0;

/// Estimated remaining cost from `game` to a goal.
///
/// Averages the Manhattan distance between every unfilled storage location and every loose
/// crate, then adds the distance from the player to the nearest unfilled storage location
/// minus one. Cheap and directionally useful, but it can overestimate, so searches guided by
/// it are not guaranteed to return a shortest solution.
pub fn estimate_remaining_cost(game: &GameState) -> f64 {
    let unfilled = game.unfilled_storage_locations();
    let loose = game.loose_crate_locations();

    let mut total = 0i64;
    for storage in &unfilled {
        for crate_pos in &loose {
            total += storage.manhattan_distance(crate_pos) as i64;
        }
    }
    let divisor = if unfilled.is_empty() { 1 } else { unfilled.len() };
    let mut value = total as f64 / divisor as f64;

    value += match unfilled
        .iter()
        .map(|storage| game.player.manhattan_distance(storage))
        .min()
    {
        Some(nearest) => (nearest - 1) as f64,
        None => FILLED_BASELINE,
    };
    value
}

pub fn is_winnable(game: &GameState) -> WinnableState {
    let total_trapped_crates = game
        .loose_crate_locations()
        .into_iter()
        .filter(|&pos| is_crate_trapped(game, pos))
        .count();

    let total_free_crates = game.count_crates() - total_trapped_crates;
    if total_free_crates >= game.count_storage() {
        WinnableState::WinMaybePossible
    } else {
        WinnableState::WinImpossible
    }
}

/// a crate is trapped if the player can never move it, and it is not on a storage location
fn is_crate_trapped(game: &GameState, crate_pos: Vec2) -> bool {
    if game.cell(&crate_pos).is_some_and(Cell::is_storage) {
        return false;
    }

    // if any 2 consecutive directions are blocked, then we are in a corner, and we are trapped
    let blocked_directions = DIRECTIONS_AROUND.map(|dir| {
        game.cell(&(crate_pos + dir))
            .is_none_or(|cell| cell == Cell::Wall)
    });

    (0..4).any(|i| blocked_directions[i] && blocked_directions[(i + 1) % 4])
}
