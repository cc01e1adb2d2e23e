use crate::core::GameState;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LevelError {
    #[error("level contains no rows")]
    Empty,

    #[error("level has no player")]
    NoPlayer,

    #[error("level has {0} players, expected exactly one")]
    MultiplePlayers(usize),

    #[error("level has {crates} crates but {storage} storage locations")]
    CrateStorageMismatch { crates: usize, storage: usize },

    #[error("level is {actual_rows}x{actual_cols}, expected {rows}x{cols}")]
    DimensionMismatch {
        rows: usize,
        cols: usize,
        actual_rows: usize,
        actual_cols: usize,
    },
}

/// Independent structural checks over a level, each reported separately.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LevelValidity {
    pub dimension: bool,
    pub player_count: bool,
    pub crate_storage_count: bool,
}

impl LevelValidity {
    pub fn is_valid(&self) -> bool {
        self.dimension && self.player_count && self.crate_storage_count
    }
}

pub fn check_level_validity(game: &GameState, intended: Option<(usize, usize)>) -> LevelValidity {
    let dimension = match intended {
        Some((rows, cols)) => game.grid.rows() == rows && game.grid.cols() == cols,
        None => true,
    };
    LevelValidity {
        dimension,
        player_count: game.count_players() == 1,
        crate_storage_count: game.count_crates() == game.count_storage(),
    }
}

/// Like [`check_level_validity`], but reports the first failed check as an error.
pub fn validate_level(game: &GameState, intended: Option<(usize, usize)>) -> Result<(), LevelError> {
    let validity = check_level_validity(game, intended);
    if !validity.dimension {
        let (rows, cols) = intended.unwrap_or_default();
        return Err(LevelError::DimensionMismatch {
            rows,
            cols,
            actual_rows: game.grid.rows(),
            actual_cols: game.grid.cols(),
        });
    }
    if !validity.player_count {
        return match game.count_players() {
            0 => Err(LevelError::NoPlayer),
            n => Err(LevelError::MultiplePlayers(n)),
        };
    }
    if !validity.crate_storage_count {
        return Err(LevelError::CrateStorageMismatch {
            crates: game.count_crates(),
            storage: game.count_storage(),
        });
    }
    Ok(())
}
