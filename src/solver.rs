//! Entry points for callers that hold level text or a parsed board and want a verdict.

use crate::console_interface::parse_level;
use crate::core::{
    Direction, GameChangeType, GameState, LevelError, PRUNE_DEAD_CORNERS, SokobanProblem,
    StorageDistance, WinnableState, classify_move, is_winnable, step, validate_level,
};
use crate::core::GameUpdate::NextState;
use crate::search::{BudgetKind, SearchLimits, SearchOutcome, SearchStats, astar_search};
use log::info;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolverConfig {
    pub limits: SearchLimits,
    /// Report levels whose initial state has a loose crate wedged in a corner as unsolvable
    /// without searching.
    pub prune_dead_corners: bool,
}

impl Default for SolverConfig {
    fn default() -> Self {
        SolverConfig {
            limits: SearchLimits::default(),
            prune_dead_corners: PRUNE_DEAD_CORNERS,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SolveStatus {
    Solved,
    Unsolvable,
    BudgetExceeded(BudgetKind),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SolveReport {
    pub solvable: bool,
    pub status: SolveStatus,
    pub moves: Vec<Direction>,
    pub stats: SearchStats,
}

/// Parses, validates and solves a level.
pub fn solve_level(level: &str, config: &SolverConfig) -> Result<SolveReport, LevelError> {
    let game = parse_level(level)?;
    validate_level(&game, None)?;
    Ok(solve_state(&game, config))
}

/// Solves an already validated board.
pub fn solve_state(game: &GameState, config: &SolverConfig) -> SolveReport {
    if config.prune_dead_corners && is_winnable(game) == WinnableState::WinImpossible {
        info!("Initial state has a trapped crate, skipping search");
        return SolveReport {
            solvable: false,
            status: SolveStatus::Unsolvable,
            moves: Vec::new(),
            stats: SearchStats::default(),
        };
    }

    let problem = SokobanProblem::new(game.clone());
    let report = astar_search(&problem, &StorageDistance, &config.limits);
    let (status, moves) = match &report.outcome {
        SearchOutcome::Solved(solved) => (SolveStatus::Solved, solved.solution()),
        SearchOutcome::Exhausted => (SolveStatus::Unsolvable, Vec::new()),
        SearchOutcome::BudgetExceeded(kind) => (SolveStatus::BudgetExceeded(*kind), Vec::new()),
    };

    SolveReport {
        solvable: status == SolveStatus::Solved,
        status,
        moves,
        stats: report.stats,
    }
}

/// Renders moves in lurd notation, uppercase where the move pushes a crate.
/// Stops at the first move that is illegal from the state reached so far.
pub fn moves_to_string(game: &GameState, moves: &[Direction]) -> String {
    let mut result = String::with_capacity(moves.len());
    let mut current = game.clone();
    for &direction in moves {
        let Ok(change_type) = classify_move(&current, direction) else {
            break;
        };
        let ch = direction.to_char();
        result.push(match change_type {
            GameChangeType::PlayerAndCrateMove => ch.to_ascii_uppercase(),
            GameChangeType::PlayerMove => ch,
        });
        if let NextState(next, _) = step(&current, direction) {
            current = next;
        }
    }
    result
}
