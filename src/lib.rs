//! A* solver for Sokoban-style puzzles.
//!
//! - `core`: the board model, move rules, heuristic and level validation.
//! - `search`: a generic best-first search over any [`search::Problem`].
//! - `solver`: parse, validate and solve in one call, producing a serialisable report.
//! - `state_graph`: exhaustive enumeration of reachable states, for small levels.
//! - `console_interface`: level text parsing and terminal rendering.

pub mod config;
pub mod console_interface;
pub mod core;
pub mod logging;
pub mod models;
pub mod search;
pub mod solver;
pub mod state_graph;

#[cfg(test)]
mod test;
