use crate::core::bounded_grid::BoundedGrid;
use serde::{Deserialize, Serialize};
use std::ops::Add;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Cell {
    Wall,
    Empty,
    Player,
    Crate,
    Storage,
    CrateOnStorage,
    PlayerOnStorage,
}

impl Cell {
    pub fn has_crate(self) -> bool {
        matches!(self, Cell::Crate | Cell::CrateOnStorage)
    }

    pub fn has_player(self) -> bool {
        matches!(self, Cell::Player | Cell::PlayerOnStorage)
    }

    pub fn is_storage(self) -> bool {
        matches!(self, Cell::Storage | Cell::CrateOnStorage | Cell::PlayerOnStorage)
    }

    /// Nothing stands on this cell, so a player may walk in or a crate may land on it.
    pub fn is_vacant(self) -> bool {
        matches!(self, Cell::Empty | Cell::Storage)
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
pub struct Vec2 {
    pub i: i32,
    pub j: i32,
}

impl Vec2 {
    pub fn manhattan_distance(&self, other: &Vec2) -> i32 {
        (self.i - other.i).abs() + (self.j - other.j).abs()
    }
}

impl Add for Vec2 {
    type Output = Vec2;

    fn add(self, other: Vec2) -> Vec2 {
        Vec2 {
            i: self.i + other.i,
            j: self.j + other.j,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// A full board snapshot. `player` duplicates the position of the player cell in `grid`.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct GameState {
    pub grid: BoundedGrid<Cell>,
    pub player: Vec2,
}

#[derive(Debug)]
pub enum GameUpdate {
    NextState(GameState, GameChangeType),
    Error(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameChangeType {
    PlayerMove,
    PlayerAndCrateMove,
}
