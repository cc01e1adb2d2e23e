use crate::core::{Direction, GameChangeType, GameState};
use std::collections::VecDeque;

/// Every state reachable from a start state, with the moves that connect them.
pub struct StateGraph {
    // map from game state to node id
    pub nodes: bimap::BiMap<GameState, usize>,
    pub edges: Vec<Edge>,
    pub unvisited: VecDeque<usize>,
}

#[derive(Hash, Eq, PartialEq, Clone, Debug)]
pub struct Edge {
    pub from: usize,
    pub to: usize,
    pub direction: Direction,
    pub game_change_type: GameChangeType,
}

#[derive(Debug, PartialEq, Eq)]
pub enum PopulateResult {
    AllVisited,
    Populated(usize),
    NodeLimitReached,
}
