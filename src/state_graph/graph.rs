use crate::core::GameState;
use crate::state_graph::models::{Edge, StateGraph};
use std::collections::VecDeque;

impl StateGraph {
    pub fn new() -> Self {
        StateGraph {
            nodes: bimap::BiMap::new(),
            edges: Vec::new(),
            unvisited: VecDeque::new(),
        }
    }

    pub fn upsert_state(&mut self, state: GameState) -> usize {
        if let Some(&id) = self.nodes.get_by_left(&state) {
            id
        } else {
            let id = self.nodes.len();
            // ids are dense, so a fresh id never collides
            self.nodes.insert(state, id);
            self.unvisited.push_back(id);
            id
        }
    }

    pub fn get_state(&self, id: usize) -> Option<&GameState> {
        self.nodes.get_by_right(&id)
    }

    pub fn get_id(&self, state: &GameState) -> Option<usize> {
        self.nodes.get_by_left(state).copied()
    }

    pub fn add_edge(&mut self, edge: Edge) {
        self.edges.push(edge);
    }

    pub fn next_unvisited_node(&mut self) -> Option<usize> {
        self.unvisited.pop_front()
    }

    pub fn is_fully_populated(&self) -> bool {
        self.unvisited.is_empty()
    }

    pub fn goal_ids(&self) -> impl Iterator<Item = usize> + '_ {
        self.nodes
            .iter()
            .filter(|(state, _)| state.is_won())
            .map(|(_, &id)| id)
    }
}

impl Default for StateGraph {
    fn default() -> Self {
        Self::new()
    }
}
