use crate::core::{Direction, GameUpdate, step};
use crate::state_graph::models::{Edge, PopulateResult, StateGraph};

pub fn populate_node(graph: &mut StateGraph, from_id: usize) {
    let Some(from_state) = graph.get_state(from_id) else {
        return;
    };
    let from_state = from_state.clone();

    for direction in Direction::SEARCH_ORDER {
        if let GameUpdate::NextState(new_state, change_type) = step(&from_state, direction) {
            let to_id = graph.upsert_state(new_state);
            graph.add_edge(Edge {
                from: from_id,
                to: to_id,
                direction,
                game_change_type: change_type,
            });
        }
    }
}

pub fn populate_step(graph: &mut StateGraph) -> PopulateResult {
    let Some(node_id) = graph.next_unvisited_node() else {
        return PopulateResult::AllVisited;
    };
    populate_node(graph, node_id);
    PopulateResult::Populated(node_id)
}

/// Populates until every reachable state is visited or the graph holds `node_limit` states.
pub fn populate_all(graph: &mut StateGraph, node_limit: usize) -> PopulateResult {
    loop {
        if graph.nodes.len() >= node_limit && !graph.is_fully_populated() {
            return PopulateResult::NodeLimitReached;
        }
        if let PopulateResult::AllVisited = populate_step(graph) {
            return PopulateResult::AllVisited;
        }
    }
}
