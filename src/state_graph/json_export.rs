use crate::core::Direction;
use crate::state_graph::StateGraph;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug)]
struct JsonData {
    nodes: Vec<JsonNode>,
    links: Vec<JsonEdge>,
}

#[derive(Serialize, Deserialize, Debug)]
struct JsonNode {
    id: usize,
    on_storage: usize,
    is_goal: bool,
}

#[derive(Serialize, Deserialize, Debug)]
struct JsonEdge {
    source: usize,
    target: usize,
    direction: Direction,
    push: bool,
}

pub fn get_json_data(graph: &StateGraph) -> Result<String, serde_json::Error> {
    let mut nodes: Vec<JsonNode> = graph
        .nodes
        .iter()
        .map(|(state, id)| JsonNode {
            id: *id,
            on_storage: state.count_crates_on_storage(),
            is_goal: state.is_won(),
        })
        .collect();
    nodes.sort_by_key(|node| node.id);

    let links: Vec<JsonEdge> = graph
        .edges
        .iter()
        .map(|edge| JsonEdge {
            source: edge.from,
            target: edge.to,
            direction: edge.direction,
            push: edge.game_change_type == crate::core::GameChangeType::PlayerAndCrateMove,
        })
        .collect();

    serde_json::to_string_pretty(&JsonData { nodes, links })
}
