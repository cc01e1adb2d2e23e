use crate::core::Direction;
use crate::state_graph::StateGraph;
use petgraph::Directed;
use petgraph::algo::dijkstra;
use petgraph::graph::{Graph, NodeIndex};
use std::collections::HashMap;

pub fn convert_to_petgraph(
    graph: &StateGraph,
) -> (Graph<usize, Direction, Directed>, HashMap<usize, NodeIndex>) {
    let mut petgraph = Graph::new();

    let mut ids: Vec<usize> = graph.nodes.right_values().copied().collect();
    ids.sort_unstable();
    let node_map: HashMap<usize, NodeIndex> = ids
        .into_iter()
        .map(|id| (id, petgraph.add_node(id)))
        .collect();

    for edge in &graph.edges {
        if let (Some(&from_index), Some(&to_index)) =
            (node_map.get(&edge.from), node_map.get(&edge.to))
        {
            petgraph.add_edge(from_index, to_index, edge.direction);
        }
    }

    (petgraph, node_map)
}

/// Fewest moves from `root` to any goal state, or `None` when no goal is reachable.
/// Only exact for a fully populated graph.
pub fn shortest_solution_length(graph: &StateGraph, root: usize) -> Option<usize> {
    let (petgraph, node_map) = convert_to_petgraph(graph);
    let start = *node_map.get(&root)?;
    let distances = dijkstra(&petgraph, start, None, |_| 1usize);

    graph
        .goal_ids()
        .filter_map(|id| node_map.get(&id).and_then(|index| distances.get(index)))
        .min()
        .copied()
}

pub fn get_graph_info(graph: &StateGraph) -> String {
    format!(
        "Graph has {} nodes, {} edges, {} goal states, {} unvisited nodes.",
        graph.nodes.len(),
        graph.edges.len(),
        graph.goal_ids().count(),
        graph.unvisited.len()
    )
}
