mod analysis;
mod console_interface;
mod graph;
mod json_export;
mod models;
mod populate;

pub use analysis::{convert_to_petgraph, get_graph_info, shortest_solution_length};
pub use console_interface::{GraphRenderState, render_graph};
pub use json_export::get_json_data;
pub use models::{Edge, PopulateResult, StateGraph};
pub use populate::{populate_all, populate_node, populate_step};
