use std::time::Duration;

pub const DEFAULT_MAX_EXPANSIONS: usize = 2_000_000;
pub const DEFAULT_TIME_LIMIT: Option<Duration> = None;
pub const DEFAULT_GRAPH_NODE_LIMIT: usize = 200_000;
pub const PRUNE_DEAD_CORNERS: bool = false;

pub const LOG_PATH: &str = "exports/solve_log.log";
pub const GRAPH_EXPORT_PATH: &str = "exports/state_graph.json";
pub const LOG_LEVEL_ENV: &str = "SOKOBAN_LOG";
