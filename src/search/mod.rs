mod astar;
mod node;
mod outcome;
mod problem;

pub use astar::astar_search;
pub use node::{Node, NodeId, SearchTree};
pub use outcome::{BudgetKind, SearchLimits, SearchOutcome, SearchReport, SearchStats, SolvedSearch};
pub use problem::{Heuristic, Problem};
