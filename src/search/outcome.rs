use crate::core::{DEFAULT_MAX_EXPANSIONS, DEFAULT_TIME_LIMIT};
use crate::search::node::{Node, NodeId, SearchTree};
use serde::Serialize;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchLimits {
    pub max_expansions: Option<usize>,
    pub time_limit: Option<Duration>,
}

impl Default for SearchLimits {
    fn default() -> Self {
        SearchLimits {
            max_expansions: Some(DEFAULT_MAX_EXPANSIONS),
            time_limit: DEFAULT_TIME_LIMIT,
        }
    }
}

impl SearchLimits {
    pub fn unbounded() -> Self {
        SearchLimits {
            max_expansions: None,
            time_limit: None,
        }
    }

    pub fn exceeded(&self, expanded: usize, elapsed: Duration) -> Option<BudgetKind> {
        if self.max_expansions.is_some_and(|max| expanded >= max) {
            return Some(BudgetKind::Expansions);
        }
        if self.time_limit.is_some_and(|limit| elapsed >= limit) {
            return Some(BudgetKind::Time);
        }
        None
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BudgetKind {
    Expansions,
    Time,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct SearchStats {
    /// Nodes whose successors were generated; one `actions` call each.
    pub expanded: usize,
    pub generated: usize,
    pub duplicates_skipped: usize,
    pub max_frontier: usize,
    pub max_depth: u32,
}

pub enum SearchOutcome<S, A> {
    Solved(SolvedSearch<S, A>),
    /// The frontier ran dry: no goal is reachable from the initial state.
    Exhausted,
    /// The search gave up before it could prove anything.
    BudgetExceeded(BudgetKind),
}

impl<S, A> SearchOutcome<S, A> {
    pub fn is_solved(&self) -> bool {
        matches!(self, SearchOutcome::Solved(_))
    }
}

pub struct SearchReport<S, A> {
    pub outcome: SearchOutcome<S, A>,
    pub stats: SearchStats,
}

impl<S, A: Clone> SearchReport<S, A> {
    pub fn solution(&self) -> Option<Vec<A>> {
        match &self.outcome {
            SearchOutcome::Solved(solved) => Some(solved.solution()),
            _ => None,
        }
    }
}

/// The search tree together with the goal node that ended the search.
pub struct SolvedSearch<S, A> {
    tree: SearchTree<S, A>,
    goal: NodeId,
}

impl<S, A> SolvedSearch<S, A> {
    pub(crate) fn new(tree: SearchTree<S, A>, goal: NodeId) -> Self {
        SolvedSearch { tree, goal }
    }

    pub fn goal_node(&self) -> &Node<S, A> {
        &self.tree[self.goal]
    }

    pub fn goal_id(&self) -> NodeId {
        self.goal
    }

    pub fn tree(&self) -> &SearchTree<S, A> {
        &self.tree
    }

    pub fn solution(&self) -> Vec<A>
    where
        A: Clone,
    {
        self.tree.solution(self.goal)
    }
}
