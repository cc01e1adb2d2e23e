use crate::search::node::{NodeId, SearchTree};
use crate::search::outcome::{SearchLimits, SearchOutcome, SearchReport, SearchStats, SolvedSearch};
use crate::search::problem::{Heuristic, Problem};
use log::{debug, info, warn};
use std::cmp::Ordering;
use std::collections::hash_map::Entry;
use std::collections::{BinaryHeap, HashMap, HashSet};
use std::time::Instant;

struct FrontierEntry {
    f: f64,
    order: u64,
    node: NodeId,
}

// BinaryHeap is a max-heap: invert so the smallest f pops first, earliest insertion on ties.
impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .f
            .total_cmp(&self.f)
            .then_with(|| other.order.cmp(&self.order))
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FrontierEntry {}

/// Best-first graph search ordered by `f = g + h`.
///
/// Each state is expanded at most once. A successor gets a new node only when it has not
/// been expanded yet and is reached more cheaply than any path discovered so far; stale
/// frontier entries left behind by a cheaper rediscovery are skipped when popped.
pub fn astar_search<P, H>(
    problem: &P,
    heuristic: &H,
    limits: &SearchLimits,
) -> SearchReport<P::State, P::Action>
where
    P: Problem,
    H: Heuristic<P::State> + ?Sized,
{
    let started = Instant::now();
    let mut stats = SearchStats::default();

    let initial = problem.initial_state().clone();
    let mut best_cost: HashMap<P::State, u32> = HashMap::new();
    let mut explored: HashSet<P::State> = HashSet::new();
    let mut frontier = BinaryHeap::new();
    let mut order = 0u64;

    let root_f = heuristic.estimate(&initial);
    best_cost.insert(initial.clone(), 0);
    let mut tree = SearchTree::new(initial);
    frontier.push(FrontierEntry {
        f: root_f,
        order,
        node: tree.root(),
    });
    stats.generated = 1;
    stats.max_frontier = 1;

    while let Some(entry) = frontier.pop() {
        let node = &tree[entry.node];
        if problem.goal_test(node.state()) {
            info!(
                "Solved at depth {} after {} expansions ({} nodes generated)",
                node.depth(),
                stats.expanded,
                stats.generated
            );
            return SearchReport {
                outcome: SearchOutcome::Solved(SolvedSearch::new(tree, entry.node)),
                stats,
            };
        }

        let superseded = best_cost
            .get(node.state())
            .is_some_and(|&best| best < node.path_cost());
        if superseded || explored.contains(node.state()) {
            stats.duplicates_skipped += 1;
            continue;
        }

        if let Some(kind) = limits.exceeded(stats.expanded, started.elapsed()) {
            warn!(
                "Search budget ({:?}) exceeded after {} expansions",
                kind, stats.expanded
            );
            return SearchReport {
                outcome: SearchOutcome::BudgetExceeded(kind),
                stats,
            };
        }

        let state = node.state().clone();
        let path_cost = node.path_cost();
        let depth = node.depth();
        explored.insert(state.clone());
        stats.expanded += 1;
        if depth > stats.max_depth {
            stats.max_depth = depth;
            debug!("Visited new depth: {} ({:?})", depth, stats);
        }

        for action in problem.actions(&state) {
            let child_state = problem.result(&state, &action);
            if explored.contains(&child_state) {
                continue;
            }
            let child_cost = path_cost + problem.step_cost(&state, &action, &child_state);
            match best_cost.entry(child_state.clone()) {
                Entry::Occupied(known) if *known.get() <= child_cost => continue,
                Entry::Occupied(mut known) => {
                    known.insert(child_cost);
                }
                Entry::Vacant(vacant) => {
                    vacant.insert(child_cost);
                }
            }

            let f = child_cost as f64 + heuristic.estimate(&child_state);
            let child = tree.add_child(entry.node, action, child_state, child_cost);
            order += 1;
            frontier.push(FrontierEntry {
                f,
                order,
                node: child,
            });
            stats.generated += 1;
        }
        stats.max_frontier = stats.max_frontier.max(frontier.len());
    }

    info!(
        "No solution: frontier exhausted after {} expansions",
        stats.expanded
    );
    SearchReport {
        outcome: SearchOutcome::Exhausted,
        stats,
    }
}
