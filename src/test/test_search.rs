#[cfg(test)]
mod test {
    use Direction::*;
    use crate::core::*;
    use crate::search::*;
    use crate::state_graph::{PopulateResult, StateGraph, populate_all, shortest_solution_length};
    use crate::test::test_util::{GameTestState, assert_game_matches};
    use rand::rngs::StdRng;
    use rand::seq::SliceRandom;
    use rand::SeedableRng;
    use std::cell::Cell as CallCount;
    use std::collections::HashSet;

    const TWO_CRATES: &str = r#"
#######
#@$ . #
#  $ .#
#     #
#######
"#;

    fn search(level: &str) -> (GameState, SearchReport<GameState, Direction>) {
        let game = GameTestState::new(level).game_state;
        let problem = SokobanProblem::new(game.clone());
        let report = astar_search(&problem, &StorageDistance, &SearchLimits::unbounded());
        (game, report)
    }

    fn reachable_state_count(game: &GameState) -> usize {
        let mut graph = StateGraph::new();
        graph.upsert_state(game.clone());
        assert_eq!(populate_all(&mut graph, usize::MAX), PopulateResult::AllVisited);
        graph.nodes.len()
    }

    fn assert_solution_reaches_goal(game: &GameState, moves: &[Direction]) {
        let problem = SokobanProblem::new(game.clone());
        let mut state = game.clone();
        for action in moves {
            assert!(problem.actions(&state).contains(action), "{:?} is not legal here", action);
            state = problem.result(&state, action);
        }
        assert!(problem.goal_test(&state), "moves {:?} do not solve the level", moves);
    }

    /// Counts `actions` calls made by the driver.
    struct CountingProblem {
        inner: SokobanProblem,
        actions_calls: CallCount<usize>,
        expanded: std::cell::RefCell<HashSet<GameState>>,
    }

    impl Problem for CountingProblem {
        type State = GameState;
        type Action = Direction;

        fn initial_state(&self) -> &GameState {
            self.inner.initial_state()
        }

        fn actions(&self, state: &GameState) -> Vec<Direction> {
            self.actions_calls.set(self.actions_calls.get() + 1);
            let fresh = self.expanded.borrow_mut().insert(state.clone());
            assert!(fresh, "state expanded twice");
            self.inner.actions(state)
        }

        fn result(&self, state: &GameState, action: &Direction) -> GameState {
            self.inner.result(state, action)
        }

        fn goal_test(&self, state: &GameState) -> bool {
            self.inner.goal_test(state)
        }
    }

    #[test]
    fn actions_follow_fixed_direction_order() {
        let game = GameTestState::new(r#"
#####
#   #
# @ #
#   #
#####
"#);
        let problem = SokobanProblem::new(game.game_state.clone());

        assert_eq!(problem.actions(&game.game_state), vec![Right, Down, Left, Up]);
    }

    #[test]
    fn actions_exclude_walls_and_blocked_pushes() {
        let game = GameTestState::new(r#"
#####
#@$$#
#$  #
#   #
#####
"#);
        let problem = SokobanProblem::new(game.game_state.clone());

        // right pushes into a crate, left and up are walls
        assert_eq!(problem.actions(&game.game_state), vec![Down]);
    }

    #[test]
    fn result_of_illegal_action_leaves_state_unchanged() {
        let game = GameTestState::new(r#"
#@#
"#);
        let problem = SokobanProblem::new(game.game_state.clone());

        assert_eq!(problem.result(&game.game_state, &Right), game.game_state);
    }

    #[test]
    fn already_solved_level_returns_empty_sequence() {
        let (_, report) = search(r#"
#####
#@ *#
#####
"#);

        assert_eq!(report.solution(), Some(vec![]));
        assert_eq!(report.stats.expanded, 0);
    }

    #[test]
    fn corridor_is_solved_with_walk_then_push() {
        let (game, report) = search(r#"
#####
#@ $.#
#####
"#);

        let moves = report.solution().expect("corridor should be solvable");
        assert_eq!(moves, vec![Right, Right]);

        let states = apply_moves(&game, &moves).unwrap();
        assert_game_matches(&states[2], r#"
#####
#  @*#
#####
"#);
    }

    #[test]
    fn terminal_node_records_depth_cost_and_action() {
        let (_, report) = search(r#"
#####
#@ $.#
#####
"#);
        let SearchOutcome::Solved(solved) = report.outcome else {
            panic!("expected a solution");
        };

        let goal = solved.goal_node();
        assert_eq!(goal.depth(), 2);
        assert_eq!(goal.path_cost(), 2);
        assert_eq!(goal.action(), Some(&Right));
        assert!(goal.state().is_won());
        assert_eq!(solved.tree().path(solved.goal_id()).len(), 3);
    }

    #[test]
    fn two_crate_solution_round_trips_to_goal() {
        let (game, report) = search(TWO_CRATES);

        let moves = report.solution().expect("level should be solvable");
        assert_solution_reaches_goal(&game, &moves);
    }

    #[test]
    fn solution_is_never_shorter_than_true_optimum() {
        for level in [TWO_CRATES, r#"
######
#@$ .#
######
"#, r#"
######
#    #
# $  #
#@ . #
######
"#] {
            let (game, report) = search(level);
            let moves = report.solution().expect("level should be solvable");

            let mut graph = StateGraph::new();
            let root = graph.upsert_state(game.clone());
            populate_all(&mut graph, usize::MAX);
            let optimum = shortest_solution_length(&graph, root).expect("goal should be reachable");

            assert!(moves.len() >= optimum, "{} moves beat optimum {}", moves.len(), optimum);
            assert_solution_reaches_goal(&game, &moves);
        }
    }

    #[test]
    fn crate_in_corner_is_exhausted() {
        let (_, report) = search(r#"
#####
#$  #
#  .#
# @ #
#####
"#);

        assert!(matches!(report.outcome, SearchOutcome::Exhausted));
        assert_eq!(report.solution(), None);
    }

    #[test]
    fn crate_stuck_against_top_wall_is_exhausted() {
        // the upper crate can only slide along row 1, which has no storage
        let (game, report) = search(r#"
######
#@$  #
# $. #
# .  #
######
"#);

        assert!(matches!(report.outcome, SearchOutcome::Exhausted));
        assert_eq!(report.stats.expanded, reachable_state_count(&game));
    }

    #[test]
    fn fewer_crates_than_storage_is_not_reported_solvable() {
        let (_, report) = search(r#"
######
#@$..#
######
"#);

        assert!(!report.outcome.is_solved());
    }

    #[test]
    fn more_crates_than_storage_is_solved_once_storage_is_filled() {
        let (game, report) = search(r#"
#######
#@$. $#
#     #
#######
"#);

        assert_eq!(report.solution(), Some(vec![Right]));
        let states = apply_moves(&game, &[Right]).unwrap();
        let last = states.last().unwrap();
        assert!(last.is_won());
        assert_eq!(last.count_crates(), 2);
        assert_game_matches(last, r#"
#######
# @* $#
#     #
#######
"#);
    }

    #[test]
    fn no_state_is_expanded_twice() {
        for level in [TWO_CRATES, r#"
######
#@$  #
# $. #
# .  #
######
"#] {
            let game = GameTestState::new(level).game_state;
            let problem = CountingProblem {
                inner: SokobanProblem::new(game.clone()),
                actions_calls: CallCount::new(0),
                expanded: Default::default(),
            };
            let report = astar_search(&problem, &StorageDistance, &SearchLimits::unbounded());

            assert_eq!(problem.actions_calls.get(), report.stats.expanded);
            assert!(report.stats.expanded <= reachable_state_count(&game));
        }
    }

    #[test]
    fn repeated_runs_produce_identical_moves() {
        let (_, first) = search(TWO_CRATES);
        for _ in 0..3 {
            let (_, again) = search(TWO_CRATES);
            assert_eq!(first.solution(), again.solution());
            assert_eq!(first.stats, again.stats);
        }
    }

    #[test]
    fn expansion_budget_reports_budget_not_exhaustion() {
        let game = GameTestState::new(TWO_CRATES).game_state;
        let problem = SokobanProblem::new(game);
        let limits = SearchLimits {
            max_expansions: Some(2),
            time_limit: None,
        };
        let report = astar_search(&problem, &StorageDistance, &limits);

        assert!(matches!(report.outcome, SearchOutcome::BudgetExceeded(BudgetKind::Expansions)));
        assert_eq!(report.stats.expanded, 2);
    }

    #[test]
    fn zero_time_limit_gives_up_before_expanding() {
        let game = GameTestState::new(TWO_CRATES).game_state;
        let problem = SokobanProblem::new(game);
        let limits = SearchLimits {
            max_expansions: None,
            time_limit: Some(std::time::Duration::ZERO),
        };
        let report = astar_search(&problem, &StorageDistance, &limits);

        assert!(matches!(report.outcome, SearchOutcome::BudgetExceeded(BudgetKind::Time)));
        assert_eq!(report.stats.expanded, 0);
    }

    #[test]
    fn random_walk_states_stay_solvable_and_round_trip() {
        let start = GameTestState::new(TWO_CRATES).game_state;
        let problem = SokobanProblem::new(start.clone());
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..10 {
            let mut state = start.clone();
            for _ in 0..6 {
                // only walk, so no crate can get stuck
                let walks: Vec<Direction> = problem
                    .actions(&state)
                    .into_iter()
                    .filter(|&d| classify_move(&state, d) == Ok(GameChangeType::PlayerMove))
                    .collect();
                let Some(&direction) = walks.choose(&mut rng) else {
                    break;
                };
                state = problem.result(&state, &direction);
            }

            let walked = SokobanProblem::new(state.clone());
            let report = astar_search(&walked, &StorageDistance, &SearchLimits::unbounded());
            let moves = report.solution().expect("walking never makes a level unsolvable");
            assert_solution_reaches_goal(&state, &moves);
        }
    }
}
