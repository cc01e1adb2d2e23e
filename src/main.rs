// Sokoban solver CLI
// Modes: solve (default), replay, graph, play. Run with --help for options.
// Tiles: '#' wall, '@' player, '$' crate, '.' storage, '*' crate on storage, '+' player on storage, ' ' floor.

use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use clap::Parser;
use sokoban_solver::config::{Args, Mode};
use sokoban_solver::console_interface::ConsoleInput::*;
use sokoban_solver::console_interface::{
    cleanup_terminal, handle_input, parse_level, render_game, setup_terminal,
};
use sokoban_solver::core::{
    DEFAULT_GRAPH_NODE_LIMIT, GRAPH_EXPORT_PATH, GameState, GameUpdate, LOG_PATH, apply_moves,
    step, validate_level,
};
use sokoban_solver::logging::init_file_logger;
use sokoban_solver::models::GameRenderState;
use sokoban_solver::solver::{SolverConfig, moves_to_string, solve_state};
use sokoban_solver::state_graph::{
    GraphRenderState, PopulateResult, StateGraph, get_graph_info, get_json_data, populate_step,
    render_graph, shortest_solution_length,
};
use std::io;
use std::path::Path;
use std::time::{Duration, Instant};

const DEFAULT_LEVEL: &str = r#"
  #######
  #  .  #
  #  $  #
### $# ###
#   @   #
###   ###
  #  .  #
  #######
"#;

const REPLAY_FRAME: Duration = Duration::from_millis(200);

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let solver_config = args.solver_config();
    init_file_logger(Path::new(LOG_PATH))?;

    let level = match &args.level {
        Some(path) => std::fs::read_to_string(path)?,
        None => DEFAULT_LEVEL.to_string(),
    };
    let game_state = parse_level(&level)?;
    validate_level(&game_state, None)?;
    log::info!("Loaded {}x{} level", game_state.height(), game_state.width());

    match args.mode {
        Mode::Solve => run_solve(&game_state, &solver_config)?,
        Mode::Replay => {
            let mut terminal = setup_terminal()?;
            let result = run_replay(&game_state, &solver_config, &mut terminal);
            cleanup_terminal()?;
            result?;
        }
        Mode::Graph => {
            let mut terminal = setup_terminal()?;
            let result = run_state_graph(game_state, &mut terminal);
            cleanup_terminal()?;
            println!("{}", result?);
        }
        Mode::Play => {
            let mut terminal = setup_terminal()?;
            let result = run_interactive(game_state, &mut terminal);
            cleanup_terminal()?;
            result?;
        }
    }

    Ok(())
}

fn run_solve(game_state: &GameState, config: &SolverConfig) -> Result<(), Box<dyn std::error::Error>> {
    let report = solve_state(game_state, config);
    println!("{}", serde_json::to_string_pretty(&report)?);
    if report.solvable {
        println!("{}", moves_to_string(game_state, &report.moves));
    }
    Ok(())
}

fn run_replay(
    game_state: &GameState,
    config: &SolverConfig,
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> Result<(), Box<dyn std::error::Error>> {
    let report = solve_state(game_state, config);
    let total = report.moves.len();
    let states = apply_moves(game_state, &report.moves)?;

    for (shown, state) in states.into_iter().enumerate() {
        let to_render = GameRenderState {
            won: report.solvable && shown == total,
            game: state,
            error: if report.solvable {
                None
            } else {
                Some(format!("No solution: {:?}", report.status))
            },
            last_change: None,
            progress: Some((shown, total)),
        };
        render_game(terminal, &to_render)?;

        let frame_end = Instant::now() + REPLAY_FRAME;
        while Instant::now() < frame_end {
            if let Quit = handle_input()? {
                return Ok(());
            }
        }
    }

    wait_for_key()
}

fn run_state_graph(
    game_state: GameState,
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> Result<String, Box<dyn std::error::Error>> {
    let mut state_graph = StateGraph::new();
    let first_state_id = state_graph.upsert_state(game_state);

    let start_time = Instant::now();
    let mut last_render_time = start_time;
    let mut processed_since_last_render = 0;

    'outer: loop {
        let stop_time = Instant::now() + Duration::from_millis(1000);
        while Instant::now() < stop_time {
            if state_graph.nodes.len() >= DEFAULT_GRAPH_NODE_LIMIT {
                log::warn!("State graph node limit {} reached", DEFAULT_GRAPH_NODE_LIMIT);
                break 'outer;
            }
            let PopulateResult::Populated(_) = populate_step(&mut state_graph) else {
                break 'outer;
            };
            processed_since_last_render += 1;
        }

        let current_time = Instant::now();
        render_graph(terminal, GraphRenderState {
            graph: &state_graph,
            processed_since_last_render,
            start_time,
            last_render_time,
            current_time,
        })?;

        last_render_time = current_time;
        processed_since_last_render = 0;
    }

    let info = get_graph_info(&state_graph);
    let shortest = if state_graph.is_fully_populated() {
        shortest_solution_length(&state_graph, first_state_id)
    } else {
        None
    };
    log::info!("{}", info);
    log::info!("Shortest solution length: {:?}", shortest);

    if let Some(parent) = Path::new(GRAPH_EXPORT_PATH).parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(GRAPH_EXPORT_PATH, get_json_data(&state_graph)?)?;

    let verdict = match shortest {
        Some(length) => format!("Shortest solution: {} moves", length),
        None if state_graph.is_fully_populated() => "No goal state is reachable".to_string(),
        None => "Graph is incomplete, shortest solution unknown".to_string(),
    };
    Ok(format!(
        "{}\n{}\nState graph exported to {}",
        info, verdict, GRAPH_EXPORT_PATH
    ))
}

fn run_interactive(
    game_state: GameState,
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut game_state = game_state;
    // Initial render
    let first_render = GameRenderState {
        game: game_state.clone(),
        won: game_state.is_won(),
        error: None,
        last_change: None,
        progress: None,
    };
    render_game(terminal, &first_render)?;

    loop {
        match handle_input()? {
            Quit => break,
            Move(direction) => {
                let game_update = step(&game_state, direction);
                let mut change = None;
                let mut error = None;
                match game_update {
                    GameUpdate::NextState(new_state, change_type) => {
                        game_state = new_state;
                        change = Some(change_type);
                    }
                    GameUpdate::Error(err) => error = Some(err),
                }
                let to_render = GameRenderState {
                    game: game_state.clone(),
                    won: game_state.is_won(),
                    error,
                    last_change: change,
                    progress: None,
                };
                render_game(terminal, &to_render)?;

                if to_render.won {
                    // Keep showing the win screen until user inputs
                    return wait_for_key();
                }
            }
            Timeout | Unknown => {}
        }
    }

    Ok(())
}

fn wait_for_key() -> Result<(), Box<dyn std::error::Error>> {
    loop {
        match handle_input()? {
            Timeout => {}
            _ => return Ok(()),
        }
    }
}
