use crate::core::Cell::{
    Crate, CrateOnStorage, Empty, Player, PlayerOnStorage, Storage, Wall,
};
use crate::core::{BoundedGrid, Cell, Direction, GameState, LevelError, Vec2};
use crate::models::GameRenderState;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction as LayoutDirection, Layout},
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
};
use std::io;

/// Parses the usual text format. Blank lines are skipped, short rows are padded with `Empty`.
pub fn parse_level(s: &str) -> Result<GameState, LevelError> {
    let mut rows: Vec<Vec<Cell>> = Vec::new();
    let mut player = None;

    for line in s.lines() {
        let line = line.trim_end_matches('\r');
        if line.trim().is_empty() {
            continue;
        }

        let i = rows.len() as i32;
        let mut row = Vec::new();
        for (j, ch) in line.chars().enumerate() {
            let c = match ch {
                '#' => Wall,
                ' ' => Empty,
                '.' => Storage,
                '$' => Crate,
                '*' => CrateOnStorage,
                '@' => Player,
                '+' => PlayerOnStorage,
                _ => Empty,
            };
            if c.has_player() {
                player = Some(Vec2 { i, j: j as i32 });
            }
            row.push(c);
        }
        rows.push(row);
    }

    if rows.is_empty() {
        return Err(LevelError::Empty);
    }
    let player = player.ok_or(LevelError::NoPlayer)?;

    Ok(GameState {
        grid: BoundedGrid::from_rows(rows, Empty),
        player,
    })
}

pub fn render_game_to_string(game: &GameState) -> String {
    let mut result = String::new();
    for i in 0..game.grid.rows() {
        for c in game.grid.row(i) {
            let ch = match c {
                Wall => '#',
                Empty => ' ',
                Storage => '.',
                Crate => '$',
                CrateOnStorage => '*',
                Player => '@',
                PlayerOnStorage => '+',
            };
            result.push(ch);
        }
        result.push('\n');
    }
    result
}

pub fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>, Box<dyn std::error::Error>>
{
    crossterm::terminal::enable_raw_mode()?;
    crossterm::execute!(io::stdout(), crossterm::terminal::EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(io::stdout());
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

pub fn cleanup_terminal() -> Result<(), Box<dyn std::error::Error>> {
    crossterm::terminal::disable_raw_mode()?;
    crossterm::execute!(io::stdout(), crossterm::terminal::LeaveAlternateScreen)?;
    Ok(())
}

pub fn render_game(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    state: &GameRenderState,
) -> Result<(), Box<dyn std::error::Error>> {
    terminal.draw(|f| {
        let chunks = Layout::default()
            .direction(LayoutDirection::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(3)])
            .split(f.area());

        // Game area
        let game_text = render_game_to_string(&state.game);
        let game_paragraph = Paragraph::new(game_text)
            .block(Block::default().borders(Borders::ALL).title("Sokoban"))
            .style(Style::default().fg(Color::White))
            .alignment(Alignment::Center);
        f.render_widget(game_paragraph, chunks[0]);

        f.render_widget(instructions_paragraph(state), chunks[1]);
    })?;
    Ok(())
}

fn instructions_paragraph(state: &GameRenderState) -> Paragraph<'static> {
    let instructions = match (state.won, state.progress) {
        (true, _) => "Solved! Press any key to quit.",
        (false, Some(_)) => "Replaying solution, Q to quit",
        (false, None) => "Controls: WASD or Arrow keys to move, Q to quit",
    };
    let mut instructions = instructions.to_string();

    if let Some((shown, total)) = state.progress {
        instructions = format!("{} | Move {}/{}", instructions, shown, total);
    }
    if let Some(err) = &state.error {
        instructions = format!("{} | Error: {}", instructions, err);
    }
    if let Some(change_type) = &state.last_change {
        instructions = format!("{} | Last: {:?}", instructions, change_type);
    }

    Paragraph::new(instructions)
        .block(Block::default().borders(Borders::ALL).title("Instructions"))
        .style(Style::default().fg(Color::Cyan))
        .alignment(Alignment::Center)
}

pub enum ConsoleInput {
    Move(Direction),
    Quit,
    Timeout,
    Unknown,
}

pub fn handle_input() -> Result<ConsoleInput, Box<dyn std::error::Error>> {
    if event::poll(std::time::Duration::from_millis(50))? {
        if let Event::Key(KeyEvent {
            code,
            kind: KeyEventKind::Press,
            ..
        }) = event::read()?
        {
            return Ok(match code {
                KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => ConsoleInput::Quit,
                KeyCode::Char('w') | KeyCode::Char('W') | KeyCode::Up => {
                    ConsoleInput::Move(Direction::Up)
                }
                KeyCode::Char('s') | KeyCode::Char('S') | KeyCode::Down => {
                    ConsoleInput::Move(Direction::Down)
                }
                KeyCode::Char('a') | KeyCode::Char('A') | KeyCode::Left => {
                    ConsoleInput::Move(Direction::Left)
                }
                KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Right => {
                    ConsoleInput::Move(Direction::Right)
                }
                _ => ConsoleInput::Unknown,
            });
        }
    }
    Ok(ConsoleInput::Timeout)
}
