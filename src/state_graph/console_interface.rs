use crate::state_graph::StateGraph;
use crate::state_graph::analysis::get_graph_info;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::Alignment;
use ratatui::prelude::{Color, Style};
use ratatui::widgets::*;
use std::io;
use std::time::Instant;

pub struct GraphRenderState<'a> {
    pub graph: &'a StateGraph,
    pub processed_since_last_render: usize,
    pub start_time: Instant,
    pub last_render_time: Instant,
    pub current_time: Instant,
}

pub fn render_graph(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    state: GraphRenderState,
) -> Result<(), Box<dyn std::error::Error>> {
    let description = describe_progress(&state);
    log::debug!("{}", description);

    terminal.draw(|f| {
        let paragraph = Paragraph::new(description)
            .block(Block::default().borders(Borders::ALL).title("State Graph Info"))
            .style(Style::default().fg(Color::White))
            .alignment(Alignment::Center);

        f.render_widget(paragraph, f.area());
    })?;
    Ok(())
}

fn describe_progress(state: &GraphRenderState) -> String {
    let since_last = state
        .current_time
        .duration_since(state.last_render_time)
        .as_secs_f64();
    let rate = if since_last > 0.0 {
        state.processed_since_last_render as f64 / since_last
    } else {
        0.0
    };
    format!(
        "{}\nElapsed: {:.1}s\nExpanding {:.0} nodes/s",
        get_graph_info(state.graph),
        state.current_time.duration_since(state.start_time).as_secs_f64(),
        rate
    )
}
