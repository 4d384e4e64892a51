use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::game::{BoardView, CellKind, EndReason, Phase};
use crate::metrics::GameMetrics;

pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, view: &BoardView, metrics: &GameMetrics) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),                         // Header
                Constraint::Length(view.grid_size as u16 + 2), // Board
                Constraint::Length(1),                         // Status
                Constraint::Min(0),
                Constraint::Length(3), // Footer
            ])
            .split(frame.area());

        frame.render_widget(self.render_stats(view, metrics), chunks[0]);
        frame.render_widget(self.render_grid(view), chunks[1]);
        frame.render_widget(self.render_status(view), chunks[2]);
        frame.render_widget(self.render_controls(view), chunks[4]);
    }

    fn render_grid(&self, view: &BoardView) -> Paragraph<'_> {
        let lines: Vec<Line> = (0..view.grid_size)
            .map(|y| {
                let spans: Vec<Span> = view.row(y).iter().map(|&cell| cell_span(cell)).collect();
                Line::from(spans)
            })
            .collect();

        let border_color = if view.game_over { Color::Red } else { Color::Magenta };

        Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(border_color))
                    .title(" Heart Snake "),
            )
            .alignment(Alignment::Center)
    }

    fn render_stats(&self, view: &BoardView, metrics: &GameMetrics) -> Paragraph<'_> {
        let text = vec![Line::from(vec![
            Span::styled("Score: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                view.score.to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("    "),
            Span::styled("Best: ", Style::default().fg(Color::Yellow)),
            Span::styled(view.best_score.to_string(), Style::default().fg(Color::White)),
            Span::raw("    "),
            Span::styled("Time: ", Style::default().fg(Color::Yellow)),
            Span::styled(metrics.format_time(), Style::default().fg(Color::White)),
            Span::raw("    "),
            Span::styled("Games: ", Style::default().fg(Color::Yellow)),
            Span::styled(metrics.games_played.to_string(), Style::default().fg(Color::White)),
        ])];

        Paragraph::new(text)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::BOTTOM))
    }

    fn render_status(&self, view: &BoardView) -> Paragraph<'_> {
        let style = match view.end_reason {
            Some(reason) if reason.is_win() => Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
            Some(_) => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            None => Style::default().fg(Color::Gray),
        };

        Paragraph::new(Line::from(Span::styled(status_text(view), style)))
            .alignment(Alignment::Center)
    }

    fn render_controls(&self, view: &BoardView) -> Paragraph<'_> {
        let run_label = if view.running { " pause | " } else { " start | " };
        let text = vec![Line::from(vec![
            Span::styled("↑↓←→", Style::default().fg(Color::Cyan)),
            Span::raw(" or "),
            Span::styled("WASD", Style::default().fg(Color::Cyan)),
            Span::raw(" to move | "),
            Span::styled("Space", Style::default().fg(Color::Cyan)),
            Span::raw(run_label),
            Span::styled("R", Style::default().fg(Color::Green)),
            Span::raw(" restart | "),
            Span::styled("Q", Style::default().fg(Color::Red)),
            Span::raw(" quit"),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

fn cell_span(cell: CellKind) -> Span<'static> {
    match cell {
        CellKind::Head => Span::styled(
            "■ ",
            Style::default()
                .fg(Color::LightMagenta)
                .add_modifier(Modifier::BOLD),
        ),
        CellKind::Body => Span::styled("□ ", Style::default().fg(Color::Magenta)),
        CellKind::Food => Span::styled(
            "♥ ",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
        CellKind::Empty => Span::styled(". ", Style::default().fg(Color::DarkGray)),
    }
}

/// One-line hint under the board
pub fn status_text(view: &BoardView) -> &'static str {
    match view.phase {
        Phase::Idle => "Press an arrow key to start.",
        Phase::Running => "Eat hearts. Don't crash.",
        Phase::Paused => "Paused. Press Space or an arrow key to resume.",
        Phase::GameOver(EndReason::BoardFull) => {
            "The board is full of hearts. You win! Press R to play again."
        }
        Phase::GameOver(_) => "Game over. Press R to restart.",
    }
}
