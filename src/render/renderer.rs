use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::game::{Position, RenderState, RunState};
use crate::metrics::SessionMetrics;
use crate::render::theme::{Palette, Theme};

pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render(
        &self,
        frame: &mut Frame,
        state: &RenderState,
        name_input: &str,
        theme: Theme,
        metrics: &SessionMetrics,
    ) {
        let palette = theme.palette();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(0),    // Game area
                Constraint::Length(3), // Footer
            ])
            .split(frame.area());

        let header = self.render_header(state, metrics, &palette);
        frame.render_widget(header, chunks[0]);

        // Center the game area horizontally
        let game_area = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(10),
                Constraint::Percentage(80),
                Constraint::Percentage(10),
            ])
            .split(chunks[1])[1];

        match state.run_state {
            RunState::Idle => {
                let overlay = self.render_start_overlay(name_input, theme, &palette);
                frame.render_widget(overlay, game_area);
            }
            RunState::Running => {
                let grid = self.render_grid(game_area, state, &palette);
                frame.render_widget(grid, game_area);
            }
            RunState::GameOver => {
                let overlay = self.render_game_over(state, &palette);
                frame.render_widget(overlay, game_area);
            }
        }

        let footer = self.render_controls(state.run_state, theme, &palette);
        frame.render_widget(footer, chunks[2]);
    }

    fn render_grid(&self, _area: Rect, state: &RenderState, palette: &Palette) -> Paragraph<'_> {
        let head = state.cells.first().copied();
        let mut lines = Vec::new();

        for y in 0..state.rows {
            let mut spans = Vec::new();

            for x in 0..state.columns {
                let pos = Position::new(x as i32, y as i32);

                let cell = if Some(pos) == head {
                    Span::styled(
                        "● ",
                        Style::default()
                            .fg(palette.snake_head)
                            .add_modifier(Modifier::BOLD),
                    )
                } else if state.cells.contains(&pos) {
                    Span::styled("■ ", Style::default().fg(palette.snake_body))
                } else if pos == state.food {
                    Span::styled(
                        "◆ ",
                        Style::default()
                            .fg(palette.food)
                            .add_modifier(Modifier::BOLD),
                    )
                } else {
                    Span::styled("· ", Style::default().fg(palette.muted))
                };

                spans.push(cell);
            }

            lines.push(Line::from(spans));
        }

        Paragraph::new(lines)
            .style(Style::default().bg(palette.board))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Double)
                    .border_style(Style::default().fg(palette.text))
                    .title(" Snake "),
            )
            .alignment(Alignment::Center)
    }

    fn render_header(
        &self,
        state: &RenderState,
        metrics: &SessionMetrics,
        palette: &Palette,
    ) -> Paragraph<'_> {
        let text = vec![Line::from(vec![
            Span::styled(
                state.player_name.to_string(),
                Style::default()
                    .fg(palette.accent)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(" — Score: ", Style::default().fg(palette.muted)),
            Span::styled(
                state.score.to_string(),
                Style::default()
                    .fg(palette.text)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("    "),
            Span::styled("High: ", Style::default().fg(palette.muted)),
            Span::styled(
                format!("{} ({})", state.high_score.score, state.high_score.name),
                Style::default().fg(palette.text),
            ),
            Span::raw("    "),
            Span::styled("Time: ", Style::default().fg(palette.muted)),
            Span::styled(metrics.format_time(), Style::default().fg(palette.text)),
            Span::raw("    "),
            Span::styled("Runs: ", Style::default().fg(palette.muted)),
            Span::styled(
                metrics.runs_played().to_string(),
                Style::default().fg(palette.text),
            ),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }

    fn render_start_overlay(
        &self,
        name_input: &str,
        theme: Theme,
        palette: &Palette,
    ) -> Paragraph<'_> {
        let text = vec![
            Line::from(""),
            Line::from(vec![Span::styled(
                "S N A K E",
                Style::default()
                    .fg(palette.accent)
                    .add_modifier(Modifier::BOLD),
            )]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Name: ", Style::default().fg(palette.muted)),
                Span::styled(
                    format!("{}_", name_input),
                    Style::default().fg(palette.text),
                ),
            ]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Press ", Style::default().fg(palette.muted)),
                Span::styled(
                    "Enter",
                    Style::default()
                        .fg(palette.snake_body)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(" to play", Style::default().fg(palette.muted)),
            ]),
            Line::from(vec![
                Span::styled("Theme: ", Style::default().fg(palette.muted)),
                Span::styled(theme.label(), Style::default().fg(palette.text)),
                Span::styled(" (Tab to change)", Style::default().fg(palette.muted)),
            ]),
        ];

        Paragraph::new(text)
            .style(Style::default().bg(palette.board))
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(palette.accent)),
            )
    }

    fn render_game_over(&self, state: &RenderState, palette: &Palette) -> Paragraph<'_> {
        let text = vec![
            Line::from(""),
            Line::from(vec![Span::styled(
                "GAME OVER",
                Style::default()
                    .fg(palette.food)
                    .add_modifier(Modifier::BOLD),
            )]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Final Score: ", Style::default().fg(palette.muted)),
                Span::styled(
                    state.score.to_string(),
                    Style::default()
                        .fg(palette.text)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(vec![
                Span::styled("High: ", Style::default().fg(palette.muted)),
                Span::styled(
                    format!("{} ({})", state.high_score.score, state.high_score.name),
                    Style::default().fg(palette.text),
                ),
            ]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Press ", Style::default().fg(palette.muted)),
                Span::styled(
                    "R",
                    Style::default()
                        .fg(palette.snake_body)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(" to restart or ", Style::default().fg(palette.muted)),
                Span::styled(
                    "M",
                    Style::default()
                        .fg(palette.accent)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(" for the menu", Style::default().fg(palette.muted)),
            ]),
        ];

        Paragraph::new(text)
            .style(Style::default().bg(palette.board))
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(palette.food)),
            )
    }

    fn render_controls(&self, run_state: RunState, theme: Theme, palette: &Palette) -> Paragraph<'_> {
        let spans = match run_state {
            RunState::Idle => vec![
                Span::styled("Type a name | ", Style::default().fg(palette.muted)),
                Span::styled("Enter", Style::default().fg(palette.accent)),
                Span::styled(" play | ", Style::default().fg(palette.muted)),
                Span::styled("Tab", Style::default().fg(palette.accent)),
                Span::styled(
                    format!(" theme ({}) | ", theme.label()),
                    Style::default().fg(palette.muted),
                ),
                Span::styled("Esc", Style::default().fg(palette.food)),
                Span::styled(" quit", Style::default().fg(palette.muted)),
            ],
            RunState::Running => vec![
                Span::styled("↑↓←→", Style::default().fg(palette.accent)),
                Span::styled(" or ", Style::default().fg(palette.muted)),
                Span::styled("WASD", Style::default().fg(palette.accent)),
                Span::styled(" or swipe | ", Style::default().fg(palette.muted)),
                Span::styled("T", Style::default().fg(palette.accent)),
                Span::styled(" theme | ", Style::default().fg(palette.muted)),
                Span::styled("Esc", Style::default().fg(palette.accent)),
                Span::styled(" menu | ", Style::default().fg(palette.muted)),
                Span::styled("Q", Style::default().fg(palette.food)),
                Span::styled(" quit", Style::default().fg(palette.muted)),
            ],
            RunState::GameOver => vec![
                Span::styled("R", Style::default().fg(palette.accent)),
                Span::styled(" restart | ", Style::default().fg(palette.muted)),
                Span::styled("M", Style::default().fg(palette.accent)),
                Span::styled(" menu | ", Style::default().fg(palette.muted)),
                Span::styled("T", Style::default().fg(palette.accent)),
                Span::styled(" theme | ", Style::default().fg(palette.muted)),
                Span::styled("Q", Style::default().fg(palette.food)),
                Span::styled(" quit", Style::default().fg(palette.muted)),
            ],
        };

        Paragraph::new(vec![Line::from(spans)]).alignment(Alignment::Center)
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}
