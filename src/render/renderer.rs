use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};
use std::collections::HashMap;

use crate::game::{BugPart, GameState, Mode, Phase, Position, Segment, Tile, TimerPurpose};

const BUG_COLORS: [Color; 5] = [
    Color::Yellow,
    Color::LightMagenta,
    Color::LightBlue,
    Color::LightGreen,
    Color::LightRed,
];

pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, state: &GameState) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(0),    // Game area
                Constraint::Length(3), // Footer
            ])
            .split(frame.area());

        // Render header with basic stats
        let stats = self.render_stats(chunks[0], state);
        frame.render_widget(stats, chunks[0]);

        // Center the board horizontally
        let game_area = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(10),
                Constraint::Percentage(80),
                Constraint::Percentage(10),
            ])
            .split(chunks[1])[1];

        match state.phase {
            Phase::Menu => frame.render_widget(self.render_menu(game_area, state), game_area),
            Phase::End if state.snake.is_empty() => {
                frame.render_widget(self.render_game_over(game_area, state), game_area)
            }
            Phase::Play | Phase::Pause | Phase::End => {
                frame.render_widget(self.render_grid(game_area, state), game_area)
            }
        }

        // Render footer with controls
        let controls = self.render_controls(chunks[2], state);
        frame.render_widget(controls, chunks[2]);
    }

    fn render_grid(&self, _area: Rect, state: &GameState) -> Paragraph<'_> {
        let segments: HashMap<Position, Segment> =
            state.snake.iter().map(|segment| (segment.pos, *segment)).collect();
        let head = state.snake.head();
        // Walls flicker red while the restart is pending
        let glitching = state.timers.is_armed(TimerPurpose::Restart);

        let mut lines = Vec::new();

        for y in 0..state.board_height() {
            let mut spans = Vec::new();

            for x in 0..state.board_width() {
                let pos = Position::new(x as i32, y as i32);

                let cell = if Some(pos) == head {
                    // Snake head - distinct color
                    let color = if state.mode == Mode::Tron {
                        Color::Magenta
                    } else {
                        Color::Cyan
                    };
                    Span::styled("■ ", Style::default().fg(color).add_modifier(Modifier::BOLD))
                } else if let Some(segment) = segments.get(&pos) {
                    self.segment_span(segment, state.mode)
                } else {
                    self.tile_span(state.board.tile(pos), glitching && (x + y) % 2 == 0)
                };

                spans.push(cell);
            }

            lines.push(Line::from(spans));
        }

        let title = match state.phase {
            Phase::Pause => " Paused ",
            Phase::End => " Game Over ",
            _ => " Snake ",
        };

        Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Double)
                    .border_style(Style::default().fg(Color::White))
                    .title(title),
            )
            .alignment(Alignment::Center)
    }

    fn segment_span(&self, segment: &Segment, mode: Mode) -> Span<'static> {
        match segment.glitch {
            // Fully faded tail first, then progressively more solid
            Some(intensity) if intensity < 0.5 => {
                Span::styled("░ ", Style::default().fg(Color::DarkGray))
            }
            Some(_) => Span::styled("▒ ", Style::default().fg(Color::Gray)),
            None => {
                let color = match mode {
                    Mode::Snake => Color::Green,
                    Mode::Sticky => Color::Yellow,
                    Mode::Tron => Color::Magenta,
                };
                Span::styled("□ ", Style::default().fg(color))
            }
        }
    }

    fn tile_span(&self, tile: Tile, glitching: bool) -> Span<'static> {
        match tile {
            Tile::Wall { glitched: false } => {
                let color = if glitching { Color::Red } else { Color::White };
                Span::styled("██", Style::default().fg(color))
            }
            Tile::Wall { glitched: true } => {
                Span::styled("▚▚", Style::default().fg(Color::Magenta))
            }
            Tile::Food => Span::styled(
                "● ",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ),
            Tile::BuggyBug { part, variant } => {
                let color = BUG_COLORS[usize::from(variant.clamp(1, 5)) - 1];
                let text = match part {
                    BugPart::Left => "<(",
                    BugPart::Right => ")>",
                };
                Span::styled(text, Style::default().fg(color).add_modifier(Modifier::BOLD))
            }
            Tile::Empty => Span::styled("  ", Style::default()),
        }
    }

    fn render_stats(&self, _area: Rect, state: &GameState) -> Paragraph<'_> {
        let mode = match state.mode {
            Mode::Snake => "snake",
            Mode::Sticky => "sticky",
            Mode::Tron => "tron",
        };

        let mut spans = vec![
            Span::styled("Score: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                state.score.to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("    "),
            Span::styled("Hi: ", Style::default().fg(Color::Yellow)),
            Span::styled(state.hiscore.to_string(), Style::default().fg(Color::White)),
            Span::raw("    "),
            Span::styled("Level: ", Style::default().fg(Color::Yellow)),
            Span::styled(state.level.to_string(), Style::default().fg(Color::White)),
            Span::raw("    "),
            Span::styled("Mode: ", Style::default().fg(Color::Yellow)),
            Span::styled(mode, Style::default().fg(Color::White)),
        ];

        if state.mode == Mode::Sticky || state.board.bug().is_some() {
            spans.push(Span::raw("    "));
            spans.push(Span::styled("Bug: ", Style::default().fg(Color::Yellow)));
            spans.push(Span::styled(
                state.buggy_bug_time_left.max(0).to_string(),
                Style::default().fg(Color::White),
            ));
        }

        Paragraph::new(Line::from(spans)).alignment(Alignment::Center)
    }

    fn render_menu(&self, _area: Rect, state: &GameState) -> Paragraph<'_> {
        let text = vec![
            Line::from(""),
            Line::from(vec![Span::styled(
                "S N A K E",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            )]),
            Line::from(""),
            Line::from(vec![
                Span::styled("High Score: ", Style::default().fg(Color::Yellow)),
                Span::styled(state.hiscore.to_string(), Style::default().fg(Color::White)),
            ]),
            Line::from(""),
            Line::from(vec![Span::styled(
                "Press an arrow key or Enter to start",
                Style::default().fg(Color::Gray),
            )]),
        ];

        Paragraph::new(text).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .border_style(Style::default().fg(Color::White)),
        )
    }

    fn render_game_over(&self, _area: Rect, state: &GameState) -> Paragraph<'_> {
        let text = vec![
            Line::from(""),
            Line::from(vec![Span::styled(
                "GAME OVER",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Final Score: ", Style::default().fg(Color::Yellow)),
                Span::styled(
                    state.score.to_string(),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(vec![
                Span::styled("High Score: ", Style::default().fg(Color::Yellow)),
                Span::styled(state.hiscore.to_string(), Style::default().fg(Color::White)),
            ]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Press any key", Style::default().fg(Color::Gray)),
                Span::styled(" to play again or ", Style::default().fg(Color::Gray)),
                Span::styled(
                    "Q",
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                ),
                Span::styled(" to quit", Style::default().fg(Color::Gray)),
            ]),
        ];

        Paragraph::new(text).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red)),
        )
    }

    fn render_controls(&self, _area: Rect, state: &GameState) -> Paragraph<'_> {
        if !state.show_hint {
            return Paragraph::new("");
        }

        let text = vec![Line::from(vec![
            Span::styled("↑↓←→", Style::default().fg(Color::Cyan)),
            Span::raw(" or "),
            Span::styled("WASD", Style::default().fg(Color::Cyan)),
            Span::raw(" to move | "),
            Span::styled("P", Style::default().fg(Color::Cyan)),
            Span::raw(" pause | "),
            Span::styled("M", Style::default().fg(Color::Cyan)),
            Span::raw(" mute | "),
            Span::styled("Q", Style::default().fg(Color::Red)),
            Span::raw(" to quit"),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::GameConfig;
    use ratatui::{Terminal, backend::TestBackend};

    fn draw(state: &GameState) -> String {
        let backend = TestBackend::new(90, 40);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| Renderer::new().render(frame, state))
            .unwrap();

        let buffer = terminal.backend().buffer();
        buffer
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_menu_shows_high_score() {
        let state = GameState::new(&GameConfig::default(), 77);
        let screen = draw(&state);
        assert!(screen.contains("High Score: 77"));
    }

    #[test]
    fn test_play_shows_board() {
        let mut state = GameState::new(&GameConfig::default(), 0);
        state.phase = Phase::Play;
        let screen = draw(&state);

        assert!(screen.contains("Score: 0"));
        assert!(screen.contains("█"));
        assert!(screen.contains("■"));
    }

    #[test]
    fn test_game_over_after_dissolve() {
        let mut state = GameState::new(&GameConfig::default(), 3);
        state.phase = Phase::End;
        state.score = 9;
        state.snake.segments.clear();

        let screen = draw(&state);
        assert!(screen.contains("GAME OVER"));
        assert!(screen.contains("Final Score: 9"));
    }
}
