//! Rendering for the flappy game scene.

use crate::core::{constants, GamePhase, GameSession};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Render the game scene: play area plus a status bar.
pub fn render_game(frame: &mut Frame, area: Rect, session: &GameSession, high_score: u32) {
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" SolFlap ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(10), Constraint::Length(2)])
        .split(inner);

    render_play_area(frame, chunks[0], session);
    render_status_bar(frame, chunks[1], session, high_score);

    if session.phase == GamePhase::Over {
        render_game_over(frame, area, session, high_score);
    }
}

/// Map the 800x600 playfield onto the terminal cell grid.
fn render_play_area(frame: &mut Frame, area: Rect, session: &GameSession) {
    let width = area.width as usize;
    let height = area.height as usize;
    if width == 0 || height == 0 {
        return;
    }

    let x_scale = width as f64 / constants::PLAY_WIDTH;
    let y_scale = height as f64 / constants::PLAY_HEIGHT;

    let bird_col = (session.bird.x * x_scale).round() as usize;
    let bird_row = (session.bird.y * y_scale).round() as usize;
    let ground_row = (constants::GROUND_TOP * y_scale).round() as usize;

    let bird_char = if session.bird.velocity < -50.0 {
        "▲" // Flapping up
    } else if session.bird.velocity > 200.0 {
        "▼" // Falling fast
    } else {
        "►"
    };

    let mut lines = Vec::with_capacity(height);
    for row in 0..height {
        let mut spans = Vec::with_capacity(width);
        for col in 0..width {
            if row == bird_row && col == bird_col {
                spans.push(Span::styled(
                    bird_char,
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ));
                continue;
            }

            if row >= ground_row {
                spans.push(Span::styled("▒", Style::default().fg(Color::DarkGray)));
                continue;
            }

            let game_x = col as f64 / x_scale;
            let game_y = row as f64 / y_scale;
            let mut cell = None;
            for pair in &session.obstacles {
                if game_x >= pair.x && game_x < pair.x + constants::PIPE_WIDTH {
                    if game_y < pair.gap_top || game_y >= pair.gap_bottom() {
                        cell = Some(Span::styled("█", Style::default().fg(Color::Green)));
                    }
                    break;
                }
            }
            spans.push(cell.unwrap_or_else(|| Span::raw(" ")));
        }
        lines.push(Line::from(spans));
    }

    frame.render_widget(Paragraph::new(lines), area);
}

fn render_status_bar(frame: &mut Frame, area: Rect, session: &GameSession, high_score: u32) {
    let (message, color) = match session.phase {
        GamePhase::Ready => ("Press Space to start!".to_string(), Color::Yellow),
        GamePhase::Running => (
            format!(
                "Score: {}   Level: {}   Best: {}",
                session.score,
                session.difficulty_level(),
                high_score
            ),
            Color::Green,
        ),
        GamePhase::Over => ("Press R to play again".to_string(), Color::Red),
    };

    let lines = vec![
        Line::from(Span::styled(message, Style::default().fg(color))),
        Line::from(vec![
            Span::styled("[Space]", Style::default().fg(Color::Cyan)),
            Span::raw(" Flap  "),
            Span::styled("[Tab]", Style::default().fg(Color::Cyan)),
            Span::raw(" Quests  "),
            Span::styled("[Q]", Style::default().fg(Color::Cyan)),
            Span::raw(" Quit"),
        ]),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}

fn render_game_over(frame: &mut Frame, area: Rect, session: &GameSession, high_score: u32) {
    let overlay_width = 36.min(area.width);
    let overlay_height = 7.min(area.height);
    let overlay = Rect {
        x: area.x + (area.width.saturating_sub(overlay_width)) / 2,
        y: area.y + (area.height.saturating_sub(overlay_height)) / 2,
        width: overlay_width,
        height: overlay_height,
    };

    frame.render_widget(Clear, overlay);
    let block = Block::default()
        .title(" Game Over ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red));
    let inner = block.inner(overlay);
    frame.render_widget(block, overlay);

    let beat_best = session.score >= high_score && session.score > 0;
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("Score: {}", session.score),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(if beat_best {
            Span::styled("New high score!", Style::default().fg(Color::Yellow))
        } else {
            Span::styled(
                format!("Best: {}", high_score),
                Style::default().fg(Color::DarkGray),
            )
        }),
        Line::from(""),
        Line::from(Span::raw("Press R to restart")),
    ];
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), inner);
}
