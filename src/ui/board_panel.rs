//! Leaderboard view with a cycling time filter.

use crate::identity::short_address;
use crate::leaderboard::{Leaderboard, TimeFilter};
use chrono::{DateTime, Utc};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

const TOP_LIMIT: usize = 10;

pub fn filter_label(filter: TimeFilter) -> &'static str {
    match filter {
        TimeFilter::All => "All time",
        TimeFilter::Daily => "Today",
        TimeFilter::Weekly => "This week",
        TimeFilter::Monthly => "This month",
    }
}

/// The next filter in [F] cycling order.
pub fn next_filter(filter: TimeFilter) -> TimeFilter {
    match filter {
        TimeFilter::All => TimeFilter::Daily,
        TimeFilter::Daily => TimeFilter::Weekly,
        TimeFilter::Weekly => TimeFilter::Monthly,
        TimeFilter::Monthly => TimeFilter::All,
    }
}

pub fn render_board(
    frame: &mut Frame,
    area: Rect,
    board: &Leaderboard,
    filter: TimeFilter,
    own_address: &str,
    now: DateTime<Utc>,
) {
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(format!(" Leaderboard: {} ([F] filter) ", filter_label(filter)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Blue));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.height < 1 || inner.width < 10 {
        return;
    }

    let top = board.top(TOP_LIMIT, filter, now);
    let mut lines = Vec::new();
    if top.is_empty() {
        lines.push(Line::from(Span::styled(
            "No scores yet. Go fly!",
            Style::default().fg(Color::DarkGray),
        )));
    }
    for (rank, entry) in top.iter().enumerate() {
        let mine = entry.address == own_address;
        let row_style = if mine {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };
        lines.push(Line::from(vec![
            Span::styled(format!("{:>3}. ", rank + 1), Style::default().fg(Color::DarkGray)),
            Span::styled(format!("{:<20}", entry.name), row_style),
            Span::styled(format!("{:>6}", entry.score), row_style),
            Span::styled(
                format!("  {}", short_address(&entry.address)),
                Style::default().fg(Color::DarkGray),
            ),
        ]));
    }

    if let Some(best) = board.personal_best(own_address) {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("Your best: {}", best),
            Style::default().fg(Color::Cyan),
        )));
    }

    frame.render_widget(Paragraph::new(lines), inner);
}
