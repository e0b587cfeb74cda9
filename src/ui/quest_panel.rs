//! Quest list panel with progress bars and claim state.

use crate::quests::{quest_stats, QuestKind, QuestLog, QuestState};
use crate::rewards::LAMPORTS_PER_SOL;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

fn kind_label(kind: QuestKind) -> &'static str {
    match kind {
        QuestKind::Daily => "Daily",
        QuestKind::Weekly => "Weekly",
        QuestKind::Achievement => "Achievement",
    }
}

fn sol_amount(lamports: u64) -> String {
    format!("{:.3} SOL", lamports as f64 / LAMPORTS_PER_SOL as f64)
}

/// Render the quest panel. `selected` indexes into the log's quest list.
pub fn render_quests(frame: &mut Frame, area: Rect, log: &QuestLog, selected: usize) {
    frame.render_widget(Clear, area);

    let stats = quest_stats(log);
    let block = Block::default()
        .title(format!(
            " Quests ({}/{} done, {} claimable) ",
            stats.completed,
            stats.total,
            sol_amount(stats.claimable_lamports)
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Magenta));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.height < 2 || inner.width < 10 {
        return;
    }

    let mut lines = Vec::new();
    for (i, quest) in log.quests.iter().enumerate() {
        let marker = if i == selected { "> " } else { "  " };
        let (state_label, state_color) = match quest.state() {
            QuestState::Locked => ("accept with [A]", Color::DarkGray),
            QuestState::Accepted => ("in progress", Color::Cyan),
            QuestState::Completed => ("claim with [C]!", Color::Yellow),
            QuestState::Claimed => ("claimed", Color::Green),
        };

        let title_style = if i == selected {
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };

        lines.push(Line::from(vec![
            Span::raw(marker),
            Span::styled(format!("{} {}", quest.icon, quest.title), title_style),
            Span::styled(
                format!("  [{}]", kind_label(quest.kind)),
                Style::default().fg(Color::DarkGray),
            ),
        ]));
        lines.push(Line::from(vec![
            Span::raw("    "),
            Span::styled(
                progress_bar(quest.progress, quest.target, 12),
                Style::default().fg(Color::Green),
            ),
            Span::styled(
                format!(" {}/{}", quest.progress, quest.target),
                Style::default().fg(Color::DarkGray),
            ),
            Span::raw("  "),
            Span::styled(
                sol_amount(quest.reward_lamports),
                Style::default().fg(Color::Yellow),
            ),
            Span::raw("  "),
            Span::styled(state_label, Style::default().fg(state_color)),
        ]));
    }

    // Keep the selected quest visible when the list overflows.
    let visible = inner.height as usize;
    let selected_line = selected * 2;
    let scroll = selected_line.saturating_sub(visible.saturating_sub(2)) as u16;

    frame.render_widget(Paragraph::new(lines).scroll((scroll, 0)), inner);
}

fn progress_bar(progress: u32, target: u32, width: usize) -> String {
    let ratio = if target > 0 {
        (progress as f64 / target as f64).min(1.0)
    } else {
        0.0
    };
    let filled = (ratio * width as f64).round() as usize;
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_bar_bounds() {
        assert_eq!(progress_bar(0, 10, 4), "░░░░");
        assert_eq!(progress_bar(10, 10, 4), "████");
        assert_eq!(progress_bar(25, 10, 4), "████");
    }

    #[test]
    fn test_sol_amount_formatting() {
        assert_eq!(sol_amount(1_000_000), "0.001 SOL");
        assert_eq!(sol_amount(LAMPORTS_PER_SOL), "1.000 SOL");
    }
}
