//! Cosmetic shop: catalog listing with ownership and equip markers.

use crate::cosmetics::{is_owned, CosmeticItem, CosmeticKind, CATALOG};
use crate::rewards::LAMPORTS_PER_SOL;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

fn kind_label(kind: CosmeticKind) -> &'static str {
    match kind {
        CosmeticKind::Bird => "Bird",
        CosmeticKind::Pipe => "Pipe",
        CosmeticKind::Background => "Background",
        CosmeticKind::Effect => "Effect",
    }
}

fn price_label(item: &CosmeticItem) -> String {
    if item.price_lamports == 0 {
        "free".to_string()
    } else {
        format!("{:.3} SOL", item.price_lamports as f64 / LAMPORTS_PER_SOL as f64)
    }
}

/// Render the shop. `selected` indexes into [`CATALOG`].
pub fn render_shop(
    frame: &mut Frame,
    area: Rect,
    owned: &[String],
    equipped_bird: Option<&str>,
    equipped_pipe: Option<&str>,
    selected: usize,
) {
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Shop ([Enter] buy, [E] equip) ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.height < 1 || inner.width < 10 {
        return;
    }

    let mut lines = Vec::new();
    for (i, item) in CATALOG.iter().enumerate() {
        let marker = if i == selected { "> " } else { "  " };
        let equipped = equipped_bird == Some(item.id) || equipped_pipe == Some(item.id);
        let (status, color) = if equipped {
            ("equipped", Color::Green)
        } else if is_owned(owned, item.id) {
            ("owned", Color::Cyan)
        } else {
            ("", Color::DarkGray)
        };

        let name_style = if i == selected {
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };

        lines.push(Line::from(vec![
            Span::raw(marker),
            Span::styled(item.name, name_style),
            Span::styled(
                format!("  [{}]", kind_label(item.kind)),
                Style::default().fg(Color::DarkGray),
            ),
            Span::styled(
                format!("  {}", price_label(item)),
                Style::default().fg(Color::Yellow),
            ),
            Span::styled(format!("  {}", status), Style::default().fg(color)),
        ]));
    }

    let visible = inner.height as usize;
    let scroll = selected.saturating_sub(visible.saturating_sub(1)) as u16;
    frame.render_widget(Paragraph::new(lines).scroll((scroll, 0)), inner);
}
