//! Palette panel: the card catalog

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use super::helpers::scroll_offset;
use crate::app::App;
use crate::models::{DragOrigin, Focus, CATALOG};
use crate::theme::{
    BG_PRIMARY, BG_TERTIARY, BORDER_SUBTLE, CYAN_DIM, CYAN_PRIMARY, ROUNDED_BORDERS, TEXT_MUTED,
    TEXT_PRIMARY, TEXT_SECONDARY,
};

pub fn render_palette(area: Rect, app: &App, frame: &mut Frame) {
    let focused = app.focus == Focus::Palette;
    let border_color = if focused { CYAN_PRIMARY } else { BORDER_SUBTLE };
    let carrying = app
        .controller
        .dragging()
        .is_some_and(|item| item.origin() == DragOrigin::Palette);

    let block = Block::default()
        .title(" Cartes ")
        .borders(Borders::ALL)
        .border_set(ROUNDED_BORDERS)
        .border_style(Style::default().fg(border_color))
        .style(Style::default().bg(BG_PRIMARY));

    let mut lines = Vec::with_capacity(CATALOG.len());
    for (i, definition) in CATALOG.iter().enumerate() {
        let disabled = !app.board.accepts(definition);
        let selected = i == app.palette_index;

        let (marker, color) = if disabled {
            ("✓", TEXT_MUTED)
        } else if selected && carrying {
            ("⇢", CYAN_PRIMARY)
        } else if selected {
            ("›", TEXT_PRIMARY)
        } else {
            (" ", TEXT_SECONDARY)
        };

        let mut spans = vec![
            Span::styled(format!(" {} ", marker), Style::default().fg(color)),
            Span::styled(definition.label, Style::default().fg(color)),
        ];
        if definition.has_variants() {
            spans.push(Span::styled(
                format!(" ({})", definition.variants.len()),
                Style::default().fg(CYAN_DIM),
            ));
        }
        if disabled {
            spans.push(Span::styled(" placé", Style::default().fg(TEXT_MUTED)));
        }

        let mut line = Line::from(spans);
        if selected && focused {
            line = line.style(Style::default().bg(BG_TERTIARY).add_modifier(Modifier::BOLD));
        }
        lines.push(line);
    }

    let inner_height = block.inner(area).height as usize;
    let offset = scroll_offset(app.palette_index, inner_height);
    let paragraph = Paragraph::new(lines)
        .block(block)
        .scroll((offset as u16, 0));

    frame.render_widget(paragraph, area);
}
