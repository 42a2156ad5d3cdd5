//! Notes panel: the editable designer brief

use ratatui::{
    layout::Position,
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::app::App;
use crate::models::Focus;
use crate::theme::{
    BG_PRIMARY, BORDER_SUBTLE, CYAN_PRIMARY, GREEN_SUCCESS, ROUNDED_BORDERS, TEXT_MUTED,
    TEXT_PRIMARY,
};

pub fn render_notes(area: Rect, app: &App, frame: &mut Frame) {
    let focused = app.focus == Focus::Notes;
    let border_color = if focused { CYAN_PRIMARY } else { BORDER_SUBTLE };

    let mut block = Block::default()
        .title(" Notes ")
        .borders(Borders::ALL)
        .border_set(ROUNDED_BORDERS)
        .border_style(Style::default().fg(border_color))
        .style(Style::default().bg(BG_PRIMARY));
    if app.copied_at.is_some() {
        block = block.title(
            Line::from(Span::styled(" Copié ✓ ", Style::default().fg(GREEN_SUCCESS)))
                .right_aligned(),
        );
    }
    let inner = block.inner(area);

    let notes = app.board.notes();
    if notes.is_empty() && !focused {
        let hint = Paragraph::new(Line::from(Span::styled(
            "c : convertir la structure en notes",
            Style::default().fg(TEXT_MUTED),
        )))
        .block(block);
        frame.render_widget(hint, area);
        return;
    }

    let (line, col) = app.notes_cursor.line_col(notes);
    let row_offset = line.saturating_sub(inner.height.saturating_sub(1) as usize);
    let col_offset = col.saturating_sub(inner.width.saturating_sub(1) as usize);

    let paragraph = Paragraph::new(notes)
        .style(Style::default().fg(TEXT_PRIMARY))
        .block(block)
        .scroll((row_offset as u16, col_offset as u16));
    frame.render_widget(paragraph, area);

    if focused {
        frame.set_cursor_position(Position::new(
            inner.x + (col - col_offset) as u16,
            inner.y + (line - row_offset) as u16,
        ));
    }
}
