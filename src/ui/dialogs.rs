//! Modal dialogs: variant choice and AI proposal

use ratatui::{
    layout::Position,
    prelude::*,
    widgets::{Block, Borders, Clear, Paragraph},
};

use super::helpers::{centered_rect, field_window, wrap_text};
use crate::app::AiDialog;
use crate::controller::{PendingSelection, SelectionPurpose};
use crate::models::DialogField;
use crate::proposer::{MAX_SECTIONS, MIN_SECTIONS};
use crate::theme::{
    get_pulse_color, AMBER_WARNING, BG_SECONDARY, BG_TERTIARY, BORDER_SUBTLE, CYAN_DIM,
    CYAN_PRIMARY, GREEN_ACTIVE, RED_ERROR, ROUNDED_BORDERS, TEXT_MUTED, TEXT_PRIMARY,
    TEXT_SECONDARY,
};

fn dialog_block(title: String) -> Block<'static> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_set(ROUNDED_BORDERS)
        .border_style(Style::default().fg(CYAN_PRIMARY))
        .style(Style::default().bg(BG_SECONDARY))
}

pub fn render_variant_dialog(pending: &PendingSelection, frame: &mut Frame) {
    let variants = pending.definition.variants;
    let height = variants.len() as u16 + 4;
    let area = centered_rect(50, height, frame.area());

    let action = match pending.purpose {
        SelectionPurpose::Place => "Entrée : ajouter",
        SelectionPurpose::Edit { .. } => "Entrée : modifier",
    };

    let mut lines: Vec<Line> = variants
        .iter()
        .enumerate()
        .map(|(i, variant)| {
            if i == pending.selected {
                Line::from(vec![
                    Span::styled(" › ", Style::default().fg(CYAN_PRIMARY)),
                    Span::styled(
                        variant.label,
                        Style::default().fg(TEXT_PRIMARY).add_modifier(Modifier::BOLD),
                    ),
                ])
                .style(Style::default().bg(BG_TERTIARY))
            } else {
                Line::from(vec![
                    Span::raw("   "),
                    Span::styled(variant.label, Style::default().fg(TEXT_SECONDARY)),
                ])
            }
        })
        .collect();
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        format!(" {} · Échap : annuler", action),
        Style::default().fg(TEXT_MUTED),
    )));

    frame.render_widget(Clear, area);
    frame.render_widget(
        Paragraph::new(lines).block(dialog_block(format!(" {} ", pending.title()))),
        area,
    );
}

pub fn render_ai_dialog(dialog: &AiDialog, generating: bool, tick: u64, frame: &mut Frame) {
    let area = centered_rect(72, 14, frame.area());
    frame.render_widget(Clear, area);

    let block = dialog_block(" Décrivez l'activité du client ".to_string());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [intro, description, context, message, hints] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Length(3),
        Constraint::Length(3),
        Constraint::Min(1),
        Constraint::Length(1),
    ])
    .areas(inner);

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            format!(
                " Une structure de {} à {} strates sera proposée à partir de cette description.",
                MIN_SECTIONS, MAX_SECTIONS
            ),
            Style::default().fg(TEXT_SECONDARY),
        ))),
        intro,
    );

    render_field(
        description,
        " Description ",
        &dialog.description,
        dialog.description_cursor.pos(),
        dialog.field == DialogField::Description,
        frame,
    );
    render_field(
        context,
        " Fichier de contexte JSON (optionnel) ",
        &dialog.context_path,
        dialog.context_cursor.pos(),
        dialog.field == DialogField::ContextPath,
        frame,
    );

    let width = message.width.saturating_sub(2) as usize;
    let message_lines: Vec<Line> = if generating {
        vec![Line::from(vec![
            Span::styled(
                " ● ",
                Style::default().fg(get_pulse_color(tick, GREEN_ACTIVE, CYAN_DIM)),
            ),
            Span::styled("Génération en cours…", Style::default().fg(TEXT_PRIMARY)),
        ])]
    } else if let Some(error) = &dialog.error {
        styled_wrapped(error, width, RED_ERROR)
    } else if let Some(notice) = &dialog.notice {
        styled_wrapped(notice, width, AMBER_WARNING)
    } else {
        Vec::new()
    };
    frame.render_widget(Paragraph::new(message_lines), message);

    let submit_color = if dialog.can_submit() && !generating {
        CYAN_PRIMARY
    } else {
        TEXT_MUTED
    };
    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled(" Entrée : générer", Style::default().fg(submit_color)),
            Span::styled(
                " · Tab : champ suivant · Échap : commencer manuellement",
                Style::default().fg(TEXT_MUTED),
            ),
        ])),
        hints,
    );
}

fn styled_wrapped(text: &str, width: usize, color: Color) -> Vec<Line<'static>> {
    wrap_text(text, width)
        .into_iter()
        .map(|line| Line::from(Span::styled(format!(" {}", line), Style::default().fg(color))))
        .collect()
}

/// One bordered single-line text field
fn render_field(
    area: Rect,
    title: &'static str,
    text: &str,
    cursor: usize,
    active: bool,
    frame: &mut Frame,
) {
    let border_color = if active { CYAN_PRIMARY } else { BORDER_SUBTLE };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_set(ROUNDED_BORDERS)
        .border_style(Style::default().fg(border_color));
    let inner = block.inner(area);

    let (visible, cursor_x) = field_window(text, cursor, inner.width as usize);
    frame.render_widget(
        Paragraph::new(visible)
            .style(Style::default().fg(TEXT_PRIMARY))
            .block(block),
        area,
    );

    if active {
        frame.set_cursor_position(Position::new(inner.x + cursor_x as u16, inner.y));
    }
}
