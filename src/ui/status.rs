//! Bottom bar: key hints and transient messages

use ratatui::{prelude::*, widgets::Paragraph};

use crate::app::App;
use crate::models::Focus;
use crate::theme::{get_pulse_color, BG_PRIMARY, CYAN_DIM, CYAN_PRIMARY, GREEN_ACTIVE, RED_ERROR};

/// Key hints for the current context
fn hints(app: &App) -> &'static str {
    if app.controller.pending().is_some() {
        " ↑↓: Choisir | Entrée: Valider | Échap: Annuler "
    } else if app.ai_dialog.is_some() {
        " Entrée: Générer | Tab: Champ | Échap: Fermer "
    } else if app.controller.dragging().is_some() {
        " ↑↓: Cible | Entrée: Déposer | Échap: Annuler "
    } else {
        match app.focus {
            Focus::Palette => {
                " Entrée: Prendre | Tab: Panneau | c: Convertir | r: Recommencer | y: Copier | g: IA | q: Quitter "
            }
            Focus::Board => {
                " Espace: Déplacer | e: Modifier | d: Supprimer | c: Convertir | y: Copier | q: Quitter "
            }
            Focus::Notes => " Saisie libre | Ctrl-L: Effacer | Échap/Tab: Quitter les notes ",
        }
    }
}

pub fn render_status_bar(area: Rect, app: &App, frame: &mut Frame) {
    let mut spans = Vec::new();

    if app.generating {
        spans.push(Span::styled(
            " ● IA ",
            Style::default()
                .fg(get_pulse_color(app.animation_tick, GREEN_ACTIVE, BG_PRIMARY))
                .bg(CYAN_DIM),
        ));
    }

    match &app.status {
        Some(status) => {
            let color = if status.is_error { RED_ERROR } else { CYAN_PRIMARY };
            spans.push(Span::styled(
                format!(" {} ", status.text),
                Style::default().fg(Color::Black).bg(color),
            ));
        }
        None => spans.push(Span::styled(
            format!("[{}]{}", app.focus.label(), hints(app)),
            Style::default().fg(Color::Black).bg(CYAN_PRIMARY),
        )),
    }

    frame.render_widget(
        Paragraph::new(Line::from(spans)).style(Style::default().bg(CYAN_PRIMARY)),
        area,
    );
}
