//! UI module for strate-tui
//!
//! Rendering for the three panels (palette, board, notes), the modal
//! dialogs and the bottom bar.

mod board;
mod dialogs;
mod helpers;
mod notes;
mod palette;
mod status;

use ratatui::prelude::*;

use crate::app::App;

pub use board::render_board;
pub use dialogs::{render_ai_dialog, render_variant_dialog};
pub use notes::render_notes;
pub use palette::render_palette;
pub use status::render_status_bar;

/// Draw one frame
pub fn render(app: &App, frame: &mut Frame) {
    let area = frame.area();

    // Main layout: content area + bottom bar
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),    // Panels
            Constraint::Length(1), // Bottom bar (single line)
        ])
        .split(area);

    let panels = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(28), // Palette
            Constraint::Percentage(36), // Board
            Constraint::Percentage(36), // Notes
        ])
        .split(main_layout[0]);

    render_palette(panels[0], app, frame);
    render_board(panels[1], app, frame);
    render_notes(panels[2], app, frame);
    render_status_bar(main_layout[1], app, frame);

    if let Some(pending) = app.controller.pending() {
        render_variant_dialog(pending, frame);
    } else if let Some(dialog) = &app.ai_dialog {
        render_ai_dialog(dialog, app.generating, app.animation_tick, frame);
    }
}
