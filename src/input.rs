//! Keyboard input mapping.
//!
//! Translates crossterm key events into `App` actions. Modal contexts are
//! checked first: variant dialog, AI dialog, an ongoing drag, then the
//! focused panel.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::app::App;
use crate::editor::TextCursor;
use crate::models::Focus;

/// Side effects the event loop performs on the app's behalf
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppCommand {
    Quit,
    /// Needs the terminal writer
    CopyNotes,
}

/// Handle one key event
pub fn handle_key(app: &mut App, key: KeyEvent) -> Option<AppCommand> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Some(AppCommand::Quit);
    }

    if app.controller.pending().is_some() {
        handle_variant_dialog(app, key.code);
        return None;
    }
    if app.ai_dialog.is_some() {
        handle_ai_dialog(app, key);
        return None;
    }
    if app.controller.dragging().is_some() {
        handle_drag(app, key.code);
        return None;
    }

    match app.focus {
        Focus::Notes => handle_notes(app, key),
        Focus::Palette => handle_palette(app, key.code),
        Focus::Board => handle_board(app, key.code),
    }
}

fn handle_variant_dialog(app: &mut App, code: KeyCode) {
    match code {
        KeyCode::Up | KeyCode::Char('k') => {
            if let Some(pending) = app.controller.pending_mut() {
                pending.select_prev();
            }
        }
        KeyCode::Down | KeyCode::Char('j') => {
            if let Some(pending) = app.controller.pending_mut() {
                pending.select_next();
            }
        }
        KeyCode::Enter => app.confirm_variant(),
        KeyCode::Esc => app.cancel_variant(),
        _ => {}
    }
}

fn handle_ai_dialog(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.close_ai_dialog(),
        KeyCode::Enter => app.submit_proposal(),
        KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
            if let Some(dialog) = app.ai_dialog.as_mut() {
                dialog.field = dialog.field.toggle();
            }
        }
        code => {
            if app.generating {
                return;
            }
            if let Some(dialog) = app.ai_dialog.as_mut() {
                let (text, cursor) = dialog.active_field();
                edit_line(text, cursor, code, key.modifiers);
            }
        }
    }
}

fn handle_drag(app: &mut App, code: KeyCode) {
    match code {
        KeyCode::Up | KeyCode::Char('k') => app.board_move(-1),
        KeyCode::Down | KeyCode::Char('j') => app.board_move(1),
        KeyCode::Enter | KeyCode::Char(' ') => app.drop_here(),
        KeyCode::Esc => app.cancel_drag(),
        _ => {}
    }
}

/// Keys shared by the palette and the board
fn handle_global(app: &mut App, code: KeyCode) -> Option<AppCommand> {
    match code {
        KeyCode::Char('q') => return Some(AppCommand::Quit),
        KeyCode::Tab => app.focus = app.focus.next(),
        KeyCode::BackTab => app.focus = app.focus.prev(),
        KeyCode::Char('c') => app.compile_notes(),
        KeyCode::Char('r') => app.reset(),
        KeyCode::Char('y') => return Some(AppCommand::CopyNotes),
        KeyCode::Char('g') => app.open_ai_dialog(),
        _ => {}
    }
    None
}

fn handle_palette(app: &mut App, code: KeyCode) -> Option<AppCommand> {
    match code {
        KeyCode::Up | KeyCode::Left | KeyCode::Char('k') => app.palette_move(-1),
        KeyCode::Down | KeyCode::Right | KeyCode::Char('j') => app.palette_move(1),
        KeyCode::Enter | KeyCode::Char(' ') => app.grab_from_palette(),
        code => return handle_global(app, code),
    }
    None
}

fn handle_board(app: &mut App, code: KeyCode) -> Option<AppCommand> {
    match code {
        KeyCode::Up | KeyCode::Char('k') => app.board_move(-1),
        KeyCode::Down | KeyCode::Char('j') => app.board_move(1),
        KeyCode::Char(' ') => app.grab_from_board(),
        KeyCode::Char('e') | KeyCode::Enter => app.edit_selected(),
        KeyCode::Char('d') | KeyCode::Delete => app.remove_selected(),
        code => return handle_global(app, code),
    }
    None
}

fn handle_notes(app: &mut App, key: KeyEvent) -> Option<AppCommand> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let cursor = &mut app.notes_cursor;
    let text = app.board.notes_mut();

    match key.code {
        KeyCode::Tab => app.focus = app.focus.next(),
        KeyCode::BackTab => app.focus = app.focus.prev(),
        KeyCode::Esc => app.focus = Focus::Palette,
        KeyCode::Char('l') if ctrl => app.clear_notes(),
        KeyCode::Enter => cursor.insert(text, '\n'),
        KeyCode::Up => cursor.up(text),
        KeyCode::Down => cursor.down(text),
        code => edit_line(text, cursor, code, key.modifiers),
    }
    None
}

/// Single-line editing keys shared by every text field
fn edit_line(text: &mut String, cursor: &mut TextCursor, code: KeyCode, modifiers: KeyModifiers) {
    match code {
        KeyCode::Char(c) if !modifiers.contains(KeyModifiers::CONTROL) => cursor.insert(text, c),
        KeyCode::Backspace => cursor.backspace(text),
        KeyCode::Delete => cursor.delete(text),
        KeyCode::Left => cursor.left(),
        KeyCode::Right => cursor.right(text),
        KeyCode::Home => cursor.home(text),
        KeyCode::End => cursor.end(text),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use async_trait::async_trait;

    use crate::cli::CliConfig;
    use crate::error::ProposeError;
    use crate::models::ProposedCard;
    use crate::proposer::{ProposalRequest, StructureProposer};

    struct NoProposer;

    #[async_trait]
    impl StructureProposer for NoProposer {
        async fn propose_structure(
            &self,
            _request: &ProposalRequest,
        ) -> Result<Vec<ProposedCard>, ProposeError> {
            Err(ProposeError::EmptyResponse)
        }
    }

    fn app() -> App {
        let config = CliConfig {
            description: None,
            context_path: None,
            model: None,
            manual: true,
            print_on_exit: false,
        };
        App::new(&config, Arc::new(NoProposer))
    }

    fn press(app: &mut App, code: KeyCode) -> Option<AppCommand> {
        handle_key(app, KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn ctrl(app: &mut App, c: char) -> Option<AppCommand> {
        handle_key(app, KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL))
    }

    #[test]
    fn test_ctrl_c_always_quits() {
        let mut app = app();
        app.open_ai_dialog();
        assert_eq!(ctrl(&mut app, 'c'), Some(AppCommand::Quit));
    }

    #[test]
    fn test_q_quits_outside_text_editing() {
        let mut app = app();
        assert_eq!(press(&mut app, KeyCode::Char('q')), Some(AppCommand::Quit));

        app.focus = Focus::Notes;
        assert_eq!(press(&mut app, KeyCode::Char('q')), None);
        assert_eq!(app.board.notes(), "q");
    }

    #[test]
    fn test_palette_to_board_gesture() {
        let mut app = app();
        // Second palette entry: "Avis clients", no variants
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.focus, Focus::Board);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.board.len(), 1);
        assert!(app.controller.is_idle());
    }

    #[test]
    fn test_variant_dialog_keys() {
        let mut app = app();
        // First palette entry: "Diaporama", with variants
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Enter);
        assert!(app.controller.pending().is_some());

        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.board.cards()[0].variant.as_deref(), Some("legende"));

        press(&mut app, KeyCode::Char('e'));
        press(&mut app, KeyCode::Esc);
        assert!(app.controller.is_idle());
        assert_eq!(app.board.cards()[0].variant.as_deref(), Some("legende"));
    }

    #[test]
    fn test_escape_cancels_drag() {
        let mut app = app();
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Esc);
        assert!(app.board.is_empty());
        assert!(app.controller.is_idle());
    }

    #[test]
    fn test_notes_editing_and_clear() {
        let mut app = app();
        app.focus = Focus::Notes;
        press(&mut app, KeyCode::Char('a'));
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Char('b'));
        assert_eq!(app.board.notes(), "a\nb");
        ctrl(&mut app, 'l');
        assert_eq!(app.board.notes(), "");
    }

    #[test]
    fn test_ai_dialog_typing_and_field_switch() {
        let mut app = app();
        press(&mut app, KeyCode::Char('g'));
        press(&mut app, KeyCode::Char('q'));
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Char('x'));
        let dialog = app.ai_dialog.as_ref().unwrap();
        assert_eq!(dialog.description, "q");
        assert_eq!(dialog.context_path, "x");

        press(&mut app, KeyCode::Esc);
        assert!(app.ai_dialog.is_none());
    }

    #[test]
    fn test_copy_is_delegated() {
        let mut app = app();
        assert_eq!(press(&mut app, KeyCode::Char('y')), Some(AppCommand::CopyNotes));
    }
}
