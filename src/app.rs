//! Application state and core logic for the planner TUI.
//!
//! This module contains the `App` struct which holds all state for the
//! interactive terminal UI: the board, the gesture controller, cursors, the
//! AI dialog and the in-flight structure proposal.

use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use crate::cli::CliConfig;
use crate::clipboard;
use crate::controller::{DragItem, DropOutcome, DropTarget, InteractionController};
use crate::editor::TextCursor;
use crate::error::{ProposeError, NOT_JSON_MESSAGE};
use crate::models::{BoardState, CardDefinition, DialogField, Focus, ProposedCard, CATALOG};
use crate::proposer::{self, ProposalRequest, StructureProposer};

/// How long status messages stay in the bottom bar
const STATUS_TTL: Duration = Duration::from_secs(3);

/// How long the "copied" indicator stays lit
const COPIED_TTL: Duration = Duration::from_secs(2);

type ProposalResult = Result<Vec<ProposedCard>, ProposeError>;

/// Transient message for the bottom bar
#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub text: String,
    pub is_error: bool,
    pub at: Instant,
}

/// State of the "describe your business" dialog
#[derive(Debug, Clone, Default)]
pub struct AiDialog {
    pub description: String,
    pub description_cursor: TextCursor,
    pub context_path: String,
    pub context_cursor: TextCursor,
    pub field: DialogField,
    /// Failure of the last proposal
    pub error: Option<String>,
    /// Validation notice (wrong file type)
    pub notice: Option<String>,
}

impl AiDialog {
    pub fn new(description: String, context_path: String) -> Self {
        let mut dialog = Self {
            description,
            context_path,
            ..Self::default()
        };
        dialog.description_cursor.jump_to_end(&dialog.description);
        dialog.context_cursor.jump_to_end(&dialog.context_path);
        dialog
    }

    /// The focused field and its cursor
    pub fn active_field(&mut self) -> (&mut String, &mut TextCursor) {
        match self.field {
            DialogField::Description => (&mut self.description, &mut self.description_cursor),
            DialogField::ContextPath => (&mut self.context_path, &mut self.context_cursor),
        }
    }

    pub fn can_submit(&self) -> bool {
        !self.description.trim().is_empty()
    }
}

/// Application state
pub struct App {
    pub board: BoardState,
    pub controller: InteractionController,
    pub focus: Focus,
    // Highlighted palette entry
    pub palette_index: usize,
    // Highlighted board card; doubles as the drop target while dragging
    pub board_index: usize,
    pub notes_cursor: TextCursor,
    // AI dialog (None = closed)
    pub ai_dialog: Option<AiDialog>,
    // Fields of the closed dialog, restored on reopen
    dialog_draft: AiDialog,
    // Proposal plumbing: at most one request in flight
    pub generating: bool,
    proposer: Arc<dyn StructureProposer>,
    proposal_tx: UnboundedSender<ProposalResult>,
    proposal_rx: UnboundedReceiver<ProposalResult>,
    // Bottom bar feedback
    pub status: Option<StatusMessage>,
    pub copied_at: Option<Instant>,
    // Animation state
    pub animation_tick: u64,
    pub last_animation_update: Instant,
    pub should_quit: bool,
}

impl App {
    pub fn new(config: &CliConfig, proposer: Arc<dyn StructureProposer>) -> Self {
        let (proposal_tx, proposal_rx) = mpsc::unbounded_channel();
        let mut dialog = AiDialog::new(
            config.description.clone().unwrap_or_default(),
            config
                .context_path
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_default(),
        );
        if config.context_path.as_deref().is_some_and(|p| !proposer::is_json_path(p)) {
            dialog.notice = Some(NOT_JSON_MESSAGE.to_string());
        }
        let (ai_dialog, dialog_draft) = if config.manual {
            (None, dialog)
        } else {
            (Some(dialog), AiDialog::default())
        };

        Self {
            board: BoardState::new(),
            controller: InteractionController::new(),
            focus: Focus::default(),
            palette_index: 0,
            board_index: 0,
            notes_cursor: TextCursor::default(),
            ai_dialog,
            dialog_draft,
            generating: false,
            proposer,
            proposal_tx,
            proposal_rx,
            status: None,
            copied_at: None,
            animation_tick: 0,
            last_animation_update: Instant::now(),
            should_quit: false,
        }
    }

    fn set_status(&mut self, text: impl Into<String>, is_error: bool) {
        self.status = Some(StatusMessage {
            text: text.into(),
            is_error,
            at: Instant::now(),
        });
    }

    /// Drop expired status and copy indicators, advance the animation
    pub fn tick(&mut self) {
        let now = Instant::now();
        if self.status.as_ref().is_some_and(|s| now.duration_since(s.at) > STATUS_TTL) {
            self.status = None;
        }
        if self.copied_at.is_some_and(|at| now.duration_since(at) > COPIED_TTL) {
            self.copied_at = None;
        }
        if now.duration_since(self.last_animation_update) >= Duration::from_millis(150) {
            self.animation_tick = self.animation_tick.wrapping_add(1);
            self.last_animation_update = now;
        }
    }

    // ── Selection ─────────────────────────────────────

    pub fn selected_definition(&self) -> Option<&'static CardDefinition> {
        CATALOG.get(self.palette_index)
    }

    pub fn selected_card_id(&self) -> Option<String> {
        self.board.cards().get(self.board_index).map(|c| c.id.clone())
    }

    pub fn palette_move(&mut self, delta: isize) {
        self.palette_index = step(self.palette_index, delta, CATALOG.len());
    }

    pub fn board_move(&mut self, delta: isize) {
        self.board_index = step(self.board_index, delta, self.board.len());
    }

    fn clamp_board_index(&mut self) {
        self.board_index = self.board_index.min(self.board.len().saturating_sub(1));
    }

    fn select_card(&mut self, id: &str) {
        if let Some(pos) = self.board.position(id) {
            self.board_index = pos;
        }
    }

    // ── Gestures ──────────────────────────────────────

    /// Pick the highlighted palette definition up. Disabled entries don't move.
    pub fn grab_from_palette(&mut self) {
        let Some(definition) = self.selected_definition() else {
            return;
        };
        if !self.board.accepts(definition) {
            return;
        }
        if self.controller.begin_drag(DragItem::Definition(definition)) {
            self.focus = Focus::Board;
            self.clamp_board_index();
        }
    }

    /// Pick the highlighted board card up
    pub fn grab_from_board(&mut self) {
        if let Some(id) = self.selected_card_id() {
            self.controller.begin_drag(DragItem::Card(id));
        }
    }

    /// Drop onto the highlighted card, or onto the board area when it is empty
    pub fn drop_here(&mut self) {
        let target = match self.selected_card_id() {
            Some(id) => DropTarget::BoardItem(id),
            None => DropTarget::BoardArea,
        };
        let moved = match self.controller.dragging() {
            Some(DragItem::Card(id)) => Some(id.clone()),
            _ => None,
        };

        let outcome = self.controller.end_drag(Some(target), &mut self.board);
        match outcome {
            DropOutcome::Reordered => {
                if let Some(id) = moved {
                    self.select_card(&id);
                }
            }
            DropOutcome::Placed(id) => self.select_card(&id),
            _ => {}
        }
    }

    /// Release outside any target
    pub fn cancel_drag(&mut self) {
        self.controller.end_drag(None, &mut self.board);
    }

    pub fn edit_selected(&mut self) {
        if let Some(id) = self.selected_card_id() {
            self.controller.open_edit(&id, &self.board);
        }
    }

    pub fn remove_selected(&mut self) {
        if let Some(id) = self.selected_card_id() {
            self.board.remove(&id);
            self.clamp_board_index();
        }
    }

    pub fn confirm_variant(&mut self) {
        if let DropOutcome::Placed(id) | DropOutcome::Edited(id) =
            self.controller.confirm(&mut self.board)
        {
            self.focus = Focus::Board;
            self.select_card(&id);
        }
    }

    pub fn cancel_variant(&mut self) {
        self.controller.cancel_selection();
    }

    // ── Notes ─────────────────────────────────────────

    /// Compile the board into the notes buffer
    pub fn compile_notes(&mut self) {
        self.board.compile_notes();
        self.notes_cursor = TextCursor::default();
        log::info!("Compiled notes for {} cards", self.board.len());
    }

    pub fn clear_notes(&mut self) {
        self.board.set_notes(String::new());
        self.notes_cursor = TextCursor::default();
    }

    /// Copy the notes buffer to the clipboard; failures are logged, not fatal
    pub fn copy_notes<W: Write>(&mut self, writer: &mut W) {
        match clipboard::copy_to_clipboard(writer, self.board.notes()) {
            Ok(()) => self.copied_at = Some(Instant::now()),
            Err(e) => {
                log::warn!("Failed to copy notes: {}", e);
                self.set_status("Copie impossible", true);
            }
        }
    }

    /// Start over: empty board and notes, AI dialog reopened
    pub fn reset(&mut self) {
        self.controller.cancel_drag();
        self.controller.cancel_selection();
        self.board.reset();
        self.board_index = 0;
        self.notes_cursor = TextCursor::default();
        self.open_ai_dialog();
    }

    // ── AI proposals ──────────────────────────────────

    /// Show the dialog with whatever was typed before it was closed
    pub fn open_ai_dialog(&mut self) {
        if self.ai_dialog.is_none() {
            self.ai_dialog = Some(std::mem::take(&mut self.dialog_draft));
        }
    }

    /// Hide the dialog, keeping its fields. A request in flight keeps running.
    pub fn close_ai_dialog(&mut self) {
        if let Some(dialog) = self.ai_dialog.take() {
            self.dialog_draft = dialog;
        }
    }

    /// Send the dialog's description (and context file) to the proposer.
    /// Blank descriptions and non-JSON files are refused inline.
    pub fn submit_proposal(&mut self) {
        if self.generating {
            return;
        }
        let Some(dialog) = self.ai_dialog.as_mut() else {
            return;
        };
        dialog.error = None;
        dialog.notice = None;

        let context_path = dialog.context_path.trim();
        let context_json = if context_path.is_empty() {
            None
        } else {
            match proposer::load_context(&PathBuf::from(context_path)) {
                Ok(content) => Some(content),
                Err(e) => {
                    log::warn!("Context file rejected: {}", e);
                    dialog.notice = Some(e.user_message());
                    return;
                }
            }
        };

        let request = match ProposalRequest::new(&dialog.description, context_json) {
            Ok(request) => request,
            Err(_) => return,
        };

        self.generating = true;
        let proposer = Arc::clone(&self.proposer);
        let tx = self.proposal_tx.clone();
        tokio::spawn(async move {
            let result = proposer::run_proposal(proposer.as_ref(), &request).await;
            let _ = tx.send(result);
        });
    }

    /// Apply a finished proposal, if any. A late result still replaces the
    /// board wholesale.
    pub fn poll_proposal(&mut self) {
        while let Ok(result) = self.proposal_rx.try_recv() {
            self.generating = false;
            match result {
                Ok(cards) => {
                    self.controller.cancel_drag();
                    self.controller.cancel_selection();
                    self.board.replace_with(cards);
                    self.board_index = 0;
                    self.notes_cursor = TextCursor::default();
                    self.close_ai_dialog();
                    self.focus = Focus::Board;
                }
                Err(e) => {
                    let message = e.user_message();
                    match self.ai_dialog.as_mut() {
                        Some(dialog) => dialog.error = Some(message.to_string()),
                        None => self.set_status(message, true),
                    }
                }
            }
        }
    }
}

/// Move an index by `delta` inside `0..len`, wrapping around
fn step(index: usize, delta: isize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    (index as isize + delta).rem_euclid(len as isize) as usize
}
