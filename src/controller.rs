//! Interaction controller
//!
//! Mediates grab/drop/reorder gestures and variant-choice dialogs, turning
//! them into `BoardState` mutations. A single token tracks the gesture:
//!
//! - `Idle` → `Dragging` when a gesture starts (palette definition or board card)
//! - `Dragging` → `Idle` on drop, possibly mutating the board
//! - `Dragging` → `AwaitingVariant` when a palette definition with variants
//!   is dropped on the board
//! - `AwaitingVariant` → `Idle` on confirm (place/edit) or cancel

use crate::models::{BoardState, CardDefinition, DragOrigin, Variant};

/// The item carried by a gesture
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DragItem {
    /// A definition picked from the palette
    Definition(&'static CardDefinition),
    /// A placed card, by id
    Card(String),
}

impl DragItem {
    pub fn origin(&self) -> DragOrigin {
        match self {
            DragItem::Definition(_) => DragOrigin::Palette,
            DragItem::Card(_) => DragOrigin::Board,
        }
    }
}

/// Where a gesture was released
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropTarget {
    /// The board itself, outside any card
    BoardArea,
    /// A placed card, by id
    BoardItem(String),
}

/// What a confirmed variant choice will do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionPurpose {
    Place,
    Edit { card_id: String },
}

/// An open variant-choice dialog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingSelection {
    pub definition: &'static CardDefinition,
    pub purpose: SelectionPurpose,
    pub selected: usize,
}

impl PendingSelection {
    fn new(definition: &'static CardDefinition, purpose: SelectionPurpose) -> Self {
        Self {
            definition,
            purpose,
            selected: 0,
        }
    }

    pub fn title(&self) -> String {
        format!("Quel type de {} ?", self.definition.label)
    }

    pub fn select_next(&mut self) {
        let count = self.definition.variants.len();
        if count > 0 {
            self.selected = (self.selected + 1) % count;
        }
    }

    pub fn select_prev(&mut self) {
        let count = self.definition.variants.len();
        if count > 0 {
            self.selected = (self.selected + count - 1) % count;
        }
    }

    pub fn current(&self) -> Option<&'static Variant> {
        self.definition.variants.get(self.selected)
    }
}

/// Gesture state
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Interaction {
    #[default]
    Idle,
    Dragging(DragItem),
    AwaitingVariant(PendingSelection),
}

/// Effect of a drop or a dialog resolution
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropOutcome {
    /// Nothing changed (missing target, same card, stale id, no gesture)
    Ignored,
    /// A unique definition was dropped while already on the board
    Rejected,
    Reordered,
    /// New card id
    Placed(String),
    Edited(String),
    /// A variant dialog is now open
    AwaitingVariant,
    /// The variant dialog was dismissed
    Cancelled,
}

/// Drives the gesture state machine against a board
#[derive(Debug, Default)]
pub struct InteractionController {
    state: Interaction,
}

impl InteractionController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_idle(&self) -> bool {
        self.state == Interaction::Idle
    }

    pub fn dragging(&self) -> Option<&DragItem> {
        match &self.state {
            Interaction::Dragging(item) => Some(item),
            _ => None,
        }
    }

    pub fn pending(&self) -> Option<&PendingSelection> {
        match &self.state {
            Interaction::AwaitingVariant(pending) => Some(pending),
            _ => None,
        }
    }

    pub fn pending_mut(&mut self) -> Option<&mut PendingSelection> {
        match &mut self.state {
            Interaction::AwaitingVariant(pending) => Some(pending),
            _ => None,
        }
    }

    /// Start a gesture. Only valid from `Idle`.
    pub fn begin_drag(&mut self, item: DragItem) -> bool {
        if !self.is_idle() {
            log::debug!("Ignoring drag start while {:?}", self.state);
            return false;
        }
        self.state = Interaction::Dragging(item);
        true
    }

    /// Release the current gesture over `target` (`None` = outside any target)
    pub fn end_drag(&mut self, target: Option<DropTarget>, board: &mut BoardState) -> DropOutcome {
        let Interaction::Dragging(item) = std::mem::take(&mut self.state) else {
            return DropOutcome::Ignored;
        };
        let Some(target) = target else {
            return DropOutcome::Ignored;
        };

        match (item, target) {
            (DragItem::Card(id), DropTarget::BoardItem(target_id)) => {
                if board.reorder(&id, &target_id) {
                    DropOutcome::Reordered
                } else {
                    DropOutcome::Ignored
                }
            }
            (DragItem::Card(_), DropTarget::BoardArea) => DropOutcome::Ignored,
            (DragItem::Definition(definition), _) => {
                if !board.accepts(definition) {
                    return DropOutcome::Rejected;
                }
                if definition.has_variants() {
                    self.state = Interaction::AwaitingVariant(PendingSelection::new(
                        definition,
                        SelectionPurpose::Place,
                    ));
                    return DropOutcome::AwaitingVariant;
                }
                match board.place(definition, None, None) {
                    Some(card) => DropOutcome::Placed(card.id.clone()),
                    None => DropOutcome::Rejected,
                }
            }
        }
    }

    /// Abort the current gesture, as if released outside any target
    pub fn cancel_drag(&mut self) {
        if matches!(self.state, Interaction::Dragging(_)) {
            self.state = Interaction::Idle;
        }
    }

    /// Open the variant dialog to edit a placed card.
    /// Only valid from `Idle`; no-op for unknown ids or types without variants.
    pub fn open_edit(&mut self, card_id: &str, board: &BoardState) -> bool {
        if !self.is_idle() {
            log::debug!("Ignoring edit request while {:?}", self.state);
            return false;
        }
        let Some(definition) = board
            .get(card_id)
            .and_then(|c| c.definition())
            .filter(|d| d.has_variants())
        else {
            return false;
        };

        let mut pending = PendingSelection::new(
            definition,
            SelectionPurpose::Edit {
                card_id: card_id.to_string(),
            },
        );
        // Start on the card's current variant
        if let Some(current) = board.get(card_id).and_then(|c| c.variant.as_deref()) {
            if let Some(index) = definition.variants.iter().position(|v| v.value == current) {
                pending.selected = index;
            }
        }
        self.state = Interaction::AwaitingVariant(pending);
        true
    }

    /// Apply the highlighted variant and close the dialog
    pub fn confirm(&mut self, board: &mut BoardState) -> DropOutcome {
        let Interaction::AwaitingVariant(pending) = std::mem::take(&mut self.state) else {
            return DropOutcome::Ignored;
        };
        let Some(variant) = pending.current() else {
            return DropOutcome::Ignored;
        };

        match pending.purpose {
            SelectionPurpose::Place => {
                match board.place(pending.definition, Some(variant.value), Some(variant.label)) {
                    Some(card) => DropOutcome::Placed(card.id.clone()),
                    None => DropOutcome::Rejected,
                }
            }
            SelectionPurpose::Edit { card_id } => {
                if board.edit(&card_id, variant.value, variant.label) {
                    DropOutcome::Edited(card_id)
                } else {
                    DropOutcome::Ignored
                }
            }
        }
    }

    /// Dismiss the dialog without touching the board
    pub fn cancel_selection(&mut self) -> DropOutcome {
        if matches!(self.state, Interaction::AwaitingVariant(_)) {
            self.state = Interaction::Idle;
            return DropOutcome::Cancelled;
        }
        DropOutcome::Ignored
    }
}
