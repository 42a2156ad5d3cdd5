//! Enums used throughout the planner UI
//!
//! This module contains the enum types used for focus management and
//! gesture bookkeeping.

/// Which panel receives key input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Palette,
    Board,
    Notes,
}

impl Focus {
    pub fn next(&self) -> Self {
        match self {
            Focus::Palette => Focus::Board,
            Focus::Board => Focus::Notes,
            Focus::Notes => Focus::Palette,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            Focus::Palette => Focus::Notes,
            Focus::Board => Focus::Palette,
            Focus::Notes => Focus::Board,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Focus::Palette => "Cartes",
            Focus::Board => "Structure",
            Focus::Notes => "Notes",
        }
    }
}

/// Where a dragged item was picked up
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragOrigin {
    Palette,
    Board,
}

/// Which field of the AI dialog is being edited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DialogField {
    #[default]
    Description,
    ContextPath,
}

impl DialogField {
    pub fn toggle(&self) -> Self {
        match self {
            DialogField::Description => DialogField::ContextPath,
            DialogField::ContextPath => DialogField::Description,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_focus_cycle() {
        assert_eq!(Focus::Palette.next(), Focus::Board);
        assert_eq!(Focus::Board.next(), Focus::Notes);
        assert_eq!(Focus::Notes.next(), Focus::Palette);
        assert_eq!(Focus::Palette.prev(), Focus::Notes);
        assert_eq!(Focus::Board.prev(), Focus::Palette);
    }

    #[test]
    fn test_focus_default() {
        assert_eq!(Focus::default(), Focus::Palette);
    }

    #[test]
    fn test_dialog_field_toggle() {
        assert_eq!(DialogField::Description.toggle(), DialogField::ContextPath);
        assert_eq!(DialogField::ContextPath.toggle(), DialogField::Description);
    }
}
