//! Data models for the planner
//!
//! This module contains the core data structures:
//! - The card catalog and the note template store
//! - Placed and proposed cards
//! - The board state (ordered cards + notes buffer)
//! - Enums for UI state management

pub mod board;
pub mod card;
pub mod catalog;
pub mod enums;
pub mod templates;

// Re-exports for convenient access
pub use board::BoardState;
pub use card::{PlacedCard, ProposedCard};
pub use catalog::{CardDefinition, Variant, CATALOG};
pub use enums::{DialogField, DragOrigin, Focus};
