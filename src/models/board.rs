//! Board state
//!
//! The ordered working list of placed cards plus the free-text notes buffer.
//! Order drives note numbering and visual stacking, and only changes through
//! explicit insertion or `reorder`.
//!
//! Mutations that reference a missing id are no-ops: UI events can arrive
//! after the card they point at has gone.

use super::card::{PlacedCard, ProposedCard};
use super::catalog::CardDefinition;
use super::templates;
use crate::notes;
use crate::utils::next_card_id;

/// Working document of the planner
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoardState {
    cards: Vec<PlacedCard>,
    notes: String,
}

impl BoardState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cards(&self) -> &[PlacedCard] {
        &self.cards
    }

    pub fn notes(&self) -> &str {
        &self.notes
    }

    pub fn notes_mut(&mut self) -> &mut String {
        &mut self.notes
    }

    pub fn set_notes(&mut self, notes: impl Into<String>) {
        self.notes = notes.into();
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&PlacedCard> {
        self.cards.iter().find(|c| c.id == id)
    }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.cards.iter().position(|c| c.id == id)
    }

    /// Whether a card of this definition's type is already on the board
    pub fn contains_type(&self, definition: &CardDefinition) -> bool {
        self.cards.iter().any(|c| c.card_type == definition.card_type)
    }

    /// Whether the palette should still offer this definition
    pub fn accepts(&self, definition: &CardDefinition) -> bool {
        !(definition.is_unique && self.contains_type(definition))
    }

    /// Append a new card for `definition`.
    ///
    /// Returns `None` without touching the board when the definition is
    /// unique and already placed. The label is the variant label when given,
    /// else the catalog label; the note text comes from the template store and
    /// falls back to that label.
    pub fn place(
        &mut self,
        definition: &CardDefinition,
        variant: Option<&str>,
        variant_label: Option<&str>,
    ) -> Option<&PlacedCard> {
        if !self.accepts(definition) {
            log::debug!("Rejected second {} card", definition.card_type);
            return None;
        }

        let label = variant_label.unwrap_or(definition.label).to_string();
        let note_text = templates::lookup(definition.card_type, variant)
            .map(str::to_string)
            .unwrap_or_else(|| label.clone());

        let card = PlacedCard {
            id: next_card_id(definition.card_type.as_ref()),
            card_type: definition.card_type,
            label,
            variant: variant.map(str::to_string),
            note_text,
        };
        log::info!("Placed {} ({})", card.id, card.label);
        self.cards.push(card);
        self.cards.last()
    }

    /// Delete the card with `id`. Idempotent.
    pub fn remove(&mut self, id: &str) {
        let before = self.cards.len();
        self.cards.retain(|c| c.id != id);
        if self.cards.len() != before {
            log::info!("Removed {}", id);
        }
    }

    /// Switch the variant of a placed card, keeping its position.
    ///
    /// Returns false (no-op) if the id is unknown or the card's type has no
    /// variants. The note text is re-derived from the template store and
    /// falls back to `variant_label`.
    pub fn edit(&mut self, id: &str, variant: &str, variant_label: &str) -> bool {
        let Some(card) = self.cards.iter_mut().find(|c| c.id == id) else {
            return false;
        };
        let has_variants = card.definition().is_some_and(|d| d.has_variants());
        if !has_variants {
            return false;
        }

        card.note_text = templates::lookup(card.card_type, Some(variant))
            .unwrap_or(variant_label)
            .to_string();
        card.variant = Some(variant.to_string());
        card.label = variant_label.to_string();
        log::info!("Edited {} -> {}", id, variant);
        true
    }

    /// Move the card `id` to the index `target_id` currently occupies
    /// (remove, then insert at that index). No-op when either id is missing
    /// or both are equal.
    pub fn reorder(&mut self, id: &str, target_id: &str) -> bool {
        if id == target_id {
            return false;
        }
        let (Some(from), Some(to)) = (self.position(id), self.position(target_id)) else {
            return false;
        };
        let card = self.cards.remove(from);
        self.cards.insert(to, card);
        log::debug!("Moved {} from {} to {}", id, from, to);
        true
    }

    /// Clear every card and the notes buffer
    pub fn reset(&mut self) {
        self.cards.clear();
        self.notes.clear();
    }

    /// Replace the whole board with a generated structure.
    ///
    /// Proposed items keep their own label, subtype and note text; the
    /// uniqueness rule and template derivation are not applied here.
    pub fn replace_with(&mut self, proposed: Vec<ProposedCard>) {
        self.reset();
        self.cards = proposed
            .into_iter()
            .map(|p| PlacedCard {
                id: next_card_id(p.card_type.as_ref()),
                card_type: p.card_type,
                label: p.label,
                variant: p.subtype,
                note_text: p.note_content,
            })
            .collect();
        log::info!("Board replaced with {} proposed cards", self.cards.len());
    }

    /// Compile the current cards into the notes buffer, overwriting it
    pub fn compile_notes(&mut self) {
        self.notes = notes::compile(&self.cards);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::catalog::{definition, CardType};
    use proptest::prelude::*;

    fn def(card_type: CardType) -> &'static CardDefinition {
        definition(card_type).unwrap()
    }

    fn place_id(board: &mut BoardState, card_type: CardType) -> String {
        board.place(def(card_type), None, None).unwrap().id.clone()
    }

    fn order(board: &BoardState) -> Vec<String> {
        board.cards().iter().map(|c| c.id.clone()).collect()
    }

    #[test]
    fn test_place_plain_template() {
        let mut board = BoardState::new();
        let card = board.place(def(CardType::Avis), None, None).unwrap();
        assert_eq!(card.label, "Avis clients");
        assert_eq!(card.note_text, "Avis client\nAvis x3\nSlide horizontal");
        assert_eq!(card.variant, None);
        assert!(card.id.starts_with("avis-"));
    }

    #[test]
    fn test_place_variant_template() {
        let mut board = BoardState::new();
        let card = board
            .place(def(CardType::Texte), Some("magazine"), Some("Strates colonnes magazine"))
            .unwrap();
        assert_eq!(card.label, "Strates colonnes magazine");
        assert_eq!(card.variant.as_deref(), Some("magazine"));
        assert!(card.note_text.starts_with("Strates colonnes magazine\nGauche : Photo x1"));
    }

    #[test]
    fn test_place_falls_back_to_label() {
        let mut board = BoardState::new();
        let card = board.place(def(CardType::Reassurance), None, None).unwrap();
        assert_eq!(card.note_text, "Réassurance");

        let card = board
            .place(def(CardType::Encarts), Some("unknown"), Some("Encart maison"))
            .unwrap();
        assert_eq!(card.note_text, "Encart maison");
    }

    #[test]
    fn test_place_unique_twice_is_rejected() {
        let mut board = BoardState::new();
        place_id(&mut board, CardType::Video);
        let snapshot = board.clone();
        assert!(board.place(def(CardType::Video), None, None).is_none());
        assert_eq!(board, snapshot);
        assert!(!board.accepts(def(CardType::Video)));
    }

    #[test]
    fn test_place_non_unique_twice() {
        let mut board = BoardState::new();
        board.place(def(CardType::Texte), Some("simple"), Some("Strates 50 50 simple"));
        board.place(def(CardType::Texte), Some("simple"), Some("Strates 50 50 simple"));
        assert_eq!(board.len(), 2);
        assert_ne!(board.cards()[0].id, board.cards()[1].id);
        assert!(board.accepts(def(CardType::Texte)));
    }

    #[test]
    fn test_remove_is_idempotent() {
        let mut board = BoardState::new();
        let a = place_id(&mut board, CardType::Avis);
        let b = place_id(&mut board, CardType::Logos);
        board.remove(&a);
        board.remove(&a);
        board.remove("missing");
        assert_eq!(order(&board), vec![b]);
    }

    #[test]
    fn test_edit_updates_variant_and_keeps_position() {
        let mut board = BoardState::new();
        let a = place_id(&mut board, CardType::Avis);
        let t = board
            .place(def(CardType::Texte), Some("simple"), Some("Strates 50 50 simple"))
            .unwrap()
            .id
            .clone();
        let c = place_id(&mut board, CardType::Logos);

        assert!(board.edit(&t, "mosaic", "Strates 50 50 mosaïque"));
        assert_eq!(order(&board), vec![a, t.clone(), c]);
        let card = board.get(&t).unwrap();
        assert_eq!(card.variant.as_deref(), Some("mosaic"));
        assert_eq!(card.label, "Strates 50 50 mosaïque");
        assert!(card.note_text.contains("CTA 'Voir nos réalisations'"));
    }

    #[test]
    fn test_edit_falls_back_to_variant_label() {
        let mut board = BoardState::new();
        let id = board
            .place(def(CardType::Encarts), Some("slide"), Some("Encart slide"))
            .unwrap()
            .id
            .clone();
        assert!(board.edit(&id, "custom", "Encart sur mesure"));
        assert_eq!(board.get(&id).unwrap().note_text, "Encart sur mesure");
    }

    #[test]
    fn test_edit_without_variants_is_noop() {
        let mut board = BoardState::new();
        let id = place_id(&mut board, CardType::Avis);
        let snapshot = board.clone();
        assert!(!board.edit(&id, "slogan", "Diaporama slogan"));
        assert!(!board.edit("missing", "slogan", "Diaporama slogan"));
        assert_eq!(board, snapshot);
    }

    #[test]
    fn test_reorder_array_move() {
        let mut board = BoardState::new();
        let a = place_id(&mut board, CardType::Avis);
        let b = place_id(&mut board, CardType::Video);
        let c = place_id(&mut board, CardType::Logos);
        let d = place_id(&mut board, CardType::Team);

        assert!(board.reorder(&a, &c));
        assert_eq!(order(&board), vec![b.clone(), c.clone(), a.clone(), d.clone()]);

        assert!(board.reorder(&d, &b));
        assert_eq!(order(&board), vec![d, b, c, a]);
    }

    #[test]
    fn test_reorder_noops() {
        let mut board = BoardState::new();
        let a = place_id(&mut board, CardType::Avis);
        let b = place_id(&mut board, CardType::Video);
        let before = order(&board);

        assert!(!board.reorder(&a, &a));
        assert!(!board.reorder(&a, "missing"));
        assert!(!board.reorder("missing", &b));
        assert_eq!(order(&board), before);
    }

    #[test]
    fn test_reset_after_two_placements() {
        let mut board = BoardState::new();
        board.place(def(CardType::Texte), Some("simple"), Some("Strates 50 50 simple"));
        board.place(def(CardType::Encarts), Some("slide"), Some("Encart slide"));
        board.compile_notes();
        assert!(!board.notes().is_empty());

        board.reset();
        assert!(board.cards().is_empty());
        assert_eq!(board.notes(), "");
    }

    #[test]
    fn test_replace_with_bypasses_uniqueness() {
        let mut board = BoardState::new();
        place_id(&mut board, CardType::Logos);
        board.set_notes("old notes");

        let proposed = vec![
            ProposedCard {
                card_type: CardType::Avis,
                label: "Ils nous font confiance".to_string(),
                subtype: None,
                note_content: "Avis x5".to_string(),
            },
            ProposedCard {
                card_type: CardType::Avis,
                label: "Encore des avis".to_string(),
                subtype: None,
                note_content: "Avis x3".to_string(),
            },
        ];
        board.replace_with(proposed);

        assert_eq!(board.len(), 2);
        assert_eq!(board.notes(), "");
        assert_eq!(board.cards()[0].note_text, "Avis x5");
        assert_eq!(board.cards()[1].label, "Encore des avis");
        assert_ne!(board.cards()[0].id, board.cards()[1].id);
    }

    #[derive(Debug, Clone)]
    enum Op {
        Place(usize),
        Remove(usize),
        Reorder(usize, usize),
    }

    fn op_strategy() -> impl Strategy<Value = Op> {
        prop_oneof![
            (0..4usize).prop_map(Op::Place),
            (0..12usize).prop_map(Op::Remove),
            (0..12usize, 0..12usize).prop_map(|(a, b)| Op::Reorder(a, b)),
        ]
    }

    // Non-unique definitions only, so every placement lands.
    const NON_UNIQUE: [CardType; 2] = [CardType::Texte, CardType::Encarts];

    proptest! {
        #[test]
        fn prop_matches_plain_list_model(ops in prop::collection::vec(op_strategy(), 0..40)) {
            let mut board = BoardState::new();
            let mut model: Vec<String> = Vec::new();

            for op in ops {
                match op {
                    Op::Place(n) => {
                        let card_type = NON_UNIQUE[n % NON_UNIQUE.len()];
                        let id = place_id(&mut board, card_type);
                        model.push(id);
                    }
                    Op::Remove(i) => {
                        if let Some(id) = model.get(i).cloned() {
                            board.remove(&id);
                            model.remove(i);
                        } else {
                            board.remove("absent");
                        }
                    }
                    Op::Reorder(i, j) => {
                        let id = model.get(i).cloned().unwrap_or_else(|| "absent".to_string());
                        let target = model.get(j).cloned().unwrap_or_else(|| "absent".to_string());
                        board.reorder(&id, &target);
                        if i < model.len() && j < model.len() && i != j {
                            let moved = model.remove(i);
                            model.insert(j, moved);
                        }
                    }
                }
                prop_assert_eq!(order(&board), model.clone());
            }
        }
    }
}
