//! Note compiler: turns the ordered board into the designer brief.

use crate::models::catalog::INTRO_TYPE;
use crate::models::PlacedCard;

/// Compile cards into the numbered brief.
///
/// The intro card contributes its trimmed note text unnumbered; every other
/// card becomes `STRATE {n} : {label}` followed by its trimmed note text, with
/// `n` counting from 1 over non-intro cards only. Blocks are separated by a
/// blank line and empty blocks are dropped.
pub fn compile(cards: &[PlacedCard]) -> String {
    let mut counter = 0;
    cards
        .iter()
        .map(|card| {
            if card.card_type == INTRO_TYPE {
                return card.note_text.trim().to_string();
            }
            counter += 1;
            format!("STRATE {} : {}\n{}", counter, card.label, card.note_text.trim())
        })
        .filter(|block| !block.is_empty())
        .collect::<Vec<_>>()
        .join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::catalog::CardType;

    fn card(card_type: CardType, label: &str, note_text: &str) -> PlacedCard {
        PlacedCard {
            id: format!("{}-{}", card_type, label),
            card_type,
            label: label.to_string(),
            variant: None,
            note_text: note_text.to_string(),
        }
    }

    #[test]
    fn test_compile_empty() {
        assert_eq!(compile(&[]), "");
    }

    #[test]
    fn test_compile_intro_unnumbered() {
        let cards = vec![
            card(CardType::Diaporama, "Diaporama slogan", "  Diaporama slogan\nPhoto pleine largeur \n"),
            card(CardType::Texte, "A", "Texte A"),
            card(CardType::Avis, "B", "\nAvis x3"),
            card(CardType::Logos, "C", "Logos x10"),
        ];
        assert_eq!(
            compile(&cards),
            "Diaporama slogan\nPhoto pleine largeur\n\n\
             STRATE 1 : A\nTexte A\n\n\
             STRATE 2 : B\nAvis x3\n\n\
             STRATE 3 : C\nLogos x10"
        );
    }

    #[test]
    fn test_compile_intro_anywhere_does_not_count() {
        let cards = vec![
            card(CardType::Texte, "A", "a"),
            card(CardType::Diaporama, "Intro", "intro"),
            card(CardType::Texte, "B", "b"),
        ];
        assert_eq!(compile(&cards), "STRATE 1 : A\na\n\nintro\n\nSTRATE 2 : B\nb");
    }

    #[test]
    fn test_compile_skips_empty_intro() {
        let cards = vec![
            card(CardType::Diaporama, "Intro", "   "),
            card(CardType::Video, "Vidéo", ""),
        ];
        assert_eq!(compile(&cards), "STRATE 1 : Vidéo\n");
    }

    #[test]
    fn test_compile_is_deterministic() {
        let cards = vec![
            card(CardType::Diaporama, "Intro", "intro"),
            card(CardType::Encarts, "Encarts", "Encart x3"),
        ];
        assert_eq!(compile(&cards), compile(&cards.clone()));
    }
}
