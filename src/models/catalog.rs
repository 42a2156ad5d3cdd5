//! Card catalog
//!
//! The static registry of section card definitions offered in the palette.
//! Every definition is keyed by its `CardType`; no two entries share a type.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

/// Section card type, serialized with its lowercase wire name
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    AsRefStr,
    EnumString,
    EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum CardType {
    Diaporama,
    Avis,
    Encarts,
    Reassurance,
    Texte,
    Video,
    Flash,
    Annonces,
    Logos,
    Form,
    Team,
    Instagram,
}

/// The type rendered before all numbered sections
pub const INTRO_TYPE: CardType = CardType::Diaporama;

/// The type expected in last position of a generated structure
pub const CLOSING_TYPE: CardType = CardType::Annonces;

/// The type a generated structure must never contain
pub const EXCLUDED_TYPE: CardType = CardType::Form;

/// Named sub-option of a card type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Variant {
    pub value: &'static str,
    pub label: &'static str,
}

/// Immutable definition of a card type in the palette
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CardDefinition {
    #[serde(rename = "type")]
    pub card_type: CardType,
    pub label: &'static str,
    pub is_unique: bool,
    #[serde(rename = "options", skip_serializing_if = "no_variants")]
    pub variants: &'static [Variant],
}

fn no_variants(variants: &&'static [Variant]) -> bool {
    variants.is_empty()
}

impl CardDefinition {
    /// Whether placing or editing this card goes through a variant dialog
    pub fn has_variants(&self) -> bool {
        !self.variants.is_empty()
    }

    /// Find a variant by its value
    pub fn variant(&self, value: &str) -> Option<&'static Variant> {
        self.variants.iter().find(|v| v.value == value)
    }
}

const fn def(
    card_type: CardType,
    label: &'static str,
    is_unique: bool,
    variants: &'static [Variant],
) -> CardDefinition {
    CardDefinition {
        card_type,
        label,
        is_unique,
        variants,
    }
}

const fn var(value: &'static str, label: &'static str) -> Variant {
    Variant { value, label }
}

/// Palette order. `Form` is deliberately absent.
pub const CATALOG: &[CardDefinition] = &[
    def(
        CardType::Diaporama,
        "Diaporama",
        true,
        &[
            var("slogan", "Diaporama slogan"),
            var("legende", "Diaporama légende"),
            var("contact", "Diaporama formulaire de contact"),
        ],
    ),
    def(CardType::Avis, "Avis clients", true, &[]),
    def(
        CardType::Encarts,
        "Encarts",
        false,
        &[
            var("mosaic", "Encart survol mosaïque"),
            var("exterior", "Encart extérieur"),
            var("slide", "Encart slide"),
            var("slide-half", "Encart slide 50/50"),
        ],
    ),
    def(CardType::Reassurance, "Réassurance", true, &[]),
    def(
        CardType::Texte,
        "Texte",
        false,
        &[
            var("simple", "Strates 50 50 simple"),
            var("magazine", "Strates colonnes magazine"),
            var("mosaic", "Strates 50 50 mosaïque"),
        ],
    ),
    def(CardType::Video, "Vidéo", true, &[]),
    def(
        CardType::Flash,
        "Flash actualités",
        true,
        &[
            var("slider-flex", "Flash slider 50 50 flex"),
            var("slider-simple", "Flash slider 50 50 simple"),
            var("magazine", "Flash magazine"),
        ],
    ),
    def(CardType::Annonces, "Annonces ref", true, &[]),
    def(CardType::Logos, "Logos partenaires", true, &[]),
    def(CardType::Team, "Présentation de l'équipe", true, &[]),
    def(CardType::Instagram, "Feed instagram", true, &[]),
];

/// Look up the definition of a card type
pub fn definition(card_type: CardType) -> Option<&'static CardDefinition> {
    CATALOG.iter().find(|d| d.card_type == card_type)
}
