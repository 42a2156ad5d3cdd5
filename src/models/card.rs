//! Cards placed on the board

use serde::{Deserialize, Serialize};

use super::catalog::{self, CardDefinition, CardType};

/// A card instance in the ordered working list
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlacedCard {
    pub id: String,
    #[serde(rename = "type")]
    pub card_type: CardType,
    pub label: String,
    #[serde(rename = "subtype")]
    pub variant: Option<String>,
    #[serde(rename = "noteContent")]
    pub note_text: String,
}

impl PlacedCard {
    /// Catalog definition of this card's type (none for types outside the palette)
    pub fn definition(&self) -> Option<&'static CardDefinition> {
        catalog::definition(self.card_type)
    }

    /// Label of the current variant as declared in the catalog
    pub fn variant_label(&self) -> Option<&'static str> {
        let value = self.variant.as_deref()?;
        self.definition()?.variant(value).map(|v| v.label)
    }
}

/// A card as proposed by a structure generator, before it gets an id.
/// Field names follow the generator's JSON response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProposedCard {
    #[serde(rename = "type")]
    pub card_type: CardType,
    pub label: String,
    #[serde(default)]
    pub subtype: Option<String>,
    pub note_content: String,
}
