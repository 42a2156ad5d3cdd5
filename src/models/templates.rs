//! Note template store
//!
//! Canned brief fragments keyed by card type, with per-variant sub-tables for
//! the types that offer variants.

use serde::Serialize;
use serde::ser::{SerializeMap, Serializer};

use super::catalog::CardType;

/// Template entry for one card type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoteTemplate {
    /// One text for the whole type
    Plain(&'static str),
    /// Text per variant value
    Variants(&'static [(&'static str, &'static str)]),
}

impl NoteTemplate {
    /// Resolve the text for an optional variant.
    /// A plain template answers for any variant; a variant table only for its own keys.
    pub fn resolve(&self, variant: Option<&str>) -> Option<&'static str> {
        match (self, variant) {
            (NoteTemplate::Plain(text), _) => Some(*text),
            (NoteTemplate::Variants(table), Some(variant)) => table
                .iter()
                .find(|(value, _)| *value == variant)
                .map(|(_, text)| *text),
            (NoteTemplate::Variants(_), None) => None,
        }
    }
}

impl Serialize for NoteTemplate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            NoteTemplate::Plain(text) => serializer.serialize_str(text),
            NoteTemplate::Variants(table) => {
                let mut map = serializer.serialize_map(Some(table.len()))?;
                for (value, text) in table.iter() {
                    map.serialize_entry(value, text)?;
                }
                map.end()
            }
        }
    }
}

const DIAPORAMA: &[(&str, &str)] = &[
    (
        "slogan",
        "Diaporama slogan\nPhoto pleine largeur + slogan et baseline administrables",
    ),
    ("legende", "Diaporama légende\nDiaporama x…"),
    (
        "contact",
        "Diaporama formulaire de contact\nGauche : Slogan sur la photo\nDroite : Formulaire sur la photo",
    ),
];

const ENCARTS: &[(&str, &str)] = &[
    ("mosaic", "Encart survol mosaïque\nEncart x…"),
    ("exterior", "Encart extérieur\nEncart x…"),
    ("slide", "Encart slide\nEncart x…"),
    ("slide-half", "Encart slide 50/50\nEncart x…"),
];

const TEXTE: &[(&str, &str)] = &[
    (
        "simple",
        "Strates 50 50 simple\nGauche : Photo x1\nDroite : Titre + Texte + CTA 'En savoir plus'",
    ),
    (
        "magazine",
        "Strates colonnes magazine\nGauche : Photo x1\nDroite : Titre + Texte + CTA 'Découvrir notre savoir-faire'",
    ),
    (
        "mosaic",
        "Strates 50 50 mosaïque\nGauche : Titre + Texte + CTA 'Voir nos réalisations'\nDroite : Photo x2",
    ),
];

const FLASH: &[(&str, &str)] = &[
    (
        "slider-flex",
        "Flash slider 50 50 flex\nGauche : Photo\nDroite : Titre + Texte + CTA",
    ),
    (
        "slider-simple",
        "Flash slider 50 50 simple\nGauche : Photo\nDroite : Titre + Texte + CTA",
    ),
    (
        "magazine",
        "Flash magazine\nGauche : Annonce flash info\nDroite : Annonces x3",
    ),
];

/// Template entry for a card type, if any
pub fn template(card_type: CardType) -> Option<NoteTemplate> {
    let template = match card_type {
        CardType::Diaporama => NoteTemplate::Variants(DIAPORAMA),
        CardType::Encarts => NoteTemplate::Variants(ENCARTS),
        CardType::Texte => NoteTemplate::Variants(TEXTE),
        CardType::Flash => NoteTemplate::Variants(FLASH),
        CardType::Avis => NoteTemplate::Plain("Avis client\nAvis x3\nSlide horizontal"),
        CardType::Video => NoteTemplate::Plain("Vidéo\nIframe vidéo administrable"),
        CardType::Annonces => {
            NoteTemplate::Plain("Annonces ref x3\nRemontée d'annonces en automatique")
        }
        CardType::Logos => NoteTemplate::Plain("Logos partenaires\nCarrousel de logos x10"),
        CardType::Team => NoteTemplate::Plain("Présentation de l'équipe\nPhotos + Noms + Fonctions"),
        CardType::Instagram => NoteTemplate::Plain("Feed Instagram\nGrille de 6 à 9 photos"),
        CardType::Reassurance | CardType::Form => return None,
    };
    Some(template)
}

/// Look up the note text for `(type, variant)`
pub fn lookup(card_type: CardType, variant: Option<&str>) -> Option<&'static str> {
    template(card_type).and_then(|t| t.resolve(variant))
}

/// The whole store, serialized as one JSON object in catalog order
/// (types without a template are left out)
#[derive(Debug, Clone, Copy, Default)]
pub struct TemplateStore;

impl Serialize for TemplateStore {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use strum::IntoEnumIterator;

        let mut map = serializer.serialize_map(None)?;
        for card_type in CardType::iter() {
            if let Some(entry) = template(card_type) {
                map.serialize_entry(card_type.as_ref(), &entry)?;
            }
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_variant_table() {
        assert_eq!(
            lookup(CardType::Encarts, Some("slide")),
            Some("Encart slide\nEncart x…")
        );
        assert_eq!(lookup(CardType::Encarts, Some("carousel")), None);
        assert_eq!(lookup(CardType::Encarts, None), None);
    }

    #[test]
    fn test_lookup_plain_ignores_variant() {
        let expected = Some("Vidéo\nIframe vidéo administrable");
        assert_eq!(lookup(CardType::Video, None), expected);
        assert_eq!(lookup(CardType::Video, Some("anything")), expected);
    }

    #[test]
    fn test_lookup_missing_entry() {
        assert_eq!(lookup(CardType::Reassurance, None), None);
        assert_eq!(lookup(CardType::Form, None), None);
    }

    #[test]
    fn test_store_shape() {
        let json = serde_json::to_value(TemplateStore).unwrap();
        assert_eq!(json["avis"], "Avis client\nAvis x3\nSlide horizontal");
        assert_eq!(
            json["flash"]["magazine"],
            "Flash magazine\nGauche : Annonce flash info\nDroite : Annonces x3"
        );
        assert!(json.get("reassurance").is_none());
    }

    #[test]
    fn test_store_keeps_catalog_order() {
        let text = serde_json::to_string(&TemplateStore).unwrap();
        let at = |key: &str| text.find(&format!("\"{}\"", key)).unwrap();
        assert!(at("diaporama") < at("avis"));
        assert!(at("texte") < at("annonces"));
        assert!(at("annonces") < at("instagram"));
        // Variant tables keep their declared order too
        assert!(at("mosaic") < at("exterior"));
    }
}
