//! Structure proposals from a generative service.
//!
//! This module encapsulates the one outbound integration:
//! - `context`: optional JSON context file loading
//! - `prompt`: prompt construction from the catalog and templates
//! - `gemini`: HTTP implementation of `StructureProposer`
//!
//! The board never depends on a concrete proposer, so everything else stays
//! testable without network access.

mod context;
mod gemini;
mod prompt;

use std::collections::HashSet;

use async_trait::async_trait;

use crate::error::ProposeError;
use crate::models::catalog::{self, CLOSING_TYPE, EXCLUDED_TYPE};
use crate::models::ProposedCard;

pub use context::{is_json_path, load_context};
pub use gemini::GeminiProposer;
pub use prompt::{MAX_SECTIONS, MIN_SECTIONS};

/// Input of a proposal: business description plus optional raw JSON context
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProposalRequest {
    pub description: String,
    pub context_json: Option<String>,
}

impl ProposalRequest {
    /// Build a request, rejecting a blank description
    pub fn new(description: &str, context_json: Option<String>) -> Result<Self, ProposeError> {
        if description.trim().is_empty() {
            return Err(ProposeError::EmptyDescription);
        }
        Ok(Self {
            description: description.to_string(),
            context_json,
        })
    }
}

/// A capability that turns a description into an ordered card list
#[async_trait]
pub trait StructureProposer: Send + Sync {
    async fn propose_structure(
        &self,
        request: &ProposalRequest,
    ) -> Result<Vec<ProposedCard>, ProposeError>;
}

/// Parse the generator's JSON text into cards
pub fn parse_proposal(text: &str) -> Result<Vec<ProposedCard>, ProposeError> {
    let cards: Vec<ProposedCard> = serde_json::from_str(text.trim())?;
    Ok(cards)
}

/// Expectations a well-formed proposal meets. Violations are reported, not
/// enforced: a parsed proposal is always accepted.
pub fn expectation_warnings(cards: &[ProposedCard]) -> Vec<String> {
    let mut warnings = Vec::new();

    if !(MIN_SECTIONS..=MAX_SECTIONS).contains(&cards.len()) {
        warnings.push(format!(
            "{} sections proposed, expected {} to {}",
            cards.len(),
            MIN_SECTIONS,
            MAX_SECTIONS
        ));
    }

    if let Some(pos) = cards.iter().position(|c| c.card_type == CLOSING_TYPE) {
        if pos + 1 != cards.len() {
            warnings.push(format!("{} section is not last (position {})", CLOSING_TYPE, pos + 1));
        }
    }

    if cards.iter().any(|c| c.card_type == EXCLUDED_TYPE) {
        warnings.push(format!("excluded {} section present", EXCLUDED_TYPE));
    }

    let mut seen = HashSet::new();
    for card in cards {
        let unique = catalog::definition(card.card_type).is_some_and(|d| d.is_unique);
        if unique && !seen.insert(card.card_type) {
            warnings.push(format!("unique {} section proposed more than once", card.card_type));
        }
    }

    warnings
}

/// Run a proposal and log how it went. Errors are returned untouched for the
/// caller to turn into its user-facing message.
pub async fn run_proposal(
    proposer: &dyn StructureProposer,
    request: &ProposalRequest,
) -> Result<Vec<ProposedCard>, ProposeError> {
    log::info!(
        "Requesting structure proposal ({} chars, context: {})",
        request.description.len(),
        request.context_json.is_some()
    );
    match proposer.propose_structure(request).await {
        Ok(cards) => {
            for warning in expectation_warnings(&cards) {
                log::warn!("Proposal: {}", warning);
            }
            log::info!("Received {} proposed cards", cards.len());
            Ok(cards)
        }
        Err(e) => {
            log::error!("Error generating structure: {}", e);
            Err(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::catalog::CardType;

    fn proposed(card_type: CardType) -> ProposedCard {
        ProposedCard {
            card_type,
            label: card_type.to_string(),
            subtype: None,
            note_content: String::new(),
        }
    }

    fn well_formed() -> Vec<ProposedCard> {
        [
            CardType::Diaporama,
            CardType::Reassurance,
            CardType::Texte,
            CardType::Encarts,
            CardType::Texte,
            CardType::Avis,
            CardType::Annonces,
        ]
        .into_iter()
        .map(proposed)
        .collect()
    }

    struct FixedProposer(Vec<ProposedCard>);

    #[async_trait]
    impl StructureProposer for FixedProposer {
        async fn propose_structure(
            &self,
            _request: &ProposalRequest,
        ) -> Result<Vec<ProposedCard>, ProposeError> {
            Ok(self.0.clone())
        }
    }

    struct FailingProposer;

    #[async_trait]
    impl StructureProposer for FailingProposer {
        async fn propose_structure(
            &self,
            _request: &ProposalRequest,
        ) -> Result<Vec<ProposedCard>, ProposeError> {
            Err(ProposeError::EmptyResponse)
        }
    }

    #[test]
    fn test_request_rejects_blank_description() {
        assert!(matches!(
            ProposalRequest::new("   \n", None),
            Err(ProposeError::EmptyDescription)
        ));
        assert!(ProposalRequest::new("Fleuriste", None).is_ok());
    }

    #[test]
    fn test_parse_proposal() {
        let text = r#"[
            {"type": "diaporama", "label": "Accueil", "subtype": "slogan", "noteContent": "Photo pleine largeur"},
            {"type": "annonces", "label": "Nos biens", "subtype": null, "noteContent": "Annonces x3"}
        ]"#;
        let cards = parse_proposal(text).unwrap();
        assert_eq!(cards.len(), 2);
        assert_eq!(cards[0].subtype.as_deref(), Some("slogan"));
        assert_eq!(cards[1].card_type, CardType::Annonces);
    }

    #[test]
    fn test_parse_proposal_rejects_wrong_shape() {
        assert!(matches!(parse_proposal("not json"), Err(ProposeError::Parse(_))));
        assert!(matches!(
            parse_proposal(r#"{"type": "avis"}"#),
            Err(ProposeError::Parse(_))
        ));
        assert!(matches!(
            parse_proposal(r#"[{"type": "avis", "label": "Avis"}]"#),
            Err(ProposeError::Parse(_))
        ));
    }

    #[test]
    fn test_well_formed_has_no_warnings() {
        assert!(expectation_warnings(&well_formed()).is_empty());
    }

    #[test]
    fn test_warnings_for_each_broken_expectation() {
        let mut cards = well_formed();
        cards.swap(5, 6); // closing type no longer last
        cards.push(proposed(CardType::Form));
        cards.push(proposed(CardType::Reassurance));
        cards.push(proposed(CardType::Texte)); // 10 sections

        let warnings = expectation_warnings(&cards);
        assert_eq!(warnings.len(), 4, "{:?}", warnings);
        assert!(warnings.iter().any(|w| w.contains("10 sections")));
        assert!(warnings.iter().any(|w| w.contains("annonces section is not last")));
        assert!(warnings.iter().any(|w| w.contains("excluded form")));
        assert!(warnings.iter().any(|w| w.contains("unique reassurance")));
    }

    #[tokio::test]
    async fn test_run_proposal_accepts_despite_warnings() {
        let proposer = FixedProposer(vec![proposed(CardType::Form)]);
        let request = ProposalRequest::new("Garage", None).unwrap();
        let cards = run_proposal(&proposer, &request).await.unwrap();
        assert_eq!(cards.len(), 1);
    }

    #[tokio::test]
    async fn test_run_proposal_passes_errors_through() {
        let request = ProposalRequest::new("Garage", None).unwrap();
        let result = run_proposal(&FailingProposer, &request).await;
        assert!(matches!(result, Err(ProposeError::EmptyResponse)));
    }
}
