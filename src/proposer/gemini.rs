//! Typed HTTP client for the Gemini `generateContent` API.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::prompt::build_prompt;
use super::{parse_proposal, ProposalRequest, StructureProposer};
use crate::config::ProposerConfig;
use crate::error::ProposeError;
use crate::models::ProposedCard;

pub struct GeminiProposer {
    base_url: String,
    model: String,
    api_key: Option<String>,
    client: reqwest::Client,
}

// ── API types ───────────────────────────────────────

#[derive(Debug, Serialize)]
struct Part {
    text: String,
}

#[derive(Debug, Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_mime_type: &'static str,
    response_schema: serde_json::Value,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentBody {
    contents: Vec<Content>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: Option<String>,
}

/// Schema of the expected answer: an array of card objects
fn response_schema() -> serde_json::Value {
    json!({
        "type": "ARRAY",
        "items": {
            "type": "OBJECT",
            "properties": {
                "type": { "type": "STRING" },
                "label": { "type": "STRING" },
                "subtype": { "type": "STRING", "nullable": true },
                "noteContent": { "type": "STRING" }
            }
        }
    })
}

/// Concatenated text parts of the first candidate
fn first_candidate_text(response: GenerateContentResponse) -> Result<String, ProposeError> {
    let text = response
        .candidates
        .into_iter()
        .next()
        .and_then(|c| c.content)
        .map(|content| {
            content
                .parts
                .into_iter()
                .filter_map(|p| p.text)
                .collect::<Vec<_>>()
                .join("")
        })
        .unwrap_or_default();

    if text.trim().is_empty() {
        return Err(ProposeError::EmptyResponse);
    }
    Ok(text)
}

// ── Client impl ─────────────────────────────────────

impl GeminiProposer {
    pub fn new(config: &ProposerConfig) -> Self {
        Self {
            base_url: config.api_url.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            api_key: config.api_key.clone(),
            client: reqwest::Client::new(),
        }
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        )
    }

    fn body(request: &ProposalRequest) -> GenerateContentBody {
        GenerateContentBody {
            contents: vec![Content {
                parts: vec![Part {
                    text: build_prompt(&request.description, request.context_json.as_deref()),
                }],
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json",
                response_schema: response_schema(),
            },
        }
    }
}

#[async_trait]
impl StructureProposer for GeminiProposer {
    async fn propose_structure(
        &self,
        request: &ProposalRequest,
    ) -> Result<Vec<ProposedCard>, ProposeError> {
        let api_key = self.api_key.as_deref().ok_or(ProposeError::MissingApiKey)?;

        log::debug!("POST {} (model {})", self.endpoint(), self.model);
        let resp = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", api_key)
            .json(&Self::body(request))
            .send()
            .await?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let body = resp.text().await.unwrap_or_default();
            return Err(ProposeError::Status { status, body });
        }

        let response: GenerateContentResponse = resp.json().await?;
        let text = first_candidate_text(response)?;
        parse_proposal(&text)
    }
}
