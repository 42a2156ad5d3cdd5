//! Error types for structure proposals and context files.

use std::path::PathBuf;

use thiserror::Error;

/// The single message shown when a proposal fails, whatever the cause
pub const PROPOSAL_FAILED_MESSAGE: &str =
    "Une erreur est survenue lors de la génération de la stratégie. Veuillez réessayer.";

/// Notice shown when a non-JSON context file is selected
pub const NOT_JSON_MESSAGE: &str = "Veuillez sélectionner un fichier au format JSON.";

#[derive(Debug, Error)]
pub enum ProposeError {
    #[error("business description is empty")]
    EmptyDescription,

    #[error("no API key configured (set GEMINI_API_KEY or API_KEY)")]
    MissingApiKey,

    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("service returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("response contained no text")]
    EmptyResponse,

    #[error("response is not a valid card list: {0}")]
    Parse(#[from] serde_json::Error),
}

impl ProposeError {
    /// Human-readable message for the dialog. Details go to the log instead.
    pub fn user_message(&self) -> &'static str {
        PROPOSAL_FAILED_MESSAGE
    }
}

#[derive(Debug, Error)]
pub enum ContextError {
    #[error("{} is not a JSON file", .0.display())]
    NotJson(PathBuf),

    #[error("cannot read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ContextError {
    pub fn user_message(&self) -> String {
        match self {
            ContextError::NotJson(_) => NOT_JSON_MESSAGE.to_string(),
            ContextError::Io { .. } => self.to_string(),
        }
    }
}
