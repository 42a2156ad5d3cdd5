//! Runtime configuration from the environment.

use std::path::PathBuf;

/// Environment variable names - single source of truth
pub mod env_vars {
    pub const API_KEY: &str = "GEMINI_API_KEY";
    /// Accepted when `GEMINI_API_KEY` is unset
    pub const API_KEY_FALLBACK: &str = "API_KEY";
    pub const MODEL: &str = "STRATE_MODEL";
    pub const API_URL: &str = "STRATE_API_URL";
    pub const LOG_FILE: &str = "STRATE_LOG_FILE";
}

/// Default values
pub mod defaults {
    pub const MODEL: &str = "gemini-2.5-flash";
    pub const API_URL: &str = "https://generativelanguage.googleapis.com";
    pub const APP_DIR: &str = "strate-tui";
    pub const LOG_FILE_NAME: &str = "strate.log";
}

/// Settings of the structure proposer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProposerConfig {
    pub api_key: Option<String>,
    pub model: String,
    pub api_url: String,
}

impl ProposerConfig {
    /// Read settings from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read settings through `lookup`; empty values count as unset
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        Self {
            api_key: get(env_vars::API_KEY).or_else(|| get(env_vars::API_KEY_FALLBACK)),
            model: get(env_vars::MODEL).unwrap_or_else(|| defaults::MODEL.to_string()),
            api_url: get(env_vars::API_URL).unwrap_or_else(|| defaults::API_URL.to_string()),
        }
    }
}

/// Log file location: `STRATE_LOG_FILE`, else `<data-local-dir>/strate-tui/strate.log`
pub fn log_file_path() -> Option<PathBuf> {
    if let Some(path) = std::env::var_os(env_vars::LOG_FILE) {
        return Some(PathBuf::from(path));
    }
    dirs::data_local_dir().map(|dir| dir.join(defaults::APP_DIR).join(defaults::LOG_FILE_NAME))
}
