//! Runtime configuration for the remote store and generation clients.
//!
//! # Responsibility
//! - Hold endpoint/credential settings for both hosted services.
//! - Provide environment-variable loading and a validity check so callers
//!   can fail fast (or degrade) before issuing remote calls.
//!
//! # Invariants
//! - Loaded values are trimmed; a placeholder key counts as unconfigured.

use std::env;

/// Placeholder left in sample configs; treated the same as an empty key.
const PLACEHOLDER_API_KEY: &str = "YOUR_API_KEY_HERE";

/// Default generation model used when none is configured.
pub const DEFAULT_GENERATION_MODEL: &str = "gemini-2.5-flash";

/// Settings for the hosted document store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Base URL of the document-store REST endpoint, without trailing slash.
    pub base_url: String,
    /// API key presented when requesting an anonymous session.
    pub api_key: String,
}

impl StoreConfig {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: trim_trailing_slash(base_url.into()),
            api_key: api_key.into().trim().to_string(),
        }
    }

    /// Reads `DOCGEN_STORE_URL` / `DOCGEN_STORE_API_KEY`.
    pub fn from_env() -> Self {
        Self::new(env_or_empty("DOCGEN_STORE_URL"), env_or_empty("DOCGEN_STORE_API_KEY"))
    }

    /// Returns whether both endpoint and key look usable.
    pub fn is_configured(&self) -> bool {
        !self.base_url.is_empty()
            && !self.api_key.is_empty()
            && self.api_key != PLACEHOLDER_API_KEY
    }
}

/// Settings for the generative-language API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Base URL of the generation endpoint, without trailing slash.
    pub base_url: String,
    pub api_key: String,
    /// Model identifier appended to the invocation path.
    pub model: String,
}

impl GeneratorConfig {
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        model: impl Into<String>,
    ) -> Self {
        let model = model.into().trim().to_string();
        Self {
            base_url: trim_trailing_slash(base_url.into()),
            api_key: api_key.into().trim().to_string(),
            model: if model.is_empty() {
                DEFAULT_GENERATION_MODEL.to_string()
            } else {
                model
            },
        }
    }

    /// Reads `DOCGEN_GENAI_URL` / `DOCGEN_GENAI_API_KEY` / `DOCGEN_GENAI_MODEL`.
    pub fn from_env() -> Self {
        Self::new(
            env_or_empty("DOCGEN_GENAI_URL"),
            env_or_empty("DOCGEN_GENAI_API_KEY"),
            env_or_empty("DOCGEN_GENAI_MODEL"),
        )
    }

    pub fn is_configured(&self) -> bool {
        !self.base_url.is_empty()
            && !self.api_key.is_empty()
            && self.api_key != PLACEHOLDER_API_KEY
    }
}

fn env_or_empty(name: &str) -> String {
    env::var(name).unwrap_or_default()
}

fn trim_trailing_slash(value: String) -> String {
    value.trim().trim_end_matches('/').to_string()
}
