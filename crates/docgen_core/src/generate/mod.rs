//! Generation layer over the hosted generative-language API.
//!
//! # Responsibility
//! - Define the text-generation contract used by the content operations.
//! - Keep prompt wording and fallback policy inside this layer.
//!
//! # Invariants
//! - Every operation is a single stateless request/response call; no
//!   retry, no streaming, no rate-limit handling.
//! - Callers above [`content::ContentGenerator`] never see a generation
//!   error; each operation degrades per its documented fallback.

pub mod content;
pub mod http;
pub mod prompts;

use std::error::Error;
use std::fmt::{Display, Formatter};

pub type GenerateResult<T> = Result<T, GenerateError>;

/// Failure of one model invocation.
#[derive(Debug)]
pub enum GenerateError {
    /// Endpoint or API key missing from configuration.
    NotConfigured,
    /// Transport-level failure reaching the API.
    Transport(reqwest::Error),
    /// The API rejected the invocation.
    Backend { status: u16, message: String },
    /// The API answered without any usable candidate text.
    EmptyResponse,
    /// The response payload could not be decoded.
    InvalidPayload(String),
}

impl Display for GenerateError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotConfigured => write!(
                f,
                "generation API is not configured; set the endpoint URL and API key"
            ),
            Self::Transport(err) => write!(f, "generation request failed: {err}"),
            Self::Backend { status, message } => {
                write!(f, "generation request rejected with status {status}: {message}")
            }
            Self::EmptyResponse => write!(f, "generation response contained no text"),
            Self::InvalidPayload(message) => {
                write!(f, "invalid generation response: {message}")
            }
        }
    }
}

impl Error for GenerateError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Transport(err) => Some(err),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for GenerateError {
    fn from(value: reqwest::Error) -> Self {
        Self::Transport(value)
    }
}

/// Model invocation contract.
///
/// One implementation talks to the hosted API; tests script responses.
pub trait TextGenerator {
    /// Invokes the model with a free-form prompt, returning plain text.
    fn generate_text(&self, prompt: &str) -> GenerateResult<String>;

    /// Invokes the model with a JSON string-array output schema.
    fn generate_titles(&self, prompt: &str) -> GenerateResult<Vec<String>>;
}
