//! Error type shared by the HTTP adapter and every domain service.
//!
//! ERROR HANDLING
//! ==============
//! Nothing is retried. Callers render `Display` inline; when the backend sent
//! its `{"status", "message"}` body the message is carried through verbatim.
//! Short plain-text bodies (the verification endpoints answer that way) count
//! as backend messages too; HTML error pages never do.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use serde::Deserialize;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (offline, CORS, DNS).
    #[error("network error: {0}")]
    Transport(String),
    /// The backend answered with a non-2xx status.
    #[error("{message}")]
    Http {
        status: u16,
        message: String,
        /// Whether `message` came from the backend error body.
        server_provided: bool,
    },
    /// The response body did not match the expected shape.
    #[error("unexpected response: {0}")]
    Decode(String),
    /// The request body could not be built.
    #[error("could not encode request: {0}")]
    Encode(String),
    /// HTTP is only performed in the browser.
    #[error("not available on server")]
    Unavailable,
}

/// Longest plain-text error body shown to the user as-is.
const MAX_TEXT_MESSAGE: usize = 200;

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

impl ApiError {
    /// Build an HTTP error from a status and raw response body.
    pub fn from_status(status: u16, body: &str) -> Self {
        let server_message = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.message)
            .map(|m| m.trim().to_owned())
            .filter(|m| !m.is_empty())
            .or_else(|| plain_text_message(body));
        match server_message {
            Some(message) => Self::Http { status, message, server_provided: true },
            None => Self::Http {
                status,
                message: format!("request failed with status {status}"),
                server_provided: false,
            },
        }
    }

    /// HTTP status, when the backend answered.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// True for a 404 answer.
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    /// Message to show the user: the backend's own text when it sent one,
    /// otherwise `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Self::Http { message, server_provided: true, .. } => message.clone(),
            _ => fallback.to_owned(),
        }
    }
}

/// A bare text body, when it reads like a sentence rather than a page or a
/// JSON document.
fn plain_text_message(body: &str) -> Option<String> {
    let text = body.trim();
    let looks_structured = text.starts_with('<') || text.starts_with('{') || text.starts_with('[');
    (!text.is_empty() && !looks_structured && text.chars().count() <= MAX_TEXT_MESSAGE).then(|| text.to_owned())
}
