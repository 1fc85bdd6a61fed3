use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body of an Ollama `/api/generate` call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateRequest {
    pub model: String,
    pub prompt: String,
    pub stream: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GenerateErrorBody {
    pub error: String,
}

/// Outcome of a single generation call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Generation {
    /// Generated text, trimmed and non-empty.
    Text(String),
    /// The backend answered but without usable text. Holds the raw reply.
    Unrecognized(String),
    /// The call itself failed.
    Failed(String),
}

impl Generation {
    /// Classifies a successful backend reply body.
    pub fn from_reply(reply: &Value) -> Self {
        match reply.get("response").and_then(Value::as_str) {
            Some(text) if !text.trim().is_empty() => Self::Text(text.trim().to_string()),
            _ => Self::Unrecognized(reply.to_string()),
        }
    }

    pub fn is_text(&self) -> bool {
        matches!(self, Self::Text(_))
    }

    /// The string handed back to whoever asked.
    pub fn into_reply(self) -> String {
        match self {
            Self::Text(text) => text,
            Self::Unrecognized(raw) => format!("Unexpected response format: {}", raw),
            Self::Failed(reason) => format!("Error generating response: {}", reason),
        }
    }
}
