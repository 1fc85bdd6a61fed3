use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct QueryRequest {
    #[serde(default)]
    pub input: Option<String>,
}

impl QueryRequest {
    /// The input, if present and non-empty. Whitespace counts as input.
    pub fn input(&self) -> Option<&str> {
        self.input.as_deref().filter(|input| !input.is_empty())
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TextResponse {
    pub response: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
