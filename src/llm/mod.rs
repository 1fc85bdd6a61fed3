mod client;
mod prompt;
mod types;

pub use client::{InferenceClient, OllamaClient};
pub use prompt::{DEFAULT_PROMPT_TEMPLATE, INPUT_PLACEHOLDER, PromptTemplate};
pub use types::{GenerateErrorBody, GenerateRequest, Generation};
