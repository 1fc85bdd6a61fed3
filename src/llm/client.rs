use super::types::*;
use crate::{Error, Result, config::LlmConfig};
use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, warn};

#[async_trait]
pub trait InferenceClient: Send + Sync {
    /// Runs one generation. Never fails outright: transport and backend
    /// problems come back as `Generation::Failed`.
    async fn generate(&self, model: &str, prompt: &str) -> Generation;
}

pub struct OllamaClient {
    client: reqwest::Client,
    base_url: String,
}

impl OllamaClient {
    pub fn new(config: &LlmConfig) -> Self {
        Self::with_client(reqwest::Client::new(), &config.base_url)
    }

    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn generate_url(&self) -> String {
        format!("{}/api/generate", self.base_url)
    }

    async fn request(&self, model: &str, prompt: &str) -> Result<Value> {
        let request = GenerateRequest {
            model: model.to_string(),
            prompt: prompt.to_string(),
            stream: false,
        };

        let response = self
            .client
            .post(self.generate_url())
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let reason = match serde_json::from_str::<GenerateErrorBody>(&body) {
                Ok(parsed) => parsed.error,
                Err(_) => format!("{}: {}", status, body),
            };
            return Err(Error::inference(reason));
        }

        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait]
impl InferenceClient for OllamaClient {
    async fn generate(&self, model: &str, prompt: &str) -> Generation {
        debug!(
            "Sending generate request for model {} ({} prompt bytes)",
            model,
            prompt.len()
        );

        match self.request(model, prompt).await {
            Ok(reply) => {
                debug!("Raw response from Ollama: {}", reply);
                Generation::from_reply(&reply)
            }
            Err(e) => {
                warn!("Generate request to {} failed: {}", self.base_url, e);
                let reason = match e {
                    Error::Inference(reason) => reason,
                    Error::Network(e) => e.to_string(),
                    Error::Serialization(e) => e.to_string(),
                    other => other.to_string(),
                };
                Generation::Failed(reason)
            }
        }
    }
}
