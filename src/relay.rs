use crate::{
    config::LlmConfig,
    latest::LatestResponse,
    llm::{Generation, InferenceClient, PromptTemplate},
};
use std::sync::Arc;
use tracing::{info, warn};

/// Turns user input into a generation and publishes successful ones.
pub struct Relay {
    client: Arc<dyn InferenceClient>,
    model: String,
    template: PromptTemplate,
    latest: LatestResponse,
}

impl Relay {
    pub fn new(client: Arc<dyn InferenceClient>, llm: &LlmConfig, latest: LatestResponse) -> Self {
        info!("Relay initialized for model {}", llm.model);

        Self {
            client,
            model: llm.model.clone(),
            template: PromptTemplate::new(llm.prompt_template.clone()),
            latest,
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn latest(&self) -> &LatestResponse {
        &self.latest
    }

    /// Generates a reply for `input`.
    ///
    /// Only real text reaches the shared slot. Unrecognized replies and
    /// failures are described in the returned string and leave the slot
    /// untouched, so the overlay keeps showing the last good answer.
    pub async fn ask(&self, input: &str) -> String {
        let prompt = self.template.render(input);
        let generation = self.client.generate(&self.model, &prompt).await;

        match &generation {
            Generation::Text(text) => {
                info!("Generated {} chars with {}", text.len(), self.model);
                self.latest.set(text.clone());
            }
            Generation::Unrecognized(raw) => {
                warn!("Unexpected response format from {}: {}", self.model, raw);
            }
            Generation::Failed(reason) => {
                warn!("Generation with {} failed: {}", self.model, reason);
            }
        }

        generation.into_reply()
    }
}
