use async_trait::async_trait;
use overlay_relay::llm::{Generation, InferenceClient};
use std::sync::{Arc, Mutex};

/// A recorded `generate` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateCall {
    pub model: String,
    pub prompt: String,
}

/// Mock inference client that replays canned generations in order
#[derive(Debug, Clone)]
pub struct MockInferenceClient {
    pub generations: Arc<Mutex<Vec<Generation>>>,
    pub calls: Arc<Mutex<Vec<GenerateCall>>>,
}

impl MockInferenceClient {
    pub fn new() -> Self {
        Self {
            generations: Arc::new(Mutex::new(Vec::new())),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn with_generations(self, generations: Vec<Generation>) -> Self {
        *self.generations.lock().unwrap() = generations;
        self
    }

    pub fn add_text(&self, text: &str) {
        self.generations
            .lock()
            .unwrap()
            .push(Generation::Text(text.to_string()));
    }

    pub fn add_failure(&self, reason: &str) {
        self.generations
            .lock()
            .unwrap()
            .push(Generation::Failed(reason.to_string()));
    }

    pub fn get_calls(&self) -> Vec<GenerateCall> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl InferenceClient for MockInferenceClient {
    async fn generate(&self, model: &str, prompt: &str) -> Generation {
        self.calls.lock().unwrap().push(GenerateCall {
            model: model.to_string(),
            prompt: prompt.to_string(),
        });

        let mut generations = self.generations.lock().unwrap();
        if generations.is_empty() {
            return Generation::Failed("No more mock generations available".to_string());
        }

        generations.remove(0)
    }
}

impl Default for MockInferenceClient {
    fn default() -> Self {
        Self::new()
    }
}
