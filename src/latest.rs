use std::sync::Arc;
use tokio::sync::watch;

pub const PLACEHOLDER: &str = "Waiting for AI response...";

/// Single process-wide slot holding the most recent generated text.
///
/// Clones share the slot. Writes replace the whole value and reads take a
/// copy of it, so an observer sees either the previous or the new text,
/// never a mix.
#[derive(Debug, Clone)]
pub struct LatestResponse {
    slot: Arc<watch::Sender<String>>,
}

impl LatestResponse {
    pub fn new() -> Self {
        Self::with_value(PLACEHOLDER)
    }

    pub fn with_value(value: impl Into<String>) -> Self {
        let (slot, _) = watch::channel(value.into());
        Self {
            slot: Arc::new(slot),
        }
    }

    pub fn get(&self) -> String {
        self.slot.borrow().clone()
    }

    pub fn set(&self, value: impl Into<String>) {
        self.slot.send_replace(value.into());
    }

    /// Receiver that is notified on every `set`.
    pub fn subscribe(&self) -> watch::Receiver<String> {
        self.slot.subscribe()
    }
}

impl Default for LatestResponse {
    fn default() -> Self {
        Self::new()
    }
}
