mod types;

pub use types::*;

use crate::{Error, Result, llm::INPUT_PLACEHOLDER};
use std::{env, path::Path};
use tracing::{debug, info};

/// Loads the configuration from `CONFIG_PATH` (default `config.yaml`).
pub async fn load() -> Result<Config> {
    let config_path = env::var("CONFIG_PATH").unwrap_or_else(|_| "config.yaml".to_string());
    load_from(config_path).await
}

/// Loads the configuration from `path`, falling back to the built-in
/// defaults when the file does not exist.
pub async fn load_from(path: impl AsRef<Path>) -> Result<Config> {
    let path = path.as_ref();

    debug!("Loading configuration from: {}", path.display());

    let config = match tokio::fs::read_to_string(path).await {
        Ok(config_str) => serde_yaml::from_str::<Config>(&config_str)?,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            info!(
                "No configuration file at {}, using built-in defaults",
                path.display()
            );
            Config::default()
        }
        Err(e) => return Err(e.into()),
    };

    config.validate()?;
    Ok(config)
}

impl Config {
    pub fn validate(&self) -> Result<()> {
        if self.llm.model.trim().is_empty() {
            return Err(Error::config("llm.model must not be empty"));
        }
        if !self.llm.prompt_template.contains(INPUT_PLACEHOLDER) {
            return Err(Error::config(format!(
                "llm.prompt_template must contain the {} placeholder",
                INPUT_PLACEHOLDER
            )));
        }

        let overlay = &self.overlay;
        for (name, value) in [
            ("poll_interval_ms", overlay.poll_interval_ms),
            ("char_delay_ms", overlay.char_delay_ms),
            ("dwell_ms", overlay.dwell_ms),
            ("fade_ms", overlay.fade_ms),
        ] {
            if value == 0 {
                return Err(Error::config(format!("overlay.{} must be > 0", name)));
            }
        }

        Ok(())
    }
}
