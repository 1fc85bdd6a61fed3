use crate::{config::OverlayConfig, latest::PLACEHOLDER};

const TEMPLATE: &str = include_str!("overlay.html");

/// Renders the overlay page with the configured timings baked into its script.
pub fn render(config: &OverlayConfig) -> String {
    TEMPLATE
        .replace("{{POLL_INTERVAL_MS}}", &config.poll_interval_ms.to_string())
        .replace("{{CHAR_DELAY_MS}}", &config.char_delay_ms.to_string())
        .replace("{{DWELL_MS}}", &config.dwell_ms.to_string())
        .replace("{{FADE_MS}}", &config.fade_ms.to_string())
        .replace("{{PLACEHOLDER}}", PLACEHOLDER)
}
