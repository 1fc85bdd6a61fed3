use anyhow::Result;
use overlay_relay::{config, server};
use tracing::info;
use tracing_subscriber::{EnvFilter, filter::LevelFilter};

/// Builds the log filter. A `RUST_LOG` value is taken as a full directive
/// string and overrides the configured level, which must be a plain level.
fn build_env_filter(rust_log: Option<&str>, configured_level: &str) -> Result<EnvFilter> {
    if let Some(directives) = rust_log {
        return directives
            .parse::<EnvFilter>()
            .map_err(|e| anyhow::anyhow!("Invalid RUST_LOG '{}': {}", directives, e));
    }

    configured_level.parse::<LevelFilter>().map_err(|_| {
        anyhow::anyhow!(
            "Invalid log level: '{}'. Valid levels: error, warn, info, debug, trace",
            configured_level
        )
    })?;
    Ok(EnvFilter::new(configured_level))
}

#[tokio::main]
async fn main() -> Result<()> {
    // Configuration comes first so the log level can be taken from it
    let config = match config::load().await {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    let rust_log = std::env::var("RUST_LOG").ok();
    let filter = match build_env_filter(rust_log.as_deref(), &config.server.logs.level) {
        Ok(filter) => filter,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .json()
        .init();

    info!(
        "Starting overlay relay with model {} and log filter: {}",
        config.llm.model,
        rust_log.as_deref().unwrap_or(&config.server.logs.level)
    );

    server::run(config).await?;

    Ok(())
}
