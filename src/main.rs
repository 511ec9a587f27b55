use sicop_cotizador::{ClientConfig, Controller, FormValues, HttpApiClient, Page};
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Connection settings from the environment, defaults otherwise
fn config_from_env() -> ClientConfig {
    let mut config = ClientConfig::default();

    if let Ok(base) = std::env::var("SICOP_API_BASE") {
        config.api_base = base;
    }

    if let Ok(secs) = std::env::var("SICOP_TIMEOUT_SECS") {
        match secs.parse::<u64>() {
            Ok(secs) => config.request_timeout = Some(Duration::from_secs(secs)),
            Err(_) => warn!("Ignoring invalid SICOP_TIMEOUT_SECS: {}", secs),
        }
    }

    config
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = config_from_env();
    info!("🏠 SICOP cotizador - API at {}", config.api_base);

    let client = HttpApiClient::with_config(config)?;
    let mut controller = Controller::new(client, Page::default());

    controller.on_load().await;
    println!("{}", controller.surface());

    // One JSON object of form values per line
    info!("Reading form submissions from stdin");
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }

        let form = match FormValues::from_json(&line) {
            Ok(form) => form,
            Err(e) => {
                warn!("Skipping submission: {:#}", e);
                continue;
            }
        };

        controller.on_submit(&form).await;
        println!("{}", controller.surface());
    }

    Ok(())
}
