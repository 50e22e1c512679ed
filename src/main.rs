use realty_genie::prelude::*;
use std::sync::Arc;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_logger();
    info!("Starting realty-genie {}", version());

    let config = Arc::new(Config::new());
    if config.gemini.api_key.is_empty() {
        error!("GEMINI_API_KEY not set, report generation will fail");
    }

    let state = AppState::from_config(config.clone()).await?;
    serve(&config.server, state).await?;
    Ok(())
}
