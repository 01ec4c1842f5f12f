use std::sync::Arc;

use anyhow::Result;
use khayma::{
    config::{self, Config},
    logger::setup_logger,
    sanity::SanityClient,
    web::{self, AppState},
};
use log::{error, info};
use tokio::sync::broadcast;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logger
    setup_logger()?;

    let config: Arc<Config> = Arc::new(config::read_config());
    info!(
        "Using Sanity project {} (dataset {})",
        config.sanity_project_id, config.sanity_dataset
    );

    let source = Arc::new(SanityClient::new(config.clone())?);
    let state = AppState {
        config: config.clone(),
        source,
    };

    let (shutdown_tx, shutdown_rx) = broadcast::channel(1);
    tokio::spawn(async move {
        if let Err(err) = tokio::signal::ctrl_c().await {
            error!("Failed to listen for shutdown signal: {}", err);
            // dropping the sender would stop the server
            std::future::pending::<()>().await;
        }
        info!("Shutting down");
        let _ = shutdown_tx.send(());
    });

    if let Err(err) = web::start_http_server(state, shutdown_rx).await {
        error!("Error: {:?}", err);
        return Err(err);
    }

    Ok(())
}
