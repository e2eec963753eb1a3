// File: services/linebook_backend/src/main.rs
use linebook_backend::app_state::AppState;
use linebook_backend::service_factory::LinebookServiceFactory;
use linebook_common::logging;
use linebook_config::load_config;
use std::error::Error;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error + Send + Sync>> {
    logging::init();

    let config = Arc::new(load_config()?);
    let factory = Arc::new(LinebookServiceFactory::new(config.clone()).await);
    let app = AppState::new(config.clone(), factory).router()?;

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Starting server at http://{}", addr);
    info!("LINE webhook available at http://{}/webhook", addr);

    axum::serve(listener, app).await?;
    Ok(())
}
