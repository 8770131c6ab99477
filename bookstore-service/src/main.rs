//! Bookstore service binary

use bookstore_service::prelude::*;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration
    let config = Config::load()?;

    // Initialize tracing
    init_tracing(&config)?;

    let store = ConfiguredStore::open(&config.store).await?;
    info!(
        backend = store.backend_name(),
        "Starting {} service", config.service.name
    );

    let state = AppState::new(config.clone(), store);
    let app = router(state);

    // Run server
    Server::new(config).serve(app).await?;

    shutdown_tracing();
    Ok(())
}
