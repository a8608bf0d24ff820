use std::sync::Arc;

use tracing::info;

use zencloud::{BlobStorage, Config, Database, WebServer};

#[tokio::main]
async fn main() -> zencloud::Result<()> {
    // Load configuration
    let config = match Config::load_with_env("config.toml") {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load config.toml: {e}");
            eprintln!("Using default configuration.");
            let mut config = Config::default();
            config.apply_env_overrides();
            config
        }
    };
    config.validate()?;

    // Initialize logging
    if let Err(e) = zencloud::logging::init(&config.logging) {
        eprintln!("Failed to initialize logging: {e}");
        // Fall back to console-only logging
        zencloud::logging::init_console_only(&config.logging.level);
    }

    info!("zencloud - self-hosted file storage");

    let db = Arc::new(Database::open(&config.database.path).await?);

    let storage = BlobStorage::new(&config.storage.path)?;
    info!("Blob storage initialized at: {}", config.storage.path);

    let server = WebServer::new(&config, db, storage);
    info!("Server running on port {}...", config.server.port);
    server.run().await?;

    Ok(())
}
