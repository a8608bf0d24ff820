//! Web server for zencloud.

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;

use crate::config::{Config, CorsConfig};
use crate::file::BlobStorage;

use super::handlers::{AppState, SharedDatabase};
use super::router::{create_health_router, create_router};

/// Web server for the file API.
pub struct WebServer {
    /// Server address.
    addr: SocketAddr,
    /// Application state.
    app_state: Arc<AppState>,
    /// Cross-origin policy configuration.
    cors: CorsConfig,
}

impl WebServer {
    /// Create a new web server.
    pub fn new(config: &Config, db: SharedDatabase, storage: BlobStorage) -> Self {
        let addr = format!("{}:{}", config.server.host, config.server.port)
            .parse()
            .expect("Invalid web server address");

        let app_state = AppState::new(db, storage, config.max_upload_size_bytes());

        Self {
            addr,
            app_state: Arc::new(app_state),
            cors: config.cors.clone(),
        }
    }

    /// Get the server address.
    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// Run the web server.
    pub async fn run(self) -> Result<(), std::io::Error> {
        let router = create_router(self.app_state, &self.cors).merge(create_health_router());

        let listener = TcpListener::bind(self.addr).await?;
        tracing::info!("Web server listening on http://{}", listener.local_addr()?);

        axum::serve(listener, router).await
    }

    /// Run the server and return the actual bound address.
    ///
    /// This is useful for testing when binding to port 0.
    pub async fn run_with_addr(self) -> Result<SocketAddr, std::io::Error> {
        let router = create_router(self.app_state, &self.cors).merge(create_health_router());

        let listener = TcpListener::bind(self.addr).await?;
        let local_addr = listener.local_addr()?;
        tracing::info!("Web server listening on http://{}", local_addr);

        tokio::spawn(async move {
            if let Err(e) = axum::serve(listener, router).await {
                tracing::error!("Web server error: {}", e);
            }
        });

        Ok(local_addr)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::Database;
    use tempfile::TempDir;

    fn create_test_config() -> Config {
        let mut config = Config::default();
        config.server.host = "127.0.0.1".to_string();
        config.server.port = 0; // Use random port
        config
    }

    async fn create_test_server(temp_dir: &TempDir) -> WebServer {
        let config = create_test_config();
        let db = Arc::new(Database::open_in_memory().await.unwrap());
        let storage = BlobStorage::new(temp_dir.path()).unwrap();
        WebServer::new(&config, db, storage)
    }

    #[tokio::test]
    async fn test_web_server_new() {
        let temp_dir = TempDir::new().unwrap();
        let server = create_test_server(&temp_dir).await;
        assert_eq!(server.addr().ip().to_string(), "127.0.0.1");
    }

    #[tokio::test]
    async fn test_web_server_run() {
        let temp_dir = TempDir::new().unwrap();
        let server = create_test_server(&temp_dir).await;
        let addr = server.run_with_addr().await.unwrap();

        // Test health endpoint
        let client = reqwest::Client::new();
        let resp = client
            .get(format!("http://{}/health", addr))
            .send()
            .await
            .unwrap();

        assert!(resp.status().is_success());
        assert_eq!(resp.text().await.unwrap(), "OK");
    }
}
