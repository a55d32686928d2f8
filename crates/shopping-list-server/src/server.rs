//! HTTP server lifecycle: bind, serve, shut down.

use axum::Router;
use std::sync::Arc;
use tokio::sync::watch;
use tower_http::trace::TraceLayer;

use shopping_list_core::{ItemStore, JsonFileStore};

use crate::config::ServerConfig;
use crate::handlers;
use crate::{Result, ServerError};

/// Shopping list HTTP server
pub struct Server {
    config: ServerConfig,
    store: Arc<dyn ItemStore>,
    shutdown_tx: watch::Sender<bool>,
}

impl Server {
    /// Create a server backed by the JSON file named in the configuration
    pub fn new(config: ServerConfig) -> Self {
        let store = Arc::new(JsonFileStore::new(config.store_path.clone()));
        Self::with_store(config, store)
    }

    /// Create a server backed by an arbitrary store
    pub fn with_store(config: ServerConfig, store: Arc<dyn ItemStore>) -> Self {
        let (shutdown_tx, _) = watch::channel(false);
        Self {
            config,
            store,
            shutdown_tx,
        }
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Build the Axum router with request tracing
    pub fn build_router(&self) -> Router {
        handlers::router(Arc::clone(&self.store)).layer(TraceLayer::new_for_http())
    }

    /// Serve until Ctrl-C or [`Server::shutdown`]
    pub async fn start(&self) -> Result<()> {
        let addr = self.config.socket_addr()?;
        let listener = tokio::net::TcpListener::bind(addr).await?;
        self.serve(listener).await
    }

    /// Serve on an already bound listener
    pub async fn serve(&self, listener: tokio::net::TcpListener) -> Result<()> {
        let router = self.build_router();

        tracing::info!(
            "Shopping list server listening on {} (store: {})",
            listener.local_addr()?,
            self.config.store_path.display()
        );

        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown_signal(self.shutdown_tx.subscribe()))
            .await
            .map_err(|e| ServerError::Internal(e.to_string()))?;

        tracing::info!("Server stopped");
        Ok(())
    }

    /// Shutdown the server. Takes effect even if serving has not started yet.
    pub fn shutdown(&self) {
        self.shutdown_tx.send_replace(true);
        tracing::info!("Server shutdown initiated");
    }
}

async fn shutdown_signal(mut shutdown_rx: watch::Receiver<bool>) {
    let mut fallback_rx = shutdown_rx.clone();
    tokio::select! {
        result = tokio::signal::ctrl_c() => {
            if let Err(e) = result {
                tracing::error!("Failed to listen for Ctrl-C: {}", e);
                // Without a signal handler only an explicit shutdown can stop us
                let _ = fallback_rx.wait_for(|stopped| *stopped).await;
            }
        }
        _ = async { let _ = shutdown_rx.wait_for(|stopped| *stopped).await; } => {}
    }
}
