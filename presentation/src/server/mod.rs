//! HTTP server exposing the response aggregator
//!
//! `POST /api/chat` runs one round; `GET /health` reports readiness.

mod handlers;

pub use handlers::{chat, health};

use axum::Router;
use axum::routing::{get, post};
use council_application::AdvisorClient;
use std::future::Future;
use std::sync::Arc;
use thiserror::Error;
use tokio::net::TcpListener;
use tracing::info;

/// Errors that stop the server itself
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Server error: {0}")]
    Serve(#[from] std::io::Error),
}

/// State shared by the handlers
#[derive(Clone)]
pub struct ServerState {
    client: Arc<dyn AdvisorClient>,
    personas: usize,
}

impl ServerState {
    pub fn new(client: Arc<dyn AdvisorClient>, personas: usize) -> Self {
        Self { client, personas }
    }
}

pub fn router(state: ServerState) -> Router {
    Router::new()
        .route("/api/chat", post(chat))
        .route("/health", get(health))
        .with_state(state)
}

/// Bind `addr` and serve until `shutdown` resolves
pub async fn serve(
    addr: &str,
    state: ServerState,
    shutdown: impl Future<Output = ()> + Send + 'static,
) -> Result<(), ServerError> {
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind {
            addr: addr.to_string(),
            source,
        })?;
    let local = listener.local_addr()?;
    info!("Listening on http://{}", local);
    println!("Advisor council listening on http://{}", local);

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown)
        .await?;

    info!("Server stopped");
    Ok(())
}
