//! HTTP surface of the café: JSON routes over the queue client, plus the static frontend.

pub mod dto;
pub mod handlers;

use crate::clients::QueueClient;
use crate::error::CafeError;
use axum::routing::{get, post};
use axum::Router;
use std::future::Future;
use std::path::Path;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;
use tracing::info;

/// Shared handler state.
#[derive(Clone)]
pub struct AppState {
    pub queue: QueueClient,
}

impl AppState {
    pub fn new(queue: QueueClient) -> Self {
        Self { queue }
    }
}

/// Builds the full router. `/` serves `index.html` from `static_dir`; any path without a
/// route falls through to the same directory.
pub fn router(state: AppState, static_dir: &Path) -> Router {
    Router::new()
        .route("/orders", get(handlers::list_orders))
        .route("/start", post(handlers::start))
        .route("/delay", post(handlers::delay))
        .route("/complete", post(handlers::complete))
        .route("/summary", get(handlers::summary))
        .route("/health", get(handlers::health))
        .route_service("/", ServeFile::new(static_dir.join("index.html")))
        .fallback_service(ServeDir::new(static_dir))
        .layer(CorsLayer::very_permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Serves `router` on `listener` until `shutdown` resolves, then lets in-flight requests
/// finish.
pub async fn serve<F>(listener: TcpListener, router: Router, shutdown: F) -> Result<(), CafeError>
where
    F: Future<Output = ()> + Send + 'static,
{
    if let Ok(addr) = listener.local_addr() {
        info!(%addr, "Café listening");
    }
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown)
        .await?;
    Ok(())
}
