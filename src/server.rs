use axum::{
    Json, Router,
    routing::{get, post},
};

use std::sync::Arc;

use tower_http::trace::TraceLayer;
use utoipa::OpenApi;

use crate::{config::Config, handlers::rest, service::MemoService};

/// Assembles the full route table. Public so tests can drive the stack
/// in-process with a substitute repository.
pub fn build_router(service: Arc<MemoService>) -> Router {
    Router::new()
        .route("/memo", post(rest::create_memo))
        .route("/memo", get(rest::get_all_memo))
        .route("/memo/{memo_id}", get(rest::get_memo_by_id))
        .route(
            "/api-doc/openapi.json",
            get(|| async { Json(rest::ApiDoc::openapi()) }),
        )
        .with_state(service)
        .layer(TraceLayer::new_for_http())
}

/// Binds the configured address and serves until interrupted; in-flight
/// requests drain before exit.
pub async fn run(config: &Config, service: Arc<MemoService>) -> std::io::Result<()> {
    let listener = tokio::net::TcpListener::bind(config.address()).await?;

    tracing::info!("Started listening on {}", listener.local_addr()?);

    axum::serve(listener, build_router(service))
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for interrupt signal: {}", e);
        return;
    }
    tracing::info!("interrupt received, shutting down");
}
