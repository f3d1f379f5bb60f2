//! HTTP surface for the storefront webhook action service.
//!
//! Exposes a single mutation-accepting entry point (`POST /webhook`) backed
//! by the dispatcher, plus a liveness probe and Prometheus metrics, with
//! structured logging (tracing) on every request.

pub mod config;
pub mod error;
pub mod routes;

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use catalog::CatalogStore;
use dispatch::Dispatcher;
use metrics_exporter_prometheus::PrometheusHandle;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Shared application state accessible from all handlers.
pub struct AppState {
    pub dispatcher: Dispatcher,
}

/// Creates the Axum application router with all routes and shared state.
pub fn create_app(state: Arc<AppState>, metrics_handle: PrometheusHandle) -> Router {
    let metrics_router = Router::new()
        .route("/metrics", get(routes::metrics::get))
        .with_state(metrics_handle);

    Router::new()
        .route("/health", get(routes::health::check))
        .route("/webhook", post(routes::webhook::handle))
        .with_state(state)
        .merge(metrics_router)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
}

/// Creates application state over a seeded catalog store.
pub fn create_default_state() -> Arc<AppState> {
    create_state(CatalogStore::with_seed_data())
}

/// Creates application state over an explicit store.
pub fn create_state(store: CatalogStore) -> Arc<AppState> {
    Arc::new(AppState {
        dispatcher: Dispatcher::new(store),
    })
}
