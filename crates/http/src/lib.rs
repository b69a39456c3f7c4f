//! HTTP API server for the invoicedash admin operations.

pub mod api_error;
mod handlers;
mod response_types;

use std::sync::Arc;

use axum::routing::{get, post};
use axum::{Json, Router};

use invoicedash_core::{DeploymentMode, SeedCatalog};
use invoicedash_storage::PgStore;

pub use response_types::{CleanupResponse, SeedResponse, VersionResponse};

/// Shared application state for all HTTP handlers.
///
/// The deployment mode is parsed once at startup and injected here, so the
/// admin guard is deterministic and testable without ambient environment
/// state.
pub struct AppState {
    pub store: PgStore,
    pub mode: DeploymentMode,
    pub catalog: SeedCatalog,
}

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/version", get(version))
        .route("/admin/seed", post(handlers::admin::seed))
        .route("/admin/cleanup-invoices", post(handlers::admin::cleanup_invoices))
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}

async fn version() -> Json<VersionResponse> {
    Json(VersionResponse { version: env!("CARGO_PKG_VERSION") })
}
