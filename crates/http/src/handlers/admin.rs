//! Admin endpoints: catalog seeding and duplicate-invoice cleanup.
//!
//! Both refuse to run in production. Neither reads a request body.

use std::sync::Arc;

use axum::extract::State;
use axum::Json;

use invoicedash_core::DeploymentMode;

use crate::api_error::ApiError;
use crate::response_types::{CleanupResponse, SeedResponse};
use crate::AppState;

fn ensure_not_production(mode: DeploymentMode) -> Result<(), ApiError> {
    if mode.is_production() {
        return Err(ApiError::Forbidden);
    }
    Ok(())
}

pub async fn seed(State(state): State<Arc<AppState>>) -> Result<Json<SeedResponse>, ApiError> {
    ensure_not_production(state.mode)?;
    let report = state.store.seed(&state.catalog).await?;
    Ok(Json(SeedResponse {
        message: "Database seeded successfully (idempotent).",
        customers_inserted: report.customers_inserted,
        invoices_inserted: report.invoices_inserted,
        invoices_skipped: report.invoices_skipped,
    }))
}

pub async fn cleanup_invoices(
    State(state): State<Arc<AppState>>,
) -> Result<Json<CleanupResponse>, ApiError> {
    ensure_not_production(state.mode)?;
    let report = state.store.cleanup_duplicates().await?;
    let message = if report.is_clean() {
        "No duplicate invoices found."
    } else {
        "Duplicates removed and unique index ensured."
    };
    Ok(Json(CleanupResponse {
        message,
        duplicates_found: report.groups,
        rows_deleted: report.rows_deleted,
    }))
}
