//! Idempotent seeding of the demonstration catalog.

use std::collections::HashMap;

use invoicedash_core::{DEFAULT_IMAGE_URL, SeedCatalog};
use serde::Serialize;
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::StorageError;
use crate::schema::ensure_schema;

/// Outcome of one seed run. Counts come from `rows_affected`, so a repeated
/// run over an already-seeded database reports zeroes.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct SeedReport {
    pub customers_inserted: u64,
    pub invoices_inserted: u64,
    /// Invoices whose customer name resolved to no row.
    pub invoices_skipped: u64,
}

/// Bring the schema to its known-good shape and insert the catalog.
///
/// Runs as a single transaction: a failure at any step rolls back every
/// schema change and row insertion of this call.
pub(crate) async fn run_seed(
    pool: &PgPool,
    catalog: &SeedCatalog,
) -> Result<SeedReport, StorageError> {
    let mut tx = pool.begin().await?;

    ensure_schema(&mut tx).await?;

    let mut report = SeedReport::default();

    for customer in &catalog.customers {
        let result = sqlx::query(
            "INSERT INTO customers (name, email, image_url) VALUES ($1, $2, $3) \
             ON CONFLICT (email) DO NOTHING",
        )
        .bind(&customer.name)
        .bind(&customer.email)
        .bind(&customer.image_url)
        .execute(&mut *tx)
        .await?;
        report.customers_inserted += result.rows_affected();
    }

    sqlx::query("UPDATE customers SET image_url = COALESCE(image_url, $1)")
        .bind(DEFAULT_IMAGE_URL)
        .execute(&mut *tx)
        .await?;

    let rows: Vec<(Uuid, String)> =
        sqlx::query_as("SELECT id, name FROM customers").fetch_all(&mut *tx).await?;
    let id_by_name: HashMap<String, Uuid> =
        rows.into_iter().map(|(id, name)| (name, id)).collect();

    for seed in &catalog.invoices {
        let Some(&customer_id) = id_by_name.get(&seed.customer) else {
            tracing::debug!(customer = %seed.customer, "seed invoice skipped, customer not found");
            report.invoices_skipped += 1;
            continue;
        };
        let result = sqlx::query(
            "INSERT INTO invoices (customer_id, amount, status, date) VALUES ($1, $2, $3, $4) \
             ON CONFLICT (customer_id, amount, date) DO NOTHING",
        )
        .bind(customer_id)
        .bind(seed.amount)
        .bind(seed.status.as_str())
        .bind(seed.date)
        .execute(&mut *tx)
        .await?;
        report.invoices_inserted += result.rows_affected();
    }

    tx.commit().await?;

    tracing::info!(
        customers = report.customers_inserted,
        invoices = report.invoices_inserted,
        skipped = report.invoices_skipped,
        "seed completed"
    );
    Ok(report)
}
