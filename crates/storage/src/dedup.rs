//! Duplicate-invoice detection and removal.
//!
//! Corrective procedure for data written before the natural-key index
//! existed: report every duplicate group, keep the lowest-id row per group,
//! delete the rest, then install the index so duplicates are rejected at the
//! storage layer from then on.

use invoicedash_core::DuplicateGroup;
use serde::Serialize;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};

use crate::error::StorageError;
use crate::schema::ensure_natural_key_index;

/// Outcome of one cleanup run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CleanupReport {
    /// Duplicate groups found before deletion, largest first.
    pub groups: Vec<DuplicateGroup>,
    pub rows_deleted: u64,
}

impl CleanupReport {
    pub fn is_clean(&self) -> bool {
        self.groups.is_empty()
    }
}

fn row_to_group(row: &PgRow) -> Result<DuplicateGroup, StorageError> {
    Ok(DuplicateGroup {
        customer_id: row.try_get("customer_id")?,
        amount: row.try_get("amount")?,
        date: row.try_get("date")?,
        count: row.try_get("dup_count")?,
    })
}

/// Reduce every duplicate group to its lowest-id row and install the
/// natural-key index.
///
/// Runs as a single transaction: a failure between deletion and index
/// creation rolls the deletions back, so the database is never left
/// deduplicated but unconstrained.
pub(crate) async fn run_cleanup(pool: &PgPool) -> Result<CleanupReport, StorageError> {
    let mut tx = pool.begin().await?;

    let rows = sqlx::query(
        "SELECT customer_id, amount, date, COUNT(*) AS dup_count \
         FROM invoices \
         GROUP BY customer_id, amount, date \
         HAVING COUNT(*) > 1 \
         ORDER BY COUNT(*) DESC",
    )
    .fetch_all(&mut *tx)
    .await?;
    let groups = rows.iter().map(row_to_group).collect::<Result<Vec<_>, _>>()?;

    if groups.is_empty() {
        tx.commit().await?;
        tracing::info!("cleanup found no duplicate invoices");
        return Ok(CleanupReport::default());
    }

    // Rank rows within each group by id ascending; everything past the first
    // rank is a discard. Ordering by id keeps the surviving row deterministic.
    let deleted = sqlx::query(
        r#"
        WITH ranked AS (
            SELECT id,
                   ROW_NUMBER() OVER (
                       PARTITION BY customer_id, amount, date
                       ORDER BY id
                   ) AS rn
            FROM invoices
        )
        DELETE FROM invoices
        USING ranked
        WHERE invoices.id = ranked.id
          AND ranked.rn > 1
        "#,
    )
    .execute(&mut *tx)
    .await?;

    ensure_natural_key_index(&mut tx).await?;

    tx.commit().await?;

    let report = CleanupReport { groups, rows_deleted: deleted.rows_affected() };
    tracing::info!(
        groups = report.groups.len(),
        rows_deleted = report.rows_deleted,
        "cleanup removed duplicate invoices"
    );
    Ok(report)
}
