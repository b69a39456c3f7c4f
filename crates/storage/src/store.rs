//! Handle to the invoicedash PostgreSQL database.

use invoicedash_core::{Customer, Invoice, InvoiceStatus, SeedCatalog};
use sqlx::postgres::{PgPoolOptions, PgRow};
use sqlx::{PgPool, Row};
use uuid::Uuid;

use crate::dedup::{run_cleanup, CleanupReport};
use crate::error::StorageError;
use crate::seeder::{run_seed, SeedReport};

#[derive(Clone, Debug)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    /// Connect with a small pool. No schema work happens here; the seed
    /// operation owns schema bootstrap.
    pub async fn connect(database_url: &str) -> Result<Self, StorageError> {
        let pool = PgPoolOptions::new().max_connections(8).connect(database_url).await?;
        tracing::info!("PgStore connected");
        Ok(Self { pool })
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Idempotently bring the schema up to date and insert the catalog.
    pub async fn seed(&self, catalog: &SeedCatalog) -> Result<SeedReport, StorageError> {
        run_seed(&self.pool, catalog).await
    }

    /// Remove duplicate invoices and install the natural-key index.
    pub async fn cleanup_duplicates(&self) -> Result<CleanupReport, StorageError> {
        run_cleanup(&self.pool).await
    }

    pub async fn list_customers(&self) -> Result<Vec<Customer>, StorageError> {
        let rows = sqlx::query("SELECT id, name, email, image_url FROM customers ORDER BY name")
            .fetch_all(&self.pool)
            .await?;
        rows.iter().map(row_to_customer).collect()
    }

    pub async fn invoices_for_customer(
        &self,
        customer_id: Uuid,
    ) -> Result<Vec<Invoice>, StorageError> {
        let rows = sqlx::query(
            "SELECT id, customer_id, amount, status, date FROM invoices \
             WHERE customer_id = $1 ORDER BY date, id",
        )
        .bind(customer_id)
        .fetch_all(&self.pool)
        .await?;
        rows.iter().map(row_to_invoice).collect()
    }
}

fn row_to_customer(row: &PgRow) -> Result<Customer, StorageError> {
    Ok(Customer {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        email: row.try_get("email")?,
        image_url: row.try_get("image_url")?,
    })
}

fn row_to_invoice(row: &PgRow) -> Result<Invoice, StorageError> {
    let id: Uuid = row.try_get("id")?;
    let status_text: String = row.try_get("status")?;
    let status = status_text.parse::<InvoiceStatus>().map_err(|e| {
        StorageError::DataCorruption {
            context: format!("invoice {id} has unrecognized status"),
            source: e.into(),
        }
    })?;
    Ok(Invoice {
        id,
        customer_id: row.try_get("customer_id")?,
        amount: row.try_get("amount")?,
        status,
        date: row.try_get("date")?,
    })
}
