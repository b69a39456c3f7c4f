//! Schema bootstrap: extension, tables, columns, and the natural-key index.
//!
//! Every statement is guarded with `IF NOT EXISTS`, so the sequence is safe
//! to re-run against any prior schema state and never drops data.

use sqlx::PgConnection;

use crate::error::StorageError;

/// Name of the unique index enforcing the invoice natural key
/// (customer_id, amount, date).
pub const NATURAL_KEY_INDEX: &str = "uniq_invoices_customer_amount_date";

pub(crate) async fn ensure_schema(conn: &mut PgConnection) -> Result<(), StorageError> {
    // uuid_generate_v4() for the id column defaults
    sqlx::query(r#"CREATE EXTENSION IF NOT EXISTS "uuid-ossp""#).execute(&mut *conn).await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS customers (
            id UUID PRIMARY KEY DEFAULT uuid_generate_v4(),
            name TEXT NOT NULL,
            email TEXT UNIQUE NOT NULL,
            image_url TEXT
        )
        "#,
    )
    .execute(&mut *conn)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS invoices (
            id UUID PRIMARY KEY DEFAULT uuid_generate_v4(),
            customer_id UUID NOT NULL REFERENCES customers(id) ON DELETE CASCADE,
            amount INTEGER NOT NULL,
            status TEXT NOT NULL,
            date DATE DEFAULT CURRENT_DATE
        )
        "#,
    )
    .execute(&mut *conn)
    .await?;

    // Bring tables created by an older schema up to date without touching
    // their data.
    sqlx::query("ALTER TABLE customers ADD COLUMN IF NOT EXISTS image_url TEXT")
        .execute(&mut *conn)
        .await?;

    sqlx::query("ALTER TABLE invoices ADD COLUMN IF NOT EXISTS date DATE DEFAULT CURRENT_DATE")
        .execute(&mut *conn)
        .await?;

    sqlx::query(
        "ALTER TABLE invoices ADD COLUMN IF NOT EXISTS status TEXT NOT NULL DEFAULT 'pending'",
    )
    .execute(&mut *conn)
    .await?;

    ensure_natural_key_index(conn).await
}

/// Install the unique index on invoices (customer_id, amount, date).
///
/// Fails while the table still contains duplicate rows; the cleanup
/// operation removes those first.
pub(crate) async fn ensure_natural_key_index(conn: &mut PgConnection) -> Result<(), StorageError> {
    sqlx::query(&format!(
        "CREATE UNIQUE INDEX IF NOT EXISTS {NATURAL_KEY_INDEX} \
         ON invoices (customer_id, amount, date)"
    ))
    .execute(&mut *conn)
    .await?;
    Ok(())
}
