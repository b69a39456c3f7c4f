//! PostgreSQL storage layer for the invoicedash admin operations.
//!
//! Two procedures, each running inside one scoped transaction:
//! idempotent catalog seeding and duplicate-invoice cleanup.

mod dedup;
mod error;
mod schema;
mod seeder;
mod store;

pub use dedup::CleanupReport;
pub use error::StorageError;
pub use schema::NATURAL_KEY_INDEX;
pub use seeder::SeedReport;
pub use store::PgStore;
