//! Response types (Serialize)

use invoicedash_core::DuplicateGroup;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct SeedResponse {
    pub message: &'static str,
    pub customers_inserted: u64,
    pub invoices_inserted: u64,
    pub invoices_skipped: u64,
}

#[derive(Debug, Serialize)]
pub struct CleanupResponse {
    pub message: &'static str,
    pub duplicates_found: Vec<DuplicateGroup>,
    pub rows_deleted: u64,
}

#[derive(Debug, Serialize)]
#[non_exhaustive]
pub struct VersionResponse {
    pub version: &'static str,
}
