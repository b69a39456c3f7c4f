use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Payment status of an invoice. Stored as lowercase text in `invoices.status`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceStatus {
    Paid,
    Pending,
}

impl InvoiceStatus {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Paid => "paid",
            Self::Pending => "pending",
        }
    }
}

impl std::fmt::Display for InvoiceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for InvoiceStatus {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "paid" => Ok(Self::Paid),
            "pending" => Ok(Self::Pending),
            _ => Err(anyhow::anyhow!("Invalid invoice status: {}", s)),
        }
    }
}

/// A row in `customers`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Customer {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub image_url: Option<String>,
}

/// A row in `invoices`. The customer reference cascades on delete.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Invoice {
    pub id: Uuid,
    pub customer_id: Uuid,
    /// Monetary amount in integer minor units.
    pub amount: i32,
    pub status: InvoiceStatus,
    pub date: Option<NaiveDate>,
}

/// One group of invoice rows sharing the same (customer, amount, date)
/// natural key. Groups of size 1 never appear in a cleanup report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DuplicateGroup {
    pub customer_id: Uuid,
    pub amount: i32,
    pub date: Option<NaiveDate>,
    pub count: i64,
}
