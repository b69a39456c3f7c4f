//! The demonstration seed catalog: customers and their invoices.
//!
//! Seeding is idempotent. Customers conflict on email, invoices on the
//! (customer, amount, date) natural key, so re-running the seed operation
//! never duplicates rows.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::invoice::InvoiceStatus;

/// Image reference assigned to customers that were inserted without one.
pub const DEFAULT_IMAGE_URL: &str = "/customers/default.png";

/// One customer to insert. Email is the idempotency key.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerSeed {
    pub name: String,
    pub email: String,
    pub image_url: Option<String>,
}

/// One invoice to insert, referencing its customer by display name.
///
/// An invoice whose customer name resolves to no row is skipped, not an
/// error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvoiceSeed {
    pub customer: String,
    pub amount: i32,
    pub status: InvoiceStatus,
    pub date: NaiveDate,
}

/// A full seed dataset.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SeedCatalog {
    pub customers: Vec<CustomerSeed>,
    pub invoices: Vec<InvoiceSeed>,
}

const CUSTOMERS: &[(&str, &str, &str)] = &[
    ("Evil Rabbit", "evil@example.com", "/customers/evil-rabbit.png"),
    ("Acme Corp", "acme@example.com", "/customers/acme.png"),
    ("Globex", "globex@example.com", "/customers/globex.png"),
    ("Soylent", "soylent@example.com", "/customers/soylent.png"),
    ("Blue Bottle", "bluebottle@example.com", "/customers/blue-bottle.png"),
    ("Orange Inc", "orange@example.com", "/customers/orange-inc.png"),
    ("Lime Green", "lime@example.com", "/customers/lime-green.png"),
    ("Pink Panther", "pink@example.com", "/customers/pink-panther.png"),
    ("Red Rocket", "red@example.com", "/customers/red-rocket.png"),
    ("Yellow Bird", "yellow@example.com", "/customers/yellow-bird.png"),
];

const INVOICES: &[(&str, i32, InvoiceStatus, (i32, u32, u32))] = &[
    ("Evil Rabbit", 666, InvoiceStatus::Paid, (2025, 1, 15)),
    ("Evil Rabbit", 320, InvoiceStatus::Pending, (2025, 2, 10)),
    ("Evil Rabbit", 980, InvoiceStatus::Paid, (2025, 3, 5)),
    ("Acme Corp", 1200, InvoiceStatus::Pending, (2025, 1, 20)),
    ("Acme Corp", 300, InvoiceStatus::Paid, (2025, 2, 18)),
    ("Acme Corp", 450, InvoiceStatus::Paid, (2025, 3, 28)),
    ("Globex", 800, InvoiceStatus::Paid, (2025, 1, 10)),
    ("Globex", 500, InvoiceStatus::Pending, (2025, 2, 22)),
    ("Soylent", 300, InvoiceStatus::Paid, (2025, 1, 5)),
    ("Soylent", 680, InvoiceStatus::Pending, (2025, 3, 11)),
    ("Blue Bottle", 220, InvoiceStatus::Paid, (2025, 1, 8)),
    ("Blue Bottle", 420, InvoiceStatus::Pending, (2025, 2, 9)),
    ("Orange Inc", 615, InvoiceStatus::Paid, (2025, 3, 2)),
    ("Lime Green", 155, InvoiceStatus::Paid, (2025, 1, 12)),
    ("Lime Green", 710, InvoiceStatus::Pending, (2025, 3, 17)),
    ("Pink Panther", 370, InvoiceStatus::Paid, (2025, 2, 4)),
    ("Red Rocket", 990, InvoiceStatus::Pending, (2025, 2, 14)),
    ("Yellow Bird", 260, InvoiceStatus::Paid, (2025, 3, 7)),
];

impl SeedCatalog {
    /// The canonical demonstration dataset: ten customers, eighteen invoices.
    #[expect(clippy::unwrap_used, reason = "static seed dates are compile-time validated")]
    pub fn canonical() -> Self {
        Self {
            customers: CUSTOMERS
                .iter()
                .map(|&(name, email, image_url)| CustomerSeed {
                    name: name.to_owned(),
                    email: email.to_owned(),
                    image_url: Some(image_url.to_owned()),
                })
                .collect(),
            invoices: INVOICES
                .iter()
                .map(|&(customer, amount, status, (y, m, d))| InvoiceSeed {
                    customer: customer.to_owned(),
                    amount,
                    status,
                    date: NaiveDate::from_ymd_opt(y, m, d).unwrap(),
                })
                .collect(),
        }
    }
}
