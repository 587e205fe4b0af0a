use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The kinds of rows the ledger stores. Used to label errors and readiness gaps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CatalogKind {
    Category,
    Worker,
    Operation,
    Rate,
    Order,
    Entry,
}

impl fmt::Display for CatalogKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            CatalogKind::Category => "category",
            CatalogKind::Worker => "worker",
            CatalogKind::Operation => "operation",
            CatalogKind::Rate => "rate",
            CatalogKind::Order => "order",
            CatalogKind::Entry => "entry",
        };
        f.write_str(s)
    }
}

/// Outcome of an insert-if-absent catalog operation.
///
/// `created` is false when a row with the same unique key already existed, in which
/// case `id` is that row's id and nothing was written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inserted {
    pub id: Uuid,
    pub created: bool,
}

impl Inserted {
    pub fn created(id: Uuid) -> Self {
        Self { id, created: true }
    }

    pub fn existing(id: Uuid) -> Self {
        Self { id, created: false }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkerView {
    pub id: Uuid,
    pub name: String,
    pub category_id: Option<Uuid>,
    pub category_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RateView {
    pub id: Uuid,
    pub category_id: Uuid,
    pub category_name: String,
    pub operation_id: Uuid,
    pub operation_name: String,
    pub unit: String,
    pub rate: Decimal,
}
