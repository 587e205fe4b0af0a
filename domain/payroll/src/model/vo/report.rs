use std::collections::HashMap;

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An entry with the display names of its order, worker and operation joined in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryDetail {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub work_date: NaiveDate,
    pub order_code: String,
    pub worker_name: String,
    pub operation_name: String,
    pub unit: String,
    pub quantity: Decimal,
    pub unit_rate: Decimal,
    pub amount: Decimal,
    pub note: Option<String>,
    pub reversal_of: Option<Uuid>,
}

/// Sums of stored amounts and quantities for one group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupTotal {
    pub key: String,
    pub amount: Decimal,
    pub quantity: Decimal,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportResult {
    pub detail: Vec<EntryDetail>,
    pub by_worker: Vec<GroupTotal>,
    pub by_order: Vec<GroupTotal>,
}

impl ReportResult {
    /// Groups `detail` by worker name and by order code.
    ///
    /// Groups keep the order in which their key first appears in `detail`. The key is
    /// the display name, so two workers sharing a name fall into one group.
    pub fn from_detail(detail: Vec<EntryDetail>) -> Self {
        let by_worker = group_totals(&detail, |d| d.worker_name.as_str());
        let by_order = group_totals(&detail, |d| d.order_code.as_str());
        Self {
            detail,
            by_worker,
            by_order,
        }
    }

    pub fn total_amount(&self) -> Decimal {
        self.detail.iter().map(|d| d.amount).sum()
    }
}

fn group_totals<'a, F>(detail: &'a [EntryDetail], key: F) -> Vec<GroupTotal>
where
    F: Fn(&'a EntryDetail) -> &'a str,
{
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut groups: Vec<GroupTotal> = vec![];
    for row in detail {
        let k = key(row);
        let pos = *index.entry(k).or_insert_with(|| {
            groups.push(GroupTotal {
                key: k.to_owned(),
                amount: Decimal::ZERO,
                quantity: Decimal::ZERO,
            });
            groups.len() - 1
        });
        groups[pos].amount += row.amount;
        groups[pos].quantity += row.quantity;
    }
    groups
}
