use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordEntryCommand {
    pub work_date: NaiveDate,
    pub order_id: Uuid,
    pub worker_id: Uuid,
    pub operation_id: Uuid,
    pub quantity: Decimal,
    pub note: Option<String>,
}

/// An entry naming its order by code. An unknown code opens a new order together with
/// the entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordEntryByOrderCodeCommand {
    pub work_date: NaiveDate,
    pub order_code: String,
    pub customer: Option<String>,
    pub worker_id: Uuid,
    pub operation_id: Uuid,
    pub quantity: Decimal,
    pub note: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReverseEntryCommand {
    pub entry_id: Uuid,
    pub note: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetRateCommand {
    pub category_id: Uuid,
    pub operation_id: Uuid,
    pub rate: Decimal,
}
