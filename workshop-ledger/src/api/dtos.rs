use chrono::NaiveDate;
use domain_payroll::model::vo::{CatalogKind, EntryDetail, GroupTotal, ReportResult};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Deserialize)]
pub struct CreateCategoryDto {
    pub name: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateWorkerDto {
    pub name: String,
    pub category_id: Option<Uuid>,
}

#[derive(Deserialize)]
pub struct CreateOperationDto {
    pub name: String,
    pub unit: Option<String>,
}

#[derive(Deserialize)]
pub struct CreateOrderDto {
    pub code: String,
    pub customer: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolveRateQuery {
    pub worker_id: Uuid,
    pub operation_id: Uuid,
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedRateDto {
    pub worker_id: Uuid,
    pub operation_id: Uuid,
    pub rate: Decimal,
}

#[derive(Serialize, Deserialize)]
pub struct ReadinessDto {
    pub ready: bool,
    /// Catalogs that still need at least one row.
    pub missing: Vec<CatalogKind>,
}

/// An entry as submitted by the operator. The order is named either by id or by
/// code; an unknown code creates the order on the fly.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordEntryDto {
    pub work_date: NaiveDate,
    pub order_id: Option<Uuid>,
    pub order_code: Option<String>,
    pub customer: Option<String>,
    pub worker_id: Uuid,
    pub operation_id: Uuid,
    pub quantity: Decimal,
    pub note: Option<String>,
}

#[derive(Deserialize, Default)]
pub struct ReverseEntryDto {
    pub note: Option<String>,
}

#[derive(Deserialize)]
pub struct RecentEntriesQuery {
    #[serde(default = "RecentEntriesQuery::default_limit")]
    pub limit: u64,
}

impl RecentEntriesQuery {
    fn default_limit() -> u64 {
        20
    }
}

#[derive(Deserialize)]
pub struct ReportQuery {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportDto {
    pub from: NaiveDate,
    pub to: NaiveDate,
    pub detail: Vec<EntryDetail>,
    pub by_worker: Vec<GroupTotal>,
    pub by_order: Vec<GroupTotal>,
    pub total_amount: Decimal,
}

impl ReportDto {
    pub fn new(from: NaiveDate, to: NaiveDate, report: ReportResult) -> Self {
        let total_amount = report.total_amount();
        let ReportResult {
            detail,
            by_worker,
            by_order,
        } = report;
        Self {
            from,
            to,
            detail,
            by_worker,
            by_order,
            total_amount,
        }
    }
}
