use actix_web::{get, post, web, HttpResponse};
use domain_payroll::{
    command::{RecordEntryByOrderCodeCommand, RecordEntryCommand, ReverseEntryCommand},
    model::vo::EntryDetail,
};
use uuid::Uuid;

use super::{
    dtos::{RecentEntriesQuery, RecordEntryDto, ReverseEntryDto},
    ApiError, ApiResult,
};
use crate::infrastructure::ServiceProvider;

#[post("/entries")]
pub async fn record_entry(
    sp: web::Data<ServiceProvider>,
    dto: web::Json<RecordEntryDto>,
) -> ApiResult<HttpResponse> {
    let dto = dto.into_inner();
    let recorder = sp.scoped().entry_recorder;
    let entry = match (dto.order_id, dto.order_code) {
        (Some(order_id), _) => {
            recorder
                .record_entry(RecordEntryCommand {
                    work_date: dto.work_date,
                    order_id,
                    worker_id: dto.worker_id,
                    operation_id: dto.operation_id,
                    quantity: dto.quantity,
                    note: dto.note,
                })
                .await?
        }
        (None, Some(order_code)) => {
            recorder
                .record_entry_by_order_code(RecordEntryByOrderCodeCommand {
                    work_date: dto.work_date,
                    order_code,
                    customer: dto.customer,
                    worker_id: dto.worker_id,
                    operation_id: dto.operation_id,
                    quantity: dto.quantity,
                    note: dto.note,
                })
                .await?
        }
        (None, None) => {
            return Err(ApiError::InvalidRequest(
                "either orderId or orderCode is required".to_string(),
            ))
        }
    };
    Ok(HttpResponse::Created().json(entry))
}

#[post("/entries/{id}/reversal")]
pub async fn reverse_entry(
    sp: web::Data<ServiceProvider>,
    id: web::Path<Uuid>,
    dto: Option<web::Json<ReverseEntryDto>>,
) -> ApiResult<HttpResponse> {
    let note = dto.map(|d| d.into_inner()).unwrap_or_default().note;
    let entry = sp
        .scoped()
        .entry_recorder
        .reverse_entry(ReverseEntryCommand {
            entry_id: id.into_inner(),
            note,
        })
        .await?;
    Ok(HttpResponse::Created().json(entry))
}

#[get("/entries/recent")]
pub async fn recent_entries(
    sp: web::Data<ServiceProvider>,
    query: web::Query<RecentEntriesQuery>,
) -> ApiResult<web::Json<Vec<EntryDetail>>> {
    Ok(web::Json(sp.scoped().report_aggregator.recent_entries(query.limit).await?))
}
