use actix_web::{get, web};

use super::{
    dtos::{ReportDto, ReportQuery},
    ApiResult,
};
use crate::infrastructure::ServiceProvider;

/// Entries with `from <= work_date <= to` plus totals per worker and per order.
#[get("/reports")]
pub async fn report(
    sp: web::Data<ServiceProvider>,
    query: web::Query<ReportQuery>,
) -> ApiResult<web::Json<ReportDto>> {
    let ReportQuery { from, to } = query.into_inner();
    let report = sp.scoped().report_aggregator.aggregate(from, to).await?;
    Ok(web::Json(ReportDto::new(from, to, report)))
}
