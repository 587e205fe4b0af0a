use actix_web::{get, post, put, web, HttpResponse};
use domain_payroll::{
    command::SetRateCommand,
    model::{
        entity::{Category, Operation, Order, Rate},
        vo::{Inserted, RateView, WorkerView},
    },
};

use super::{
    dtos::{
        CreateCategoryDto, CreateOperationDto, CreateOrderDto, CreateWorkerDto, ReadinessDto,
        ResolveRateQuery, ResolvedRateDto,
    },
    ApiResult,
};
use crate::infrastructure::ServiceProvider;

/// 201 for a new row, 200 when the key already existed.
fn inserted(inserted: Inserted) -> HttpResponse {
    if inserted.created {
        HttpResponse::Created().json(inserted)
    } else {
        HttpResponse::Ok().json(inserted)
    }
}

#[post("/categories")]
pub async fn create_category(
    sp: web::Data<ServiceProvider>,
    dto: web::Json<CreateCategoryDto>,
) -> ApiResult<HttpResponse> {
    let result = sp.scoped().catalog.create_category(&dto.name).await?;
    Ok(inserted(result))
}

#[get("/categories")]
pub async fn list_categories(sp: web::Data<ServiceProvider>) -> ApiResult<web::Json<Vec<Category>>> {
    Ok(web::Json(sp.scoped().catalog.list_categories().await?))
}

#[post("/workers")]
pub async fn create_worker(
    sp: web::Data<ServiceProvider>,
    dto: web::Json<CreateWorkerDto>,
) -> ApiResult<HttpResponse> {
    let result = sp.scoped().catalog.create_worker(&dto.name, dto.category_id).await?;
    Ok(inserted(result))
}

#[get("/workers")]
pub async fn list_workers(sp: web::Data<ServiceProvider>) -> ApiResult<web::Json<Vec<WorkerView>>> {
    Ok(web::Json(sp.scoped().catalog.list_workers().await?))
}

#[post("/operations")]
pub async fn create_operation(
    sp: web::Data<ServiceProvider>,
    dto: web::Json<CreateOperationDto>,
) -> ApiResult<HttpResponse> {
    let result = sp
        .scoped()
        .catalog
        .create_operation(&dto.name, dto.unit.as_deref())
        .await?;
    Ok(inserted(result))
}

#[get("/operations")]
pub async fn list_operations(
    sp: web::Data<ServiceProvider>,
) -> ApiResult<web::Json<Vec<Operation>>> {
    Ok(web::Json(sp.scoped().catalog.list_operations().await?))
}

#[put("/rates")]
pub async fn set_rate(
    sp: web::Data<ServiceProvider>,
    command: web::Json<SetRateCommand>,
) -> ApiResult<web::Json<Rate>> {
    Ok(web::Json(sp.scoped().catalog.set_rate(command.into_inner()).await?))
}

#[get("/rates")]
pub async fn list_rates(sp: web::Data<ServiceProvider>) -> ApiResult<web::Json<Vec<RateView>>> {
    Ok(web::Json(sp.scoped().catalog.list_rates().await?))
}

#[get("/rates/resolve")]
pub async fn resolve_rate(
    sp: web::Data<ServiceProvider>,
    query: web::Query<ResolveRateQuery>,
) -> ApiResult<web::Json<ResolvedRateDto>> {
    let ResolveRateQuery {
        worker_id,
        operation_id,
    } = query.into_inner();
    let rate = sp.scoped().rate_resolver.resolve_rate(worker_id, operation_id).await?;
    Ok(web::Json(ResolvedRateDto {
        worker_id,
        operation_id,
        rate,
    }))
}

#[post("/orders")]
pub async fn create_order(
    sp: web::Data<ServiceProvider>,
    dto: web::Json<CreateOrderDto>,
) -> ApiResult<HttpResponse> {
    let result = sp
        .scoped()
        .catalog
        .create_order(&dto.code, dto.customer.as_deref())
        .await?;
    Ok(inserted(result))
}

#[get("/orders")]
pub async fn list_orders(sp: web::Data<ServiceProvider>) -> ApiResult<web::Json<Vec<Order>>> {
    Ok(web::Json(sp.scoped().catalog.list_orders().await?))
}

#[get("/catalog/readiness")]
pub async fn readiness(sp: web::Data<ServiceProvider>) -> ApiResult<web::Json<ReadinessDto>> {
    let missing = sp.scoped().catalog.readiness().await?;
    Ok(web::Json(ReadinessDto {
        ready: missing.is_empty(),
        missing,
    }))
}
