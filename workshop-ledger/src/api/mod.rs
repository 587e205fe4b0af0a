use actix_web::{http::StatusCode, web, HttpResponse, ResponseError};
use domain_payroll::exception::PayrollException;
use serde::Serialize;

pub mod catalog;
pub mod dtos;
pub mod entry;
pub mod report;

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Payroll(#[from] PayrollException),
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

#[derive(Serialize)]
pub struct ErrorBody {
    pub status: u16,
    pub message: String,
}

impl ApiError {
    /// Stable code in the response body; HTTP-level codes are coarser.
    pub fn status(&self) -> u16 {
        match self {
            ApiError::Payroll(e) => e.status(),
            ApiError::InvalidRequest(_) => 400,
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Payroll(e) => match e {
                PayrollException::ReferenceNotFound { .. } => StatusCode::NOT_FOUND,
                PayrollException::DuplicateKey { .. } => StatusCode::CONFLICT,
                PayrollException::InvalidQuantity { .. }
                | PayrollException::InvalidRate { .. }
                | PayrollException::EmptyName { .. }
                | PayrollException::NotReversible { .. } => StatusCode::UNPROCESSABLE_ENTITY,
                PayrollException::InternalError { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            },
            ApiError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
        }
    }

    fn error_response(&self) -> HttpResponse {
        if let ApiError::Payroll(PayrollException::InternalError { source }) = self {
            tracing::error!("Request failed: {source:?}");
        }
        HttpResponse::build(self.status_code()).json(ErrorBody {
            status: self.status(),
            message: self.to_string(),
        })
    }
}

/// Mounts every endpoint. Handlers expect `web::Data<ServiceProvider>` in app data.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(catalog::create_category)
        .service(catalog::list_categories)
        .service(catalog::create_worker)
        .service(catalog::list_workers)
        .service(catalog::create_operation)
        .service(catalog::list_operations)
        .service(catalog::resolve_rate)
        .service(catalog::set_rate)
        .service(catalog::list_rates)
        .service(catalog::create_order)
        .service(catalog::list_orders)
        .service(catalog::readiness)
        .service(entry::recent_entries)
        .service(entry::record_entry)
        .service(entry::reverse_entry)
        .service(report::report);
}
