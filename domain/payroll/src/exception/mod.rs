use rust_decimal::Decimal;
use uuid::Uuid;

use crate::model::vo::CatalogKind;

pub type PayrollResult<T> = Result<T, PayrollException>;

#[derive(Debug, thiserror::Error)]
pub enum PayrollException {
    #[error("There is no {kind} with id: {id}.")]
    ReferenceNotFound { kind: CatalogKind, id: Uuid },

    #[error("Quantity must not be negative, got: {quantity}.")]
    InvalidQuantity { quantity: Decimal },

    #[error("Rate must not be negative, got: {rate}.")]
    InvalidRate { rate: Decimal },

    #[error("A {kind} with key: {key} already exists.")]
    DuplicateKey { kind: CatalogKind, key: String },

    #[error("The {kind} name must not be empty.")]
    EmptyName { kind: CatalogKind },

    #[error("Entry: {entry_id} can't be reversed: {reason}.")]
    NotReversible { entry_id: Uuid, reason: String },

    #[error("Payroll internal error: {source}")]
    InternalError {
        #[source]
        source: anyhow::Error,
    },
}

impl PayrollException {
    /// Stable code identifying the error kind to API clients.
    pub fn status(&self) -> u16 {
        match self {
            PayrollException::ReferenceNotFound { .. } => 301,
            PayrollException::InvalidQuantity { .. } => 302,
            PayrollException::InvalidRate { .. } => 303,
            PayrollException::DuplicateKey { .. } => 304,
            PayrollException::EmptyName { .. } => 305,
            PayrollException::NotReversible { .. } => 306,
            PayrollException::InternalError { .. } => 500,
        }
    }
}

impl From<anyhow::Error> for PayrollException {
    fn from(e: anyhow::Error) -> Self {
        match e.downcast::<PayrollException>() {
            Ok(exception) => exception,
            Err(source) => PayrollException::InternalError { source },
        }
    }
}
