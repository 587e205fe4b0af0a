use database_model::rate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use workshop_architecture::AggregateRoot;

/// Price per unit of an operation for workers of a category.
///
/// There is at most one rate per (category, operation) pair. Setting it again
/// overwrites the stored value; entries recorded earlier keep the rate they saw.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rate {
    pub id: Uuid,
    pub category_id: Uuid,
    pub operation_id: Uuid,
    /// Non-negative.
    pub rate: Decimal,
}

impl AggregateRoot for Rate {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl From<rate::Model> for Rate {
    fn from(model: rate::Model) -> Self {
        let rate::Model {
            id,
            category_id,
            operation_id,
            rate,
        } = model;
        Self {
            id,
            category_id,
            operation_id,
            rate,
        }
    }
}

impl From<Rate> for rate::Model {
    fn from(entity: Rate) -> Self {
        let Rate {
            id,
            category_id,
            operation_id,
            rate,
        } = entity;
        Self {
            id,
            category_id,
            operation_id,
            rate,
        }
    }
}
