use chrono::{DateTime, Utc};
use database_model::order;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use workshop_architecture::AggregateRoot;

/// A customer job entries are billed against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: Uuid,
    /// Unique.
    pub code: String,
    pub customer: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl AggregateRoot for Order {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl From<order::Model> for Order {
    fn from(model: order::Model) -> Self {
        let order::Model {
            id,
            code,
            customer,
            created_at,
        } = model;
        Self {
            id,
            code,
            customer,
            created_at,
        }
    }
}

impl From<Order> for order::Model {
    fn from(entity: Order) -> Self {
        let Order {
            id,
            code,
            customer,
            created_at,
        } = entity;
        Self {
            id,
            code,
            customer,
            created_at,
        }
    }
}
