use database_model::operation;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use workshop_architecture::AggregateRoot;

/// A billable task type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Operation {
    pub id: Uuid,
    /// Unique.
    pub name: String,
    /// Unit of measure, free text.
    pub unit: String,
}

impl Operation {
    pub const DEFAULT_UNIT: &'static str = "pcs";
}

impl AggregateRoot for Operation {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl From<operation::Model> for Operation {
    fn from(model: operation::Model) -> Self {
        let operation::Model { id, name, unit } = model;
        Self { id, name, unit }
    }
}

impl From<Operation> for operation::Model {
    fn from(entity: Operation) -> Self {
        let Operation { id, name, unit } = entity;
        Self { id, name, unit }
    }
}
