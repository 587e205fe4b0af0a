use database_model::category;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use workshop_architecture::AggregateRoot;

/// A pay tier shared by workers for rate purposes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: Uuid,
    /// Unique.
    pub name: String,
}

impl AggregateRoot for Category {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl From<category::Model> for Category {
    fn from(model: category::Model) -> Self {
        let category::Model { id, name } = model;
        Self { id, name }
    }
}

impl From<Category> for category::Model {
    fn from(entity: Category) -> Self {
        let Category { id, name } = entity;
        Self { id, name }
    }
}
