use database_model::worker;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use workshop_architecture::AggregateRoot;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Worker {
    pub id: Uuid,
    /// Unique.
    pub name: String,
    /// A worker without a category is paid nothing for any operation.
    pub category_id: Option<Uuid>,
}

impl AggregateRoot for Worker {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl From<worker::Model> for Worker {
    fn from(model: worker::Model) -> Self {
        let worker::Model {
            id,
            name,
            category_id,
        } = model;
        Self {
            id,
            name,
            category_id,
        }
    }
}

impl From<Worker> for worker::Model {
    fn from(entity: Worker) -> Self {
        let Worker { id, name, category_id } = entity;
        Self { id, name, category_id }
    }
}
