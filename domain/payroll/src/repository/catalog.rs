use async_trait::async_trait;
use workshop_architecture::repository::DBRepository;

use crate::model::entity::{Category, Operation, Order, Worker};

#[async_trait]
pub trait CategoryRepo: DBRepository<Category> + Send + Sync {
    async fn find_by_name(&self, name: &str) -> anyhow::Result<Option<Category>>;
}

#[async_trait]
pub trait WorkerRepo: DBRepository<Worker> + Send + Sync {
    async fn find_by_name(&self, name: &str) -> anyhow::Result<Option<Worker>>;
}

#[async_trait]
pub trait OperationRepo: DBRepository<Operation> + Send + Sync {
    async fn find_by_name(&self, name: &str) -> anyhow::Result<Option<Operation>>;
}

#[async_trait]
pub trait OrderRepo: DBRepository<Order> + Send + Sync {
    async fn find_by_code(&self, code: &str) -> anyhow::Result<Option<Order>>;
}
