use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    command::SetRateCommand,
    exception::PayrollResult,
    model::{
        entity::{Category, Operation, Order, Rate},
        vo::{CatalogKind, Inserted, RateView, WorkerView},
    },
};

/// Reference data management. Every `create_*` is insert-if-absent on the row's
/// unique key.
#[async_trait]
pub trait CatalogService: Send + Sync {
    async fn create_category(&self, name: &str) -> PayrollResult<Inserted>;
    async fn list_categories(&self) -> PayrollResult<Vec<Category>>;

    async fn create_worker(&self, name: &str, category_id: Option<Uuid>)
        -> PayrollResult<Inserted>;
    async fn list_workers(&self) -> PayrollResult<Vec<WorkerView>>;

    /// `unit` falls back to [`Operation::DEFAULT_UNIT`] when absent or blank.
    async fn create_operation(&self, name: &str, unit: Option<&str>) -> PayrollResult<Inserted>;
    async fn list_operations(&self) -> PayrollResult<Vec<Operation>>;

    /// Upserts the rate of a (category, operation) pair.
    async fn set_rate(&self, command: SetRateCommand) -> PayrollResult<Rate>;
    async fn list_rates(&self) -> PayrollResult<Vec<RateView>>;

    async fn create_order(&self, code: &str, customer: Option<&str>) -> PayrollResult<Inserted>;
    /// Newest first.
    async fn list_orders(&self) -> PayrollResult<Vec<Order>>;

    /// Catalog kinds that are still empty and block entry recording.
    async fn readiness(&self) -> PayrollResult<Vec<CatalogKind>>;
}
