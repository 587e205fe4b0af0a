use uuid::Uuid;

use crate::model::AggregateRoot;

/// Write side of a repository whose aggregates may change after insert.
#[async_trait::async_trait]
pub trait MutableRepository<T>: Send + Sync
where
    T: Send + Sync + AggregateRoot,
{
    async fn insert(&self, entity: &T) -> anyhow::Result<Uuid>;
    async fn update(&self, entity: &T) -> anyhow::Result<()>;
    /// Commits pending changes. Stores without transactions just return `Ok(true)`.
    async fn save_changed(&self) -> anyhow::Result<bool>;
}
