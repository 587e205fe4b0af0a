use uuid::Uuid;

use crate::model::AggregateRoot;

/// Write side of a repository whose aggregates are facts: they are appended and never
/// updated or removed.
#[async_trait::async_trait]
pub trait AppendOnlyRepository<T>: Send + Sync
where
    T: Send + Sync + AggregateRoot,
{
    async fn append(&self, entity: &T) -> anyhow::Result<Uuid>;
    /// Commits pending changes. Stores without transactions just return `Ok(true)`.
    async fn save_changed(&self) -> anyhow::Result<bool>;
}
