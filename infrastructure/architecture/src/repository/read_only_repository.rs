use uuid::Uuid;

use crate::model::AggregateRoot;

/// Read side of a repository.
#[async_trait::async_trait]
pub trait ReadOnlyRepository<T>: Send + Sync
where
    T: Send + Sync + AggregateRoot,
{
    /// Looks up a single aggregate, `None` when the id is unknown.
    async fn find_by_id(&self, id: Uuid) -> anyhow::Result<Option<T>>;

    async fn get_all(&self) -> anyhow::Result<Vec<T>>;
}
