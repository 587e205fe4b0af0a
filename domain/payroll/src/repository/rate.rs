use async_trait::async_trait;
use uuid::Uuid;
use workshop_architecture::repository::DBRepository;

use crate::model::entity::Rate;

#[async_trait]
pub trait RateRepo: DBRepository<Rate> + Send + Sync {
    /// The rate stored for a (category, operation) pair, if any.
    async fn find_by_pair(
        &self,
        category_id: Uuid,
        operation_id: Uuid,
    ) -> anyhow::Result<Option<Rate>>;
}
