use async_trait::async_trait;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::exception::PayrollResult;

#[async_trait]
pub trait RateResolverService: Send + Sync {
    /// The unit rate currently applicable to `worker_id` performing `operation_id`.
    ///
    /// Zero when the worker has no category or the category has no rate for the
    /// operation. Unknown ids resolve to zero as well.
    async fn resolve_rate(&self, worker_id: Uuid, operation_id: Uuid) -> PayrollResult<Decimal>;
}
