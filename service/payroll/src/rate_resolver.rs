use std::sync::Arc;

use async_trait::async_trait;
use domain_payroll::{
    exception::PayrollResult,
    repository::{RateRepo, WorkerRepo},
    service::RateResolverService,
};
use rust_decimal::Decimal;
use typed_builder::TypedBuilder;
use uuid::Uuid;

#[derive(TypedBuilder)]
pub struct RateResolverServiceImpl {
    worker_repo: Arc<dyn WorkerRepo>,
    rate_repo: Arc<dyn RateRepo>,
}

#[async_trait]
impl RateResolverService for RateResolverServiceImpl {
    async fn resolve_rate(&self, worker_id: Uuid, operation_id: Uuid) -> PayrollResult<Decimal> {
        let category_id = match self.worker_repo.find_by_id(worker_id).await? {
            Some(worker) => worker.category_id,
            None => None,
        };
        let Some(category_id) = category_id else {
            tracing::debug!("Worker: {worker_id} has no category, rate is zero.");
            return Ok(Decimal::ZERO);
        };
        let rate = self
            .rate_repo
            .find_by_pair(category_id, operation_id)
            .await?
            .map(|r| r.rate)
            .unwrap_or(Decimal::ZERO);
        tracing::debug!(
            "Resolved rate {rate} for worker: {worker_id}, operation: {operation_id}, category: {category_id}."
        );
        Ok(rate)
    }
}
