use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use domain_payroll::{
    exception::{PayrollException, PayrollResult},
    model::{
        entity::{Entry, Operation},
        vo::{CatalogKind, EntryDetail, ReportResult},
    },
    repository::{EntryRepo, OperationRepo, OrderRepo, WorkerRepo},
    service::ReportAggregatorService,
};
use typed_builder::TypedBuilder;
use uuid::Uuid;

#[derive(TypedBuilder)]
pub struct ReportAggregatorServiceImpl {
    entry_repo: Arc<dyn EntryRepo>,
    order_repo: Arc<dyn OrderRepo>,
    worker_repo: Arc<dyn WorkerRepo>,
    operation_repo: Arc<dyn OperationRepo>,
}

#[async_trait]
impl ReportAggregatorService for ReportAggregatorServiceImpl {
    async fn aggregate(&self, from: NaiveDate, to: NaiveDate) -> PayrollResult<ReportResult> {
        let entries = self.entry_repo.get_by_work_date_range(from, to).await?;
        tracing::debug!("{} entries worked from {from} to {to}.", entries.len());
        if entries.is_empty() {
            return Ok(ReportResult::default());
        }
        let detail = self.join_names(entries).await?;
        Ok(ReportResult::from_detail(detail))
    }

    async fn recent_entries(&self, limit: u64) -> PayrollResult<Vec<EntryDetail>> {
        let entries = self.entry_repo.get_recent(limit).await?;
        if entries.is_empty() {
            return Ok(vec![]);
        }
        self.join_names(entries).await
    }
}

impl ReportAggregatorServiceImpl {
    /// Looks up display names of every entry's order, worker and operation. Keeps the
    /// order of `entries`.
    async fn join_names(&self, entries: Vec<Entry>) -> PayrollResult<Vec<EntryDetail>> {
        let orders = self
            .order_repo
            .get_all()
            .await?
            .into_iter()
            .map(|o| (o.id, o.code))
            .collect::<HashMap<Uuid, String>>();
        let workers = self
            .worker_repo
            .get_all()
            .await?
            .into_iter()
            .map(|w| (w.id, w.name))
            .collect::<HashMap<Uuid, String>>();
        let operations = self
            .operation_repo
            .get_all()
            .await?
            .into_iter()
            .map(|o| (o.id, o))
            .collect::<HashMap<Uuid, Operation>>();

        entries
            .into_iter()
            .map(|entry| {
                let order_code =
                    orders.get(&entry.order_id).ok_or(PayrollException::ReferenceNotFound {
                        kind: CatalogKind::Order,
                        id: entry.order_id,
                    })?;
                let worker_name =
                    workers.get(&entry.worker_id).ok_or(PayrollException::ReferenceNotFound {
                        kind: CatalogKind::Worker,
                        id: entry.worker_id,
                    })?;
                let operation = operations.get(&entry.operation_id).ok_or(
                    PayrollException::ReferenceNotFound {
                        kind: CatalogKind::Operation,
                        id: entry.operation_id,
                    },
                )?;
                Ok(EntryDetail {
                    id: entry.id,
                    created_at: entry.created_at,
                    work_date: entry.work_date,
                    order_code: order_code.to_owned(),
                    worker_name: worker_name.to_owned(),
                    operation_name: operation.name.to_owned(),
                    unit: operation.unit.to_owned(),
                    quantity: entry.quantity,
                    unit_rate: entry.unit_rate,
                    amount: entry.amount,
                    note: entry.note,
                    reversal_of: entry.reversal_of,
                })
            })
            .collect()
    }
}
