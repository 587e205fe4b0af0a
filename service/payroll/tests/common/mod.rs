#![allow(dead_code)]
use std::sync::Arc;

use chrono::NaiveDate;
use domain_payroll::{
    command::{RecordEntryCommand, SetRateCommand},
    exception::PayrollResult,
    mock::MemoryRepo,
    model::entity::Entry,
    service::{CatalogService, EntryRecorderService},
};
use rust_decimal::Decimal;
use service_payroll::{
    CatalogServiceImpl, EntryRecorderServiceImpl, RateResolverServiceImpl,
    ReportAggregatorServiceImpl,
};
use uuid::Uuid;

/// Every service wired over one in-memory store.
pub struct Ledger {
    pub repo: Arc<MemoryRepo>,
    pub catalog: CatalogServiceImpl,
    pub resolver: Arc<RateResolverServiceImpl>,
    pub recorder: EntryRecorderServiceImpl,
    pub reports: ReportAggregatorServiceImpl,
}

impl Ledger {
    pub fn new() -> Self {
        let repo = Arc::new(MemoryRepo::new());
        let resolver = Arc::new(
            RateResolverServiceImpl::builder()
                .worker_repo(repo.clone())
                .rate_repo(repo.clone())
                .build(),
        );
        Self {
            catalog: CatalogServiceImpl::builder()
                .category_repo(repo.clone())
                .worker_repo(repo.clone())
                .operation_repo(repo.clone())
                .rate_repo(repo.clone())
                .order_repo(repo.clone())
                .build(),
            recorder: EntryRecorderServiceImpl::builder()
                .order_repo(repo.clone())
                .worker_repo(repo.clone())
                .operation_repo(repo.clone())
                .entry_repo(repo.clone())
                .rate_resolver(resolver.clone())
                .build(),
            reports: ReportAggregatorServiceImpl::builder()
                .entry_repo(repo.clone())
                .order_repo(repo.clone())
                .worker_repo(repo.clone())
                .operation_repo(repo.clone())
                .build(),
            resolver,
            repo,
        }
    }

    pub async fn category(&self, name: &str) -> Uuid {
        self.catalog.create_category(name).await.unwrap().id
    }

    pub async fn worker(&self, name: &str, category_id: Option<Uuid>) -> Uuid {
        self.catalog.create_worker(name, category_id).await.unwrap().id
    }

    pub async fn operation(&self, name: &str) -> Uuid {
        self.catalog.create_operation(name, None).await.unwrap().id
    }

    pub async fn order(&self, code: &str) -> Uuid {
        self.catalog.create_order(code, None).await.unwrap().id
    }

    pub async fn rate(&self, category_id: Uuid, operation_id: Uuid, rate: Decimal) {
        self.catalog
            .set_rate(SetRateCommand {
                category_id,
                operation_id,
                rate,
            })
            .await
            .unwrap();
    }

    pub async fn record(
        &self,
        work_date: NaiveDate,
        order_id: Uuid,
        worker_id: Uuid,
        operation_id: Uuid,
        quantity: Decimal,
    ) -> PayrollResult<Entry> {
        self.recorder
            .record_entry(RecordEntryCommand {
                work_date,
                order_id,
                worker_id,
                operation_id,
                quantity,
                note: None,
            })
            .await
    }
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}
