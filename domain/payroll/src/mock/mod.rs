//! Test doubles: mockall mocks of the repository and service traits, plus an
//! in-memory repository honouring the same uniqueness rules as the database.
mod memory;

pub use memory::MemoryRepo;

use async_trait::async_trait;
use chrono::NaiveDate;
use mockall::mock;
use rust_decimal::Decimal;
use uuid::Uuid;
use workshop_architecture::repository::{
    AppendOnlyRepository, DBRepository, MutableRepository, ReadOnlyRepository,
};

use crate::{
    exception::PayrollResult,
    model::entity::{Entry, Rate, Worker},
    repository::{EntryRepo, RateRepo, WorkerRepo},
    service::RateResolverService,
};

mock! {
    pub RateResolverService {}
    #[async_trait]
    impl RateResolverService for RateResolverService {
        async fn resolve_rate(&self, worker_id: Uuid, operation_id: Uuid) -> PayrollResult<Decimal>;
    }
}

mock! {
    pub WorkerRepo {}
    #[async_trait]
    impl WorkerRepo for WorkerRepo {
        async fn find_by_name(&self, name: &str) -> anyhow::Result<Option<Worker>>;
    }
    #[async_trait]
    impl ReadOnlyRepository<Worker> for WorkerRepo {
        async fn find_by_id(&self, id: Uuid) -> anyhow::Result<Option<Worker>>;
        async fn get_all(&self) -> anyhow::Result<Vec<Worker>>;
    }
    #[async_trait]
    impl MutableRepository<Worker> for WorkerRepo {
        async fn insert(&self, entity: &Worker) -> anyhow::Result<Uuid>;
        async fn update(&self, entity: &Worker) -> anyhow::Result<()>;
        async fn save_changed(&self) -> anyhow::Result<bool>;
    }
    impl DBRepository<Worker> for WorkerRepo {}
}

mock! {
    pub RateRepo {}
    #[async_trait]
    impl RateRepo for RateRepo {
        async fn find_by_pair(
            &self,
            category_id: Uuid,
            operation_id: Uuid,
        ) -> anyhow::Result<Option<Rate>>;
    }
    #[async_trait]
    impl ReadOnlyRepository<Rate> for RateRepo {
        async fn find_by_id(&self, id: Uuid) -> anyhow::Result<Option<Rate>>;
        async fn get_all(&self) -> anyhow::Result<Vec<Rate>>;
    }
    #[async_trait]
    impl MutableRepository<Rate> for RateRepo {
        async fn insert(&self, entity: &Rate) -> anyhow::Result<Uuid>;
        async fn update(&self, entity: &Rate) -> anyhow::Result<()>;
        async fn save_changed(&self) -> anyhow::Result<bool>;
    }
    impl DBRepository<Rate> for RateRepo {}
}

mock! {
    pub EntryRepo {}
    #[async_trait]
    impl EntryRepo for EntryRepo {
        async fn get_by_work_date_range(
            &self,
            from: NaiveDate,
            to: NaiveDate,
        ) -> anyhow::Result<Vec<Entry>>;
        async fn get_recent(&self, limit: u64) -> anyhow::Result<Vec<Entry>>;
        async fn find_reversal_of(&self, entry_id: Uuid) -> anyhow::Result<Option<Entry>>;
    }
    #[async_trait]
    impl ReadOnlyRepository<Entry> for EntryRepo {
        async fn find_by_id(&self, id: Uuid) -> anyhow::Result<Option<Entry>>;
        async fn get_all(&self) -> anyhow::Result<Vec<Entry>>;
    }
    #[async_trait]
    impl AppendOnlyRepository<Entry> for EntryRepo {
        async fn append(&self, entity: &Entry) -> anyhow::Result<Uuid>;
        async fn save_changed(&self) -> anyhow::Result<bool>;
    }
}
