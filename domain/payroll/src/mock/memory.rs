use async_trait::async_trait;
use chrono::NaiveDate;
use tokio::sync::Mutex;
use uuid::Uuid;
use workshop_architecture::{
    repository::{AppendOnlyRepository, DBRepository, MutableRepository, ReadOnlyRepository},
    AggregateRoot,
};

use crate::{
    exception::PayrollException,
    model::{
        entity::{Category, Entry, Operation, Order, Rate, Worker},
        vo::CatalogKind,
    },
    repository::{CategoryRepo, EntryRepo, OperationRepo, OrderRepo, RateRepo, WorkerRepo},
};

/// Keeps every table in memory. Writes are visible immediately, `save_changed` is a
/// no-op.
#[derive(Default)]
pub struct MemoryRepo {
    categories: Mutex<Vec<Category>>,
    workers: Mutex<Vec<Worker>>,
    operations: Mutex<Vec<Operation>>,
    rates: Mutex<Vec<Rate>>,
    orders: Mutex<Vec<Order>>,
    entries: Mutex<Vec<Entry>>,
}

impl MemoryRepo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrites a stored rate without going through the catalog, as an
    /// administrator editing the table directly would.
    pub async fn overwrite_rate(&self, rate_id: Uuid, rate: rust_decimal::Decimal) -> bool {
        let mut rates = self.rates.lock().await;
        match rates.iter_mut().find(|r| r.id == rate_id) {
            Some(r) => {
                r.rate = rate;
                true
            }
            None => false,
        }
    }
}

fn insert_unique<T, K>(
    rows: &mut Vec<T>,
    entity: &T,
    kind: CatalogKind,
    key: impl Fn(&T) -> K,
) -> anyhow::Result<Uuid>
where
    T: Clone + AggregateRoot,
    K: PartialEq + std::fmt::Debug,
{
    let k = key(entity);
    if rows.iter().any(|r| r.id() == entity.id() || key(r) == k) {
        return Err(PayrollException::DuplicateKey {
            kind,
            key: format!("{k:?}"),
        }
        .into());
    }
    rows.push(entity.clone());
    Ok(entity.id())
}

fn update_unique<T, K>(
    rows: &mut [T],
    entity: &T,
    kind: CatalogKind,
    key: impl Fn(&T) -> K,
) -> anyhow::Result<()>
where
    T: Clone + AggregateRoot,
    K: PartialEq + std::fmt::Debug,
{
    let k = key(entity);
    if rows.iter().any(|r| r.id() != entity.id() && key(r) == k) {
        return Err(PayrollException::DuplicateKey {
            kind,
            key: format!("{k:?}"),
        }
        .into());
    }
    let row = rows
        .iter_mut()
        .find(|r| r.id() == entity.id())
        .ok_or(anyhow::anyhow!("No such {kind} id: {}", entity.id()))?;
    *row = entity.clone();
    Ok(())
}

macro_rules! impl_memory_read_only_repository {
    ($domain: ty, $field: ident) => {
        #[async_trait]
        impl ReadOnlyRepository<$domain> for MemoryRepo {
            async fn find_by_id(&self, id: Uuid) -> anyhow::Result<Option<$domain>> {
                Ok(self.$field.lock().await.iter().find(|x| x.id == id).cloned())
            }

            async fn get_all(&self) -> anyhow::Result<Vec<$domain>> {
                Ok(self.$field.lock().await.clone())
            }
        }
    };
}

macro_rules! impl_memory_db_repository {
    ($domain: ty, $field: ident, $kind: expr, $key: expr) => {
        impl_memory_read_only_repository!($domain, $field);

        #[async_trait]
        impl MutableRepository<$domain> for MemoryRepo {
            async fn insert(&self, entity: &$domain) -> anyhow::Result<Uuid> {
                insert_unique(&mut *self.$field.lock().await, entity, $kind, $key)
            }

            async fn update(&self, entity: &$domain) -> anyhow::Result<()> {
                update_unique(&mut *self.$field.lock().await, entity, $kind, $key)
            }

            async fn save_changed(&self) -> anyhow::Result<bool> {
                Ok(true)
            }
        }

        impl DBRepository<$domain> for MemoryRepo {}
    };
}

impl_memory_db_repository!(Category, categories, CatalogKind::Category, |c: &Category| c
    .name
    .clone());
impl_memory_db_repository!(Worker, workers, CatalogKind::Worker, |w: &Worker| w.name.clone());
impl_memory_db_repository!(Operation, operations, CatalogKind::Operation, |o: &Operation| o
    .name
    .clone());
impl_memory_db_repository!(Rate, rates, CatalogKind::Rate, |r: &Rate| (
    r.category_id,
    r.operation_id
));
impl_memory_db_repository!(Order, orders, CatalogKind::Order, |o: &Order| o.code.clone());
impl_memory_read_only_repository!(Entry, entries);

#[async_trait]
impl CategoryRepo for MemoryRepo {
    async fn find_by_name(&self, name: &str) -> anyhow::Result<Option<Category>> {
        Ok(self.categories.lock().await.iter().find(|c| c.name == name).cloned())
    }
}

#[async_trait]
impl WorkerRepo for MemoryRepo {
    async fn find_by_name(&self, name: &str) -> anyhow::Result<Option<Worker>> {
        Ok(self.workers.lock().await.iter().find(|w| w.name == name).cloned())
    }
}

#[async_trait]
impl OperationRepo for MemoryRepo {
    async fn find_by_name(&self, name: &str) -> anyhow::Result<Option<Operation>> {
        Ok(self.operations.lock().await.iter().find(|o| o.name == name).cloned())
    }
}

#[async_trait]
impl OrderRepo for MemoryRepo {
    async fn find_by_code(&self, code: &str) -> anyhow::Result<Option<Order>> {
        Ok(self.orders.lock().await.iter().find(|o| o.code == code).cloned())
    }
}

#[async_trait]
impl RateRepo for MemoryRepo {
    async fn find_by_pair(
        &self,
        category_id: Uuid,
        operation_id: Uuid,
    ) -> anyhow::Result<Option<Rate>> {
        Ok(self
            .rates
            .lock()
            .await
            .iter()
            .find(|r| r.category_id == category_id && r.operation_id == operation_id)
            .cloned())
    }
}

#[async_trait]
impl AppendOnlyRepository<Entry> for MemoryRepo {
    async fn append(&self, entity: &Entry) -> anyhow::Result<Uuid> {
        let mut entries = self.entries.lock().await;
        if entries.iter().any(|e| e.id == entity.id) {
            return Err(PayrollException::DuplicateKey {
                kind: CatalogKind::Entry,
                key: entity.id.to_string(),
            }
            .into());
        }
        entries.push(entity.clone());
        Ok(entity.id)
    }

    async fn save_changed(&self) -> anyhow::Result<bool> {
        Ok(true)
    }
}

#[async_trait]
impl EntryRepo for MemoryRepo {
    async fn get_by_work_date_range(
        &self,
        from: NaiveDate,
        to: NaiveDate,
    ) -> anyhow::Result<Vec<Entry>> {
        let mut entries = self
            .entries
            .lock()
            .await
            .iter()
            .filter(|e| from <= e.work_date && e.work_date <= to)
            .cloned()
            .collect::<Vec<_>>();
        entries.sort_by_key(|e| e.work_date);
        Ok(entries)
    }

    async fn get_recent(&self, limit: u64) -> anyhow::Result<Vec<Entry>> {
        let mut entries = self.entries.lock().await.clone();
        entries.reverse();
        entries.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        entries.truncate(usize::try_from(limit).unwrap_or(usize::MAX));
        Ok(entries)
    }

    async fn find_reversal_of(&self, entry_id: Uuid) -> anyhow::Result<Option<Entry>> {
        Ok(self.entries.lock().await.iter().find(|e| e.reversal_of == Some(entry_id)).cloned())
    }
}
