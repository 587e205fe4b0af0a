use async_trait::async_trait;
use chrono::NaiveDate;
use uuid::Uuid;
use workshop_architecture::repository::{AppendOnlyRepository, ReadOnlyRepository};

use crate::model::entity::Entry;

#[async_trait]
pub trait EntryRepo: ReadOnlyRepository<Entry> + AppendOnlyRepository<Entry> + Send + Sync {
    /// Entries with `from <= work_date <= to`, by work date ascending.
    async fn get_by_work_date_range(
        &self,
        from: NaiveDate,
        to: NaiveDate,
    ) -> anyhow::Result<Vec<Entry>>;
    /// The latest `limit` entries by creation time, newest first.
    async fn get_recent(&self, limit: u64) -> anyhow::Result<Vec<Entry>>;
    async fn find_reversal_of(&self, entry_id: Uuid) -> anyhow::Result<Option<Entry>>;
}
