use chrono::NaiveDate;
use database_model::prelude::*;
use domain_payroll::{model::entity::Entry, model::vo::CatalogKind, repository::EntryRepo};
use sea_orm::{prelude::*, QueryOrder, QuerySelect, QueryTrait};
use workshop_architecture::repository::{AppendOnlyRepository, ReadOnlyRepository};

use crate::infrastructure::database::OrmRepo;

#[async_trait::async_trait]
impl EntryRepo for OrmRepo {
    async fn get_by_work_date_range(
        &self,
        from: NaiveDate,
        to: NaiveDate,
    ) -> anyhow::Result<Vec<Entry>> {
        Ok(EntryEntity::find()
            .filter(EntryColumn::WorkDate.between(from, to))
            .order_by_asc(EntryColumn::WorkDate)
            .order_by_asc(EntryColumn::CreatedAt)
            .all(self.db.get_connection())
            .await?
            .into_iter()
            .map(Entry::from)
            .collect())
    }

    async fn get_recent(&self, limit: u64) -> anyhow::Result<Vec<Entry>> {
        Ok(EntryEntity::find()
            .order_by_desc(EntryColumn::CreatedAt)
            .limit(limit)
            .all(self.db.get_connection())
            .await?
            .into_iter()
            .map(Entry::from)
            .collect())
    }

    async fn find_reversal_of(&self, entry_id: Uuid) -> anyhow::Result<Option<Entry>> {
        Ok(EntryEntity::find()
            .filter(EntryColumn::ReversalOf.eq(entry_id))
            .one(self.db.get_connection())
            .await?
            .map(Entry::from))
    }
}

#[async_trait::async_trait]
impl ReadOnlyRepository<Entry> for OrmRepo {
    async fn find_by_id(&self, id: Uuid) -> anyhow::Result<Option<Entry>> {
        Ok(EntryEntity::find_by_id(id).one(self.db.get_connection()).await?.map(Entry::from))
    }

    async fn get_all(&self) -> anyhow::Result<Vec<Entry>> {
        Ok(EntryEntity::find()
            .order_by_asc(EntryColumn::CreatedAt)
            .all(self.db.get_connection())
            .await?
            .into_iter()
            .map(Entry::from)
            .collect())
    }
}

#[async_trait::async_trait]
impl AppendOnlyRepository<Entry> for OrmRepo {
    async fn append(&self, entity: &Entry) -> anyhow::Result<Uuid> {
        let stmt = EntryEntity::insert(EntryModel::from(entity.to_owned()).into_set())
            .build(self.backend());
        self.push(stmt, CatalogKind::Entry, entity.id.to_string()).await;
        Ok(entity.id)
    }

    async fn save_changed(&self) -> anyhow::Result<bool> {
        self.save_changed().await
    }
}
