use database_model::prelude::*;
use domain_payroll::{model::entity::Rate, model::vo::CatalogKind, repository::RateRepo};
use sea_orm::{prelude::*, QueryTrait};
use workshop_architecture::repository::{DBRepository, MutableRepository, ReadOnlyRepository};

use crate::infrastructure::database::OrmRepo;

fn pair_key(rate: &Rate) -> String {
    format!("{}/{}", rate.category_id, rate.operation_id)
}

#[async_trait::async_trait]
impl RateRepo for OrmRepo {
    async fn find_by_pair(
        &self,
        category_id: Uuid,
        operation_id: Uuid,
    ) -> anyhow::Result<Option<Rate>> {
        Ok(RateEntity::find()
            .filter(RateColumn::CategoryId.eq(category_id))
            .filter(RateColumn::OperationId.eq(operation_id))
            .one(self.db.get_connection())
            .await?
            .map(Rate::from))
    }
}

#[async_trait::async_trait]
impl ReadOnlyRepository<Rate> for OrmRepo {
    async fn find_by_id(&self, id: Uuid) -> anyhow::Result<Option<Rate>> {
        Ok(RateEntity::find_by_id(id).one(self.db.get_connection()).await?.map(Rate::from))
    }

    async fn get_all(&self) -> anyhow::Result<Vec<Rate>> {
        Ok(RateEntity::find()
            .all(self.db.get_connection())
            .await?
            .into_iter()
            .map(Rate::from)
            .collect())
    }
}

#[async_trait::async_trait]
impl MutableRepository<Rate> for OrmRepo {
    async fn insert(&self, entity: &Rate) -> anyhow::Result<Uuid> {
        let stmt = RateEntity::insert(RateModel::from(entity.to_owned()).into_set())
            .build(self.backend());
        self.push(stmt, CatalogKind::Rate, pair_key(entity)).await;
        Ok(entity.id)
    }

    async fn update(&self, entity: &Rate) -> anyhow::Result<()> {
        let stmt = RateEntity::update(RateModel::from(entity.to_owned()).into_set())
            .build(self.backend());
        self.push(stmt, CatalogKind::Rate, pair_key(entity)).await;
        Ok(())
    }

    async fn save_changed(&self) -> anyhow::Result<bool> {
        self.save_changed().await
    }
}

impl DBRepository<Rate> for OrmRepo {}
