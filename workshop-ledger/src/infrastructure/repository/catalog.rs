use database_model::prelude::*;
use domain_payroll::{
    model::{
        entity::{Category, Operation, Order, Worker},
        vo::CatalogKind,
    },
    repository::{CategoryRepo, OperationRepo, OrderRepo, WorkerRepo},
};
use sea_orm::{prelude::*, QueryOrder, QueryTrait};
use workshop_architecture::repository::{DBRepository, MutableRepository, ReadOnlyRepository};

use crate::infrastructure::database::OrmRepo;

/// Read, insert and full-row update for a table whose rows are unique on one text key.
macro_rules! impl_orm_db_repository {
    ($domain: ty, $entity: ty, $model: ty, $order_by: expr, $kind: expr, $key: ident) => {
        #[async_trait::async_trait]
        impl ReadOnlyRepository<$domain> for OrmRepo {
            async fn find_by_id(&self, id: Uuid) -> anyhow::Result<Option<$domain>> {
                Ok(<$entity>::find_by_id(id)
                    .one(self.db.get_connection())
                    .await?
                    .map(<$domain>::from))
            }

            async fn get_all(&self) -> anyhow::Result<Vec<$domain>> {
                Ok(<$entity>::find()
                    .order_by_asc($order_by)
                    .all(self.db.get_connection())
                    .await?
                    .into_iter()
                    .map(<$domain>::from)
                    .collect())
            }
        }

        #[async_trait::async_trait]
        impl MutableRepository<$domain> for OrmRepo {
            async fn insert(&self, entity: &$domain) -> anyhow::Result<Uuid> {
                let stmt = <$entity>::insert(<$model>::from(entity.to_owned()).into_set())
                    .build(self.backend());
                self.push(stmt, $kind, entity.$key.to_owned()).await;
                Ok(entity.id)
            }

            async fn update(&self, entity: &$domain) -> anyhow::Result<()> {
                let stmt = <$entity>::update(<$model>::from(entity.to_owned()).into_set())
                    .build(self.backend());
                self.push(stmt, $kind, entity.$key.to_owned()).await;
                Ok(())
            }

            async fn save_changed(&self) -> anyhow::Result<bool> {
                self.save_changed().await
            }
        }

        impl DBRepository<$domain> for OrmRepo {}
    };
}

impl_orm_db_repository!(
    Category,
    CategoryEntity,
    CategoryModel,
    CategoryColumn::Name,
    CatalogKind::Category,
    name
);
impl_orm_db_repository!(
    Worker,
    WorkerEntity,
    WorkerModel,
    WorkerColumn::Name,
    CatalogKind::Worker,
    name
);
impl_orm_db_repository!(
    Operation,
    OperationEntity,
    OperationModel,
    OperationColumn::Name,
    CatalogKind::Operation,
    name
);
impl_orm_db_repository!(
    Order,
    OrderEntity,
    OrderModel,
    OrderColumn::CreatedAt,
    CatalogKind::Order,
    code
);

#[async_trait::async_trait]
impl CategoryRepo for OrmRepo {
    async fn find_by_name(&self, name: &str) -> anyhow::Result<Option<Category>> {
        Ok(CategoryEntity::find()
            .filter(CategoryColumn::Name.eq(name))
            .one(self.db.get_connection())
            .await?
            .map(Category::from))
    }
}

#[async_trait::async_trait]
impl WorkerRepo for OrmRepo {
    async fn find_by_name(&self, name: &str) -> anyhow::Result<Option<Worker>> {
        Ok(WorkerEntity::find()
            .filter(WorkerColumn::Name.eq(name))
            .one(self.db.get_connection())
            .await?
            .map(Worker::from))
    }
}

#[async_trait::async_trait]
impl OperationRepo for OrmRepo {
    async fn find_by_name(&self, name: &str) -> anyhow::Result<Option<Operation>> {
        Ok(OperationEntity::find()
            .filter(OperationColumn::Name.eq(name))
            .one(self.db.get_connection())
            .await?
            .map(Operation::from))
    }
}

#[async_trait::async_trait]
impl OrderRepo for OrmRepo {
    async fn find_by_code(&self, code: &str) -> anyhow::Result<Option<Order>> {
        Ok(OrderEntity::find()
            .filter(OrderColumn::Code.eq(code))
            .one(self.db.get_connection())
            .await?
            .map(Order::from))
    }
}
