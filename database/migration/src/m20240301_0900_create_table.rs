use database_model::prelude::*;
use sea_orm_migration::{
    prelude::*,
    sea_orm::{EntityTrait, Schema},
};

pub struct Migration;

const IDX_RATES_PAIR: &str = "idx_rates_category_operation";
const IDX_ENTRIES_WORK_DATE: &str = "idx_entries_work_date";

fn get_seaorm_create_stmt<E: EntityTrait>(manager: &SchemaManager, e: E) -> TableCreateStatement {
    let schema = Schema::new(manager.get_database_backend());
    schema.create_table_from_entity(e).if_not_exists().to_owned()
}

fn get_seaorm_drop_stmt<E: EntityTrait>(e: E) -> TableDropStatement {
    Table::drop().table(e).if_exists().to_owned()
}

impl MigrationName for Migration {
    fn name(&self) -> &str {
        "m20240301_0900_create_table"
    }
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Referenced tables first, sqlite cannot add foreign keys afterwards.
        let stmts = vec![
            get_seaorm_create_stmt(manager, CategoryEntity),
            get_seaorm_create_stmt(manager, OperationEntity),
            get_seaorm_create_stmt(manager, OrderEntity),
            get_seaorm_create_stmt(manager, WorkerEntity),
            get_seaorm_create_stmt(manager, RateEntity),
            get_seaorm_create_stmt(manager, EntryEntity),
        ];
        for stmt in stmts {
            manager.create_table(stmt).await?;
        }
        manager
            .create_index(
                Index::create()
                    .name(IDX_RATES_PAIR)
                    .table(RateEntity)
                    .col(RateColumn::CategoryId)
                    .col(RateColumn::OperationId)
                    .unique()
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name(IDX_ENTRIES_WORK_DATE)
                    .table(EntryEntity)
                    .col(EntryColumn::WorkDate)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name(IDX_ENTRIES_WORK_DATE).table(EntryEntity).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name(IDX_RATES_PAIR).table(RateEntity).to_owned())
            .await?;
        let stmts = vec![
            get_seaorm_drop_stmt(EntryEntity),
            get_seaorm_drop_stmt(RateEntity),
            get_seaorm_drop_stmt(WorkerEntity),
            get_seaorm_drop_stmt(OrderEntity),
            get_seaorm_drop_stmt(OperationEntity),
            get_seaorm_drop_stmt(CategoryEntity),
        ];
        for stmt in stmts {
            manager.drop_table(stmt).await?;
        }
        Ok(())
    }
}
