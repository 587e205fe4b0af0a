//! Table definitions of the workshop ledger.
pub mod category;
pub mod entry;
pub mod operation;
pub mod order;
pub mod rate;
pub mod worker;

pub mod prelude {
    pub use super::{
        category::{
            ActiveModel as CategoryActiveModel, Column as CategoryColumn,
            Entity as CategoryEntity, Model as CategoryModel,
        },
        entry::{
            ActiveModel as EntryActiveModel, Column as EntryColumn, Entity as EntryEntity,
            Model as EntryModel,
        },
        operation::{
            ActiveModel as OperationActiveModel, Column as OperationColumn,
            Entity as OperationEntity, Model as OperationModel,
        },
        order::{
            ActiveModel as OrderActiveModel, Column as OrderColumn, Entity as OrderEntity,
            Model as OrderModel,
        },
        rate::{
            ActiveModel as RateActiveModel, Column as RateColumn, Entity as RateEntity,
            Model as RateModel,
        },
        worker::{
            ActiveModel as WorkerActiveModel, Column as WorkerColumn, Entity as WorkerEntity,
            Model as WorkerModel,
        },
    };
}
