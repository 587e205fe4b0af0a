//! Piecework entries. Rows are only ever inserted.
use sea_orm::{entity::prelude::*, Set};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "entries")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    /// Wall clock time the row was written.
    pub created_at: DateTimeUtc,
    /// Business date the work was done.
    pub work_date: Date,
    pub order_id: Uuid,
    pub worker_id: Uuid,
    pub operation_id: Uuid,
    #[sea_orm(column_type = "Decimal(Some((16, 4)))")]
    pub quantity: Decimal,
    #[sea_orm(column_type = "Decimal(Some((16, 4)))")]
    pub unit_rate: Decimal,
    #[sea_orm(column_type = "Decimal(Some((16, 2)))")]
    pub amount: Decimal,
    #[sea_orm(column_type = "Text", nullable)]
    pub note: Option<String>,
    pub reversal_of: Option<Uuid>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::order::Entity",
        from = "Column::OrderId",
        to = "super::order::Column::Id"
    )]
    Order,
    #[sea_orm(
        belongs_to = "super::worker::Entity",
        from = "Column::WorkerId",
        to = "super::worker::Column::Id"
    )]
    Worker,
    #[sea_orm(
        belongs_to = "super::operation::Entity",
        from = "Column::OperationId",
        to = "super::operation::Column::Id"
    )]
    Operation,
}

impl Related<super::order::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Order.def()
    }
}

impl Related<super::worker::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Worker.def()
    }
}

impl Related<super::operation::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Operation.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Every column marked as set, for inserts and full-row updates.
    pub fn into_set(self) -> ActiveModel {
        ActiveModel {
            id: Set(self.id),
            created_at: Set(self.created_at),
            work_date: Set(self.work_date),
            order_id: Set(self.order_id),
            worker_id: Set(self.worker_id),
            operation_id: Set(self.operation_id),
            quantity: Set(self.quantity),
            unit_rate: Set(self.unit_rate),
            amount: Set(self.amount),
            note: Set(self.note),
            reversal_of: Set(self.reversal_of),
        }
    }
}
