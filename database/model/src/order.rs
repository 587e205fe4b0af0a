use sea_orm::{entity::prelude::*, Set};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "orders")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub code: String,
    pub customer: Option<String>,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Every column marked as set, for inserts and full-row updates.
    pub fn into_set(self) -> ActiveModel {
        ActiveModel {
            id: Set(self.id),
            code: Set(self.code),
            customer: Set(self.customer),
            created_at: Set(self.created_at),
        }
    }
}
