use chrono::{DateTime, NaiveDate, Utc};
use database_model::entry;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use workshop_architecture::AggregateRoot;

/// Number of decimal places money amounts are rounded to.
pub const AMOUNT_SCALE: u32 = 2;

/// One worker performing one operation on an order, priced at the rate in force when it
/// was recorded.
///
/// Entries are immutable. `unit_rate` and `amount` are frozen at creation and never
/// derived again from the current rate table. Corrections are new entries pointing at
/// the corrected one through `reversal_of`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    pub id: Uuid,
    /// Wall clock audit time.
    pub created_at: DateTime<Utc>,
    /// Business date supplied by the operator.
    pub work_date: NaiveDate,
    pub order_id: Uuid,
    pub worker_id: Uuid,
    pub operation_id: Uuid,
    pub quantity: Decimal,
    pub unit_rate: Decimal,
    pub amount: Decimal,
    pub note: Option<String>,
    pub reversal_of: Option<Uuid>,
}

impl Entry {
    /// `unit_rate * quantity` rounded half away from zero to exactly [`AMOUNT_SCALE`]
    /// places, so `0.1 x 3` is `0.30`.
    ///
    /// `None` on decimal overflow.
    pub fn amount_of(unit_rate: Decimal, quantity: Decimal) -> Option<Decimal> {
        unit_rate.checked_mul(quantity).map(|v| {
            let mut amount =
                v.round_dp_with_strategy(AMOUNT_SCALE, RoundingStrategy::MidpointAwayFromZero);
            amount.rescale(AMOUNT_SCALE);
            amount
        })
    }

    pub fn is_reversal(&self) -> bool {
        self.reversal_of.is_some()
    }

    /// Builds the offsetting entry that cancels this one in every sum.
    pub fn reversal(&self, note: Option<String>) -> Entry {
        Entry {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            work_date: self.work_date,
            order_id: self.order_id,
            worker_id: self.worker_id,
            operation_id: self.operation_id,
            quantity: -self.quantity,
            unit_rate: self.unit_rate,
            amount: -self.amount,
            note,
            reversal_of: Some(self.id),
        }
    }
}

impl AggregateRoot for Entry {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl From<entry::Model> for Entry {
    fn from(model: entry::Model) -> Self {
        let entry::Model {
            id,
            created_at,
            work_date,
            order_id,
            worker_id,
            operation_id,
            quantity,
            unit_rate,
            amount,
            note,
            reversal_of,
        } = model;
        Self {
            id,
            created_at,
            work_date,
            order_id,
            worker_id,
            operation_id,
            quantity,
            unit_rate,
            amount,
            note,
            reversal_of,
        }
    }
}

impl From<Entry> for entry::Model {
    fn from(entity: Entry) -> Self {
        let Entry {
            id,
            created_at,
            work_date,
            order_id,
            worker_id,
            operation_id,
            quantity,
            unit_rate,
            amount,
            note,
            reversal_of,
        } = entity;
        Self {
            id,
            created_at,
            work_date,
            order_id,
            worker_id,
            operation_id,
            quantity,
            unit_rate,
            amount,
            note,
            reversal_of,
        }
    }
}
