use async_trait::async_trait;
use chrono::NaiveDate;

use crate::{
    exception::PayrollResult,
    model::vo::{EntryDetail, ReportResult},
};

#[async_trait]
pub trait ReportAggregatorService: Send + Sync {
    /// Detail and per worker / per order sums of the entries worked within
    /// `[from, to]`, both ends inclusive.
    async fn aggregate(&self, from: NaiveDate, to: NaiveDate) -> PayrollResult<ReportResult>;
    async fn recent_entries(&self, limit: u64) -> PayrollResult<Vec<EntryDetail>>;
}
