use async_trait::async_trait;

use crate::{
    command::{RecordEntryByOrderCodeCommand, RecordEntryCommand, ReverseEntryCommand},
    exception::PayrollResult,
    model::entity::Entry,
};

#[async_trait]
pub trait EntryRecorderService: Send + Sync {
    /// Prices and appends a new entry.
    ///
    /// Not idempotent: calling twice records two entries.
    async fn record_entry(&self, command: RecordEntryCommand) -> PayrollResult<Entry>;
    /// Like [`Self::record_entry`], creating the order when the code is unknown.
    ///
    /// The order is only written together with an entry that passed validation.
    async fn record_entry_by_order_code(
        &self,
        command: RecordEntryByOrderCodeCommand,
    ) -> PayrollResult<Entry>;
    /// Appends the offsetting entry of an existing one.
    async fn reverse_entry(&self, command: ReverseEntryCommand) -> PayrollResult<Entry>;
}
