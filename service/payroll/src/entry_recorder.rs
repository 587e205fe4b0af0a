use std::sync::Arc;

use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use domain_payroll::{
    command::{RecordEntryByOrderCodeCommand, RecordEntryCommand, ReverseEntryCommand},
    exception::{PayrollException, PayrollResult},
    model::{
        entity::{Entry, Order},
        vo::CatalogKind,
    },
    repository::{EntryRepo, OperationRepo, OrderRepo, WorkerRepo},
    service::{EntryRecorderService, RateResolverService},
};
use rust_decimal::Decimal;
use typed_builder::TypedBuilder;
use uuid::Uuid;

#[derive(TypedBuilder)]
pub struct EntryRecorderServiceImpl {
    order_repo: Arc<dyn OrderRepo>,
    worker_repo: Arc<dyn WorkerRepo>,
    operation_repo: Arc<dyn OperationRepo>,
    entry_repo: Arc<dyn EntryRepo>,
    rate_resolver: Arc<dyn RateResolverService>,
}

#[async_trait]
impl EntryRecorderService for EntryRecorderServiceImpl {
    async fn record_entry(&self, command: RecordEntryCommand) -> PayrollResult<Entry> {
        let RecordEntryCommand {
            work_date,
            order_id,
            worker_id,
            operation_id,
            quantity,
            note,
        } = command;
        check_quantity(quantity)?;
        if self.order_repo.find_by_id(order_id).await?.is_none() {
            return Err(PayrollException::ReferenceNotFound {
                kind: CatalogKind::Order,
                id: order_id,
            });
        }
        self.ensure_worker_and_operation(worker_id, operation_id).await?;

        let entry = self
            .priced_entry(work_date, order_id, worker_id, operation_id, quantity, note)
            .await?;
        self.entry_repo.append(&entry).await?;
        self.entry_repo.save_changed().await?;
        log_recorded(&entry);
        Ok(entry)
    }

    async fn record_entry_by_order_code(
        &self,
        command: RecordEntryByOrderCodeCommand,
    ) -> PayrollResult<Entry> {
        let RecordEntryByOrderCodeCommand {
            work_date,
            order_code,
            customer,
            worker_id,
            operation_id,
            quantity,
            note,
        } = command;
        check_quantity(quantity)?;
        let code = order_code.trim();
        if code.is_empty() {
            return Err(PayrollException::EmptyName {
                kind: CatalogKind::Order,
            });
        }
        self.ensure_worker_and_operation(worker_id, operation_id).await?;

        let (order_id, new_order) = match self.order_repo.find_by_code(code).await? {
            Some(order) => (order.id, None),
            None => {
                let order = Order {
                    id: Uuid::new_v4(),
                    code: code.to_owned(),
                    customer: customer
                        .as_deref()
                        .map(str::trim)
                        .filter(|c| !c.is_empty())
                        .map(str::to_owned),
                    created_at: Utc::now(),
                };
                (order.id, Some(order))
            }
        };
        let entry = self
            .priced_entry(work_date, order_id, worker_id, operation_id, quantity, note)
            .await?;
        // Both writes share one unit of work when the repositories do.
        if let Some(order) = &new_order {
            self.order_repo.insert(order).await?;
        }
        self.entry_repo.append(&entry).await?;
        self.order_repo.save_changed().await?;
        self.entry_repo.save_changed().await?;
        if let Some(order) = new_order {
            tracing::info!(
                "Created order: {} with id: {} for entry: {}.",
                order.code,
                order.id,
                entry.id
            );
        }
        log_recorded(&entry);
        Ok(entry)
    }

    async fn reverse_entry(&self, command: ReverseEntryCommand) -> PayrollResult<Entry> {
        let entry_id = command.entry_id;
        let original = self.entry_repo.find_by_id(entry_id).await?.ok_or(
            PayrollException::ReferenceNotFound {
                kind: CatalogKind::Entry,
                id: entry_id,
            },
        )?;
        if original.is_reversal() {
            return Err(PayrollException::NotReversible {
                entry_id,
                reason: "it is itself a reversal".to_string(),
            });
        }
        if let Some(reversal) = self.entry_repo.find_reversal_of(entry_id).await? {
            return Err(PayrollException::NotReversible {
                entry_id,
                reason: format!("it was already reversed by entry {}", reversal.id),
            });
        }
        let reversal = original.reversal(normalize_note(command.note));
        self.entry_repo.append(&reversal).await?;
        self.entry_repo.save_changed().await?;
        tracing::info!("Reversed entry: {entry_id} with entry: {}.", reversal.id);
        Ok(reversal)
    }
}

impl EntryRecorderServiceImpl {
    async fn ensure_worker_and_operation(
        &self,
        worker_id: Uuid,
        operation_id: Uuid,
    ) -> PayrollResult<()> {
        if self.worker_repo.find_by_id(worker_id).await?.is_none() {
            return Err(PayrollException::ReferenceNotFound {
                kind: CatalogKind::Worker,
                id: worker_id,
            });
        }
        if self.operation_repo.find_by_id(operation_id).await?.is_none() {
            return Err(PayrollException::ReferenceNotFound {
                kind: CatalogKind::Operation,
                id: operation_id,
            });
        }
        Ok(())
    }

    /// Resolves the rate once and freezes it with the amount into a new entry.
    async fn priced_entry(
        &self,
        work_date: NaiveDate,
        order_id: Uuid,
        worker_id: Uuid,
        operation_id: Uuid,
        quantity: Decimal,
        note: Option<String>,
    ) -> PayrollResult<Entry> {
        let unit_rate = self.rate_resolver.resolve_rate(worker_id, operation_id).await?;
        let amount = Entry::amount_of(unit_rate, quantity).ok_or_else(|| {
            PayrollException::InternalError {
                source: anyhow::anyhow!("Amount of {unit_rate} x {quantity} overflows."),
            }
        })?;
        Ok(Entry {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            work_date,
            order_id,
            worker_id,
            operation_id,
            quantity,
            unit_rate,
            amount,
            note: normalize_note(note),
            reversal_of: None,
        })
    }
}

fn check_quantity(quantity: Decimal) -> PayrollResult<()> {
    if quantity < Decimal::ZERO {
        return Err(PayrollException::InvalidQuantity { quantity });
    }
    Ok(())
}

fn log_recorded(entry: &Entry) {
    tracing::info!(
        "Recorded entry: {} for worker: {}, operation: {}, order: {}, {} x {} = {}.",
        entry.id,
        entry.worker_id,
        entry.operation_id,
        entry.order_id,
        entry.quantity,
        entry.unit_rate,
        entry.amount
    );
}

fn normalize_note(note: Option<String>) -> Option<String> {
    note.map(|n| n.trim().to_owned()).filter(|n| !n.is_empty())
}
