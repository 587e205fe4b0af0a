use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use domain_payroll::{
    command::SetRateCommand,
    exception::{PayrollException, PayrollResult},
    model::{
        entity::{Category, Operation, Order, Rate, Worker},
        vo::{CatalogKind, Inserted, RateView, WorkerView},
    },
    repository::{CategoryRepo, OperationRepo, OrderRepo, RateRepo, WorkerRepo},
    service::CatalogService,
};
use rust_decimal::Decimal;
use typed_builder::TypedBuilder;
use uuid::Uuid;
use workshop_architecture::{repository::DBRepository, AggregateRoot};

#[derive(TypedBuilder)]
pub struct CatalogServiceImpl {
    category_repo: Arc<dyn CategoryRepo>,
    worker_repo: Arc<dyn WorkerRepo>,
    operation_repo: Arc<dyn OperationRepo>,
    rate_repo: Arc<dyn RateRepo>,
    order_repo: Arc<dyn OrderRepo>,
}

#[async_trait]
impl CatalogService for CatalogServiceImpl {
    async fn create_category(&self, name: &str) -> PayrollResult<Inserted> {
        let name = required_name(CatalogKind::Category, name)?;
        if let Some(existing) = self.category_repo.find_by_name(name).await? {
            return Ok(Inserted::existing(existing.id));
        }
        let category = Category {
            id: Uuid::new_v4(),
            name: name.to_owned(),
        };
        match insert_and_save(&*self.category_repo, &category).await {
            Err(PayrollException::DuplicateKey { kind, key }) => {
                tracing::warn!("Absorbed duplicate {kind}: {key}.");
                let existing = self.category_repo.find_by_name(name).await?.ok_or(
                    PayrollException::DuplicateKey { kind, key },
                )?;
                Ok(Inserted::existing(existing.id))
            }
            result => {
                result?;
                tracing::info!("Created category: {name} with id: {}.", category.id);
                Ok(Inserted::created(category.id))
            }
        }
    }

    async fn list_categories(&self) -> PayrollResult<Vec<Category>> {
        let mut categories = self.category_repo.get_all().await?;
        categories.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(categories)
    }

    async fn create_worker(
        &self,
        name: &str,
        category_id: Option<Uuid>,
    ) -> PayrollResult<Inserted> {
        let name = required_name(CatalogKind::Worker, name)?;
        if let Some(category_id) = category_id {
            if self.category_repo.find_by_id(category_id).await?.is_none() {
                return Err(PayrollException::ReferenceNotFound {
                    kind: CatalogKind::Category,
                    id: category_id,
                });
            }
        }
        if let Some(existing) = self.worker_repo.find_by_name(name).await? {
            return Ok(Inserted::existing(existing.id));
        }
        let worker = Worker {
            id: Uuid::new_v4(),
            name: name.to_owned(),
            category_id,
        };
        match insert_and_save(&*self.worker_repo, &worker).await {
            Err(PayrollException::DuplicateKey { kind, key }) => {
                tracing::warn!("Absorbed duplicate {kind}: {key}.");
                let existing = self
                    .worker_repo
                    .find_by_name(name)
                    .await?
                    .ok_or(PayrollException::DuplicateKey { kind, key })?;
                Ok(Inserted::existing(existing.id))
            }
            result => {
                result?;
                tracing::info!("Created worker: {name} with id: {}.", worker.id);
                Ok(Inserted::created(worker.id))
            }
        }
    }

    async fn list_workers(&self) -> PayrollResult<Vec<WorkerView>> {
        let categories = self
            .category_repo
            .get_all()
            .await?
            .into_iter()
            .map(|c| (c.id, c.name))
            .collect::<HashMap<Uuid, String>>();
        let mut workers = self
            .worker_repo
            .get_all()
            .await?
            .into_iter()
            .map(|w| WorkerView {
                category_name: w.category_id.and_then(|id| categories.get(&id).cloned()),
                id: w.id,
                name: w.name,
                category_id: w.category_id,
            })
            .collect::<Vec<_>>();
        workers.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(workers)
    }

    async fn create_operation(&self, name: &str, unit: Option<&str>) -> PayrollResult<Inserted> {
        let name = required_name(CatalogKind::Operation, name)?;
        if let Some(existing) = self.operation_repo.find_by_name(name).await? {
            return Ok(Inserted::existing(existing.id));
        }
        let unit = unit.map(str::trim).filter(|u| !u.is_empty()).unwrap_or(Operation::DEFAULT_UNIT);
        let operation = Operation {
            id: Uuid::new_v4(),
            name: name.to_owned(),
            unit: unit.to_owned(),
        };
        match insert_and_save(&*self.operation_repo, &operation).await {
            Err(PayrollException::DuplicateKey { kind, key }) => {
                tracing::warn!("Absorbed duplicate {kind}: {key}.");
                let existing = self
                    .operation_repo
                    .find_by_name(name)
                    .await?
                    .ok_or(PayrollException::DuplicateKey { kind, key })?;
                Ok(Inserted::existing(existing.id))
            }
            result => {
                result?;
                tracing::info!("Created operation: {name} ({unit}) with id: {}.", operation.id);
                Ok(Inserted::created(operation.id))
            }
        }
    }

    async fn list_operations(&self) -> PayrollResult<Vec<Operation>> {
        let mut operations = self.operation_repo.get_all().await?;
        operations.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(operations)
    }

    async fn set_rate(&self, command: SetRateCommand) -> PayrollResult<Rate> {
        let SetRateCommand {
            category_id,
            operation_id,
            rate,
        } = command;
        if rate < Decimal::ZERO {
            return Err(PayrollException::InvalidRate { rate });
        }
        if self.category_repo.find_by_id(category_id).await?.is_none() {
            return Err(PayrollException::ReferenceNotFound {
                kind: CatalogKind::Category,
                id: category_id,
            });
        }
        if self.operation_repo.find_by_id(operation_id).await?.is_none() {
            return Err(PayrollException::ReferenceNotFound {
                kind: CatalogKind::Operation,
                id: operation_id,
            });
        }

        if let Some(existing) = self.rate_repo.find_by_pair(category_id, operation_id).await? {
            return self.overwrite_rate(existing, rate).await;
        }
        let new_rate = Rate {
            id: Uuid::new_v4(),
            category_id,
            operation_id,
            rate,
        };
        match insert_and_save(&*self.rate_repo, &new_rate).await {
            Err(PayrollException::DuplicateKey { kind, key }) => {
                tracing::warn!("Absorbed duplicate {kind}: {key}, overwriting instead.");
                let existing = self
                    .rate_repo
                    .find_by_pair(category_id, operation_id)
                    .await?
                    .ok_or(PayrollException::DuplicateKey { kind, key })?;
                self.overwrite_rate(existing, rate).await
            }
            result => {
                result?;
                tracing::info!(
                    "Set rate {rate} for category: {category_id}, operation: {operation_id}."
                );
                Ok(new_rate)
            }
        }
    }

    async fn list_rates(&self) -> PayrollResult<Vec<RateView>> {
        let categories = self
            .category_repo
            .get_all()
            .await?
            .into_iter()
            .map(|c| (c.id, c))
            .collect::<HashMap<Uuid, Category>>();
        let operations = self
            .operation_repo
            .get_all()
            .await?
            .into_iter()
            .map(|o| (o.id, o))
            .collect::<HashMap<Uuid, Operation>>();
        let mut rates = self
            .rate_repo
            .get_all()
            .await?
            .into_iter()
            .filter_map(|r| {
                let category = categories.get(&r.category_id)?;
                let operation = operations.get(&r.operation_id)?;
                Some(RateView {
                    id: r.id,
                    category_id: r.category_id,
                    category_name: category.name.to_owned(),
                    operation_id: r.operation_id,
                    operation_name: operation.name.to_owned(),
                    unit: operation.unit.to_owned(),
                    rate: r.rate,
                })
            })
            .collect::<Vec<_>>();
        rates.sort_by(|a, b| {
            (a.category_name.as_str(), a.operation_name.as_str())
                .cmp(&(b.category_name.as_str(), b.operation_name.as_str()))
        });
        Ok(rates)
    }

    async fn create_order(&self, code: &str, customer: Option<&str>) -> PayrollResult<Inserted> {
        let code = required_name(CatalogKind::Order, code)?;
        if let Some(existing) = self.order_repo.find_by_code(code).await? {
            return Ok(Inserted::existing(existing.id));
        }
        let order = Order {
            id: Uuid::new_v4(),
            code: code.to_owned(),
            customer: customer.map(str::trim).filter(|c| !c.is_empty()).map(str::to_owned),
            created_at: Utc::now(),
        };
        match insert_and_save(&*self.order_repo, &order).await {
            Err(PayrollException::DuplicateKey { kind, key }) => {
                tracing::warn!("Absorbed duplicate {kind}: {key}.");
                let existing = self
                    .order_repo
                    .find_by_code(code)
                    .await?
                    .ok_or(PayrollException::DuplicateKey { kind, key })?;
                Ok(Inserted::existing(existing.id))
            }
            result => {
                result?;
                tracing::info!("Created order: {code} with id: {}.", order.id);
                Ok(Inserted::created(order.id))
            }
        }
    }

    async fn list_orders(&self) -> PayrollResult<Vec<Order>> {
        let mut orders = self.order_repo.get_all().await?;
        orders.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(orders)
    }

    async fn readiness(&self) -> PayrollResult<Vec<CatalogKind>> {
        let mut missing = vec![];
        if self.category_repo.get_all().await?.is_empty() {
            missing.push(CatalogKind::Category);
        }
        if self.operation_repo.get_all().await?.is_empty() {
            missing.push(CatalogKind::Operation);
        }
        if self.worker_repo.get_all().await?.is_empty() {
            missing.push(CatalogKind::Worker);
        }
        Ok(missing)
    }
}

impl CatalogServiceImpl {
    async fn overwrite_rate(&self, mut existing: Rate, rate: Decimal) -> PayrollResult<Rate> {
        let previous = existing.rate;
        existing.rate = rate;
        self.rate_repo.update(&existing).await?;
        self.rate_repo.save_changed().await?;
        tracing::info!(
            "Changed rate for category: {}, operation: {} from {previous} to {rate}.",
            existing.category_id,
            existing.operation_id
        );
        Ok(existing)
    }
}

fn required_name(kind: CatalogKind, name: &str) -> PayrollResult<&str> {
    let name = name.trim();
    if name.is_empty() {
        return Err(PayrollException::EmptyName { kind });
    }
    Ok(name)
}

async fn insert_and_save<T, R>(repo: &R, entity: &T) -> PayrollResult<()>
where
    T: Send + Sync + AggregateRoot,
    R: DBRepository<T> + ?Sized,
{
    repo.insert(entity).await?;
    repo.save_changed().await?;
    Ok(())
}
