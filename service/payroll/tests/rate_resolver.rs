mod common;

use std::sync::Arc;

use common::Ledger;
use domain_payroll::{
    mock::{MockRateRepo, MockWorkerRepo},
    model::entity::Worker,
    service::RateResolverService,
};
use mockall::predicate::eq;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use service_payroll::RateResolverServiceImpl;
use uuid::Uuid;

#[tokio::test]
async fn worker_without_category_resolves_zero_for_every_operation() {
    let ledger = Ledger::new();
    let senior = ledger.category("Senior").await;
    let hem = ledger.operation("Hem").await;
    let pleat = ledger.operation("Pleat").await;
    ledger.rate(senior, hem, dec!(15.0)).await;
    ledger.rate(senior, pleat, dec!(7.5)).await;
    let drifter = ledger.worker("Drifter", None).await;

    for operation in [hem, pleat] {
        assert_eq!(ledger.resolver.resolve_rate(drifter, operation).await.unwrap(), Decimal::ZERO);
    }
}

#[tokio::test]
async fn worker_in_category_resolves_stored_rate() {
    let ledger = Ledger::new();
    let senior = ledger.category("Senior").await;
    let junior = ledger.category("Junior").await;
    let hem = ledger.operation("Hem").await;
    ledger.rate(senior, hem, dec!(15.0)).await;
    ledger.rate(junior, hem, dec!(9.25)).await;
    let ana = ledger.worker("Ana", Some(senior)).await;
    let bo = ledger.worker("Bo", Some(junior)).await;

    assert_eq!(ledger.resolver.resolve_rate(ana, hem).await.unwrap(), dec!(15.0));
    assert_eq!(ledger.resolver.resolve_rate(bo, hem).await.unwrap(), dec!(9.25));
}

#[tokio::test]
async fn missing_rate_or_unknown_ids_resolve_zero() {
    let ledger = Ledger::new();
    let senior = ledger.category("Senior").await;
    let hem = ledger.operation("Hem").await;
    let ana = ledger.worker("Ana", Some(senior)).await;

    assert_eq!(ledger.resolver.resolve_rate(ana, hem).await.unwrap(), Decimal::ZERO);
    assert_eq!(ledger.resolver.resolve_rate(Uuid::new_v4(), hem).await.unwrap(), Decimal::ZERO);
    assert_eq!(ledger.resolver.resolve_rate(ana, Uuid::new_v4()).await.unwrap(), Decimal::ZERO);
}

#[tokio::test]
async fn resolver_follows_latest_rate() {
    let ledger = Ledger::new();
    let senior = ledger.category("Senior").await;
    let hem = ledger.operation("Hem").await;
    let ana = ledger.worker("Ana", Some(senior)).await;
    ledger.rate(senior, hem, dec!(15.0)).await;
    ledger.rate(senior, hem, dec!(18.0)).await;

    assert_eq!(ledger.resolver.resolve_rate(ana, hem).await.unwrap(), dec!(18.0));
}

#[tokio::test]
async fn rate_table_is_not_consulted_without_category() {
    let worker_id = Uuid::new_v4();
    let mut worker_repo = MockWorkerRepo::new();
    worker_repo.expect_find_by_id().with(eq(worker_id)).times(1).returning(move |id| {
        Ok(Some(Worker {
            id,
            name: "Drifter".to_string(),
            category_id: None,
        }))
    });
    let mut rate_repo = MockRateRepo::new();
    rate_repo.expect_find_by_pair().never();

    let resolver = RateResolverServiceImpl::builder()
        .worker_repo(Arc::new(worker_repo))
        .rate_repo(Arc::new(rate_repo))
        .build();
    assert_eq!(resolver.resolve_rate(worker_id, Uuid::new_v4()).await.unwrap(), Decimal::ZERO);
}
