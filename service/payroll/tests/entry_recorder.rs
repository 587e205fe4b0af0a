mod common;

use std::sync::Arc;

use common::{date, Ledger};
use domain_payroll::{
    command::{RecordEntryByOrderCodeCommand, RecordEntryCommand, ReverseEntryCommand},
    exception::PayrollException,
    mock::{MemoryRepo, MockEntryRepo, MockRateResolverService},
    model::vo::CatalogKind,
    service::{CatalogService, EntryRecorderService, ReportAggregatorService},
};
use mockall::predicate::eq;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use service_payroll::{CatalogServiceImpl, EntryRecorderServiceImpl};
use uuid::Uuid;

#[tokio::test]
async fn records_amount_from_resolved_rate() {
    let ledger = Ledger::new();
    let senior = ledger.category("Senior").await;
    let hem = ledger.operation("Hem").await;
    ledger.rate(senior, hem, dec!(15.0)).await;
    let ana = ledger.worker("Ana", Some(senior)).await;
    let o1 = ledger.order("O1").await;

    let entry = ledger.record(date(2024, 3, 1), o1, ana, hem, dec!(10)).await.unwrap();
    assert_eq!(entry.unit_rate, dec!(15.0));
    assert_eq!(entry.amount, dec!(150.00));
    assert_eq!(entry.work_date, date(2024, 3, 1));
    assert_eq!(entry.reversal_of, None);
}

#[tokio::test]
async fn amount_is_rounded_to_cents() {
    let ledger = Ledger::new();
    let senior = ledger.category("Senior").await;
    let hem = ledger.operation("Hem").await;
    ledger.rate(senior, hem, dec!(0.125)).await;
    let ana = ledger.worker("Ana", Some(senior)).await;
    let o1 = ledger.order("O1").await;

    let entry = ledger.record(date(2024, 3, 1), o1, ana, hem, dec!(5)).await.unwrap();
    assert_eq!(entry.amount, dec!(0.63));
}

#[tokio::test]
async fn zero_quantity_and_uncategorised_worker_record_zero() {
    let ledger = Ledger::new();
    let hem = ledger.operation("Hem").await;
    let drifter = ledger.worker("Drifter", None).await;
    let o1 = ledger.order("O1").await;

    let entry = ledger.record(date(2024, 3, 1), o1, drifter, hem, dec!(4)).await.unwrap();
    assert_eq!(entry.unit_rate, Decimal::ZERO);
    assert_eq!(entry.amount, Decimal::ZERO);

    let entry = ledger.record(date(2024, 3, 1), o1, drifter, hem, Decimal::ZERO).await.unwrap();
    assert_eq!(entry.amount, Decimal::ZERO);
}

#[tokio::test]
async fn stored_amount_survives_rate_change() {
    let ledger = Ledger::new();
    let senior = ledger.category("Senior").await;
    let hem = ledger.operation("Hem").await;
    ledger.rate(senior, hem, dec!(15.0)).await;
    let ana = ledger.worker("Ana", Some(senior)).await;
    let o1 = ledger.order("O1").await;
    let entry = ledger.record(date(2024, 3, 1), o1, ana, hem, dec!(10)).await.unwrap();

    ledger.rate(senior, hem, dec!(99.0)).await;

    let report = ledger.reports.aggregate(date(2024, 3, 1), date(2024, 3, 31)).await.unwrap();
    assert_eq!(report.detail.len(), 1);
    assert_eq!(report.detail[0].id, entry.id);
    assert_eq!(report.detail[0].unit_rate, dec!(15.0));
    assert_eq!(report.detail[0].amount, dec!(150.00));
    assert_eq!(report.by_worker[0].amount, dec!(150.00));

    let later = ledger.record(date(2024, 3, 2), o1, ana, hem, dec!(1)).await.unwrap();
    assert_eq!(later.amount, dec!(99.00));
}

#[tokio::test]
async fn unknown_references_are_rejected_without_writing() {
    let ledger = Ledger::new();
    let senior = ledger.category("Senior").await;
    let hem = ledger.operation("Hem").await;
    let ana = ledger.worker("Ana", Some(senior)).await;
    let o1 = ledger.order("O1").await;
    let ghost = Uuid::new_v4();

    let err = ledger.record(date(2024, 3, 1), o1, ghost, hem, dec!(1)).await.unwrap_err();
    assert!(matches!(
        err,
        PayrollException::ReferenceNotFound { kind: CatalogKind::Worker, id } if id == ghost
    ));
    let err = ledger.record(date(2024, 3, 1), ghost, ana, hem, dec!(1)).await.unwrap_err();
    assert!(matches!(err, PayrollException::ReferenceNotFound { kind: CatalogKind::Order, .. }));
    let err = ledger.record(date(2024, 3, 1), o1, ana, ghost, dec!(1)).await.unwrap_err();
    assert!(matches!(
        err,
        PayrollException::ReferenceNotFound { kind: CatalogKind::Operation, .. }
    ));

    assert!(ledger.reports.recent_entries(50).await.unwrap().is_empty());
}

#[tokio::test]
async fn negative_quantity_is_rejected_without_writing() {
    let ledger = Ledger::new();
    let senior = ledger.category("Senior").await;
    let hem = ledger.operation("Hem").await;
    let ana = ledger.worker("Ana", Some(senior)).await;
    let o1 = ledger.order("O1").await;

    let err = ledger.record(date(2024, 3, 1), o1, ana, hem, dec!(-1)).await.unwrap_err();
    assert!(matches!(err, PayrollException::InvalidQuantity { quantity } if quantity == dec!(-1)));
    assert_eq!(err.status(), 302);
    assert!(ledger.reports.recent_entries(50).await.unwrap().is_empty());
}

#[tokio::test]
async fn negative_quantity_never_touches_storage() {
    let mut entry_repo = MockEntryRepo::new();
    entry_repo.expect_append().never();
    entry_repo.expect_save_changed().never();
    let mut resolver = MockRateResolverService::new();
    resolver.expect_resolve_rate().never();
    let repo = Arc::new(MemoryRepo::new());

    let recorder = EntryRecorderServiceImpl::builder()
        .order_repo(repo.clone())
        .worker_repo(repo.clone())
        .operation_repo(repo)
        .entry_repo(Arc::new(entry_repo))
        .rate_resolver(Arc::new(resolver))
        .build();
    let err = recorder
        .record_entry(RecordEntryCommand {
            work_date: date(2024, 3, 1),
            order_id: Uuid::new_v4(),
            worker_id: Uuid::new_v4(),
            operation_id: Uuid::new_v4(),
            quantity: dec!(-0.5),
            note: None,
        })
        .await
        .unwrap_err();
    assert!(matches!(err, PayrollException::InvalidQuantity { .. }));
}

#[tokio::test]
async fn rate_is_resolved_once_per_entry() {
    let repo = Arc::new(MemoryRepo::new());
    let catalog = CatalogServiceImpl::builder()
        .category_repo(repo.clone())
        .worker_repo(repo.clone())
        .operation_repo(repo.clone())
        .rate_repo(repo.clone())
        .order_repo(repo.clone())
        .build();
    let worker_id = catalog.create_worker("Ana", None).await.unwrap().id;
    let operation_id = catalog.create_operation("Hem", Some("m")).await.unwrap().id;
    let order_id = catalog.create_order("O1", Some("Curtain Co")).await.unwrap().id;

    let mut resolver = MockRateResolverService::new();
    resolver
        .expect_resolve_rate()
        .with(eq(worker_id), eq(operation_id))
        .times(1)
        .returning(|_, _| Ok(dec!(2.5)));
    let recorder = EntryRecorderServiceImpl::builder()
        .order_repo(repo.clone())
        .worker_repo(repo.clone())
        .operation_repo(repo.clone())
        .entry_repo(repo)
        .rate_resolver(Arc::new(resolver))
        .build();

    let entry = recorder
        .record_entry(RecordEntryCommand {
            work_date: date(2024, 3, 1),
            order_id,
            worker_id,
            operation_id,
            quantity: dec!(4),
            note: Some("  rush job ".to_string()),
        })
        .await
        .unwrap();
    assert_eq!(entry.amount, dec!(10.00));
    assert_eq!(entry.note.as_deref(), Some("rush job"));
}

#[tokio::test]
async fn reversal_nets_entry_to_zero() {
    let ledger = Ledger::new();
    let senior = ledger.category("Senior").await;
    let hem = ledger.operation("Hem").await;
    ledger.rate(senior, hem, dec!(15.0)).await;
    let ana = ledger.worker("Ana", Some(senior)).await;
    let o1 = ledger.order("O1").await;
    let entry = ledger.record(date(2024, 3, 1), o1, ana, hem, dec!(10)).await.unwrap();
    ledger.rate(senior, hem, dec!(20.0)).await;

    let reversal = ledger
        .recorder
        .reverse_entry(ReverseEntryCommand {
            entry_id: entry.id,
            note: Some("wrong worker".to_string()),
        })
        .await
        .unwrap();
    assert_eq!(reversal.reversal_of, Some(entry.id));
    assert_eq!(reversal.unit_rate, dec!(15.0));
    assert_eq!(reversal.amount, dec!(-150.00));

    let report = ledger.reports.aggregate(date(2024, 3, 1), date(2024, 3, 1)).await.unwrap();
    assert_eq!(report.detail.len(), 2);
    assert_eq!(report.by_worker.len(), 1);
    assert_eq!(report.by_worker[0].amount, Decimal::ZERO);
    assert_eq!(report.by_worker[0].quantity, Decimal::ZERO);
}

#[tokio::test]
async fn entries_are_reversed_at_most_once() {
    let ledger = Ledger::new();
    let hem = ledger.operation("Hem").await;
    let ana = ledger.worker("Ana", None).await;
    let o1 = ledger.order("O1").await;
    let entry = ledger.record(date(2024, 3, 1), o1, ana, hem, dec!(1)).await.unwrap();
    let reverse = |entry_id| ReverseEntryCommand {
        entry_id,
        note: None,
    };

    let reversal = ledger.recorder.reverse_entry(reverse(entry.id)).await.unwrap();

    let err = ledger.recorder.reverse_entry(reverse(entry.id)).await.unwrap_err();
    assert!(matches!(err, PayrollException::NotReversible { entry_id, .. } if entry_id == entry.id));
    let err = ledger.recorder.reverse_entry(reverse(reversal.id)).await.unwrap_err();
    assert!(matches!(err, PayrollException::NotReversible { .. }));
    let err = ledger.recorder.reverse_entry(reverse(Uuid::new_v4())).await.unwrap_err();
    assert!(matches!(err, PayrollException::ReferenceNotFound { kind: CatalogKind::Entry, .. }));
}

fn by_code(
    code: &str,
    worker_id: Uuid,
    operation_id: Uuid,
    quantity: Decimal,
) -> RecordEntryByOrderCodeCommand {
    RecordEntryByOrderCodeCommand {
        work_date: date(2024, 3, 1),
        order_code: code.to_string(),
        customer: Some(" Curtain Co ".to_string()),
        worker_id,
        operation_id,
        quantity,
        note: None,
    }
}

#[tokio::test]
async fn unknown_order_code_opens_the_order_with_the_entry() {
    let ledger = Ledger::new();
    let senior = ledger.category("Senior").await;
    let hem = ledger.operation("Hem").await;
    ledger.rate(senior, hem, dec!(15)).await;
    let ana = ledger.worker("Ana", Some(senior)).await;

    let entry = ledger
        .recorder
        .record_entry_by_order_code(by_code(" O7 ", ana, hem, dec!(2)))
        .await
        .unwrap();
    assert_eq!(entry.amount, dec!(30.00));
    let orders = ledger.catalog.list_orders().await.unwrap();
    assert_eq!(orders.len(), 1);
    assert_eq!(orders[0].id, entry.order_id);
    assert_eq!(orders[0].code, "O7");
    assert_eq!(orders[0].customer.as_deref(), Some("Curtain Co"));

    let again = ledger
        .recorder
        .record_entry_by_order_code(by_code("O7", ana, hem, dec!(1)))
        .await
        .unwrap();
    assert_eq!(again.order_id, entry.order_id);
    assert_eq!(ledger.catalog.list_orders().await.unwrap().len(), 1);
}

#[tokio::test]
async fn rejected_entry_leaves_no_order_behind() {
    let ledger = Ledger::new();
    let hem = ledger.operation("Hem").await;
    let ana = ledger.worker("Ana", None).await;

    let err = ledger
        .recorder
        .record_entry_by_order_code(by_code("GHOST-1", ana, hem, dec!(-1)))
        .await
        .unwrap_err();
    assert!(matches!(err, PayrollException::InvalidQuantity { .. }));
    let err = ledger
        .recorder
        .record_entry_by_order_code(by_code("GHOST-1", Uuid::new_v4(), hem, dec!(1)))
        .await
        .unwrap_err();
    assert!(matches!(err, PayrollException::ReferenceNotFound { kind: CatalogKind::Worker, .. }));
    let err = ledger
        .recorder
        .record_entry_by_order_code(by_code("  ", ana, hem, dec!(1)))
        .await
        .unwrap_err();
    assert!(matches!(err, PayrollException::EmptyName { kind: CatalogKind::Order }));

    assert!(ledger.catalog.list_orders().await.unwrap().is_empty());
    let report = ledger.reports.aggregate(date(2024, 1, 1), date(2024, 12, 31)).await.unwrap();
    assert!(report.detail.is_empty());
}
