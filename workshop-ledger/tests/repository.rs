use std::sync::Arc;

use chrono::NaiveDate;
use database_migration::{Migrator, MigratorTrait};
use domain_payroll::{
    command::{RecordEntryCommand, ReverseEntryCommand, SetRateCommand},
    exception::PayrollException,
    model::{entity::Category, vo::CatalogKind},
};
use rust_decimal_macros::dec;
use uuid::Uuid;
use workshop_architecture::repository::{MutableRepository, ReadOnlyRepository};
use workshop_ledger::infrastructure::{
    config::LedgerConfig,
    database::{Database, OrmRepo},
    ServiceProvider,
};

async fn database() -> Arc<Database> {
    let database = Database::new("sqlite::memory:").await.unwrap();
    Migrator::up(database.get_connection(), None).await.unwrap();
    Arc::new(database)
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[tokio::test]
async fn records_and_reports_through_sqlite() {
    let sp = ServiceProvider::with_database(LedgerConfig::default(), database().await);
    let services = sp.scoped();
    let senior = services.catalog.create_category("Senior").await.unwrap().id;
    let ana = services.catalog.create_worker("Ana", Some(senior)).await.unwrap().id;
    let bo = services.catalog.create_worker("Bo", None).await.unwrap().id;
    let hem = services.catalog.create_operation("Hem", None).await.unwrap().id;
    let o1 = services.catalog.create_order("O1", Some("Curtain Co")).await.unwrap().id;
    services
        .catalog
        .set_rate(SetRateCommand {
            category_id: senior,
            operation_id: hem,
            rate: dec!(15.0),
        })
        .await
        .unwrap();

    let record = |work_date, worker_id, quantity| RecordEntryCommand {
        work_date,
        order_id: o1,
        worker_id,
        operation_id: hem,
        quantity,
        note: None,
    };
    let first = services
        .entry_recorder
        .record_entry(record(date(2024, 3, 1), ana, dec!(10)))
        .await
        .unwrap();
    assert_eq!(first.unit_rate, dec!(15));
    assert_eq!(first.amount, dec!(150.00));
    let unpaid = services
        .entry_recorder
        .record_entry(record(date(2024, 3, 31), bo, dec!(4)))
        .await
        .unwrap();
    assert_eq!(unpaid.amount, dec!(0));
    services
        .entry_recorder
        .record_entry(record(date(2024, 4, 1), ana, dec!(1)))
        .await
        .unwrap();

    let report = services
        .report_aggregator
        .aggregate(date(2024, 3, 1), date(2024, 3, 31))
        .await
        .unwrap();
    assert_eq!(report.detail.len(), 2);
    assert_eq!(report.detail[0].worker_name, "Ana");
    assert_eq!(report.detail[0].order_code, "O1");
    assert_eq!(report.detail[0].unit, "pcs");
    assert_eq!(report.detail[1].work_date, date(2024, 3, 31));
    assert_eq!(report.by_order.len(), 1);
    assert_eq!(report.by_order[0].amount, dec!(150));
    assert_eq!(report.by_order[0].quantity, dec!(14));
    assert_eq!(report.total_amount(), dec!(150));

    let recent = services.report_aggregator.recent_entries(2).await.unwrap();
    assert_eq!(recent.len(), 2);
    assert_eq!(recent[0].work_date, date(2024, 4, 1));
}

#[tokio::test]
async fn unique_violation_at_commit_is_duplicate_key() {
    let db = database().await;
    let repo = OrmRepo::builder().db(db.clone()).build();
    let category = |name: &str| Category {
        id: Uuid::new_v4(),
        name: name.to_string(),
    };
    repo.insert(&category("Senior")).await.unwrap();
    repo.insert(&category("Senior")).await.unwrap();

    let err = repo.save_changed().await.unwrap_err();
    assert!(matches!(
        PayrollException::from(err),
        PayrollException::DuplicateKey { kind: CatalogKind::Category, ref key } if key == "Senior"
    ));
    let stored = ReadOnlyRepository::<Category>::get_all(&repo).await.unwrap();
    assert!(stored.is_empty());
    assert!(!repo.save_changed().await.unwrap());
}

#[tokio::test]
async fn set_rate_overwrites_the_pair() {
    let sp = ServiceProvider::with_database(LedgerConfig::default(), database().await);
    let services = sp.scoped();
    let senior = services.catalog.create_category("Senior").await.unwrap().id;
    let hem = services.catalog.create_operation("Hem", Some("m")).await.unwrap().id;
    let command = |rate| SetRateCommand {
        category_id: senior,
        operation_id: hem,
        rate,
    };
    services.catalog.set_rate(command(dec!(15))).await.unwrap();
    services.catalog.set_rate(command(dec!(17.5))).await.unwrap();

    let rates = services.catalog.list_rates().await.unwrap();
    assert_eq!(rates.len(), 1);
    assert_eq!(rates[0].rate, dec!(17.5));
    assert_eq!(rates[0].unit, "m");
}

#[tokio::test]
async fn reversal_is_stored_once() {
    let sp = ServiceProvider::with_database(LedgerConfig::default(), database().await);
    let services = sp.scoped();
    let senior = services.catalog.create_category("Senior").await.unwrap().id;
    let ana = services.catalog.create_worker("Ana", Some(senior)).await.unwrap().id;
    let hem = services.catalog.create_operation("Hem", None).await.unwrap().id;
    let o1 = services.catalog.create_order("O1", None).await.unwrap().id;
    services
        .catalog
        .set_rate(SetRateCommand {
            category_id: senior,
            operation_id: hem,
            rate: dec!(2.5),
        })
        .await
        .unwrap();
    let entry = services
        .entry_recorder
        .record_entry(RecordEntryCommand {
            work_date: date(2024, 3, 5),
            order_id: o1,
            worker_id: ana,
            operation_id: hem,
            quantity: dec!(4),
            note: Some("first batch".to_string()),
        })
        .await
        .unwrap();

    let reverse = || ReverseEntryCommand {
        entry_id: entry.id,
        note: Some("wrong order".to_string()),
    };
    let reversal = services.entry_recorder.reverse_entry(reverse()).await.unwrap();
    assert_eq!(reversal.reversal_of, Some(entry.id));
    assert_eq!(reversal.amount, dec!(-10));
    let err = services.entry_recorder.reverse_entry(reverse()).await.unwrap_err();
    assert!(matches!(err, PayrollException::NotReversible { .. }));

    let report = services
        .report_aggregator
        .aggregate(date(2024, 3, 1), date(2024, 3, 31))
        .await
        .unwrap();
    assert_eq!(report.detail.len(), 2);
    assert_eq!(report.total_amount(), dec!(0));
    assert_eq!(report.by_worker[0].quantity, dec!(0));
}
