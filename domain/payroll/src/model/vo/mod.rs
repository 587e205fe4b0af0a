pub mod catalog;
pub mod report;

#[rustfmt::skip]
pub use {
    catalog::{CatalogKind, Inserted, RateView, WorkerView},
    report::{EntryDetail, GroupTotal, ReportResult},
};
