mod catalog;
mod entry;
mod rate;

#[rustfmt::skip]
pub use {
    catalog::{CategoryRepo, OperationRepo, OrderRepo, WorkerRepo},
    entry::EntryRepo,
    rate::RateRepo,
};
