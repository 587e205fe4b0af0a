pub mod category;
pub mod entry;
pub mod operation;
pub mod order;
pub mod rate;
pub mod worker;

#[rustfmt::skip]
pub use {
    category::Category,
    entry::Entry,
    operation::Operation,
    order::Order,
    rate::Rate,
    worker::Worker,
};
