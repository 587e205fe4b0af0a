//! Layering primitives shared by the domain and host crates.
pub mod model;
pub mod repository;

pub use model::AggregateRoot;
