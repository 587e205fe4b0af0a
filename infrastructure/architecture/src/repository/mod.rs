//! Repository abstractions.
mod append_only_repository;
mod mutable_repository;
mod read_only_repository;

pub use append_only_repository::AppendOnlyRepository;
pub use mutable_repository::MutableRepository;
pub use read_only_repository::ReadOnlyRepository;

/// A repository backed by a database, readable and writable.
pub trait DBRepository<T>: ReadOnlyRepository<T> + MutableRepository<T>
where
    T: Send + Sync + crate::model::AggregateRoot,
{
}
