use uuid::Uuid;

/// Marks a type as the root of an aggregate, the unit a repository loads and stores.
pub trait AggregateRoot {
    fn id(&self) -> Uuid;
}
