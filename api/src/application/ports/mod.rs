pub mod booking_repository;
pub mod payment_repository;
pub mod resort_repository;
pub mod room_repository;
pub mod room_type_repository;
pub mod user_repository;

/// Outcome of a write guarded by a unique constraint.
#[derive(Debug, Clone)]
pub enum UniqueWrite<T> {
    Written(T),
    /// Another row already holds the unique key.
    Duplicate,
}
