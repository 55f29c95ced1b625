use async_trait::async_trait;
use uuid::Uuid;

use crate::application::ports::UniqueWrite;
use crate::domain::payments::payment::{NewPayment, Payment};

#[async_trait]
pub trait PaymentRepository: Send + Sync {
    // Oldest first
    async fn list_for_booking(&self, booking_id: Uuid) -> anyhow::Result<Vec<Payment>>;

    async fn transaction_exists(&self, transaction_id: &str) -> anyhow::Result<bool>;

    /// `Duplicate` when the transaction id was already recorded.
    async fn create(&self, payment: &NewPayment) -> anyhow::Result<UniqueWrite<Payment>>;
}
