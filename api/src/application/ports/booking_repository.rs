use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::bookings::booking::{Booking, BookingStatus, NewBooking};

/// A booking joined with the labels shown in listings.
#[derive(Debug, Clone)]
pub struct BookingListing {
    pub booking: Booking,
    pub resort_name: String,
    pub room_number: Option<String>,
    pub guest_name: String,
    pub guest_email: String,
}

#[derive(Debug, Clone)]
pub enum BookingInsert {
    Created(Booking),
    /// The room is held by another booking over an overlapping stay.
    Conflict { existing_id: Uuid },
}

#[derive(Debug, Clone)]
pub enum StatusChange {
    Updated(Booking),
    /// Re-activating would overlap a booking that took the room meanwhile.
    Conflict { existing_id: Uuid },
}

#[async_trait]
pub trait BookingRepository: Send + Sync {
    // Newest first
    async fn list_for_user(&self, user_id: Uuid) -> anyhow::Result<Vec<BookingListing>>;

    // Latest check-in first
    async fn list_for_resort(&self, resort_id: Uuid) -> anyhow::Result<Vec<BookingListing>>;

    async fn get_by_id(&self, id: Uuid) -> anyhow::Result<Option<Booking>>;

    /// Checks availability and inserts atomically: two overlapping bookings
    /// that hold the same room can never both be created.
    async fn create_if_available(&self, booking: &NewBooking) -> anyhow::Result<BookingInsert>;

    /// Moving a cancelled booking back to an active status re-checks the
    /// room under the same guarantee as `create_if_available`.
    async fn set_status(
        &self,
        id: Uuid,
        status: BookingStatus,
    ) -> anyhow::Result<Option<StatusChange>>;
}
