use uuid::Uuid;

use crate::application::access::{self, Actor, BookingCapability};
use crate::application::errors::ServiceError;
use crate::application::ports::booking_repository::{BookingRepository, StatusChange};
use crate::application::ports::resort_repository::ResortRepository;
use crate::application::use_cases::bookings::room_unavailable;
use crate::domain::bookings::booking::{Booking, BookingStatus};

pub struct CancelBooking<'a, R, B>
where
    R: ResortRepository + ?Sized,
    B: BookingRepository + ?Sized,
{
    pub resorts: &'a R,
    pub bookings: &'a B,
}

impl<'a, R, B> CancelBooking<'a, R, B>
where
    R: ResortRepository + ?Sized,
    B: BookingRepository + ?Sized,
{
    /// Cancelling an already cancelled booking succeeds and changes nothing.
    pub async fn execute(&self, actor: &Actor, id: Uuid) -> Result<Booking, ServiceError> {
        let booking = self
            .bookings
            .get_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Booking not found"))?;
        let capability = access::resolve_booking(self.resorts, actor, &booking).await?;
        if capability < BookingCapability::Guest {
            return Err(ServiceError::forbidden(
                "Not authorized to cancel this booking",
            ));
        }
        if booking.status == BookingStatus::Cancelled {
            return Ok(booking);
        }
        let cancelled = match self.bookings.set_status(id, BookingStatus::Cancelled).await? {
            Some(StatusChange::Updated(cancelled)) => cancelled,
            // Cancelling releases the room, so the store never reports a clash here.
            Some(StatusChange::Conflict { .. }) => return Err(room_unavailable()),
            None => return Err(ServiceError::not_found("Booking not found")),
        };
        tracing::info!(booking_id = %id, "booking_cancelled");
        Ok(cancelled)
    }
}
