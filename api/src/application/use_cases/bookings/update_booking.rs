use uuid::Uuid;

use crate::application::access::{self, Actor};
use crate::application::errors::ServiceError;
use crate::application::ports::booking_repository::{BookingRepository, StatusChange};
use crate::application::ports::resort_repository::ResortRepository;
use crate::application::use_cases::bookings::room_unavailable;
use crate::domain::bookings::booking::{Booking, BookingStatus};

pub struct UpdateBooking<'a, R, B>
where
    R: ResortRepository + ?Sized,
    B: BookingRepository + ?Sized,
{
    pub resorts: &'a R,
    pub bookings: &'a B,
}

impl<'a, R, B> UpdateBooking<'a, R, B>
where
    R: ResortRepository + ?Sized,
    B: BookingRepository + ?Sized,
{
    pub async fn execute(
        &self,
        actor: &Actor,
        id: Uuid,
        status: Option<BookingStatus>,
    ) -> Result<Booking, ServiceError> {
        let booking = self
            .bookings
            .get_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Booking not found"))?;
        let capability = access::resolve_booking(self.resorts, actor, &booking).await?;
        let next = access::next_status(capability, booking.status, status)?;
        if next == booking.status {
            return Ok(booking);
        }
        let updated = match self.bookings.set_status(id, next).await? {
            Some(StatusChange::Updated(updated)) => updated,
            Some(StatusChange::Conflict { existing_id }) => {
                tracing::debug!(
                    booking_id = %id,
                    existing_booking = %existing_id,
                    "booking_reactivation_rejected_overlap"
                );
                return Err(room_unavailable());
            }
            None => return Err(ServiceError::not_found("Booking not found")),
        };
        tracing::info!(booking_id = %id, from = %booking.status, to = %next, "booking_status_changed");
        Ok(updated)
    }
}
