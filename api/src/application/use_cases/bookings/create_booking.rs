use chrono::NaiveDate;
use uuid::Uuid;

use crate::application::access::Actor;
use crate::application::errors::ServiceError;
use crate::application::ports::booking_repository::{BookingInsert, BookingRepository};
use crate::application::ports::resort_repository::ResortRepository;
use crate::application::ports::room_repository::RoomRepository;
use crate::application::use_cases::bookings::room_unavailable;
use crate::domain::bookings::booking::{Booking, NewBooking, StayRange};

#[derive(Debug, Clone)]
pub struct CreateBookingRequest {
    pub room_id: Option<Uuid>,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
}

pub struct CreateBooking<'a, R, M, B>
where
    R: ResortRepository + ?Sized,
    M: RoomRepository + ?Sized,
    B: BookingRepository + ?Sized,
{
    pub resorts: &'a R,
    pub rooms: &'a M,
    pub bookings: &'a B,
}

impl<'a, R, M, B> CreateBooking<'a, R, M, B>
where
    R: ResortRepository + ?Sized,
    M: RoomRepository + ?Sized,
    B: BookingRepository + ?Sized,
{
    pub async fn execute(
        &self,
        actor: &Actor,
        resort_id: Uuid,
        req: CreateBookingRequest,
    ) -> Result<Booking, ServiceError> {
        let stay = StayRange::new(req.check_in, req.check_out)?;
        if self.resorts.get_by_id(resort_id).await?.is_none() {
            return Err(ServiceError::not_found("Resort not found"));
        }
        if let Some(room_id) = req.room_id {
            let in_resort = self
                .rooms
                .get_by_id(room_id)
                .await?
                .map(|room| room.resort_id == resort_id)
                .unwrap_or(false);
            if !in_resort {
                return Err(ServiceError::not_found("Room not found for this resort"));
            }
        }

        let new_booking = NewBooking {
            user_id: actor.user_id,
            resort_id,
            room_id: req.room_id,
            stay,
        };
        match self.bookings.create_if_available(&new_booking).await? {
            BookingInsert::Created(booking) => {
                tracing::info!(
                    booking_id = %booking.id,
                    resort_id = %resort_id,
                    user_id = %actor.user_id,
                    nights = stay.nights(),
                    "booking_created"
                );
                Ok(booking)
            }
            BookingInsert::Conflict { existing_id } => {
                tracing::debug!(
                    resort_id = %resort_id,
                    existing_booking = %existing_id,
                    "booking_rejected_overlap"
                );
                Err(room_unavailable())
            }
        }
    }
}
