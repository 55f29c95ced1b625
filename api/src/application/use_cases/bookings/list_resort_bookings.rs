use uuid::Uuid;

use crate::application::access::{self, Actor};
use crate::application::errors::ServiceError;
use crate::application::ports::booking_repository::{BookingListing, BookingRepository};
use crate::application::ports::resort_repository::ResortRepository;

pub struct ListResortBookings<'a, R, B>
where
    R: ResortRepository + ?Sized,
    B: BookingRepository + ?Sized,
{
    pub resorts: &'a R,
    pub bookings: &'a B,
}

impl<'a, R, B> ListResortBookings<'a, R, B>
where
    R: ResortRepository + ?Sized,
    B: BookingRepository + ?Sized,
{
    pub async fn execute(
        &self,
        actor: &Actor,
        resort_id: Uuid,
    ) -> Result<Vec<BookingListing>, ServiceError> {
        access::require_owned_resort(
            self.resorts,
            actor,
            resort_id,
            "Not authorized to view bookings for this resort",
        )
        .await?;
        Ok(self.bookings.list_for_resort(resort_id).await?)
    }
}
