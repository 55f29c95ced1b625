use crate::application::access::Actor;
use crate::application::errors::ServiceError;
use crate::application::ports::booking_repository::{BookingListing, BookingRepository};

pub struct ListUserBookings<'a, B: BookingRepository + ?Sized> {
    pub repo: &'a B,
}

impl<'a, B: BookingRepository + ?Sized> ListUserBookings<'a, B> {
    pub async fn execute(&self, actor: &Actor) -> Result<Vec<BookingListing>, ServiceError> {
        Ok(self.repo.list_for_user(actor.user_id).await?)
    }
}
