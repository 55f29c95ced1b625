pub mod cancel_booking;
pub mod create_booking;
pub mod list_resort_bookings;
pub mod list_user_bookings;
pub mod update_booking;

use crate::application::errors::ServiceError;

pub(crate) fn room_unavailable() -> ServiceError {
    ServiceError::Conflict("Room is not available for the selected dates".into())
}
