pub mod auth;
pub mod bookings;
pub mod payments;
pub mod resorts;
pub mod room_types;
pub mod rooms;
