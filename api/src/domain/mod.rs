pub mod bookings;
pub mod payments;
pub mod resorts;
pub mod users;
pub mod validation;
