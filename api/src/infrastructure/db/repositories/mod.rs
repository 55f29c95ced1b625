pub mod booking_repository_sqlx;
pub mod payment_repository_sqlx;
pub mod resort_repository_sqlx;
pub mod room_repository_sqlx;
pub mod room_type_repository_sqlx;
pub mod user_repository_sqlx;
