pub mod resort;
pub mod room;
pub mod room_type;
