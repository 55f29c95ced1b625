use crate::domain::resorts::resort::Resort;
use crate::domain::resorts::room_type::RoomType;

/// A resort with its room types, as returned by the public catalogue.
#[derive(Debug, Clone)]
pub struct ResortWithRoomTypesDto {
    pub resort: Resort,
    pub room_types: Vec<RoomType>,
}
