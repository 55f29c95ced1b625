use uuid::Uuid;

use crate::application::errors::ServiceError;
use crate::application::ports::room_type_repository::RoomTypeRepository;
use crate::domain::resorts::room_type::RoomType;

pub struct GetRoomType<'a, T: RoomTypeRepository + ?Sized> {
    pub repo: &'a T,
}

impl<'a, T: RoomTypeRepository + ?Sized> GetRoomType<'a, T> {
    pub async fn execute(&self, id: Uuid) -> Result<RoomType, ServiceError> {
        self.repo
            .get_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Room type not found"))
    }
}
