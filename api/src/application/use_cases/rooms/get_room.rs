use uuid::Uuid;

use crate::application::errors::ServiceError;
use crate::application::ports::room_repository::RoomRepository;
use crate::domain::resorts::room::Room;

pub struct GetRoom<'a, M: RoomRepository + ?Sized> {
    pub repo: &'a M,
}

impl<'a, M: RoomRepository + ?Sized> GetRoom<'a, M> {
    pub async fn execute(&self, id: Uuid) -> Result<Room, ServiceError> {
        self.repo
            .get_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Room not found"))
    }
}
