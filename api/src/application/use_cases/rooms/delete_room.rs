use uuid::Uuid;

use crate::application::access::{self, Actor};
use crate::application::errors::ServiceError;
use crate::application::ports::resort_repository::ResortRepository;
use crate::application::ports::room_repository::RoomRepository;

pub struct DeleteRoom<'a, R, M>
where
    R: ResortRepository + ?Sized,
    M: RoomRepository + ?Sized,
{
    pub resorts: &'a R,
    pub rooms: &'a M,
}

impl<'a, R, M> DeleteRoom<'a, R, M>
where
    R: ResortRepository + ?Sized,
    M: RoomRepository + ?Sized,
{
    pub async fn execute(&self, actor: &Actor, id: Uuid) -> Result<(), ServiceError> {
        let room = self
            .rooms
            .get_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Room not found"))?;
        access::require_owned_resort(
            self.resorts,
            actor,
            room.resort_id,
            "Not authorized to delete this room",
        )
        .await?;
        if !self.rooms.delete(id).await? {
            return Err(ServiceError::not_found("Room not found"));
        }
        Ok(())
    }
}
