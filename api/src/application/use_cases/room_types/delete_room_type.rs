use uuid::Uuid;

use crate::application::access::{self, Actor};
use crate::application::errors::ServiceError;
use crate::application::ports::resort_repository::ResortRepository;
use crate::application::ports::room_type_repository::RoomTypeRepository;

pub struct DeleteRoomType<'a, R, T>
where
    R: ResortRepository + ?Sized,
    T: RoomTypeRepository + ?Sized,
{
    pub resorts: &'a R,
    pub room_types: &'a T,
}

impl<'a, R, T> DeleteRoomType<'a, R, T>
where
    R: ResortRepository + ?Sized,
    T: RoomTypeRepository + ?Sized,
{
    pub async fn execute(&self, actor: &Actor, id: Uuid) -> Result<(), ServiceError> {
        let room_type = self
            .room_types
            .get_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Room type not found"))?;
        access::require_owned_resort(
            self.resorts,
            actor,
            room_type.resort_id,
            "Not authorized to delete this room type",
        )
        .await?;
        if !self.room_types.delete(id).await? {
            return Err(ServiceError::not_found("Room type not found"));
        }
        Ok(())
    }
}
