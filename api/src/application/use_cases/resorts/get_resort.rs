use uuid::Uuid;

use crate::application::dto::resorts::ResortWithRoomTypesDto;
use crate::application::errors::ServiceError;
use crate::application::ports::resort_repository::ResortRepository;
use crate::application::ports::room_type_repository::RoomTypeRepository;

pub struct GetResort<'a, R, T>
where
    R: ResortRepository + ?Sized,
    T: RoomTypeRepository + ?Sized,
{
    pub resorts: &'a R,
    pub room_types: &'a T,
}

impl<'a, R, T> GetResort<'a, R, T>
where
    R: ResortRepository + ?Sized,
    T: RoomTypeRepository + ?Sized,
{
    pub async fn execute(&self, id: Uuid) -> Result<ResortWithRoomTypesDto, ServiceError> {
        let resort = self
            .resorts
            .get_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Resort not found"))?;
        let room_types = self.room_types.list_for_resort(id).await?;
        Ok(ResortWithRoomTypesDto { resort, room_types })
    }
}
