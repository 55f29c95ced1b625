use uuid::Uuid;

use crate::application::errors::ServiceError;
use crate::application::ports::resort_repository::ResortRepository;
use crate::application::ports::room_type_repository::RoomTypeRepository;
use crate::domain::resorts::room_type::RoomType;

pub struct ListRoomTypes<'a, R, T>
where
    R: ResortRepository + ?Sized,
    T: RoomTypeRepository + ?Sized,
{
    pub resorts: &'a R,
    pub room_types: &'a T,
}

impl<'a, R, T> ListRoomTypes<'a, R, T>
where
    R: ResortRepository + ?Sized,
    T: RoomTypeRepository + ?Sized,
{
    pub async fn execute(&self, resort_id: Uuid) -> Result<Vec<RoomType>, ServiceError> {
        if self.resorts.get_by_id(resort_id).await?.is_none() {
            return Err(ServiceError::not_found("Resort not found"));
        }
        Ok(self.room_types.list_for_resort(resort_id).await?)
    }
}
