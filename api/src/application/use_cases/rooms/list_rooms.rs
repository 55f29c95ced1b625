use uuid::Uuid;

use crate::application::errors::ServiceError;
use crate::application::ports::resort_repository::ResortRepository;
use crate::application::ports::room_repository::RoomRepository;
use crate::domain::resorts::room::Room;

pub struct ListRooms<'a, R, M>
where
    R: ResortRepository + ?Sized,
    M: RoomRepository + ?Sized,
{
    pub resorts: &'a R,
    pub rooms: &'a M,
}

impl<'a, R, M> ListRooms<'a, R, M>
where
    R: ResortRepository + ?Sized,
    M: RoomRepository + ?Sized,
{
    pub async fn execute(&self, resort_id: Uuid) -> Result<Vec<Room>, ServiceError> {
        if self.resorts.get_by_id(resort_id).await?.is_none() {
            return Err(ServiceError::not_found("Resort not found"));
        }
        Ok(self.rooms.list_for_resort(resort_id).await?)
    }
}
