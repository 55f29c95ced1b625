use uuid::Uuid;

use crate::application::access::{self, Actor};
use crate::application::errors::ServiceError;
use crate::application::ports::UniqueWrite;
use crate::application::ports::resort_repository::ResortRepository;
use crate::application::ports::room_repository::RoomRepository;
use crate::application::ports::room_type_repository::RoomTypeRepository;
use crate::application::use_cases::rooms::{check_room_placement, room_number_taken};
use crate::domain::resorts::room::{Room, RoomPatch};

pub struct UpdateRoom<'a, R, T, M>
where
    R: ResortRepository + ?Sized,
    T: RoomTypeRepository + ?Sized,
    M: RoomRepository + ?Sized,
{
    pub resorts: &'a R,
    pub room_types: &'a T,
    pub rooms: &'a M,
}

impl<'a, R, T, M> UpdateRoom<'a, R, T, M>
where
    R: ResortRepository + ?Sized,
    T: RoomTypeRepository + ?Sized,
    M: RoomRepository + ?Sized,
{
    pub async fn execute(
        &self,
        actor: &Actor,
        id: Uuid,
        changes: RoomPatch,
    ) -> Result<Room, ServiceError> {
        let room = self
            .rooms
            .get_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Room not found"))?;
        access::require_owned_resort(
            self.resorts,
            actor,
            room.resort_id,
            "Not authorized to update this room",
        )
        .await?;
        let mut details = room.details;
        details.apply(changes);
        details.validate()?;
        check_room_placement(self.rooms, self.room_types, room.resort_id, &details, Some(id))
            .await?;
        match self.rooms.update(id, &details).await? {
            Some(UniqueWrite::Written(room)) => Ok(room),
            Some(UniqueWrite::Duplicate) => Err(room_number_taken(&details)),
            None => Err(ServiceError::not_found("Room not found")),
        }
    }
}
