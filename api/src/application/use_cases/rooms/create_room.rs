use uuid::Uuid;

use crate::application::access::{self, Actor};
use crate::application::errors::ServiceError;
use crate::application::ports::UniqueWrite;
use crate::application::ports::resort_repository::ResortRepository;
use crate::application::ports::room_repository::RoomRepository;
use crate::application::ports::room_type_repository::RoomTypeRepository;
use crate::application::use_cases::rooms::{check_room_placement, room_number_taken};
use crate::domain::resorts::room::{Room, RoomDetails};

pub struct CreateRoom<'a, R, T, M>
where
    R: ResortRepository + ?Sized,
    T: RoomTypeRepository + ?Sized,
    M: RoomRepository + ?Sized,
{
    pub resorts: &'a R,
    pub room_types: &'a T,
    pub rooms: &'a M,
}

impl<'a, R, T, M> CreateRoom<'a, R, T, M>
where
    R: ResortRepository + ?Sized,
    T: RoomTypeRepository + ?Sized,
    M: RoomRepository + ?Sized,
{
    pub async fn execute(
        &self,
        actor: &Actor,
        resort_id: Uuid,
        details: &RoomDetails,
    ) -> Result<Room, ServiceError> {
        access::require_owned_resort(
            self.resorts,
            actor,
            resort_id,
            "Not authorized to add rooms to this resort",
        )
        .await?;
        details.validate()?;
        check_room_placement(self.rooms, self.room_types, resort_id, details, None).await?;
        let room = match self.rooms.create(resort_id, details).await? {
            UniqueWrite::Written(room) => room,
            UniqueWrite::Duplicate => return Err(room_number_taken(details)),
        };
        tracing::info!(room_id = %room.id, resort_id = %resort_id, "room_created");
        Ok(room)
    }
}
