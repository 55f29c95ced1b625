use uuid::Uuid;

use crate::application::access::{self, Actor};
use crate::application::errors::ServiceError;
use crate::application::ports::resort_repository::ResortRepository;
use crate::application::ports::room_type_repository::RoomTypeRepository;
use crate::domain::resorts::room_type::{RoomType, RoomTypeDetails};

pub struct CreateRoomType<'a, R, T>
where
    R: ResortRepository + ?Sized,
    T: RoomTypeRepository + ?Sized,
{
    pub resorts: &'a R,
    pub room_types: &'a T,
}

impl<'a, R, T> CreateRoomType<'a, R, T>
where
    R: ResortRepository + ?Sized,
    T: RoomTypeRepository + ?Sized,
{
    pub async fn execute(
        &self,
        actor: &Actor,
        resort_id: Uuid,
        details: &RoomTypeDetails,
    ) -> Result<RoomType, ServiceError> {
        access::require_owned_resort(
            self.resorts,
            actor,
            resort_id,
            "Not authorized to add room types to this resort",
        )
        .await?;
        details.validate()?;
        let room_type = self.room_types.create(resort_id, details).await?;
        tracing::info!(room_type_id = %room_type.id, resort_id = %resort_id, "room_type_created");
        Ok(room_type)
    }
}
