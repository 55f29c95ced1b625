pub mod create_room;
pub mod delete_room;
pub mod get_room;
pub mod list_rooms;
pub mod update_room;

use uuid::Uuid;

use crate::application::errors::ServiceError;
use crate::application::ports::room_repository::RoomRepository;
use crate::application::ports::room_type_repository::RoomTypeRepository;
use crate::domain::resorts::room::RoomDetails;

pub(crate) fn room_number_taken(details: &RoomDetails) -> ServiceError {
    ServiceError::Conflict(format!(
        "Room number {} already exists in this resort",
        details.room_number.trim()
    ))
}

/// Checks that hold across create and update: the room type belongs to the
/// same resort and the room number is free (ignoring `current` itself).
pub(crate) async fn check_room_placement<M, T>(
    rooms: &M,
    room_types: &T,
    resort_id: Uuid,
    details: &RoomDetails,
    current: Option<Uuid>,
) -> Result<(), ServiceError>
where
    M: RoomRepository + ?Sized,
    T: RoomTypeRepository + ?Sized,
{
    if let Some(room_type_id) = details.room_type_id {
        let belongs = room_types
            .get_by_id(room_type_id)
            .await?
            .map(|rt| rt.resort_id == resort_id)
            .unwrap_or(false);
        if !belongs {
            return Err(ServiceError::Validation(
                "room_type_id must reference a room type of this resort".into(),
            ));
        }
    }
    if let Some(existing) = rooms
        .find_by_number(resort_id, details.room_number.trim())
        .await?
    {
        if Some(existing.id) != current {
            return Err(room_number_taken(details));
        }
    }
    Ok(())
}
