use async_trait::async_trait;
use uuid::Uuid;

use crate::application::ports::UniqueWrite;
use crate::domain::resorts::room::{Room, RoomDetails};

#[async_trait]
pub trait RoomRepository: Send + Sync {
    async fn list_for_resort(&self, resort_id: Uuid) -> anyhow::Result<Vec<Room>>;

    async fn get_by_id(&self, id: Uuid) -> anyhow::Result<Option<Room>>;

    async fn find_by_number(
        &self,
        resort_id: Uuid,
        room_number: &str,
    ) -> anyhow::Result<Option<Room>>;

    /// `Duplicate` when the room number is already taken in the resort.
    async fn create(
        &self,
        resort_id: Uuid,
        details: &RoomDetails,
    ) -> anyhow::Result<UniqueWrite<Room>>;

    async fn update(
        &self,
        id: Uuid,
        details: &RoomDetails,
    ) -> anyhow::Result<Option<UniqueWrite<Room>>>;

    async fn delete(&self, id: Uuid) -> anyhow::Result<bool>;
}
