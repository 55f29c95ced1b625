use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::resorts::room_type::{RoomType, RoomTypeDetails};

#[async_trait]
pub trait RoomTypeRepository: Send + Sync {
    async fn list_for_resort(&self, resort_id: Uuid) -> anyhow::Result<Vec<RoomType>>;

    async fn list_for_resorts(&self, resort_ids: &[Uuid]) -> anyhow::Result<Vec<RoomType>>;

    async fn get_by_id(&self, id: Uuid) -> anyhow::Result<Option<RoomType>>;

    async fn create(
        &self,
        resort_id: Uuid,
        details: &RoomTypeDetails,
    ) -> anyhow::Result<RoomType>;

    async fn update(
        &self,
        id: Uuid,
        details: &RoomTypeDetails,
    ) -> anyhow::Result<Option<RoomType>>;

    async fn delete(&self, id: Uuid) -> anyhow::Result<bool>;
}
