use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::resorts::resort::{Resort, ResortDetails};

#[async_trait]
pub trait ResortRepository: Send + Sync {
    async fn list(&self) -> anyhow::Result<Vec<Resort>>;

    async fn get_by_id(&self, id: Uuid) -> anyhow::Result<Option<Resort>>;

    async fn create(&self, owner_id: Uuid, details: &ResortDetails) -> anyhow::Result<Resort>;

    // Returns None when the resort no longer exists
    async fn update(&self, id: Uuid, details: &ResortDetails) -> anyhow::Result<Option<Resort>>;

    async fn delete(&self, id: Uuid) -> anyhow::Result<bool>;
}
