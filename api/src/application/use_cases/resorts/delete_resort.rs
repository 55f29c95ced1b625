use uuid::Uuid;

use crate::application::access::{self, Actor};
use crate::application::errors::ServiceError;
use crate::application::ports::resort_repository::ResortRepository;

pub struct DeleteResort<'a, R: ResortRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: ResortRepository + ?Sized> DeleteResort<'a, R> {
    pub async fn execute(&self, actor: &Actor, id: Uuid) -> Result<(), ServiceError> {
        access::require_owned_resort(self.repo, actor, id, "Not authorized to delete this resort")
            .await?;
        if !self.repo.delete(id).await? {
            return Err(ServiceError::not_found("Resort not found"));
        }
        tracing::info!(resort_id = %id, "resort_deleted");
        Ok(())
    }
}
