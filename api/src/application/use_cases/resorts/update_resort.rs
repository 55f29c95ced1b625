use uuid::Uuid;

use crate::application::access::{self, Actor};
use crate::application::errors::ServiceError;
use crate::application::ports::resort_repository::ResortRepository;
use crate::domain::resorts::resort::{Resort, ResortPatch};

pub struct UpdateResort<'a, R: ResortRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: ResortRepository + ?Sized> UpdateResort<'a, R> {
    pub async fn execute(
        &self,
        actor: &Actor,
        id: Uuid,
        changes: ResortPatch,
    ) -> Result<Resort, ServiceError> {
        let resort =
            access::require_owned_resort(self.repo, actor, id, "Not authorized to update this resort")
                .await?;
        let mut details = resort.details;
        details.apply(changes);
        details.validate()?;
        self.repo
            .update(id, &details)
            .await?
            .ok_or_else(|| ServiceError::not_found("Resort not found"))
    }
}
