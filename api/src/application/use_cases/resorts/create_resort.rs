use crate::application::access::Actor;
use crate::application::errors::ServiceError;
use crate::application::ports::resort_repository::ResortRepository;
use crate::domain::resorts::resort::{Resort, ResortDetails};

pub struct CreateResort<'a, R: ResortRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: ResortRepository + ?Sized> CreateResort<'a, R> {
    pub async fn execute(
        &self,
        actor: &Actor,
        details: &ResortDetails,
    ) -> Result<Resort, ServiceError> {
        if !actor.role.can_own_resorts() {
            return Err(ServiceError::forbidden(
                "Only resort owners can create resorts",
            ));
        }
        details.validate()?;
        let resort = self.repo.create(actor.user_id, details).await?;
        tracing::info!(resort_id = %resort.id, owner_id = %actor.user_id, "resort_created");
        Ok(resort)
    }
}
