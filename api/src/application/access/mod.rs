use uuid::Uuid;

use crate::application::errors::ServiceError;
use crate::application::ports::resort_repository::ResortRepository;
use crate::domain::bookings::booking::{Booking, BookingStatus};
use crate::domain::resorts::resort::Resort;
use crate::domain::users::role::Role;

/// Authenticated caller of a use case.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Actor {
    pub user_id: Uuid,
    pub role: Role,
}

/// How an actor relates to a booking. Ordered by privilege.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum BookingCapability {
    None,
    /// The customer who placed the booking.
    Guest,
    /// Owner of the booked resort.
    ResortOwner,
}

// Presentation layer is responsible for building Actor from HTTP inputs.

pub fn require_role(actor: &Actor, allowed: &[Role]) -> Result<(), ServiceError> {
    if allowed.contains(&actor.role) {
        Ok(())
    } else {
        Err(ServiceError::forbidden("Access denied"))
    }
}

pub fn require_owner(actor: &Actor, resort: &Resort, message: &str) -> Result<(), ServiceError> {
    if resort.is_owned_by(actor.user_id) {
        Ok(())
    } else {
        Err(ServiceError::forbidden(message))
    }
}

/// Loads a resort and checks the actor owns it.
pub async fn require_owned_resort<R>(
    resorts: &R,
    actor: &Actor,
    resort_id: Uuid,
    message: &str,
) -> Result<Resort, ServiceError>
where
    R: ResortRepository + ?Sized,
{
    let resort = resorts
        .get_by_id(resort_id)
        .await?
        .ok_or_else(|| ServiceError::not_found("Resort not found"))?;
    require_owner(actor, &resort, message)?;
    Ok(resort)
}

pub async fn resolve_booking<R>(
    resorts: &R,
    actor: &Actor,
    booking: &Booking,
) -> Result<BookingCapability, ServiceError>
where
    R: ResortRepository + ?Sized,
{
    let owns_resort = resorts
        .get_by_id(booking.resort_id)
        .await?
        .map(|r| r.is_owned_by(actor.user_id))
        .unwrap_or(false);
    if owns_resort {
        Ok(BookingCapability::ResortOwner)
    } else if booking.user_id == actor.user_id {
        Ok(BookingCapability::Guest)
    } else {
        Ok(BookingCapability::None)
    }
}

/// Status a booking ends up in when `capability` asks for `requested`.
///
/// Resort owners may set any status (no request keeps the current one).
/// Guests may only cancel; asking for anything else is forbidden.
pub fn next_status(
    capability: BookingCapability,
    current: BookingStatus,
    requested: Option<BookingStatus>,
) -> Result<BookingStatus, ServiceError> {
    match capability {
        BookingCapability::ResortOwner => Ok(requested.unwrap_or(current)),
        BookingCapability::Guest => match requested {
            None | Some(BookingStatus::Cancelled) => Ok(BookingStatus::Cancelled),
            Some(_) => Err(ServiceError::forbidden(
                "You can only cancel your booking, not change its status",
            )),
        },
        BookingCapability::None => Err(ServiceError::forbidden(
            "Not authorized to update this booking",
        )),
    }
}
