use uuid::Uuid;

use crate::application::access::{self, Actor, BookingCapability};
use crate::application::errors::ServiceError;
use crate::application::ports::booking_repository::BookingRepository;
use crate::application::ports::payment_repository::PaymentRepository;
use crate::application::ports::resort_repository::ResortRepository;
use crate::domain::payments::payment::Payment;

pub struct ListPayments<'a, R, B, P>
where
    R: ResortRepository + ?Sized,
    B: BookingRepository + ?Sized,
    P: PaymentRepository + ?Sized,
{
    pub resorts: &'a R,
    pub bookings: &'a B,
    pub payments: &'a P,
}

impl<'a, R, B, P> ListPayments<'a, R, B, P>
where
    R: ResortRepository + ?Sized,
    B: BookingRepository + ?Sized,
    P: PaymentRepository + ?Sized,
{
    pub async fn execute(
        &self,
        actor: &Actor,
        booking_id: Uuid,
    ) -> Result<Vec<Payment>, ServiceError> {
        let booking = self
            .bookings
            .get_by_id(booking_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Booking not found"))?;
        if access::resolve_booking(self.resorts, actor, &booking).await? == BookingCapability::None {
            return Err(ServiceError::forbidden(
                "Not authorized to view payments for this booking",
            ));
        }
        Ok(self.payments.list_for_booking(booking_id).await?)
    }
}
