use uuid::Uuid;

use crate::application::access::Actor;
use crate::application::errors::ServiceError;
use crate::application::ports::booking_repository::BookingRepository;
use crate::application::ports::UniqueWrite;
use crate::application::ports::payment_repository::PaymentRepository;
use crate::domain::bookings::booking::BookingStatus;
use crate::domain::payments::payment::{Currency, NewPayment, Payment, PaymentMethod};

#[derive(Debug, Clone)]
pub struct RecordPaymentRequest {
    pub amount_cents: i64,
    pub currency: Option<Currency>,
    pub payment_method: PaymentMethod,
    pub transaction_id: Option<String>,
}

fn duplicate_transaction() -> ServiceError {
    ServiceError::Conflict("Transaction id already recorded".into())
}

pub struct RecordPayment<'a, B, P>
where
    B: BookingRepository + ?Sized,
    P: PaymentRepository + ?Sized,
{
    pub bookings: &'a B,
    pub payments: &'a P,
}

impl<'a, B, P> RecordPayment<'a, B, P>
where
    B: BookingRepository + ?Sized,
    P: PaymentRepository + ?Sized,
{
    pub async fn execute(
        &self,
        actor: &Actor,
        booking_id: Uuid,
        req: RecordPaymentRequest,
    ) -> Result<Payment, ServiceError> {
        let booking = self
            .bookings
            .get_by_id(booking_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Booking not found"))?;
        if booking.user_id != actor.user_id {
            return Err(ServiceError::forbidden(
                "Not authorized to pay for this booking",
            ));
        }
        if booking.status == BookingStatus::Cancelled {
            return Err(ServiceError::Validation(
                "Cannot record a payment for a cancelled booking".into(),
            ));
        }

        let transaction_id = match req.transaction_id.map(|t| t.trim().to_string()) {
            Some(t) if !t.is_empty() => t,
            _ => format!("TXN-{}", Uuid::new_v4().simple()),
        };
        let payment = NewPayment {
            booking_id,
            amount_cents: req.amount_cents,
            currency: req.currency.unwrap_or_default(),
            payment_method: req.payment_method,
            transaction_id,
        };
        payment.validate()?;
        if self.payments.transaction_exists(&payment.transaction_id).await? {
            return Err(duplicate_transaction());
        }
        let saved = match self.payments.create(&payment).await? {
            UniqueWrite::Written(saved) => saved,
            UniqueWrite::Duplicate => return Err(duplicate_transaction()),
        };
        tracing::info!(
            payment_id = %saved.id,
            booking_id = %booking_id,
            amount_cents = saved.amount_cents,
            currency = saved.currency.as_str(),
            "payment_recorded"
        );
        Ok(saved)
    }
}
