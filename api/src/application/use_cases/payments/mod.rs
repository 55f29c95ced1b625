pub mod list_payments;
pub mod record_payment;
