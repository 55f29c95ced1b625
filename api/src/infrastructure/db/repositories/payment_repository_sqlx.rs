use async_trait::async_trait;
use sqlx::Row;
use sqlx::postgres::PgRow;
use uuid::Uuid;

use crate::application::ports::UniqueWrite;
use crate::application::ports::payment_repository::PaymentRepository;
use crate::domain::payments::payment::{
    Currency, NewPayment, Payment, PaymentMethod, PaymentStatus,
};
use crate::infrastructure::db::{PgPool, is_unique_violation};

const PAYMENT_COLUMNS: &str = "id, booking_id, amount_cents, currency, payment_method, \
                               transaction_id, status, payment_date, created_at";

pub struct SqlxPaymentRepository {
    pub pool: PgPool,
}

impl SqlxPaymentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn map_payment(r: &PgRow) -> anyhow::Result<Payment> {
    let currency: String = r.get("currency");
    let method: String = r.get("payment_method");
    let status: String = r.get("status");
    Ok(Payment {
        id: r.get("id"),
        booking_id: r.get("booking_id"),
        amount_cents: r.get("amount_cents"),
        currency: currency.parse::<Currency>()?,
        payment_method: method.parse::<PaymentMethod>()?,
        transaction_id: r.get("transaction_id"),
        status: status.parse::<PaymentStatus>()?,
        payment_date: r.get("payment_date"),
        created_at: r.get("created_at"),
    })
}

#[async_trait]
impl PaymentRepository for SqlxPaymentRepository {
    async fn list_for_booking(&self, booking_id: Uuid) -> anyhow::Result<Vec<Payment>> {
        let rows = sqlx::query(&format!(
            "SELECT {PAYMENT_COLUMNS} FROM payments WHERE booking_id = $1 ORDER BY created_at ASC"
        ))
        .bind(booking_id)
        .fetch_all(&self.pool)
        .await?;
        rows.iter().map(map_payment).collect()
    }

    async fn transaction_exists(&self, transaction_id: &str) -> anyhow::Result<bool> {
        let exists: bool = sqlx::query_scalar(
            "SELECT EXISTS(SELECT 1 FROM payments WHERE transaction_id = $1)",
        )
        .bind(transaction_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(exists)
    }

    async fn create(&self, payment: &NewPayment) -> anyhow::Result<UniqueWrite<Payment>> {
        let inserted = sqlx::query(&format!(
            r#"INSERT INTO payments (booking_id, amount_cents, currency, payment_method, transaction_id, status)
               VALUES ($1, $2, $3, $4, $5, $6)
               RETURNING {PAYMENT_COLUMNS}"#
        ))
        .bind(payment.booking_id)
        .bind(payment.amount_cents)
        .bind(payment.currency.as_str())
        .bind(payment.payment_method.as_str())
        .bind(&payment.transaction_id)
        .bind(PaymentStatus::Pending.as_str())
        .fetch_one(&self.pool)
        .await;
        match inserted {
            Ok(row) => Ok(UniqueWrite::Written(map_payment(&row)?)),
            Err(e) if is_unique_violation(&e) => Ok(UniqueWrite::Duplicate),
            Err(e) => Err(e.into()),
        }
    }
}
