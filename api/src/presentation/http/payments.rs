use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::get,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::use_cases::payments::list_payments::ListPayments;
use crate::application::use_cases::payments::record_payment::{
    RecordPayment, RecordPaymentRequest as RecordPaymentDto,
};
use crate::bootstrap::app_context::AppContext;
use crate::domain::payments::payment::{Currency, Payment, PaymentMethod, PaymentStatus};
use crate::presentation::http::auth::{Bearer, authenticate};
use crate::presentation::http::error::{ApiError, MessageResponse};
use crate::presentation::http::extract::{JsonBody, parse_id};

#[derive(Debug, Serialize, ToSchema)]
pub struct PaymentResponse {
    pub id: Uuid,
    pub booking_id: Uuid,
    pub amount_cents: i64,
    #[schema(value_type = String, example = "USD")]
    pub currency: Currency,
    #[schema(value_type = String, example = "Credit Card")]
    pub payment_method: PaymentMethod,
    pub transaction_id: String,
    #[schema(value_type = String, example = "Pending")]
    pub status: PaymentStatus,
    pub payment_date: chrono::DateTime<chrono::Utc>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl From<Payment> for PaymentResponse {
    fn from(p: Payment) -> Self {
        Self {
            id: p.id,
            booking_id: p.booking_id,
            amount_cents: p.amount_cents,
            currency: p.currency,
            payment_method: p.payment_method,
            transaction_id: p.transaction_id,
            status: p.status,
            payment_date: p.payment_date,
            created_at: p.created_at,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct RecordPaymentRequest {
    pub amount_cents: i64,
    #[schema(value_type = Option<String>, example = "USD")]
    pub currency: Option<Currency>,
    #[schema(value_type = String, example = "Credit Card")]
    pub payment_method: PaymentMethod,
    pub transaction_id: Option<String>,
}

pub fn routes(ctx: AppContext) -> Router {
    Router::new()
        .route(
            "/bookings/:id/payments",
            get(list_payments).post(record_payment),
        )
        .with_state(ctx)
}

#[utoipa::path(get, path = "/api/bookings/{id}/payments", tag = "Payments",
    params(("id" = Uuid, Path, description = "Booking ID")),
    responses((status = 200, body = [PaymentResponse]), (status = 403, body = MessageResponse)))]
pub async fn list_payments(
    State(ctx): State<AppContext>,
    bearer: Bearer,
    Path(booking_id): Path<String>,
) -> Result<Json<Vec<PaymentResponse>>, ApiError> {
    let auth = authenticate(&ctx, bearer).await?;
    let booking_id = parse_id(&booking_id, "Booking not found")?;
    let resorts = ctx.resort_repo();
    let bookings = ctx.booking_repo();
    let payments = ctx.payment_repo();
    let uc = ListPayments {
        resorts: resorts.as_ref(),
        bookings: bookings.as_ref(),
        payments: payments.as_ref(),
    };
    let items = uc.execute(&auth.actor, booking_id).await?;
    Ok(Json(items.into_iter().map(Into::into).collect()))
}

#[utoipa::path(post, path = "/api/bookings/{id}/payments", tag = "Payments",
    request_body = RecordPaymentRequest,
    params(("id" = Uuid, Path, description = "Booking ID")),
    responses((status = 201, body = PaymentResponse), (status = 400, body = MessageResponse), (status = 403, body = MessageResponse)))]
pub async fn record_payment(
    State(ctx): State<AppContext>,
    bearer: Bearer,
    Path(booking_id): Path<String>,
    JsonBody(req): JsonBody<RecordPaymentRequest>,
) -> Result<(StatusCode, Json<PaymentResponse>), ApiError> {
    let auth = authenticate(&ctx, bearer).await?;
    let booking_id = parse_id(&booking_id, "Booking not found")?;
    let bookings = ctx.booking_repo();
    let payments = ctx.payment_repo();
    let uc = RecordPayment {
        bookings: bookings.as_ref(),
        payments: payments.as_ref(),
    };
    let dto = RecordPaymentDto {
        amount_cents: req.amount_cents,
        currency: req.currency,
        payment_method: req.payment_method,
        transaction_id: req.transaction_id,
    };
    let payment = uc.execute(&auth.actor, booking_id, dto).await?;
    Ok((StatusCode::CREATED, Json(payment.into())))
}
