use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::{get, put},
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::ports::booking_repository::BookingListing;
use crate::application::use_cases::bookings::cancel_booking::CancelBooking;
use crate::application::use_cases::bookings::create_booking::{
    CreateBooking, CreateBookingRequest as CreateBookingDto,
};
use crate::application::use_cases::bookings::list_resort_bookings::ListResortBookings;
use crate::application::use_cases::bookings::list_user_bookings::ListUserBookings;
use crate::application::use_cases::bookings::update_booking::UpdateBooking;
use crate::bootstrap::app_context::AppContext;
use crate::domain::bookings::booking::{Booking, BookingStatus};
use crate::presentation::http::auth::{Bearer, authenticate};
use crate::presentation::http::error::{ApiError, MessageResponse};
use crate::presentation::http::extract::{JsonBody, parse_id};

#[derive(Debug, Serialize, ToSchema)]
pub struct BookingResponse {
    pub id: Uuid,
    pub user_id: Uuid,
    pub resort_id: Uuid,
    pub room_id: Option<Uuid>,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub nights: i64,
    #[schema(value_type = String, example = "Pending")]
    pub status: BookingStatus,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resort_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub room_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guest_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guest_email: Option<String>,
}

impl From<Booking> for BookingResponse {
    fn from(b: Booking) -> Self {
        Self {
            id: b.id,
            user_id: b.user_id,
            resort_id: b.resort_id,
            room_id: b.room_id,
            check_in: b.stay.check_in(),
            check_out: b.stay.check_out(),
            nights: b.stay.nights(),
            status: b.status,
            created_at: b.created_at,
            updated_at: b.updated_at,
            resort_name: None,
            room_number: None,
            guest_name: None,
            guest_email: None,
        }
    }
}

impl From<BookingListing> for BookingResponse {
    fn from(l: BookingListing) -> Self {
        let mut out = BookingResponse::from(l.booking);
        out.resort_name = Some(l.resort_name);
        out.room_number = l.room_number;
        out.guest_name = Some(l.guest_name);
        out.guest_email = Some(l.guest_email);
        out
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateBookingRequest {
    pub room_id: Option<Uuid>,
    #[schema(value_type = String, example = "2025-07-01")]
    pub check_in: NaiveDate,
    #[schema(value_type = String, example = "2025-07-05")]
    pub check_out: NaiveDate,
}

#[derive(Debug, Deserialize, ToSchema, Default)]
pub struct UpdateBookingRequest {
    #[schema(value_type = Option<String>, example = "Confirmed")]
    pub status: Option<BookingStatus>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CancelBookingResponse {
    pub message: String,
    pub booking: BookingResponse,
}

pub fn routes(ctx: AppContext) -> Router {
    Router::new()
        .route("/bookings", get(list_my_bookings))
        .route(
            "/resorts/:id/bookings",
            get(list_resort_bookings).post(create_booking),
        )
        .route("/bookings/:id", put(update_booking).delete(cancel_booking))
        .with_state(ctx)
}

#[utoipa::path(get, path = "/api/bookings", tag = "Bookings",
    responses((status = 200, body = [BookingResponse]), (status = 401, body = MessageResponse)))]
pub async fn list_my_bookings(
    State(ctx): State<AppContext>,
    bearer: Bearer,
) -> Result<Json<Vec<BookingResponse>>, ApiError> {
    let auth = authenticate(&ctx, bearer).await?;
    let repo = ctx.booking_repo();
    let uc = ListUserBookings {
        repo: repo.as_ref(),
    };
    let items = uc.execute(&auth.actor).await?;
    Ok(Json(items.into_iter().map(Into::into).collect()))
}

#[utoipa::path(get, path = "/api/resorts/{id}/bookings", tag = "Bookings",
    params(("id" = Uuid, Path, description = "Resort ID")),
    responses((status = 200, body = [BookingResponse]), (status = 403, body = MessageResponse)))]
pub async fn list_resort_bookings(
    State(ctx): State<AppContext>,
    bearer: Bearer,
    Path(resort_id): Path<String>,
) -> Result<Json<Vec<BookingResponse>>, ApiError> {
    let auth = authenticate(&ctx, bearer).await?;
    let resort_id = parse_id(&resort_id, "Resort not found")?;
    let resorts = ctx.resort_repo();
    let bookings = ctx.booking_repo();
    let uc = ListResortBookings {
        resorts: resorts.as_ref(),
        bookings: bookings.as_ref(),
    };
    let items = uc.execute(&auth.actor, resort_id).await?;
    Ok(Json(items.into_iter().map(Into::into).collect()))
}

#[utoipa::path(post, path = "/api/resorts/{id}/bookings", tag = "Bookings",
    request_body = CreateBookingRequest,
    params(("id" = Uuid, Path, description = "Resort ID")),
    responses((status = 201, body = BookingResponse), (status = 400, body = MessageResponse), (status = 404, body = MessageResponse)))]
pub async fn create_booking(
    State(ctx): State<AppContext>,
    bearer: Bearer,
    Path(resort_id): Path<String>,
    JsonBody(req): JsonBody<CreateBookingRequest>,
) -> Result<(StatusCode, Json<BookingResponse>), ApiError> {
    let auth = authenticate(&ctx, bearer).await?;
    let resort_id = parse_id(&resort_id, "Resort not found")?;
    let resorts = ctx.resort_repo();
    let rooms = ctx.room_repo();
    let bookings = ctx.booking_repo();
    let uc = CreateBooking {
        resorts: resorts.as_ref(),
        rooms: rooms.as_ref(),
        bookings: bookings.as_ref(),
    };
    let dto = CreateBookingDto {
        room_id: req.room_id,
        check_in: req.check_in,
        check_out: req.check_out,
    };
    let booking = uc.execute(&auth.actor, resort_id, dto).await?;
    Ok((StatusCode::CREATED, Json(booking.into())))
}

#[utoipa::path(put, path = "/api/bookings/{id}", tag = "Bookings",
    request_body = UpdateBookingRequest,
    params(("id" = Uuid, Path, description = "Booking ID")),
    responses((status = 200, body = BookingResponse), (status = 403, body = MessageResponse), (status = 404, body = MessageResponse)))]
pub async fn update_booking(
    State(ctx): State<AppContext>,
    bearer: Bearer,
    Path(id): Path<String>,
    JsonBody(req): JsonBody<UpdateBookingRequest>,
) -> Result<Json<BookingResponse>, ApiError> {
    let auth = authenticate(&ctx, bearer).await?;
    let id = parse_id(&id, "Booking not found")?;
    let resorts = ctx.resort_repo();
    let bookings = ctx.booking_repo();
    let uc = UpdateBooking {
        resorts: resorts.as_ref(),
        bookings: bookings.as_ref(),
    };
    let booking = uc.execute(&auth.actor, id, req.status).await?;
    Ok(Json(booking.into()))
}

#[utoipa::path(delete, path = "/api/bookings/{id}", tag = "Bookings",
    params(("id" = Uuid, Path, description = "Booking ID")),
    responses((status = 200, body = CancelBookingResponse), (status = 403, body = MessageResponse), (status = 404, body = MessageResponse)))]
pub async fn cancel_booking(
    State(ctx): State<AppContext>,
    bearer: Bearer,
    Path(id): Path<String>,
) -> Result<Json<CancelBookingResponse>, ApiError> {
    let auth = authenticate(&ctx, bearer).await?;
    let id = parse_id(&id, "Booking not found")?;
    let resorts = ctx.resort_repo();
    let bookings = ctx.booking_repo();
    let uc = CancelBooking {
        resorts: resorts.as_ref(),
        bookings: bookings.as_ref(),
    };
    let booking = uc.execute(&auth.actor, id).await?;
    Ok(Json(CancelBookingResponse {
        message: "Booking cancelled successfully".into(),
        booking: booking.into(),
    }))
}
