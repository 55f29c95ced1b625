use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::get,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::use_cases::rooms::create_room::CreateRoom;
use crate::application::use_cases::rooms::delete_room::DeleteRoom;
use crate::application::use_cases::rooms::get_room::GetRoom;
use crate::application::use_cases::rooms::list_rooms::ListRooms;
use crate::application::use_cases::rooms::update_room::UpdateRoom;
use crate::bootstrap::app_context::AppContext;
use crate::domain::resorts::room::{Room, RoomDetails, RoomPatch, RoomStatus};
use crate::presentation::http::auth::{Bearer, authenticate};
use crate::presentation::http::error::{ApiError, MessageResponse};
use crate::presentation::http::extract::{
    DoubleOption, JsonBody, deserialize_double_option, parse_id,
};

#[derive(Debug, Serialize, ToSchema)]
pub struct RoomResponse {
    pub id: Uuid,
    pub resort_id: Uuid,
    pub room_type_id: Option<Uuid>,
    pub name: String,
    pub room_number: String,
    pub size: String,
    pub price_per_night_cents: i64,
    pub capacity: i32,
    #[schema(value_type = String, example = "Available")]
    pub status: RoomStatus,
    pub amenities: Vec<String>,
    pub floor: i32,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl From<Room> for RoomResponse {
    fn from(room: Room) -> Self {
        let d = room.details;
        Self {
            id: room.id,
            resort_id: room.resort_id,
            room_type_id: d.room_type_id,
            name: d.name,
            room_number: d.room_number,
            size: d.size,
            price_per_night_cents: d.price_per_night_cents,
            capacity: d.capacity,
            status: d.status,
            amenities: d.amenities,
            floor: d.floor,
            created_at: room.created_at,
            updated_at: room.updated_at,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateRoomRequest {
    pub room_type_id: Option<Uuid>,
    pub name: String,
    pub room_number: String,
    pub size: Option<String>,
    pub price_per_night_cents: i64,
    pub capacity: i32,
    #[schema(value_type = Option<String>)]
    pub status: Option<RoomStatus>,
    pub amenities: Option<Vec<String>>,
    pub floor: Option<i32>,
}

impl From<CreateRoomRequest> for RoomDetails {
    fn from(req: CreateRoomRequest) -> Self {
        Self {
            room_type_id: req.room_type_id,
            name: req.name,
            room_number: req.room_number,
            size: req.size.unwrap_or_else(|| "Standard".into()),
            price_per_night_cents: req.price_per_night_cents,
            capacity: req.capacity,
            status: req.status.unwrap_or_default(),
            amenities: req.amenities.unwrap_or_default(),
            floor: req.floor.unwrap_or(1),
        }
    }
}

#[derive(Debug, Deserialize, ToSchema, Default)]
pub struct UpdateRoomRequest {
    #[serde(default, deserialize_with = "deserialize_double_option")]
    #[schema(value_type = Option<Uuid>)]
    pub room_type_id: DoubleOption<Uuid>,
    pub name: Option<String>,
    pub room_number: Option<String>,
    pub size: Option<String>,
    pub price_per_night_cents: Option<i64>,
    pub capacity: Option<i32>,
    #[schema(value_type = Option<String>)]
    pub status: Option<RoomStatus>,
    pub amenities: Option<Vec<String>>,
    pub floor: Option<i32>,
}

impl From<UpdateRoomRequest> for RoomPatch {
    fn from(req: UpdateRoomRequest) -> Self {
        Self {
            room_type_id: req.room_type_id.into_patch(),
            name: req.name,
            room_number: req.room_number,
            size: req.size,
            price_per_night_cents: req.price_per_night_cents,
            capacity: req.capacity,
            status: req.status,
            amenities: req.amenities,
            floor: req.floor,
        }
    }
}

pub fn routes(ctx: AppContext) -> Router {
    Router::new()
        .route("/resorts/:id/rooms", get(list_rooms).post(create_room))
        .route(
            "/rooms/:id",
            get(get_room).put(update_room).delete(delete_room),
        )
        .with_state(ctx)
}

#[utoipa::path(get, path = "/api/resorts/{id}/rooms", tag = "Rooms", security(()),
    params(("id" = Uuid, Path, description = "Resort ID")),
    responses((status = 200, body = [RoomResponse]), (status = 404, body = MessageResponse)))]
pub async fn list_rooms(
    State(ctx): State<AppContext>,
    Path(resort_id): Path<String>,
) -> Result<Json<Vec<RoomResponse>>, ApiError> {
    let resort_id = parse_id(&resort_id, "Resort not found")?;
    let resorts = ctx.resort_repo();
    let rooms = ctx.room_repo();
    let uc = ListRooms {
        resorts: resorts.as_ref(),
        rooms: rooms.as_ref(),
    };
    let items = uc.execute(resort_id).await?;
    Ok(Json(items.into_iter().map(Into::into).collect()))
}

#[utoipa::path(post, path = "/api/resorts/{id}/rooms", tag = "Rooms",
    request_body = CreateRoomRequest,
    params(("id" = Uuid, Path, description = "Resort ID")),
    responses((status = 201, body = RoomResponse), (status = 400, body = MessageResponse), (status = 403, body = MessageResponse)))]
pub async fn create_room(
    State(ctx): State<AppContext>,
    bearer: Bearer,
    Path(resort_id): Path<String>,
    JsonBody(req): JsonBody<CreateRoomRequest>,
) -> Result<(StatusCode, Json<RoomResponse>), ApiError> {
    let auth = authenticate(&ctx, bearer).await?;
    let resort_id = parse_id(&resort_id, "Resort not found")?;
    let resorts = ctx.resort_repo();
    let room_types = ctx.room_type_repo();
    let rooms = ctx.room_repo();
    let uc = CreateRoom {
        resorts: resorts.as_ref(),
        room_types: room_types.as_ref(),
        rooms: rooms.as_ref(),
    };
    let details = RoomDetails::from(req);
    let room = uc.execute(&auth.actor, resort_id, &details).await?;
    Ok((StatusCode::CREATED, Json(room.into())))
}

#[utoipa::path(get, path = "/api/rooms/{id}", tag = "Rooms", security(()),
    params(("id" = Uuid, Path, description = "Room ID")),
    responses((status = 200, body = RoomResponse), (status = 404, body = MessageResponse)))]
pub async fn get_room(
    State(ctx): State<AppContext>,
    Path(id): Path<String>,
) -> Result<Json<RoomResponse>, ApiError> {
    let id = parse_id(&id, "Room not found")?;
    let repo = ctx.room_repo();
    let uc = GetRoom {
        repo: repo.as_ref(),
    };
    Ok(Json(uc.execute(id).await?.into()))
}

#[utoipa::path(put, path = "/api/rooms/{id}", tag = "Rooms",
    request_body = UpdateRoomRequest,
    params(("id" = Uuid, Path, description = "Room ID")),
    responses((status = 200, body = RoomResponse), (status = 403, body = MessageResponse)))]
pub async fn update_room(
    State(ctx): State<AppContext>,
    bearer: Bearer,
    Path(id): Path<String>,
    JsonBody(req): JsonBody<UpdateRoomRequest>,
) -> Result<Json<RoomResponse>, ApiError> {
    let auth = authenticate(&ctx, bearer).await?;
    let id = parse_id(&id, "Room not found")?;
    let resorts = ctx.resort_repo();
    let room_types = ctx.room_type_repo();
    let rooms = ctx.room_repo();
    let uc = UpdateRoom {
        resorts: resorts.as_ref(),
        room_types: room_types.as_ref(),
        rooms: rooms.as_ref(),
    };
    let room = uc.execute(&auth.actor, id, req.into()).await?;
    Ok(Json(room.into()))
}

#[utoipa::path(delete, path = "/api/rooms/{id}", tag = "Rooms",
    params(("id" = Uuid, Path, description = "Room ID")),
    responses((status = 200, body = MessageResponse), (status = 403, body = MessageResponse)))]
pub async fn delete_room(
    State(ctx): State<AppContext>,
    bearer: Bearer,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    let auth = authenticate(&ctx, bearer).await?;
    let id = parse_id(&id, "Room not found")?;
    let resorts = ctx.resort_repo();
    let rooms = ctx.room_repo();
    let uc = DeleteRoom {
        resorts: resorts.as_ref(),
        rooms: rooms.as_ref(),
    };
    uc.execute(&auth.actor, id).await?;
    Ok(Json(MessageResponse {
        message: "Room deleted successfully".into(),
    }))
}
