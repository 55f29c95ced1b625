use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::get,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::use_cases::room_types::create_room_type::CreateRoomType;
use crate::application::use_cases::room_types::delete_room_type::DeleteRoomType;
use crate::application::use_cases::room_types::get_room_type::GetRoomType;
use crate::application::use_cases::room_types::list_room_types::ListRoomTypes;
use crate::application::use_cases::room_types::update_room_type::UpdateRoomType;
use crate::bootstrap::app_context::AppContext;
use crate::domain::resorts::room_type::{
    BedConfiguration, Occupancy, RoomType, RoomTypeDetails, RoomTypePatch, StayPolicies,
};
use crate::presentation::http::auth::{Bearer, authenticate};
use crate::presentation::http::error::{ApiError, MessageResponse};
use crate::presentation::http::extract::{JsonBody, parse_id};

#[derive(Debug, Serialize, ToSchema)]
pub struct RoomTypeResponse {
    pub id: Uuid,
    pub resort_id: Uuid,
    pub name: String,
    pub description: String,
    pub base_price_cents: i64,
    #[schema(value_type = Object)]
    pub capacity: Occupancy,
    pub amenities: Vec<String>,
    pub size_sqft: i32,
    #[schema(value_type = Object)]
    pub bed_configuration: BedConfiguration,
    pub is_active: bool,
    pub images: Vec<String>,
    #[schema(value_type = Object)]
    pub policies: StayPolicies,
    pub display_order: i32,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl From<RoomType> for RoomTypeResponse {
    fn from(rt: RoomType) -> Self {
        let d = rt.details;
        Self {
            id: rt.id,
            resort_id: rt.resort_id,
            name: d.name,
            description: d.description,
            base_price_cents: d.base_price_cents,
            capacity: d.capacity,
            amenities: d.amenities,
            size_sqft: d.size_sqft,
            bed_configuration: d.bed_configuration,
            is_active: d.is_active,
            images: d.images,
            policies: d.policies,
            display_order: d.display_order,
            created_at: rt.created_at,
            updated_at: rt.updated_at,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateRoomTypeRequest {
    pub name: String,
    pub description: String,
    pub base_price_cents: i64,
    #[schema(value_type = Option<Object>)]
    pub capacity: Option<Occupancy>,
    pub amenities: Option<Vec<String>>,
    pub size_sqft: i32,
    #[schema(value_type = Object)]
    pub bed_configuration: BedConfiguration,
    pub is_active: Option<bool>,
    pub images: Option<Vec<String>>,
    #[schema(value_type = Option<Object>)]
    pub policies: Option<StayPolicies>,
    pub display_order: Option<i32>,
}

impl From<CreateRoomTypeRequest> for RoomTypeDetails {
    fn from(req: CreateRoomTypeRequest) -> Self {
        Self {
            name: req.name,
            description: req.description,
            base_price_cents: req.base_price_cents,
            capacity: req.capacity.unwrap_or_default(),
            amenities: req.amenities.unwrap_or_default(),
            size_sqft: req.size_sqft,
            bed_configuration: req.bed_configuration,
            is_active: req.is_active.unwrap_or(true),
            images: req.images.unwrap_or_default(),
            policies: req.policies.unwrap_or_default(),
            display_order: req.display_order.unwrap_or(1),
        }
    }
}

#[derive(Debug, Deserialize, ToSchema, Default)]
pub struct UpdateRoomTypeRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub base_price_cents: Option<i64>,
    #[schema(value_type = Option<Object>)]
    pub capacity: Option<Occupancy>,
    pub amenities: Option<Vec<String>>,
    pub size_sqft: Option<i32>,
    #[schema(value_type = Option<Object>)]
    pub bed_configuration: Option<BedConfiguration>,
    pub is_active: Option<bool>,
    pub images: Option<Vec<String>>,
    #[schema(value_type = Option<Object>)]
    pub policies: Option<StayPolicies>,
    pub display_order: Option<i32>,
}

impl From<UpdateRoomTypeRequest> for RoomTypePatch {
    fn from(req: UpdateRoomTypeRequest) -> Self {
        Self {
            name: req.name,
            description: req.description,
            base_price_cents: req.base_price_cents,
            capacity: req.capacity,
            amenities: req.amenities,
            size_sqft: req.size_sqft,
            bed_configuration: req.bed_configuration,
            is_active: req.is_active,
            images: req.images,
            policies: req.policies,
            display_order: req.display_order,
        }
    }
}

pub fn routes(ctx: AppContext) -> Router {
    Router::new()
        .route(
            "/resorts/:id/room-types",
            get(list_room_types).post(create_room_type),
        )
        .route(
            "/room-types/:id",
            get(get_room_type)
                .put(update_room_type)
                .delete(delete_room_type),
        )
        .with_state(ctx)
}

#[utoipa::path(get, path = "/api/resorts/{id}/room-types", tag = "Room Types", security(()),
    params(("id" = Uuid, Path, description = "Resort ID")),
    responses((status = 200, body = [RoomTypeResponse]), (status = 404, body = MessageResponse)))]
pub async fn list_room_types(
    State(ctx): State<AppContext>,
    Path(resort_id): Path<String>,
) -> Result<Json<Vec<RoomTypeResponse>>, ApiError> {
    let resort_id = parse_id(&resort_id, "Resort not found")?;
    let resorts = ctx.resort_repo();
    let room_types = ctx.room_type_repo();
    let uc = ListRoomTypes {
        resorts: resorts.as_ref(),
        room_types: room_types.as_ref(),
    };
    let items = uc.execute(resort_id).await?;
    Ok(Json(items.into_iter().map(Into::into).collect()))
}

#[utoipa::path(post, path = "/api/resorts/{id}/room-types", tag = "Room Types",
    request_body = CreateRoomTypeRequest,
    params(("id" = Uuid, Path, description = "Resort ID")),
    responses((status = 201, body = RoomTypeResponse), (status = 403, body = MessageResponse)))]
pub async fn create_room_type(
    State(ctx): State<AppContext>,
    bearer: Bearer,
    Path(resort_id): Path<String>,
    JsonBody(req): JsonBody<CreateRoomTypeRequest>,
) -> Result<(StatusCode, Json<RoomTypeResponse>), ApiError> {
    let auth = authenticate(&ctx, bearer).await?;
    let resort_id = parse_id(&resort_id, "Resort not found")?;
    let resorts = ctx.resort_repo();
    let room_types = ctx.room_type_repo();
    let uc = CreateRoomType {
        resorts: resorts.as_ref(),
        room_types: room_types.as_ref(),
    };
    let details = RoomTypeDetails::from(req);
    let room_type = uc.execute(&auth.actor, resort_id, &details).await?;
    Ok((StatusCode::CREATED, Json(room_type.into())))
}

#[utoipa::path(get, path = "/api/room-types/{id}", tag = "Room Types", security(()),
    params(("id" = Uuid, Path, description = "Room type ID")),
    responses((status = 200, body = RoomTypeResponse), (status = 404, body = MessageResponse)))]
pub async fn get_room_type(
    State(ctx): State<AppContext>,
    Path(id): Path<String>,
) -> Result<Json<RoomTypeResponse>, ApiError> {
    let id = parse_id(&id, "Room type not found")?;
    let repo = ctx.room_type_repo();
    let uc = GetRoomType {
        repo: repo.as_ref(),
    };
    Ok(Json(uc.execute(id).await?.into()))
}

#[utoipa::path(put, path = "/api/room-types/{id}", tag = "Room Types",
    request_body = UpdateRoomTypeRequest,
    params(("id" = Uuid, Path, description = "Room type ID")),
    responses((status = 200, body = RoomTypeResponse), (status = 403, body = MessageResponse)))]
pub async fn update_room_type(
    State(ctx): State<AppContext>,
    bearer: Bearer,
    Path(id): Path<String>,
    JsonBody(req): JsonBody<UpdateRoomTypeRequest>,
) -> Result<Json<RoomTypeResponse>, ApiError> {
    let auth = authenticate(&ctx, bearer).await?;
    let id = parse_id(&id, "Room type not found")?;
    let resorts = ctx.resort_repo();
    let room_types = ctx.room_type_repo();
    let uc = UpdateRoomType {
        resorts: resorts.as_ref(),
        room_types: room_types.as_ref(),
    };
    let room_type = uc.execute(&auth.actor, id, req.into()).await?;
    Ok(Json(room_type.into()))
}

#[utoipa::path(delete, path = "/api/room-types/{id}", tag = "Room Types",
    params(("id" = Uuid, Path, description = "Room type ID")),
    responses((status = 200, body = MessageResponse), (status = 403, body = MessageResponse)))]
pub async fn delete_room_type(
    State(ctx): State<AppContext>,
    bearer: Bearer,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    let auth = authenticate(&ctx, bearer).await?;
    let id = parse_id(&id, "Room type not found")?;
    let resorts = ctx.resort_repo();
    let room_types = ctx.room_type_repo();
    let uc = DeleteRoomType {
        resorts: resorts.as_ref(),
        room_types: room_types.as_ref(),
    };
    uc.execute(&auth.actor, id).await?;
    Ok(Json(MessageResponse {
        message: "Room type deleted successfully".into(),
    }))
}
