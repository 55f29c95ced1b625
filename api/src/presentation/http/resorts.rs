use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::get,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::dto::resorts::ResortWithRoomTypesDto;
use crate::application::use_cases::resorts::create_resort::CreateResort;
use crate::application::use_cases::resorts::delete_resort::DeleteResort;
use crate::application::use_cases::resorts::get_resort::GetResort;
use crate::application::use_cases::resorts::list_resorts::ListResorts;
use crate::application::use_cases::resorts::update_resort::UpdateResort;
use crate::bootstrap::app_context::AppContext;
use crate::domain::resorts::resort::{Resort, ResortDetails, ResortPatch};
use crate::presentation::http::auth::{Bearer, authenticate};
use crate::presentation::http::error::{ApiError, MessageResponse};
use crate::presentation::http::extract::{
    DoubleOption, JsonBody, deserialize_double_option, parse_id,
};
use crate::presentation::http::room_types::RoomTypeResponse;

#[derive(Debug, Serialize, ToSchema)]
pub struct ResortResponse {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub name: String,
    pub location: String,
    pub description: Option<String>,
    pub contact_email: String,
    pub contact_phone: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub room_types: Option<Vec<RoomTypeResponse>>,
}

impl From<Resort> for ResortResponse {
    fn from(r: Resort) -> Self {
        Self {
            id: r.id,
            owner_id: r.owner_id,
            name: r.details.name,
            location: r.details.location,
            description: r.details.description,
            contact_email: r.details.contact_email,
            contact_phone: r.details.contact_phone,
            created_at: r.created_at,
            updated_at: r.updated_at,
            room_types: None,
        }
    }
}

impl From<ResortWithRoomTypesDto> for ResortResponse {
    fn from(dto: ResortWithRoomTypesDto) -> Self {
        let mut out = ResortResponse::from(dto.resort);
        out.room_types = Some(dto.room_types.into_iter().map(Into::into).collect());
        out
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateResortRequest {
    pub name: String,
    pub location: String,
    pub description: Option<String>,
    pub contact_email: String,
    pub contact_phone: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema, Default)]
pub struct UpdateResortRequest {
    pub name: Option<String>,
    pub location: Option<String>,
    #[serde(default, deserialize_with = "deserialize_double_option")]
    #[schema(value_type = Option<String>)]
    pub description: DoubleOption<String>,
    pub contact_email: Option<String>,
    #[serde(default, deserialize_with = "deserialize_double_option")]
    #[schema(value_type = Option<String>)]
    pub contact_phone: DoubleOption<String>,
}

pub fn routes(ctx: AppContext) -> Router {
    Router::new()
        .route("/resorts", get(list_resorts).post(create_resort))
        .route(
            "/resorts/:id",
            get(get_resort).put(update_resort).delete(delete_resort),
        )
        .with_state(ctx)
}

#[utoipa::path(get, path = "/api/resorts", tag = "Resorts", security(()),
    responses((status = 200, body = [ResortResponse])))]
pub async fn list_resorts(
    State(ctx): State<AppContext>,
) -> Result<Json<Vec<ResortResponse>>, ApiError> {
    let resorts = ctx.resort_repo();
    let room_types = ctx.room_type_repo();
    let uc = ListResorts {
        resorts: resorts.as_ref(),
        room_types: room_types.as_ref(),
    };
    let items = uc.execute().await?;
    Ok(Json(items.into_iter().map(Into::into).collect()))
}

#[utoipa::path(get, path = "/api/resorts/{id}", tag = "Resorts", security(()),
    params(("id" = Uuid, Path, description = "Resort ID")),
    responses((status = 200, body = ResortResponse), (status = 404, body = MessageResponse)))]
pub async fn get_resort(
    State(ctx): State<AppContext>,
    Path(id): Path<String>,
) -> Result<Json<ResortResponse>, ApiError> {
    let id = parse_id(&id, "Resort not found")?;
    let resorts = ctx.resort_repo();
    let room_types = ctx.room_type_repo();
    let uc = GetResort {
        resorts: resorts.as_ref(),
        room_types: room_types.as_ref(),
    };
    Ok(Json(uc.execute(id).await?.into()))
}

#[utoipa::path(post, path = "/api/resorts", tag = "Resorts", request_body = CreateResortRequest,
    responses((status = 201, body = ResortResponse), (status = 403, body = MessageResponse)))]
pub async fn create_resort(
    State(ctx): State<AppContext>,
    bearer: Bearer,
    JsonBody(req): JsonBody<CreateResortRequest>,
) -> Result<(StatusCode, Json<ResortResponse>), ApiError> {
    let auth = authenticate(&ctx, bearer).await?;
    let repo = ctx.resort_repo();
    let uc = CreateResort {
        repo: repo.as_ref(),
    };
    let details = ResortDetails {
        name: req.name,
        location: req.location,
        description: req.description,
        contact_email: req.contact_email,
        contact_phone: req.contact_phone,
    };
    let resort = uc.execute(&auth.actor, &details).await?;
    Ok((StatusCode::CREATED, Json(resort.into())))
}

#[utoipa::path(put, path = "/api/resorts/{id}", tag = "Resorts", request_body = UpdateResortRequest,
    params(("id" = Uuid, Path, description = "Resort ID")),
    responses((status = 200, body = ResortResponse), (status = 403, body = MessageResponse)))]
pub async fn update_resort(
    State(ctx): State<AppContext>,
    bearer: Bearer,
    Path(id): Path<String>,
    JsonBody(req): JsonBody<UpdateResortRequest>,
) -> Result<Json<ResortResponse>, ApiError> {
    let auth = authenticate(&ctx, bearer).await?;
    let id = parse_id(&id, "Resort not found")?;
    let repo = ctx.resort_repo();
    let uc = UpdateResort {
        repo: repo.as_ref(),
    };
    let changes = ResortPatch {
        name: req.name,
        location: req.location,
        description: req.description.into_patch(),
        contact_email: req.contact_email,
        contact_phone: req.contact_phone.into_patch(),
    };
    let resort = uc.execute(&auth.actor, id, changes).await?;
    Ok(Json(resort.into()))
}

#[utoipa::path(delete, path = "/api/resorts/{id}", tag = "Resorts",
    params(("id" = Uuid, Path, description = "Resort ID")),
    responses((status = 200, body = MessageResponse), (status = 403, body = MessageResponse)))]
pub async fn delete_resort(
    State(ctx): State<AppContext>,
    bearer: Bearer,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    let auth = authenticate(&ctx, bearer).await?;
    let id = parse_id(&id, "Resort not found")?;
    let repo = ctx.resort_repo();
    let uc = DeleteResort {
        repo: repo.as_ref(),
    };
    uc.execute(&auth.actor, id).await?;
    Ok(Json(MessageResponse {
        message: "Resort deleted successfully".into(),
    }))
}
