use axum::{Json, Router, extract::State, routing::get};
use serde::Serialize;
use utoipa::ToSchema;

use crate::application::access;
use crate::bootstrap::app_context::AppContext;
use crate::domain::users::role::Role;
use crate::presentation::http::auth::{Bearer, UserResponse, authenticate};
use crate::presentation::http::error::{ApiError, MessageResponse};

#[derive(Debug, Serialize, ToSchema)]
pub struct ProtectedResponse {
    pub message: String,
    pub user: UserResponse,
}

pub fn routes(ctx: AppContext) -> Router {
    Router::new()
        .route("/profile", get(profile))
        .route("/admin", get(admin))
        .with_state(ctx)
}

#[utoipa::path(get, path = "/api/profile", tag = "Protected",
    responses((status = 200, body = ProtectedResponse), (status = 401, body = MessageResponse)))]
pub async fn profile(
    State(ctx): State<AppContext>,
    bearer: Bearer,
) -> Result<Json<ProtectedResponse>, ApiError> {
    let auth = authenticate(&ctx, bearer).await?;
    Ok(Json(ProtectedResponse {
        message: "Profile accessed successfully".into(),
        user: auth.user.into(),
    }))
}

#[utoipa::path(get, path = "/api/admin", tag = "Protected",
    responses((status = 200, body = ProtectedResponse), (status = 403, body = MessageResponse)))]
pub async fn admin(
    State(ctx): State<AppContext>,
    bearer: Bearer,
) -> Result<Json<ProtectedResponse>, ApiError> {
    let auth = authenticate(&ctx, bearer).await?;
    access::require_role(&auth.actor, &[Role::ResortAdmin])?;
    Ok(Json(ProtectedResponse {
        message: "Admin area accessed successfully".into(),
        user: auth.user.into(),
    }))
}
