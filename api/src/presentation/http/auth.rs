use axum::{
    Json, Router,
    extract::{FromRequestParts, State},
    http::{StatusCode, request::Parts},
    routing::{get, post},
};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::access::Actor;
use crate::application::errors::ServiceError;
use crate::application::ports::user_repository::UserRow;
use crate::application::use_cases::auth::login::{Login as LoginUc, LoginRequest as LoginDto};
use crate::application::use_cases::auth::me::GetMe;
use crate::application::use_cases::auth::register::{
    Register as RegisterUc, RegisterRequest as RegisterDto,
};
use crate::bootstrap::app_context::AppContext;
use crate::bootstrap::config::Config;
use crate::domain::users::role::Role;
use crate::presentation::http::error::ApiError;
use crate::presentation::http::extract::JsonBody;

#[derive(Debug, Deserialize, ToSchema)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    #[schema(value_type = Option<String>, example = "Customer")]
    pub role: Option<Role>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct UserResponse {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    #[schema(value_type = String, example = "Customer")]
    pub role: Role,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl From<UserRow> for UserResponse {
    fn from(row: UserRow) -> Self {
        Self {
            id: row.id,
            email: row.email,
            name: row.name,
            role: row.role,
            created_at: row.created_at,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct AuthResponse {
    pub message: String,
    pub token: String,
    pub user: UserResponse,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub email: String,
    pub role: String,
    pub iat: usize,
    pub exp: usize,
}

pub fn routes(ctx: AppContext) -> Router {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/me", get(me))
        .with_state(ctx)
}

#[utoipa::path(post, path = "/api/auth/register", tag = "Auth", request_body = RegisterRequest, security(()), responses(
    (status = 201, body = AuthResponse),
    (status = 400, body = crate::presentation::http::error::MessageResponse)
))]
pub async fn register(
    State(ctx): State<AppContext>,
    JsonBody(req): JsonBody<RegisterRequest>,
) -> Result<(StatusCode, Json<AuthResponse>), ApiError> {
    let repo = ctx.user_repo();
    let uc = RegisterUc {
        repo: repo.as_ref(),
    };
    let dto = RegisterDto {
        email: req.email,
        name: req.name,
        password: req.password,
        role: req.role,
    };
    let user = uc.execute(&dto).await?;
    let token = issue_token(&ctx.cfg, &user)?;
    Ok((
        StatusCode::CREATED,
        Json(AuthResponse {
            message: "User registered successfully".into(),
            token,
            user: user.into(),
        }),
    ))
}

#[utoipa::path(post, path = "/api/auth/login", tag = "Auth", request_body = LoginRequest, security(()), responses(
    (status = 200, body = AuthResponse),
    (status = 401, body = crate::presentation::http::error::MessageResponse)
))]
pub async fn login(
    State(ctx): State<AppContext>,
    JsonBody(req): JsonBody<LoginRequest>,
) -> Result<Json<AuthResponse>, ApiError> {
    let repo = ctx.user_repo();
    let uc = LoginUc {
        repo: repo.as_ref(),
    };
    let dto = LoginDto {
        email: req.email,
        password: req.password,
    };
    let Some(user) = uc.execute(&dto).await? else {
        tracing::debug!("login_rejected");
        return Err(ApiError::unauthorized("Invalid credentials"));
    };
    let token = issue_token(&ctx.cfg, &user)?;
    tracing::info!(user_id = %user.id, "user_logged_in");
    Ok(Json(AuthResponse {
        message: "Login successful".into(),
        token,
        user: user.into(),
    }))
}

#[utoipa::path(get, path = "/api/auth/me", tag = "Auth", responses(
    (status = 200, body = UserResponse),
    (status = 401, body = crate::presentation::http::error::MessageResponse)
))]
pub async fn me(
    State(ctx): State<AppContext>,
    bearer: Bearer,
) -> Result<Json<UserResponse>, ApiError> {
    let auth = authenticate(&ctx, bearer).await?;
    Ok(Json(auth.user.into()))
}

pub fn issue_token(cfg: &Config, user: &UserRow) -> Result<String, ApiError> {
    let now = chrono::Utc::now().timestamp() as usize;
    let claims = Claims {
        sub: user.id.to_string(),
        email: user.email.clone(),
        role: user.role.as_str().to_string(),
        iat: now,
        exp: now + (cfg.jwt_expires_secs as usize),
    };
    jsonwebtoken::encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(cfg.jwt_secret.as_bytes()),
    )
    .map_err(|e| ApiError::from(anyhow::anyhow!("token signing failed: {e}")))
}

// --- Bearer extractor & JWT utils ---

pub struct Bearer(pub String);

#[axum::async_trait]
impl<S> FromRequestParts<S> for Bearer
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .headers
            .get(axum::http::header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .and_then(|auth| auth.strip_prefix("Bearer "))
            .map(|t| t.trim())
            .filter(|t| !t.is_empty())
            .map(|t| Bearer(t.to_string()))
            .ok_or_else(|| ApiError::unauthorized("No token provided"))
    }
}

pub(crate) fn validate_bearer(cfg: &Config, token: &str) -> Result<Uuid, ApiError> {
    let data = jsonwebtoken::decode::<Claims>(
        token,
        &DecodingKey::from_secret(cfg.jwt_secret.as_bytes()),
        &Validation::default(),
    )
    .map_err(|_| ApiError::unauthorized("Invalid token"))?;
    Uuid::parse_str(&data.claims.sub).map_err(|_| ApiError::unauthorized("Invalid token"))
}

/// The caller behind a valid token, freshly loaded from storage.
pub struct AuthUser {
    pub actor: Actor,
    pub user: UserRow,
}

/// Validates the token and loads its user. The role comes from the stored
/// user so role changes apply to tokens already issued.
pub async fn authenticate(ctx: &AppContext, bearer: Bearer) -> Result<AuthUser, ApiError> {
    let id = validate_bearer(&ctx.cfg, &bearer.0)?;
    let repo = ctx.user_repo();
    let uc = GetMe {
        repo: repo.as_ref(),
    };
    let user = uc
        .execute(id)
        .await
        .map_err(ServiceError::from)?
        .ok_or_else(|| ApiError::unauthorized("Invalid token"))?;
    Ok(AuthUser {
        actor: Actor {
            user_id: user.id,
            role: user.role,
        },
        user,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cfg(secret: &str) -> Config {
        Config {
            api_port: 0,
            frontend_url: None,
            database_url: String::new(),
            jwt_secret: secret.into(),
            jwt_expires_secs: 3600,
            is_production: false,
        }
    }

    fn user() -> UserRow {
        UserRow {
            id: Uuid::new_v4(),
            email: "guest@example.com".into(),
            name: "Guest".into(),
            role: Role::Customer,
            password_hash: None,
            created_at: chrono::Utc::now(),
        }
    }

    #[test]
    fn issued_token_validates_to_its_subject() {
        let cfg = cfg("unit-test-secret");
        let u = user();
        let token = issue_token(&cfg, &u).unwrap();
        assert_eq!(validate_bearer(&cfg, &token).unwrap(), u.id);
    }

    #[test]
    fn token_signed_with_other_secret_is_invalid() {
        let token = issue_token(&cfg("secret-a"), &user()).unwrap();
        let err = validate_bearer(&cfg("secret-b"), &token).unwrap_err();
        assert_eq!(err.status, StatusCode::UNAUTHORIZED);
        assert_eq!(err.message, "Invalid token");
    }
}
