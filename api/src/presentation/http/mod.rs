pub mod auth;
pub mod bookings;
pub mod error;
pub mod extract;
pub mod health;
pub mod payments;
pub mod protected;
pub mod resorts;
pub mod room_types;
pub mod rooms;

use axum::Router;

use crate::bootstrap::app_context::AppContext;

/// Every resource router mounted under `/api`. Health and docs are added by
/// the binary because they need the pool and the OpenAPI document.
pub fn api_routes(ctx: AppContext) -> Router {
    Router::new()
        .nest("/api/auth", auth::routes(ctx.clone()))
        .nest("/api", protected::routes(ctx.clone()))
        .nest("/api", resorts::routes(ctx.clone()))
        .nest("/api", room_types::routes(ctx.clone()))
        .nest("/api", rooms::routes(ctx.clone()))
        .nest("/api", bookings::routes(ctx.clone()))
        .nest("/api", payments::routes(ctx))
}
