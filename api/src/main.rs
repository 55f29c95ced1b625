use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::MatchedPath;
use dotenvy::dotenv;
use http::HeaderValue;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use resort_api::bootstrap::app_context::{AppContext, AppServices};
use resort_api::bootstrap::config::Config;
use resort_api::infrastructure::db::repositories::{
    booking_repository_sqlx::SqlxBookingRepository,
    payment_repository_sqlx::SqlxPaymentRepository, resort_repository_sqlx::SqlxResortRepository,
    room_repository_sqlx::SqlxRoomRepository, room_type_repository_sqlx::SqlxRoomTypeRepository,
    user_repository_sqlx::SqlxUserRepository,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
        paths(
            resort_api::presentation::http::auth::register,
            resort_api::presentation::http::auth::login,
            resort_api::presentation::http::auth::me,
            resort_api::presentation::http::protected::profile,
            resort_api::presentation::http::protected::admin,
            resort_api::presentation::http::resorts::list_resorts,
            resort_api::presentation::http::resorts::get_resort,
            resort_api::presentation::http::resorts::create_resort,
            resort_api::presentation::http::resorts::update_resort,
            resort_api::presentation::http::resorts::delete_resort,
            resort_api::presentation::http::room_types::list_room_types,
            resort_api::presentation::http::room_types::create_room_type,
            resort_api::presentation::http::room_types::get_room_type,
            resort_api::presentation::http::room_types::update_room_type,
            resort_api::presentation::http::room_types::delete_room_type,
            resort_api::presentation::http::rooms::list_rooms,
            resort_api::presentation::http::rooms::create_room,
            resort_api::presentation::http::rooms::get_room,
            resort_api::presentation::http::rooms::update_room,
            resort_api::presentation::http::rooms::delete_room,
            resort_api::presentation::http::bookings::list_my_bookings,
            resort_api::presentation::http::bookings::list_resort_bookings,
            resort_api::presentation::http::bookings::create_booking,
            resort_api::presentation::http::bookings::update_booking,
            resort_api::presentation::http::bookings::cancel_booking,
            resort_api::presentation::http::payments::list_payments,
            resort_api::presentation::http::payments::record_payment,
            resort_api::presentation::http::health::health,
        ),
        components(schemas(
            resort_api::presentation::http::error::MessageResponse,
            resort_api::presentation::http::auth::RegisterRequest,
            resort_api::presentation::http::auth::LoginRequest,
            resort_api::presentation::http::auth::AuthResponse,
            resort_api::presentation::http::auth::UserResponse,
            resort_api::presentation::http::protected::ProtectedResponse,
            resort_api::presentation::http::resorts::ResortResponse,
            resort_api::presentation::http::resorts::CreateResortRequest,
            resort_api::presentation::http::resorts::UpdateResortRequest,
            resort_api::presentation::http::room_types::RoomTypeResponse,
            resort_api::presentation::http::room_types::CreateRoomTypeRequest,
            resort_api::presentation::http::room_types::UpdateRoomTypeRequest,
            resort_api::presentation::http::rooms::RoomResponse,
            resort_api::presentation::http::rooms::CreateRoomRequest,
            resort_api::presentation::http::rooms::UpdateRoomRequest,
            resort_api::presentation::http::bookings::BookingResponse,
            resort_api::presentation::http::bookings::CreateBookingRequest,
            resort_api::presentation::http::bookings::UpdateBookingRequest,
            resort_api::presentation::http::bookings::CancelBookingResponse,
            resort_api::presentation::http::payments::PaymentResponse,
            resort_api::presentation::http::payments::RecordPaymentRequest,
            resort_api::presentation::http::health::HealthResp,
        )),
        tags(
            (name = "Auth", description = "Registration, login and current user"),
            (name = "Protected", description = "Authenticated profile and admin area"),
            (name = "Resorts", description = "Resort catalogue and management"),
            (name = "Room Types", description = "Room categories per resort"),
            (name = "Rooms", description = "Bookable rooms per resort"),
            (name = "Bookings", description = "Reservations and their lifecycle"),
            (name = "Payments", description = "Payments recorded against bookings"),
            (name = "Health", description = "System health checks")
        )
    )]
struct ApiDoc;

fn cors_layer(cfg: &Config) -> CorsLayer {
    let methods = [
        http::Method::GET,
        http::Method::POST,
        http::Method::PUT,
        http::Method::DELETE,
        http::Method::OPTIONS,
    ];
    let headers = [http::header::CONTENT_TYPE, http::header::AUTHORIZATION];
    match cfg.frontend_url.as_deref().map(HeaderValue::from_str) {
        Some(Ok(origin)) => CorsLayer::new()
            .allow_origin(origin)
            .allow_methods(methods)
            .allow_headers(headers)
            .allow_credentials(true),
        // Production refuses to start without FRONTEND_URL, so only a bad value lands here
        _ if cfg.is_production => CorsLayer::new()
            .allow_origin(AllowOrigin::exact(HeaderValue::from_static("http://invalid")))
            .allow_methods(methods)
            .allow_headers(headers),
        _ => CorsLayer::new()
            .allow_origin(AllowOrigin::mirror_request())
            .allow_methods(methods)
            .allow_headers(headers)
            .allow_credentials(true),
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = ?e, "failed to listen for shutdown signal");
    }
    info!("shutdown_requested");
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "resort_api=debug,axum=info,tower_http=info".into()),
        )
        .init();

    let cfg = Config::from_env()?;
    info!(
        api_port = cfg.api_port,
        is_production = cfg.is_production,
        frontend_url = ?cfg.frontend_url,
        "Starting resort booking backend"
    );

    // Database
    let pool = resort_api::infrastructure::db::connect_pool(&cfg.database_url).await?;
    resort_api::infrastructure::db::migrate(&pool).await?;

    let services = AppServices::new(
        Arc::new(SqlxUserRepository::new(pool.clone())),
        Arc::new(SqlxResortRepository::new(pool.clone())),
        Arc::new(SqlxRoomTypeRepository::new(pool.clone())),
        Arc::new(SqlxRoomRepository::new(pool.clone())),
        Arc::new(SqlxBookingRepository::new(pool.clone())),
        Arc::new(SqlxPaymentRepository::new(pool.clone())),
    );
    let ctx = AppContext::new(cfg.clone(), services);

    let app = resort_api::presentation::http::api_routes(ctx)
        .nest(
            "/api",
            resort_api::presentation::http::health::routes(pool.clone()),
        )
        .merge(SwaggerUi::new("/api/docs").url("/api/openapi.json", ApiDoc::openapi()))
        .layer(cors_layer(&cfg))
        .layer(
            TraceLayer::new_for_http().make_span_with(|req: &http::Request<_>| {
                let method = req.method().clone();
                let uri = req.uri().clone();
                let matched = req
                    .extensions()
                    .get::<MatchedPath>()
                    .map(|p| p.as_str().to_string())
                    .unwrap_or_default();
                tracing::info_span!("http", %method, %uri, matched_path = %matched)
            }),
        );

    let api_addr = SocketAddr::from(([0, 0, 0, 0], cfg.api_port));
    info!(%api_addr, "HTTP API listening");
    let listener = tokio::net::TcpListener::bind(api_addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    pool.close().await;
    Ok(())
}
