use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use axum::{
    Router, middleware,
    routing::{get, post, put},
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use hostelhub_api::middleware::require_auth;
use hostelhub_api::{AppState, AppStateInner, admin, auth, complaints, events, profile, public};
use hostelhub_core::{Core, CoreConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present
    let _ = dotenvy::dotenv();

    // Init logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "hostelhub=debug,tower_http=debug".into()),
        )
        .init();

    // Config
    let jwt_secret =
        std::env::var("HOSTELHUB_JWT_SECRET").unwrap_or_else(|_| "dev-secret-change-me".into());
    let db_path = std::env::var("HOSTELHUB_DB_PATH").unwrap_or_else(|_| "hostelhub.db".into());
    let host = std::env::var("HOSTELHUB_HOST").unwrap_or_else(|_| "0.0.0.0".into());
    let port: u16 = std::env::var("HOSTELHUB_PORT")
        .unwrap_or_else(|_| "3000".into())
        .parse()?;

    let mut core_config = CoreConfig::default();
    if let Ok(domain) = std::env::var("HOSTELHUB_EMAIL_DOMAIN") {
        core_config.email_domain = domain;
    }
    if let Ok(code) = std::env::var("HOSTELHUB_ADMIN_CODE") {
        core_config.admin_code = code;
    }
    if let Ok(offset) = std::env::var("HOSTELHUB_CLOCK_OFFSET_MIN") {
        core_config.clock_offset_min = offset.parse()?;
    }

    // Init database and core
    let db = hostelhub_db::Database::open(&PathBuf::from(&db_path))?;
    let core = Core::new(db, core_config);

    let state: AppState = Arc::new(AppStateInner { core, jwt_secret });

    // Routes
    let public_routes = Router::new()
        .route("/auth/register", post(auth::register))
        .route("/auth/login", post(auth::login))
        .route("/home", get(public::home))
        .route("/facilities", get(public::facilities))
        .route("/achievements", get(public::achievements))
        .route("/alumni", get(public::alumni))
        .with_state(state.clone());

    let protected_routes = Router::new()
        .route("/dashboard", get(profile::dashboard))
        .route("/announcements", get(profile::announcements))
        .route("/profile", get(profile::get).put(profile::update))
        .route("/complaints", post(complaints::submit))
        .route("/complaints/mine", get(complaints::mine))
        .route("/events", get(events::list))
        .route("/events/{id}/register", post(events::toggle_registration))
        // Admin surface; the role check lives in the core, not the router.
        .route("/admin/complaints", get(admin::list_complaints))
        .route("/admin/complaints/{id}/status", post(admin::update_complaint_status))
        .route("/admin/complaints/{id}/comment", post(admin::update_complaint_comment))
        .route("/admin/announcements", post(admin::add_announcement))
        .route(
            "/admin/announcements/{id}",
            put(admin::edit_announcement).delete(admin::delete_announcement),
        )
        .route("/admin/notices", post(admin::add_notice))
        .route("/admin/notices/{id}", put(admin::edit_notice).delete(admin::delete_notice))
        .route("/admin/facilities", post(admin::add_facility))
        .route(
            "/admin/facilities/{id}",
            put(admin::edit_facility).delete(admin::delete_facility),
        )
        .route("/admin/achievements", post(admin::add_achievement))
        .route(
            "/admin/achievements/{id}",
            put(admin::edit_achievement).delete(admin::delete_achievement),
        )
        .route("/admin/alumni", post(admin::add_alumni))
        .route("/admin/alumni/{id}", put(admin::edit_alumni).delete(admin::delete_alumni))
        .route("/admin/events", post(admin::add_event))
        .route("/admin/events/{id}", put(admin::edit_event).delete(admin::delete_event))
        .route("/admin/events/{id}/registrations", get(admin::event_registrations))
        .route("/admin/users", get(admin::list_users))
        .route("/admin/users/{id}", put(admin::edit_user))
        .route("/admin/students", post(admin::add_allowed_student))
        .layer(middleware::from_fn_with_state(state.clone(), require_auth))
        .with_state(state);

    let app = Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;
    info!("HostelHub server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
