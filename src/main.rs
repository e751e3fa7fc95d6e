use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use bookings::config::AppConfig;
use bookings::db::SupabaseClient;
use bookings::handlers;
use bookings::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = AppConfig::from_env()?;

    let store = SupabaseClient::new(&config.db_project_url, &config.db_secret_key)?;
    tracing::info!("using database project at {}", config.db_project_url);

    let state = Arc::new(AppState {
        store: Box::new(store),
    });

    let app = Router::new()
        .route("/health", get(handlers::health::health))
        .route("/", get(handlers::page::load))
        .route("/api/appointments", post(handlers::api::post_appointment))
        .route("/api/customers", post(handlers::api::add_customer))
        .route("/api/customers/lookup", post(handlers::api::lookup_customer))
        .route("/api/bookings", post(handlers::api::add_booking))
        .route("/api/book", post(handlers::api::book))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state);

    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("starting server on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
