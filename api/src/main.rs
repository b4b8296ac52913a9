//! Armonía PQR API Server
//!
//! Classification and assignment engine for resident PQRs (petitions, complaints, claims).
//! Uses hexagonal (ports & adapters) architecture for clean separation of concerns.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use axum::{routing::get, Json, Router};
use sea_orm::Database;
use serde::Serialize;
use tower_governor::governor::GovernorConfigBuilder;
use tower_governor::key_extractor::PeerIpKeyExtractor;
use tower_governor::GovernorLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod config;
mod domain;
mod entity;
mod error;
mod handlers;

#[cfg(test)]
mod test_utils;


use adapters::{
    PostgresAssignmentRuleRepository, PostgresSettingsRepository, PostgresSlaRepository,
    PostgresStaffRepository, PostgresTeamRepository,
};
use app::PqrClassificationService;
use config::Config;
use domain::ports::{SettingsRepository, SlaRepository};

/// Application state shared across all handlers
///
/// Defaults to the PostgreSQL adapters; tests swap in in-memory repositories.
pub struct AppState<S = PostgresSettingsRepository, L = PostgresSlaRepository>
where
    S: SettingsRepository,
    L: SlaRepository,
{
    pub pqr_service: Arc<PqrClassificationService<S, L>>,
}

impl<S: SettingsRepository, L: SlaRepository> Clone for AppState<S, L> {
    fn clone(&self) -> Self {
        Self {
            pqr_service: Arc::clone(&self.pqr_service),
        }
    }
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,armonia_pqr_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Armonía PQR API...");

    // Load configuration
    let config = Config::from_env()?;

    // Connect to PostgreSQL
    tracing::info!("Connecting to database...");
    let db = Database::connect(&config.database_url)
        .await
        .context("Failed to connect to database")?;
    tracing::info!("Database connected");

    // Create adapters
    let settings_repo = Arc::new(PostgresSettingsRepository::new(db.clone()));
    let rule_repo = Arc::new(PostgresAssignmentRuleRepository::new(db.clone()));
    let team_repo = Arc::new(PostgresTeamRepository::new(db.clone()));
    let staff_repo = Arc::new(PostgresStaffRepository::new(db.clone()));
    let sla_repo = Arc::new(PostgresSlaRepository::new(db.clone()));

    // Create application services
    let pqr_service = Arc::new(PqrClassificationService::new(
        settings_repo,
        rule_repo,
        team_repo,
        staff_repo,
        sla_repo,
        config.business_hours.clone(),
    ));

    let state = AppState { pqr_service };

    // Rate limiting config: 5 req/sec sustained, burst of 10
    // Uses PeerIpKeyExtractor to get client IP from socket connection
    let governor_config = Arc::new(
        GovernorConfigBuilder::default()
            .key_extractor(PeerIpKeyExtractor)
            .per_second(5)
            .burst_size(10)
            .finish()
            .context("Failed to build governor config")?,
    );

    // Rate-limited routes (classification)
    let pqr_routes: Router<AppState> = handlers::pqr_routes().layer(GovernorLayer {
        config: governor_config,
    });

    // Build router
    let app = Router::new()
        // Health check
        .route("/health", get(health))
        .merge(pqr_routes)
        // Middleware
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await
    .context("Server error")?;

    Ok(())
}
