//! Server setup and initialization
//!
//! Provides the main application builder and server runner.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use chirpy_common::{AppConfig, AppError, JwtService};
use chirpy_db::{
    create_pool, run_migrations, PgChirpRepository, PgRefreshTokenRepository, PgUserRepository,
};
use chirpy_service::ServiceContextBuilder;
use chrono::Duration;
use tokio::net::TcpListener;
use tracing::info;

use crate::middleware::apply_middleware;
use crate::routes::create_router;
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    let router = create_router(&state);
    let router = apply_middleware(
        router,
        &state.config().cors,
        state.config().app.env.is_production(),
    );
    router.with_state(state)
}

/// Initialize all dependencies and create AppState
pub async fn create_app_state(config: AppConfig) -> Result<AppState, AppError> {
    // Create database pool
    info!("Connecting to PostgreSQL...");
    let db_config = chirpy_db::DatabaseConfig {
        url: config.database.url.clone(),
        max_connections: config.database.max_connections,
        min_connections: config.database.min_connections,
        ..Default::default()
    };
    let pool = create_pool(&db_config)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    info!("PostgreSQL connection established");

    // Bring the schema up to date
    run_migrations(&pool)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    info!("Database migrations applied");

    // Create JWT service
    let jwt_service = Arc::new(JwtService::new(
        &config.jwt.secret,
        config.jwt.access_token_expiry,
    ));

    // Create repositories
    let user_repo = Arc::new(PgUserRepository::new(pool.clone()));
    let chirp_repo = Arc::new(PgChirpRepository::new(pool.clone()));
    let refresh_token_repo = Arc::new(PgRefreshTokenRepository::new(pool));

    // Build service context
    let service_context = ServiceContextBuilder::new()
        .user_repo(user_repo)
        .chirp_repo(chirp_repo)
        .refresh_token_repo(refresh_token_repo)
        .jwt_service(jwt_service)
        .refresh_token_ttl(Duration::days(config.jwt.refresh_token_expiry_days))
        .build()
        .map_err(|e| AppError::Config(e.to_string()))?;

    Ok(AppState::new(service_context, config))
}

/// Run the HTTP server
pub async fn run_server(app: Router, addr: SocketAddr) -> Result<(), AppError> {
    info!("Starting HTTP server on {}", addr);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::Config(format!("Failed to bind to {}: {}", addr, e)))?;

    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::Config(format!("Server error: {}", e)))?;

    Ok(())
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let addr = config
        .api
        .address()
        .parse::<SocketAddr>()
        .map_err(|e| AppError::Config(format!("Invalid bind address: {}", e)))?;

    // Create app state
    let state = create_app_state(config).await?;

    // Build application
    let app = create_app(state);

    // Run server
    run_server(app, addr).await
}
