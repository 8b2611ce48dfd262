//! ReelsPro Server — Short-Form Video Sharing Backend
//!
//! Main entry point that wires all crates together and starts the server.

use std::sync::Arc;

use tracing_subscriber::{EnvFilter, fmt};

use reelspro_core::config::AppConfig;
use reelspro_core::error::AppError;

#[tokio::main]
async fn main() {
    let env = std::env::var("REELSPRO_ENV").unwrap_or_else(|_| "development".to_string());

    let config = match AppConfig::load(&env) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
        _ => {
            fmt().pretty().with_env_filter(filter).with_target(true).init();
        }
    }
}

/// Main server run function
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting ReelsPro v{}", env!("CARGO_PKG_VERSION"));

    // ── Step 1: Database connection + migrations ─────────────────
    // The pool is built exactly once, before the listener accepts, so
    // concurrent first requests never race initialization.
    tracing::info!("Connecting to database...");
    let db_pool = reelspro_database::DatabasePool::connect(&config.database)
        .await?
        .into_pool();

    tracing::info!("Running database migrations...");
    reelspro_database::migration::run_migrations(&db_pool).await?;

    // ── Step 2: Initialize repositories ──────────────────────────
    let user_repo = Arc::new(reelspro_database::repositories::UserRepository::new(
        db_pool.clone(),
    ));
    let reel_repo = Arc::new(reelspro_database::repositories::ReelRepository::new(
        db_pool.clone(),
    ));
    let notification_repo = Arc::new(
        reelspro_database::repositories::NotificationRepository::new(db_pool.clone()),
    );

    // ── Step 3: Initialize auth primitives ───────────────────────
    let password_hasher = Arc::new(reelspro_auth::password::PasswordHasher::new());
    let password_validator = Arc::new(reelspro_auth::password::PasswordValidator::new(
        &config.auth,
    ));
    let jwt_encoder = Arc::new(reelspro_auth::jwt::JwtEncoder::new(&config.auth));
    let jwt_decoder = Arc::new(reelspro_auth::jwt::JwtDecoder::new(&config.auth));

    // ── Step 4: Initialize services ──────────────────────────────
    let user_service = Arc::new(reelspro_service::user::UserService::new(
        Arc::clone(&user_repo),
        Arc::clone(&password_hasher),
        Arc::clone(&password_validator),
    ));
    let reel_service = Arc::new(reelspro_service::reel::ReelService::new(Arc::clone(
        &reel_repo,
    )));
    let interaction_service = Arc::new(reelspro_service::interaction::InteractionService::new(
        Arc::clone(&reel_repo),
        Arc::clone(&user_repo),
        Arc::clone(&notification_repo),
    ));
    let notification_service = Arc::new(reelspro_service::notification::NotificationService::new(
        Arc::clone(&notification_repo),
    ));

    // ── Step 5: Build and start HTTP server ──────────────────────
    let app_state = reelspro_api::AppState {
        config: Arc::new(config.clone()),
        db_pool: db_pool.clone(),
        jwt_encoder,
        jwt_decoder,
        user_service,
        reel_service,
        interaction_service,
        notification_service,
    };

    let app = reelspro_api::build_router(app_state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {}: {}", addr, e)))?;

    tracing::info!("ReelsPro server listening on {}", addr);

    // ── Step 6: Graceful shutdown ────────────────────────────────
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {}", e)))?;

    tracing::info!("ReelsPro server shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
