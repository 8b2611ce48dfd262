//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use sqlx::PgPool;

use reelspro_auth::jwt::decoder::JwtDecoder;
use reelspro_auth::jwt::encoder::JwtEncoder;
use reelspro_core::config::AppConfig;
use reelspro_service::interaction::InteractionService;
use reelspro_service::notification::NotificationService;
use reelspro_service::reel::ReelService;
use reelspro_service::user::UserService;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// PostgreSQL connection pool.
    pub db_pool: PgPool,
    /// JWT token encoder.
    pub jwt_encoder: Arc<JwtEncoder>,
    /// JWT token decoder and validator.
    pub jwt_decoder: Arc<JwtDecoder>,
    /// User account service.
    pub user_service: Arc<UserService>,
    /// Reel and feed service.
    pub reel_service: Arc<ReelService>,
    /// Like/comment/save interaction service.
    pub interaction_service: Arc<InteractionService>,
    /// Notification listing service.
    pub notification_service: Arc<NotificationService>,
}
