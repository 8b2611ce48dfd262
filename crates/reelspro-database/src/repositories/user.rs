//! User repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use reelspro_core::error::{AppError, ErrorKind};
use reelspro_core::result::AppResult;
use reelspro_entity::user::{CreateUser, User};

/// Repository for user CRUD and query operations.
#[derive(Debug, Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    /// Create a new user repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a user by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find user by id", e))
    }

    /// Find a user by email (case-insensitive).
    pub async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE LOWER(email) = LOWER($1)")
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find user by email", e)
            })
    }

    /// Create a new user.
    pub async fn create(&self, data: &CreateUser) -> AppResult<User> {
        sqlx::query_as::<_, User>(
            "INSERT INTO users (email, password_hash, oauth_provider_id, display_name, avatar_url) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING *",
        )
        .bind(&data.email)
        .bind(&data.password_hash)
        .bind(&data.oauth_provider_id)
        .bind(&data.display_name)
        .bind(&data.avatar_url)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err) if db_err.constraint() == Some("users_email_key") => {
                AppError::conflict("Email already in use".to_string())
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create user", e),
        })
    }

    /// Toggle a reel's membership in the user's saved set.
    ///
    /// Removes the `(user_id, reel_id)` row if present, inserts it
    /// otherwise. Both branches are single atomic statements; racing
    /// toggles from the same user serialize on the composite key.
    /// Returns the new saved state.
    pub async fn toggle_saved_reel(&self, user_id: Uuid, reel_id: Uuid) -> AppResult<bool> {
        let removed = sqlx::query("DELETE FROM saved_reels WHERE user_id = $1 AND reel_id = $2")
            .bind(user_id)
            .bind(reel_id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to unsave reel", e))?;

        if removed.rows_affected() > 0 {
            return Ok(false);
        }

        sqlx::query(
            "INSERT INTO saved_reels (user_id, reel_id) VALUES ($1, $2) \
             ON CONFLICT (user_id, reel_id) DO NOTHING",
        )
        .bind(user_id)
        .bind(reel_id)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to save reel", e))?;

        Ok(true)
    }

    /// Count the reels in a user's saved set.
    pub async fn count_saved_reels(&self, user_id: Uuid) -> AppResult<i64> {
        sqlx::query_scalar("SELECT COUNT(*) FROM saved_reels WHERE user_id = $1")
            .bind(user_id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to count saved reels", e)
            })
    }
}
