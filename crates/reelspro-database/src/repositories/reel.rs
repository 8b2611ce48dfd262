//! Reel repository implementation.
//!
//! Engagement state (likes, comments, saves) is mutated through single
//! atomic statements against the side tables rather than load-mutate-save
//! of the reel row, so concurrent writers never overwrite each other.

use sqlx::PgPool;
use uuid::Uuid;

use reelspro_core::error::{AppError, ErrorKind};
use reelspro_core::result::AppResult;
use reelspro_entity::reel::{Comment, CommentWithAuthor, CreateReel, Reel, ReelWithOwner};

/// Columns selected for the joined feed/detail projection.
const REEL_WITH_OWNER: &str = "SELECT r.id, r.owner_id, r.video_url, r.thumbnail_url, r.caption, r.tags, \
            r.is_private, r.share_count, r.created_at, \
            u.display_name AS owner_name, u.avatar_url AS owner_avatar_url, \
            (SELECT COUNT(*) FROM reel_likes l WHERE l.reel_id = r.id) AS like_count, \
            (SELECT COUNT(*) FROM reel_comments c WHERE c.reel_id = r.id) AS comment_count \
     FROM reels r JOIN users u ON u.id = r.owner_id";

/// Repository for reel CRUD and engagement operations.
#[derive(Debug, Clone)]
pub struct ReelRepository {
    pool: PgPool,
}

impl ReelRepository {
    /// Create a new reel repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a new reel.
    pub async fn create(&self, data: &CreateReel) -> AppResult<Reel> {
        sqlx::query_as::<_, Reel>(
            "INSERT INTO reels (owner_id, video_url, thumbnail_url, caption, tags, is_private) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING *",
        )
        .bind(data.owner_id)
        .bind(&data.video_url)
        .bind(&data.thumbnail_url)
        .bind(&data.caption)
        .bind(&data.tags)
        .bind(data.is_private)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create reel", e))
    }

    /// Find a reel row by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Reel>> {
        sqlx::query_as::<_, Reel>("SELECT * FROM reels WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find reel by id", e))
    }

    /// Find a reel joined with its owner projection and engagement counts.
    pub async fn find_with_owner(&self, id: Uuid) -> AppResult<Option<ReelWithOwner>> {
        sqlx::query_as::<_, ReelWithOwner>(&format!("{REEL_WITH_OWNER} WHERE r.id = $1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find reel", e))
    }

    /// List public reels newest-first with owner projections.
    pub async fn list_feed(&self) -> AppResult<Vec<ReelWithOwner>> {
        sqlx::query_as::<_, ReelWithOwner>(&format!(
            "{REEL_WITH_OWNER} WHERE NOT r.is_private ORDER BY r.created_at DESC"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list feed", e))
    }

    /// List one owner's reels newest-first, private included.
    pub async fn list_by_owner(&self, owner_id: Uuid) -> AppResult<Vec<ReelWithOwner>> {
        sqlx::query_as::<_, ReelWithOwner>(&format!(
            "{REEL_WITH_OWNER} WHERE r.owner_id = $1 ORDER BY r.created_at DESC"
        ))
        .bind(owner_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list reels by owner", e)
        })
    }

    /// List the reels a user has saved, most recently saved first.
    pub async fn list_saved_by_user(&self, user_id: Uuid) -> AppResult<Vec<ReelWithOwner>> {
        sqlx::query_as::<_, ReelWithOwner>(&format!(
            "{REEL_WITH_OWNER} JOIN saved_reels s ON s.reel_id = r.id \
             WHERE s.user_id = $1 ORDER BY s.created_at DESC"
        ))
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list saved reels", e))
    }

    /// Toggle a user's membership in the reel's liker set.
    ///
    /// Removes the `(reel_id, user_id)` row if present, inserts it
    /// otherwise. The composite primary key guarantees at most one like
    /// per user and serializes racing toggles from the same user.
    /// Returns the new liked state.
    pub async fn toggle_like(&self, reel_id: Uuid, user_id: Uuid) -> AppResult<bool> {
        let removed = sqlx::query("DELETE FROM reel_likes WHERE reel_id = $1 AND user_id = $2")
            .bind(reel_id)
            .bind(user_id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to unlike reel", e))?;

        if removed.rows_affected() > 0 {
            return Ok(false);
        }

        sqlx::query(
            "INSERT INTO reel_likes (reel_id, user_id) VALUES ($1, $2) \
             ON CONFLICT (reel_id, user_id) DO NOTHING",
        )
        .bind(reel_id)
        .bind(user_id)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to like reel", e))?;

        Ok(true)
    }

    /// Count the likes on a reel.
    pub async fn count_likes(&self, reel_id: Uuid) -> AppResult<i64> {
        sqlx::query_scalar("SELECT COUNT(*) FROM reel_likes WHERE reel_id = $1")
            .bind(reel_id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count likes", e))
    }

    /// Append a comment to the reel's comment sequence.
    pub async fn add_comment(
        &self,
        reel_id: Uuid,
        author_id: Uuid,
        body: &str,
    ) -> AppResult<Comment> {
        sqlx::query_as::<_, Comment>(
            "INSERT INTO reel_comments (reel_id, author_id, body) \
             VALUES ($1, $2, $3) \
             RETURNING *",
        )
        .bind(reel_id)
        .bind(author_id)
        .bind(body)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to add comment", e))
    }

    /// List a reel's comments in insertion order with author projections.
    pub async fn list_comments(&self, reel_id: Uuid) -> AppResult<Vec<CommentWithAuthor>> {
        sqlx::query_as::<_, CommentWithAuthor>(
            "SELECT c.id, c.reel_id, c.author_id, c.body, c.created_at, \
                    u.display_name AS author_name, u.avatar_url AS author_avatar_url \
             FROM reel_comments c JOIN users u ON u.id = c.author_id \
             WHERE c.reel_id = $1 ORDER BY c.created_at ASC, c.id ASC",
        )
        .bind(reel_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list comments", e))
    }

    /// Atomically bump the reel's share counter and return the new value.
    pub async fn increment_share_count(&self, reel_id: Uuid) -> AppResult<Option<i64>> {
        sqlx::query_scalar(
            "UPDATE reels SET share_count = share_count + 1, updated_at = NOW() \
             WHERE id = $1 RETURNING share_count",
        )
        .bind(reel_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to increment share count", e)
        })
    }
}
