//! Notification repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use reelspro_core::error::{AppError, ErrorKind};
use reelspro_core::result::AppResult;
use reelspro_entity::notification::{Notification, NotificationKind, NotificationWithRefs};

/// Repository for the append-only notification log.
#[derive(Debug, Clone)]
pub struct NotificationRepository {
    pool: PgPool,
}

impl NotificationRepository {
    /// Create a new notification repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Append a notification.
    ///
    /// The self-action check (actor = recipient) belongs to the service
    /// layer; the repository appends unconditionally.
    pub async fn create(
        &self,
        recipient_id: Uuid,
        actor_id: Uuid,
        kind: NotificationKind,
        reel_id: Uuid,
        comment_text: Option<&str>,
    ) -> AppResult<Notification> {
        sqlx::query_as::<_, Notification>(
            "INSERT INTO notifications (recipient_id, actor_id, kind, reel_id, comment_text) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING *",
        )
        .bind(recipient_id)
        .bind(actor_id)
        .bind(kind)
        .bind(reel_id)
        .bind(comment_text)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to create notification", e)
        })
    }

    /// List a recipient's notifications newest-first with actor and reel
    /// display fields resolved.
    pub async fn list_for_recipient(
        &self,
        recipient_id: Uuid,
    ) -> AppResult<Vec<NotificationWithRefs>> {
        sqlx::query_as::<_, NotificationWithRefs>(
            "SELECT n.id, n.recipient_id, n.actor_id, n.kind, n.reel_id, n.comment_text, \
                    n.is_read, n.created_at, \
                    u.display_name AS actor_name, u.avatar_url AS actor_avatar_url, \
                    r.caption AS reel_caption, r.thumbnail_url AS reel_thumbnail_url \
             FROM notifications n \
             JOIN users u ON u.id = n.actor_id \
             JOIN reels r ON r.id = n.reel_id \
             WHERE n.recipient_id = $1 \
             ORDER BY n.created_at DESC",
        )
        .bind(recipient_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list notifications", e))
    }
}
