//! Notification entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::kind::NotificationKind;

/// A record of a like or comment event directed at a reel owner.
///
/// Created only when the actor is not the recipient; self-actions are
/// suppressed at the service layer.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Notification {
    /// Unique notification identifier.
    pub id: Uuid,
    /// The reel owner being notified.
    pub recipient_id: Uuid,
    /// The user who performed the action.
    pub actor_id: Uuid,
    /// What happened.
    pub kind: NotificationKind,
    /// The reel the action was performed on.
    pub reel_id: Uuid,
    /// Comment text, present only for `kind = comment`.
    pub comment_text: Option<String>,
    /// Read flag. No write path sets this; notifications stay unread.
    pub is_read: bool,
    /// When the notification was created.
    pub created_at: DateTime<Utc>,
}

/// A notification joined with actor and reel display fields for the
/// recipient's listing.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct NotificationWithRefs {
    /// Notification identifier.
    pub id: Uuid,
    /// The recipient.
    pub recipient_id: Uuid,
    /// The acting user.
    pub actor_id: Uuid,
    /// What happened.
    pub kind: NotificationKind,
    /// The reel involved.
    pub reel_id: Uuid,
    /// Comment text for comment notifications.
    pub comment_text: Option<String>,
    /// Read flag.
    pub is_read: bool,
    /// Creation time.
    pub created_at: DateTime<Utc>,
    /// Actor display name.
    pub actor_name: Option<String>,
    /// Actor avatar URL.
    pub actor_avatar_url: Option<String>,
    /// Caption of the reel involved.
    pub reel_caption: String,
    /// Thumbnail of the reel involved.
    pub reel_thumbnail_url: Option<String>,
}
