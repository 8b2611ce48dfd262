//! Response DTOs.
//!
//! Every body this API produces is a concrete struct; handlers never
//! build dynamic JSON maps.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use reelspro_entity::notification::{NotificationKind, NotificationWithRefs};
use reelspro_entity::reel::{CommentWithAuthor, Reel, ReelWithOwner};
use reelspro_entity::user::User;

/// Standard success response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T: Serialize> {
    /// Whether the request was successful.
    pub success: bool,
    /// Response data.
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Creates a successful response.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Simple message response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Message.
    pub message: String,
}

/// User summary for responses. Never carries the password hash.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    /// User ID.
    pub id: Uuid,
    /// Email.
    pub email: String,
    /// Display name.
    pub display_name: Option<String>,
    /// Avatar URL.
    pub avatar_url: Option<String>,
    /// Created at.
    pub created_at: DateTime<Utc>,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            email: user.email.clone(),
            display_name: user.display_name.clone(),
            avatar_url: user.avatar_url.clone(),
            created_at: user.created_at,
        }
    }
}

/// Login response carrying the session token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    /// Signed session token.
    pub token: String,
    /// Token expiration.
    pub expires_at: DateTime<Utc>,
    /// User info.
    pub user: UserResponse,
}

/// Owner/actor display projection embedded in feed and notification items.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OwnerResponse {
    /// User ID.
    pub id: Uuid,
    /// Display name.
    pub display_name: Option<String>,
    /// Avatar URL.
    pub avatar_url: Option<String>,
}

/// A reel as returned by the feed and detail endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReelResponse {
    /// Reel ID.
    pub id: Uuid,
    /// Owner display projection.
    pub owner: OwnerResponse,
    /// CDN URL of the video.
    pub video_url: String,
    /// CDN URL of the thumbnail.
    pub thumbnail_url: Option<String>,
    /// Caption text.
    pub caption: String,
    /// Tag strings.
    pub tags: Vec<String>,
    /// Visibility flag.
    pub is_private: bool,
    /// Like count.
    pub likes: i64,
    /// Comment count.
    pub comments: i64,
    /// Share count.
    pub shares: i64,
    /// Upload time.
    pub created_at: DateTime<Utc>,
}

impl From<ReelWithOwner> for ReelResponse {
    fn from(row: ReelWithOwner) -> Self {
        Self {
            id: row.id,
            owner: OwnerResponse {
                id: row.owner_id,
                display_name: row.owner_name,
                avatar_url: row.owner_avatar_url,
            },
            video_url: row.video_url,
            thumbnail_url: row.thumbnail_url,
            caption: row.caption,
            tags: row.tags,
            is_private: row.is_private,
            likes: row.like_count,
            comments: row.comment_count,
            shares: row.share_count,
            created_at: row.created_at,
        }
    }
}

/// A freshly created reel, before it has any engagement.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatedReelResponse {
    /// Reel ID.
    pub id: Uuid,
    /// Owner ID.
    pub owner_id: Uuid,
    /// CDN URL of the video.
    pub video_url: String,
    /// CDN URL of the thumbnail.
    pub thumbnail_url: Option<String>,
    /// Caption text.
    pub caption: String,
    /// Tag strings.
    pub tags: Vec<String>,
    /// Visibility flag.
    pub is_private: bool,
    /// Upload time.
    pub created_at: DateTime<Utc>,
}

impl From<Reel> for CreatedReelResponse {
    fn from(reel: Reel) -> Self {
        Self {
            id: reel.id,
            owner_id: reel.owner_id,
            video_url: reel.video_url,
            thumbnail_url: reel.thumbnail_url,
            caption: reel.caption,
            tags: reel.tags,
            is_private: reel.is_private,
            created_at: reel.created_at,
        }
    }
}

/// A comment with its author projection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentResponse {
    /// Comment ID.
    pub id: Uuid,
    /// Author display projection.
    pub author: OwnerResponse,
    /// Comment text.
    pub text: String,
    /// When the comment was appended.
    pub created_at: DateTime<Utc>,
}

impl From<CommentWithAuthor> for CommentResponse {
    fn from(row: CommentWithAuthor) -> Self {
        Self {
            id: row.id,
            author: OwnerResponse {
                id: row.author_id,
                display_name: row.author_name,
                avatar_url: row.author_avatar_url,
            },
            text: row.body,
            created_at: row.created_at,
        }
    }
}

/// Like toggle result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LikeToggleResponse {
    /// Post-toggle like count.
    pub likes: i64,
    /// Whether the acting user now likes the reel.
    pub is_liked: bool,
}

/// Comment append result: the full updated sequence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentListResponse {
    /// All comments on the reel, insertion-ordered.
    pub comments: Vec<CommentResponse>,
}

/// Save toggle result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveToggleResponse {
    /// Whether the reel is now saved.
    pub saved: bool,
    /// Size of the user's saved set after the toggle.
    pub total_saved: i64,
}

/// Saved reels listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedReelsResponse {
    /// The saved reels, most recently saved first.
    pub saved_reels: Vec<ReelResponse>,
    /// Total saved count.
    pub total_saved: i64,
}

/// Share counter bump result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShareResponse {
    /// New share count.
    pub shares: i64,
}

/// Reel summary embedded in a notification.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReelSummaryResponse {
    /// Reel ID.
    pub id: Uuid,
    /// Caption text.
    pub caption: String,
    /// CDN URL of the thumbnail.
    pub thumbnail_url: Option<String>,
}

/// A notification with actor and reel references resolved.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationResponse {
    /// Notification ID.
    pub id: Uuid,
    /// What happened.
    pub kind: NotificationKind,
    /// Who did it.
    pub from: OwnerResponse,
    /// The reel involved.
    pub reel: ReelSummaryResponse,
    /// Comment text for comment notifications.
    pub comment_text: Option<String>,
    /// Read flag.
    pub is_read: bool,
    /// Creation time.
    pub created_at: DateTime<Utc>,
}

impl From<NotificationWithRefs> for NotificationResponse {
    fn from(row: NotificationWithRefs) -> Self {
        Self {
            id: row.id,
            kind: row.kind,
            from: OwnerResponse {
                id: row.actor_id,
                display_name: row.actor_name,
                avatar_url: row.actor_avatar_url,
            },
            reel: ReelSummaryResponse {
                id: row.reel_id,
                caption: row.reel_caption,
                thumbnail_url: row.reel_thumbnail_url,
            },
            comment_text: row.comment_text,
            is_read: row.is_read,
            created_at: row.created_at,
        }
    }
}

/// Notification listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationListResponse {
    /// The recipient's notifications, newest first.
    pub notifications: Vec<NotificationResponse>,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status.
    pub status: String,
    /// Version.
    pub version: String,
}

/// Detailed health response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetailedHealthResponse {
    /// Overall status.
    pub status: String,
    /// Database status.
    pub database: String,
}
