//! Reel entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A short-form video post.
///
/// Media lives on the external CDN; this row stores only URL references.
/// The liker set, comment sequence and saved-by set live in their own
/// tables (`reel_likes`, `reel_comments`, `saved_reels`) so that
/// engagement writes are single atomic statements.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Reel {
    /// Unique reel identifier.
    pub id: Uuid,
    /// The user who uploaded this reel.
    pub owner_id: Uuid,
    /// CDN URL of the video.
    pub video_url: String,
    /// CDN URL of the thumbnail, if one was generated.
    pub thumbnail_url: Option<String>,
    /// Caption text.
    pub caption: String,
    /// Tag strings attached at upload time.
    pub tags: Vec<String>,
    /// Whether the reel is hidden from the public feed.
    pub is_private: bool,
    /// Monotonic share counter, informational only.
    pub share_count: i64,
    /// When the reel was uploaded.
    pub created_at: DateTime<Utc>,
    /// When the reel row was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Data required to create a new reel.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateReel {
    /// Owner of the new reel.
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
}

/// A reel joined with its owner's display fields and engagement counts.
///
/// This is the row shape returned by the feed and single-reel queries;
/// the owner columns come from the `users` join and the counts from
/// correlated subqueries.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ReelWithOwner {
    /// Reel identifier.
    pub id: Uuid,
    /// Owner identifier.
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
    /// Share counter.
    pub share_count: i64,
    /// Upload time.
    pub created_at: DateTime<Utc>,
    /// Owner display name.
    pub owner_name: Option<String>,
    /// Owner avatar URL.
    pub owner_avatar_url: Option<String>,
    /// Number of users who have liked this reel.
    pub like_count: i64,
    /// Number of comments on this reel.
    pub comment_count: i64,
}
