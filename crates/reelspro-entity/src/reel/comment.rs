//! Comment rows embedded in a reel's engagement state.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A single comment on a reel.
///
/// The sequence is append-only and ordered by insertion.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Comment {
    /// Unique comment identifier.
    pub id: Uuid,
    /// The reel this comment belongs to.
    pub reel_id: Uuid,
    /// The user who wrote the comment.
    pub author_id: Uuid,
    /// Comment text.
    pub body: String,
    /// When the comment was appended.
    pub created_at: DateTime<Utc>,
}

/// A comment joined with its author's display fields, as returned to
/// clients for rendering.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CommentWithAuthor {
    /// Comment identifier.
    pub id: Uuid,
    /// The reel this comment belongs to.
    pub reel_id: Uuid,
    /// Author identifier.
    pub author_id: Uuid,
    /// Comment text.
    pub body: String,
    /// When the comment was appended.
    pub created_at: DateTime<Utc>,
    /// Author display name.
    pub author_name: Option<String>,
    /// Author avatar URL.
    pub author_avatar_url: Option<String>,
}
