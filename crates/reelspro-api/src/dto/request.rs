//! Request DTOs with validation.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Registration request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
    /// Display name.
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    /// Email address.
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
    /// Plaintext password. Length policy is enforced by the service.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Login request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    /// Email address.
    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,
    /// Password.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Create reel request body. The owner comes from the session.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateReelRequest {
    /// CDN URL of the uploaded video.
    #[validate(length(min = 1, message = "Video URL is required"))]
    pub video_url: String,
    /// CDN URL of the thumbnail.
    pub thumbnail_url: Option<String>,
    /// Caption text.
    #[validate(length(min = 1, message = "Caption is required"))]
    pub caption: String,
    /// Tag strings.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Visibility flag.
    #[serde(default)]
    pub is_private: bool,
}

/// Like toggle request body.
///
/// The reel id arrives as a string so that a missing or malformed value
/// maps to an invalid-input error rather than a body-rejection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LikeToggleRequest {
    /// Target reel id.
    pub reel_id: Option<String>,
}

/// Comment append request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentRequest {
    /// Target reel id.
    pub reel_id: Option<String>,
    /// Comment text.
    pub text: Option<String>,
}

/// Save toggle request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveToggleRequest {
    /// Target reel id.
    pub reel_id: Option<String>,
}

/// Feed query parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedParams {
    /// Optional owner filter.
    pub user_id: Option<String>,
}
