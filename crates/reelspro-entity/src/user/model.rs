//! User entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A registered ReelsPro account.
///
/// Accounts originate either from credential registration (password hash
/// present) or from a first OAuth sign-in (provider id present, no hash).
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    /// Unique user identifier.
    pub id: Uuid,
    /// Email address, stored lowercased. Unique across the store.
    pub email: String,
    /// Argon2 password hash. `None` for OAuth-only accounts.
    #[serde(skip_serializing)]
    pub password_hash: Option<String>,
    /// Provider account id for OAuth-originated accounts.
    pub oauth_provider_id: Option<String>,
    /// Human-readable display name.
    pub display_name: Option<String>,
    /// Avatar image URL on the media CDN.
    pub avatar_url: Option<String>,
    /// When the user was created.
    pub created_at: DateTime<Utc>,
    /// When the user was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Data required to create a new user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUser {
    /// Email address (already lowercased and trimmed by the caller).
    pub email: String,
    /// Pre-hashed password. `None` for OAuth accounts.
    pub password_hash: Option<String>,
    /// Provider account id for OAuth accounts.
    pub oauth_provider_id: Option<String>,
    /// Display name (optional).
    pub display_name: Option<String>,
    /// Avatar URL (optional).
    pub avatar_url: Option<String>,
}

