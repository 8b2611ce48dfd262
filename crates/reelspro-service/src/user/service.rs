//! User account operations — registration, credential login, OAuth upsert.

use std::sync::Arc;

use tracing::info;

use reelspro_auth::password::{PasswordHasher, PasswordValidator};
use reelspro_core::error::AppError;
use reelspro_database::repositories::UserRepository;
use reelspro_entity::user::{CreateUser, User};

use crate::context::RequestContext;

/// Handles user account lifecycle operations.
#[derive(Debug, Clone)]
pub struct UserService {
    /// User repository.
    user_repo: Arc<UserRepository>,
    /// Password hasher.
    hasher: Arc<PasswordHasher>,
    /// Password policy validator.
    validator: Arc<PasswordValidator>,
}

/// Data for a credential registration.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct RegisterData {
    /// Display name.
    pub display_name: String,
    /// Email address (raw, normalized here).
    pub email: String,
    /// Plaintext password.
    pub password: String,
}

impl UserService {
    /// Creates a new user service.
    pub fn new(
        user_repo: Arc<UserRepository>,
        hasher: Arc<PasswordHasher>,
        validator: Arc<PasswordValidator>,
    ) -> Self {
        Self {
            user_repo,
            hasher,
            validator,
        }
    }

    /// Registers a new credential-based account.
    ///
    /// The email is lowercased and trimmed before lookup and storage so
    /// that uniqueness is case-insensitive end to end.
    pub async fn register(&self, data: RegisterData) -> Result<User, AppError> {
        let email = normalize_email(&data.email);
        let display_name = data.display_name.trim();

        if display_name.is_empty() || email.is_empty() {
            return Err(AppError::validation("Name, email and password are required"));
        }
        if !email.contains('@') || !email.contains('.') {
            return Err(AppError::validation("Invalid email format"));
        }
        self.validator.validate(&data.password)?;

        if self.user_repo.find_by_email(&email).await?.is_some() {
            return Err(AppError::validation("User already exists with this email"));
        }

        let password_hash = self.hasher.hash_password(&data.password)?;

        let user = self
            .user_repo
            .create(&CreateUser {
                email,
                password_hash: Some(password_hash),
                oauth_provider_id: None,
                display_name: Some(display_name.to_string()),
                avatar_url: None,
            })
            .await?;

        info!(user_id = %user.id, "User registered");

        Ok(user)
    }

    /// Verifies credentials and returns the account on success.
    pub async fn authenticate(&self, email: &str, password: &str) -> Result<User, AppError> {
        let email = normalize_email(email);

        let user = self
            .user_repo
            .find_by_email(&email)
            .await?
            .ok_or_else(|| {
                AppError::authentication("No user found with this email. Please register first.")
            })?;

        let Some(hash) = user.password_hash.as_deref() else {
            return Err(AppError::authentication(
                "Please use social login or reset your password",
            ));
        };

        if !self.hasher.verify_password(password, hash)? {
            return Err(AppError::authentication("Invalid email or password"));
        }

        Ok(user)
    }

    /// Finds or creates the account backing an OAuth sign-in.
    ///
    /// OAuth accounts carry no password hash; an existing account with the
    /// same email is reused as-is.
    pub async fn upsert_oauth_user(
        &self,
        email: &str,
        display_name: Option<String>,
        avatar_url: Option<String>,
        provider_account_id: Option<String>,
    ) -> Result<User, AppError> {
        let email = normalize_email(email);

        if let Some(existing) = self.user_repo.find_by_email(&email).await? {
            return Ok(existing);
        }

        let user = self
            .user_repo
            .create(&CreateUser {
                email,
                password_hash: None,
                oauth_provider_id: provider_account_id,
                display_name,
                avatar_url,
            })
            .await?;

        info!(user_id = %user.id, "OAuth user created");

        Ok(user)
    }

    /// Gets the current user's full profile.
    pub async fn get_profile(&self, ctx: &RequestContext) -> Result<User, AppError> {
        self.user_repo
            .find_by_id(ctx.user_id)
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))
    }
}

/// Lowercase and trim an email for case-insensitive handling.
fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_email() {
        assert_eq!(normalize_email("  A@X.Com "), "a@x.com");
        assert_eq!(normalize_email("a@x.com"), "a@x.com");
    }
}
