//! Password policy enforcement for registration.

use reelspro_core::config::AuthConfig;
use reelspro_core::error::AppError;

/// Validates new passwords against the configured policy.
///
/// The policy is minimum length only; registration accepts any character
/// mix above the floor.
#[derive(Debug, Clone)]
pub struct PasswordValidator {
    /// Minimum password length.
    min_length: usize,
}

impl PasswordValidator {
    /// Creates a new validator from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            min_length: config.password_min_length,
        }
    }

    /// Validates a password, returning the first violation found.
    pub fn validate(&self, password: &str) -> Result<(), AppError> {
        if password.len() < self.min_length {
            return Err(AppError::validation(format!(
                "Password must be at least {} characters",
                self.min_length
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn validator() -> PasswordValidator {
        PasswordValidator::new(&AuthConfig::default())
    }

    #[test]
    fn test_minimum_length() {
        assert!(validator().validate("secret1").is_ok());
        assert!(validator().validate("short").is_err());
    }
}
