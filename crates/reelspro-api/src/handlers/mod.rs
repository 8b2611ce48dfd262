//! HTTP request handlers, organized by domain.

pub mod auth;
pub mod health;
pub mod interaction;
pub mod notification;
pub mod reel;

use reelspro_core::error::AppError;
use validator::Validate;

/// Run DTO validation, mapping failures into the error taxonomy.
pub(crate) fn validate_request<T: Validate>(req: &T) -> Result<(), AppError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))
}
