//! Notification handlers.

use axum::Json;
use axum::extract::State;

use crate::dto::response::{ApiResponse, NotificationListResponse, NotificationResponse};
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// GET /api/notifications
pub async fn list_notifications(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<NotificationListResponse>>, ApiError> {
    let notifications = state.notification_service.list_notifications(&auth).await?;

    Ok(Json(ApiResponse::ok(NotificationListResponse {
        notifications: notifications
            .into_iter()
            .map(NotificationResponse::from)
            .collect(),
    })))
}
