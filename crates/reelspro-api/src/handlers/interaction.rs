//! Interaction handlers — like toggle, comment append, save toggle,
//! saved listing.

use axum::Json;
use axum::extract::State;
use uuid::Uuid;

use reelspro_core::error::AppError;

use crate::dto::request::{CommentRequest, LikeToggleRequest, SaveToggleRequest};
use crate::dto::response::{
    ApiResponse, CommentListResponse, CommentResponse, LikeToggleResponse, ReelResponse,
    SaveToggleResponse, SavedReelsResponse,
};
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// POST /api/reels/likes
pub async fn toggle_like(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<LikeToggleRequest>,
) -> Result<Json<ApiResponse<LikeToggleResponse>>, ApiError> {
    let reel_id = parse_reel_id(req.reel_id.as_deref())?;

    let outcome = state.interaction_service.toggle_like(&auth, reel_id).await?;

    Ok(Json(ApiResponse::ok(LikeToggleResponse {
        likes: outcome.likes,
        is_liked: outcome.is_liked,
    })))
}

/// POST /api/reels/comment
pub async fn add_comment(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<CommentRequest>,
) -> Result<Json<ApiResponse<CommentListResponse>>, ApiError> {
    let (Some(raw_id), Some(text)) = (req.reel_id.as_deref(), req.text.as_deref()) else {
        return Err(AppError::validation("Missing reelId or text").into());
    };
    let reel_id = parse_reel_id(Some(raw_id))?;

    let comments = state
        .interaction_service
        .add_comment(&auth, reel_id, text)
        .await?;

    Ok(Json(ApiResponse::ok(CommentListResponse {
        comments: comments.into_iter().map(CommentResponse::from).collect(),
    })))
}

/// POST /api/saved-reels
pub async fn toggle_save(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<SaveToggleRequest>,
) -> Result<Json<ApiResponse<SaveToggleResponse>>, ApiError> {
    let reel_id = parse_reel_id(req.reel_id.as_deref())?;

    let outcome = state.interaction_service.toggle_save(&auth, reel_id).await?;

    Ok(Json(ApiResponse::ok(SaveToggleResponse {
        saved: outcome.saved,
        total_saved: outcome.total_saved,
    })))
}

/// GET /api/saved-reels
pub async fn list_saved(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<SavedReelsResponse>>, ApiError> {
    let (reels, total_saved) = state.interaction_service.list_saved(&auth).await?;

    Ok(Json(ApiResponse::ok(SavedReelsResponse {
        saved_reels: reels.into_iter().map(ReelResponse::from).collect(),
        total_saved,
    })))
}

/// Parse the reel id field shared by the interaction request bodies.
fn parse_reel_id(raw: Option<&str>) -> Result<Uuid, AppError> {
    let raw = raw.ok_or_else(|| AppError::validation("No reelId provided"))?;
    raw.parse::<Uuid>()
        .map_err(|_| AppError::validation(format!("Invalid reel id: '{raw}'")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_reel_id() {
        assert!(parse_reel_id(None).is_err());
        assert!(parse_reel_id(Some("not-a-uuid")).is_err());

        let id = Uuid::new_v4();
        assert_eq!(parse_reel_id(Some(&id.to_string())).unwrap(), id);
    }
}
