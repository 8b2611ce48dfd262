//! Reel handlers — create, feed listing, detail, share.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use uuid::Uuid;

use reelspro_core::error::AppError;
use reelspro_service::reel::CreateReelData;

use crate::dto::request::{CreateReelRequest, FeedParams};
use crate::dto::response::{ApiResponse, CreatedReelResponse, ReelResponse, ShareResponse};
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::handlers::validate_request;
use crate::state::AppState;

/// POST /api/reels
pub async fn create_reel(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<CreateReelRequest>,
) -> Result<(StatusCode, Json<ApiResponse<CreatedReelResponse>>), ApiError> {
    validate_request(&req)?;

    let reel = state
        .reel_service
        .create_reel(
            &auth,
            CreateReelData {
                video_url: req.video_url,
                thumbnail_url: req.thumbnail_url,
                caption: req.caption,
                tags: req.tags,
                is_private: req.is_private,
            },
        )
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok(CreatedReelResponse::from(reel))),
    ))
}

/// GET /api/reels?user_id=
pub async fn list_reels(
    State(state): State<AppState>,
    Query(params): Query<FeedParams>,
) -> Result<Json<ApiResponse<Vec<ReelResponse>>>, ApiError> {
    let owner_id = params
        .user_id
        .as_deref()
        .map(|raw| {
            raw.parse::<Uuid>()
                .map_err(|_| AppError::validation(format!("Invalid user id: '{raw}'")))
        })
        .transpose()?;

    let reels = state.reel_service.feed(owner_id).await?;

    Ok(Json(ApiResponse::ok(
        reels.into_iter().map(ReelResponse::from).collect(),
    )))
}

/// GET /api/reels/{id}
pub async fn get_reel(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<ReelResponse>>, ApiError> {
    let reel = state.reel_service.get_reel(id).await?;
    Ok(Json(ApiResponse::ok(ReelResponse::from(reel))))
}

/// POST /api/reels/{id}/share
pub async fn share_reel(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<ShareResponse>>, ApiError> {
    let shares = state.reel_service.record_share(id).await?;
    Ok(Json(ApiResponse::ok(ShareResponse { shares })))
}
