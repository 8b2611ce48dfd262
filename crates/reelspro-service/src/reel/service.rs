//! Reel upload and feed assembly.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use reelspro_core::error::AppError;
use reelspro_database::repositories::ReelRepository;
use reelspro_entity::reel::{CreateReel, Reel, ReelWithOwner};

use crate::context::RequestContext;

/// Handles reel creation and read-only feed assembly.
#[derive(Debug, Clone)]
pub struct ReelService {
    /// Reel repository.
    reel_repo: Arc<ReelRepository>,
}

/// Data for creating a new reel. The owner comes from the session.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct CreateReelData {
    /// CDN URL of the uploaded video.
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

impl ReelService {
    /// Creates a new reel service.
    pub fn new(reel_repo: Arc<ReelRepository>) -> Self {
        Self { reel_repo }
    }

    /// Creates a reel owned by the current user.
    pub async fn create_reel(
        &self,
        ctx: &RequestContext,
        data: CreateReelData,
    ) -> Result<Reel, AppError> {
        if data.video_url.trim().is_empty() || data.caption.trim().is_empty() {
            return Err(AppError::validation("Video URL and caption are required"));
        }

        let reel = self
            .reel_repo
            .create(&CreateReel {
                owner_id: ctx.user_id,
                video_url: data.video_url,
                thumbnail_url: data.thumbnail_url,
                caption: data.caption,
                tags: data.tags,
                is_private: data.is_private,
            })
            .await?;

        info!(reel_id = %reel.id, owner_id = %ctx.user_id, "Reel created");

        Ok(reel)
    }

    /// Lists reels newest-first with owner projections.
    ///
    /// With an owner filter, all of that owner's reels are returned
    /// (their profile view); without one, private reels are excluded.
    pub async fn feed(&self, owner_id: Option<Uuid>) -> Result<Vec<ReelWithOwner>, AppError> {
        match owner_id {
            Some(owner) => self.reel_repo.list_by_owner(owner).await,
            None => self.reel_repo.list_feed().await,
        }
    }

    /// Fetches a single reel with its owner projection.
    pub async fn get_reel(&self, reel_id: Uuid) -> Result<ReelWithOwner, AppError> {
        self.reel_repo
            .find_with_owner(reel_id)
            .await?
            .ok_or_else(|| AppError::not_found("Reel not found"))
    }

    /// Bumps the reel's share counter and returns the new value.
    pub async fn record_share(&self, reel_id: Uuid) -> Result<i64, AppError> {
        self.reel_repo
            .increment_share_count(reel_id)
            .await?
            .ok_or_else(|| AppError::not_found("Reel not found"))
    }
}
