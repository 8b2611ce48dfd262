//! The interaction handlers: like toggle, comment append, save toggle.
//!
//! These are the only write paths into a reel's engagement state and the
//! only producers of notifications. Self-actions (actor = reel owner)
//! never notify.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use reelspro_core::error::AppError;
use reelspro_database::repositories::{NotificationRepository, ReelRepository, UserRepository};
use reelspro_entity::notification::NotificationKind;
use reelspro_entity::reel::{CommentWithAuthor, ReelWithOwner};

use crate::context::RequestContext;

/// Result of a like toggle.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct LikeOutcome {
    /// Post-toggle like count.
    pub likes: i64,
    /// Whether the acting user now likes the reel.
    pub is_liked: bool,
}

/// Result of a save toggle.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct SaveOutcome {
    /// Whether the reel is now in the acting user's saved set.
    pub saved: bool,
    /// Size of the acting user's saved set after the toggle.
    pub total_saved: i64,
}

/// Orchestrates engagement writes and their notification side effects.
#[derive(Debug, Clone)]
pub struct InteractionService {
    /// Reel repository.
    reel_repo: Arc<ReelRepository>,
    /// User repository (saved-reel set).
    user_repo: Arc<UserRepository>,
    /// Notification repository.
    notification_repo: Arc<NotificationRepository>,
}

impl InteractionService {
    /// Creates a new interaction service.
    pub fn new(
        reel_repo: Arc<ReelRepository>,
        user_repo: Arc<UserRepository>,
        notification_repo: Arc<NotificationRepository>,
    ) -> Self {
        Self {
            reel_repo,
            user_repo,
            notification_repo,
        }
    }

    /// Toggles the acting user's like on a reel.
    ///
    /// A notification is appended only on the not-liked → liked
    /// transition, and only when the actor is not the owner. Unlikes
    /// never notify.
    pub async fn toggle_like(
        &self,
        ctx: &RequestContext,
        reel_id: Uuid,
    ) -> Result<LikeOutcome, AppError> {
        let reel = self
            .reel_repo
            .find_by_id(reel_id)
            .await?
            .ok_or_else(|| AppError::not_found("Reel not found"))?;

        let is_liked = self.reel_repo.toggle_like(reel_id, ctx.user_id).await?;

        if is_liked && reel.owner_id != ctx.user_id {
            self.notification_repo
                .create(
                    reel.owner_id,
                    ctx.user_id,
                    NotificationKind::Like,
                    reel_id,
                    None,
                )
                .await?;
        }

        let likes = self.reel_repo.count_likes(reel_id).await?;

        info!(reel_id = %reel_id, user_id = %ctx.user_id, is_liked, "Like toggled");

        Ok(LikeOutcome { likes, is_liked })
    }

    /// Appends a comment and returns the full updated sequence with
    /// author projections.
    pub async fn add_comment(
        &self,
        ctx: &RequestContext,
        reel_id: Uuid,
        text: &str,
    ) -> Result<Vec<CommentWithAuthor>, AppError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(AppError::validation("Missing reelId or text"));
        }

        let reel = self
            .reel_repo
            .find_by_id(reel_id)
            .await?
            .ok_or_else(|| AppError::not_found("Reel not found"))?;

        self.reel_repo
            .add_comment(reel_id, ctx.user_id, text)
            .await?;

        if reel.owner_id != ctx.user_id {
            self.notification_repo
                .create(
                    reel.owner_id,
                    ctx.user_id,
                    NotificationKind::Comment,
                    reel_id,
                    Some(text),
                )
                .await?;
        }

        self.reel_repo.list_comments(reel_id).await
    }

    /// Toggles the reel's membership in the acting user's saved set.
    pub async fn toggle_save(
        &self,
        ctx: &RequestContext,
        reel_id: Uuid,
    ) -> Result<SaveOutcome, AppError> {
        if self.reel_repo.find_by_id(reel_id).await?.is_none() {
            return Err(AppError::not_found("Reel not found"));
        }

        let saved = self
            .user_repo
            .toggle_saved_reel(ctx.user_id, reel_id)
            .await?;
        let total_saved = self.user_repo.count_saved_reels(ctx.user_id).await?;

        info!(reel_id = %reel_id, user_id = %ctx.user_id, saved, "Save toggled");

        Ok(SaveOutcome { saved, total_saved })
    }

    /// Lists the acting user's saved reels with owner projections.
    pub async fn list_saved(
        &self,
        ctx: &RequestContext,
    ) -> Result<(Vec<ReelWithOwner>, i64), AppError> {
        let reels = self.reel_repo.list_saved_by_user(ctx.user_id).await?;
        let total = reels.len() as i64;
        Ok((reels, total))
    }
}
