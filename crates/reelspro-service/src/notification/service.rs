//! Notification listing for the authenticated recipient.

use std::sync::Arc;

use reelspro_core::error::AppError;
use reelspro_database::repositories::NotificationRepository;
use reelspro_entity::notification::NotificationWithRefs;

use crate::context::RequestContext;

/// Read-only access to a user's notification log.
///
/// Listing has no side effect: the read flag is never set by any write
/// path, so notifications remain unread indefinitely.
#[derive(Debug, Clone)]
pub struct NotificationService {
    /// Notification repository.
    notification_repo: Arc<NotificationRepository>,
}

impl NotificationService {
    /// Creates a new notification service.
    pub fn new(notification_repo: Arc<NotificationRepository>) -> Self {
        Self { notification_repo }
    }

    /// Lists the current user's notifications newest-first with actor and
    /// reel references resolved to display projections.
    pub async fn list_notifications(
        &self,
        ctx: &RequestContext,
    ) -> Result<Vec<NotificationWithRefs>, AppError> {
        self.notification_repo
            .list_for_recipient(ctx.user_id)
            .await
    }
}
