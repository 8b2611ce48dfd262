//! Notification kind enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The event that produced a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "notification_kind", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    /// Someone liked the recipient's reel.
    Like,
    /// Someone commented on the recipient's reel.
    Comment,
}

impl NotificationKind {
    /// Return the kind as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Like => "like",
            Self::Comment => "comment",
        }
    }
}

impl fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for NotificationKind {
    type Err = reelspro_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "like" => Ok(Self::Like),
            "comment" => Ok(Self::Comment),
            _ => Err(reelspro_core::AppError::validation(format!(
                "Invalid notification kind: '{s}'. Expected one of: like, comment"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str() {
        assert_eq!(
            "like".parse::<NotificationKind>().unwrap(),
            NotificationKind::Like
        );
        assert_eq!(
            "COMMENT".parse::<NotificationKind>().unwrap(),
            NotificationKind::Comment
        );
        assert!("follow".parse::<NotificationKind>().is_err());
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&NotificationKind::Like).unwrap();
        assert_eq!(json, "\"like\"");
    }
}
