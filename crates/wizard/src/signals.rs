//! Outbound effects the wizard core produces for the rest of the app:
//! where to navigate next, and what toast to show.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Navigation target emitted by commit/discard/load-failure paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "target", rename_all = "snake_case")]
pub enum Navigation {
    /// Detail view for an existing campaign.
    CampaignDetail { id: Uuid },
    /// The campaign list.
    CampaignList,
    /// Welcome view for a freshly created campaign.
    CampaignWelcome { id: Uuid },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    Success,
    Error,
}

/// A user-facing toast.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub kind: NotificationKind,
    pub title: String,
    pub description: String,
}

impl Notification {
    pub fn success(title: &str, description: &str) -> Self {
        Self {
            kind: NotificationKind::Success,
            title: title.to_string(),
            description: description.to_string(),
        }
    }

    pub fn error(title: &str, description: &str) -> Self {
        Self {
            kind: NotificationKind::Error,
            title: title.to_string(),
            description: description.to_string(),
        }
    }
}
