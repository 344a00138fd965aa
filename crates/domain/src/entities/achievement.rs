use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::AchievementId;

/// A badge-style goal tracked on the explorer profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Achievement {
    pub id: AchievementId,
    pub title: String,
    pub description: String,
    pub category: AchievementCategory,
    pub icon: String,
    pub unlocked: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unlocked_at: Option<DateTime<Utc>>,
    pub progress: u32,
    pub max_progress: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AchievementCategory {
    Explorer,
    Geographer,
    Linguist,
    Culturalist,
    Scientist,
    Collector,
}
