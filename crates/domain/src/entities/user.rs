//! User entity - the explorer profile
//!
//! A user owns exactly one avatar, one passport and one settings bundle.
//! Leveling is display-only: experience accumulates, but nothing in this
//! crate moves `level`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{Achievement, Avatar, Passport, UserId, UserSettings};

/// Experience needed per level before the next one
pub const XP_PER_LEVEL: i64 = 1000;

pub const DEFAULT_EXPLORER_NAME: &str = "Young Explorer";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub avatar: Avatar,
    pub level: u32,
    /// Not validated; callers may store any value, negative included
    pub experience: i64,
    pub passport: Passport,
    pub achievements: Vec<Achievement>,
    pub settings: UserSettings,
    pub created_at: DateTime<Utc>,
    pub last_active: DateTime<Utc>,
}

impl User {
    /// The built-in default explorer used when an update arrives before any
    /// profile exists.
    pub fn default_explorer(now: DateTime<Utc>) -> Self {
        Self {
            id: UserId::new("1"),
            name: DEFAULT_EXPLORER_NAME.to_string(),
            avatar: Avatar::starter(),
            level: 1,
            experience: 0,
            passport: Passport::empty("passport1"),
            achievements: Vec::new(),
            settings: UserSettings::default(),
            created_at: now,
            last_active: now,
        }
    }

    /// Experience threshold shown for the current level.
    pub fn experience_to_next_level(&self) -> i64 {
        i64::from(self.level) * XP_PER_LEVEL
    }

    /// Fraction of the current level's threshold reached, for progress bars.
    ///
    /// Not clamped: out-of-range experience yields values below 0 or above 1.
    pub fn level_progress(&self) -> f64 {
        let threshold = self.experience_to_next_level();
        if threshold == 0 {
            return 0.0;
        }
        self.experience as f64 / threshold as f64
    }

    /// Shallow-merge a patch over this user and stamp `last_active`.
    ///
    /// Fields absent from the patch keep their current value. `last_active`
    /// is always overwritten with `now`, even when the patch carries one.
    pub fn merge(self, patch: UserPatch, now: DateTime<Utc>) -> Self {
        Self {
            id: patch.id.unwrap_or(self.id),
            name: patch.name.unwrap_or(self.name),
            avatar: patch.avatar.unwrap_or(self.avatar),
            level: patch.level.unwrap_or(self.level),
            experience: patch.experience.unwrap_or(self.experience),
            passport: patch.passport.unwrap_or(self.passport),
            achievements: patch.achievements.unwrap_or(self.achievements),
            settings: patch.settings.unwrap_or(self.settings),
            created_at: patch.created_at.unwrap_or(self.created_at),
            last_active: now,
        }
    }
}

/// Partial user update; `None` fields are left untouched by [`User::merge`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<UserId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<Avatar>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub experience: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub passport: Option<Passport>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub achievements: Option<Vec<Achievement>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub settings: Option<UserSettings>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl UserPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn avatar(mut self, avatar: Avatar) -> Self {
        self.avatar = Some(avatar);
        self
    }

    pub fn level(mut self, level: u32) -> Self {
        self.level = Some(level);
        self
    }

    pub fn experience(mut self, experience: i64) -> Self {
        self.experience = Some(experience);
        self
    }

    pub fn passport(mut self, passport: Passport) -> Self {
        self.passport = Some(passport);
        self
    }

    pub fn achievements(mut self, achievements: Vec<Achievement>) -> Self {
        self.achievements = Some(achievements);
        self
    }

    pub fn settings(mut self, settings: UserSettings) -> Self {
        self.settings = Some(settings);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0)
            .single()
            .expect("valid timestamp")
    }

    #[test]
    fn merge_overwrites_only_patched_fields() {
        let user = User::default_explorer(t0());
        let later = t0() + Duration::minutes(5);

        let merged = user
            .clone()
            .merge(UserPatch::new().name("Ada").experience(250), later);

        assert_eq!(merged.name, "Ada");
        assert_eq!(merged.experience, 250);
        assert_eq!(merged.level, user.level);
        assert_eq!(merged.avatar, user.avatar);
        assert_eq!(merged.created_at, user.created_at);
        assert_eq!(merged.last_active, later);
    }

    #[test]
    fn merge_accepts_negative_experience() {
        let merged = User::default_explorer(t0()).merge(UserPatch::new().experience(-40), t0());
        assert_eq!(merged.experience, -40);
    }

    #[test]
    fn threshold_scales_with_level() {
        let mut user = User::default_explorer(t0());
        assert_eq!(user.experience_to_next_level(), 1000);

        user.level = 3;
        user.experience = 1500;
        assert_eq!(user.experience_to_next_level(), 3000);
        assert!((user.level_progress() - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn dates_round_trip_as_rfc3339() {
        let user = User::default_explorer(t0());
        let json = serde_json::to_value(&user).expect("serialize");
        assert_eq!(json["createdAt"], "2024-03-01T09:00:00Z");

        let back: User = serde_json::from_value(json).expect("deserialize");
        assert_eq!(back.created_at, t0());
        assert_eq!(back, user);
    }
}
