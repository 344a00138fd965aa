//! Mission entity - a learning activity tied to a location
//!
//! Missions come from the seed catalog. At runtime only `progress`,
//! `unlocked` and `completed` change.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{Difficulty, Location, MissionId, ScalarValue};

/// Progress value a completed mission is forced to
pub const MISSION_COMPLETE_PROGRESS: i32 = 100;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Mission {
    pub id: MissionId,
    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    pub mission_type: MissionType,
    pub category: MissionCategory,
    pub location: Location,
    pub difficulty: Difficulty,
    pub points: u32,
    pub unlocked: bool,
    pub completed: bool,
    /// Percentage, stored verbatim (not clamped to 0-100)
    pub progress: i32,
    pub requirements: Vec<MissionRequirement>,
    pub rewards: Vec<Reward>,
}

impl Mission {
    /// Copy with `progress` overwritten.
    pub fn with_progress(&self, progress: i32) -> Self {
        Self {
            progress,
            ..self.clone()
        }
    }

    /// Copy marked completed, progress forced to 100.
    pub fn completed(&self) -> Self {
        Self {
            completed: true,
            progress: MISSION_COMPLETE_PROGRESS,
            ..self.clone()
        }
    }

    /// Copy with `unlocked` set.
    pub fn unlocked(&self) -> Self {
        Self {
            unlocked: true,
            ..self.clone()
        }
    }

    /// Unlocked but not yet completed
    pub fn is_available(&self) -> bool {
        self.unlocked && !self.completed
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissionType {
    GeographicDiscovery,
    CulturalAdventure,
    LanguageLearning,
    ArExploration,
    MiniGame,
    Quiz,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissionCategory {
    Landmarks,
    Culture,
    Language,
    Nature,
    History,
    Science,
}

impl MissionCategory {
    pub const ALL: [MissionCategory; 6] = [
        Self::Landmarks,
        Self::Culture,
        Self::Language,
        Self::Nature,
        Self::History,
        Self::Science,
    ];
}

impl fmt::Display for MissionCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Landmarks => "landmarks",
            Self::Culture => "culture",
            Self::Language => "language",
            Self::Nature => "nature",
            Self::History => "history",
            Self::Science => "science",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MissionRequirement {
    #[serde(rename = "type")]
    pub requirement_type: RequirementType,
    pub value: ScalarValue,
    pub description: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequirementType {
    Level,
    Item,
    Mission,
    Location,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reward {
    #[serde(rename = "type")]
    pub reward_type: RewardType,
    pub value: ScalarValue,
    pub amount: u32,
}

impl Reward {
    pub fn new(reward_type: RewardType, value: impl Into<ScalarValue>, amount: u32) -> Self {
        Self {
            reward_type,
            value: value.into(),
            amount,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RewardType {
    Experience,
    Item,
    Badge,
    Currency,
}
