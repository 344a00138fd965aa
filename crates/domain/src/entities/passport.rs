//! Passport entity - stamps collected on the explorer's travels
//!
//! The `total_*` counters are descriptive. Whoever awards a stamp is
//! responsible for keeping them in step with the stamp list; nothing here
//! derives them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{Location, PassportId, StampId};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Passport {
    pub id: PassportId,
    pub stamps: Vec<PassportStamp>,
    pub total_countries: u32,
    pub total_landmarks: u32,
    pub total_languages: u32,
}

impl Passport {
    /// An empty passport
    pub fn empty(id: impl Into<PassportId>) -> Self {
        Self {
            id: id.into(),
            stamps: Vec::new(),
            total_countries: 0,
            total_landmarks: 0,
            total_languages: 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PassportStamp {
    pub id: StampId,
    pub location: Location,
    pub date: DateTime<Utc>,
    #[serde(rename = "type")]
    pub stamp_type: StampType,
    pub image_url: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StampType {
    Visit,
    Mission,
    Discovery,
}
