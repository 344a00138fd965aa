//! Explorer settings value object
//!
//! Settings travel inside the persisted user record, so the JSON field names
//! are part of the storage format. Defaults mirror what a freshly created
//! explorer starts with.

use serde::{Deserialize, Serialize};

/// All per-explorer settings bundles
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct UserSettings {
    pub audio: AudioSettings,
    pub visual: VisualSettings,
    pub accessibility: AccessibilitySettings,
    pub parental: ParentalSettings,
    pub ar: ArSettings,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QualityLevel {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FontSize {
    Small,
    Medium,
    Large,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentFilterLevel {
    Strict,
    Moderate,
    Relaxed,
}

// ============================================================================
// Audio
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AudioSettings {
    pub master_volume: f64,
    pub music_volume: f64,
    pub sfx_volume: f64,
    pub voice_volume: f64,
    pub enabled: bool,
}

impl Default for AudioSettings {
    fn default() -> Self {
        Self {
            master_volume: 0.8,
            music_volume: 0.7,
            sfx_volume: 0.9,
            voice_volume: 0.8,
            enabled: true,
        }
    }
}

// ============================================================================
// Visual
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisualSettings {
    pub quality: QualityLevel,
    pub brightness: f64,
    pub contrast: f64,
    pub color_blind_mode: bool,
    pub reduced_motion: bool,
}

impl Default for VisualSettings {
    fn default() -> Self {
        Self {
            quality: QualityLevel::Medium,
            brightness: 0.5,
            contrast: 0.5,
            color_blind_mode: false,
            reduced_motion: false,
        }
    }
}

// ============================================================================
// Accessibility
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessibilitySettings {
    pub font_size: FontSize,
    pub high_contrast: bool,
    pub screen_reader: bool,
    pub subtitles: bool,
    #[serde(rename = "simplifiedUI")]
    pub simplified_ui: bool,
}

impl Default for AccessibilitySettings {
    fn default() -> Self {
        Self {
            font_size: FontSize::Medium,
            high_contrast: false,
            screen_reader: false,
            subtitles: true,
            simplified_ui: false,
        }
    }
}

// ============================================================================
// Parental controls
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParentalSettings {
    /// Daily play limit in minutes
    pub time_limit: u32,
    pub content_filter: ContentFilterLevel,
    pub progress_reports: bool,
    pub purchase_restrictions: bool,
    pub eye_care_reminders: bool,
    pub posture_reminders: bool,
}

impl Default for ParentalSettings {
    fn default() -> Self {
        Self {
            time_limit: 60,
            content_filter: ContentFilterLevel::Moderate,
            progress_reports: true,
            purchase_restrictions: true,
            eye_care_reminders: true,
            posture_reminders: true,
        }
    }
}

// ============================================================================
// AR
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArSettings {
    pub quality: QualityLevel,
    pub tracking: bool,
    pub occlusion: bool,
    pub lighting: bool,
    pub safety_mode: bool,
}

impl Default for ArSettings {
    fn default() -> Self {
        Self {
            quality: QualityLevel::Medium,
            tracking: true,
            occlusion: true,
            lighting: true,
            safety_mode: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_field_names_are_camel_case() {
        let json = serde_json::to_value(UserSettings::default()).expect("serialize");
        assert_eq!(json["audio"]["masterVolume"], 0.8);
        assert_eq!(json["accessibility"]["simplifiedUI"], false);
        assert_eq!(json["parental"]["contentFilter"], "moderate");
        assert_eq!(json["ar"]["safetyMode"], true);
    }
}
