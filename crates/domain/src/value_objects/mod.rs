//! Value objects shared across entities.

mod difficulty;
mod scalar;
mod settings;

pub use difficulty::Difficulty;
pub use scalar::ScalarValue;
pub use settings::{
    AccessibilitySettings, ArSettings, AudioSettings, ContentFilterLevel, FontSize,
    ParentalSettings, QualityLevel, UserSettings, VisualSettings,
};
