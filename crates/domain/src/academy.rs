//! Explorer Academy onboarding state machine
//!
//! The persisted record is four flags, but only four combinations are
//! reachable. [`AcademyStage`] names those combinations and
//! [`AcademyStage::transition`] is the whole transition table:
//!
//! ```text
//! NotStarted --intro--> IntroDone --character--> CharacterCreated --oath--> Completed
//! ```
//!
//! Repeating a step already taken is a self-loop. Any other step is
//! rejected. `Completed` is terminal; only an explicit reset leaves it.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::DomainError;

/// A step the explorer can finish during onboarding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AcademyStep {
    Intro,
    Character,
    Oath,
}

impl fmt::Display for AcademyStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Intro => write!(f, "intro"),
            Self::Character => write!(f, "character"),
            Self::Oath => write!(f, "oath"),
        }
    }
}

impl FromStr for AcademyStep {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "intro" => Ok(Self::Intro),
            "character" => Ok(Self::Character),
            "oath" => Ok(Self::Oath),
            other => Err(DomainError::validation(format!(
                "Unknown academy step: {}",
                other
            ))),
        }
    }
}

/// Persisted onboarding flags
///
/// `completed` is only ever set together with `oath`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AcademyProgress {
    pub intro: bool,
    pub character: bool,
    pub oath: bool,
    pub completed: bool,
}

impl AcademyProgress {
    pub fn stage(&self) -> AcademyStage {
        AcademyStage::from(*self)
    }

    /// Apply a step through the transition table.
    pub fn advance(&self, step: AcademyStep) -> Result<Self, DomainError> {
        self.stage().transition(step).map(Self::from)
    }

    /// Screen the onboarding flow should show for this progress.
    pub fn current_screen(&self) -> AcademyScreen {
        self.stage().screen()
    }
}

/// The reachable onboarding states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AcademyStage {
    NotStarted,
    IntroDone,
    CharacterCreated,
    Completed,
}

impl AcademyStage {
    pub fn transition(self, step: AcademyStep) -> Result<Self, DomainError> {
        use AcademyStage::*;

        match (self, step) {
            (NotStarted, AcademyStep::Intro) => Ok(IntroDone),
            (IntroDone, AcademyStep::Intro) => Ok(IntroDone),
            (IntroDone, AcademyStep::Character) => Ok(CharacterCreated),
            (CharacterCreated, AcademyStep::Intro | AcademyStep::Character) => {
                Ok(CharacterCreated)
            }
            (CharacterCreated, AcademyStep::Oath) => Ok(Completed),
            (Completed, _) => Ok(Completed),
            (stage, step) => Err(DomainError::invalid_state_transition(format!(
                "cannot take academy step '{}' from {:?}",
                step, stage
            ))),
        }
    }

    /// Check if this is the terminal state
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Completed)
    }

    pub fn screen(self) -> AcademyScreen {
        match self {
            Self::NotStarted => AcademyScreen::Intro,
            Self::IntroDone => AcademyScreen::Character,
            Self::CharacterCreated => AcademyScreen::Oath,
            Self::Completed => AcademyScreen::Certificate,
        }
    }
}

impl From<AcademyStage> for AcademyProgress {
    fn from(stage: AcademyStage) -> Self {
        match stage {
            AcademyStage::NotStarted => Self::default(),
            AcademyStage::IntroDone => Self {
                intro: true,
                ..Self::default()
            },
            AcademyStage::CharacterCreated => Self {
                intro: true,
                character: true,
                ..Self::default()
            },
            AcademyStage::Completed => Self {
                intro: true,
                character: true,
                oath: true,
                completed: true,
            },
        }
    }
}

/// Records written by older clients may hold off-path flag combinations;
/// they map to the furthest stage any set flag implies.
impl From<AcademyProgress> for AcademyStage {
    fn from(progress: AcademyProgress) -> Self {
        if progress.completed || progress.oath {
            Self::Completed
        } else if progress.character {
            Self::CharacterCreated
        } else if progress.intro {
            Self::IntroDone
        } else {
            Self::NotStarted
        }
    }
}

/// Onboarding screen gated by academy progress
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AcademyScreen {
    Intro,
    Character,
    Oath,
    Certificate,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_sequence_reaches_completed() {
        let progress = AcademyProgress::default()
            .advance(AcademyStep::Intro)
            .and_then(|p| p.advance(AcademyStep::Character))
            .and_then(|p| p.advance(AcademyStep::Oath))
            .expect("in-order steps are accepted");

        assert_eq!(
            progress,
            AcademyProgress {
                intro: true,
                character: true,
                oath: true,
                completed: true,
            }
        );
        assert!(progress.stage().is_terminal());
        assert_eq!(progress.current_screen(), AcademyScreen::Certificate);
    }

    #[test]
    fn out_of_order_steps_are_rejected() {
        let err = AcademyProgress::default()
            .advance(AcademyStep::Oath)
            .expect_err("oath before intro");
        assert!(err.is_invalid_transition());

        let intro = AcademyProgress::default()
            .advance(AcademyStep::Intro)
            .expect("intro");
        assert!(intro.advance(AcademyStep::Oath).is_err());
    }

    #[test]
    fn repeated_steps_are_self_loops() {
        let intro = AcademyProgress::default()
            .advance(AcademyStep::Intro)
            .expect("intro");
        assert_eq!(intro.advance(AcademyStep::Intro), Ok(intro));

        let done = AcademyProgress::from(AcademyStage::Completed);
        for step in [AcademyStep::Intro, AcademyStep::Character, AcademyStep::Oath] {
            assert_eq!(done.advance(step), Ok(done));
        }
    }

    #[test]
    fn completed_only_set_with_oath() {
        let stages = [
            AcademyStage::NotStarted,
            AcademyStage::IntroDone,
            AcademyStage::CharacterCreated,
            AcademyStage::Completed,
        ];
        for stage in stages {
            let progress = AcademyProgress::from(stage);
            assert_eq!(progress.completed, progress.oath);
            assert_eq!(AcademyStage::from(progress), stage);
        }
    }

    #[test]
    fn screens_follow_stage() {
        assert_eq!(
            AcademyProgress::default().current_screen(),
            AcademyScreen::Intro
        );
        assert_eq!(
            AcademyProgress::from(AcademyStage::IntroDone).current_screen(),
            AcademyScreen::Character
        );
        assert_eq!(
            AcademyProgress::from(AcademyStage::CharacterCreated).current_screen(),
            AcademyScreen::Oath
        );
    }

    #[test]
    fn off_path_records_normalize_forward() {
        let odd = AcademyProgress {
            character: true,
            ..AcademyProgress::default()
        };
        assert_eq!(odd.stage(), AcademyStage::CharacterCreated);
    }

    #[test]
    fn step_parses_from_wire_name() {
        assert_eq!("oath".parse::<AcademyStep>(), Ok(AcademyStep::Oath));
        assert!("certificate".parse::<AcademyStep>().is_err());
    }
}
