//! Explorer Academy onboarding flow.
//!
//! Sequences the academy tracker and the user store the way the academy
//! screen does: intro, character creation, oath, then the certificate.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use worldexplorer_domain::{
    AcademyScreen, AcademyStep, Avatar, CharacterDraft, DomainError, OathCeremony, UserPatch,
    DEFAULT_EXPLORER_NAME, OATH_PLEDGES,
};

use crate::infrastructure::ports::{ClockPort, StoreError};
use crate::stores::{AcademyTracker, UserStore};

pub const CERTIFICATE_TITLE: &str = "World Explorer";

#[derive(Debug, thiserror::Error)]
pub enum AcademyFlowError {
    #[error("Oath not sworn: {recited} of {total} pledges recited")]
    OathNotSworn { recited: usize, total: usize },
    #[error("Academy not completed yet")]
    NotCompleted,
    #[error(transparent)]
    Domain(#[from] DomainError),
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Explorer certificate granted at the end of the academy
#[derive(Debug, Clone, PartialEq)]
pub struct Certificate {
    pub explorer_name: String,
    pub title: &'static str,
    pub vehicle: String,
    pub tools: Vec<String>,
    pub issued_at: DateTime<Utc>,
}

pub struct AcademyFlow {
    academy: Arc<AcademyTracker>,
    user: Arc<UserStore>,
    clock: Arc<dyn ClockPort>,
}

impl AcademyFlow {
    pub fn new(academy: Arc<AcademyTracker>, user: Arc<UserStore>, clock: Arc<dyn ClockPort>) -> Self {
        Self {
            academy,
            user,
            clock,
        }
    }

    pub fn screen(&self) -> AcademyScreen {
        self.academy.current_screen()
    }

    /// Finish the introduction.
    pub async fn start(&self) -> Result<AcademyScreen, AcademyFlowError> {
        self.academy.advance(AcademyStep::Intro)?.await?;
        Ok(self.screen())
    }

    /// Turn the draft into the explorer's avatar and finish character
    /// creation.
    ///
    /// Creates the explorer profile from defaults when none exists yet.
    pub async fn create_character(
        &self,
        draft: &CharacterDraft,
    ) -> Result<Avatar, AcademyFlowError> {
        // Reject before touching the profile so an early call leaves no trace.
        self.academy.progress().advance(AcademyStep::Character)?;
        let avatar = draft.build()?;

        self.user
            .update(UserPatch::new().avatar(avatar.clone()))
            .await?;
        self.academy.advance(AcademyStep::Character)?.await?;

        tracing::info!(vehicle = %avatar.vehicle.name, tools = avatar.tools.len(), "Explorer character created");
        Ok(avatar)
    }

    /// Finish the oath once every pledge has been recited.
    pub async fn take_oath(&self, ceremony: &OathCeremony) -> Result<(), AcademyFlowError> {
        if !ceremony.is_sworn() {
            return Err(AcademyFlowError::OathNotSworn {
                recited: ceremony.recited(),
                total: OATH_PLEDGES.len(),
            });
        }

        self.academy.advance(AcademyStep::Oath)?.await?;
        tracing::info!("Explorer oath sworn, academy completed");
        Ok(())
    }

    /// The certificate, available once the academy is completed.
    pub fn certificate(&self) -> Result<Certificate, AcademyFlowError> {
        if !self.academy.is_completed() {
            return Err(AcademyFlowError::NotCompleted);
        }

        let user = self.user.get();
        let explorer_name = user
            .as_ref()
            .map(|u| u.name.clone())
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| DEFAULT_EXPLORER_NAME.to_string());
        let avatar = user.map(|u| u.avatar).unwrap_or_else(Avatar::starter);

        Ok(Certificate {
            explorer_name,
            title: CERTIFICATE_TITLE,
            vehicle: avatar.vehicle.name,
            tools: avatar.tools.into_iter().map(|t| t.name).collect(),
            issued_at: self.clock.now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::avatar_options;
    use crate::infrastructure::clock::FixedClock;
    use crate::infrastructure::ports::KeyValueStore;
    use crate::infrastructure::storage::MemoryKeyValueStore;
    use chrono::TimeZone;
    use worldexplorer_domain::AcademyStage;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, 9, 30, 0)
            .single()
            .expect("valid date")
    }

    async fn flow() -> (AcademyFlow, Arc<AcademyTracker>, Arc<UserStore>) {
        let storage: Arc<dyn KeyValueStore> = Arc::new(MemoryKeyValueStore::new());
        let clock: Arc<dyn ClockPort> = Arc::new(FixedClock(now()));
        let academy = Arc::new(AcademyTracker::open(storage.clone()).await.expect("academy"));
        let user = Arc::new(UserStore::open(storage, clock.clone()).await.expect("user"));
        (
            AcademyFlow::new(academy.clone(), user.clone(), clock),
            academy,
            user,
        )
    }

    fn finished_draft() -> CharacterDraft {
        let options = avatar_options();
        let mut draft = CharacterDraft::new();
        draft.select_hair(options.hair[1].clone()).expect("hair");
        draft.select_eyes(options.eyes[2].clone()).expect("eyes");
        draft.select_outfit(options.outfits[0].clone()).expect("outfit");
        draft.select_vehicle(options.vehicles[2].clone());
        draft.toggle_tool(options.tools[3].clone());
        draft
    }

    fn sworn() -> OathCeremony {
        let mut ceremony = OathCeremony::new();
        for _ in OATH_PLEDGES {
            ceremony.recite();
        }
        ceremony
    }

    #[tokio::test]
    async fn full_walkthrough_grants_certificate() {
        let (flow, academy, user) = flow().await;

        assert_eq!(flow.start().await.expect("intro"), AcademyScreen::Character);
        let avatar = flow
            .create_character(&finished_draft())
            .await
            .expect("character");
        assert_eq!(flow.screen(), AcademyScreen::Oath);
        flow.take_oath(&sworn()).await.expect("oath");

        assert_eq!(academy.progress().stage(), AcademyStage::Completed);
        assert_eq!(user.get().map(|u| u.avatar), Some(avatar));

        let certificate = flow.certificate().expect("certificate");
        assert_eq!(certificate.explorer_name, DEFAULT_EXPLORER_NAME);
        assert_eq!(certificate.title, CERTIFICATE_TITLE);
        assert_eq!(certificate.vehicle, "Rocket");
        assert_eq!(certificate.tools, vec!["Adventure Camera".to_string()]);
        assert_eq!(certificate.issued_at, now());
    }

    #[tokio::test]
    async fn character_before_intro_leaves_profile_untouched() {
        let (flow, academy, user) = flow().await;

        let err = flow
            .create_character(&finished_draft())
            .await
            .expect_err("intro not done");

        assert!(matches!(err, AcademyFlowError::Domain(ref e) if e.is_invalid_transition()));
        assert!(user.get().is_none());
        assert_eq!(academy.current_screen(), AcademyScreen::Intro);
    }

    #[tokio::test]
    async fn incomplete_draft_is_rejected() {
        let (flow, academy, user) = flow().await;
        flow.start().await.expect("intro");

        let err = flow
            .create_character(&CharacterDraft::new())
            .await
            .expect_err("empty draft");

        assert!(matches!(err, AcademyFlowError::Domain(_)));
        assert!(user.get().is_none());
        assert_eq!(academy.current_screen(), AcademyScreen::Character);
    }

    #[tokio::test]
    async fn unfinished_oath_is_rejected() {
        let (flow, academy, _user) = flow().await;
        flow.start().await.expect("intro");
        flow.create_character(&finished_draft())
            .await
            .expect("character");

        let mut ceremony = OathCeremony::new();
        ceremony.recite();
        let err = flow.take_oath(&ceremony).await.expect_err("one pledge");

        assert!(matches!(
            err,
            AcademyFlowError::OathNotSworn {
                recited: 1,
                total: 5
            }
        ));
        assert!(!academy.is_completed());
        assert!(matches!(
            flow.certificate(),
            Err(AcademyFlowError::NotCompleted)
        ));
    }

    #[tokio::test]
    async fn certificate_uses_profile_name() {
        let (flow, _academy, user) = flow().await;
        flow.start().await.expect("intro");
        flow.create_character(&finished_draft())
            .await
            .expect("character");
        user.update(UserPatch::new().name("Mira"))
            .await
            .expect("rename");
        flow.take_oath(&sworn()).await.expect("oath");

        assert_eq!(flow.certificate().expect("certificate").explorer_name, "Mira");
    }
}
