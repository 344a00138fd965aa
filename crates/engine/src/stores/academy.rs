//! Academy progress tracker.
//!
//! Persists the onboarding flags. Every step goes through the
//! [`AcademyStage`](worldexplorer_domain::AcademyStage) transition table, so
//! only the four reachable flag combinations are ever written.

use std::sync::Arc;

use worldexplorer_domain::{AcademyProgress, AcademyScreen, AcademyStep};

use crate::infrastructure::persistence::{load_record, PendingWrite, WriteBehind};
use crate::infrastructure::ports::{KeyValueStore, StoreError};

use super::state::StoreState;

pub const ACADEMY_PROGRESS_KEY: &str = "academy_progress";

pub struct AcademyTracker {
    state: StoreState<AcademyProgress>,
    writer: WriteBehind,
}

impl AcademyTracker {
    pub async fn open(storage: Arc<dyn KeyValueStore>) -> Result<Self, StoreError> {
        let progress =
            load_record::<AcademyProgress>(storage.as_ref(), ACADEMY_PROGRESS_KEY).await?;
        Ok(Self::with_progress(progress.unwrap_or_default(), storage))
    }

    /// Hydrate from storage, starting from scratch on any failure.
    pub async fn open_or_default(storage: Arc<dyn KeyValueStore>) -> Self {
        let progress = load_record::<AcademyProgress>(storage.as_ref(), ACADEMY_PROGRESS_KEY)
            .await
            .unwrap_or_else(|e| {
                tracing::warn!(error = %e, "Failed to load academy progress, starting over");
                None
            });
        Self::with_progress(progress.unwrap_or_default(), storage)
    }

    /// Off-path records from storage are normalized to the stage they imply.
    fn with_progress(progress: AcademyProgress, storage: Arc<dyn KeyValueStore>) -> Self {
        let normalized = AcademyProgress::from(progress.stage());
        if normalized != progress {
            tracing::warn!(
                stored = ?progress,
                stage = ?normalized.stage(),
                "Normalized irregular academy progress"
            );
        }
        Self {
            state: StoreState::new(normalized),
            writer: WriteBehind::spawn(storage, ACADEMY_PROGRESS_KEY),
        }
    }

    pub fn progress(&self) -> AcademyProgress {
        self.state.snapshot()
    }

    pub fn current_screen(&self) -> AcademyScreen {
        self.state.read().current_screen()
    }

    pub fn is_completed(&self) -> bool {
        self.state.read().stage().is_terminal()
    }

    /// Record a finished onboarding step.
    ///
    /// Out-of-order steps fail with an invalid-transition error and leave
    /// both memory and storage untouched. Repeating a step is a no-op.
    pub fn advance(&self, step: AcademyStep) -> Result<PendingWrite, StoreError> {
        let mut progress = self.state.write();
        let next = progress.advance(step).map_err(|e| {
            tracing::warn!(%step, error = %e, "Rejected academy step");
            e
        })?;

        if next == *progress {
            tracing::debug!(%step, "Academy step already taken");
            return Ok(PendingWrite::skipped(ACADEMY_PROGRESS_KEY));
        }

        tracing::info!(%step, stage = ?next.stage(), "Academy step completed");
        let pending = self.writer.put(&next);
        *progress = next;
        Ok(pending)
    }

    /// Start onboarding over.
    pub fn reset(&self) -> PendingWrite {
        let mut progress = self.state.write();
        let next = AcademyProgress::default();
        tracing::info!("Reset academy progress");
        let pending = self.writer.put(&next);
        *progress = next;
        pending
    }
}
