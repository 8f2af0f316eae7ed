//! Destination submission coordinator.
//!
//! One attempt runs the whole sequence:
//!
//! 1. create (no existing reference) or update the destination
//! 2. for each language in [`LanguageCode::ALL`] order, create or upsert its
//!    translation against the resolved id
//!
//! Writes are awaited one at a time and the attempt stops at the first
//! failure. Nothing is rolled back: translations written before the failure
//! stay persisted, and a retry re-runs every step.

use std::sync::{Arc, Mutex};

use tracing::Instrument;
use uuid::Uuid;

use tripdesk_catalog::{TranslationPayload, ValidatedForm};
use tripdesk_client::{EntityRepository, TranslationRepository};
use tripdesk_core::{DestinationId, LanguageCode};

use crate::error::SubmitError;
use crate::normalize::normalize_error;
use crate::notifier::Notifier;

/// Lifecycle of the coordinator's most recent attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionState {
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

/// Result of one call to [`SubmissionCoordinator::submit`].
#[derive(Debug, Clone)]
pub enum SubmitOutcome {
    /// Destination and every translation were written.
    Succeeded { id: DestinationId, created: bool },
    /// The sequence stopped at `error`; `message` is what the user was shown.
    Failed { error: SubmitError, message: String },
    /// Another attempt was still in flight; nothing was sent.
    Ignored,
}

impl SubmitOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, SubmitOutcome::Succeeded { .. })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Create,
    Update,
}

impl Mode {
    fn as_str(self) -> &'static str {
        match self {
            Mode::Create => "create",
            Mode::Update => "update",
        }
    }

    fn loading_text(self) -> &'static str {
        match self {
            Mode::Create => "Creating service...",
            Mode::Update => "Updating service...",
        }
    }

    fn success_text(self) -> &'static str {
        match self {
            Mode::Create => "Service created successfully",
            Mode::Update => "Service updated successfully",
        }
    }
}

/// Marks the coordinator busy for the lifetime of one attempt.
///
/// Dropping it unsettled (the future was cancelled) returns the state to `Idle`.
struct InFlight<'a> {
    state: &'a Mutex<SubmissionState>,
    settled: bool,
}

impl InFlight<'_> {
    fn settle(mut self, outcome: SubmissionState) {
        *lock(self.state) = outcome;
        self.settled = true;
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        if !self.settled {
            *lock(self.state) = SubmissionState::Idle;
        }
    }
}

fn lock(state: &Mutex<SubmissionState>) -> std::sync::MutexGuard<'_, SubmissionState> {
    state.lock().unwrap_or_else(|e| e.into_inner())
}

pub struct SubmissionCoordinator {
    entities: Arc<dyn EntityRepository>,
    translations: Arc<dyn TranslationRepository>,
    notifier: Arc<dyn Notifier>,
    state: Mutex<SubmissionState>,
}

impl SubmissionCoordinator {
    pub fn new(
        entities: Arc<dyn EntityRepository>,
        translations: Arc<dyn TranslationRepository>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            entities,
            translations,
            notifier,
            state: Mutex::new(SubmissionState::Idle),
        }
    }

    pub fn state(&self) -> SubmissionState {
        *lock(&self.state)
    }

    fn begin(&self) -> Option<InFlight<'_>> {
        let mut state = lock(&self.state);
        if *state == SubmissionState::Submitting {
            return None;
        }
        *state = SubmissionState::Submitting;
        Some(InFlight {
            state: &self.state,
            settled: false,
        })
    }

    /// Save `values`, updating `existing` or creating a new destination.
    ///
    /// `on_success` (close the editor, refetch the list) runs only when every
    /// write succeeded. A call made while another attempt is in flight is
    /// ignored.
    pub async fn submit<F>(
        &self,
        values: &ValidatedForm,
        existing: Option<&DestinationId>,
        on_success: F,
    ) -> SubmitOutcome
    where
        F: FnOnce(&DestinationId),
    {
        let Some(in_flight) = self.begin() else {
            tracing::warn!("submission already in progress; ignoring submit");
            return SubmitOutcome::Ignored;
        };

        let mode = if existing.is_some() {
            Mode::Update
        } else {
            Mode::Create
        };
        let span = tracing::info_span!(
            "save_destination",
            attempt = %Uuid::now_v7(),
            mode = mode.as_str()
        );

        self.notifier.loading(mode.loading_text());

        match self.persist(values, existing).instrument(span).await {
            Ok(id) => {
                tracing::info!(destination_id = %id, mode = mode.as_str(), "destination saved");
                in_flight.settle(SubmissionState::Succeeded);
                on_success(&id);
                self.notifier.success(mode.success_text());
                SubmitOutcome::Succeeded {
                    id,
                    created: mode == Mode::Create,
                }
            }
            Err(error) => {
                let message = normalize_error(&error);
                tracing::warn!(error = %error, mode = mode.as_str(), "failed to save destination");
                in_flight.settle(SubmissionState::Failed);
                self.notifier.error(&format!("Failed: {message}"));
                SubmitOutcome::Failed { error, message }
            }
        }
    }

    async fn persist(
        &self,
        values: &ValidatedForm,
        existing: Option<&DestinationId>,
    ) -> Result<DestinationId, SubmitError> {
        let (id, created) = match existing {
            Some(id) => {
                self.entities.update(id, &values.scalars).await?;
                (id.clone(), false)
            }
            None => {
                let destination = self.entities.create(&values.scalars).await?;
                let id = destination
                    .id
                    .filter(|id| !id.as_str().is_empty())
                    .ok_or(SubmitError::MissingId)?;
                (id, true)
            }
        };

        for (lang, payload) in values.translations.iter() {
            tracing::debug!(destination_id = %id, %lang, created, "writing translation");
            if let Err(e) = self.write_translation(&id, lang, payload, created).await {
                tracing::warn!(%lang, error = %e, "translation write failed");
                return Err(e);
            }
        }

        Ok(id)
    }

    async fn write_translation(
        &self,
        id: &DestinationId,
        lang: LanguageCode,
        payload: &TranslationPayload,
        created: bool,
    ) -> Result<(), SubmitError> {
        let result = if created {
            self.translations.create(id, lang, payload).await
        } else {
            self.translations.update(id, lang, payload).await
        };
        result.map_err(SubmitError::from)
    }
}
