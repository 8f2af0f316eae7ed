//! The destination edit surface: form values + the reference being edited.

use tripdesk_catalog::{Destination, DestinationForm, ValidationErrors};
use tripdesk_core::{DestinationId, DomainError, DomainResult, Entity};

use crate::coordinator::{SubmissionCoordinator, SubmitOutcome};
use crate::error::SubmitError;
use crate::normalize::normalize_error;

/// Result of [`ServiceEditor::save`].
#[derive(Debug, Clone)]
pub enum EditorOutcome {
    /// Saved; the editor is closed.
    Saved { id: DestinationId },
    /// Nothing was saved and the editor stays open with its values.
    ///
    /// `SubmitError::Validation` means the form was rejected before any
    /// request was sent.
    Failed { error: SubmitError, message: String },
    /// A save was already in flight.
    Busy,
}

impl EditorOutcome {
    /// Field violations, when the form was rejected before submission.
    pub fn violations(&self) -> Option<&ValidationErrors> {
        match self {
            EditorOutcome::Failed {
                error: SubmitError::Validation(errors),
                ..
            } => Some(errors),
            _ => None,
        }
    }
}

/// State of one open editor.
#[derive(Debug, Clone)]
pub struct ServiceEditor {
    form: DestinationForm,
    existing: Option<DestinationId>,
    open: bool,
}

impl ServiceEditor {
    /// Editor for a new destination.
    pub fn open_new() -> Self {
        Self {
            form: DestinationForm::new(),
            existing: None,
            open: true,
        }
    }

    /// Editor prefilled from a persisted destination.
    pub fn open_existing(destination: &Destination) -> DomainResult<Self> {
        let id = destination
            .id()
            .cloned()
            .ok_or_else(|| DomainError::invalid_id("destination has no id"))?;
        Ok(Self {
            form: DestinationForm::from_destination(destination),
            existing: Some(id),
            open: true,
        })
    }

    pub fn form(&self) -> &DestinationForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut DestinationForm {
        &mut self.form
    }

    /// The destination being edited; set after the first successful create.
    pub fn existing(&self) -> Option<&DestinationId> {
        self.existing.as_ref()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn reopen(&mut self) {
        self.open = true;
    }

    /// Validate and submit the form.
    ///
    /// `on_refresh` runs once the destination and all its translations are
    /// saved (refetch the list).
    pub async fn save<F>(
        &mut self,
        coordinator: &SubmissionCoordinator,
        on_refresh: F,
    ) -> EditorOutcome
    where
        F: FnOnce(&DestinationId),
    {
        let values = match self.form.validate() {
            Ok(values) => values,
            Err(errors) => {
                tracing::debug!(violations = errors.violations().len(), "form rejected");
                let error = SubmitError::from(errors);
                let message = normalize_error(&error);
                return EditorOutcome::Failed { error, message };
            }
        };

        let outcome = coordinator
            .submit(&values, self.existing.as_ref(), on_refresh)
            .await;
        match outcome {
            SubmitOutcome::Succeeded { id, .. } => {
                self.existing = Some(id.clone());
                self.open = false;
                EditorOutcome::Saved { id }
            }
            SubmitOutcome::Failed { error, message } => EditorOutcome::Failed { error, message },
            SubmitOutcome::Ignored => EditorOutcome::Busy,
        }
    }
}
