//! `tripdesk-editor` — the destination ("service") editor workflow.
//!
//! Saving a destination is one logical operation over several remote writes:
//! the parent record first, then one translation per supported language, in
//! order, stopping at the first failure. This crate coordinates that sequence
//! and reports a single outcome.

pub mod coordinator;
pub mod editor;
pub mod error;
pub mod normalize;
pub mod notifier;

#[cfg(test)]
mod testing;

pub use coordinator::{SubmissionCoordinator, SubmissionState, SubmitOutcome};
pub use editor::{EditorOutcome, ServiceEditor};
pub use error::SubmitError;
pub use normalize::{FALLBACK_MESSAGE, ServerErrorShape, normalize_error};
pub use notifier::{Notifier, TracingNotifier};
