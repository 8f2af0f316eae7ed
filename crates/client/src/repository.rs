//! Remote collaborators of the submission coordinator.
//!
//! Both traits are implemented by [`crate::HttpDestinationRepository`]; tests
//! substitute in-memory fakes.

use async_trait::async_trait;

use tripdesk_catalog::{Destination, DestinationScalars, TranslationPayload};
use tripdesk_core::{DestinationId, LanguageCode};

use crate::error::ApiError;

/// Persists the language-independent destination record.
#[async_trait]
pub trait EntityRepository: Send + Sync {
    /// Create a destination. The returned record should carry the new id.
    async fn create(&self, scalars: &DestinationScalars) -> Result<Destination, ApiError>;

    /// Update a destination in place.
    async fn update(
        &self,
        id: &DestinationId,
        scalars: &DestinationScalars,
    ) -> Result<Destination, ApiError>;
}

/// Persists per-language translations of a destination.
///
/// The backend upserts on (destination id, language code); callers never need
/// to know whether a translation already exists before calling `update`.
#[async_trait]
pub trait TranslationRepository: Send + Sync {
    async fn create(
        &self,
        id: &DestinationId,
        lang: LanguageCode,
        fields: &TranslationPayload,
    ) -> Result<(), ApiError>;

    async fn update(
        &self,
        id: &DestinationId,
        lang: LanguageCode,
        fields: &TranslationPayload,
    ) -> Result<(), ApiError>;
}
