//! Request bodies sent to the destination endpoints.

use serde::Serialize;

use tripdesk_core::{CategoryId, LanguageCode, StateId, ValueObject};

/// Language-independent fields of a destination (create/update body).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DestinationScalars {
    pub state_id: StateId,
    pub category_destination_id: CategoryId,
    pub price: f64,
}

impl ValueObject for DestinationScalars {}

/// Body of a translation create/upsert for one language.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TranslationPayload {
    pub name: String,
    pub description: String,
    pub language_code: LanguageCode,
    pub thumbnail: String,
    pub image: Vec<String>,
    pub detail_tour: Vec<String>,
    pub facilities: Vec<String>,
}

impl ValueObject for TranslationPayload {}
