//! Destination catalog module.
//!
//! Records returned by the API, the editable form a destination is built
//! from, and the validation that gates submission. Pure data + rules (no IO).

pub mod destination;
pub mod form;
pub mod language_map;
pub mod payload;
pub mod validation;

pub use destination::{
    CategoryDestination, Country, Destination, DestinationTranslation, LocationOption, State,
    location_options,
};
pub use form::{DestinationForm, ListField, TranslationForm};
pub use language_map::PerLanguage;
pub use payload::{DestinationScalars, TranslationPayload};
pub use validation::{FieldViolation, ValidatedForm, ValidationErrors};
