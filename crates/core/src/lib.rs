//! `tripdesk-core` — shared building blocks for the travel admin client.
//!
//! This crate contains **pure** primitives (no HTTP, no IO): identifiers,
//! supported languages and the domain error model.

pub mod entity;
pub mod error;
pub mod id;
pub mod language;
pub mod value_object;

pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::{CategoryId, DestinationId, StateId};
pub use language::LanguageCode;
pub use value_object::ValueObject;
