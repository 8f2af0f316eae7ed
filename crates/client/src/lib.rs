//! `tripdesk-client`
//!
//! **Responsibility:** talk to the travel admin REST API.
//!
//! This crate provides:
//! - Environment-driven configuration
//! - An explicit [`Session`] carrying the bearer token (no global cookie jar)
//! - Repository traits the submission coordinator depends on
//! - HTTP implementations of those repositories plus the auth endpoints
//!
//! The API is the authority for all state; nothing is cached here.

pub mod api;
pub mod auth;
pub mod config;
pub mod destinations;
pub mod error;
pub mod repository;
pub mod session;

pub use api::{ApiClient, Envelope};
pub use auth::{AuthApi, Credentials};
pub use config::{ClientConfig, ConfigError};
pub use destinations::HttpDestinationRepository;
pub use error::ApiError;
pub use repository::{EntityRepository, TranslationRepository};
pub use session::Session;
