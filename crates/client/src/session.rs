//! Explicit session context.
//!
//! The bearer token lives in a [`Session`] handle that is handed to every
//! client at construction time. Clones share the same token, so a refresh
//! performed through one client is seen by the others.

use std::sync::{Arc, RwLock};

#[derive(Debug, Clone, Default)]
pub struct Session {
    token: Arc<RwLock<Option<String>>>,
}

impl Session {
    /// A session with no token (logged out).
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn with_token(token: impl Into<String>) -> Self {
        let session = Self::default();
        session.set_token(token);
        session
    }

    /// Store a token after a successful login or refresh.
    pub fn set_token(&self, token: impl Into<String>) {
        let mut guard = self.token.write().unwrap_or_else(|e| e.into_inner());
        *guard = Some(token.into());
    }

    /// Forget the token (logout, failed refresh).
    pub fn clear(&self) {
        let mut guard = self.token.write().unwrap_or_else(|e| e.into_inner());
        *guard = None;
    }

    /// Current token, read when a request is built.
    pub fn token(&self) -> Option<String> {
        let guard = self.token.read().unwrap_or_else(|e| e.into_inner());
        guard.clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }
}
