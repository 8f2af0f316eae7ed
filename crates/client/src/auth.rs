//! Authentication endpoints and the session lifecycle.
//!
//! - login / refresh success → token stored in the [`Session`]
//! - logout, refresh failure → token cleared

use reqwest::Method;
use serde::{Deserialize, Serialize};

use crate::api::ApiClient;
use crate::error::ApiError;
use crate::session::Session;

/// The admin dashboard always logs in against the `admin` site.
const ADMIN_SITE: &str = "admin";

const NO_TOKEN: &str = "login response carried no session token";

#[derive(Debug, Clone, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

#[derive(Serialize)]
struct LoginBody<'a> {
    #[serde(flatten)]
    credentials: &'a Credentials,
    site: &'static str,
}

#[derive(Debug, Default, Deserialize)]
struct SessionData {
    #[serde(default)]
    session: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SessionEnvelope {
    #[serde(default)]
    data: Option<SessionData>,
}

impl SessionEnvelope {
    fn into_token(self) -> Option<String> {
        self.data.and_then(|d| d.session).filter(|t| !t.is_empty())
    }
}

#[derive(Debug, Clone)]
pub struct AuthApi {
    api: ApiClient,
}

impl AuthApi {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub fn session(&self) -> &Session {
        self.api.session()
    }

    /// Log in and store the returned session token.
    pub async fn login(&self, credentials: &Credentials) -> Result<(), ApiError> {
        let body = LoginBody {
            credentials,
            site: ADMIN_SITE,
        };
        let req = self.api.request(Method::POST, "/auth/login").json(&body);
        let res: SessionEnvelope = self.api.send(req).await?;

        let Some(token) = res.into_token() else {
            return Err(ApiError::Decode(NO_TOKEN.into()));
        };
        self.session().set_token(token);
        tracing::info!("logged in");
        Ok(())
    }

    /// Exchange the current token for a fresh one.
    ///
    /// Any failure clears the session; the caller should send the user back to
    /// the login screen.
    pub async fn refresh(&self) -> Result<(), ApiError> {
        let req = self.api.request(Method::POST, "/auth/refresh-token");
        match self.api.send::<SessionEnvelope>(req).await {
            Ok(res) => {
                if let Some(token) = res.into_token() {
                    self.session().set_token(token);
                }
                Ok(())
            }
            Err(err) => {
                tracing::warn!(error = %err, "session refresh failed; clearing session");
                self.session().clear();
                Err(err)
            }
        }
    }

    /// Log out. The local session is cleared even when the call fails.
    pub async fn logout(&self) -> Result<(), ApiError> {
        let req = self.api.request(Method::POST, "/auth/logout");
        let result = self.api.send_unit(req).await;
        self.session().clear();
        result
    }
}
