//! Thin HTTP wrapper shared by every endpoint group.

use reqwest::{Method, RequestBuilder, Response};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::session::Session;

/// Standard response envelope: `{ "message": ..., "data": ... }`.
#[derive(Debug, Clone, Deserialize)]
pub struct Envelope<T> {
    #[serde(default)]
    pub message: String,
    pub data: T,
}

/// HTTP client bound to one API base URL and one session.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    api_url: String,
    session: Session,
}

impl ApiClient {
    pub fn new(config: &ClientConfig, session: Session) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        Ok(Self::with_client(http, config.api_url.clone(), session))
    }

    /// Reuse an existing [`reqwest::Client`] (shared connection pool).
    pub fn with_client(
        http: reqwest::Client,
        api_url: impl Into<String>,
        session: Session,
    ) -> Self {
        Self {
            http,
            api_url: api_url.into().trim_end_matches('/').to_string(),
            session,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// Start a request; the bearer token is read from the session here.
    pub fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.api_url, path);
        tracing::debug!(%method, %url, "api request");

        let req = self.http.request(method, url);
        match self.session.token() {
            Some(token) => req.bearer_auth(token),
            None => req,
        }
    }

    /// Send and decode a JSON body.
    pub async fn send<T: DeserializeOwned>(&self, req: RequestBuilder) -> Result<T, ApiError> {
        let response = Self::ensure_success(req.send().await?).await?;
        let bytes = response.bytes().await?;
        serde_json::from_slice(&bytes)
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// Send and decode the `data` field of an [`Envelope`].
    pub async fn send_data<T: DeserializeOwned>(&self, req: RequestBuilder) -> Result<T, ApiError> {
        let envelope: Envelope<T> = self.send(req).await?;
        Ok(envelope.data)
    }

    /// Send, check the status and discard the body.
    pub async fn send_unit(&self, req: RequestBuilder) -> Result<(), ApiError> {
        Self::ensure_success(req.send().await?).await?;
        Ok(())
    }

    /// Map a non-2xx response to [`ApiError::Repository`], keeping the body.
    async fn ensure_success(response: Response) -> Result<Response, ApiError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let text = response
            .text()
            .await
            .unwrap_or_else(|_| "<unreadable body>".to_string());
        let body = match serde_json::from_str::<Value>(&text) {
            Ok(json) => json,
            Err(_) => Value::String(text),
        };

        tracing::debug!(status = status.as_u16(), %body, "api error response");
        Err(ApiError::Repository {
            status: status.as_u16(),
            body,
        })
    }
}
