//! Identity service client.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): calls fail with a transport error since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! `IdentityError` keeps the backend detail (status, transport message) for
//! logging. The authenticator narrows it before anything reaches a page.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use async_trait::async_trait;
use serde::Serialize;

use super::types::{AuthResponse, LoginRequest, RegisterRequest};
use crate::config::SessionConfig;

pub const LOGIN_PATH: &str = "/auth/login";
pub const REGISTER_PATH: &str = "/auth/register";

/// Backend-specific reason an identity exchange failed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IdentityError {
    #[error("identity service unreachable: {0}")]
    Transport(String),
    #[error("identity service returned status {0}")]
    Status(u16),
    #[error("unexpected identity service response: {0}")]
    Decode(String),
}

/// Backend that exchanges email/password for a credential.
///
/// Futures are `!Send`: the browser runs everything on one event loop.
#[async_trait(?Send)]
pub trait IdentityService {
    /// `POST /auth/login`.
    async fn login(&self, request: &LoginRequest) -> Result<AuthResponse, IdentityError>;

    /// `POST /auth/register`.
    async fn register(&self, request: &RegisterRequest) -> Result<AuthResponse, IdentityError>;
}

/// [`IdentityService`] over HTTP JSON.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpIdentityService {
    base_url: String,
}

impl HttpIdentityService {
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into() }
    }

    #[must_use]
    pub fn from_config(config: &SessionConfig) -> Self {
        Self::new(config.api_base_url.clone())
    }

    async fn post_json<B: Serialize>(&self, path: &str, body: &B) -> Result<AuthResponse, IdentityError> {
        #[cfg(feature = "hydrate")]
        {
            let url = endpoint(&self.base_url, path);
            let resp = gloo_net::http::Request::post(&url)
                .json(body)
                .map_err(|e| IdentityError::Transport(e.to_string()))?
                .send()
                .await
                .map_err(|e| IdentityError::Transport(e.to_string()))?;
            if !resp.ok() {
                return Err(IdentityError::Status(resp.status()));
            }
            resp.json::<AuthResponse>()
                .await
                .map_err(|e| IdentityError::Decode(e.to_string()))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (path, body);
            Err(IdentityError::Transport("not available on server".to_owned()))
        }
    }
}

#[async_trait(?Send)]
impl IdentityService for HttpIdentityService {
    async fn login(&self, request: &LoginRequest) -> Result<AuthResponse, IdentityError> {
        self.post_json(LOGIN_PATH, request).await
    }

    async fn register(&self, request: &RegisterRequest) -> Result<AuthResponse, IdentityError> {
        self.post_json(REGISTER_PATH, request).await
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn endpoint(base_url: &str, path: &str) -> String {
    format!("{}{path}", base_url.trim_end_matches('/'))
}
