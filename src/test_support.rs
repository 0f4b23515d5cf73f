//! Credential builders and a fake identity service shared by unit tests.

use std::cell::RefCell;

use async_trait::async_trait;
use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;

use crate::net::api::{IdentityError, IdentityService};
use crate::net::types::{AuthResponse, LoginRequest, RegisterRequest};

pub(crate) const NOW: u64 = 1_700_000_000;

pub(crate) fn segment(bytes: &[u8]) -> String {
    URL_SAFE_NO_PAD.encode(bytes)
}

/// Unsigned compact token carrying `payload` as its claim set.
pub(crate) fn token_with_payload(payload: &serde_json::Value) -> String {
    format!(
        "{}.{}.c2lnbmF0dXJl",
        segment(br#"{"alg":"HS256","typ":"JWT"}"#),
        segment(payload.to_string().as_bytes())
    )
}

pub(crate) fn token_for(email: &str, user_id: i64, exp: u64) -> String {
    token_with_payload(&serde_json::json!({ "sub": email, "user_id": user_id, "exp": exp }))
}

/// Identity service answering every call with a fixed outcome.
pub(crate) struct FakeIdentity {
    pub(crate) outcome: Result<AuthResponse, IdentityError>,
    pub(crate) last_login: RefCell<Option<LoginRequest>>,
    pub(crate) last_register: RefCell<Option<RegisterRequest>>,
}

impl FakeIdentity {
    pub(crate) fn answering(outcome: Result<AuthResponse, IdentityError>) -> Self {
        Self { outcome, last_login: RefCell::new(None), last_register: RefCell::new(None) }
    }
}

#[async_trait(?Send)]
impl IdentityService for FakeIdentity {
    async fn login(&self, request: &LoginRequest) -> Result<AuthResponse, IdentityError> {
        *self.last_login.borrow_mut() = Some(request.clone());
        self.outcome.clone()
    }

    async fn register(&self, request: &RegisterRequest) -> Result<AuthResponse, IdentityError> {
        *self.last_register.borrow_mut() = Some(request.clone());
        self.outcome.clone()
    }
}

/// Successful response carrying a credential valid for an hour past `NOW`.
pub(crate) fn issued(email: &str, user_id: i64) -> AuthResponse {
    AuthResponse { token: token_for(email, user_id, NOW + 3600), user_id, email: email.to_owned() }
}
