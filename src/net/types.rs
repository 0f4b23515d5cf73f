//! Wire DTOs for the identity service and the derived `User`.
//!
//! DESIGN
//! ======
//! Field names follow the backend's camelCase JSON. Optional registration
//! names are omitted from the body when absent rather than sent as `null`.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Identity shown to the rest of the UI.
///
/// Built from unverified credential claims or from the identity service's
/// immediate response; it is a display convenience, not proof of identity.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub email: String,
}

/// Body of `POST /auth/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Body of `POST /auth/register`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
}

/// Successful login/registration response.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    /// Freshly issued credential.
    pub token: String,
    pub user_id: i64,
    pub email: String,
}

impl AuthResponse {
    /// The user described by the response fields.
    #[must_use]
    pub fn user(&self) -> User {
        User { id: self.user_id, email: self.email.clone() }
    }
}
