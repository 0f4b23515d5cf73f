//! Credential exchange and installation.
//!
//! SYSTEM CONTEXT
//! ==============
//! Login and registration are the only writers of the token store besides
//! logout. On success the credential returned by the identity service is
//! persisted and the `User` from the same response is handed back.
//! `SessionContext` wraps these calls and applies the matching session
//! transition.
//!
//! ERROR HANDLING
//! ==============
//! Whatever went wrong (network, non-2xx, bad body, storage refusal) collapses
//! into one [`AuthError`] per operation so pages show a single generic
//! message. The backend detail is logged, never returned.

#[cfg(test)]
#[path = "authenticator_test.rs"]
mod authenticator_test;

use std::fmt::Display;

use leptos::logging::{log, warn};

use super::api::{IdentityError, IdentityService};
use super::types::{AuthResponse, LoginRequest, RegisterRequest, User};
use crate::util::token_store::TokenStore;

/// User-facing failure of an authentication exchange.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error("Invalid email or password")]
    InvalidCredentials,
    #[error("Registration failed")]
    RegistrationFailed,
}

#[derive(Clone, Copy, Debug)]
enum Exchange {
    Login,
    Register,
}

impl Exchange {
    fn name(self) -> &'static str {
        match self {
            Self::Login => "login",
            Self::Register => "registration",
        }
    }

    fn failure(self) -> AuthError {
        match self {
            Self::Login => AuthError::InvalidCredentials,
            Self::Register => AuthError::RegistrationFailed,
        }
    }
}

/// Map any backend-specific failure to the operation's single error kind.
fn narrow(exchange: Exchange, detail: &dyn Display) -> AuthError {
    warn!("{} failed: {detail}", exchange.name());
    exchange.failure()
}

/// Performs login/registration against `identity` and installs the
/// resulting credential into `store`.
#[derive(Clone, Debug)]
pub struct Authenticator<I, S> {
    identity: I,
    store: S,
}

impl<I, S> Authenticator<I, S>
where
    I: IdentityService,
    S: TokenStore,
{
    pub fn new(identity: I, store: S) -> Self {
        Self { identity, store }
    }

    /// Exchange email/password for a credential.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::InvalidCredentials`] on any rejection; the token
    /// store is left untouched in that case.
    pub async fn login(&self, email: &str, password: &str) -> Result<User, AuthError> {
        let request = LoginRequest { email: email.to_owned(), password: password.to_owned() };
        let outcome = self.identity.login(&request).await;
        self.install(Exchange::Login, outcome)
    }

    /// Create an account and sign in with the credential it returns.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::RegistrationFailed`] on any rejection; the token
    /// store is left untouched in that case.
    pub async fn register(
        &self,
        email: &str,
        password: &str,
        first_name: Option<&str>,
        last_name: Option<&str>,
    ) -> Result<User, AuthError> {
        let request = RegisterRequest {
            email: email.to_owned(),
            password: password.to_owned(),
            first_name: first_name.map(str::to_owned),
            last_name: last_name.map(str::to_owned),
        };
        let outcome = self.identity.register(&request).await;
        self.install(Exchange::Register, outcome)
    }

    /// Discard the stored credential. Never fails.
    pub fn logout(&self) {
        self.store.clear();
        log!("signed out");
    }

    fn install(
        &self,
        exchange: Exchange,
        outcome: Result<AuthResponse, IdentityError>,
    ) -> Result<User, AuthError> {
        let response = outcome.map_err(|e| narrow(exchange, &e))?;
        if response.token.is_empty() {
            return Err(narrow(exchange, &"response carried an empty token"));
        }
        self.store.save(&response.token).map_err(|e| narrow(exchange, &e))?;
        let user = response.user();
        log!("{} succeeded for user {}", exchange.name(), user.id);
        Ok(user)
    }
}
