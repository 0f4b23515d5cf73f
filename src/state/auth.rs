//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by route guards and user-aware components to coordinate login
//! redirects and identity-dependent rendering. One `SessionContext` is
//! created by the root `App` and provided through Leptos context; everything
//! else reads it or calls its narrow mutators.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::logging::log;
use leptos::prelude::*;

use super::session::resolve_session;
use crate::net::api::IdentityService;
use crate::net::authenticator::{AuthError, Authenticator};
use crate::net::types::User;
use crate::util::token_store::TokenStore;

/// Whether the visitor has a session.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SessionState {
    /// The stored credential has not been checked yet.
    #[default]
    Resolving,
    /// No valid credential.
    Unauthenticated,
    /// Valid, unexpired credential for this user.
    Authenticated(User),
}

impl SessionState {
    #[must_use]
    pub fn user(&self) -> Option<&User> {
        match self {
            Self::Authenticated(user) => Some(user),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated(_))
    }

    fn label(&self) -> &'static str {
        match self {
            Self::Resolving => "resolving",
            Self::Unauthenticated => "unauthenticated",
            Self::Authenticated(_) => "authenticated",
        }
    }
}

/// Process-wide owner of the current [`SessionState`].
///
/// Starts as `Resolving`; consumers must treat that as "not decided yet"
/// rather than as signed out.
#[derive(Clone, Copy, Debug)]
pub struct SessionContext {
    state: RwSignal<SessionState>,
}

impl Default for SessionContext {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionContext {
    pub fn new() -> Self {
        Self { state: RwSignal::new(SessionState::Resolving) }
    }

    /// Current state, tracked by the surrounding reactive scope.
    pub fn state(&self) -> SessionState {
        self.state.get()
    }

    /// Current user, tracked by the surrounding reactive scope.
    pub fn user(&self) -> Option<User> {
        self.state.with(|s| s.user().cloned())
    }

    /// Re-derive the session from `store` at `now` (epoch seconds).
    pub fn resolve<S: TokenStore>(&self, store: &S, now: u64) -> SessionState {
        let next = resolve_session(store, now);
        self.transition(next.clone());
        next
    }

    pub fn set_authenticated(&self, user: User) {
        self.transition(SessionState::Authenticated(user));
    }

    pub fn set_unauthenticated(&self) {
        self.transition(SessionState::Unauthenticated);
    }

    /// Sign in through `auth`; the session becomes `Authenticated` on
    /// success and is left as it was on failure.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::InvalidCredentials`] on any rejection.
    pub async fn login<I, S>(&self, auth: &Authenticator<I, S>, email: &str, password: &str) -> Result<User, AuthError>
    where
        I: IdentityService,
        S: TokenStore,
    {
        let user = auth.login(email, password).await?;
        self.set_authenticated(user.clone());
        Ok(user)
    }

    /// Register through `auth`; same transitions as [`Self::login`].
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::RegistrationFailed`] on any rejection.
    pub async fn register<I, S>(
        &self,
        auth: &Authenticator<I, S>,
        email: &str,
        password: &str,
        first_name: Option<&str>,
        last_name: Option<&str>,
    ) -> Result<User, AuthError>
    where
        I: IdentityService,
        S: TokenStore,
    {
        let user = auth.register(email, password, first_name, last_name).await?;
        self.set_authenticated(user.clone());
        Ok(user)
    }

    /// Discard the stored credential and end the session.
    pub fn logout<I, S>(&self, auth: &Authenticator<I, S>)
    where
        I: IdentityService,
        S: TokenStore,
    {
        auth.logout();
        self.set_unauthenticated();
    }

    fn transition(&self, next: SessionState) {
        let previous = self.state.with_untracked(SessionState::label);
        log!("session {previous} -> {}", next.label());
        self.state.set(next);
    }
}
