//! Session derivation from the stored credential.
//!
//! Runs once at startup and again whenever the app wants to re-check the
//! stored credential. There is no expiry timer: a credential that expires
//! while the page is open is only noticed on the next resolution.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::logging::warn;

use super::auth::SessionState;
use crate::util::claims::{self, CredentialError};
use crate::util::token_store::TokenStore;

/// Derive the session from `store` at `now` (epoch seconds).
///
/// A credential that cannot be decoded or has `exp <= now` is removed from
/// the store and yields `Unauthenticated`; those failures never escape.
pub fn resolve_session<S: TokenStore>(store: &S, now: u64) -> SessionState {
    let Some(credential) = store.load() else {
        return SessionState::Unauthenticated;
    };
    match claims::decode(&credential).and_then(|c| c.into_user(now)) {
        Ok(user) => SessionState::Authenticated(user),
        Err(err) => {
            discard(store, &err);
            SessionState::Unauthenticated
        }
    }
}

fn discard<S: TokenStore>(store: &S, err: &CredentialError) {
    warn!("discarding stored credential: {err}");
    store.clear();
}
