//! Credential payload decoding.
//!
//! TRUST BOUNDARY
//! ==============
//! The credential is a JWT-style `header.payload.signature` string issued by
//! the backend. Only the payload is read here; the signature is never checked.
//! The resulting [`Claims`] are therefore unverified: they drive what the UI
//! shows, and every identity-sensitive decision must be re-checked by the
//! backend, which receives the raw credential.

#[cfg(test)]
#[path = "claims_test.rs"]
mod claims_test;

use base64::Engine as _;
use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use serde::Deserialize;

use crate::net::types::User;

/// Base64url with optional padding. Standard-alphabet `+` and `/` are
/// folded into `-` and `_` before decoding, so either alphabet is accepted.
const PAYLOAD_ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    GeneralPurposeConfig::new()
        .with_decode_padding_mode(DecodePaddingMode::Indifferent)
        .with_decode_allow_trailing_bits(true),
);

/// Why a stored credential cannot produce a session.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CredentialError {
    #[error("malformed credential: {0}")]
    Malformed(String),
    #[error("credential expired at {exp} (now {now})")]
    Expired { exp: u64, now: u64 },
}

/// Unverified claims carried by a credential. Unknown claims are ignored.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Claims {
    /// Subject: the user's email.
    pub sub: String,
    /// Numeric user identifier.
    pub user_id: i64,
    /// Expiry in seconds since the Unix epoch.
    pub exp: u64,
}

/// Payload as issued. Both spellings of the user id may be present.
#[derive(Deserialize)]
struct RawClaims {
    sub: String,
    user_id: Option<i64>,
    #[serde(rename = "userId")]
    user_id_camel: Option<i64>,
    exp: u64,
}

impl TryFrom<RawClaims> for Claims {
    type Error = CredentialError;

    fn try_from(raw: RawClaims) -> Result<Self, Self::Error> {
        if raw.sub.trim().is_empty() {
            return Err(malformed("empty subject"));
        }
        let user_id = raw
            .user_id
            .or(raw.user_id_camel)
            .ok_or_else(|| malformed("missing user id"))?;
        Ok(Self { sub: raw.sub, user_id, exp: raw.exp })
    }
}

impl Claims {
    /// Whether the claims are no longer valid at `now` (epoch seconds).
    /// A credential expiring exactly at `now` is already expired.
    #[must_use]
    pub fn is_expired_at(&self, now: u64) -> bool {
        self.exp <= now
    }

    /// Project the claims into a [`User`] if they are still valid at `now`.
    ///
    /// # Errors
    ///
    /// Returns [`CredentialError::Expired`] when `exp <= now`.
    pub fn into_user(self, now: u64) -> Result<User, CredentialError> {
        if self.is_expired_at(now) {
            return Err(CredentialError::Expired { exp: self.exp, now });
        }
        Ok(User { id: self.user_id, email: self.sub })
    }
}

/// Parse the claims out of `credential` without verifying its signature.
///
/// Total over all inputs: anything that is not a compact token whose payload
/// holds a non-empty `sub`, an integer `user_id` (or `userId`; `user_id` wins
/// when both are present), and a non-negative integer `exp` yields
/// [`CredentialError::Malformed`]. The payload may use the base64url or the
/// standard base64 alphabet, with or without padding.
///
/// # Errors
///
/// Returns [`CredentialError::Malformed`] describing the first problem found.
pub fn decode(credential: &str) -> Result<Claims, CredentialError> {
    let payload = credential
        .split('.')
        .nth(1)
        .ok_or_else(|| malformed("missing payload segment"))?;
    let normalized = payload.replace('+', "-").replace('/', "_");
    let bytes = PAYLOAD_ENGINE
        .decode(normalized)
        .map_err(|e| malformed(format!("payload is not base64: {e}")))?;
    let raw: RawClaims =
        serde_json::from_slice(&bytes).map_err(|e| malformed(format!("unexpected claim shape: {e}")))?;
    Claims::try_from(raw)
}

fn malformed(reason: impl Into<String>) -> CredentialError {
    CredentialError::Malformed(reason.into())
}
