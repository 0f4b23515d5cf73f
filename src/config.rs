//! Client configuration for the session core.
//!
//! SYSTEM CONTEXT
//! ==============
//! The WASM bundle has no runtime environment, so overrides are read from
//! compile-time variables when the crate is built. The resolved config is
//! provided through Leptos context by the root `App`.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Default API prefix for identity service calls.
pub const DEFAULT_API_BASE_URL: &str = "/api";
/// Default `localStorage` key holding the credential.
pub const DEFAULT_TOKEN_KEY: &str = "token";

/// Session-related paths and endpoints.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionConfig {
    /// Prefix prepended to `/auth/login` and `/auth/register`.
    pub api_base_url: String,
    /// Storage key for the single credential slot.
    pub token_key: String,
    /// Unauthenticated entry point the gate redirects to.
    pub login_path: String,
    /// Landing route after a successful sign-in.
    pub home_path: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_owned(),
            token_key: DEFAULT_TOKEN_KEY.to_owned(),
            login_path: "/login".to_owned(),
            home_path: "/dashboard".to_owned(),
        }
    }
}

impl SessionConfig {
    /// Load from `SESSION_GATE_API_BASE_URL` and `SESSION_GATE_TOKEN_KEY` as
    /// seen at compile time. Unset or empty values keep the defaults.
    #[must_use]
    pub fn from_build_env() -> Self {
        Self::from_overrides(
            option_env!("SESSION_GATE_API_BASE_URL"),
            option_env!("SESSION_GATE_TOKEN_KEY"),
        )
    }

    fn from_overrides(api_base_url: Option<&str>, token_key: Option<&str>) -> Self {
        let mut config = Self::default();
        if let Some(base) = non_empty(api_base_url) {
            config.api_base_url = base.trim_end_matches('/').to_owned();
        }
        if let Some(key) = non_empty(token_key) {
            config.token_key = key.to_owned();
        }
        config
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
