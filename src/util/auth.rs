//! Access gate for protected routes.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every protected route asks the same question of the current session, so
//! the decision lives here as a pure function and `ProtectedRoute` only
//! renders what it returns.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use serde::Serialize;

use crate::state::auth::SessionState;

/// What a protected route should render for the current session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GateDecision {
    /// Session is authenticated; render the protected view.
    Protected,
    /// Session is still being resolved; render a placeholder.
    Loading,
    /// No valid session; redirect to the unauthenticated entry point.
    Redirect,
}

/// Rendering contract handed to the routing layer: `{"render": "..."}`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct RenderDirective {
    pub render: GateDecision,
}

/// Decide how a protected route renders. `Resolving` never yields
/// `Protected`, so nothing protected flashes before the token check.
#[must_use]
pub fn gate(state: &SessionState) -> GateDecision {
    match state {
        SessionState::Authenticated(_) => GateDecision::Protected,
        SessionState::Resolving => GateDecision::Loading,
        SessionState::Unauthenticated => GateDecision::Redirect,
    }
}

/// [`gate`] wrapped in the routing-layer contract.
#[must_use]
pub fn render_directive(state: &SessionState) -> RenderDirective {
    RenderDirective { render: gate(state) }
}
