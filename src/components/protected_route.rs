//! Route wrapper that applies the access gate.

use leptos::prelude::*;
use leptos_router::components::Redirect;

use crate::config::SessionConfig;
use crate::state::auth::SessionContext;
use crate::util::auth::{GateDecision, gate};

/// Renders `children` only for an authenticated session.
///
/// While the startup check is still running a placeholder is shown instead,
/// and a signed-out visitor is redirected to the login path.
#[component]
pub fn ProtectedRoute(children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let login_path = expect_context::<SessionConfig>().login_path;

    move || match gate(&session.state()) {
        GateDecision::Protected => children().into_any(),
        GateDecision::Loading => view! { <div class="session-loading">"Loading..."</div> }.into_any(),
        GateDecision::Redirect => view! { <Redirect path=login_path.clone()/> }.into_any(),
    }
}
