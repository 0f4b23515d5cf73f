//! Authenticated landing page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mounted behind `ProtectedRoute`, so a user is present whenever this
//! renders. Logout clears the stored credential and flips the session to
//! unauthenticated; the gate then redirects to the login page.

use leptos::prelude::*;

use crate::config::SessionConfig;
use crate::state::auth::SessionContext;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let config = expect_context::<SessionConfig>();

    let on_logout = move |_| {
        session.logout(&crate::app::browser_authenticator(&config));
    };

    let email = move || session.user().map(|user| user.email).unwrap_or_default();

    view! {
        <div class="dashboard-page">
            <header class="dashboard-header">
                <h1>"Dashboard"</h1>
                <span class="dashboard-user">"Signed in as " {email}</span>
                <button class="btn" on:click=on_logout>"Log out"</button>
            </header>
        </div>
    }
}
