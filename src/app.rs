//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Redirect, Route, Router, Routes},
};

use crate::components::protected_route::ProtectedRoute;
use crate::config::SessionConfig;
use crate::net::api::HttpIdentityService;
use crate::net::authenticator::Authenticator;
use crate::pages::{dashboard::DashboardPage, login::LoginPage, register::RegisterPage};
use crate::state::auth::SessionContext;
use crate::util::clock::now_epoch_secs;
use crate::util::token_store::LocalStorageTokenStore;

/// Authenticator wired to the browser's HTTP client and `localStorage`.
pub type BrowserAuthenticator = Authenticator<HttpIdentityService, LocalStorageTokenStore>;

pub fn browser_authenticator(config: &SessionConfig) -> BrowserAuthenticator {
    Authenticator::new(
        HttpIdentityService::from_config(config),
        LocalStorageTokenStore::new(config.token_key.clone()),
    )
}

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session context and config, resolves the stored credential
/// once on the client, and sets up routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = SessionConfig::from_build_env();
    let session = SessionContext::new();
    provide_context(config.clone());
    provide_context(session);

    // Effects only run in the browser; server-rendered HTML stays `Resolving`.
    let store = LocalStorageTokenStore::new(config.token_key.clone());
    Effect::new(move || {
        session.resolve(&store, now_epoch_secs());
    });

    view! {
        <Title text="Sign in"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("register") view=RegisterPage/>
                <Route
                    path=StaticSegment("dashboard")
                    view=|| view! { <ProtectedRoute><DashboardPage/></ProtectedRoute> }
                />
                <Route path=StaticSegment("") view=HomeRedirect/>
            </Routes>
        </Router>
    }
}

/// `/` forwards to the configured home path.
#[component]
fn HomeRedirect() -> impl IntoView {
    let home_path = expect_context::<SessionConfig>().home_path;
    view! { <Redirect path=home_path/> }
}
