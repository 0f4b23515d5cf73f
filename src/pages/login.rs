//! Login page with email + password.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::components::{A, Redirect};

use crate::config::SessionConfig;
use crate::state::auth::SessionContext;

/// Trim the email and require both fields.
fn validate_login_input(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Enter both email and password.");
    }
    Ok((email.to_owned(), password.to_owned()))
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let config = expect_context::<SessionConfig>();
    let home_path = config.home_path.clone();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (email_value, password_value) = match validate_login_input(&email.get(), &password.get()) {
            Ok(values) => values,
            Err(message) => {
                error.set(Some(message.to_owned()));
                return;
            }
        };
        busy.set(true);
        error.set(None);

        #[cfg(feature = "hydrate")]
        {
            let auth = crate::app::browser_authenticator(&config);
            leptos::task::spawn_local(async move {
                if let Err(e) = session.login(&auth, &email_value, &password_value).await {
                    error.set(Some(e.to_string()));
                    busy.set(false);
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&config, email_value, password_value);
        }
    };

    view! {
        // Leaves the page once the session becomes authenticated.
        <Show when=move || session.state().is_authenticated()>
            <Redirect path=home_path.clone()/>
        </Show>
        <div class="login-page">
            <div class="login-card">
                <h1>"Sign in"</h1>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Sign In"
                    </button>
                </form>
                <Show when=move || error.get().is_some()>
                    <p class="login-message">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <p class="login-card__subtitle">
                    "No account? "
                    <A href="/register">"Register"</A>
                </p>
            </div>
        </div>
    }
}
