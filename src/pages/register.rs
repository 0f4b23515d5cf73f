//! Registration page: email + password with optional names.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;
use leptos_router::components::{A, Redirect};

use crate::config::SessionConfig;
use crate::state::auth::SessionContext;

/// Validated registration form values.
#[derive(Clone, Debug, PartialEq, Eq)]
struct RegistrationInput {
    email: String,
    password: String,
    first_name: Option<String>,
    last_name: Option<String>,
}

/// Blank optional fields are sent as absent.
fn optional_field(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_owned())
}

fn validate_registration_input(
    email: &str,
    password: &str,
    first_name: &str,
    last_name: &str,
) -> Result<RegistrationInput, &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Enter both email and password.");
    }
    Ok(RegistrationInput {
        email: email.to_owned(),
        password: password.to_owned(),
        first_name: optional_field(first_name),
        last_name: optional_field(last_name),
    })
}

fn text_input(kind: &'static str, placeholder: &'static str, value: RwSignal<String>) -> impl IntoView {
    view! {
        <input
            class="login-input"
            type=kind
            placeholder=placeholder
            prop:value=move || value.get()
            on:input=move |ev| value.set(event_target_value(&ev))
        />
    }
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let config = expect_context::<SessionConfig>();
    let home_path = config.home_path.clone();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let first_name = RwSignal::new(String::new());
    let last_name = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let input = match validate_registration_input(
            &email.get(),
            &password.get(),
            &first_name.get(),
            &last_name.get(),
        ) {
            Ok(input) => input,
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
                let outcome = session
                    .register(
                        &auth,
                        &input.email,
                        &input.password,
                        input.first_name.as_deref(),
                        input.last_name.as_deref(),
                    )
                    .await;
                if let Err(e) = outcome {
                    error.set(Some(e.to_string()));
                    busy.set(false);
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&config, input);
        }
    };

    view! {
        <Show when=move || session.state().is_authenticated()>
            <Redirect path=home_path.clone()/>
        </Show>
        <div class="login-page">
            <div class="login-card">
                <h1>"Create account"</h1>
                <form class="login-form" on:submit=on_submit>
                    {text_input("email", "you@example.com", email)}
                    {text_input("password", "Password", password)}
                    {text_input("text", "First name (optional)", first_name)}
                    {text_input("text", "Last name (optional)", last_name)}
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Register"
                    </button>
                </form>
                <Show when=move || error.get().is_some()>
                    <p class="login-message">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <p class="login-card__subtitle">
                    "Already registered? "
                    <A href="/login">"Sign in"</A>
                </p>
            </div>
        </div>
    }
}
