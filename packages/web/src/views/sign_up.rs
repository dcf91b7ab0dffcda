//! Sign-up page with email/password form.

use api::SignUpRequest;
use dioxus::prelude::*;
use ui::client;
use ui::{use_auth, AuthState};

use crate::Route;

#[component]
pub fn SignUp() -> Element {
    let mut auth = use_auth();
    let nav = use_navigator();
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut confirm_password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    // If already signed in, go home
    if !auth().loading && auth().user.is_some() && !loading() {
        nav.replace(Route::Home {});
    }

    let handle_sign_up = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            error.set(None);

            let n = name().trim().to_string();
            let request = SignUpRequest {
                email: email().trim().to_string(),
                password: password(),
                name: (!n.is_empty()).then_some(n),
            };

            // Same rules the server applies.
            if let Err(details) = request.validate() {
                if let Some(first) = details.first() {
                    error.set(Some(first.message.clone()));
                }
                return;
            }
            if request.password != confirm_password() {
                error.set(Some("Passwords do not match".to_string()));
                return;
            }

            loading.set(true);
            if let Err(e) = client::sign_up(&request).await {
                loading.set(false);
                let message = e
                    .field_message("email")
                    .or(e.field_message("password"))
                    .map(str::to_string)
                    .unwrap_or_else(|| e.to_string());
                error.set(Some(message));
                return;
            }

            match client::sign_in(request.email, request.password).await {
                Ok(user) => {
                    auth.set(AuthState {
                        user: Some(user),
                        loading: false,
                    });
                    nav.push(Route::Onboarding {});
                }
                Err(e) => {
                    tracing::warn!("Account created but sign-in failed: {}", e);
                    nav.replace(Route::SignIn {});
                }
            }
        });
    };

    rsx! {
        div {
            style: "display: flex; flex-direction: column; align-items: center; justify-content: center; min-height: 100vh; padding: 2rem;",

            h1 { style: "margin: 0 0 0.5rem; font-size: 1.75rem;", "Create Account" }
            p { class: "muted", style: "margin: 0 0 2rem;", "Join Morning Accountability" }

            form {
                onsubmit: handle_sign_up,
                style: "display: flex; flex-direction: column; gap: 0.75rem; width: 100%; max-width: 320px;",

                if let Some(err) = error() {
                    div { class: "form-error", "{err}" }
                }

                input {
                    class: "input",
                    r#type: "text",
                    placeholder: "Name (optional)",
                    value: name(),
                    oninput: move |evt: FormEvent| name.set(evt.value()),
                }

                input {
                    class: "input",
                    r#type: "email",
                    placeholder: "Email",
                    value: email(),
                    oninput: move |evt: FormEvent| email.set(evt.value()),
                }

                input {
                    class: "input",
                    r#type: "password",
                    placeholder: "Password (min 6 characters)",
                    value: password(),
                    oninput: move |evt: FormEvent| password.set(evt.value()),
                }

                input {
                    class: "input",
                    r#type: "password",
                    placeholder: "Confirm password",
                    value: confirm_password(),
                    oninput: move |evt: FormEvent| confirm_password.set(evt.value()),
                }

                button {
                    class: "btn",
                    r#type: "submit",
                    disabled: loading(),
                    if loading() { "Creating account..." } else { "Sign up" }
                }
            }

            p {
                class: "muted",
                style: "margin-top: 1.5rem; font-size: 0.875rem;",
                "Already have an account? "
                Link { to: Route::SignIn {}, "Sign in" }
            }
        }
    }
}
