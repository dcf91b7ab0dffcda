//! Sign-in page with email/password and OAuth buttons.

use api::ProviderInfo;
use dioxus::prelude::*;
use ui::client;
use ui::use_auth;

use crate::Route;

/// Text for the `?error=` code the server appends when an OAuth sign-in fails.
fn sign_in_error_message(code: &str) -> &'static str {
    match code {
        "Configuration" => "That sign-in method is not available right now.",
        "AccessDenied" => "Sign-in was cancelled.",
        "OAuthSignin" => "Could not start sign-in with that provider.",
        "OAuthCallback" => "Sign-in with that provider failed. Please try again.",
        "SessionRequired" => "Please sign in to continue.",
        _ => "Sign-in failed. Please try again.",
    }
}

#[component]
pub fn SignIn() -> Element {
    let mut auth = use_auth();
    let nav = use_navigator();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| {
        client::query_param("error").map(|code| sign_in_error_message(&code).to_string())
    });
    let mut loading = use_signal(|| false);
    let providers = use_resource(client::fetch_providers);

    // If already signed in, go home
    if !auth().loading && auth().user.is_some() {
        nav.replace(Route::Home {});
    }

    let handle_sign_in = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            error.set(None);

            let e = email().trim().to_string();
            let p = password();

            if e.is_empty() {
                error.set(Some("Please enter your email".to_string()));
                return;
            }
            if p.is_empty() {
                error.set(Some("Please enter your password".to_string()));
                return;
            }

            loading.set(true);
            match client::sign_in(e, p).await {
                Ok(user) => {
                    auth.set(ui::AuthState {
                        user: Some(user),
                        loading: false,
                    });
                    nav.replace(Route::Home {});
                }
                Err(e) => {
                    loading.set(false);
                    let message = match e.status() {
                        Some(401) => "Invalid email or password".to_string(),
                        _ => e.to_string(),
                    };
                    error.set(Some(message));
                }
            }
        });
    };

    let oauth: Vec<ProviderInfo> = match &*providers.read() {
        Some(Ok(list)) => list.iter().filter(|p| p.is_oauth()).cloned().collect(),
        Some(Err(e)) => {
            tracing::warn!("Failed to load providers: {}", e);
            Vec::new()
        }
        None => Vec::new(),
    };

    rsx! {
        div {
            style: "display: flex; flex-direction: column; align-items: center; justify-content: center; min-height: 100vh; padding: 2rem;",

            h1 { style: "margin: 0 0 0.5rem; font-size: 1.75rem;", "Morning Accountability" }
            p { class: "muted", style: "margin: 0 0 2rem;", "Sign in to your account" }

            form {
                onsubmit: handle_sign_in,
                style: "display: flex; flex-direction: column; gap: 0.75rem; width: 100%; max-width: 320px;",

                if let Some(err) = error() {
                    div { class: "form-error", "{err}" }
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
                    placeholder: "Password",
                    value: password(),
                    oninput: move |evt: FormEvent| password.set(evt.value()),
                }

                button {
                    class: "btn",
                    r#type: "submit",
                    disabled: loading(),
                    if loading() { "Signing in..." } else { "Sign in" }
                }
            }

            if !oauth.is_empty() {
                div {
                    style: "display: flex; flex-direction: column; gap: 0.75rem; width: 100%; max-width: 320px; margin-top: 1.5rem;",
                    p { class: "muted", style: "margin: 0; text-align: center; font-size: 0.8125rem;", "or" }
                    for provider in oauth {
                        a {
                            key: "{provider.id}",
                            class: "btn btn-outline",
                            style: "text-align: center; text-decoration: none;",
                            href: "{provider.signin_url}",
                            "Continue with {provider.name}"
                        }
                    }
                }
            }

            p {
                class: "muted",
                style: "margin-top: 1.5rem; font-size: 0.875rem;",
                "Don't have an account? "
                Link { to: Route::SignUp {}, "Sign up" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(sign_in_error_message("AccessDenied"), "Sign-in was cancelled.");
        assert_eq!(
            sign_in_error_message("Configuration"),
            "That sign-in method is not available right now."
        );
        assert_eq!(
            sign_in_error_message("SomethingElse"),
            "Sign-in failed. Please try again."
        );
    }
}
