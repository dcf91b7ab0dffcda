#[cfg(not(feature = "server"))]
use dioxus::prelude::*;

#[cfg(not(feature = "server"))]
use ui::AuthProvider;
#[cfg(not(feature = "server"))]
use views::{Home, Onboarding, SignIn, SignUp};

#[cfg(feature = "server")]
mod server;
#[cfg(not(feature = "server"))]
mod views;

#[cfg(not(feature = "server"))]
#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Home {},
    #[route("/auth/signin")]
    SignIn {},
    #[route("/auth/signup")]
    SignUp {},
    #[route("/auth/onboarding")]
    Onboarding {},
}

#[cfg(feature = "server")]
fn main() -> anyhow::Result<()> {
    tokio::runtime::Runtime::new()?.block_on(server::run())
}

#[cfg(not(feature = "server"))]
fn main() {
    dioxus::launch(App);
}

#[cfg(not(feature = "server"))]
#[component]
fn App() -> Element {
    rsx! {
        document::Title { "Morning Accountability" }
        document::Meta { name: "description", content: "Build better habits together" }
        style { {ui::GLOBAL_CSS} }

        AuthProvider {
            Router::<Route> {}
        }
    }
}
