use dioxus::prelude::*;
use habits::ProfileSummary;

use crate::SignOutButton;

/// Profile card: avatar, name, bio and the streak / circles / upcoming counters.
/// The viewer's own profile also gets settings and sign-out buttons.
#[component]
pub fn UserProfileHeader(profile: ProfileSummary, #[props(default)] own_profile: bool) -> Element {
    rsx! {
        div {
            class: "card",
            style: "padding: 1.5rem;",

            div {
                style: "display: flex; align-items: flex-start; justify-content: space-between; margin-bottom: 1rem;",
                div {
                    style: "display: flex; align-items: center; gap: 1rem;",
                    div {
                        class: "avatar",
                        style: "width: 64px; height: 64px; font-size: 1.125rem;",
                        if let Some(src) = &profile.avatar {
                            img { src: "{src}", alt: "{profile.name}", width: "64", height: "64" }
                        } else {
                            "{profile.initial()}"
                        }
                    }
                    div {
                        h1 { style: "margin: 0; font-size: 1.25rem;", "{profile.name}" }
                        p { class: "muted", style: "margin: 0;", "@{profile.username}" }
                        p { style: "margin: 0.25rem 0 0; font-size: 0.875rem; max-width: 20rem;", "{profile.bio}" }
                    }
                }

                if own_profile {
                    div {
                        style: "display: flex; gap: 0.5rem;",
                        button { class: "btn btn-outline", "Settings" }
                        SignOutButton { class: "btn btn-outline" }
                    }
                }
            }

            div {
                style: "display: flex; gap: 1.5rem; font-size: 0.875rem;",
                div {
                    style: "display: flex; align-items: center; gap: 0.5rem;",
                    span { class: "badge status-completed", "🔥 {profile.streak_count}" }
                    span { class: "muted", "day streak" }
                }
                span { "👥 {profile.circles_count} circles" }
                span { "📅 {profile.upcoming_tasks} upcoming" }
            }
        }
    }
}
