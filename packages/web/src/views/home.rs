//! Home page: feed, profile and placeholder tabs.

use chrono::Local;
use dioxus::prelude::*;
use habits::{sample_feed, Post, ProfileSummary, Proof, Tab};
use ui::{use_auth, AuthState, DailyPostCard, DateRibbon, NavigationTabs, UserProfileHeader};

use crate::Route;

fn viewer_profile(state: &AuthState) -> ProfileSummary {
    let user = state.user.as_ref();
    ProfileSummary::for_viewer(
        user.and_then(|u| u.name.as_deref()),
        user.map(|u| u.email.as_str()),
    )
}

#[component]
pub fn Home() -> Element {
    let auth = use_auth();
    let nav = use_navigator();
    let today = Local::now().date_naive();
    let mut active_tab = use_signal(Tab::default);
    let mut selected_date = use_signal(|| today);
    let mut posts = use_signal(Vec::<Post>::new);

    // The session may have expired since the page was served.
    if !auth().loading && auth().user.is_none() {
        nav.replace(Route::SignIn {});
    }

    use_effect(move || {
        let state = auth();
        if !state.loading {
            posts.set(sample_feed(&viewer_profile(&state)));
        }
    });

    let mut advance = move |id: String| {
        if let Some(post) = posts.write().iter_mut().find(|p| p.id == id) {
            let status = post.advance_status();
            tracing::info!("post {} is now {}", id, status.label());
        }
    };

    let mut add_proof = move |id: String, proof: Proof| {
        if let Some(post) = posts.write().iter_mut().find(|p| p.id == id) {
            if let Err(e) = post.attach_proof(proof) {
                tracing::warn!("cannot add proof to post {}: {}", id, e);
            }
        }
    };

    let profile = viewer_profile(&auth());

    let content = match active_tab() {
        Tab::Feed => rsx! {
            div {
                style: "display: flex; flex-direction: column; gap: 1.5rem;",
                DateRibbon {
                    selected: selected_date(),
                    today: today,
                    on_select: move |date| selected_date.set(date),
                }
                div {
                    style: "display: flex; flex-direction: column; gap: 1rem;",
                    {posts().into_iter().map(move |post| {
                        let advance_id = post.id.clone();
                        let proof_id = post.id.clone();
                        rsx! {
                            DailyPostCard {
                                key: "{post.id}",
                                post: post,
                                on_advance: move |_| advance(advance_id.clone()),
                                on_add_proof: move |proof| add_proof(proof_id.clone(), proof),
                            }
                        }
                    })}
                }
            }
        },
        Tab::Profile => rsx! {
            div {
                style: "display: flex; flex-direction: column; gap: 1.5rem;",
                UserProfileHeader { profile: profile, own_profile: true }
                p {
                    class: "muted",
                    style: "text-align: center; padding: 2rem 0;",
                    "Your recent posts will appear here"
                }
            }
        },
        tab => rsx! {
            p {
                class: "muted",
                style: "text-align: center; padding: 3rem 0;",
                "{tab.placeholder().unwrap_or_default()}"
            }
        },
    };

    rsx! {
        div {
            style: "min-height: 100vh; padding-bottom: 5rem;",
            div {
                style: "max-width: 28rem; margin: 0 auto; padding: 1rem;",
                header {
                    style: "margin-bottom: 1.5rem; text-align: center;",
                    h1 { style: "margin: 0; font-size: 1.5rem;", "Morning Accountability" }
                    p { class: "muted", style: "margin: 0.25rem 0 0; font-size: 0.875rem;", "Build better habits together" }
                }
                {content}
            }

            NavigationTabs {
                active: active_tab(),
                on_change: move |tab| active_tab.set(tab),
            }
        }
    }
}
