//! One habit post in the feed.

use dioxus::prelude::*;
use habits::{Post, Proof};

/// Card for a single [`Post`].
///
/// The card owns no post state: `on_advance` asks the parent to move the post
/// to its next status and `on_add_proof` hands over a text proof once the post
/// is completed.
#[component]
pub fn DailyPostCard(
    post: Post,
    on_advance: EventHandler<()>,
    on_add_proof: EventHandler<Proof>,
) -> Element {
    let mut proof_draft = use_signal(|| Option::<String>::None);
    let status = post.status;

    let submit_proof = move |_| {
        if let Some(text) = proof_draft() {
            let text = text.trim().to_string();
            if !text.is_empty() {
                on_add_proof.call(Proof::text(text));
                proof_draft.set(None);
            }
        }
    };

    rsx! {
        div {
            class: "card",
            style: "display: flex; flex-direction: column; gap: 1rem;",

            div {
                style: "display: flex; align-items: center; justify-content: space-between;",
                div {
                    style: "display: flex; align-items: center; gap: 0.75rem;",
                    div {
                        class: "avatar",
                        style: "width: 40px; height: 40px;",
                        if let Some(src) = &post.user.avatar {
                            img { src: "{src}", alt: "{post.user.name}", width: "40", height: "40" }
                        } else {
                            "{post.user.initial()}"
                        }
                    }
                    div {
                        p { style: "margin: 0; font-weight: 600; font-size: 0.875rem;", "{post.user.name}" }
                        p { class: "muted", style: "margin: 0; font-size: 0.75rem;", "@{post.user.username}" }
                    }
                }
                span { class: "badge {status.css_class()}", "{status.label()}" }
            }

            div {
                p { style: "margin: 0; font-size: 0.875rem; line-height: 1.5;", "{post.content}" }
                p { class: "muted", style: "margin: 0.25rem 0 0; font-size: 0.75rem;", "{post.timestamp}" }
            }

            if let Some(proof) = &post.proof {
                div {
                    style: "padding: 0.75rem; background: var(--color-muted); border-radius: 8px;",
                    p { class: "muted", style: "margin: 0 0 0.5rem; font-size: 0.75rem; font-weight: 500;", "Proof submitted" }
                    p { style: "margin: 0; font-size: 0.875rem;", "{proof.summary()}" }
                }
            }

            if let Some(draft) = proof_draft() {
                div {
                    style: "display: flex; flex-direction: column; gap: 0.5rem;",
                    textarea {
                        class: "input",
                        rows: "2",
                        placeholder: "How did it go?",
                        value: "{draft}",
                        oninput: move |evt: FormEvent| proof_draft.set(Some(evt.value())),
                    }
                    div {
                        style: "display: flex; gap: 0.5rem; justify-content: flex-end;",
                        button {
                            class: "btn btn-outline",
                            onclick: move |_| proof_draft.set(None),
                            "Cancel"
                        }
                        button {
                            class: "btn",
                            disabled: draft.trim().is_empty(),
                            onclick: submit_proof,
                            "Submit Proof"
                        }
                    }
                }
            }

            div {
                style: "display: flex; align-items: center; justify-content: space-between;",
                div {
                    class: "muted",
                    style: "display: flex; gap: 1rem; font-size: 0.75rem;",
                    span { "♥ {post.reactions}" }
                    span { "💬 {post.comments}" }
                }
                div {
                    style: "display: flex; gap: 0.5rem;",
                    if post.can_add_proof() && proof_draft().is_none() {
                        button {
                            class: "btn btn-outline",
                            onclick: move |_| proof_draft.set(Some(String::new())),
                            "Add Proof"
                        }
                    }
                    if post.shows_action() {
                        button {
                            class: "btn",
                            onclick: move |_| on_advance.call(()),
                            "{status.action()}"
                        }
                    }
                }
            }
        }
    }
}
