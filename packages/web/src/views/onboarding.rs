//! Four-step account setup wizard. Nothing here is persisted.

use dioxus::prelude::*;
use habits::onboarding::greeting;
use habits::{Onboarding as Wizard, OnboardingStep, HABIT_OPTIONS};
use ui::use_auth;

use crate::Route;

#[component]
pub fn Onboarding() -> Element {
    let auth = use_auth();
    let nav = use_navigator();
    let mut wizard = use_signal(Wizard::new);
    let mut time_error = use_signal(|| Option::<String>::None);

    let step = wizard.read().step();
    let viewer_name = auth().user.and_then(|u| u.name);

    let mut go_back = move || {
        wizard.write().back();
    };
    let mut go_next = move || {
        if let Err(e) = wizard.write().advance() {
            tracing::debug!("cannot leave step: {}", e);
        }
    };

    let body = match step {
        OnboardingStep::Welcome => rsx! {
            div {
                style: "text-align: center; display: flex; flex-direction: column; gap: 1.5rem;",
                div { style: "font-size: 3.75rem;", "🌅" }
                div {
                    h2 { style: "margin: 0 0 0.5rem;", "Welcome to Morning Accountability!" }
                    p { class: "muted", "{greeting(viewer_name.as_deref())}" }
                }
                button { class: "btn", onclick: move |_| go_next(), "Let's Get Started" }
            }
        },
        OnboardingStep::Goals => rsx! {
            div {
                style: "display: flex; flex-direction: column; gap: 1.5rem;",
                div {
                    style: "text-align: center;",
                    h2 { style: "margin: 0 0 0.5rem;", "What are your morning goals?" }
                    p { class: "muted", "Select the habits you'd like to build. You can always change these later." }
                }
                div {
                    style: "display: grid; grid-template-columns: 1fr 1fr; gap: 0.75rem;",
                    for habit in HABIT_OPTIONS {
                        div {
                            key: "{habit.id}",
                            class: if wizard.read().is_selected(habit.id) { "goal-option selected" } else { "goal-option" },
                            onclick: move |_| {
                                if let Err(e) = wizard.write().toggle_goal(habit.id) {
                                    tracing::warn!("{}", e);
                                }
                            },
                            input {
                                r#type: "checkbox",
                                checked: wizard.read().is_selected(habit.id),
                                readonly: true,
                            }
                            span { style: "font-size: 1.125rem;", "{habit.icon}" }
                            span { style: "font-size: 0.875rem; font-weight: 500;", "{habit.label}" }
                        }
                    }
                }
                div {
                    style: "display: flex; flex-direction: column; gap: 0.5rem;",
                    label { r#for: "personalGoal", "Custom Goal (Optional)" }
                    textarea {
                        id: "personalGoal",
                        class: "input",
                        rows: "3",
                        placeholder: "Describe a personal morning habit you'd like to build...",
                        value: "{wizard.read().personal_goal}",
                        oninput: move |evt: FormEvent| wizard.write().personal_goal = evt.value(),
                    }
                }
                div {
                    style: "display: flex; gap: 0.75rem;",
                    button { class: "btn btn-outline", style: "flex: 1;", onclick: move |_| go_back(), "Back" }
                    button {
                        class: "btn",
                        style: "flex: 1;",
                        disabled: !wizard.read().can_continue(),
                        onclick: move |_| go_next(),
                        "Continue"
                    }
                }
            }
        },
        OnboardingStep::Preferences => rsx! {
            div {
                style: "display: flex; flex-direction: column; gap: 1.5rem;",
                div {
                    style: "text-align: center;",
                    h2 { style: "margin: 0 0 0.5rem;", "Set your preferences" }
                    p { class: "muted", "Help us customize your experience." }
                }
                div {
                    style: "display: flex; flex-direction: column; gap: 0.5rem;",
                    label { r#for: "morningTime", "What time do you usually start your morning routine?" }
                    input {
                        id: "morningTime",
                        class: "input",
                        r#type: "time",
                        value: "{wizard.read().morning_time()}",
                        oninput: move |evt: FormEvent| {
                            match wizard.write().set_morning_time(&evt.value()) {
                                Ok(()) => time_error.set(None),
                                Err(e) => time_error.set(Some(e.to_string())),
                            }
                        },
                    }
                    if let Some(err) = time_error() {
                        div { class: "form-error", "{err}" }
                    }
                }
                div {
                    style: "display: flex; flex-direction: column; gap: 0.5rem;",
                    label { r#for: "bio", "Bio (Optional)" }
                    textarea {
                        id: "bio",
                        class: "input",
                        rows: "4",
                        placeholder: "Tell the community a bit about yourself and your goals...",
                        value: "{wizard.read().bio}",
                        oninput: move |evt: FormEvent| wizard.write().bio = evt.value(),
                    }
                    p { class: "muted", style: "margin: 0; font-size: 0.75rem;", "This will be visible on your profile to help you connect with others." }
                }
                div {
                    style: "display: flex; gap: 0.75rem;",
                    button { class: "btn btn-outline", style: "flex: 1;", onclick: move |_| go_back(), "Back" }
                    button { class: "btn", style: "flex: 1;", onclick: move |_| go_next(), "Continue" }
                }
            }
        },
        OnboardingStep::Complete => {
            let summary = wizard.read().summary();
            let options = wizard.read().selected_options();
            let personal_goal = summary.personal_goal.clone();
            rsx! {
                div {
                    style: "text-align: center; display: flex; flex-direction: column; gap: 1.5rem;",
                    div { style: "font-size: 3.75rem;", "🎉" }
                    div {
                        h2 { style: "margin: 0 0 0.5rem;", "You're all set!" }
                        p {
                            class: "muted",
                            "Welcome to the Morning Accountability community. Start sharing your progress and connecting with others on their habit-building journey."
                        }
                    }
                    div {
                        style: "background: var(--color-accent); border-radius: 8px; padding: 1rem; text-align: left;",
                        h3 { style: "margin: 0 0 0.5rem;", "Your Goals Summary:" }
                        ul {
                            style: "margin: 0; padding: 0; list-style: none; font-size: 0.875rem;",
                            for habit in options {
                                li { key: "{habit.id}", "{habit.icon} {habit.label}" }
                            }
                            if let Some(goal) = personal_goal {
                                li { "✨ {goal}" }
                            }
                        }
                    }
                    button {
                        class: "btn",
                        onclick: move |_| {
                            tracing::info!("onboarding completed: {:?}", summary);
                            nav.replace(Route::Home {});
                        },
                        "Start Your Journey"
                    }
                }
            }
        }
    };

    rsx! {
        div {
            style: "min-height: 100vh; display: flex; align-items: center; justify-content: center; padding: 1rem;",
            div {
                class: "card",
                style: "width: 100%; max-width: 32rem; padding: 1.5rem;",
                div { class: "progress", div { style: "width: {step.progress()}%;" } }
                h2 { style: "margin: 1rem 0 0.25rem; text-align: center; font-size: 1.125rem;", "Account Setup" }
                p {
                    class: "muted",
                    style: "margin: 0 0 1.5rem; text-align: center; font-size: 0.875rem;",
                    "Step {step.number()} of {OnboardingStep::COUNT}"
                }
                {body}
            }
        }
    }
}
