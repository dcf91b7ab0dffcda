use dioxus::prelude::*;
use habits::Tab;

fn icon(tab: Tab) -> &'static str {
    match tab {
        Tab::Feed => "🏠",
        Tab::Explore => "🔍",
        Tab::Circles => "👥",
        Tab::Profile => "👤",
    }
}

/// Fixed bottom bar with one button per [`Tab`] and a post button.
#[component]
pub fn NavigationTabs(active: Tab, on_change: EventHandler<Tab>) -> Element {
    rsx! {
        nav {
            class: "tab-bar",
            div {
                style: "display: flex; align-items: center; justify-content: space-around; max-width: 28rem; margin: 0 auto; padding: 0.5rem;",
                for tab in Tab::ALL {
                    button {
                        key: "{tab.id()}",
                        class: if tab == active { "tab active" } else { "tab" },
                        onclick: move |_| on_change.call(tab),
                        span { style: "font-size: 1.25rem;", "{icon(tab)}" }
                        span { "{tab.label()}" }
                    }
                }
                button {
                    class: "btn",
                    style: "display: flex; flex-direction: column; align-items: center; gap: 0.25rem;",
                    span { style: "font-size: 1.25rem;", "+" }
                    span { style: "font-size: 0.75rem;", "Post" }
                }
            }
        }
    }
}
