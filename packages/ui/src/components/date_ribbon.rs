use chrono::NaiveDate;
use dioxus::prelude::*;
use habits::WeekRibbon;

/// Seven-day strip with previous / next week buttons.
#[component]
pub fn DateRibbon(selected: NaiveDate, today: NaiveDate, on_select: EventHandler<NaiveDate>) -> Element {
    let mut ribbon = use_signal(|| WeekRibbon::new(selected, today));

    // The parent owns the selection; the signal only remembers the visible week.
    let mut week = ribbon();
    week.select(selected);

    rsx! {
        div {
            class: "card",
            style: "display: flex; align-items: center; justify-content: space-between; padding: 0.75rem;",

            button {
                class: "btn btn-ghost",
                title: "Previous week",
                onclick: move |_| ribbon.write().previous_week(),
                "‹"
            }

            div {
                style: "display: flex; gap: 0.25rem;",
                for day in week.days() {
                    button {
                        key: "{day.date}",
                        class: (if day.is_selected {
                            "ribbon-day selected"
                        } else if day.is_today {
                            "ribbon-day today"
                        } else {
                            "ribbon-day"
                        }),
                        onclick: move |_| on_select.call(day.date),
                        span { style: "font-size: 0.75rem; font-weight: 500;", "{day.weekday}" }
                        span { style: "font-size: 0.875rem; font-weight: 600;", "{day.day_of_month}" }
                    }
                }
            }

            button {
                class: "btn btn-ghost",
                title: "Next week",
                onclick: move |_| ribbon.write().next_week(),
                "›"
            }
        }
    }
}
