//! Seven-day date ribbon shown above the feed.
//!
//! Weeks start on Sunday. Paging moves the visible week by seven days without
//! touching the selected date; selecting a day does not move the week.

use chrono::{Datelike, Duration, NaiveDate};

/// One cell of the ribbon.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RibbonDay {
    pub date: NaiveDate,
    /// Short weekday name, e.g. "Mon".
    pub weekday: String,
    pub day_of_month: u32,
    pub is_today: bool,
    pub is_selected: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WeekRibbon {
    week_start: NaiveDate,
    selected: NaiveDate,
    today: NaiveDate,
}

impl WeekRibbon {
    /// Ribbon showing the week that contains `selected`.
    pub fn new(selected: NaiveDate, today: NaiveDate) -> Self {
        Self {
            week_start: start_of_week(selected),
            selected,
            today,
        }
    }

    pub fn week_start(&self) -> NaiveDate {
        self.week_start
    }

    pub fn selected(&self) -> NaiveDate {
        self.selected
    }

    pub fn previous_week(&mut self) {
        self.week_start -= Duration::days(7);
    }

    pub fn next_week(&mut self) {
        self.week_start += Duration::days(7);
    }

    pub fn select(&mut self, date: NaiveDate) {
        self.selected = date;
    }

    pub fn days(&self) -> Vec<RibbonDay> {
        (0..7)
            .map(|offset| {
                let date = self.week_start + Duration::days(offset);
                RibbonDay {
                    date,
                    weekday: date.format("%a").to_string(),
                    day_of_month: date.day(),
                    is_today: date == self.today,
                    is_selected: date == self.selected,
                }
            })
            .collect()
    }
}

/// The Sunday on or before `date`.
pub fn start_of_week(date: NaiveDate) -> NaiveDate {
    date - Duration::days(date.weekday().num_days_from_sunday() as i64)
}
