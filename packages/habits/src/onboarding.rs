//! # Account setup wizard
//!
//! Four fixed screens walked in order:
//!
//! | Step | Progress | Leaves forward when |
//! |------|----------|---------------------|
//! | [`OnboardingStep::Welcome`] | 25 | always |
//! | [`OnboardingStep::Goals`] | 50 | at least one habit is selected |
//! | [`OnboardingStep::Preferences`] | 75 | always |
//! | [`OnboardingStep::Complete`] | 100 | never (terminal) |
//!
//! The selections are local to the wizard and are discarded when the user
//! leaves the page.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A predefined habit the user can pick on the goals screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HabitOption {
    pub id: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
}

pub const HABIT_OPTIONS: [HabitOption; 8] = [
    HabitOption { id: "exercise", label: "Exercise/Workout", icon: "💪" },
    HabitOption { id: "reading", label: "Reading", icon: "📚" },
    HabitOption { id: "meditation", label: "Meditation/Mindfulness", icon: "🧘" },
    HabitOption { id: "journaling", label: "Journaling", icon: "✍️" },
    HabitOption { id: "water", label: "Drink Water", icon: "💧" },
    HabitOption { id: "sleep", label: "Better Sleep", icon: "😴" },
    HabitOption { id: "nutrition", label: "Healthy Eating", icon: "🥗" },
    HabitOption { id: "learning", label: "Learning/Studying", icon: "🎓" },
];

pub fn habit_option(id: &str) -> Option<&'static HabitOption> {
    HABIT_OPTIONS.iter().find(|h| h.id == id)
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OnboardingStep {
    #[default]
    Welcome,
    Goals,
    Preferences,
    Complete,
}

impl OnboardingStep {
    /// Percentage shown in the progress bar.
    pub fn progress(self) -> u8 {
        match self {
            OnboardingStep::Welcome => 25,
            OnboardingStep::Goals => 50,
            OnboardingStep::Preferences => 75,
            OnboardingStep::Complete => 100,
        }
    }

    /// 1-based position, for "Step n of 4".
    pub fn number(self) -> u8 {
        self.progress() / 25
    }

    pub const COUNT: u8 = 4;

    fn next(self) -> Self {
        match self {
            OnboardingStep::Welcome => OnboardingStep::Goals,
            OnboardingStep::Goals => OnboardingStep::Preferences,
            OnboardingStep::Preferences | OnboardingStep::Complete => OnboardingStep::Complete,
        }
    }

    fn previous(self) -> Self {
        match self {
            OnboardingStep::Welcome | OnboardingStep::Goals => OnboardingStep::Welcome,
            OnboardingStep::Preferences => OnboardingStep::Goals,
            OnboardingStep::Complete => OnboardingStep::Preferences,
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum OnboardingError {
    #[error("select at least one habit to continue")]
    NoGoalsSelected,
    #[error("unknown habit: {0}")]
    UnknownHabit(String),
    #[error("morning time must be HH:MM, got {0:?}")]
    InvalidTime(String),
}

/// What the user chose, as shown on the final screen.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OnboardingSummary {
    pub goals: Vec<String>,
    pub personal_goal: Option<String>,
    pub morning_time: String,
    pub bio: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Onboarding {
    step: OnboardingStep,
    selected_goals: Vec<String>,
    pub personal_goal: String,
    morning_time: NaiveTime,
    pub bio: String,
}

impl Default for Onboarding {
    fn default() -> Self {
        Self {
            step: OnboardingStep::Welcome,
            selected_goals: Vec::new(),
            personal_goal: String::new(),
            morning_time: NaiveTime::from_hms_opt(7, 0, 0).unwrap_or_default(),
            bio: String::new(),
        }
    }
}

impl Onboarding {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&self) -> OnboardingStep {
        self.step
    }

    pub fn selected_goals(&self) -> &[String] {
        &self.selected_goals
    }

    pub fn is_selected(&self, goal_id: &str) -> bool {
        self.selected_goals.iter().any(|g| g == goal_id)
    }

    /// Select the habit if it is not selected, otherwise deselect it.
    pub fn toggle_goal(&mut self, goal_id: &str) -> Result<(), OnboardingError> {
        if habit_option(goal_id).is_none() {
            return Err(OnboardingError::UnknownHabit(goal_id.to_string()));
        }
        if let Some(pos) = self.selected_goals.iter().position(|g| g == goal_id) {
            self.selected_goals.remove(pos);
        } else {
            self.selected_goals.push(goal_id.to_string());
        }
        Ok(())
    }

    pub fn can_continue(&self) -> bool {
        match self.step {
            OnboardingStep::Goals => !self.selected_goals.is_empty(),
            OnboardingStep::Complete => false,
            _ => true,
        }
    }

    pub fn advance(&mut self) -> Result<OnboardingStep, OnboardingError> {
        if self.step == OnboardingStep::Goals && self.selected_goals.is_empty() {
            return Err(OnboardingError::NoGoalsSelected);
        }
        self.step = self.step.next();
        Ok(self.step)
    }

    pub fn back(&mut self) -> OnboardingStep {
        self.step = self.step.previous();
        self.step
    }

    /// Morning time formatted as `HH:MM`.
    pub fn morning_time(&self) -> String {
        self.morning_time.format("%H:%M").to_string()
    }

    pub fn set_morning_time(&mut self, value: &str) -> Result<(), OnboardingError> {
        self.morning_time = NaiveTime::parse_from_str(value.trim(), "%H:%M")
            .map_err(|_| OnboardingError::InvalidTime(value.to_string()))?;
        Ok(())
    }

    /// Habit options in the order they were selected.
    pub fn selected_options(&self) -> Vec<&'static HabitOption> {
        self.selected_goals
            .iter()
            .filter_map(|id| habit_option(id))
            .collect()
    }

    pub fn summary(&self) -> OnboardingSummary {
        let non_empty = |s: &str| {
            let s = s.trim();
            (!s.is_empty()).then(|| s.to_string())
        };
        OnboardingSummary {
            goals: self.selected_goals.clone(),
            personal_goal: non_empty(&self.personal_goal),
            morning_time: self.morning_time(),
            bio: non_empty(&self.bio),
        }
    }
}

/// Welcome greeting, personalised with the viewer's first name when known.
pub fn greeting(name: Option<&str>) -> String {
    let base = "Let's set up your account and get you started on your journey to better habits.";
    match name.and_then(|n| n.split_whitespace().next()) {
        Some(first) => format!("{base} Hi {first}!"),
        None => base.to_string(),
    }
}
