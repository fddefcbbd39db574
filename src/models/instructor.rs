//! Instructor model.
//!
//! An instructor teaches the subjects they are eligible for, within weekly
//! and daily period budgets. Preferences (days, times, rooms, back-to-back
//! avoidance) bias slot ordering; budgets are enforced by the engine with a
//! relaxation floor, so an over-tight budget degrades gracefully instead of
//! emptying the week.

use serde::{Deserialize, Serialize};

use super::{TimePreference, TimeSlot, Weekday};

/// A teaching staff member.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Instructor {
    /// Unique identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Subject ids this instructor may teach.
    pub eligible_subject_ids: Vec<String>,
    /// Periods per week this instructor should not exceed.
    pub max_weekly_periods: u8,
    /// Periods per day this instructor should not exceed.
    pub max_daily_periods: u8,
    /// Days this instructor prefers to teach on.
    pub preferred_days: Vec<Weekday>,
    /// Preferred-time hints.
    pub preferred_times: Vec<TimePreference>,
    /// Whether consecutive teaching periods should be avoided.
    pub avoid_back_to_back: bool,
    /// Expected absence rate in [0, 1]. Advisory; not enforced by the engine.
    pub leave_rate: f64,
    /// Room ids this instructor prefers.
    pub preferred_room_ids: Vec<String>,
}

impl Instructor {
    /// Creates an instructor with default budgets (20 weekly, 5 daily).
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            eligible_subject_ids: Vec::new(),
            max_weekly_periods: 20,
            max_daily_periods: 5,
            preferred_days: Vec::new(),
            preferred_times: Vec::new(),
            avoid_back_to_back: false,
            leave_rate: 0.0,
            preferred_room_ids: Vec::new(),
        }
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Adds an eligible subject id.
    pub fn with_subject(mut self, subject_id: impl Into<String>) -> Self {
        self.eligible_subject_ids.push(subject_id.into());
        self
    }

    /// Sets the weekly and daily period budgets.
    pub fn with_budgets(mut self, weekly: u8, daily: u8) -> Self {
        self.max_weekly_periods = weekly;
        self.max_daily_periods = daily;
        self
    }

    /// Adds a preferred day.
    pub fn with_preferred_day(mut self, day: Weekday) -> Self {
        self.preferred_days.push(day);
        self
    }

    /// Adds a preferred-time hint.
    pub fn with_preference(mut self, preference: TimePreference) -> Self {
        self.preferred_times.push(preference);
        self
    }

    /// Marks this instructor as avoiding back-to-back periods.
    pub fn avoiding_back_to_back(mut self) -> Self {
        self.avoid_back_to_back = true;
        self
    }

    /// Sets the advisory leave rate, clamped to [0, 1].
    pub fn with_leave_rate(mut self, rate: f64) -> Self {
        self.leave_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Adds a preferred room id.
    pub fn with_preferred_room(mut self, room_id: impl Into<String>) -> Self {
        self.preferred_room_ids.push(room_id.into());
        self
    }

    /// Whether this instructor may teach the subject.
    pub fn can_teach(&self, subject_id: &str) -> bool {
        self.eligible_subject_ids.iter().any(|s| s == subject_id)
    }

    /// Whether this instructor prefers teaching on the day.
    ///
    /// Returns `true` when no preferred days are set.
    pub fn prefers_day(&self, day: Weekday) -> bool {
        self.preferred_days.is_empty() || self.preferred_days.contains(&day)
    }

    /// Whether any preferred-time hint matches the slot.
    ///
    /// Returns `true` when no hints are set.
    pub fn prefers_time(&self, slot: &TimeSlot) -> bool {
        self.preferred_times.is_empty() || self.preferred_times.iter().any(|p| p.matches(slot))
    }
}
