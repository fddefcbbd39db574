//! Institution calendar and the discrete time grid.
//!
//! The calendar turns an institution's working days, period timings, and
//! scheduled breaks into a canonical grid of [`TimeSlot`]s and answers
//! adjacency queries over it.
//!
//! # Time Model
//! All times are wall-clock minutes-of-day (0..1440). Period numbers are
//! 1-based and dense within a day; the same period grid repeats on every
//! working day.
//!
//! # Adjacency
//! Two slots are adjacent iff they fall on the same day, their period
//! numbers are consecutive, the first slot's end time equals the second's
//! start time, and no scheduled break overlaps the transition. A lunch or
//! tea break therefore splits a block even when the period numbers look
//! consecutive.

use serde::{Deserialize, Serialize};

/// A working day of the week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    /// Lowercase English name, as used in preference tokens.
    pub fn name(&self) -> &'static str {
        match self {
            Weekday::Monday => "monday",
            Weekday::Tuesday => "tuesday",
            Weekday::Wednesday => "wednesday",
            Weekday::Thursday => "thursday",
            Weekday::Friday => "friday",
            Weekday::Saturday => "saturday",
            Weekday::Sunday => "sunday",
        }
    }

    /// Parses a lowercase English day name.
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "monday" => Some(Weekday::Monday),
            "tuesday" => Some(Weekday::Tuesday),
            "wednesday" => Some(Weekday::Wednesday),
            "thursday" => Some(Weekday::Thursday),
            "friday" => Some(Weekday::Friday),
            "saturday" => Some(Weekday::Saturday),
            "sunday" => Some(Weekday::Sunday),
            _ => None,
        }
    }
}

/// Timing of one period within the daily grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodTiming {
    /// 1-based period number.
    pub number: u8,
    /// Start time (minutes-of-day, inclusive).
    pub start_minute: u16,
    /// End time (minutes-of-day, exclusive).
    pub end_minute: u16,
}

impl PeriodTiming {
    /// Creates a period timing.
    pub fn new(number: u8, start_minute: u16, end_minute: u16) -> Self {
        Self {
            number,
            start_minute,
            end_minute,
        }
    }
}

/// A scheduled break (e.g. lunch), applying to every working day.
///
/// Half-open interval: includes start, excludes end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakInterval {
    /// Break start (minutes-of-day, inclusive).
    pub start_minute: u16,
    /// Break end (minutes-of-day, exclusive).
    pub end_minute: u16,
}

impl BreakInterval {
    /// Creates a break interval.
    pub fn new(start_minute: u16, end_minute: u16) -> Self {
        Self {
            start_minute,
            end_minute,
        }
    }

    /// Whether this break strictly overlaps the instant `minute`.
    #[inline]
    pub fn covers(&self, minute: u16) -> bool {
        self.start_minute < minute && minute < self.end_minute
    }

    /// Whether this break overlaps the half-open interval [start, end).
    pub fn overlaps(&self, start: u16, end: u16) -> bool {
        self.start_minute < end && start < self.end_minute
    }
}

/// One concrete (day, period) cell of the weekly grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimeSlot {
    /// Working day.
    pub day: Weekday,
    /// 1-based period number.
    pub period: u8,
    /// Start time (minutes-of-day).
    pub start_minute: u16,
    /// End time (minutes-of-day).
    pub end_minute: u16,
}

impl TimeSlot {
    /// Creates a time slot.
    pub fn new(day: Weekday, period: u8, start_minute: u16, end_minute: u16) -> Self {
        Self {
            day,
            period,
            start_minute,
            end_minute,
        }
    }
}

/// The institution's weekly scheduling frame.
///
/// Working days are ordered; period timings, in ascending period order,
/// define the day's grid. Breaks interrupt adjacency between otherwise
/// back-to-back periods.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InstitutionCalendar {
    /// Ordered working days.
    pub working_days: Vec<Weekday>,
    /// Period timings in ascending period order.
    pub periods: Vec<PeriodTiming>,
    /// Scheduled breaks, applied to every working day.
    pub breaks: Vec<BreakInterval>,
}

impl InstitutionCalendar {
    /// Creates a calendar with no periods or breaks.
    pub fn new(working_days: Vec<Weekday>) -> Self {
        Self {
            working_days,
            periods: Vec::new(),
            breaks: Vec::new(),
        }
    }

    /// Adds a period timing.
    pub fn with_period(mut self, number: u8, start_minute: u16, end_minute: u16) -> Self {
        self.periods
            .push(PeriodTiming::new(number, start_minute, end_minute));
        self
    }

    /// Adds a break interval.
    pub fn with_break(mut self, start_minute: u16, end_minute: u16) -> Self {
        self.breaks.push(BreakInterval::new(start_minute, end_minute));
        self
    }

    /// Number of periods in the daily grid.
    #[inline]
    pub fn periods_per_day(&self) -> u8 {
        self.periods.len() as u8
    }

    /// The timing for a 1-based period number.
    pub fn period_timing(&self, number: u8) -> Option<&PeriodTiming> {
        self.periods.iter().find(|p| p.number == number)
    }

    /// The concrete slot for (day, period), if the period exists.
    pub fn slot(&self, day: Weekday, period: u8) -> Option<TimeSlot> {
        self.period_timing(period)
            .map(|t| TimeSlot::new(day, period, t.start_minute, t.end_minute))
    }

    /// All (day, period) slots, ordered by day index then period number.
    pub fn time_slots(&self) -> Vec<TimeSlot> {
        let mut slots = Vec::with_capacity(self.working_days.len() * self.periods.len());
        for &day in &self.working_days {
            for t in &self.periods {
                slots.push(TimeSlot::new(day, t.number, t.start_minute, t.end_minute));
            }
        }
        slots
    }

    /// Whether `b` directly follows `a` with no time gap and no break between.
    ///
    /// True iff same day, `b.period == a.period + 1`, `b.start == a.end`,
    /// and no break interval covers the transition instant.
    pub fn is_adjacent(&self, a: &TimeSlot, b: &TimeSlot) -> bool {
        if a.day != b.day || b.period != a.period + 1 {
            return false;
        }
        if b.start_minute != a.end_minute {
            return false;
        }
        !self.breaks.iter().any(|br| br.covers(a.end_minute))
    }

    /// Whether consecutive period numbers `n` and `n + 1` are adjacent.
    pub fn periods_adjacent(&self, day: Weekday, n: u8) -> bool {
        match (self.slot(day, n), self.slot(day, n + 1)) {
            (Some(a), Some(b)) => self.is_adjacent(&a, &b),
            _ => false,
        }
    }

    /// Whether `length` consecutive periods starting at `start_period`
    /// exist on `day` and are pairwise adjacent.
    pub fn is_block_feasible(&self, day: Weekday, start_period: u8, length: u8) -> bool {
        if length == 0 || !self.working_days.contains(&day) {
            return false;
        }
        if self.period_timing(start_period).is_none() {
            return false;
        }
        for offset in 0..length.saturating_sub(1) {
            if !self.periods_adjacent(day, start_period + offset) {
                return false;
            }
        }
        self.period_timing(start_period + length - 1).is_some()
    }

    /// Maximal runs of pairwise-adjacent periods on `day`.
    ///
    /// Each run is (start_period, length). The whole grid is one run when
    /// no break or time gap interrupts it.
    pub fn adjacent_runs(&self, day: Weekday) -> Vec<(u8, u8)> {
        let mut runs = Vec::new();
        let mut iter = self.periods.iter();
        let Some(first) = iter.next() else {
            return runs;
        };
        let mut start = first.number;
        let mut len: u8 = 1;
        for t in iter {
            if t.number == start + len && self.periods_adjacent(day, t.number - 1) {
                len += 1;
            } else {
                runs.push((start, len));
                start = t.number;
                len = 1;
            }
        }
        runs.push((start, len));
        runs
    }
}
