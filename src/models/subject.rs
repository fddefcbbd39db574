//! Subject model and the preferred-time vocabulary.
//!
//! A subject is one teaching offering of the curriculum: a theory course,
//! a laboratory, a tutorial, or a seminar. Its weekly load is described by
//! three numbers:
//!
//! - `weekly_periods`: total periods per week,
//! - `sessions_per_week`: distinct scheduled occurrences,
//! - `continuous_periods`: consecutive periods per occurrence.
//!
//! Labs are indivisible multi-period blocks; a lab declared with
//! `continuous_periods < 2` is normalized up by the engine before placement
//! (the input catalog is never mutated).

use serde::{Deserialize, Serialize};

use super::{TimeSlot, Weekday};

/// Start-time buckets for preference matching.
///
/// Morning is before 12:00, Afternoon is 12:00-17:00, Evening is 17:00
/// onward, judged by a slot's start minute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeBucket {
    Morning,
    Afternoon,
    Evening,
}

impl TimeBucket {
    /// The bucket a minutes-of-day start time falls into.
    pub fn of_minute(minute: u16) -> Self {
        if minute < 720 {
            TimeBucket::Morning
        } else if minute < 1020 {
            TimeBucket::Afternoon
        } else {
            TimeBucket::Evening
        }
    }

    /// Parses a lowercase bucket name.
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "morning" => Some(TimeBucket::Morning),
            "afternoon" => Some(TimeBucket::Afternoon),
            "evening" => Some(TimeBucket::Evening),
            _ => None,
        }
    }
}

/// A preferred-time hint from the closed vocabulary.
///
/// Token grammar: `"morning"` / `"afternoon"` / `"evening"`, a weekday name
/// (`"wednesday"`), a day-qualified bucket (`"friday-afternoon"`), or a
/// period qualifier (`"p3"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimePreference {
    /// Any slot whose start time falls in the bucket.
    Bucket(TimeBucket),
    /// Any slot on the given day.
    OnDay(Weekday),
    /// A slot on the given day whose start time falls in the bucket.
    DayBucket(Weekday, TimeBucket),
    /// A slot at the given 1-based period number.
    AtPeriod(u8),
}

impl TimePreference {
    /// Parses a preference token. Returns `None` for anything outside the
    /// closed vocabulary.
    pub fn parse(token: &str) -> Option<Self> {
        if let Some(bucket) = TimeBucket::parse(token) {
            return Some(TimePreference::Bucket(bucket));
        }
        if let Some(day) = Weekday::parse(token) {
            return Some(TimePreference::OnDay(day));
        }
        if let Some((day_part, bucket_part)) = token.split_once('-') {
            let day = Weekday::parse(day_part)?;
            let bucket = TimeBucket::parse(bucket_part)?;
            return Some(TimePreference::DayBucket(day, bucket));
        }
        if let Some(num) = token.strip_prefix('p') {
            let period: u8 = num.parse().ok()?;
            if period >= 1 {
                return Some(TimePreference::AtPeriod(period));
            }
        }
        None
    }

    /// Whether a slot satisfies this preference.
    pub fn matches(&self, slot: &TimeSlot) -> bool {
        match self {
            TimePreference::Bucket(b) => TimeBucket::of_minute(slot.start_minute) == *b,
            TimePreference::OnDay(d) => slot.day == *d,
            TimePreference::DayBucket(d, b) => {
                slot.day == *d && TimeBucket::of_minute(slot.start_minute) == *b
            }
            TimePreference::AtPeriod(p) => slot.period == *p,
        }
    }
}

/// Subject (teaching offering) classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubjectKind {
    /// Lecture-style course; sessions are usually single periods.
    Theory,
    /// Laboratory; each session is an indivisible multi-period block.
    Lab,
    /// Small-group problem session.
    Tutorial,
    /// Discussion or presentation session.
    Seminar,
}

impl SubjectKind {
    fn id_suffix(&self) -> &'static str {
        match self {
            SubjectKind::Theory => "",
            SubjectKind::Lab => "-lab",
            SubjectKind::Tutorial => "-tut",
            SubjectKind::Seminar => "-sem",
        }
    }
}

/// A subject to be timetabled.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Subject {
    /// Stable identifier, derived from the code (theory) or the code plus
    /// a kind suffix (lab/tutorial/seminar).
    pub id: String,
    /// Human course code (e.g. "CS201").
    pub code: String,
    /// Display name.
    pub name: String,
    /// Offering classification.
    pub kind: SubjectKind,
    /// Credit value.
    pub credits: u8,
    /// Total periods per week.
    pub weekly_periods: u8,
    /// Number of distinct scheduled occurrences per week.
    pub sessions_per_week: u8,
    /// Consecutive periods per occurrence.
    pub continuous_periods: u8,
    /// Preferred-time hints.
    pub preferred_times: Vec<TimePreference>,
    /// Equipment tags this subject needs in its room.
    pub required_equipment: Vec<String>,
}

impl Subject {
    /// Creates a subject. The id is derived from the code and kind.
    pub fn new(code: impl Into<String>, kind: SubjectKind) -> Self {
        let code = code.into();
        let id = format!("{}{}", code.to_lowercase(), kind.id_suffix());
        Self {
            id,
            code,
            name: String::new(),
            kind,
            credits: 0,
            weekly_periods: 1,
            sessions_per_week: 1,
            continuous_periods: 1,
            preferred_times: Vec::new(),
            required_equipment: Vec::new(),
        }
    }

    /// Creates a theory subject.
    pub fn theory(code: impl Into<String>) -> Self {
        Self::new(code, SubjectKind::Theory)
    }

    /// Creates a lab subject.
    pub fn lab(code: impl Into<String>) -> Self {
        Self::new(code, SubjectKind::Lab)
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the credit value.
    pub fn with_credits(mut self, credits: u8) -> Self {
        self.credits = credits;
        self
    }

    /// Sets the weekly load: total periods, occurrences, and periods per
    /// occurrence.
    pub fn with_load(mut self, weekly: u8, sessions: u8, continuous: u8) -> Self {
        self.weekly_periods = weekly;
        self.sessions_per_week = sessions;
        self.continuous_periods = continuous;
        self
    }

    /// Adds a preferred-time hint.
    pub fn with_preference(mut self, preference: TimePreference) -> Self {
        self.preferred_times.push(preference);
        self
    }

    /// Adds a required equipment tag.
    pub fn with_equipment(mut self, tag: impl Into<String>) -> Self {
        self.required_equipment.push(tag.into());
        self
    }

    /// Whether this subject is a lab.
    #[inline]
    pub fn is_lab(&self) -> bool {
        self.kind == SubjectKind::Lab
    }

    /// Whether any preferred-time hint matches the slot.
    ///
    /// Returns `true` when no hints are set (no preference = indifferent).
    pub fn prefers(&self, slot: &TimeSlot) -> bool {
        self.preferred_times.is_empty() || self.preferred_times.iter().any(|p| p.matches(slot))
    }
}
