//! Timetable (solution) model.
//!
//! A timetable is a complete weekly assignment for one or more cohorts:
//! a list of entries plus the conflicts that could not be resolved and a
//! 0-100 coverage score. Multi-period sessions appear as one entry per
//! period, all sharing subject, instructor, room, and cohort.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::TimeSlot;

/// A committed assignment: one cohort, one subject, one instructor, one
/// room, at one (day, period) slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// Stable identifier, synthesized from the assignment's coordinates.
    pub id: String,
    /// Subject id.
    pub subject_id: String,
    /// Instructor id.
    pub instructor_id: String,
    /// Room id.
    pub room_id: String,
    /// Cohort id.
    pub cohort_id: String,
    /// The occupied slot.
    pub slot: TimeSlot,
}

impl Entry {
    /// Creates an entry. The id encodes cohort, subject, day, and period.
    pub fn new(
        subject_id: impl Into<String>,
        instructor_id: impl Into<String>,
        room_id: impl Into<String>,
        cohort_id: impl Into<String>,
        slot: TimeSlot,
    ) -> Self {
        let subject_id = subject_id.into();
        let cohort_id = cohort_id.into();
        let id = format!(
            "{}:{}:{}:{}",
            cohort_id,
            subject_id,
            slot.day.name(),
            slot.period
        );
        Self {
            id,
            subject_id,
            instructor_id: instructor_id.into(),
            room_id: room_id.into(),
            cohort_id,
            slot,
        }
    }

    /// Whether this entry occupies the same (day, period) as `other`.
    #[inline]
    pub fn same_slot(&self, other: &Entry) -> bool {
        self.slot.day == other.slot.day && self.slot.period == other.slot.period
    }
}

/// Classification of hard-constraint violations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConflictKind {
    /// An instructor is booked twice at the same slot.
    InstructorClash,
    /// A room is booked twice at the same slot.
    RoomClash,
    /// A cohort is booked twice at the same slot.
    CohortClash,
    /// The room does not seat the cohort.
    CapacityShortfall,
    /// A required session could not be placed at all.
    ConstraintViolation,
}

/// Conflict severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Severity {
    Low,
    Medium,
    High,
}

/// An unresolved hard-constraint violation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Conflict {
    /// Violation classification.
    pub kind: ConflictKind,
    /// Severity of the violation.
    pub severity: Severity,
    /// Human-readable description.
    pub description: String,
    /// Ids of the entries involved.
    pub entry_ids: Vec<String>,
    /// Remediation hints.
    pub suggestions: Vec<String>,
}

impl Conflict {
    /// Creates an instructor double-booking conflict.
    pub fn instructor_clash(description: impl Into<String>, entry_ids: Vec<String>) -> Self {
        Self {
            kind: ConflictKind::InstructorClash,
            severity: Severity::High,
            description: description.into(),
            entry_ids,
            suggestions: vec![
                "Assign a different eligible instructor to one of the sessions".to_string(),
                "Move one of the sessions to a free slot".to_string(),
            ],
        }
    }

    /// Creates a room double-booking conflict.
    pub fn room_clash(description: impl Into<String>, entry_ids: Vec<String>) -> Self {
        Self {
            kind: ConflictKind::RoomClash,
            severity: Severity::High,
            description: description.into(),
            entry_ids,
            suggestions: vec![
                "Use a different room with sufficient capacity".to_string(),
                "Move one of the sessions to a free slot".to_string(),
            ],
        }
    }

    /// Creates a cohort double-booking conflict.
    pub fn cohort_clash(description: impl Into<String>, entry_ids: Vec<String>) -> Self {
        Self {
            kind: ConflictKind::CohortClash,
            severity: Severity::High,
            description: description.into(),
            entry_ids,
            suggestions: vec!["Move one of the sessions to a free slot".to_string()],
        }
    }

    /// Creates a capacity-shortfall conflict.
    pub fn capacity_shortfall(description: impl Into<String>, entry_ids: Vec<String>) -> Self {
        Self {
            kind: ConflictKind::CapacityShortfall,
            severity: Severity::High,
            description: description.into(),
            entry_ids,
            suggestions: vec![
                "Choose a larger room".to_string(),
                "Split the cohort across parallel sessions".to_string(),
            ],
        }
    }

    /// Creates an unplaceable-session conflict.
    pub fn unplaced(description: impl Into<String>, suggestions: Vec<String>) -> Self {
        Self {
            kind: ConflictKind::ConstraintViolation,
            severity: Severity::High,
            description: description.into(),
            entry_ids: Vec::new(),
            suggestions,
        }
    }
}

/// Lifecycle state of a timetable.
///
/// The engine only ever emits `Draft`; approval and publication happen
/// outside the core.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimetableStatus {
    Draft,
    Approved,
    Published,
}

/// A generated weekly timetable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Timetable {
    /// Unique identifier.
    pub id: String,
    /// Generation instant.
    pub generated_at: DateTime<Utc>,
    /// Placed entries, in placement order.
    pub entries: Vec<Entry>,
    /// Unresolved conflicts.
    pub conflicts: Vec<Conflict>,
    /// Coverage score, 0-100.
    pub score: u32,
    /// Lifecycle state.
    pub status: TimetableStatus,
    /// Cohort ids this timetable covers.
    pub cohort_ids: Vec<String>,
}

impl Timetable {
    /// Creates an empty draft timetable for the given cohorts.
    pub fn draft(id: impl Into<String>, cohort_ids: Vec<String>) -> Self {
        Self {
            id: id.into(),
            generated_at: Utc::now(),
            entries: Vec::new(),
            conflicts: Vec::new(),
            score: 0,
            status: TimetableStatus::Draft,
            cohort_ids,
        }
    }

    /// Whether no conflicts were reported.
    pub fn is_clean(&self) -> bool {
        self.conflicts.is_empty()
    }

    /// Entries occupying the given (day, period).
    pub fn entries_at(&self, slot: &TimeSlot) -> Vec<&Entry> {
        self.entries
            .iter()
            .filter(|e| e.slot.day == slot.day && e.slot.period == slot.period)
            .collect()
    }

    /// Entries for a given subject.
    pub fn entries_for_subject(&self, subject_id: &str) -> Vec<&Entry> {
        self.entries
            .iter()
            .filter(|e| e.subject_id == subject_id)
            .collect()
    }

    /// Entries for a given cohort.
    pub fn entries_for_cohort(&self, cohort_id: &str) -> Vec<&Entry> {
        self.entries
            .iter()
            .filter(|e| e.cohort_id == cohort_id)
            .collect()
    }

    /// Whether this timetable covers any of the given cohorts.
    pub fn covers_any(&self, cohort_ids: &[String]) -> bool {
        self.cohort_ids.iter().any(|c| cohort_ids.contains(c))
    }

    /// Number of entries.
    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }
}
