//! Input validation for timetabling catalogs.
//!
//! Checks structural integrity of a catalog before generation. Detects:
//! - Duplicate ids across each catalog
//! - Dangling subject references (cohort mandatory lists, instructor
//!   eligibility lists)
//! - Dangling room references (instructor preferred rooms)
//! - Calendar defects (no working days, non-dense or non-ascending periods,
//!   degenerate period timings)
//!
//! All problems are accumulated and reported together.

use std::collections::HashSet;

use crate::models::Catalog;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two entities share the same id.
    DuplicateId,
    /// A cohort or instructor references a subject that doesn't exist.
    InvalidSubjectReference,
    /// An instructor references a room that doesn't exist.
    InvalidRoomReference,
    /// The calendar grid is malformed.
    InvalidCalendar,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a catalog.
///
/// Checks:
/// 1. No duplicate subject/instructor/room/cohort ids
/// 2. Cohort mandatory lists reference existing subjects
/// 3. Instructor eligibility lists reference existing subjects
/// 4. Instructor preferred rooms reference existing rooms
/// 5. The calendar has working days and a dense, ascending 1-based period
///    grid with `start < end` everywhere
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with every detected issue.
pub fn validate_catalog(catalog: &Catalog) -> ValidationResult {
    let mut errors = Vec::new();

    let mut subject_ids = HashSet::new();
    for s in &catalog.subjects {
        if !subject_ids.insert(s.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate subject id: {}", s.id),
            ));
        }
    }

    let mut instructor_ids = HashSet::new();
    for i in &catalog.instructors {
        if !instructor_ids.insert(i.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate instructor id: {}", i.id),
            ));
        }
    }

    let mut room_ids = HashSet::new();
    for r in &catalog.rooms {
        if !room_ids.insert(r.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate room id: {}", r.id),
            ));
        }
    }

    let mut cohort_ids = HashSet::new();
    for c in &catalog.cohorts {
        if !cohort_ids.insert(c.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate cohort id: {}", c.id),
            ));
        }
    }

    for c in &catalog.cohorts {
        for sid in &c.mandatory_subject_ids {
            if !subject_ids.contains(sid.as_str()) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::InvalidSubjectReference,
                    format!("Cohort '{}' requires unknown subject '{}'", c.id, sid),
                ));
            }
        }
    }

    for i in &catalog.instructors {
        for sid in &i.eligible_subject_ids {
            if !subject_ids.contains(sid.as_str()) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::InvalidSubjectReference,
                    format!("Instructor '{}' is eligible for unknown subject '{}'", i.id, sid),
                ));
            }
        }
        for rid in &i.preferred_room_ids {
            if !room_ids.contains(rid.as_str()) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::InvalidRoomReference,
                    format!("Instructor '{}' prefers unknown room '{}'", i.id, rid),
                ));
            }
        }
    }

    validate_calendar(catalog, &mut errors);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn validate_calendar(catalog: &Catalog, errors: &mut Vec<ValidationError>) {
    let cal = &catalog.calendar;

    if cal.working_days.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidCalendar,
            "Calendar has no working days",
        ));
    }

    let mut seen_days = HashSet::new();
    for d in &cal.working_days {
        if !seen_days.insert(*d) {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidCalendar,
                format!("Working day '{}' listed twice", d.name()),
            ));
        }
    }

    for (index, p) in cal.periods.iter().enumerate() {
        let expected = index as u8 + 1;
        if p.number != expected {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidCalendar,
                format!(
                    "Period numbers must be dense and 1-based: position {} holds period {}",
                    index + 1,
                    p.number
                ),
            ));
        }
        if p.start_minute >= p.end_minute {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidCalendar,
                format!("Period {} has start >= end", p.number),
            ));
        }
    }

    for pair in cal.periods.windows(2) {
        if pair[1].start_minute < pair[0].end_minute {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidCalendar,
                format!(
                    "Periods {} and {} overlap in time",
                    pair[0].number, pair[1].number
                ),
            ));
        }
    }
}
