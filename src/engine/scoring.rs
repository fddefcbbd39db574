//! Coverage scoring.
//!
//! The score reduces a cohort's assignment set to a single integer:
//! `round(100 * scheduled / required)`, where `required` counts the
//! sessions the cohort's curriculum asks for. The score is advisory; it
//! only influences best-attempt selection in the restart loop.

use crate::models::{Catalog, Entry, Subject};

/// Number of sessions a cohort's curriculum requires per week.
///
/// Sums `sessions_per_week` over the cohort's mandatory subjects; a cohort
/// with an empty mandatory list falls back to the whole subject catalog.
/// Subjects are taken from `subjects` (the engine's normalized working
/// copy), not the raw catalog.
pub fn required_sessions(catalog: &Catalog, subjects: &[Subject], cohort_id: &str) -> u32 {
    let Some(cohort) = catalog.cohort(cohort_id) else {
        return 0;
    };
    let mandatory = &cohort.mandatory_subject_ids;
    subjects
        .iter()
        .filter(|s| mandatory.is_empty() || mandatory.contains(&s.id))
        .map(|s| u32::from(s.sessions_per_week))
        .sum()
}

/// Coverage score for a cohort's entries, 0-100.
///
/// Scheduled sessions are counted as distinct (subject, day, start period)
/// groups, so a three-period lab block counts as one session.
pub fn coverage_score(entries: &[Entry], required: u32) -> u32 {
    if required == 0 {
        return 100;
    }
    let scheduled = count_sessions(entries);
    let ratio = f64::from(scheduled.min(required)) * 100.0 / f64::from(required);
    ratio.round() as u32
}

/// Counts distinct sessions among entries: consecutive periods of the same
/// subject on the same day group into one session.
pub fn count_sessions(entries: &[Entry]) -> u32 {
    let mut cells: Vec<(&str, &str, _, u8)> = entries
        .iter()
        .map(|e| (e.cohort_id.as_str(), e.subject_id.as_str(), e.slot.day, e.slot.period))
        .collect();
    cells.sort();

    let mut sessions = 0;
    let mut previous: Option<(&str, &str, _, u8)> = None;
    for cell in cells {
        let continues = matches!(
            previous,
            Some(p) if p.0 == cell.0 && p.1 == cell.1 && p.2 == cell.2 && p.3 + 1 == cell.3
        );
        if !continues {
            sessions += 1;
        }
        previous = Some(cell);
    }
    sessions
}
