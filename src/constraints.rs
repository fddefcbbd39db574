//! Hard-constraint checking for proposed assignments.
//!
//! [`check_hard_constraints`] sits on the critical path of every placement
//! attempt: given a proposed entry and the entries already placed, it
//! returns the list of hard violations. It is pure and allocates only the
//! returned vector.
//!
//! # Checked constraints
//!
//! | Kind | Trigger |
//! |------|---------|
//! | InstructorClash | an existing entry shares instructor and slot |
//! | RoomClash | an existing entry shares room and slot |
//! | CohortClash | an existing entry shares cohort and slot |
//! | CapacityShortfall | room capacity below cohort size |
//!
//! Subject-instructor eligibility is a candidate filter in the engine, not
//! a conflict kind: the placer never proposes ineligible instructors.

use crate::models::{Catalog, Conflict, Entry};

/// Checks a proposed entry against the already-placed entries.
///
/// Returns one conflict per violated constraint; an empty vector means the
/// entry may be committed. The result depends only on `entry`, `existing`,
/// and the catalog, never on call order.
pub fn check_hard_constraints(entry: &Entry, existing: &[Entry], catalog: &Catalog) -> Vec<Conflict> {
    let mut conflicts = Vec::new();

    for placed in existing {
        if !entry.same_slot(placed) {
            continue;
        }
        if placed.instructor_id == entry.instructor_id {
            conflicts.push(Conflict::instructor_clash(
                format!(
                    "instructor '{}' is double-booked on {} period {}",
                    entry.instructor_id,
                    entry.slot.day.name(),
                    entry.slot.period
                ),
                vec![entry.id.clone(), placed.id.clone()],
            ));
        }
        if placed.room_id == entry.room_id {
            conflicts.push(Conflict::room_clash(
                format!(
                    "room '{}' is double-booked on {} period {}",
                    entry.room_id,
                    entry.slot.day.name(),
                    entry.slot.period
                ),
                vec![entry.id.clone(), placed.id.clone()],
            ));
        }
        if placed.cohort_id == entry.cohort_id {
            conflicts.push(Conflict::cohort_clash(
                format!(
                    "cohort '{}' is double-booked on {} period {}",
                    entry.cohort_id,
                    entry.slot.day.name(),
                    entry.slot.period
                ),
                vec![entry.id.clone(), placed.id.clone()],
            ));
        }
    }

    if let (Some(room), Some(cohort)) = (catalog.room(&entry.room_id), catalog.cohort(&entry.cohort_id))
    {
        if !room.fits(cohort.size) {
            conflicts.push(Conflict::capacity_shortfall(
                format!(
                    "room '{}' seats {} but cohort '{}' has {} students",
                    room.id, room.capacity, cohort.id, cohort.size
                ),
                vec![entry.id.clone()],
            ));
        }
    }

    conflicts
}
