//! Input bundle and the committed-timetable registry.
//!
//! A [`Catalog`] carries everything one engine run reads: the institution
//! calendar plus the subject, instructor, room, and cohort catalogs. It is
//! immutable for the duration of a run; the engine never touches storage or
//! process-wide state.
//!
//! A [`CommittedRegistry`] holds previously saved timetables. When
//! generating for a cohort set C, entries of registry timetables whose
//! cohort set is disjoint from C pre-occupy their instructor and room.

use serde::{Deserialize, Serialize};

use super::{Cohort, Entry, InstitutionCalendar, Instructor, Room, Subject, Timetable};

/// Immutable input bundle for one engine run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Catalog {
    /// The institution's weekly frame.
    pub calendar: InstitutionCalendar,
    /// Subject catalog.
    pub subjects: Vec<Subject>,
    /// Instructor catalog.
    pub instructors: Vec<Instructor>,
    /// Room catalog.
    pub rooms: Vec<Room>,
    /// Cohort catalog.
    pub cohorts: Vec<Cohort>,
}

impl Catalog {
    /// Creates a catalog around a calendar.
    pub fn new(calendar: InstitutionCalendar) -> Self {
        Self {
            calendar,
            subjects: Vec::new(),
            instructors: Vec::new(),
            rooms: Vec::new(),
            cohorts: Vec::new(),
        }
    }

    /// Adds a subject.
    pub fn with_subject(mut self, subject: Subject) -> Self {
        self.subjects.push(subject);
        self
    }

    /// Adds an instructor.
    pub fn with_instructor(mut self, instructor: Instructor) -> Self {
        self.instructors.push(instructor);
        self
    }

    /// Adds a room.
    pub fn with_room(mut self, room: Room) -> Self {
        self.rooms.push(room);
        self
    }

    /// Adds a cohort.
    pub fn with_cohort(mut self, cohort: Cohort) -> Self {
        self.cohorts.push(cohort);
        self
    }

    /// Looks up a subject by id.
    pub fn subject(&self, id: &str) -> Option<&Subject> {
        self.subjects.iter().find(|s| s.id == id)
    }

    /// Looks up an instructor by id.
    pub fn instructor(&self, id: &str) -> Option<&Instructor> {
        self.instructors.iter().find(|i| i.id == id)
    }

    /// Looks up a room by id.
    pub fn room(&self, id: &str) -> Option<&Room> {
        self.rooms.iter().find(|r| r.id == id)
    }

    /// Looks up a cohort by id.
    pub fn cohort(&self, id: &str) -> Option<&Cohort> {
        self.cohorts.iter().find(|c| c.id == id)
    }

    /// Instructors eligible for a subject.
    pub fn eligible_instructors(&self, subject_id: &str) -> Vec<&Instructor> {
        self.instructors
            .iter()
            .filter(|i| i.can_teach(subject_id))
            .collect()
    }
}

/// Previously saved timetables, protected from double-booking.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CommittedRegistry {
    /// Saved timetables, each tagged with the cohorts it covers.
    pub timetables: Vec<Timetable>,
}

impl CommittedRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a saved timetable.
    pub fn with_timetable(mut self, timetable: Timetable) -> Self {
        self.timetables.push(timetable);
        self
    }

    /// Entries that pre-occupy instructors and rooms for a generation over
    /// `cohort_ids`.
    ///
    /// Only timetables whose cohort set is disjoint from `cohort_ids`
    /// contribute; a timetable being regenerated for the same cohorts is
    /// ignored so it can be replaced.
    pub fn blocking_entries(&self, cohort_ids: &[String]) -> Vec<&Entry> {
        self.timetables
            .iter()
            .filter(|t| !t.covers_any(cohort_ids))
            .flat_map(|t| t.entries.iter())
            .collect()
    }
}
