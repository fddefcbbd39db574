//! Timetabling domain models.
//!
//! Provides the value types for representing a timetabling problem and its
//! solutions: the institution's time grid, the four input catalogs, and the
//! generated timetable with its entries and conflicts.
//!
//! All kind fields are closed enumerations; catalogs are immutable inputs
//! for one engine run and entries are created only inside the engine.

mod calendar;
mod catalog;
mod cohort;
mod instructor;
mod room;
mod subject;
mod timetable;

pub use calendar::{BreakInterval, InstitutionCalendar, PeriodTiming, TimeSlot, Weekday};
pub use catalog::{Catalog, CommittedRegistry};
pub use cohort::Cohort;
pub use instructor::Instructor;
pub use room::{Room, RoomKind};
pub use subject::{Subject, SubjectKind, TimeBucket, TimePreference};
pub use timetable::{Conflict, ConflictKind, Entry, Severity, Timetable, TimetableStatus};
