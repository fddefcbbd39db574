//! Academic timetabling engine.
//!
//! Generates weekly timetables for university cohorts: every required
//! teaching session is assigned a concrete (day, period, room, instructor)
//! slot, subject to hard feasibility rules, with specialized handling for
//! multi-period laboratory blocks, break-aware adjacency, multi-cohort
//! coordination, and seeded randomized restarts.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `InstitutionCalendar`, `TimeSlot`,
//!   `Subject`, `Instructor`, `Room`, `Cohort`, `Entry`, `Timetable`,
//!   `Conflict`, `Catalog`, `CommittedRegistry`
//! - **`constraints`**: Hard-constraint checking for proposed assignments
//! - **`validation`**: Catalog integrity checks (duplicate ids, dangling
//!   references, calendar defects)
//! - **`engine`**: The generation engine and its settings
//!
//! # Architecture
//!
//! The engine is a pure computation over immutable inputs: catalogs go in,
//! draft timetables come out. Feasibility gaps are reported as conflicts
//! inside the returned timetables, never as errors; only malformed inputs
//! fail a generate call. Persistence, visualization, and data entry live
//! outside this crate.
//!
//! # Quick Start
//!
//! ```no_run
//! use u_timetable::engine::{OptimizationSettings, TimetableEngine};
//! use u_timetable::models::{
//!     Catalog, Cohort, InstitutionCalendar, Instructor, Room, Subject, Weekday,
//! };
//!
//! let calendar = InstitutionCalendar::new(vec![Weekday::Monday, Weekday::Tuesday])
//!     .with_period(1, 540, 600)
//!     .with_period(2, 600, 660);
//! let catalog = Catalog::new(calendar)
//!     .with_subject(Subject::theory("CS201").with_load(2, 2, 1))
//!     .with_instructor(Instructor::new("inst-1").with_subject("cs201"))
//!     .with_room(Room::classroom("r-101", 60))
//!     .with_cohort(Cohort::new("cse-2a", 40).with_subject("cs201"));
//!
//! let engine = TimetableEngine::new();
//! let settings = OptimizationSettings::new();
//! let timetable = engine
//!     .generate_single_cohort(&catalog, "cse-2a", &settings)
//!     .expect("catalog is well-formed");
//! assert_eq!(timetable.score, 100);
//! ```

pub mod constraints;
pub mod engine;
pub mod models;
pub mod validation;

pub use constraints::check_hard_constraints;
pub use engine::{EngineError, OptimizationSettings, PriorityWeights, TimetableEngine};
