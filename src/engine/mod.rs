//! The timetable generation engine.
//!
//! Two public entry points share one inner machinery:
//!
//! - [`TimetableEngine::generate_single_cohort`]: one timetable for one
//!   cohort, optionally steering away from a set of (day, period)
//!   patterns so repeated generations produce varied layouts.
//! - [`TimetableEngine::generate_multi_cohort`]: one timetable per cohort
//!   of a set, coordinated so instructors and rooms are never
//!   double-booked across the set or against committed timetables from a
//!   [`CommittedRegistry`](crate::models::CommittedRegistry).
//!
//! # Algorithm
//!
//! Each generation runs up to 10 seeded attempts. An attempt places labs
//! first (longest blocks), then continuous theory, then single periods,
//! evicting and rescheduling cheaper entries when a lab demands a slot.
//! The best attempt (by entry count, then score) is kept; the loop stops
//! early once every required session is placed, or — after the fifth
//! attempt — once 85% of them are.
//!
//! # Failure model
//!
//! Input problems (empty catalogs, unknown cohorts, arity) fail fast with
//! [`EngineError`] before placement begins. After validation the engine
//! always returns timetables: unplaceable sessions become conflicts in
//! the result and depress its score, and the caller decides what a
//! non-empty conflict list means.

mod placer;
mod rng;
mod scoring;
mod settings;

pub use scoring::{count_sessions, coverage_score, required_sessions};
pub use settings::{OptimizationSettings, PriorityWeights};

use std::time::Instant;

use log::{debug, info};
use thiserror::Error;

use crate::models::{
    Catalog, CommittedRegistry, Conflict, Entry, Subject, Timetable,
};
use crate::validation::{validate_catalog, ValidationError};

use placer::Placer;
use rng::Lcg;

/// Maximum placement attempts per generation call.
const MAX_ATTEMPTS: u32 = 10;
/// Attempts after which an 85%-coverage result is accepted.
const SETTLE_AFTER_ATTEMPTS: u32 = 5;

/// Engine-level input errors, raised before placement begins.
#[derive(Debug, Error)]
pub enum EngineError {
    /// A required catalog is empty.
    #[error("catalog has no {0}")]
    EmptyCatalog(&'static str),

    /// A requested cohort id is not in the catalog.
    #[error("unknown cohort id: {0}")]
    UnknownCohort(String),

    /// Multi-cohort generation was called with fewer than two cohorts.
    #[error("multi-cohort generation needs at least two cohorts, got {0}")]
    TooFewCohorts(usize),

    /// The catalog failed structural validation.
    #[error("catalog failed validation with {} error(s)", .0.len())]
    InvalidCatalog(Vec<ValidationError>),
}

/// The constraint-driven timetable generator.
///
/// The engine is stateless: every call carries its own catalog, settings,
/// and registry, and nothing is shared across invocations.
///
/// # Example
///
/// ```no_run
/// use u_timetable::engine::{OptimizationSettings, TimetableEngine};
/// use u_timetable::models::Catalog;
///
/// # fn catalog() -> Catalog { unimplemented!() }
/// let engine = TimetableEngine::new();
/// let settings = OptimizationSettings::new().with_seed(42);
/// let timetable = engine
///     .generate_single_cohort(&catalog(), "cse-2a", &settings)
///     .unwrap();
/// println!("score {}", timetable.score);
/// ```
#[derive(Debug, Clone, Default)]
pub struct TimetableEngine;

impl TimetableEngine {
    /// Creates an engine.
    pub fn new() -> Self {
        Self
    }

    /// Generates one timetable for one cohort.
    ///
    /// `settings.avoided_patterns` is honored: listed (day, period) cells
    /// are removed from the candidate slots, so regenerating with the
    /// previous result's pattern produces a different layout.
    pub fn generate_single_cohort(
        &self,
        catalog: &Catalog,
        cohort_id: &str,
        settings: &OptimizationSettings,
    ) -> Result<Timetable, EngineError> {
        let cohort_ids = vec![cohort_id.to_string()];
        let registry = CommittedRegistry::new();
        let mut timetables = self.generate(catalog, &cohort_ids, settings, &registry, true)?;
        match timetables.pop() {
            Some(timetable) => Ok(timetable),
            None => Err(EngineError::UnknownCohort(cohort_id.to_string())),
        }
    }

    /// Generates one timetable per cohort, coordinated across the set and
    /// against the registry.
    ///
    /// Entries of registry timetables whose cohort set is disjoint from
    /// `cohort_ids` pre-occupy their instructor and room; timetables
    /// covering any requested cohort are being replaced and are ignored.
    /// Output order matches `cohort_ids`.
    pub fn generate_multi_cohort(
        &self,
        catalog: &Catalog,
        cohort_ids: &[String],
        settings: &OptimizationSettings,
        registry: &CommittedRegistry,
    ) -> Result<Vec<Timetable>, EngineError> {
        if cohort_ids.len() < 2 {
            return Err(EngineError::TooFewCohorts(cohort_ids.len()));
        }
        self.generate(catalog, cohort_ids, settings, registry, false)
    }

    /// Shared generation machinery.
    fn generate(
        &self,
        catalog: &Catalog,
        cohort_ids: &[String],
        settings: &OptimizationSettings,
        registry: &CommittedRegistry,
        single_mode: bool,
    ) -> Result<Vec<Timetable>, EngineError> {
        validate_inputs(catalog, cohort_ids)?;

        let subjects = normalize_subjects(&catalog.subjects);
        let blocked: Vec<Entry> = registry
            .blocking_entries(cohort_ids)
            .into_iter()
            .cloned()
            .collect();

        let target: u32 = cohort_ids
            .iter()
            .map(|id| required_sessions(catalog, &subjects, id))
            .sum();
        let min_acceptable = target * 85 / 100;

        let base_seed = settings.base_seed();
        let mut seed_stream = Lcg::new(base_seed);
        let started = Instant::now();

        info!(
            "generating for {} cohort(s): {} sessions required, seed {:#010x}",
            cohort_ids.len(),
            target,
            base_seed
        );

        let mut best: Option<AttemptOutcome> = None;
        for attempt in 1..=MAX_ATTEMPTS {
            if attempt > 1 {
                if let Some(limit) = settings.time_limit_seconds {
                    if started.elapsed().as_secs() >= limit {
                        debug!("time limit reached after {} attempt(s)", attempt - 1);
                        break;
                    }
                }
            }

            let attempt_seed = seed_stream.next_value();
            let result = Placer::new(
                catalog,
                &subjects,
                settings,
                blocked.clone(),
                single_mode,
                attempt_seed,
            )
            .run(cohort_ids);

            let outcome = AttemptOutcome::evaluate(result.entries, result.conflicts, target);
            debug!(
                "attempt {}: {} entries, {} sessions, score {}",
                attempt, outcome.entry_count, outcome.sessions, outcome.score
            );

            let improved = best
                .as_ref()
                .map_or(true, |b| (outcome.entry_count, outcome.score) > (b.entry_count, b.score));
            if improved {
                best = Some(outcome);
            }

            let best_sessions = best.as_ref().map_or(0, |b| b.sessions);
            if best_sessions >= target {
                debug!("full coverage after attempt {}", attempt);
                break;
            }
            if attempt >= SETTLE_AFTER_ATTEMPTS && best_sessions >= min_acceptable {
                debug!("acceptable coverage after attempt {}", attempt);
                break;
            }
        }

        let best = best.unwrap_or_else(|| AttemptOutcome::evaluate(Vec::new(), Vec::new(), target));
        Ok(assemble_timetables(
            catalog, &subjects, cohort_ids, base_seed, best,
        ))
    }
}

/// One attempt's result with the statistics the restart loop ranks by.
struct AttemptOutcome {
    entries: Vec<Entry>,
    conflicts: Vec<(String, Conflict)>,
    entry_count: usize,
    sessions: u32,
    score: u32,
}

impl AttemptOutcome {
    fn evaluate(entries: Vec<Entry>, conflicts: Vec<(String, Conflict)>, target: u32) -> Self {
        let entry_count = entries.len();
        let sessions = count_sessions(&entries);
        let score = coverage_score(&entries, target);
        Self {
            entries,
            conflicts,
            entry_count,
            sessions,
            score,
        }
    }
}

fn validate_inputs(catalog: &Catalog, cohort_ids: &[String]) -> Result<(), EngineError> {
    if catalog.subjects.is_empty() {
        return Err(EngineError::EmptyCatalog("subjects"));
    }
    if catalog.instructors.is_empty() {
        return Err(EngineError::EmptyCatalog("instructors"));
    }
    if catalog.rooms.is_empty() {
        return Err(EngineError::EmptyCatalog("rooms"));
    }
    if catalog.cohorts.is_empty() {
        return Err(EngineError::EmptyCatalog("cohorts"));
    }
    if catalog.calendar.working_days.is_empty() {
        return Err(EngineError::EmptyCatalog("working days"));
    }
    if catalog.calendar.periods.is_empty() {
        return Err(EngineError::EmptyCatalog("periods"));
    }
    for id in cohort_ids {
        if catalog.cohort(id).is_none() {
            return Err(EngineError::UnknownCohort(id.clone()));
        }
    }
    validate_catalog(catalog).map_err(EngineError::InvalidCatalog)
}

/// Per-invocation working copy of the subjects.
///
/// A one-period "lab" contradicts the lab contract, so labs declared with
/// `continuous_periods < 2` or `weekly_periods == 1` become one block of
/// `max(2, weekly_periods)` periods. Other subjects have their block
/// length clamped into `[1, weekly_periods]`. The input catalog is never
/// mutated.
fn normalize_subjects(subjects: &[Subject]) -> Vec<Subject> {
    subjects
        .iter()
        .map(|subject| {
            let mut s = subject.clone();
            if s.is_lab() && (s.continuous_periods < 2 || s.weekly_periods == 1) {
                s.continuous_periods = s.weekly_periods.max(2);
                s.sessions_per_week = 1;
            } else {
                s.continuous_periods = s.continuous_periods.clamp(1, s.weekly_periods.max(1));
            }
            s
        })
        .collect()
}

/// Splits an attempt into per-cohort draft timetables, in input order.
fn assemble_timetables(
    catalog: &Catalog,
    subjects: &[Subject],
    cohort_ids: &[String],
    base_seed: u32,
    best: AttemptOutcome,
) -> Vec<Timetable> {
    cohort_ids
        .iter()
        .map(|cohort_id| {
            let mut timetable = Timetable::draft(
                format!("tt-{cohort_id}-{base_seed:08x}"),
                vec![cohort_id.clone()],
            );
            timetable.entries = best
                .entries
                .iter()
                .filter(|e| &e.cohort_id == cohort_id)
                .cloned()
                .collect();
            timetable.conflicts = best
                .conflicts
                .iter()
                .filter(|(id, _)| id == cohort_id)
                .map(|(_, c)| c.clone())
                .collect();
            let required = required_sessions(catalog, subjects, cohort_id);
            timetable.score = coverage_score(&timetable.entries, required);
            info!(
                "timetable for '{}': {} entries, {} conflict(s), score {}",
                cohort_id,
                timetable.entries.len(),
                timetable.conflicts.len(),
                timetable.score
            );
            timetable
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        Cohort, ConflictKind, InstitutionCalendar, Instructor, Room, TimetableStatus, Weekday,
    };

    /// Scenario frame: 5 days, 8 periods of 60 min from 08:00, with a
    /// 20-minute break after period 3 (ends 11:00, period 4 starts 11:20).
    fn calendar() -> InstitutionCalendar {
        InstitutionCalendar::new(vec![
            Weekday::Monday,
            Weekday::Tuesday,
            Weekday::Wednesday,
            Weekday::Thursday,
            Weekday::Friday,
        ])
        .with_period(1, 480, 540)
        .with_period(2, 540, 600)
        .with_period(3, 600, 660)
        .with_period(4, 680, 740)
        .with_period(5, 740, 800)
        .with_period(6, 800, 860)
        .with_period(7, 860, 920)
        .with_period(8, 920, 980)
        .with_break(660, 680)
    }

    fn scenario_a_catalog() -> Catalog {
        Catalog::new(calendar())
            .with_subject(Subject::theory("S1").with_load(3, 3, 1))
            .with_instructor(Instructor::new("i1").with_subject("s1").with_budgets(20, 6))
            .with_room(Room::classroom("r1", 60))
            .with_cohort(Cohort::new("c1", 40).with_subject("s1"))
    }

    fn seeded(seed: u32) -> OptimizationSettings {
        OptimizationSettings::new().with_seed(seed)
    }

    /// Asserts the global invariants over a set of timetables.
    fn assert_invariants(catalog: &Catalog, timetables: &[Timetable]) {
        let all: Vec<&Entry> = timetables.iter().flat_map(|t| t.entries.iter()).collect();
        for (i, a) in all.iter().enumerate() {
            for b in all.iter().skip(i + 1) {
                if a.same_slot(b) {
                    assert_ne!(a.instructor_id, b.instructor_id, "instructor clash: {a:?} {b:?}");
                    assert_ne!(a.room_id, b.room_id, "room clash: {a:?} {b:?}");
                    assert_ne!(a.cohort_id, b.cohort_id, "cohort clash: {a:?} {b:?}");
                }
            }
        }
        for e in &all {
            let room = catalog.room(&e.room_id).unwrap();
            let cohort = catalog.cohort(&e.cohort_id).unwrap();
            assert!(room.fits(cohort.size), "capacity shortfall: {e:?}");
            let instructor = catalog.instructor(&e.instructor_id).unwrap();
            assert!(instructor.can_teach(&e.subject_id), "ineligible: {e:?}");
        }
        // Multi-period sessions form adjacent single-day blocks, and no
        // subject repeats a period number across days for a cohort.
        for t in timetables {
            for cohort_id in &t.cohort_ids {
                let mut seen: Vec<(&str, u8, Weekday)> = Vec::new();
                for e in t.entries.iter().filter(|e| &e.cohort_id == cohort_id) {
                    for (subject, period, day) in &seen {
                        if *subject == e.subject_id && *period == e.slot.period {
                            assert_eq!(
                                *day, e.slot.day,
                                "subject '{}' repeats period {} across days",
                                e.subject_id, e.slot.period
                            );
                        }
                    }
                    seen.push((&e.subject_id, e.slot.period, e.slot.day));
                }
            }
        }
    }

    /// Asserts a subject's entries form `sessions` blocks of `length`
    /// pairwise-adjacent periods, each within a single day.
    fn assert_blocks(
        catalog: &Catalog,
        timetable: &Timetable,
        subject_id: &str,
        sessions: usize,
        length: u8,
    ) {
        let entries = timetable.entries_for_subject(subject_id);
        assert_eq!(entries.len(), sessions * length as usize);

        let mut by_day: Vec<(Weekday, Vec<u8>)> = Vec::new();
        for e in &entries {
            match by_day.iter_mut().find(|(d, _)| *d == e.slot.day) {
                Some((_, periods)) => periods.push(e.slot.period),
                None => by_day.push((e.slot.day, vec![e.slot.period])),
            }
        }
        let mut blocks = 0;
        for (day, mut periods) in by_day {
            periods.sort_unstable();
            for chunk in periods.chunks(length as usize) {
                assert_eq!(chunk.len(), length as usize);
                assert!(
                    catalog.calendar.is_block_feasible(day, chunk[0], length),
                    "block at {day:?} {chunk:?} is not adjacency-feasible"
                );
                blocks += 1;
            }
        }
        assert_eq!(blocks, sessions);
    }

    #[test]
    fn test_scenario_a_single_theory() {
        let catalog = scenario_a_catalog();
        let engine = TimetableEngine::new();
        let t = engine
            .generate_single_cohort(&catalog, "c1", &seeded(42))
            .unwrap();

        assert_eq!(t.entry_count(), 3);
        assert_eq!(t.score, 100);
        assert!(t.is_clean());
        assert_eq!(t.status, TimetableStatus::Draft);
        let mut days: Vec<Weekday> = t.entries.iter().map(|e| e.slot.day).collect();
        days.sort();
        days.dedup();
        assert_eq!(days.len(), 3);
        assert_invariants(&catalog, &[t]);
    }

    #[test]
    fn test_scenario_b_lab_never_crosses_break() {
        let catalog = scenario_a_catalog()
            .with_subject(Subject::lab("L1").with_load(3, 1, 3))
            .with_instructor(Instructor::new("i2").with_subject("l1-lab"))
            .with_room(Room::lab("r-lab", 60))
            .with_cohort(
                Cohort::new("c-lab", 40)
                    .with_subject("s1")
                    .with_subject("l1-lab"),
            );
        let engine = TimetableEngine::new();

        for seed in [1, 7, 42, 99, 12345] {
            let t = engine
                .generate_single_cohort(&catalog, "c-lab", &seeded(seed))
                .unwrap();
            assert_eq!(t.score, 100, "seed {seed}");
            assert_blocks(&catalog, &t, "l1-lab", 1, 3);

            let mut periods: Vec<u8> = t
                .entries_for_subject("l1-lab")
                .iter()
                .map(|e| e.slot.period)
                .collect();
            periods.sort_unstable();
            // The break sits between periods 3 and 4: a block may not
            // straddle it.
            assert!(
                periods[0] >= 4 || periods[2] <= 3,
                "seed {seed}: block {periods:?} straddles the break"
            );
        }
    }

    #[test]
    fn test_scenario_c_shared_instructor_across_cohorts() {
        let catalog = Catalog::new(calendar())
            .with_subject(Subject::theory("S1").with_load(3, 3, 1))
            .with_instructor(Instructor::new("i1").with_subject("s1").with_budgets(20, 6))
            .with_room(Room::classroom("r1", 60))
            .with_room(Room::classroom("r2", 60))
            .with_cohort(Cohort::new("c1", 40).with_subject("s1"))
            .with_cohort(Cohort::new("c2", 40).with_subject("s1"));
        let engine = TimetableEngine::new();
        let timetables = engine
            .generate_multi_cohort(
                &catalog,
                &["c1".to_string(), "c2".to_string()],
                &seeded(42),
                &CommittedRegistry::new(),
            )
            .unwrap();

        assert_eq!(timetables.len(), 2);
        assert_eq!(timetables[0].cohort_ids, vec!["c1".to_string()]);
        assert_eq!(timetables[1].cohort_ids, vec!["c2".to_string()]);

        let mut slots: Vec<(Weekday, u8)> = timetables
            .iter()
            .flat_map(|t| t.entries.iter())
            .map(|e| (e.slot.day, e.slot.period))
            .collect();
        assert_eq!(slots.len(), 6);
        slots.sort();
        slots.dedup();
        assert_eq!(slots.len(), 6, "the sole instructor was double-booked");
        assert_invariants(&catalog, &timetables);
    }

    #[test]
    fn test_scenario_d_registry_blocks_committed_slot() {
        let catalog = Catalog::new(calendar())
            .with_subject(Subject::theory("S1").with_load(3, 3, 1))
            .with_subject(Subject::theory("S2").with_load(2, 2, 1))
            .with_instructor(Instructor::new("i1").with_subject("s1"))
            .with_instructor(Instructor::new("i2").with_subject("s2"))
            .with_room(Room::classroom("r1", 60))
            .with_room(Room::classroom("r2", 60))
            .with_cohort(Cohort::new("c1", 40).with_subject("s1"))
            .with_cohort(Cohort::new("c2", 40).with_subject("s1"))
            .with_cohort(Cohort::new("c3", 40).with_subject("s2"));

        // A previously saved timetable for c1 places i1 on Monday period 1.
        let mut saved = Timetable::draft("saved-c1", vec!["c1".to_string()]);
        saved.entries.push(Entry::new(
            "s1",
            "i1",
            "r1",
            "c1",
            catalog.calendar.slot(Weekday::Monday, 1).unwrap(),
        ));
        let registry = CommittedRegistry::new().with_timetable(saved);

        let engine = TimetableEngine::new();
        let timetables = engine
            .generate_multi_cohort(
                &catalog,
                &["c2".to_string(), "c3".to_string()],
                &seeded(42),
                &registry,
            )
            .unwrap();

        for t in &timetables {
            for e in &t.entries {
                assert!(
                    !(e.instructor_id == "i1"
                        && e.slot.day == Weekday::Monday
                        && e.slot.period == 1),
                    "entry collides with the committed slot: {e:?}"
                );
            }
        }
        assert_invariants(&catalog, &timetables);
    }

    #[test]
    fn test_scenario_d_infeasible_committed_slot_reports_conflict() {
        // One working day, one period: the registry occupies the only
        // feasible slot for the sole instructor.
        let tiny = InstitutionCalendar::new(vec![Weekday::Monday]).with_period(1, 540, 600);
        let catalog = Catalog::new(tiny.clone())
            .with_subject(Subject::theory("S1").with_load(1, 1, 1))
            .with_subject(Subject::theory("S2").with_load(1, 1, 1))
            .with_instructor(
                Instructor::new("i1").with_subject("s1").with_subject("s2"),
            )
            .with_room(Room::classroom("r1", 60))
            .with_room(Room::classroom("r2", 60))
            .with_cohort(Cohort::new("c2", 40).with_subject("s1"))
            .with_cohort(Cohort::new("c3", 40).with_subject("s2"));

        let mut saved = Timetable::draft("saved-c1", vec!["c1".to_string()]);
        saved.entries.push(Entry::new(
            "s0",
            "i1",
            "r9",
            "c1",
            tiny.slot(Weekday::Monday, 1).unwrap(),
        ));
        let registry = CommittedRegistry::new().with_timetable(saved);

        let engine = TimetableEngine::new();
        let timetables = engine
            .generate_multi_cohort(
                &catalog,
                &["c2".to_string(), "c3".to_string()],
                &seeded(7),
                &registry,
            )
            .unwrap();

        for t in &timetables {
            assert!(t.entries.is_empty());
            assert!(t.score < 100);
            assert!(t
                .conflicts
                .iter()
                .any(|c| c.kind == ConflictKind::ConstraintViolation));
        }
    }

    #[test]
    fn test_scenario_e_avoided_patterns_vary_layout() {
        let catalog = scenario_a_catalog();
        let engine = TimetableEngine::new();

        let first = engine
            .generate_single_cohort(&catalog, "c1", &seeded(42))
            .unwrap();
        let occupied: Vec<(Weekday, u8)> = first
            .entries
            .iter()
            .map(|e| (e.slot.day, e.slot.period))
            .collect();

        let mut settings = seeded(43);
        for &(day, period) in &occupied {
            settings = settings.with_avoided_pattern(day, period);
        }
        let second = engine
            .generate_single_cohort(&catalog, "c1", &settings)
            .unwrap();

        assert_eq!(second.score, 100);
        assert!(second
            .entries
            .iter()
            .all(|e| !occupied.contains(&(e.slot.day, e.slot.period))));
        assert_invariants(&catalog, &[second]);
    }

    #[test]
    fn test_scenario_f_degenerate_lab_normalized() {
        let catalog = Catalog::new(calendar())
            .with_subject(Subject::lab("L2").with_load(1, 1, 1))
            .with_instructor(Instructor::new("i1").with_subject("l2-lab"))
            .with_room(Room::lab("r-lab", 60))
            .with_cohort(Cohort::new("c1", 40).with_subject("l2-lab"));
        let engine = TimetableEngine::new();
        let t = engine
            .generate_single_cohort(&catalog, "c1", &seeded(9))
            .unwrap();

        // One block of two adjacent periods on one day.
        assert_blocks(&catalog, &t, "l2-lab", 1, 2);
        assert_eq!(t.score, 100);
        // The input catalog is untouched.
        assert_eq!(catalog.subject("l2-lab").unwrap().continuous_periods, 1);
    }

    #[test]
    fn test_determinism_given_seed() {
        let catalog = scenario_a_catalog()
            .with_subject(Subject::lab("L1").with_load(3, 1, 3))
            .with_instructor(Instructor::new("i2").with_subject("l1-lab"))
            .with_room(Room::lab("r-lab", 60));
        let engine = TimetableEngine::new();

        let a = engine
            .generate_single_cohort(&catalog, "c1", &seeded(1234))
            .unwrap();
        let b = engine
            .generate_single_cohort(&catalog, "c1", &seeded(1234))
            .unwrap();
        assert_eq!(a.entries, b.entries);
        assert_eq!(a.score, b.score);
    }

    #[test]
    fn test_different_seeds_vary_layout() {
        let catalog = scenario_a_catalog();
        let engine = TimetableEngine::new();

        let layouts: Vec<Vec<(Weekday, u8)>> = [1u32, 2, 3, 4, 5, 6, 7, 8]
            .iter()
            .map(|&seed| {
                let t = engine
                    .generate_single_cohort(&catalog, "c1", &seeded(seed))
                    .unwrap();
                let mut slots: Vec<(Weekday, u8)> = t
                    .entries
                    .iter()
                    .map(|e| (e.slot.day, e.slot.period))
                    .collect();
                slots.sort();
                slots
            })
            .collect();
        let distinct: std::collections::HashSet<_> = layouts.iter().collect();
        assert!(distinct.len() > 1, "eight seeds produced one layout");
    }

    #[test]
    fn test_empty_mandatory_list_falls_back_to_catalog() {
        let catalog = Catalog::new(calendar())
            .with_subject(Subject::theory("S1").with_load(2, 2, 1))
            .with_subject(Subject::theory("S2").with_load(1, 1, 1))
            .with_instructor(
                Instructor::new("i1").with_subject("s1").with_subject("s2"),
            )
            .with_room(Room::classroom("r1", 60))
            .with_cohort(Cohort::new("c1", 40)); // no mandatory list
        let engine = TimetableEngine::new();
        let t = engine
            .generate_single_cohort(&catalog, "c1", &seeded(5))
            .unwrap();

        // Both catalog subjects were scheduled: 2 + 1 sessions.
        assert_eq!(t.entry_count(), 3);
        assert_eq!(t.score, 100);
    }

    #[test]
    fn test_same_cohort_registry_is_ignored() {
        let catalog = Catalog::new(calendar())
            .with_subject(Subject::theory("S1").with_load(3, 3, 1))
            .with_instructor(Instructor::new("i1").with_subject("s1"))
            .with_room(Room::classroom("r1", 60))
            .with_room(Room::classroom("r2", 60))
            .with_cohort(Cohort::new("c1", 40).with_subject("s1"))
            .with_cohort(Cohort::new("c2", 40).with_subject("s1"));
        let engine = TimetableEngine::new();
        let ids = ["c1".to_string(), "c2".to_string()];

        // Registry holding only a c1 timetable: c1 is being regenerated,
        // so the registry must behave exactly like an empty one.
        let mut saved = Timetable::draft("old-c1", vec!["c1".to_string()]);
        saved.entries.push(Entry::new(
            "s1",
            "i1",
            "r1",
            "c1",
            catalog.calendar.slot(Weekday::Monday, 1).unwrap(),
        ));
        let registry = CommittedRegistry::new().with_timetable(saved);

        let with_registry = engine
            .generate_multi_cohort(&catalog, &ids, &seeded(77), &registry)
            .unwrap();
        let without = engine
            .generate_multi_cohort(&catalog, &ids, &seeded(77), &CommittedRegistry::new())
            .unwrap();

        for (a, b) in with_registry.iter().zip(&without) {
            assert_eq!(a.entries, b.entries);
        }
    }

    #[test]
    fn test_invariant_sweep_multi_cohort() {
        let catalog = Catalog::new(calendar())
            .with_subject(Subject::theory("S1").with_load(3, 3, 1))
            .with_subject(Subject::theory("S2").with_load(2, 2, 2))
            .with_subject(Subject::lab("L1").with_load(3, 1, 3))
            .with_subject(Subject::lab("L2").with_load(2, 1, 2))
            .with_instructor(
                Instructor::new("i1").with_subject("s1").with_subject("l1-lab"),
            )
            .with_instructor(
                Instructor::new("i2").with_subject("s2").with_subject("l2-lab"),
            )
            .with_instructor(Instructor::new("i3").with_subject("s1").with_subject("s2"))
            .with_room(Room::classroom("r1", 60))
            .with_room(Room::classroom("r2", 60))
            .with_room(Room::lab("r-lab1", 60))
            .with_room(Room::lab("r-lab2", 60))
            .with_cohort(
                Cohort::new("c1", 40)
                    .with_subject("s1")
                    .with_subject("s2")
                    .with_subject("l1-lab"),
            )
            .with_cohort(
                Cohort::new("c2", 40)
                    .with_subject("s1")
                    .with_subject("s2")
                    .with_subject("l2-lab"),
            )
            .with_cohort(
                Cohort::new("c3", 50)
                    .with_subject("s1")
                    .with_subject("l1-lab"),
            );
        let engine = TimetableEngine::new();
        let ids = ["c1".to_string(), "c2".to_string(), "c3".to_string()];

        for seed in [3, 14, 159, 2653] {
            let timetables = engine
                .generate_multi_cohort(&catalog, &ids, &seeded(seed), &CommittedRegistry::new())
                .unwrap();
            assert_eq!(timetables.len(), 3);
            assert_invariants(&catalog, &timetables);

            // Lab entries group into adjacency-clean blocks wherever a
            // full lab was placed.
            for t in &timetables {
                for lab_id in ["l1-lab", "l2-lab"] {
                    let n = t.entries_for_subject(lab_id).len();
                    let length = catalog.subject(lab_id).unwrap().continuous_periods;
                    if n > 0 && n % length as usize == 0 {
                        assert_blocks(&catalog, t, lab_id, n / length as usize, length);
                    }
                }
            }
        }
    }

    #[test]
    fn test_continuous_theory_block() {
        let catalog = Catalog::new(calendar())
            .with_subject(Subject::theory("S2").with_load(4, 2, 2))
            .with_instructor(Instructor::new("i1").with_subject("s2"))
            .with_room(Room::classroom("r1", 60))
            .with_cohort(Cohort::new("c1", 40).with_subject("s2"));
        let engine = TimetableEngine::new();
        let t = engine
            .generate_single_cohort(&catalog, "c1", &seeded(21))
            .unwrap();

        assert_eq!(t.score, 100);
        assert_blocks(&catalog, &t, "s2", 2, 2);
    }

    #[test]
    fn test_input_errors() {
        let engine = TimetableEngine::new();
        let settings = seeded(1);

        let no_subjects = Catalog::new(calendar())
            .with_instructor(Instructor::new("i1"))
            .with_room(Room::classroom("r1", 60))
            .with_cohort(Cohort::new("c1", 40));
        assert!(matches!(
            engine.generate_single_cohort(&no_subjects, "c1", &settings),
            Err(EngineError::EmptyCatalog("subjects"))
        ));

        let catalog = scenario_a_catalog();
        assert!(matches!(
            engine.generate_single_cohort(&catalog, "ghost", &settings),
            Err(EngineError::UnknownCohort(_))
        ));

        assert!(matches!(
            engine.generate_multi_cohort(
                &catalog,
                &["c1".to_string()],
                &settings,
                &CommittedRegistry::new()
            ),
            Err(EngineError::TooFewCohorts(1))
        ));
    }

    #[test]
    fn test_invalid_catalog_is_rejected() {
        let catalog = scenario_a_catalog().with_subject(Subject::theory("S1"));
        let engine = TimetableEngine::new();
        assert!(matches!(
            engine.generate_single_cohort(&catalog, "c1", &seeded(1)),
            Err(EngineError::InvalidCatalog(_))
        ));
    }

    #[test]
    fn test_feasibility_gap_reported_not_raised() {
        // Two sessions required, but a one-slot week: the second session
        // has nowhere to go.
        let tiny = InstitutionCalendar::new(vec![Weekday::Monday]).with_period(1, 540, 600);
        let catalog = Catalog::new(tiny)
            .with_subject(Subject::theory("S1").with_load(2, 2, 1))
            .with_instructor(Instructor::new("i1").with_subject("s1"))
            .with_room(Room::classroom("r1", 60))
            .with_cohort(Cohort::new("c1", 40).with_subject("s1"));
        let engine = TimetableEngine::new();
        let t = engine
            .generate_single_cohort(&catalog, "c1", &seeded(3))
            .unwrap();

        assert_eq!(t.entry_count(), 1);
        assert_eq!(t.score, 50);
        assert!(t
            .conflicts
            .iter()
            .any(|c| c.kind == ConflictKind::ConstraintViolation));
    }

    #[test]
    fn test_normalize_subjects() {
        let subjects = vec![
            Subject::lab("L1").with_load(1, 1, 1),
            Subject::lab("L2").with_load(4, 2, 2),
            Subject::theory("S1").with_load(2, 2, 5),
        ];
        let normalized = normalize_subjects(&subjects);

        assert_eq!(normalized[0].continuous_periods, 2);
        assert_eq!(normalized[0].sessions_per_week, 1);
        // A well-formed lab is untouched.
        assert_eq!(normalized[1].continuous_periods, 2);
        assert_eq!(normalized[1].sessions_per_week, 2);
        // Theory block length is clamped to the weekly load.
        assert_eq!(normalized[2].continuous_periods, 2);

        // Source subjects are unchanged.
        assert_eq!(subjects[0].continuous_periods, 1);
    }
}
