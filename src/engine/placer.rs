//! One seeded placement attempt over a set of cohorts.
//!
//! The placer is a priority-ordered greedy engine with displacement:
//! labs are placed first (longest indivisible blocks have the fewest
//! feasible positions), then continuous theory, then single periods.
//! A lab block may evict already-placed single-period entries; evicted
//! entries land on a reschedule queue that is drained exactly once, after
//! the primary passes.
//!
//! All candidate orderings (cohorts, subjects within priority tiers,
//! days, instructors, rooms, slots) are permuted by the seeded LCG, so
//! one attempt is a pure function of (catalog, settings, seed).

use std::collections::HashMap;

use log::{debug, trace};

use crate::constraints::check_hard_constraints;
use crate::models::{
    Catalog, Cohort, Conflict, ConflictKind, Entry, Instructor, Room, RoomKind, Subject, TimeSlot,
    Weekday,
};

use super::rng::Lcg;
use super::settings::OptimizationSettings;

/// Relaxation floor on instructor daily periods.
const DAILY_BUDGET_FLOOR: u32 = 6;
/// Relaxation floor on instructor weekly periods.
const WEEKLY_BUDGET_FLOOR: u32 = 30;
/// Hard ceiling on lab blocks per cohort per day during initial placement.
const MAX_LAB_BLOCKS_PER_DAY: usize = 2;

/// Result of one attempt: placed entries plus per-cohort conflicts.
pub(super) struct AttemptResult {
    pub entries: Vec<Entry>,
    pub conflicts: Vec<(String, Conflict)>,
}

/// One placement attempt. Consumed by `run`.
pub(super) struct Placer<'a> {
    catalog: &'a Catalog,
    /// Normalized working copy of the subjects (degenerate labs fixed up).
    subjects: &'a [Subject],
    settings: &'a OptimizationSettings,
    /// Whether avoided patterns apply (single-cohort mode only).
    honor_avoided_patterns: bool,
    rng: Lcg,
    /// The single mutable artifact of the run.
    entries: Vec<Entry>,
    /// Committed entries from disjoint registry timetables.
    blocked: Vec<Entry>,
    /// Entries evicted by lab blocks, awaiting one re-placement pass.
    reschedule_queue: Vec<Entry>,
    conflicts: Vec<(String, Conflict)>,
    /// Sticky instructor per (cohort, subject) within the attempt.
    subject_instructor: HashMap<(String, String), String>,
    /// Preferred start period per lab subject.
    lab_preferred_start: HashMap<String, u8>,
    lab_start_counter: u8,
    lab_spacing: u8,
    lab_last_viable_start: u8,
    start_period_offset: u8,
    prefer_earlier_slots: bool,
    randomize_slot_selection: bool,
    time_flexibility: u8,
    iterations: u32,
}

impl<'a> Placer<'a> {
    pub(super) fn new(
        catalog: &'a Catalog,
        subjects: &'a [Subject],
        settings: &'a OptimizationSettings,
        blocked: Vec<Entry>,
        honor_avoided_patterns: bool,
        seed: u32,
    ) -> Self {
        let mut rng = Lcg::new(seed);
        let start_period_offset = 1 + rng.next_range(4) as u8;
        let prefer_earlier_slots = rng.next_bool();
        let randomize_slot_selection = rng.next_bool();
        let time_flexibility = rng.next_range(3) as u8;
        Self {
            catalog,
            subjects,
            settings,
            honor_avoided_patterns,
            rng,
            entries: Vec::new(),
            blocked,
            reschedule_queue: Vec::new(),
            conflicts: Vec::new(),
            subject_instructor: HashMap::new(),
            lab_preferred_start: HashMap::new(),
            lab_start_counter: 1,
            lab_spacing: 1,
            lab_last_viable_start: 1,
            start_period_offset,
            prefer_earlier_slots,
            randomize_slot_selection,
            time_flexibility,
            iterations: 0,
        }
    }

    /// Runs the attempt over the given cohorts.
    pub(super) fn run(mut self, cohort_ids: &[String]) -> AttemptResult {
        self.init_lab_counter(cohort_ids);

        let mut order: Vec<&Cohort> = cohort_ids
            .iter()
            .filter_map(|id| self.catalog.cohort(id))
            .collect();
        self.rng.shuffle(&mut order);

        for cohort in order {
            self.place_cohort(cohort);
        }
        self.drain_reschedule_queue();

        AttemptResult {
            entries: self.entries,
            conflicts: self.conflicts,
        }
    }

    /// Seeds the preferred-start counter so different labs land at
    /// different times of day.
    fn init_lab_counter(&mut self, cohort_ids: &[String]) {
        let labs: Vec<&Subject> = cohort_ids
            .iter()
            .filter_map(|id| self.catalog.cohort(id))
            .flat_map(|c| self.cohort_subjects(c))
            .filter(|s| s.is_lab())
            .collect();
        let lab_count = {
            let mut ids: Vec<&str> = labs.iter().map(|s| s.id.as_str()).collect();
            ids.sort_unstable();
            ids.dedup();
            ids.len()
        };
        let max_len = labs
            .iter()
            .map(|s| s.continuous_periods)
            .max()
            .unwrap_or(1);

        let periods = self.catalog.calendar.periods_per_day();
        let available = periods.saturating_sub(max_len).saturating_add(1).max(1);
        self.lab_last_viable_start = available;
        self.lab_spacing = (available / lab_count.max(1) as u8).max(1);
        self.lab_start_counter = ((self.start_period_offset - 1) % available) + 1;
    }

    /// Subjects this cohort takes, in normalized form: the mandatory list
    /// when present, the whole catalog otherwise.
    fn cohort_subjects(&self, cohort: &Cohort) -> Vec<&'a Subject> {
        if cohort.mandatory_subject_ids.is_empty() {
            return self.subjects.iter().collect();
        }
        cohort
            .mandatory_subject_ids
            .iter()
            .filter_map(|id| self.subjects.iter().find(|s| &s.id == id))
            .collect()
    }

    fn place_cohort(&mut self, cohort: &Cohort) {
        let mut subjects = self.cohort_subjects(cohort);
        self.rng.shuffle(&mut subjects);
        // Stable sort keeps the shuffle within each tier.
        subjects.sort_by_key(|s| {
            if s.is_lab() {
                0
            } else if s.continuous_periods > 1 {
                1
            } else {
                2
            }
        });

        debug!(
            "placing cohort '{}': {} subjects",
            cohort.id,
            subjects.len()
        );

        for subject in subjects {
            if subject.is_lab() {
                self.place_lab(cohort, subject);
            } else {
                self.place_theory(cohort, subject);
            }
        }
    }

    // ---- lab placement ----

    fn place_lab(&mut self, cohort: &Cohort, subject: &Subject) {
        let preferred = self.preferred_lab_start(subject);
        let periods = self.catalog.calendar.periods_per_day();
        let tolerance = (periods / 3).max(2);

        for session in 0..subject.sessions_per_week {
            if self.iteration_budget_spent() {
                self.report_unplaced(cohort, subject, session);
                continue;
            }
            if !self.try_place_lab_block(cohort, subject, preferred, tolerance) {
                self.report_unplaced(cohort, subject, session);
            }
        }
    }

    /// Assigns (once per subject) the preferred start period, advancing
    /// the global counter by the lab spacing.
    fn preferred_lab_start(&mut self, subject: &Subject) -> u8 {
        if let Some(&start) = self.lab_preferred_start.get(&subject.id) {
            return start;
        }
        let start = self.lab_start_counter;
        self.lab_preferred_start.insert(subject.id.clone(), start);
        let mut next = self.lab_start_counter + self.lab_spacing;
        if next > self.lab_last_viable_start {
            next = 1;
        }
        self.lab_start_counter = next;
        start
    }

    fn try_place_lab_block(
        &mut self,
        cohort: &Cohort,
        subject: &Subject,
        preferred: u8,
        tolerance: u8,
    ) -> bool {
        let length = subject.continuous_periods;

        let mut days = self.catalog.calendar.working_days.clone();
        self.rng.shuffle(&mut days);
        let instructors = self.ordered_instructors(cohort, subject);
        let rooms = self.ordered_rooms(cohort, subject, None);

        for &day in &days {
            if self.lab_blocks_on(cohort, day) >= MAX_LAB_BLOCKS_PER_DAY {
                continue;
            }
            if self.cohort_has_subject_on(cohort, subject, day) {
                continue;
            }
            if self.cohort_periods_on(cohort, day) + u32::from(length)
                > u32::from(cohort.max_daily_periods)
            {
                continue;
            }

            for (run_start, run_len) in self.catalog.calendar.adjacent_runs(day) {
                if run_len < length {
                    continue;
                }
                for offset in 0..=(run_len - length) {
                    let start = run_start + offset;
                    if start.abs_diff(preferred) > tolerance {
                        continue;
                    }
                    if (start..start + length)
                        .any(|p| self.subject_holds_period_elsewhere(cohort, subject, p, day))
                    {
                        continue;
                    }
                    for instructor in &instructors {
                        if !self.instructor_within_budget(instructor, day, u32::from(length)) {
                            continue;
                        }
                        for room in &rooms {
                            if self.commit_lab_block(
                                cohort, subject, instructor, room, day, start, length,
                            ) {
                                debug!(
                                    "lab '{}' for '{}': block {}..{} on {}",
                                    subject.id,
                                    cohort.id,
                                    start,
                                    start + length - 1,
                                    day.name()
                                );
                                return true;
                            }
                        }
                    }
                }
            }
        }
        false
    }

    /// Places all periods of a lab block as one transactional unit.
    ///
    /// Single-period entries clashing with the block are evicted onto the
    /// reschedule queue; any other failure rolls the whole block back.
    fn commit_lab_block(
        &mut self,
        cohort: &Cohort,
        subject: &Subject,
        instructor: &Instructor,
        room: &Room,
        day: Weekday,
        start: u8,
        length: u8,
    ) -> bool {
        self.iterations += 1;

        let mut block = Vec::with_capacity(length as usize);
        for period in start..start + length {
            let Some(slot) = self.catalog.calendar.slot(day, period) else {
                return false;
            };
            block.push(Entry::new(
                &subject.id,
                &instructor.id,
                &room.id,
                &cohort.id,
                slot,
            ));
        }
        if block.iter().any(|e| self.committed_collision(e)) {
            return false;
        }

        let block_ids: Vec<String> = block.iter().map(|e| e.id.clone()).collect();
        let mut displaced: Vec<Entry> = Vec::new();
        let mut failed = false;

        'block: for entry in block {
            loop {
                let conflicts = check_hard_constraints(&entry, &self.entries, self.catalog);
                if conflicts.is_empty() {
                    break;
                }
                if conflicts
                    .iter()
                    .any(|c| c.kind == ConflictKind::CapacityShortfall)
                {
                    failed = true;
                    break 'block;
                }
                let mut evicted_any = false;
                for conflict in &conflicts {
                    let Some(victim_id) =
                        conflict.entry_ids.iter().find(|id| **id != entry.id)
                    else {
                        continue;
                    };
                    let Some(pos) = self.entries.iter().position(|e| &e.id == victim_id) else {
                        continue; // already evicted this round
                    };
                    if !self.is_displaceable(&self.entries[pos]) {
                        failed = true;
                        break 'block;
                    }
                    trace!("lab block evicts '{}'", victim_id);
                    displaced.push(self.entries.remove(pos));
                    evicted_any = true;
                }
                if !evicted_any {
                    failed = true;
                    break 'block;
                }
            }
            self.entries.push(entry);
        }

        if failed {
            self.entries.retain(|e| !block_ids.contains(&e.id));
            self.entries.append(&mut displaced);
            return false;
        }
        self.reschedule_queue.append(&mut displaced);
        true
    }

    /// Only single-period non-lab entries may be evicted; taking one
    /// period out of a block would break the block's atomicity.
    fn is_displaceable(&self, entry: &Entry) -> bool {
        self.subjects
            .iter()
            .find(|s| s.id == entry.subject_id)
            .is_some_and(|s| !s.is_lab() && s.continuous_periods == 1)
    }

    // ---- theory placement ----

    fn place_theory(&mut self, cohort: &Cohort, subject: &Subject) {
        for session in 0..subject.sessions_per_week {
            if self.iteration_budget_spent() {
                self.report_unplaced(cohort, subject, session);
                continue;
            }
            if !self.try_place_theory_session(cohort, subject) {
                self.report_unplaced(cohort, subject, session);
            }
        }
    }

    fn try_place_theory_session(&mut self, cohort: &Cohort, subject: &Subject) -> bool {
        let length = subject.continuous_periods;
        let instructors = self.ordered_instructors(cohort, subject);

        for instructor in instructors {
            let candidates = self.theory_candidates(cohort, subject, instructor);
            let rooms = self.ordered_rooms(cohort, subject, Some(instructor));
            for slot in candidates {
                if !self.instructor_within_budget(instructor, slot.day, u32::from(length)) {
                    continue;
                }
                for room in &rooms {
                    if self.commit_session(cohort, subject, instructor, room, slot, length) {
                        self.subject_instructor
                            .insert((cohort.id.clone(), subject.id.clone()), instructor.id.clone());
                        trace!(
                            "theory '{}' for '{}' at {} period {}",
                            subject.id,
                            cohort.id,
                            slot.day.name(),
                            slot.period
                        );
                        return true;
                    }
                }
            }
        }
        false
    }

    /// Candidate start slots for one theory session, in trial order.
    ///
    /// Days already holding the subject are excluded, as are avoided
    /// patterns (single-cohort mode), days at the cohort's daily cap,
    /// start positions that would repeat the subject's period number on
    /// another day, and (for single-period sessions) slots adjacent to an
    /// existing session of the same subject.
    fn theory_candidates(
        &mut self,
        cohort: &Cohort,
        subject: &Subject,
        instructor: &Instructor,
    ) -> Vec<TimeSlot> {
        let length = subject.continuous_periods;
        let mut days = self.catalog.calendar.working_days.clone();
        self.rng.shuffle(&mut days);
        // Preferred-day instructors see their days first.
        days.sort_by_key(|d| !instructor.prefers_day(*d));

        let mut preferred = Vec::new();
        let mut other = Vec::new();

        for &day in &days {
            if self.cohort_has_subject_on(cohort, subject, day) {
                continue;
            }
            if self.cohort_periods_on(cohort, day) + u32::from(length)
                > u32::from(cohort.max_daily_periods)
            {
                continue;
            }
            let mut day_starts = Vec::new();
            for (run_start, run_len) in self.catalog.calendar.adjacent_runs(day) {
                if run_len < length {
                    continue;
                }
                for offset in 0..=(run_len - length) {
                    let start = run_start + offset;
                    let Some(slot) = self.catalog.calendar.slot(day, start) else {
                        continue;
                    };
                    if self.is_avoided(day, start, length) {
                        continue;
                    }
                    if (start..start + length)
                        .any(|p| self.subject_holds_period_elsewhere(cohort, subject, p, day))
                    {
                        continue;
                    }
                    if length == 1 && self.adjacent_to_same_subject(cohort, subject, &slot) {
                        continue;
                    }
                    day_starts.push(slot);
                }
            }
            day_starts.sort_by_key(|s| self.period_rank(s.period));
            if instructor.avoid_back_to_back {
                day_starts.sort_by_key(|s| self.adjacent_to_instructor(instructor, s));
            }
            for slot in day_starts {
                if subject.prefers(&slot) && instructor.prefers_time(&slot) {
                    preferred.push(slot);
                } else {
                    other.push(slot);
                }
            }
        }

        if self.randomize_slot_selection || self.time_flexibility == 1 {
            self.rng.shuffle(&mut preferred);
            self.rng.shuffle(&mut other);
        }
        if self.time_flexibility == 2 {
            // Flexibility wide open: no preferred-first ordering at all.
            let mut all = preferred;
            all.append(&mut other);
            self.rng.shuffle(&mut all);
            return all;
        }
        preferred.append(&mut other);
        preferred
    }

    /// Seeded period ordering: rotated by the attempt's start offset, or
    /// plain ascending when earlier slots are preferred.
    ///
    /// The offset is reduced modulo the grid size first: it is drawn from
    /// [1, 4] regardless of the calendar, and grids shorter than the
    /// offset would otherwise underflow the rotation.
    fn period_rank(&self, period: u8) -> u8 {
        if self.prefer_earlier_slots {
            return period;
        }
        let n = self.catalog.calendar.periods_per_day().max(1);
        let offset = (self.start_period_offset - 1) % n;
        (period + n - 1 - offset) % n
    }

    /// Places one session atomically; a failure at any period truncates
    /// back to the pre-session checkpoint.
    fn commit_session(
        &mut self,
        cohort: &Cohort,
        subject: &Subject,
        instructor: &Instructor,
        room: &Room,
        start_slot: TimeSlot,
        length: u8,
    ) -> bool {
        self.iterations += 1;
        let checkpoint = self.entries.len();
        for period in start_slot.period..start_slot.period + length {
            let Some(slot) = self.catalog.calendar.slot(start_slot.day, period) else {
                self.entries.truncate(checkpoint);
                return false;
            };
            let entry = Entry::new(&subject.id, &instructor.id, &room.id, &cohort.id, slot);
            if self.committed_collision(&entry)
                || !check_hard_constraints(&entry, &self.entries, self.catalog).is_empty()
            {
                self.entries.truncate(checkpoint);
                return false;
            }
            self.entries.push(entry);
        }
        true
    }

    // ---- reschedule queue ----

    /// Re-places evicted entries, once, after the primary passes.
    fn drain_reschedule_queue(&mut self) {
        let queue = std::mem::take(&mut self.reschedule_queue);
        if queue.is_empty() {
            return;
        }
        debug!("rescheduling {} evicted entries", queue.len());
        for entry in queue {
            if !self.try_replace(&entry) {
                let cohort_id = entry.cohort_id.clone();
                self.conflicts.push((
                    cohort_id,
                    Conflict::unplaced(
                        format!(
                            "session of '{}' for cohort '{}' was displaced and could not be rescheduled",
                            entry.subject_id, entry.cohort_id
                        ),
                        vec![
                            "Add periods or working days to the calendar".to_string(),
                            "Reduce the cohort's weekly load".to_string(),
                        ],
                    ),
                ));
            }
        }
    }

    fn try_replace(&mut self, entry: &Entry) -> bool {
        let Some(subject) = self.subjects.iter().find(|s| s.id == entry.subject_id) else {
            return false;
        };
        let Some(cohort) = self.catalog.cohort(&entry.cohort_id) else {
            return false;
        };

        let mut slots = self.catalog.calendar.time_slots();
        if self.randomize_slot_selection {
            self.rng.shuffle(&mut slots);
        }
        for slot in slots {
            if self.is_avoided(slot.day, slot.period, 1) {
                continue;
            }
            if self.cohort_periods_on(cohort, slot.day) + 1 > u32::from(cohort.max_daily_periods) {
                continue;
            }
            if self.subject_holds_period_elsewhere(cohort, subject, slot.period, slot.day) {
                continue;
            }
            if self.adjacent_to_same_subject(cohort, subject, &slot) {
                continue;
            }
            let candidate = Entry::new(
                &entry.subject_id,
                &entry.instructor_id,
                &entry.room_id,
                &entry.cohort_id,
                slot,
            );
            if self.committed_collision(&candidate) {
                continue;
            }
            if let Some(instructor) = self.catalog.instructor(&entry.instructor_id) {
                if !self.instructor_within_budget(instructor, slot.day, 1) {
                    continue;
                }
            }
            if check_hard_constraints(&candidate, &self.entries, self.catalog).is_empty() {
                self.entries.push(candidate);
                return true;
            }
        }
        false
    }

    // ---- candidate ordering ----

    /// Eligible instructors in seeded order, sticky choice first.
    fn ordered_instructors(&mut self, cohort: &Cohort, subject: &Subject) -> Vec<&'a Instructor> {
        let mut instructors: Vec<&Instructor> = self
            .catalog
            .instructors
            .iter()
            .filter(|i| i.can_teach(&subject.id))
            .collect();
        self.rng.shuffle(&mut instructors);
        if let Some(sticky) = self
            .subject_instructor
            .get(&(cohort.id.clone(), subject.id.clone()))
        {
            instructors.sort_by_key(|i| &i.id != sticky);
        }
        instructors
    }

    /// Rooms that seat the cohort, in seeded order with equipment fit,
    /// lab-kind fit, and instructor preference ranked first.
    fn ordered_rooms(
        &mut self,
        cohort: &Cohort,
        subject: &Subject,
        instructor: Option<&Instructor>,
    ) -> Vec<&'a Room> {
        let mut rooms: Vec<&Room> = self
            .catalog
            .rooms
            .iter()
            .filter(|r| r.fits(cohort.size))
            .collect();
        self.rng.shuffle(&mut rooms);
        rooms.sort_by_key(|r| {
            let missing_equipment = !r.has_equipment(&subject.required_equipment);
            let wrong_kind = subject.is_lab() && r.kind != RoomKind::Lab;
            let not_preferred = instructor
                .map(|i| !i.preferred_room_ids.contains(&r.id))
                .unwrap_or(false);
            (missing_equipment, wrong_kind, not_preferred)
        });
        rooms
    }

    // ---- queries over placed state ----

    fn is_avoided(&self, day: Weekday, start: u8, length: u8) -> bool {
        self.honor_avoided_patterns
            && (start..start + length).any(|p| {
                self.settings
                    .avoided_patterns
                    .iter()
                    .any(|&(d, period)| d == day && period == p)
            })
    }

    fn committed_collision(&self, entry: &Entry) -> bool {
        self.blocked.iter().any(|b| {
            b.same_slot(entry)
                && (b.instructor_id == entry.instructor_id || b.room_id == entry.room_id)
        })
    }

    fn cohort_periods_on(&self, cohort: &Cohort, day: Weekday) -> u32 {
        self.entries
            .iter()
            .filter(|e| e.cohort_id == cohort.id && e.slot.day == day)
            .count() as u32
    }

    fn cohort_has_subject_on(&self, cohort: &Cohort, subject: &Subject, day: Weekday) -> bool {
        self.entries
            .iter()
            .any(|e| e.cohort_id == cohort.id && e.subject_id == subject.id && e.slot.day == day)
    }

    /// Whether the subject already occupies this period number on a
    /// different day for the cohort.
    fn subject_holds_period_elsewhere(
        &self,
        cohort: &Cohort,
        subject: &Subject,
        period: u8,
        day: Weekday,
    ) -> bool {
        self.entries.iter().any(|e| {
            e.cohort_id == cohort.id
                && e.subject_id == subject.id
                && e.slot.period == period
                && e.slot.day != day
        })
    }

    fn adjacent_to_same_subject(&self, cohort: &Cohort, subject: &Subject, slot: &TimeSlot) -> bool {
        self.entries.iter().any(|e| {
            e.cohort_id == cohort.id
                && e.subject_id == subject.id
                && e.slot.day == slot.day
                && e.slot.period.abs_diff(slot.period) == 1
        })
    }

    fn adjacent_to_instructor(&self, instructor: &Instructor, slot: &TimeSlot) -> bool {
        self.entries.iter().any(|e| {
            e.instructor_id == instructor.id
                && e.slot.day == slot.day
                && e.slot.period.abs_diff(slot.period) == 1
        })
    }

    /// Distinct lab subjects the cohort holds on the day. With one block
    /// of a lab subject per day, this equals the number of lab blocks.
    fn lab_blocks_on(&self, cohort: &Cohort, day: Weekday) -> usize {
        let mut lab_ids: Vec<&str> = self
            .entries
            .iter()
            .filter(|e| e.cohort_id == cohort.id && e.slot.day == day)
            .filter(|e| {
                self.subjects
                    .iter()
                    .find(|s| s.id == e.subject_id)
                    .is_some_and(Subject::is_lab)
            })
            .map(|e| e.subject_id.as_str())
            .collect();
        lab_ids.sort_unstable();
        lab_ids.dedup();
        lab_ids.len()
    }

    /// Relaxed budget check: effective bounds are at least 6 daily and 30
    /// weekly, so over-tight user limits degrade to soft violations
    /// instead of an empty week. Committed entries count toward load.
    fn instructor_within_budget(&self, instructor: &Instructor, day: Weekday, added: u32) -> bool {
        let daily_cap = u32::from(instructor.max_daily_periods).max(DAILY_BUDGET_FLOOR);
        let weekly_cap = u32::from(instructor.max_weekly_periods).max(WEEKLY_BUDGET_FLOOR);

        let mine = |e: &&Entry| e.instructor_id == instructor.id;
        let weekly = self.entries.iter().filter(mine).count() as u32
            + self.blocked.iter().filter(mine).count() as u32;
        let daily = self
            .entries
            .iter()
            .filter(|e| e.instructor_id == instructor.id && e.slot.day == day)
            .count() as u32
            + self
                .blocked
                .iter()
                .filter(|e| e.instructor_id == instructor.id && e.slot.day == day)
                .count() as u32;

        daily + added <= daily_cap && weekly + added <= weekly_cap
    }

    fn iteration_budget_spent(&self) -> bool {
        self.settings
            .max_iterations
            .is_some_and(|max| self.iterations >= max)
    }

    fn report_unplaced(&mut self, cohort: &Cohort, subject: &Subject, session: u8) {
        self.conflicts.push((
            cohort.id.clone(),
            Conflict::unplaced(
                format!(
                    "session {} of {} of '{}' for cohort '{}' could not be placed",
                    session + 1,
                    subject.sessions_per_week,
                    subject.id,
                    cohort.id
                ),
                vec![
                    format!("Add another instructor eligible for '{}'", subject.id),
                    format!("Add a room seating at least {} students", cohort.size),
                    "Add periods or working days to the calendar".to_string(),
                ],
            ),
        ));
    }
}
