//! Read-only indices over an assignment batch.
//!
//! Every checking pass needs the same groupings — a professor's day
//! schedule, the blocks a subject occupies on a day, per-day load
//! counts. The index is built once per run from the raw batch and then
//! shared by all passes, so each pass's inputs are explicit and no pass
//! re-scans the batch.
//!
//! Day schedules are sorted by (block, subject code, instance) at build
//! time, making every downstream result independent of the batch's
//! input ordering.

use std::collections::HashMap;

use crate::models::{Assignment, Day};

/// Immutable per-run lookup structure over the assignment batch.
#[derive(Debug)]
pub struct ScheduleIndex<'a> {
    by_professor: HashMap<&'a str, Vec<&'a Assignment>>,
    by_professor_day: HashMap<(&'a str, Day), Vec<&'a Assignment>>,
}

impl<'a> ScheduleIndex<'a> {
    /// Builds the index from an assignment batch.
    pub fn build(assignments: &'a [Assignment]) -> Self {
        let mut by_professor: HashMap<&str, Vec<&Assignment>> = HashMap::new();
        let mut by_professor_day: HashMap<(&str, Day), Vec<&Assignment>> = HashMap::new();

        for a in assignments {
            by_professor
                .entry(a.professor_id.as_str())
                .or_default()
                .push(a);
            by_professor_day
                .entry((a.professor_id.as_str(), a.day))
                .or_default()
                .push(a);
        }

        let slot_key =
            |a: &&Assignment| (a.day, a.block, a.subject_code.clone(), a.instance);
        for schedule in by_professor.values_mut() {
            schedule.sort_by_key(slot_key);
        }
        for schedule in by_professor_day.values_mut() {
            schedule.sort_by_key(slot_key);
        }

        Self {
            by_professor,
            by_professor_day,
        }
    }

    /// Professor identifiers present in the batch, sorted.
    pub fn professor_ids(&self) -> Vec<&'a str> {
        let mut ids: Vec<&str> = self.by_professor.keys().copied().collect();
        ids.sort_unstable();
        ids
    }

    /// All assignments for a professor, sorted by (day, block, subject).
    pub fn professor_assignments(&self, professor_id: &str) -> &[&'a Assignment] {
        self.by_professor
            .get(professor_id)
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    /// A professor's assignments on one day, sorted by (block, subject).
    pub fn day_schedule<'b>(&'b self, professor_id: &'b str, day: Day) -> &'b [&'a Assignment] {
        self.by_professor_day
            .get(&(professor_id, day))
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    /// Distinct sorted blocks a professor occupies on one day.
    pub fn day_blocks(&self, professor_id: &str, day: Day) -> Vec<i32> {
        let mut blocks: Vec<i32> = self
            .day_schedule(professor_id, day)
            .iter()
            .map(|a| a.block)
            .collect();
        blocks.sort_unstable();
        blocks.dedup();
        blocks
    }

    /// Distinct sorted blocks one subject occupies on one day.
    pub fn subject_day_blocks(&self, professor_id: &str, day: Day, subject_code: &str) -> Vec<i32> {
        let mut blocks: Vec<i32> = self
            .day_schedule(professor_id, day)
            .iter()
            .filter(|a| a.subject_code == subject_code)
            .map(|a| a.block)
            .collect();
        blocks.sort_unstable();
        blocks.dedup();
        blocks
    }

    /// All assignments of one subject for a professor, across the week.
    pub fn subject_assignments(&self, professor_id: &str, subject_code: &str) -> Vec<&'a Assignment> {
        self.professor_assignments(professor_id)
            .iter()
            .filter(|a| a.subject_code == subject_code)
            .copied()
            .collect()
    }

    /// Assignment counts per weekday for a professor (Monday first).
    pub fn blocks_per_day(&self, professor_id: &str) -> [usize; 5] {
        let mut counts = [0usize; 5];
        for a in self.professor_assignments(professor_id) {
            counts[a.day.index()] += 1;
        }
        counts
    }
}
