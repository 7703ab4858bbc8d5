//! Report types and score computation.
//!
//! The report is plain data: per-subject rows, per-professor balance
//! entries, global summary statistics, and the conflict and shortfall
//! lists. Rendering (console, spreadsheet, service response) is the
//! caller's concern.

use serde::{Deserialize, Serialize};

use super::Diagnostics;
use crate::conflicts::{ProfessorConflict, RoomConflict};
use crate::models::{Severity, Violation};
use crate::reconcile::HourShortfall;

/// Violation tallies by severity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeverityCounts {
    pub high: usize,
    pub medium: usize,
    pub low: usize,
}

/// One report row: a (professor, subject) pair and how it fared.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubjectReportRow {
    /// Professor identifier.
    pub professor_id: String,
    /// Professor display name.
    pub professor_name: String,
    /// Subject code.
    pub subject_code: String,
    /// Subject display name.
    pub subject_name: String,
    /// Hours the requirement calls for.
    pub required_hours: u32,
    /// Blocks actually assigned.
    pub assigned_hours: u32,
    /// Blocks assigned beyond the requirement.
    pub overassigned_hours: u32,
    /// assigned / required × 100, capped at 100.
    pub completion_rate: f64,
    /// Violation tallies by severity.
    pub violation_counts: SeverityCounts,
    /// Penalty-weighted satisfaction score, 0–100.
    pub satisfaction: u32,
    /// The violations themselves, ordered by constraint code.
    pub violations: Vec<Violation>,
}

/// How evenly one professor's load spreads across the week.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfessorBalance {
    /// Professor identifier.
    pub professor_id: String,
    /// Professor display name.
    pub professor_name: String,
    /// Assignment counts per weekday, Monday first. Days without
    /// assignments count as zero, they are never omitted.
    pub blocks_per_day: [usize; 5],
    /// Balance score, 0–100.
    pub balance: f64,
}

/// Whole-run totals and averages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditSummary {
    /// Professors in the catalog.
    pub professors: usize,
    /// Subject requirements across all professors.
    pub subjects: usize,
    /// Assignments in the audited batch.
    pub assignments: usize,
    /// Sum of required hours over all requirements.
    pub total_required_hours: u32,
    /// Sum of assigned hours over all report rows.
    pub total_assigned_hours: u32,
    /// Mean completion rate over all rows (0 when there are none).
    pub average_completion_rate: f64,
    /// Mean satisfaction over all rows (0 when there are none).
    pub average_satisfaction: f64,
    /// Violation tallies across the whole run.
    pub violation_counts: SeverityCounts,
    /// Number of room double-booking conflicts.
    pub room_conflicts: usize,
    /// Number of professor double-booking conflicts.
    pub professor_conflicts: usize,
}

/// Complete outcome of auditing one timetable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditReport {
    /// One row per (professor, subject requirement).
    pub rows: Vec<SubjectReportRow>,
    /// One balance entry per professor.
    pub balances: Vec<ProfessorBalance>,
    /// Global statistics.
    pub summary: AuditSummary,
    /// Subjects short of their required hours.
    pub shortfalls: Vec<HourShortfall>,
    /// Room double-bookings.
    pub room_conflicts: Vec<RoomConflict>,
    /// Professor double-bookings.
    pub professor_conflicts: Vec<ProfessorConflict>,
    /// Non-fatal data problems encountered.
    pub diagnostics: Diagnostics,
}

impl SeverityCounts {
    /// Tallies a violation list.
    pub fn tally(violations: &[Violation]) -> Self {
        let mut counts = Self::default();
        for v in violations {
            match v.severity {
                Severity::High => counts.high += 1,
                Severity::Medium => counts.medium += 1,
                Severity::Low => counts.low += 1,
            }
        }
        counts
    }

    /// Adds another tally into this one.
    pub fn add(&mut self, other: Self) {
        self.high += other.high;
        self.medium += other.medium;
        self.low += other.low;
    }

    /// Total violations across severities.
    pub fn total(&self) -> usize {
        self.high + self.medium + self.low
    }
}

/// Penalty-weighted satisfaction score for one violation list.
///
/// Starts at 100 and subtracts each violation's severity penalty,
/// saturating at 0.
pub fn satisfaction_score(violations: &[Violation]) -> u32 {
    let penalty: u32 = violations.iter().map(|v| v.severity.penalty()).sum();
    100u32.saturating_sub(penalty)
}

/// Workload-balance score from per-day assignment counts.
///
/// `100 × (1 − max_deviation / average)` clamped to [0, 100], where the
/// average is over all five weekdays. A professor with no assignments
/// scores 0.
pub fn workload_balance(blocks_per_day: &[usize; 5]) -> f64 {
    let total: usize = blocks_per_day.iter().sum();
    if total == 0 {
        return 0.0;
    }
    let average = total as f64 / 5.0;
    let max_deviation = blocks_per_day
        .iter()
        .map(|&count| (count as f64 - average).abs())
        .fold(0.0, f64::max);

    (100.0 * (1.0 - max_deviation / average)).clamp(0.0, 100.0)
}
