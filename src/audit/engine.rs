//! The audit engine.
//!
//! Wires the passes together: fatal catalog validation, index
//! construction, per-placement rule evaluation, campus-transition and
//! double-booking detection, hour reconciliation, scoring, and report
//! assembly. Pure batch computation over in-memory collections;
//! single-threaded, no I/O.

use std::collections::HashMap;

use super::diagnostics::{DataWarning, Diagnostics};
use super::report::{
    AuditReport, AuditSummary, ProfessorBalance, SeverityCounts, SubjectReportRow,
    satisfaction_score, workload_balance,
};
use crate::conflicts;
use crate::index::ScheduleIndex;
use crate::models::{Assignment, Day, Professor, Room, Violation};
use crate::reconcile;
use crate::rules::{self, RuleContext};
use crate::validation::{validate_input, InputError};

/// Audits one proposed timetable against the reference catalogs.
///
/// Fatal structural problems in the catalogs abort the run before any
/// evaluation; dangling cross-references in the batch are recoverable
/// and end up in the report's diagnostics instead. No assignment is
/// ever dropped without a recorded reason.
pub fn audit_schedule(
    professors: &[Professor],
    rooms: &[Room],
    assignments: &[Assignment],
) -> Result<AuditReport, Vec<InputError>> {
    validate_input(professors, rooms)?;

    let room_catalog: HashMap<&str, &Room> = rooms.iter().map(|r| (r.code.as_str(), r)).collect();
    let professor_catalog: HashMap<&str, &Professor> =
        professors.iter().map(|p| (p.id.as_str(), p)).collect();
    let index = ScheduleIndex::build(assignments);
    let mut diagnostics = Diagnostics::new();

    // Pass 1: per-placement rules, collected per (professor, subject).
    let mut violations: HashMap<(&str, &str), Vec<Violation>> = HashMap::new();
    for professor in professors {
        let contract = professor.contract_type();
        for day in Day::ALL {
            let schedule = index.day_schedule(&professor.id, day);
            if schedule.is_empty() {
                continue;
            }
            let day_blocks = index.day_blocks(&professor.id, day);

            for assignment in schedule {
                let Some(requirement) = professor.subject(&assignment.subject_code) else {
                    diagnostics.record(DataWarning::UnknownSubject {
                        professor_id: professor.id.clone(),
                        subject_code: assignment.subject_code.clone(),
                    });
                    continue;
                };

                let room = room_catalog.get(assignment.room_code.as_str()).copied();
                if room.is_none() {
                    diagnostics.record(DataWarning::UnknownRoom {
                        room_code: assignment.room_code.clone(),
                    });
                }

                let subject_day_blocks =
                    index.subject_day_blocks(&professor.id, day, &assignment.subject_code);
                let ctx = RuleContext {
                    requirement,
                    room,
                    contract,
                    day_blocks: &day_blocks,
                    subject_day_blocks: &subject_day_blocks,
                };
                violations
                    .entry((professor.id.as_str(), requirement.code.as_str()))
                    .or_default()
                    .extend(rules::evaluate(assignment, &ctx));
            }
        }
    }

    // Assignments owned by nobody in the catalog.
    for assignment in assignments {
        if !professor_catalog.contains_key(assignment.professor_id.as_str()) {
            diagnostics.record(DataWarning::UnknownProfessor {
                professor_id: assignment.professor_id.clone(),
            });
        }
    }

    // Pass 2: cross-assignment checks.
    for cv in conflicts::campus_transition_violations(&index, &room_catalog) {
        if let Some(professor) = professor_catalog.get(cv.professor_id.as_str()) {
            if let Some(requirement) = professor.subject(&cv.subject_code) {
                violations
                    .entry((professor.id.as_str(), requirement.code.as_str()))
                    .or_default()
                    .push(cv.violation);
            }
        }
    }
    let room_conflicts = conflicts::room_double_bookings(assignments);
    let professor_conflicts = conflicts::professor_double_bookings(assignments);

    // Pass 3: reconciliation, scoring, and report rows.
    let mut rows = Vec::new();
    let mut shortfalls = Vec::new();
    let mut total_counts = SeverityCounts::default();

    for professor in professors {
        for requirement in &professor.subjects {
            let subject_assignments = index.subject_assignments(&professor.id, &requirement.code);
            let reconciliation = reconcile::reconcile(&professor.id, requirement, &subject_assignments);

            let mut subject_violations = violations
                .remove(&(professor.id.as_str(), requirement.code.as_str()))
                .unwrap_or_default();
            subject_violations.sort_by_key(|v| v.constraint.code());

            let counts = SeverityCounts::tally(&subject_violations);
            total_counts.add(counts);

            rows.push(SubjectReportRow {
                professor_id: professor.id.clone(),
                professor_name: professor.name.clone(),
                subject_code: requirement.code.clone(),
                subject_name: requirement.name.clone(),
                required_hours: requirement.required_hours,
                assigned_hours: reconciliation.assigned_hours,
                overassigned_hours: reconciliation
                    .assigned_hours
                    .saturating_sub(requirement.required_hours),
                completion_rate: reconciliation.completion_rate,
                violation_counts: counts,
                satisfaction: satisfaction_score(&subject_violations),
                violations: subject_violations,
            });
            shortfalls.extend(reconciliation.shortfalls);
        }
    }

    let balances: Vec<ProfessorBalance> = professors
        .iter()
        .map(|p| {
            let blocks_per_day = index.blocks_per_day(&p.id);
            ProfessorBalance {
                professor_id: p.id.clone(),
                professor_name: p.name.clone(),
                balance: workload_balance(&blocks_per_day),
                blocks_per_day,
            }
        })
        .collect();

    let summary = AuditSummary {
        professors: professors.len(),
        subjects: rows.len(),
        assignments: assignments.len(),
        total_required_hours: rows.iter().map(|r| r.required_hours).sum(),
        total_assigned_hours: rows.iter().map(|r| r.assigned_hours).sum(),
        average_completion_rate: mean(rows.iter().map(|r| r.completion_rate)),
        average_satisfaction: mean(rows.iter().map(|r| f64::from(r.satisfaction))),
        violation_counts: total_counts,
        room_conflicts: room_conflicts.len(),
        professor_conflicts: professor_conflicts.len(),
    };

    Ok(AuditReport {
        rows,
        balances,
        summary,
        shortfalls,
        room_conflicts,
        professor_conflicts,
        diagnostics,
    })
}

fn mean(values: impl Iterator<Item = f64>) -> f64 {
    let (mut sum, mut count) = (0.0, 0usize);
    for v in values {
        sum += v;
        count += 1;
    }
    if count == 0 {
        0.0
    } else {
        sum / count as f64
    }
}
