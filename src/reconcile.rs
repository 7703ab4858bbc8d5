//! Hour and instance reconciliation.
//!
//! Compares the blocks actually assigned to each subject against the
//! subject's required hours, applying the parallel-section policy:
//! subjects at or above the enrollment threshold split their required
//! hours into two equal instances. The split uses floor division and
//! deliberately drops an odd remainder — that is how required hours
//! have always been accounted, and "fixing" it would silently change
//! every completion rate downstream.

use serde::{Deserialize, Serialize};

use crate::models::{Assignment, SubjectRequirement};

/// Enrollment at or above which a subject splits into two instances.
pub const SPLIT_ENROLLMENT: u32 = 70;

/// Why a subject fell short of its required hours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShortfallKind {
    /// No blocks assigned at all for a subject requiring hours.
    NoHours,
    /// An instance received fewer blocks than it requires.
    Deficit,
    /// An expected instance has no assignments.
    MissingInstance,
}

/// One shortfall against a subject's requirement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HourShortfall {
    /// Professor owning the requirement.
    pub professor_id: String,
    /// Subject that fell short.
    pub subject_code: String,
    /// Instance the shortfall concerns: the observed index for a
    /// deficit, the expected position for a missing instance, absent
    /// when nothing was assigned at all.
    pub instance: Option<u32>,
    /// Shortfall category.
    pub kind: ShortfallKind,
    /// Hours the instance (or subject) requires.
    pub required_hours: u32,
    /// Hours actually assigned to it.
    pub assigned_hours: u32,
}

/// Reconciliation outcome for one subject.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubjectReconciliation {
    /// Subject code.
    pub subject_code: String,
    /// Total hours the subject requires.
    pub required_hours: u32,
    /// Total blocks assigned across all instances.
    pub assigned_hours: u32,
    /// assigned / required × 100, capped at 100. Zero requirement
    /// yields 0, never a division fault.
    pub completion_rate: f64,
    /// Detected shortfalls, in instance order.
    pub shortfalls: Vec<HourShortfall>,
}

impl HourShortfall {
    /// Hours still missing.
    pub fn missing_hours(&self) -> u32 {
        self.required_hours.saturating_sub(self.assigned_hours)
    }
}

/// Expected hours per instance for a requirement.
///
/// Enrollment at or above [`SPLIT_ENROLLMENT`] splits the requirement
/// into two instances of `required_hours / 2` each (floor division,
/// odd remainder dropped); smaller subjects keep a single instance.
pub fn instance_split(required_hours: u32, seats: u32) -> Vec<u32> {
    if seats >= SPLIT_ENROLLMENT {
        let half = required_hours / 2;
        vec![half, half]
    } else {
        vec![required_hours]
    }
}

/// Completion rate with the zero-requirement guard.
pub fn completion_rate(assigned_hours: u32, required_hours: u32) -> f64 {
    if required_hours == 0 {
        0.0
    } else {
        (f64::from(assigned_hours) / f64::from(required_hours) * 100.0).min(100.0)
    }
}

/// Reconciles one subject's assignments against its requirement.
///
/// Assignments are grouped by instance index; the sorted observed
/// indices are matched positionally against the expected instance list
/// (observed numbering need not be contiguous).
pub fn reconcile(
    professor_id: &str,
    requirement: &SubjectRequirement,
    assignments: &[&Assignment],
) -> SubjectReconciliation {
    let expected = instance_split(requirement.required_hours, requirement.seats);
    let assigned_total = assignments.len() as u32;

    // Blocks per observed instance, ordered by instance index.
    let mut observed: Vec<(u32, u32)> = Vec::new();
    for a in assignments {
        match observed.iter_mut().find(|(idx, _)| *idx == a.instance) {
            Some((_, count)) => *count += 1,
            None => observed.push((a.instance, 1)),
        }
    }
    observed.sort_unstable_by_key(|(idx, _)| *idx);

    let mut shortfalls = Vec::new();
    if observed.is_empty() {
        if requirement.required_hours > 0 {
            shortfalls.push(HourShortfall {
                professor_id: professor_id.to_string(),
                subject_code: requirement.code.clone(),
                instance: None,
                kind: ShortfallKind::NoHours,
                required_hours: requirement.required_hours,
                assigned_hours: 0,
            });
        }
    } else {
        for (position, &instance_hours) in expected.iter().enumerate() {
            match observed.get(position) {
                Some(&(instance, assigned)) if assigned < instance_hours => {
                    shortfalls.push(HourShortfall {
                        professor_id: professor_id.to_string(),
                        subject_code: requirement.code.clone(),
                        instance: Some(instance),
                        kind: ShortfallKind::Deficit,
                        required_hours: instance_hours,
                        assigned_hours: assigned,
                    });
                }
                Some(_) => {}
                None => {
                    shortfalls.push(HourShortfall {
                        professor_id: professor_id.to_string(),
                        subject_code: requirement.code.clone(),
                        instance: Some(position as u32),
                        kind: ShortfallKind::MissingInstance,
                        required_hours: instance_hours,
                        assigned_hours: 0,
                    });
                }
            }
        }
    }

    SubjectReconciliation {
        subject_code: requirement.code.clone(),
        required_hours: requirement.required_hours,
        assigned_hours: assigned_total,
        completion_rate: completion_rate(assigned_total, requirement.required_hours),
        shortfalls,
    }
}
