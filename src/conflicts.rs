//! Cross-assignment conflict detection.
//!
//! Checks that need visibility across the whole batch: room
//! double-bookings, professor double-bookings, and campus-transition
//! legality (constraint 4 of the catalog, shared with the per-placement
//! rules). All detection groups by slot keys, so results do not depend
//! on the ordering of the input batch; conflicts are emitted once per
//! offending slot in (key, day, block) order.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

use crate::index::ScheduleIndex;
use crate::models::{Assignment, Campus, ConstraintId, Day, Room, Violation};

/// One party occupying a contested room slot.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SlotOccupant {
    /// Subject code of the occupying assignment.
    pub subject_code: String,
    /// Professor teaching it.
    pub professor_id: String,
}

/// A room slot claimed by more than one distinct (subject, professor) pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomConflict {
    /// Contested room.
    pub room_code: String,
    /// Day of the contested slot.
    pub day: Day,
    /// Block of the contested slot.
    pub block: i32,
    /// Every distinct party claiming the slot, sorted.
    pub occupants: Vec<SlotOccupant>,
}

/// A slot in which one professor is booked for more than one subject.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfessorConflict {
    /// Double-booked professor.
    pub professor_id: String,
    /// Day of the contested slot.
    pub day: Day,
    /// Block of the contested slot.
    pub block: i32,
    /// Distinct subject codes competing for the slot, sorted.
    pub subject_codes: Vec<String>,
}

/// A campus-transition violation attributed to one (professor, subject).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CampusViolation {
    /// Professor whose day schedule contains the illegal transition.
    pub professor_id: String,
    /// Subject of the assignment the transition lands on.
    pub subject_code: String,
    /// The violation record (constraint 4, HIGH).
    pub violation: Violation,
}

/// Finds room slots occupied by more than one distinct (subject,
/// professor) pair.
///
/// The same pair placed twice in one slot is idempotent and reported
/// as nothing; distinct pairs produce exactly one conflict per slot
/// listing every party.
pub fn room_double_bookings(assignments: &[Assignment]) -> Vec<RoomConflict> {
    let mut slots: BTreeMap<(&str, Day, i32), Vec<SlotOccupant>> = BTreeMap::new();

    for a in assignments {
        let occupant = SlotOccupant {
            subject_code: a.subject_code.clone(),
            professor_id: a.professor_id.clone(),
        };
        let entry = slots
            .entry((a.room_code.as_str(), a.day, a.block))
            .or_default();
        if !entry.contains(&occupant) {
            entry.push(occupant);
        }
    }

    slots
        .into_iter()
        .filter(|(_, occupants)| occupants.len() > 1)
        .map(|((room_code, day, block), mut occupants)| {
            occupants.sort();
            RoomConflict {
                room_code: room_code.to_string(),
                day,
                block,
                occupants,
            }
        })
        .collect()
}

/// Finds slots in which a professor is booked for more than one subject.
///
/// Mirroring the room rule, repeated identical records for one subject
/// are idempotent; only distinct subject codes in the same slot conflict.
pub fn professor_double_bookings(assignments: &[Assignment]) -> Vec<ProfessorConflict> {
    let mut slots: BTreeMap<(&str, Day, i32), Vec<&str>> = BTreeMap::new();

    for a in assignments {
        let entry = slots
            .entry((a.professor_id.as_str(), a.day, a.block))
            .or_default();
        if !entry.contains(&a.subject_code.as_str()) {
            entry.push(&a.subject_code);
        }
    }

    slots
        .into_iter()
        .filter(|(_, subjects)| subjects.len() > 1)
        .map(|((professor_id, day, block), mut subjects)| {
            subjects.sort_unstable();
            ProfessorConflict {
                professor_id: professor_id.to_string(),
                day,
                block,
                subject_codes: subjects.into_iter().map(str::to_string).collect(),
            }
        })
        .collect()
}

/// Checks campus-transition legality for every professor's day schedules.
///
/// Walking a day's assignments in block order, a campus change between
/// time-adjacent blocks (difference of exactly 1) is always illegal —
/// there is no time to relocate — and any change after the first one in
/// the day is illegal as well. Each violation attaches to the subject
/// of the assignment the transition lands on. Assignments whose room is
/// not in the catalog carry no campus and are skipped here; the
/// capacity rule and the diagnostics already report them.
pub fn campus_transition_violations(
    index: &ScheduleIndex<'_>,
    rooms: &HashMap<&str, &Room>,
) -> Vec<CampusViolation> {
    let mut violations = Vec::new();

    for professor_id in index.professor_ids() {
        for day in Day::ALL {
            let schedule = index.day_schedule(professor_id, day);
            if schedule.len() < 2 {
                continue;
            }

            let located: Vec<(&Assignment, Campus)> = schedule
                .iter()
                .filter_map(|a| {
                    rooms
                        .get(a.room_code.as_str())
                        .map(|room| (*a, room.campus()))
                })
                .collect();

            let mut changes = 0;
            for pair in located.windows(2) {
                let (prev, prev_campus) = pair[0];
                let (curr, curr_campus) = pair[1];
                if prev_campus == curr_campus {
                    continue;
                }
                changes += 1;

                if curr.block - prev.block == 1 {
                    violations.push(CampusViolation {
                        professor_id: professor_id.to_string(),
                        subject_code: curr.subject_code.clone(),
                        violation: Violation::new(
                            ConstraintId::CampusTransition,
                            format!(
                                "campus change from {prev_campus} to {curr_campus} between adjacent blocks {} and {} on {day}",
                                prev.block, curr.block
                            ),
                        ),
                    });
                } else if changes > 1 {
                    violations.push(CampusViolation {
                        professor_id: professor_id.to_string(),
                        subject_code: curr.subject_code.clone(),
                        violation: Violation::new(
                            ConstraintId::CampusTransition,
                            format!(
                                "second campus change of the day at block {} on {day} (to {curr_campus})",
                                curr.block
                            ),
                        ),
                    });
                }
            }
        }
    }

    violations
}
