//! Per-assignment rule evaluation.
//!
//! Checks one placed assignment, in the context of its professor's day
//! schedule, against the fixed constraint catalog (codes 1–3 and 5–8;
//! code 4, campus transitions, needs cross-subject visibility and lives
//! in [`crate::conflicts`]). Evaluation is pure: the same inputs always
//! produce the same violations, ordered by constraint code.
//!
//! Day-level checks (continuous runs, gaps) anchor each finding to a
//! single block — the first block of an offending run, the later block
//! of an offending gap — so one defect is reported exactly once no
//! matter how many assignments participate in it.
//!
//! # Reference
//! Schaerf (1999), "A Survey of Automated Timetabling"

use crate::models::{
    Assignment, ConstraintId, ContractType, Room, SubjectRequirement, Violation,
};

/// First block of the operating day.
pub const MIN_BLOCK: i32 = 1;
/// Last block of the operating day.
pub const MAX_BLOCK: i32 = 9;
/// Last morning block; later blocks count as afternoon.
pub const MORNING_LAST_BLOCK: i32 = 4;
/// Latest block a lab or workshop may occupy.
pub const PRACTICAL_LAST_BLOCK: i32 = 5;
/// Earliest block a tutoring or assistance session may occupy.
pub const SUPPORT_FIRST_BLOCK: i32 = 3;
/// Largest allowed difference between consecutive blocks in a day
/// for full- and half-time professors.
pub const MAX_DAY_GAP: i32 = 2;
/// Smallest valid enrollment for a scheduled class.
pub const MIN_SEATS: u32 = 9;
/// Largest valid enrollment for a single class section.
pub const MAX_SEATS: u32 = 70;

/// Everything the evaluator needs to know beyond the assignment itself.
///
/// Built by the audit engine from the per-run indices; both block lists
/// are sorted and deduplicated and include the assignment's own block.
#[derive(Debug, Clone, Copy)]
pub struct RuleContext<'a> {
    /// The requirement this assignment realizes.
    pub requirement: &'a SubjectRequirement,
    /// The room the assignment was placed in; `None` when the room
    /// code is not in the catalog (treated as zero capacity).
    pub room: Option<&'a Room>,
    /// Contract classification of the owning professor.
    pub contract: ContractType,
    /// All distinct blocks the professor occupies on this day.
    pub day_blocks: &'a [i32],
    /// Distinct blocks this subject occupies on this day.
    pub subject_day_blocks: &'a [i32],
}

/// Evaluates one assignment against the catalog.
///
/// Returns violations ordered by constraint code. An out-of-range
/// block (rule 1) does not suppress the remaining checks.
pub fn evaluate(assignment: &Assignment, ctx: &RuleContext<'_>) -> Vec<Violation> {
    let mut violations = Vec::new();

    check_block_range(assignment, &mut violations);
    check_continuous_run(assignment, ctx, &mut violations);
    check_morning_preference(assignment, ctx, &mut violations);
    check_activity_slot(assignment, &mut violations);
    check_day_gap(assignment, ctx, &mut violations);
    check_year_parity(assignment, ctx, &mut violations);
    check_capacity(assignment, ctx, &mut violations);

    violations
}

/// Rule 1: the block must be inside the operating range.
fn check_block_range(assignment: &Assignment, out: &mut Vec<Violation>) {
    if !(MIN_BLOCK..=MAX_BLOCK).contains(&assignment.block) {
        out.push(Violation::new(
            ConstraintId::BlockRange,
            format!(
                "block {} on {} is outside the operating range {}-{}",
                assignment.block, assignment.day, MIN_BLOCK, MAX_BLOCK
            ),
        ));
    }
}

/// Rule 2: runs of strictly consecutive blocks for one subject may not
/// exceed the activity's limit. Fires only on the run's first block.
fn check_continuous_run(
    assignment: &Assignment,
    ctx: &RuleContext<'_>,
    out: &mut Vec<Violation>,
) {
    let limit = assignment.activity.max_continuous_blocks();
    for (start, len) in maximal_runs(ctx.subject_day_blocks) {
        if len > limit && assignment.block == start {
            out.push(Violation::new(
                ConstraintId::ContinuousRun,
                format!(
                    "{len} consecutive {} blocks starting at block {start} on {} exceed the limit of {limit}",
                    assignment.activity, assignment.day
                ),
            ));
        }
    }
}

/// Rule 3: first- and second-year subjects prefer the morning.
fn check_morning_preference(
    assignment: &Assignment,
    ctx: &RuleContext<'_>,
    out: &mut Vec<Violation>,
) {
    if ctx.requirement.year_level <= 2 && assignment.block > MORNING_LAST_BLOCK {
        out.push(Violation::new(
            ConstraintId::MorningPreference,
            format!(
                "year-{} subject scheduled in afternoon block {} on {}",
                ctx.requirement.year_level, assignment.block, assignment.day
            ),
        ));
    }
}

/// Rule 5: labs and workshops belong in the early blocks, tutoring and
/// assistance after the day has started. Theory and practice are free.
fn check_activity_slot(assignment: &Assignment, out: &mut Vec<Violation>) {
    use crate::models::ActivityType::*;

    let misplaced = match assignment.activity {
        Lab | Workshop => assignment.block > PRACTICAL_LAST_BLOCK,
        Tutoring | Assistance => assignment.block < SUPPORT_FIRST_BLOCK,
        Theory | Practice => false,
    };
    if misplaced {
        out.push(Violation::new(
            ConstraintId::ActivitySlot,
            format!(
                "{} session placed in block {} on {}",
                assignment.activity, assignment.block, assignment.day
            ),
        ));
    }
}

/// Rule 6: full- and half-time professors may not have a jump larger
/// than [`MAX_DAY_GAP`] between consecutive blocks in a day. Fires on
/// the later block of the offending pair.
fn check_day_gap(assignment: &Assignment, ctx: &RuleContext<'_>, out: &mut Vec<Violation>) {
    if !ctx.contract.gap_rule_applies() {
        return;
    }
    for pair in ctx.day_blocks.windows(2) {
        let (earlier, later) = (pair[0], pair[1]);
        if later - earlier > MAX_DAY_GAP && assignment.block == later {
            out.push(Violation::new(
                ConstraintId::DayGap,
                format!(
                    "gap of {} blocks before block {later} on {}",
                    later - earlier - 1,
                    assignment.day
                ),
            ));
        }
    }
}

/// Rule 7: odd year levels in the morning, even in the afternoon.
/// Levels 1–2 are governed by the morning preference (rule 3) instead.
fn check_year_parity(assignment: &Assignment, ctx: &RuleContext<'_>, out: &mut Vec<Violation>) {
    let level = ctx.requirement.year_level;
    if level <= 2 {
        return;
    }
    let in_morning = assignment.block <= MORNING_LAST_BLOCK;
    let wants_morning = level % 2 == 1;
    if in_morning != wants_morning {
        out.push(Violation::new(
            ConstraintId::YearParity,
            format!(
                "year-{level} subject belongs in the {}, found in block {} on {}",
                if wants_morning { "morning" } else { "afternoon" },
                assignment.block, assignment.day
            ),
        ));
    }
}

/// Rule 8: enrollment must lie in [9, 70] and fit the room. A missing
/// room counts as capacity zero.
fn check_capacity(assignment: &Assignment, ctx: &RuleContext<'_>, out: &mut Vec<Violation>) {
    let seats = ctx.requirement.seats;
    let capacity = ctx.room.map(|r| r.capacity).unwrap_or(0);

    if !(MIN_SEATS..=MAX_SEATS).contains(&seats) {
        out.push(Violation::new(
            ConstraintId::RoomCapacity,
            format!("enrollment of {seats} outside the valid range {MIN_SEATS}-{MAX_SEATS}"),
        ));
    } else if seats > capacity {
        out.push(Violation::new(
            ConstraintId::RoomCapacity,
            format!(
                "enrollment of {seats} exceeds capacity {capacity} of room {}",
                assignment.room_code
            ),
        ));
    }
}

/// Decomposes a sorted, deduplicated block list into maximal runs of
/// strictly consecutive integers, as (first block, length) pairs.
fn maximal_runs(blocks: &[i32]) -> Vec<(i32, usize)> {
    let mut runs = Vec::new();
    let mut iter = blocks.iter().copied();

    let Some(first) = iter.next() else {
        return runs;
    };
    let (mut start, mut len) = (first, 1usize);
    for block in iter {
        if block == start + len as i32 {
            len += 1;
        } else {
            runs.push((start, len));
            start = block;
            len = 1;
        }
    }
    runs.push((start, len));
    runs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ActivityType, Day, Severity};

    fn requirement() -> SubjectRequirement {
        SubjectRequirement::new("MAT101")
            .with_name("Linear Algebra")
            .with_hours(4)
            .with_year_level(1)
            .with_seats(30)
    }

    fn room() -> Room {
        Room::new("KAU-201", 40)
    }

    fn ctx<'a>(
        requirement: &'a SubjectRequirement,
        room: Option<&'a Room>,
        day_blocks: &'a [i32],
        subject_day_blocks: &'a [i32],
    ) -> RuleContext<'a> {
        RuleContext {
            requirement,
            room,
            contract: ContractType::PartTime,
            day_blocks,
            subject_day_blocks,
        }
    }

    fn codes(violations: &[Violation]) -> Vec<u8> {
        violations.iter().map(|v| v.constraint.code()).collect()
    }

    #[test]
    fn test_clean_assignment_has_no_violations() {
        let req = requirement();
        let room = room();
        let a = Assignment::new("P1", "MAT101", Day::Monday, 2, "KAU-201");
        let v = evaluate(&a, &ctx(&req, Some(&room), &[2], &[2]));
        assert!(v.is_empty());
    }

    #[test]
    fn test_block_range_low_and_high() {
        let req = requirement();
        let room = room();
        for bad in [0, -1, 10, 99] {
            let a = Assignment::new("P1", "MAT101", Day::Monday, bad, "KAU-201");
            let v = evaluate(&a, &ctx(&req, Some(&room), &[bad], &[bad]));
            assert!(
                v.iter().any(|x| x.constraint == ConstraintId::BlockRange),
                "block {bad} should violate rule 1"
            );
            assert_eq!(v[0].severity, Severity::High);
        }
    }

    #[test]
    fn test_out_of_range_does_not_suppress_other_rules() {
        // Block 10 breaks rule 1 and, being in the afternoon, rule 3 too.
        let req = requirement();
        let room = room();
        let a = Assignment::new("P1", "MAT101", Day::Monday, 10, "KAU-201");
        let v = evaluate(&a, &ctx(&req, Some(&room), &[10], &[10]));
        assert_eq!(codes(&v), vec![1, 3]);
    }

    #[test]
    fn test_continuous_run_theory_limit_two() {
        let req = requirement();
        let room = room();
        let blocks = [1, 2, 3];
        // Fires on the first block of the run only.
        let first = Assignment::new("P1", "MAT101", Day::Monday, 1, "KAU-201");
        let v = evaluate(&first, &ctx(&req, Some(&room), &blocks, &blocks));
        assert_eq!(codes(&v), vec![2]);
        assert_eq!(v[0].severity, Severity::Medium);

        let second = Assignment::new("P1", "MAT101", Day::Monday, 2, "KAU-201");
        let v = evaluate(&second, &ctx(&req, Some(&room), &blocks, &blocks));
        assert!(v.is_empty());
    }

    #[test]
    fn test_continuous_run_practical_limit_three() {
        let req = requirement().with_activity(ActivityType::Lab);
        let room = room();

        let three = [1, 2, 3];
        let a = Assignment::new("P1", "MAT101", Day::Monday, 1, "KAU-201")
            .with_activity(ActivityType::Lab);
        let v = evaluate(&a, &ctx(&req, Some(&room), &three, &three));
        assert!(!v.iter().any(|x| x.constraint == ConstraintId::ContinuousRun));

        let four = [1, 2, 3, 4];
        let v = evaluate(&a, &ctx(&req, Some(&room), &four, &four));
        assert!(v.iter().any(|x| x.constraint == ConstraintId::ContinuousRun));
    }

    #[test]
    fn test_broken_run_resets_counter() {
        let req = requirement();
        let room = room();
        // 1,2 then 4,5: two runs of length 2, both within the theory limit.
        let blocks = [1, 2, 4, 5];
        let a = Assignment::new("P1", "MAT101", Day::Monday, 1, "KAU-201");
        let v = evaluate(&a, &ctx(&req, Some(&room), &blocks, &blocks));
        assert!(!v.iter().any(|x| x.constraint == ConstraintId::ContinuousRun));
    }

    #[test]
    fn test_morning_preference() {
        let req = requirement().with_year_level(2);
        let room = room();
        let a = Assignment::new("P1", "MAT101", Day::Monday, 5, "KAU-201");
        let v = evaluate(&a, &ctx(&req, Some(&room), &[5], &[5]));
        assert_eq!(codes(&v), vec![3]);
        assert_eq!(v[0].severity, Severity::Low);

        // Third-year subjects are not covered by rule 3.
        let req3 = requirement().with_year_level(3);
        let a = Assignment::new("P1", "MAT101", Day::Monday, 5, "KAU-201");
        let v = evaluate(&a, &ctx(&req3, Some(&room), &[5], &[5]));
        assert!(!v.iter().any(|x| x.constraint == ConstraintId::MorningPreference));
    }

    #[test]
    fn test_activity_slot_rule() {
        let room = room();
        let lab_req = requirement().with_activity(ActivityType::Lab);
        let late_lab = Assignment::new("P1", "MAT101", Day::Monday, 6, "KAU-201")
            .with_activity(ActivityType::Lab);
        let v = evaluate(&late_lab, &ctx(&lab_req, Some(&room), &[6], &[6]));
        assert!(v.iter().any(|x| x.constraint == ConstraintId::ActivitySlot));

        let ok_lab = Assignment::new("P1", "MAT101", Day::Monday, 5, "KAU-201")
            .with_activity(ActivityType::Lab);
        let v = evaluate(&ok_lab, &ctx(&lab_req, Some(&room), &[5], &[5]));
        assert!(!v.iter().any(|x| x.constraint == ConstraintId::ActivitySlot));

        let tut_req = requirement().with_activity(ActivityType::Tutoring);
        let early_tut = Assignment::new("P1", "MAT101", Day::Monday, 2, "KAU-201")
            .with_activity(ActivityType::Tutoring);
        let v = evaluate(&early_tut, &ctx(&tut_req, Some(&room), &[2], &[2]));
        assert!(v.iter().any(|x| x.constraint == ConstraintId::ActivitySlot));
    }

    #[test]
    fn test_day_gap_full_time_only() {
        let req = requirement();
        let room = room();
        let blocks = [1, 5];
        let a = Assignment::new("P1", "MAT101", Day::Monday, 5, "KAU-201");

        let mut full_ctx = ctx(&req, Some(&room), &blocks, &[5]);
        full_ctx.contract = ContractType::FullTime;
        let v = evaluate(&a, &full_ctx);
        assert!(v.iter().any(|x| x.constraint == ConstraintId::DayGap));

        // Part-time professors are exempt.
        let v = evaluate(&a, &ctx(&req, Some(&room), &blocks, &[5]));
        assert!(!v.iter().any(|x| x.constraint == ConstraintId::DayGap));

        // Fires on the later block, not the earlier one.
        let earlier = Assignment::new("P1", "MAT101", Day::Monday, 1, "KAU-201");
        let v = evaluate(&earlier, &full_ctx);
        assert!(!v.iter().any(|x| x.constraint == ConstraintId::DayGap));
    }

    #[test]
    fn test_day_gap_boundary() {
        let req = requirement();
        let room = room();
        // Difference of exactly 2 (one free block) is allowed.
        let blocks = [1, 3];
        let a = Assignment::new("P1", "MAT101", Day::Monday, 3, "KAU-201");
        let mut c = ctx(&req, Some(&room), &blocks, &[3]);
        c.contract = ContractType::HalfTime;
        let v = evaluate(&a, &c);
        assert!(!v.iter().any(|x| x.constraint == ConstraintId::DayGap));
    }

    #[test]
    fn test_year_parity_upper_levels() {
        let room = room();

        // Odd level in the afternoon.
        let req = requirement().with_year_level(3);
        let a = Assignment::new("P1", "MAT101", Day::Monday, 5, "KAU-201");
        let v = evaluate(&a, &ctx(&req, Some(&room), &[5], &[5]));
        assert!(v.iter().any(|x| x.constraint == ConstraintId::YearParity));

        // Even level in the morning.
        let req = requirement().with_year_level(4);
        let a = Assignment::new("P1", "MAT101", Day::Monday, 2, "KAU-201");
        let v = evaluate(&a, &ctx(&req, Some(&room), &[2], &[2]));
        assert!(v.iter().any(|x| x.constraint == ConstraintId::YearParity));

        // Even level in the afternoon is fine.
        let a = Assignment::new("P1", "MAT101", Day::Monday, 6, "KAU-201");
        let v = evaluate(&a, &ctx(&req, Some(&room), &[6], &[6]));
        assert!(!v.iter().any(|x| x.constraint == ConstraintId::YearParity));
    }

    #[test]
    fn test_year_parity_skips_first_years() {
        let room = room();
        let req = requirement().with_year_level(1);
        let a = Assignment::new("P1", "MAT101", Day::Monday, 5, "KAU-201");
        let v = evaluate(&a, &ctx(&req, Some(&room), &[5], &[5]));
        // Rule 3 fires, rule 7 stays silent.
        assert_eq!(codes(&v), vec![3]);
    }

    #[test]
    fn test_capacity_bounds() {
        let room = room();

        for (seats, expect) in [(8, true), (9, false), (70, false), (71, true)] {
            let req = requirement().with_seats(seats);
            let big_room = Room::new("KAU-9", 200);
            let a = Assignment::new("P1", "MAT101", Day::Monday, 2, "KAU-9");
            let v = evaluate(&a, &ctx(&req, Some(&big_room), &[2], &[2]));
            assert_eq!(
                v.iter().any(|x| x.constraint == ConstraintId::RoomCapacity),
                expect,
                "seats={seats}"
            );
        }

        // Valid enrollment but over the room's capacity.
        let req = requirement().with_seats(50);
        let a = Assignment::new("P1", "MAT101", Day::Monday, 2, "KAU-201");
        let v = evaluate(&a, &ctx(&req, Some(&room), &[2], &[2]));
        assert!(v.iter().any(|x| x.constraint == ConstraintId::RoomCapacity));
    }

    #[test]
    fn test_missing_room_fails_capacity() {
        let req = requirement();
        let a = Assignment::new("P1", "MAT101", Day::Monday, 2, "GHOST");
        let v = evaluate(&a, &ctx(&req, None, &[2], &[2]));
        assert!(v.iter().any(|x| x.constraint == ConstraintId::RoomCapacity));
        assert_eq!(v[0].severity, Severity::High);
    }

    #[test]
    fn test_evaluation_is_idempotent() {
        let req = requirement();
        let room = room();
        let blocks = [1, 2, 3, 5];
        let a = Assignment::new("P1", "MAT101", Day::Monday, 1, "KAU-201");
        let c = ctx(&req, Some(&room), &blocks, &blocks);
        assert_eq!(evaluate(&a, &c), evaluate(&a, &c));
    }

    #[test]
    fn test_violations_ordered_by_code() {
        // Afternoon lab in an over-small room for a third-year subject:
        // rules 5, 7 and 8 all fire, in catalog order.
        let req = requirement()
            .with_year_level(3)
            .with_seats(50)
            .with_activity(ActivityType::Lab);
        let room = Room::new("R1", 30);
        let a = Assignment::new("P1", "MAT101", Day::Monday, 6, "R1")
            .with_activity(ActivityType::Lab);
        let v = evaluate(&a, &ctx(&req, Some(&room), &[6], &[6]));
        assert_eq!(codes(&v), vec![5, 7, 8]);
    }

    #[test]
    fn test_maximal_runs() {
        assert_eq!(maximal_runs(&[]), vec![]);
        assert_eq!(maximal_runs(&[4]), vec![(4, 1)]);
        assert_eq!(maximal_runs(&[1, 2, 3, 5, 6, 9]), vec![(1, 3), (5, 2), (9, 1)]);
    }
}
