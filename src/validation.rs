//! Structural validation of the reference catalogs.
//!
//! Checks the professor and room catalogs before any evaluation runs.
//! Problems found here are fatal: duplicate identifiers would make
//! every grouping key downstream ambiguous, so the run aborts with a
//! clear failure instead of producing silently-wrong results.
//!
//! Dangling cross-references in the assignment batch are *not* checked
//! here — they are recoverable and surface as diagnostics during the
//! audit instead.

use std::collections::HashSet;

use thiserror::Error;

use crate::models::{Professor, Room};

/// Validation result: `Ok(())` or every problem found.
pub type ValidationResult = Result<(), Vec<InputError>>;

/// A fatal structural problem in the input catalogs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    /// Two professors share one identifier.
    #[error("duplicate professor id: {0}")]
    DuplicateProfessor(String),

    /// Two rooms share one code.
    #[error("duplicate room code: {0}")]
    DuplicateRoom(String),

    /// One professor lists the same subject code twice.
    #[error("professor {professor_id} lists subject code {subject_code} more than once")]
    DuplicateSubjectCode {
        professor_id: String,
        subject_code: String,
    },
}

/// Validates the reference catalogs for a run.
///
/// Checks:
/// 1. No duplicate professor identifiers
/// 2. No duplicate room codes
/// 3. Subject codes unique within each professor
///
/// Returns all detected issues, not just the first.
pub fn validate_input(professors: &[Professor], rooms: &[Room]) -> ValidationResult {
    let mut errors = Vec::new();

    let mut professor_ids = HashSet::new();
    for p in professors {
        if !professor_ids.insert(p.id.as_str()) {
            errors.push(InputError::DuplicateProfessor(p.id.clone()));
        }

        let mut codes = HashSet::new();
        for subject in &p.subjects {
            if !codes.insert(subject.code.as_str()) {
                errors.push(InputError::DuplicateSubjectCode {
                    professor_id: p.id.clone(),
                    subject_code: subject.code.clone(),
                });
            }
        }
    }

    let mut room_codes = HashSet::new();
    for r in rooms {
        if !room_codes.insert(r.code.as_str()) {
            errors.push(InputError::DuplicateRoom(r.code.clone()));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SubjectRequirement;

    fn sample_professors() -> Vec<Professor> {
        vec![
            Professor::new("P1")
                .with_name("A. Turing")
                .with_subject(SubjectRequirement::new("MAT101").with_hours(4))
                .with_subject(SubjectRequirement::new("MAT201").with_hours(6)),
            Professor::new("P2")
                .with_name("E. Noether")
                .with_subject(SubjectRequirement::new("MAT101").with_hours(4)),
        ]
    }

    fn sample_rooms() -> Vec<Room> {
        vec![Room::new("KAU-201", 40), Room::new("HUA-10", 30)]
    }

    #[test]
    fn test_valid_input() {
        assert!(validate_input(&sample_professors(), &sample_rooms()).is_ok());
    }

    #[test]
    fn test_empty_input_is_valid() {
        assert!(validate_input(&[], &[]).is_ok());
    }

    #[test]
    fn test_duplicate_professor_id() {
        let professors = vec![Professor::new("P1"), Professor::new("P1")];
        let errors = validate_input(&professors, &sample_rooms()).unwrap_err();
        assert!(errors.contains(&InputError::DuplicateProfessor("P1".into())));
    }

    #[test]
    fn test_duplicate_room_code() {
        let rooms = vec![Room::new("KAU-201", 40), Room::new("KAU-201", 20)];
        let errors = validate_input(&sample_professors(), &rooms).unwrap_err();
        assert!(errors.contains(&InputError::DuplicateRoom("KAU-201".into())));
    }

    #[test]
    fn test_same_code_across_professors_is_fine() {
        // MAT101 appears under both P1 and P2; codes are per-professor.
        assert!(validate_input(&sample_professors(), &sample_rooms()).is_ok());
    }

    #[test]
    fn test_duplicate_subject_code_within_professor() {
        let professors = vec![Professor::new("P1")
            .with_subject(SubjectRequirement::new("MAT101"))
            .with_subject(SubjectRequirement::new("MAT101"))];
        let errors = validate_input(&professors, &sample_rooms()).unwrap_err();
        assert!(matches!(
            errors[0],
            InputError::DuplicateSubjectCode { .. }
        ));
    }

    #[test]
    fn test_multiple_errors_reported_together() {
        let professors = vec![
            Professor::new("P1").with_subject(SubjectRequirement::new("X")),
            Professor::new("P1").with_subject(SubjectRequirement::new("X")),
        ];
        let rooms = vec![Room::new("R1", 10), Room::new("R1", 10)];
        let errors = validate_input(&professors, &rooms).unwrap_err();
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn test_error_display() {
        let e = InputError::DuplicateSubjectCode {
            professor_id: "P1".into(),
            subject_code: "MAT101".into(),
        };
        assert_eq!(
            e.to_string(),
            "professor P1 lists subject code MAT101 more than once"
        );
    }
}
