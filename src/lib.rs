//! Timetable constraint validation and scoring.
//!
//! Takes a proposed assignment of subjects to professors, rooms, days,
//! and time blocks and determines whether each placement respects the
//! scheduling rule catalog, whether placements collide with each other,
//! whether assigned hours satisfy each subject's requirement (including
//! the parallel-instance split for large enrollments), and how well the
//! result serves each professor — a satisfaction score per subject and
//! a workload-balance score per professor.
//!
//! The crate checks timetables, it does not generate them: schedules
//! come from elsewhere, and rendering the resulting report is equally
//! out of scope.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Professor`, `SubjectRequirement`,
//!   `Room`, `Assignment`, `Violation`, and the closed enumerations
//! - **`validation`**: Fatal structural checks on the reference catalogs
//! - **`index`**: Read-only per-run indices over the assignment batch
//! - **`rules`**: The per-placement constraint catalog (codes 1–8)
//! - **`conflicts`**: Double-booking and campus-transition detection
//! - **`reconcile`**: Required-hours accounting and the instance split
//! - **`audit`**: Scoring, report assembly, and [`audit_schedule`]
//!
//! # Example
//!
//! ```
//! use timetable_audit::audit_schedule;
//! use timetable_audit::models::{Assignment, Day, Professor, Room, SubjectRequirement};
//!
//! let professors = vec![Professor::new("P1").with_name("A. Turing").with_subject(
//!     SubjectRequirement::new("MAT101")
//!         .with_name("Linear Algebra")
//!         .with_hours(2)
//!         .with_year_level(1)
//!         .with_seats(30),
//! )];
//! let rooms = vec![Room::new("KAU-201", 40)];
//! let assignments = vec![
//!     Assignment::new("P1", "MAT101", Day::Monday, 1, "KAU-201"),
//!     Assignment::new("P1", "MAT101", Day::Wednesday, 2, "KAU-201"),
//! ];
//!
//! let report = audit_schedule(&professors, &rooms, &assignments).unwrap();
//! assert_eq!(report.rows[0].satisfaction, 100);
//! ```
//!
//! # References
//!
//! - Schaerf (1999), "A Survey of Automated Timetabling"
//! - Burke & Petrovic (2002), "Recent Research Directions in Automated Timetabling"

pub mod audit;
pub mod conflicts;
pub mod index;
pub mod models;
pub mod reconcile;
pub mod rules;
pub mod validation;

pub use audit::{audit_schedule, AuditReport};
pub use validation::InputError;
