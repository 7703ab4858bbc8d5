//! Timetabling domain models.
//!
//! Provides the core data types for representing a proposed timetable
//! and the outcome of checking it: professors with their teaching
//! requirements, rooms, placed assignments, and rule violations.
//!
//! All models are plain data; the checking passes live in [`crate::rules`],
//! [`crate::conflicts`], and [`crate::reconcile`].

mod activity;
mod assignment;
mod professor;
mod room;
mod violation;

pub use activity::ActivityType;
pub use assignment::{Assignment, Day};
pub use professor::{ContractType, Professor, SubjectRequirement};
pub use room::{Campus, Room};
pub use violation::{ConstraintId, Severity, Violation};
