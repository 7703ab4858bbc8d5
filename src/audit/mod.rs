//! Scoring, report assembly, and the audit entry point.
//!
//! Combines the outputs of the checking passes — per-placement rule
//! violations, cross-assignment conflicts, and hour reconciliation —
//! into satisfaction and workload-balance scores and a single
//! [`AuditReport`] for the caller to render.
//!
//! # Scores
//!
//! | Score | Definition |
//! |-------|-----------|
//! | Satisfaction | 100 − 20·HIGH − 10·MEDIUM − 5·LOW per (professor, subject), clamped to [0, 100] |
//! | Workload balance | 100·(1 − max deviation from the mean daily load), clamped to [0, 100] |

mod diagnostics;
mod engine;
mod report;

pub use diagnostics::{DataWarning, Diagnostics};
pub use engine::audit_schedule;
pub use report::{
    AuditReport, AuditSummary, ProfessorBalance, SeverityCounts, SubjectReportRow,
    satisfaction_score, workload_balance,
};
