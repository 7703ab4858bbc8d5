//! Rule violations and the constraint catalog.
//!
//! Each check in the catalog has a small, stable numeric identifier and
//! a fixed severity. The identifiers are a public contract — report
//! consumers key off them — and must never be renumbered.

use serde::{Deserialize, Serialize};

/// Severity of a rule violation, driving the scoring penalty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Severity {
    High,
    Medium,
    Low,
}

/// Identifier of a constraint in the fixed catalog.
///
/// Discriminants are stable across versions:
///
/// | Code | Constraint | Severity |
/// |------|-----------|----------|
/// | 1 | Block outside the 1–9 operating range | HIGH |
/// | 2 | Continuous-block run over the activity limit | MEDIUM |
/// | 3 | First-/second-year subject in the afternoon | LOW |
/// | 4 | Illegal campus transition within a day | HIGH |
/// | 5 | Activity placed in an inappropriate slot | MEDIUM |
/// | 6 | Day gap over the limit for full-/half-time load | MEDIUM |
/// | 7 | Year-parity slot mismatch | MEDIUM |
/// | 8 | Seat count out of bounds or over room capacity | HIGH |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
#[serde(into = "u8", try_from = "u8")]
pub enum ConstraintId {
    BlockRange = 1,
    ContinuousRun = 2,
    MorningPreference = 3,
    CampusTransition = 4,
    ActivitySlot = 5,
    DayGap = 6,
    YearParity = 7,
    RoomCapacity = 8,
}

/// A single detected rule violation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Violation {
    /// Which catalog constraint was broken.
    pub constraint: ConstraintId,
    /// Human-readable description of the breach.
    pub description: String,
    /// Severity, fixed per constraint.
    pub severity: Severity,
}

impl Severity {
    /// Points subtracted from the 100-point satisfaction score.
    pub fn penalty(self) -> u32 {
        match self {
            Self::High => 20,
            Self::Medium => 10,
            Self::Low => 5,
        }
    }
}

impl ConstraintId {
    /// Stable numeric code of this constraint.
    pub fn code(self) -> u8 {
        self as u8
    }

    /// The fixed severity of this constraint.
    pub fn severity(self) -> Severity {
        match self {
            Self::BlockRange | Self::CampusTransition | Self::RoomCapacity => Severity::High,
            Self::ContinuousRun
            | Self::ActivitySlot
            | Self::DayGap
            | Self::YearParity => Severity::Medium,
            Self::MorningPreference => Severity::Low,
        }
    }
}

impl From<ConstraintId> for u8 {
    fn from(id: ConstraintId) -> u8 {
        id.code()
    }
}

impl TryFrom<u8> for ConstraintId {
    type Error = String;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            1 => Ok(Self::BlockRange),
            2 => Ok(Self::ContinuousRun),
            3 => Ok(Self::MorningPreference),
            4 => Ok(Self::CampusTransition),
            5 => Ok(Self::ActivitySlot),
            6 => Ok(Self::DayGap),
            7 => Ok(Self::YearParity),
            8 => Ok(Self::RoomCapacity),
            other => Err(format!("unknown constraint code: {other}")),
        }
    }
}

impl Violation {
    /// Creates a violation; severity comes from the constraint catalog.
    pub fn new(constraint: ConstraintId, description: impl Into<String>) -> Self {
        Self {
            constraint,
            description: description.into(),
            severity: constraint.severity(),
        }
    }
}
