//! Professor and subject requirement models.
//!
//! A professor is identified by a unique tax/ID string and owns an
//! ordered list of subject requirements — the teaching load the
//! timetable under test is supposed to satisfy. Reference data, loaded
//! once per validation run and never mutated by the checks.

use serde::{Deserialize, Serialize};

use super::ActivityType;

/// Weekly hours at or above which a professor counts as full-time.
pub const FULL_TIME_HOURS: u32 = 16;
/// Weekly hours at or above which a professor counts as half-time.
pub const HALF_TIME_HOURS: u32 = 12;

/// A professor with their required teaching load.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Professor {
    /// Unique identifier (tax/ID string).
    pub id: String,
    /// Display name.
    pub name: String,
    /// Subjects this professor must teach, in catalog order.
    pub subjects: Vec<SubjectRequirement>,
}

/// One subject a professor is required to teach.
///
/// The subject code is unique within its professor, not globally —
/// two professors may both carry `MAT101`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubjectRequirement {
    /// Subject code, unique per professor.
    pub code: String,
    /// Subject display name.
    pub name: String,
    /// Weekly hours that must be assigned. 0 means no requirement.
    pub required_hours: u32,
    /// Year level of the cohort taking the subject (1-based).
    pub year_level: u32,
    /// Enrollment target (seat count).
    pub seats: u32,
    /// Kind of teaching activity.
    #[serde(default)]
    pub activity: ActivityType,
}

/// Contract classification inferred from a professor's total load.
///
/// Full- and half-time professors are held to a compactness rule
/// (no large gaps within a day); part-time professors are exempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContractType {
    /// 16 or more weekly hours.
    FullTime,
    /// 12 to 15 weekly hours.
    HalfTime,
    /// Fewer than 12 weekly hours.
    PartTime,
}

impl Professor {
    /// Creates a professor with the given identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            subjects: Vec::new(),
        }
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Adds a subject requirement.
    pub fn with_subject(mut self, subject: SubjectRequirement) -> Self {
        self.subjects.push(subject);
        self
    }

    /// Looks up a requirement by subject code.
    pub fn subject(&self, code: &str) -> Option<&SubjectRequirement> {
        self.subjects.iter().find(|s| s.code == code)
    }

    /// Total required hours across all subjects.
    pub fn total_required_hours(&self) -> u32 {
        self.subjects.iter().map(|s| s.required_hours).sum()
    }

    /// Contract classification from the total required load.
    pub fn contract_type(&self) -> ContractType {
        ContractType::from_weekly_hours(self.total_required_hours())
    }
}

impl SubjectRequirement {
    /// Creates a requirement with the given code.
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: String::new(),
            required_hours: 0,
            year_level: 1,
            seats: 0,
            activity: ActivityType::Theory,
        }
    }

    /// Sets the subject name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the required weekly hours.
    pub fn with_hours(mut self, hours: u32) -> Self {
        self.required_hours = hours;
        self
    }

    /// Sets the year level.
    pub fn with_year_level(mut self, level: u32) -> Self {
        self.year_level = level;
        self
    }

    /// Sets the seat count.
    pub fn with_seats(mut self, seats: u32) -> Self {
        self.seats = seats;
        self
    }

    /// Sets the activity type.
    pub fn with_activity(mut self, activity: ActivityType) -> Self {
        self.activity = activity;
        self
    }
}

impl ContractType {
    /// Classifies a weekly hour total.
    pub fn from_weekly_hours(hours: u32) -> Self {
        if hours >= FULL_TIME_HOURS {
            Self::FullTime
        } else if hours >= HALF_TIME_HOURS {
            Self::HalfTime
        } else {
            Self::PartTime
        }
    }

    /// Whether the day-compactness gap rule applies to this contract.
    pub fn gap_rule_applies(self) -> bool {
        !matches!(self, Self::PartTime)
    }
}
