//! Activity type classification.
//!
//! Every subject requirement and assignment carries an activity type
//! drawn from a closed set. Input data uses free-text labels and
//! three-letter abbreviations; [`ActivityType::normalize`] maps them to
//! the canonical variants and falls back to [`ActivityType::Theory`]
//! for anything unrecognized, so a dirty label can never abort a run.

use serde::{Deserialize, Serialize};

/// Kind of teaching activity a block is used for.
///
/// The practical kinds (lab, workshop, practice) tolerate longer
/// continuous runs of blocks than lecture-style kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum ActivityType {
    /// Lecture-style theory class.
    Theory,
    /// Laboratory session.
    Lab,
    /// Supervised practice session.
    Practice,
    /// Workshop session.
    Workshop,
    /// Tutoring session.
    Tutoring,
    /// Teaching-assistance session.
    Assistance,
}

impl ActivityType {
    /// Parses a label or abbreviation into an activity type.
    ///
    /// Accepts the canonical names and the historical abbreviations
    /// (`lab`, `pra`, `tal`, `ayu`, `tut`), case-insensitively.
    /// Returns `None` for unrecognized input.
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_ascii_lowercase().as_str() {
            "theory" | "teo" => Some(Self::Theory),
            "lab" | "laboratory" => Some(Self::Lab),
            "practice" | "pra" => Some(Self::Practice),
            "workshop" | "tal" => Some(Self::Workshop),
            "tutoring" | "tut" => Some(Self::Tutoring),
            "assistance" | "ayu" => Some(Self::Assistance),
            _ => None,
        }
    }

    /// Normalizes a label, defaulting to [`ActivityType::Theory`].
    ///
    /// Unrecognized labels are logged as a warning and treated as
    /// theory; normalization never fails.
    pub fn normalize(label: &str) -> Self {
        match Self::from_label(label) {
            Some(activity) => activity,
            None => {
                log::warn!("unrecognized activity label {label:?}, defaulting to theory");
                Self::Theory
            }
        }
    }

    /// Canonical lowercase label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Theory => "theory",
            Self::Lab => "lab",
            Self::Practice => "practice",
            Self::Workshop => "workshop",
            Self::Tutoring => "tutoring",
            Self::Assistance => "assistance",
        }
    }

    /// Whether this is a hands-on activity (lab, workshop, practice).
    pub fn is_practical(self) -> bool {
        matches!(self, Self::Lab | Self::Workshop | Self::Practice)
    }

    /// Longest permitted run of strictly consecutive blocks in a day.
    ///
    /// Practical activities may run 3 blocks back-to-back; lecture-style
    /// activities are capped at 2.
    pub fn max_continuous_blocks(self) -> usize {
        if self.is_practical() {
            3
        } else {
            2
        }
    }
}

impl Default for ActivityType {
    fn default() -> Self {
        Self::Theory
    }
}

impl From<String> for ActivityType {
    fn from(label: String) -> Self {
        Self::normalize(&label)
    }
}

impl std::fmt::Display for ActivityType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
