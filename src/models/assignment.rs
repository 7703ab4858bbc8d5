//! Assignment model and the weekday enumeration.
//!
//! An assignment is one placed teaching block: a professor teaching a
//! subject in a room at a (day, block) slot. Assignments are the data
//! under test — blocks outside the valid 1–9 range are representable
//! on purpose, so the checks can report them instead of the loader
//! rejecting the record.

use serde::{Deserialize, Serialize};

use super::ActivityType;

/// A weekday of the five-day operating week.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Day {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
}

impl Day {
    /// All weekdays in order.
    pub const ALL: [Day; 5] = [
        Day::Monday,
        Day::Tuesday,
        Day::Wednesday,
        Day::Thursday,
        Day::Friday,
    ];

    /// Zero-based index (Monday = 0).
    pub fn index(self) -> usize {
        self as usize
    }

    /// English weekday name.
    pub fn label(self) -> &'static str {
        match self {
            Day::Monday => "Monday",
            Day::Tuesday => "Tuesday",
            Day::Wednesday => "Wednesday",
            Day::Thursday => "Thursday",
            Day::Friday => "Friday",
        }
    }
}

impl std::fmt::Display for Day {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for Day {
    type Err = String;

    /// Parses full names or three-letter abbreviations, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "monday" | "mon" => Ok(Day::Monday),
            "tuesday" | "tue" => Ok(Day::Tuesday),
            "wednesday" | "wed" => Ok(Day::Wednesday),
            "thursday" | "thu" => Ok(Day::Thursday),
            "friday" | "fri" => Ok(Day::Friday),
            other => Err(format!("unknown weekday label: {other:?}")),
        }
    }
}

/// One placed teaching block in the timetable under test.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Assignment {
    /// Professor identifier, referencing the professor catalog.
    pub professor_id: String,
    /// Subject code within that professor's requirements.
    pub subject_code: String,
    /// Weekday of the slot.
    pub day: Day,
    /// Time block. Valid range is 1–9; out-of-range values are kept
    /// and reported by the block-range rule.
    pub block: i32,
    /// Room code, referencing the room catalog.
    pub room_code: String,
    /// Parallel-section index for split subjects. 0 when absent.
    #[serde(default)]
    pub instance: u32,
    /// Kind of teaching activity in this block.
    #[serde(default)]
    pub activity: ActivityType,
}

impl Assignment {
    /// Creates an assignment in instance 0 with theory activity.
    pub fn new(
        professor_id: impl Into<String>,
        subject_code: impl Into<String>,
        day: Day,
        block: i32,
        room_code: impl Into<String>,
    ) -> Self {
        Self {
            professor_id: professor_id.into(),
            subject_code: subject_code.into(),
            day,
            block,
            room_code: room_code.into(),
            instance: 0,
            activity: ActivityType::Theory,
        }
    }

    /// Sets the parallel-section index.
    pub fn with_instance(mut self, instance: u32) -> Self {
        self.instance = instance;
        self
    }

    /// Sets the activity type.
    pub fn with_activity(mut self, activity: ActivityType) -> Self {
        self.activity = activity;
        self
    }

    /// The (day, block) slot this assignment occupies.
    pub fn slot(&self) -> (Day, i32) {
        (self.day, self.block)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_day_order_and_index() {
        assert_eq!(Day::Monday.index(), 0);
        assert_eq!(Day::Friday.index(), 4);
        assert!(Day::Monday < Day::Friday);
        assert_eq!(Day::ALL.len(), 5);
    }

    #[test]
    fn test_day_parsing() {
        assert_eq!("monday".parse::<Day>().unwrap(), Day::Monday);
        assert_eq!("WED".parse::<Day>().unwrap(), Day::Wednesday);
        assert_eq!(" Fri ".parse::<Day>().unwrap(), Day::Friday);
        assert!("sunday".parse::<Day>().is_err());
    }

    #[test]
    fn test_assignment_builder() {
        let a = Assignment::new("P1", "MAT101", Day::Tuesday, 3, "KAU-201")
            .with_instance(1)
            .with_activity(ActivityType::Lab);

        assert_eq!(a.professor_id, "P1");
        assert_eq!(a.slot(), (Day::Tuesday, 3));
        assert_eq!(a.instance, 1);
        assert_eq!(a.activity, ActivityType::Lab);
    }

    #[test]
    fn test_assignment_optional_fields_default() {
        let json = r#"{
            "professor_id": "P1",
            "subject_code": "MAT101",
            "day": "monday",
            "block": 2,
            "room_code": "KAU-201"
        }"#;
        let a: Assignment = serde_json::from_str(json).unwrap();
        assert_eq!(a.instance, 0);
        assert_eq!(a.activity, ActivityType::Theory);
    }

    #[test]
    fn test_out_of_range_block_is_representable() {
        let a = Assignment::new("P1", "MAT101", Day::Monday, 12, "R1");
        assert_eq!(a.block, 12);
    }
}
