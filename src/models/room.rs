//! Room model and campus derivation.
//!
//! Rooms are reference data: a unique code and a seat capacity. The
//! campus a room belongs to is not stored — it is derived from a fixed
//! room-code prefix convention (`KAU*` and `HUA*` prefixes, everything
//! else on the third site). The mapping is not configurable.

use serde::{Deserialize, Serialize};

/// A physical site, derived from the room-code prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Campus {
    /// Rooms with codes starting `KAU`.
    A,
    /// Rooms with codes starting `HUA`.
    B,
    /// Every other room.
    C,
}

/// A room that assignments can be placed in.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Room {
    /// Unique room code (e.g. `KAU-201`).
    pub code: String,
    /// Seat capacity.
    pub capacity: u32,
}

impl Campus {
    /// Derives the campus from a room code.
    pub fn from_room_code(code: &str) -> Self {
        if code.starts_with("KAU") {
            Self::A
        } else if code.starts_with("HUA") {
            Self::B
        } else {
            Self::C
        }
    }

    /// Short site label.
    pub fn label(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
        }
    }
}

impl std::fmt::Display for Campus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl Room {
    /// Creates a room.
    pub fn new(code: impl Into<String>, capacity: u32) -> Self {
        Self {
            code: code.into(),
            capacity,
        }
    }

    /// Campus this room sits on, from its code prefix.
    pub fn campus(&self) -> Campus {
        Campus::from_room_code(&self.code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_campus_from_prefix() {
        assert_eq!(Campus::from_room_code("KAU-101"), Campus::A);
        assert_eq!(Campus::from_room_code("KAU2"), Campus::A);
        assert_eq!(Campus::from_room_code("HUA-3"), Campus::B);
        assert_eq!(Campus::from_room_code("LAB-1"), Campus::C);
        assert_eq!(Campus::from_room_code(""), Campus::C);
    }

    #[test]
    fn test_prefix_is_case_sensitive() {
        // Lowercase codes do not match the convention.
        assert_eq!(Campus::from_room_code("kau-101"), Campus::C);
    }

    #[test]
    fn test_room_campus() {
        assert_eq!(Room::new("KAU-201", 40).campus(), Campus::A);
        assert_eq!(Room::new("B-12", 25).campus(), Campus::C);
    }
}
