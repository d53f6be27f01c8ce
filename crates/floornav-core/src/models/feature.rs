use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::geometry::Geometry;

/// Identifier of one building level (e.g. `Level_1`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FloorId(pub String);

impl FloorId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FloorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for FloorId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// What a floor-plan feature is, assigned once at ingestion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Corridor,
    Room,
    Stair,
    EmergencyExit,
}

impl Category {
    /// Classify a free-text room type.
    ///
    /// Rules, in order: a type starting with a lowercase `c` is a corridor,
    /// anything mentioning `stair` is a stair, anything mentioning
    /// `emergency exit` is an exit, everything else is a room.
    pub fn classify(room_type: &str) -> Self {
        let lowered = room_type.to_lowercase();
        if room_type.starts_with('c') {
            Category::Corridor
        } else if lowered.contains("stair") {
            Category::Stair
        } else if lowered.contains("emergency exit") {
            Category::EmergencyExit
        } else {
            Category::Room
        }
    }

    /// Parse an explicit category tag
    pub fn parse(tag: &str) -> Option<Self> {
        match tag.trim().to_lowercase().replace(['-', ' '], "_").as_str() {
            "corridor" => Some(Category::Corridor),
            "room" => Some(Category::Room),
            "stair" | "stairs" | "staircase" => Some(Category::Stair),
            "emergency_exit" | "exit" => Some(Category::EmergencyExit),
            _ => None,
        }
    }

    /// Corridors are walkable space; everything else is a destination
    pub fn is_walkable(&self) -> bool {
        matches!(self, Category::Corridor)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Corridor => "corridor",
            Category::Room => "room",
            Category::Stair => "stair",
            Category::EmergencyExit => "emergency_exit",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One room, corridor or stair record of a floor plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    pub floor: FloorId,
    pub category: Category,
    pub label: String,
    pub room_number: Option<String>,
    pub geometry: Geometry,
}

impl Feature {
    pub fn new(
        floor: impl Into<FloorId>,
        category: Category,
        label: impl Into<String>,
        geometry: Geometry,
    ) -> Self {
        Self {
            floor: floor.into(),
            category,
            label: label.into(),
            room_number: None,
            geometry,
        }
    }

    pub fn with_room_number(mut self, number: impl Into<String>) -> Self {
        self.room_number = Some(number.into());
        self
    }

    /// Human-readable name used in logs and errors
    pub fn display_name(&self) -> String {
        match &self.room_number {
            Some(number) => format!("{} ({})", self.label, number),
            None => self.label.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_room_types() {
        assert_eq!(Category::classify("corridor"), Category::Corridor);
        assert_eq!(Category::classify("c-wing hallway"), Category::Corridor);
        assert_eq!(Category::classify("Staircase"), Category::Stair);
        assert_eq!(Category::classify("North STAIRS"), Category::Stair);
        assert_eq!(Category::classify("Emergency Exit"), Category::EmergencyExit);
        assert_eq!(Category::classify("ICU"), Category::Room);
        // Uppercase C is not a corridor
        assert_eq!(Category::classify("Cardiology"), Category::Room);
    }

    #[test]
    fn test_parse_category_tags() {
        assert_eq!(Category::parse("Corridor"), Some(Category::Corridor));
        assert_eq!(Category::parse("emergency exit"), Some(Category::EmergencyExit));
        assert_eq!(Category::parse("emergency-exit"), Some(Category::EmergencyExit));
        assert_eq!(Category::parse("stairs"), Some(Category::Stair));
        assert_eq!(Category::parse("lobby"), None);
    }
}
