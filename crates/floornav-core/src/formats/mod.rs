//! Floor-plan readers
//!
//! Readers turn source files into `Feature`s with their category already
//! assigned, so nothing downstream has to sniff room-type strings.

use serde_json::Value as JsonValue;

use crate::models::Category;

pub mod geojson;

/// Names of the feature properties that carry room attributes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyMapping {
    /// Free-text room type, also used as the room label
    pub room_type: String,
    /// Room number, optional per feature
    pub room_number: String,
    /// Explicit category tag; takes precedence over classifying the room type
    pub category: String,
}

impl Default for PropertyMapping {
    fn default() -> Self {
        Self {
            room_type: "Room Type".to_string(),
            room_number: "Room No".to_string(),
            category: "category".to_string(),
        }
    }
}

impl PropertyMapping {
    pub fn new(room_type: impl Into<String>, room_number: impl Into<String>) -> Self {
        Self {
            room_type: room_type.into(),
            room_number: room_number.into(),
            ..Default::default()
        }
    }

    /// Resolve the category of a feature from its properties
    pub fn category(&self, properties: &serde_json::Map<String, JsonValue>, label: &str) -> Category {
        properties
            .get(&self.category)
            .and_then(JsonValue::as_str)
            .and_then(Category::parse)
            .unwrap_or_else(|| Category::classify(label))
    }
}

/// Read a property as text.
///
/// Strings are kept verbatim, surrounding whitespace included. Numbers are
/// rendered without a trailing `.0` when integral; `null`, blank strings and
/// the literal `NULL` count as absent.
pub fn property_text(value: Option<&JsonValue>) -> Option<String> {
    let text = match value? {
        JsonValue::String(s) => s.clone(),
        JsonValue::Number(n) => match n.as_i64() {
            Some(i) => i.to_string(),
            None => n.to_string(),
        },
        JsonValue::Bool(b) => b.to_string(),
        _ => return None,
    };

    let trimmed = text.trim();
    if trimmed.is_empty() || trimmed == "NULL" {
        None
    } else {
        Some(text)
    }
}
