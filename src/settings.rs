//! Validation settings
//!
//! The host hands these over as part of its JSON configuration. Absent
//! settings, or absent fields, are equivalent to "enabled".

use serde::{Deserialize, Serialize};

/// Settings bundle controlling validation behavior
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationSettings {
    /// Whether schema checking and schema-location merging apply
    ///
    /// When off, the parse still runs in structural (non-schema) mode.
    pub schema: bool,
}

impl Default for ValidationSettings {
    fn default() -> Self {
        Self { schema: true }
    }
}

impl ValidationSettings {
    /// Deserialize settings from a JSON value
    pub fn from_json(value: serde_json::Value) -> serde_json::Result<Self> {
        serde_json::from_value(value)
    }

    /// Whether schema checking applies for an optional settings reference
    pub fn schema_enabled(settings: Option<&Self>) -> bool {
        settings.map_or(true, |s| s.schema)
    }
}
