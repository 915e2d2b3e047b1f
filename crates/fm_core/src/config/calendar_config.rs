//! Calendar Configuration

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CalendarConfig {
    /// Events older than this many days are pruned after each advance (기본: 7)
    pub event_retention_days: i64,
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self { event_retention_days: 7 }
    }
}
