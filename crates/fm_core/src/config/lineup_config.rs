//! Lineup Configuration

use serde::{Deserialize, Serialize};

/// When the day loop should replace a team's stored lineup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineupPolicy {
    /// Keep a stored lineup while it is complete and every slot is healthy.
    KeepValid,
    /// Reassemble every team every day.
    AlwaysRebuild,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LineupConfig {
    pub policy: LineupPolicy,
    /// Accept a single healthy goalie and list the same goalie as backup.
    pub allow_single_goalie: bool,
}

impl Default for LineupConfig {
    fn default() -> Self {
        Self {
            policy: LineupPolicy::KeepValid,
            allow_single_goalie: false,
        }
    }
}
