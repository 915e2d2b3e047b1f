//! # Simulation Configuration
//!
//! 시즌 시뮬레이션의 모든 튜닝 상수를 한 곳에서 관리한다.
//!
//! ## 사용법
//! ```rust
//! use fm_core::config::SimConfig;
//!
//! let config = SimConfig::default();
//! let arcade = SimConfig::arcade();
//! assert!(arcade.outcome.expected_goals_scale > config.outcome.expected_goals_scale);
//! ```

mod calendar_config;
mod lineup_config;
mod outcome_config;
mod schedule_config;

pub use calendar_config::CalendarConfig;
pub use lineup_config::{LineupConfig, LineupPolicy};
pub use outcome_config::OutcomeConfig;
pub use schedule_config::ScheduleConfig;

use crate::error::{Result, SimulationError};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimConfig {
    #[serde(default)]
    pub schedule: ScheduleConfig,
    #[serde(default)]
    pub outcome: OutcomeConfig,
    #[serde(default)]
    pub lineup: LineupConfig,
    #[serde(default)]
    pub calendar: CalendarConfig,
    /// Simulate a day's games on the rayon pool
    #[serde(default = "default_parallel_games")]
    pub parallel_games: bool,
}

fn default_parallel_games() -> bool {
    true
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            schedule: ScheduleConfig::default(),
            outcome: OutcomeConfig::default(),
            lineup: LineupConfig::default(),
            calendar: CalendarConfig::default(),
            parallel_games: default_parallel_games(),
        }
    }
}

impl SimConfig {
    pub fn realistic() -> Self {
        Self::default()
    }

    /// More goals, more shootouts
    pub fn arcade() -> Self {
        let mut cfg = Self::default();
        cfg.outcome.expected_goals_scale = 4.2;
        cfg.outcome.max_lambda = 9.0;
        cfg.outcome.shootout_probability = 0.5;
        cfg.outcome.shot_volume = 11.0;
        cfg
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<()> {
        let o = &self.outcome;
        if o.min_lambda <= 0.0 || o.min_lambda > o.max_lambda {
            return Err(SimulationError::InvalidConfig(format!(
                "lambda clamp [{}, {}] is empty or non-positive",
                o.min_lambda, o.max_lambda
            )));
        }
        if o.expected_goals_scale <= 0.0 || o.defense_offset < 0.0 {
            return Err(SimulationError::InvalidConfig(
                "expected goal scale must be positive and defense offset non-negative".to_string(),
            ));
        }
        let probabilities = [
            ("home_tiebreak_probability", o.home_tiebreak_probability),
            ("shootout_probability", o.shootout_probability),
            ("primary_assist_rate", o.primary_assist_rate),
            ("secondary_assist_rate", o.secondary_assist_rate),
            ("penalty_base_rate", o.penalty_base_rate),
        ];
        for (name, p) in probabilities {
            if !(0.0..=1.0).contains(&p) {
                return Err(SimulationError::InvalidConfig(format!(
                    "{name} must be within [0, 1], got {p}"
                )));
            }
        }
        if o.shots_against_range.0 > o.shots_against_range.1 {
            return Err(SimulationError::InvalidConfig(format!(
                "shots_against_range {:?} is inverted",
                o.shots_against_range
            )));
        }

        let s = &self.schedule;
        if s.games_per_team == 0 {
            return Err(SimulationError::InvalidConfig(
                "games_per_team must be positive".to_string(),
            ));
        }
        if s.game_weekdays.is_empty() {
            return Err(SimulationError::InvalidConfig(
                "at least one game weekday is required".to_string(),
            ));
        }
        if s.all_star_exclusion_days < 0 || s.min_days_between_games < 1 {
            return Err(SimulationError::InvalidConfig(
                "all-star exclusion must be >= 0 and game spacing >= 1 day".to_string(),
            ));
        }

        if self.calendar.event_retention_days < 0 {
            return Err(SimulationError::InvalidConfig(
                "event_retention_days must be >= 0".to_string(),
            ));
        }
        Ok(())
    }
}
