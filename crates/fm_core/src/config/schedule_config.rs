//! Schedule Configuration

use chrono::Weekday;
use serde::{Deserialize, Serialize};

/// 정규시즌 일정 생성 파라미터
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScheduleConfig {
    /// Regular-season games every team must play (기본: 82)
    pub games_per_team: u16,
    /// Weekdays eligible to host games (기본: Tue/Thu/Sat/Sun)
    pub game_weekdays: Vec<Weekday>,
    /// Days on either side of the all-star date without games (기본: 3)
    pub all_star_exclusion_days: i64,
    /// Minimum gap in days between two games of one team during the greedy
    /// pass. 2 means at least one full rest day (기본: 2)
    pub min_days_between_games: i64,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            games_per_team: 82,
            game_weekdays: vec![Weekday::Tue, Weekday::Thu, Weekday::Sat, Weekday::Sun],
            all_star_exclusion_days: 3,
            min_days_between_games: 2,
        }
    }
}
