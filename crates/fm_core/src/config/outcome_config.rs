//! Game Outcome Configuration

use serde::{Deserialize, Serialize};

/// 경기 결과 시뮬레이션 튜닝 상수
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutcomeConfig {
    // === Expected Goals ===
    /// Multiplier in `offense / (defense + offset) * scale` (기본: 3.0)
    pub expected_goals_scale: f64,
    /// Offset added to the opposing defense (기본: 50.0)
    pub defense_offset: f64,
    /// Strength used when a lineup yields no attribute data (기본: 50.0)
    pub default_strength: f64,

    // === Poisson Sampling ===
    /// Lower lambda clamp (기본: 0.5)
    pub min_lambda: f64,
    /// Upper lambda clamp (기본: 8.0)
    pub max_lambda: f64,
    /// Hard cap on sampled regulation goals (기본: 10)
    pub max_goals: u32,

    // === Tie Resolution ===
    /// Probability the home side wins a tied game (기본: 0.5)
    pub home_tiebreak_probability: f64,
    /// Probability a tied game is settled by shootout instead of overtime (기본: 0.3)
    pub shootout_probability: f64,

    // === Box Score ===
    /// Chance a goal carries a primary assist (기본: 0.9)
    pub primary_assist_rate: f64,
    /// Chance a goal carries a secondary assist (기본: 0.7)
    pub secondary_assist_rate: f64,
    /// Goal weight multiplier applied to defensemen (기본: 0.25)
    pub defense_goal_factor: f64,
    /// Shots per game at full deployment (기본: 8.0)
    pub shot_volume: f64,
    /// Hits per game at full deployment (기본: 3.0)
    pub hit_volume: f64,
    /// Blocks per game at full deployment (기본: 2.0)
    pub block_volume: f64,
    /// Penalty chance for a player with zero discipline (기본: 0.15)
    pub penalty_base_rate: f64,
    /// Goalie shots-against range, inclusive (기본: 20..=40)
    pub shots_against_range: (u32, u32),
}

impl Default for OutcomeConfig {
    fn default() -> Self {
        Self {
            expected_goals_scale: 3.0,
            defense_offset: 50.0,
            default_strength: 50.0,

            min_lambda: 0.5,
            max_lambda: 8.0,
            max_goals: 10,

            home_tiebreak_probability: 0.5,
            shootout_probability: 0.3,

            primary_assist_rate: 0.9,
            secondary_assist_rate: 0.7,
            defense_goal_factor: 0.25,
            shot_volume: 8.0,
            hit_volume: 3.0,
            block_volume: 2.0,
            penalty_base_rate: 0.15,
            shots_against_range: (20, 40),
        }
    }
}
