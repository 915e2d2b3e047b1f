//! Player statistics
//!
//! `PlayerGameStats` is one box-score line produced by the game simulator.
//! `PlayerStats` is the running season/career accumulator it folds into.

use serde::{Deserialize, Serialize};

/// Goalie decision for a single game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GoalieDecision {
    Win,
    Loss,
    OvertimeLoss,
}

/// One player's line in a single game's box score
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerGameStats {
    pub goals: u32,
    pub assists: u32,
    pub shots: u32,
    pub hits: u32,
    pub blocks: u32,
    pub penalty_minutes: u32,
    /// Seconds
    pub time_on_ice: u32,
    pub plus_minus: i32,
    pub faceoff_attempts: u32,
    pub faceoff_wins: u32,

    // Goalie
    pub saves: u32,
    pub goals_against: u32,
    pub shots_against: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub decision: Option<GoalieDecision>,
    pub shutout: bool,
}

impl PlayerGameStats {
    pub fn points(&self) -> u32 {
        self.goals + self.assists
    }
}

/// Cumulative statistics (season or career)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerStats {
    pub games_played: u32,
    pub goals: u32,
    pub assists: u32,
    pub plus_minus: i32,
    pub penalty_minutes: u32,
    pub shots: u32,
    pub hits: u32,
    pub blocks: u32,
    pub faceoff_wins: u32,
    pub faceoff_attempts: u32,
    /// Seconds
    pub time_on_ice: u32,

    // Goalie
    pub saves: u32,
    pub goals_against: u32,
    pub shots_against: u32,
    pub wins: u32,
    pub losses: u32,
    pub overtime_losses: u32,
    pub shutouts: u32,
}

impl PlayerStats {
    /// Fold one game into the accumulator. Always counts a game played.
    pub fn add_game(&mut self, game: &PlayerGameStats) {
        self.games_played += 1;
        self.goals += game.goals;
        self.assists += game.assists;
        self.plus_minus += game.plus_minus;
        self.penalty_minutes += game.penalty_minutes;
        self.shots += game.shots;
        self.hits += game.hits;
        self.blocks += game.blocks;
        self.faceoff_wins += game.faceoff_wins;
        self.faceoff_attempts += game.faceoff_attempts;
        self.time_on_ice += game.time_on_ice;

        self.saves += game.saves;
        self.goals_against += game.goals_against;
        self.shots_against += game.shots_against;
        match game.decision {
            Some(GoalieDecision::Win) => self.wins += 1,
            Some(GoalieDecision::Loss) => self.losses += 1,
            Some(GoalieDecision::OvertimeLoss) => self.overtime_losses += 1,
            None => {}
        }
        if game.shutout {
            self.shutouts += 1;
        }
    }

    pub fn points(&self) -> u32 {
        self.goals + self.assists
    }

    pub fn faceoff_percentage(&self) -> f64 {
        ratio(self.faceoff_wins, self.faceoff_attempts)
    }

    pub fn save_percentage(&self) -> f64 {
        ratio(self.saves, self.shots_against)
    }

    /// Goals against per 60 minutes
    pub fn goals_against_average(&self) -> f64 {
        if self.time_on_ice == 0 {
            return 0.0;
        }
        self.goals_against as f64 * 3600.0 / self.time_on_ice as f64
    }

    /// Seconds per game
    pub fn average_time_on_ice(&self) -> f64 {
        ratio(self.time_on_ice, self.games_played)
    }
}

fn ratio(num: u32, den: u32) -> f64 {
    if den == 0 {
        0.0
    } else {
        num as f64 / den as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_game_accumulates_skater_line() {
        let mut stats = PlayerStats::default();
        let line = PlayerGameStats {
            goals: 2,
            assists: 1,
            shots: 5,
            plus_minus: -1,
            time_on_ice: 1080,
            faceoff_attempts: 10,
            faceoff_wins: 6,
            ..Default::default()
        };
        stats.add_game(&line);
        stats.add_game(&line);

        assert_eq!(stats.games_played, 2);
        assert_eq!(stats.points(), 6);
        assert_eq!(stats.plus_minus, -2);
        assert!((stats.faceoff_percentage() - 0.6).abs() < 1e-9);
        assert!((stats.average_time_on_ice() - 1080.0).abs() < 1e-9);
    }

    #[test]
    fn test_add_game_tracks_goalie_decisions() {
        let mut stats = PlayerStats::default();
        stats.add_game(&PlayerGameStats {
            time_on_ice: 3600,
            shots_against: 30,
            saves: 30,
            decision: Some(GoalieDecision::Win),
            shutout: true,
            ..Default::default()
        });
        stats.add_game(&PlayerGameStats {
            time_on_ice: 3600,
            shots_against: 25,
            saves: 22,
            goals_against: 3,
            decision: Some(GoalieDecision::OvertimeLoss),
            ..Default::default()
        });

        assert_eq!((stats.wins, stats.losses, stats.overtime_losses), (1, 0, 1));
        assert_eq!(stats.shutouts, 1);
        assert!((stats.save_percentage() - 52.0 / 55.0).abs() < 1e-9);
        assert!((stats.goals_against_average() - 1.5).abs() < 1e-9);
    }

    #[test]
    fn test_empty_ratios_are_zero() {
        let stats = PlayerStats::default();
        assert_eq!(stats.save_percentage(), 0.0);
        assert_eq!(stats.goals_against_average(), 0.0);
        assert_eq!(stats.average_time_on_ice(), 0.0);
    }
}
