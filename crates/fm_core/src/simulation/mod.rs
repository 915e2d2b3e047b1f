//! # Game Outcome Simulation
//!
//! Team strengths feed a Poisson goal model; ties go to overtime or a
//! shootout; the box score is generated to agree with the final score.
//!
//! Simulation is total: missing attribute data falls back to defaults and
//! nothing here returns an error.

mod box_score;
mod poisson;
mod strength;

pub use box_score::{team_box_score, GameBoxScore};
pub use poisson::sample_goals;
pub use strength::{defensive_strength, expected_goals, offensive_strength};

use crate::config::OutcomeConfig;
use crate::models::{GameDecision, GameId, GameResult, Team, TeamId, TeamLineup};
use chrono::NaiveDate;
use rand::Rng;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationGameResult {
    /// Scheduled game this result belongs to, set by the caller
    pub game_id: Option<GameId>,
    pub home_team_id: TeamId,
    pub away_team_id: TeamId,
    pub home_score: u32,
    pub away_score: u32,
    pub decision: GameDecision,
    pub date: NaiveDate,
    pub box_score: GameBoxScore,
}

impl SimulationGameResult {
    pub fn winner(&self) -> TeamId {
        if self.home_score > self.away_score {
            self.home_team_id
        } else {
            self.away_team_id
        }
    }

    pub fn loser(&self) -> TeamId {
        if self.home_score > self.away_score {
            self.away_team_id
        } else {
            self.home_team_id
        }
    }

    pub fn is_shutout(&self) -> bool {
        self.home_score == 0 || self.away_score == 0
    }

    pub fn game_result(&self) -> GameResult {
        GameResult {
            home_score: self.home_score,
            away_score: self.away_score,
            decision: self.decision,
        }
    }
}

/// Simulate one game between two deployed teams.
pub fn simulate_game(
    home: &Team,
    away: &Team,
    home_lineup: &TeamLineup,
    away_lineup: &TeamLineup,
    date: NaiveDate,
    config: &OutcomeConfig,
    rng: &mut impl Rng,
) -> SimulationGameResult {
    let home_offense = offensive_strength(home, home_lineup, config);
    let home_defense = defensive_strength(home, home_lineup, config);
    let away_offense = offensive_strength(away, away_lineup, config);
    let away_defense = defensive_strength(away, away_lineup, config);

    let home_expected = expected_goals(home_offense, away_defense, config);
    let away_expected = expected_goals(away_offense, home_defense, config);

    let mut home_score = sample_goals(home_expected, config, rng);
    let mut away_score = sample_goals(away_expected, config, rng);

    let decision = if home_score == away_score {
        if rng.gen_range(0.0..1.0) < config.home_tiebreak_probability {
            home_score += 1;
        } else {
            away_score += 1;
        }
        if rng.gen_range(0.0..1.0) < config.shootout_probability {
            GameDecision::Shootout
        } else {
            GameDecision::Overtime
        }
    } else {
        GameDecision::Regulation
    };

    let box_score = GameBoxScore {
        home: team_box_score(home, home_lineup, home_score, away_score, decision, config, rng),
        away: team_box_score(away, away_lineup, away_score, home_score, decision, config, rng),
    };

    SimulationGameResult {
        game_id: None,
        home_team_id: home.id,
        away_team_id: away.id,
        home_score,
        away_score,
        decision,
        date,
        box_score,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LineupConfig;
    use crate::lineup::assemble_lineup;
    use crate::test_support::{build_team, RosterShape};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn matchup(home_rating: u8, away_rating: u8) -> (Team, Team, TeamLineup, TeamLineup) {
        let home = build_team("Albany", home_rating, RosterShape::default());
        let away = build_team("Boston", away_rating, RosterShape::default());
        let home_lineup = assemble_lineup(&home, &LineupConfig::default()).unwrap();
        let away_lineup = assemble_lineup(&away, &LineupConfig::default()).unwrap();
        (home, away, home_lineup, away_lineup)
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 10, 14).unwrap()
    }

    #[test]
    fn test_same_seed_same_game() {
        let (home, away, hl, al) = matchup(50, 50);
        let config = OutcomeConfig::default();

        let first = simulate_game(&home, &away, &hl, &al, date(), &config, &mut ChaCha8Rng::seed_from_u64(2025));
        let second = simulate_game(&home, &away, &hl, &al, date(), &config, &mut ChaCha8Rng::seed_from_u64(2025));
        assert_eq!(first, second);
    }

    #[test]
    fn test_scores_and_box_scores_agree() {
        let (home, away, hl, al) = matchup(55, 70);
        let config = OutcomeConfig::default();
        let mut rng = ChaCha8Rng::seed_from_u64(99);

        for _ in 0..200 {
            let result = simulate_game(&home, &away, &hl, &al, date(), &config, &mut rng);
            assert_ne!(result.home_score, result.away_score);
            assert_eq!(result.box_score.home_goals(), result.home_score);
            assert_eq!(result.box_score.away_goals(), result.away_score);
            assert!(result.box_score.home_assists() <= result.home_score * 2);
            assert!(result.box_score.away_assists() <= result.away_score * 2);
            if result.decision != GameDecision::Regulation {
                assert_eq!(result.home_score.abs_diff(result.away_score), 1);
            }
        }
    }

    #[test]
    fn test_stronger_team_wins_more() {
        let (home, away, hl, al) = matchup(85, 40);
        let config = OutcomeConfig::default();
        let mut rng = ChaCha8Rng::seed_from_u64(5);

        let wins = (0..400)
            .filter(|_| {
                let result = simulate_game(&home, &away, &hl, &al, date(), &config, &mut rng);
                result.winner() == home.id
            })
            .count();
        assert!(wins > 240, "strong side won only {wins} of 400");
    }

    #[test]
    fn test_tie_breaks_are_exclusive() {
        let (home, away, hl, al) = matchup(50, 50);
        let mut config = OutcomeConfig::default();
        // regulation always ends 0-0
        config.min_lambda = 1e-9;
        config.max_lambda = 1e-9;
        config.max_goals = 0;
        config.shootout_probability = 1.0;
        let mut rng = ChaCha8Rng::seed_from_u64(8);

        let result = simulate_game(&home, &away, &hl, &al, date(), &config, &mut rng);
        assert_eq!(result.decision, GameDecision::Shootout);
        assert_eq!(result.home_score + result.away_score, 1);
        assert!(result.is_shutout());
    }
}
