use super::ids::{GameId, TeamId};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// How a game was decided. Overtime and shootout are exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameDecision {
    Regulation,
    Overtime,
    Shootout,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameResult {
    pub home_score: u32,
    pub away_score: u32,
    pub decision: GameDecision,
}

impl GameResult {
    pub fn is_overtime(&self) -> bool {
        self.decision == GameDecision::Overtime
    }

    pub fn is_shootout(&self) -> bool {
        self.decision == GameDecision::Shootout
    }

    pub fn beyond_regulation(&self) -> bool {
        self.decision != GameDecision::Regulation
    }

    pub fn home_won(&self) -> bool {
        self.home_score > self.away_score
    }
}

/// A scheduled game. Teams and date never change; the result is written
/// once when the game is simulated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Game {
    pub id: GameId,
    pub home_team_id: TeamId,
    pub away_team_id: TeamId,
    pub date: NaiveDate,
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub result: Option<GameResult>,
}

impl Game {
    pub fn new(home_team_id: TeamId, away_team_id: TeamId, date: NaiveDate) -> Self {
        Self {
            id: GameId::new(),
            home_team_id,
            away_team_id,
            date,
            completed: false,
            result: None,
        }
    }

    pub fn involves(&self, team_id: TeamId) -> bool {
        self.home_team_id == team_id || self.away_team_id == team_id
    }

    pub fn opponent_of(&self, team_id: TeamId) -> Option<TeamId> {
        if self.home_team_id == team_id {
            Some(self.away_team_id)
        } else if self.away_team_id == team_id {
            Some(self.home_team_id)
        } else {
            None
        }
    }

    /// Records the result. Returns `false` (and leaves the game untouched)
    /// if it was already completed.
    pub fn complete(&mut self, result: GameResult) -> bool {
        if self.completed {
            return false;
        }
        self.result = Some(result);
        self.completed = true;
        true
    }

    pub fn winner(&self) -> Option<TeamId> {
        let result = self.result.as_ref()?;
        Some(if result.home_won() { self.home_team_id } else { self.away_team_id })
    }

    pub fn loser(&self) -> Option<TeamId> {
        let result = self.result.as_ref()?;
        Some(if result.home_won() { self.away_team_id } else { self.home_team_id })
    }
}
