use super::game::Game;
use super::ids::{GameId, SeasonId, TeamId};
use super::league::StandingsEntry;
use super::team::TeamRecord;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A season year and its game list, sorted by date.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Season {
    pub id: SeasonId,
    /// First calendar year of the season (2025 for 2025-26)
    pub year: i32,
    pub games: Vec<Game>,
}

/// Frozen copy of a finished season
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArchivedSeason {
    pub id: SeasonId,
    pub year: i32,
    pub games_played: usize,
    pub standings: Vec<StandingsEntry>,
}

impl Season {
    pub fn new(year: i32, games: Vec<Game>) -> Self {
        Self {
            id: SeasonId::new(),
            year,
            games,
        }
    }

    pub fn display_name(&self) -> String {
        format!("{}-{:02}", self.year, (self.year + 1).rem_euclid(100))
    }

    pub fn game(&self, id: GameId) -> Option<&Game> {
        self.games.iter().find(|g| g.id == id)
    }

    pub fn game_mut(&mut self, id: GameId) -> Option<&mut Game> {
        self.games.iter_mut().find(|g| g.id == id)
    }

    pub fn games_for_team(&self, team_id: TeamId) -> impl Iterator<Item = &Game> {
        self.games.iter().filter(move |g| g.involves(team_id))
    }

    pub fn completed_games_for_team(&self, team_id: TeamId) -> impl Iterator<Item = &Game> {
        self.games_for_team(team_id).filter(|g| g.completed)
    }

    pub fn games_on(&self, date: NaiveDate) -> impl Iterator<Item = &Game> {
        self.games.iter().filter(move |g| g.date == date)
    }

    /// Not yet completed games on or after `from`, at most `limit`.
    pub fn upcoming_games(&self, from: NaiveDate, limit: usize) -> Vec<&Game> {
        self.games
            .iter()
            .filter(|g| !g.completed && g.date >= from)
            .take(limit)
            .collect()
    }

    pub fn completed_count(&self) -> usize {
        self.games.iter().filter(|g| g.completed).count()
    }

    pub fn is_complete(&self) -> bool {
        self.games.iter().all(|g| g.completed)
    }

    pub fn first_game_date(&self) -> Option<NaiveDate> {
        self.games.iter().map(|g| g.date).min()
    }

    pub fn last_game_date(&self) -> Option<NaiveDate> {
        self.games.iter().map(|g| g.date).max()
    }

    /// Rebuild a team's record from stored results.
    pub fn record_for_team(&self, team_id: TeamId) -> TeamRecord {
        let mut record = TeamRecord::default();
        for game in self.completed_games_for_team(team_id) {
            if let Some(result) = &game.result {
                record.record_game(game.winner() == Some(team_id), result.beyond_regulation());
            }
        }
        record
    }

    pub fn archive(&self, standings: Vec<StandingsEntry>) -> ArchivedSeason {
        ArchivedSeason {
            id: self.id,
            year: self.year,
            games_played: self.completed_count(),
            standings,
        }
    }
}
