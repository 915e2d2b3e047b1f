use super::ids::{LeagueId, TeamId};
use super::team::{Team, TeamRecord};
use crate::calendar::SeasonPhase;
use serde::{Deserialize, Serialize};

/// One row of the standings table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StandingsEntry {
    pub team_id: TeamId,
    pub team_name: String,
    pub record: TeamRecord,
    pub points: u32,
}

/// Fixed set of teams for the lifetime of a season.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct League {
    pub id: LeagueId,
    pub name: String,
    pub teams: Vec<Team>,
}

impl League {
    pub fn new(name: impl Into<String>, teams: Vec<Team>) -> Self {
        Self {
            id: LeagueId::new(),
            name: name.into(),
            teams,
        }
    }

    pub fn team(&self, id: TeamId) -> Option<&Team> {
        self.teams.iter().find(|t| t.id == id)
    }

    pub fn team_mut(&mut self, id: TeamId) -> Option<&mut Team> {
        self.teams.iter_mut().find(|t| t.id == id)
    }

    pub fn team_count(&self) -> usize {
        self.teams.len()
    }

    pub fn team_ids(&self) -> Vec<TeamId> {
        self.teams.iter().map(|t| t.id).collect()
    }

    /// Points, then wins, then name.
    pub fn standings(&self) -> Vec<StandingsEntry> {
        let mut rows: Vec<StandingsEntry> = self.teams.iter().map(entry_for).collect();
        rows.sort_by(|a, b| {
            b.points
                .cmp(&a.points)
                .then(b.record.wins.cmp(&a.record.wins))
                .then_with(|| a.team_name.cmp(&b.team_name))
        });
        rows
    }

    /// Outside the regular season and playoffs records are meaningless, so
    /// teams are listed alphabetically.
    pub fn standings_for_phase(&self, phase: SeasonPhase) -> Vec<StandingsEntry> {
        match phase {
            SeasonPhase::Regular | SeasonPhase::Playoffs => self.standings(),
            SeasonPhase::Preseason | SeasonPhase::Offseason => {
                let mut rows: Vec<StandingsEntry> = self.teams.iter().map(entry_for).collect();
                rows.sort_by(|a, b| a.team_name.cmp(&b.team_name));
                rows
            }
        }
    }

    /// Clears records and season stats. Career stats are kept.
    pub fn reset_for_new_season(&mut self) {
        for team in &mut self.teams {
            team.record = TeamRecord::default();
            team.lineup = None;
            for player in &mut team.roster {
                player.season_stats = Default::default();
            }
        }
    }
}

fn entry_for(team: &Team) -> StandingsEntry {
    StandingsEntry {
        team_id: team.id,
        team_name: team.full_name(),
        record: team.record,
        points: team.record.points(),
    }
}
