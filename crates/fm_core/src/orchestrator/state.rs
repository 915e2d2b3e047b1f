use crate::calendar::SeasonCalendar;
use crate::config::SimConfig;
use crate::error::Result;
use crate::models::{ArchivedSeason, Game, League, Season};
use crate::schedule::build_season_schedule;
use log::info;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Everything one day advance reads and writes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FranchiseState {
    pub league: League,
    pub season: Season,
    #[serde(default)]
    pub archived_seasons: Vec<ArchivedSeason>,
    pub calendar: SeasonCalendar,
}

impl FranchiseState {
    /// Fresh state at training camp of `year` with a newly built schedule.
    pub fn new(league: League, year: i32, config: &SimConfig, rng: &mut impl Rng) -> Result<Self> {
        config.validate()?;
        let games = build_season_schedule(&league, year, &config.schedule, rng)?;
        let calendar = SeasonCalendar::with_config(year, &config.calendar)?;
        info!(
            "created season {} for {} ({} teams, {} games)",
            year,
            league.name,
            league.team_count(),
            games.len()
        );
        Ok(Self {
            league,
            season: Season::new(year, games),
            archived_seasons: Vec::new(),
            calendar,
        })
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn todays_games(&self) -> impl Iterator<Item = &Game> {
        self.season
            .games_on(self.calendar.current_date)
            .filter(|g| !g.completed)
    }

    pub fn upcoming_games(&self, limit: usize) -> Vec<&Game> {
        self.season.upcoming_games(self.calendar.current_date, limit)
    }
}
