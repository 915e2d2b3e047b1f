//! Domain data model: players, teams, lineups, games and seasons.

mod game;
mod ids;
mod league;
mod lineup;
mod player;
mod season;
mod stats;
mod team;

pub use game::{Game, GameDecision, GameResult};
pub use ids::{EventId, GameId, LeagueId, PlayerId, SeasonId, TeamId};
pub use league::{League, StandingsEntry};
pub use lineup::{TeamLineup, DEFENSE_PAIRS, FORWARD_LINES, LINE_SIZE, PAIR_SIZE};
pub use player::{
    GoalieAttributes, InjuryStatus, Player, PlayerRatings, Position, SkaterAttributes,
};
pub use season::{ArchivedSeason, Season};
pub use stats::{GoalieDecision, PlayerGameStats, PlayerStats};
pub use team::{Team, TeamRecord};
