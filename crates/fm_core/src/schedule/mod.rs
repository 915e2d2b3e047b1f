//! Regular-season schedule construction
//!
//! A greedy pass places proportional matchups date by date; a backfill pass
//! tops up any team still short of its game target.

mod builder;
mod dates;

pub use builder::{build_season_schedule, team_game_counts};
pub use dates::candidate_dates;
