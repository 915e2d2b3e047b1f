//! # Day Advance
//!
//! The top-level pipeline: settle lineups, simulate today's games, fold
//! results into records and stats, count down injuries, move the calendar.
//! State goes in by reference and a new state comes out, so callers can
//! keep the previous day as a snapshot.

mod day;
mod progress;
mod state;

pub use day::{advance_days, advance_one_day, DayReport, SkippedTeam};
pub use progress::{NoProgress, ProgressSink, SimulationProgress};
pub use state::FranchiseState;
