//! # fm_core - Hockey Season Simulation Engine
//!
//! Season scheduling, lineup assembly, game outcome simulation and a
//! day-by-day calendar for a single-franchise hockey management game.
//!
//! ## Features
//! - Deterministic given a seeded RNG (same seed = same season)
//! - Every team plays exactly its configured game count
//! - Box scores always agree with final scores
//! - A day's games can be simulated in parallel

// Struct initialization pattern used intentionally
#![allow(clippy::field_reassign_with_default)]
// Simulation entry points take both teams, both lineups, config and RNG
#![allow(clippy::too_many_arguments)]

pub mod calendar;
pub mod config;
pub mod error;
pub mod lineup;
pub mod models;
pub mod orchestrator;
pub mod schedule;
pub mod simulation;

#[cfg(test)]
pub(crate) mod test_support;

pub use calendar::{SeasonCalendar, SeasonPhase};
pub use config::SimConfig;
pub use error::{Result, SimulationError};
pub use orchestrator::{advance_days, advance_one_day, DayReport, FranchiseState};
pub use schedule::build_season_schedule;
pub use simulation::{simulate_game, SimulationGameResult};
