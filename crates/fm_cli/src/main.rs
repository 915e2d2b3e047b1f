//! Season runner CLI
//!
//! Loads a league snapshot, builds a season and advances it day by day.

mod config_env;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use fm_core::models::League;
use fm_core::orchestrator::{NoProgress, SimulationProgress};
use fm_core::schedule::{build_season_schedule, team_game_counts};
use fm_core::{advance_one_day, FranchiseState, SeasonPhase, SimConfig};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "fm_cli")]
#[command(about = "Build and simulate hockey seasons", long_about = None)]
struct Cli {
    /// Simulation config JSON (falls back to FM_SIM_CONFIG_PATH)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// RNG seed; omit for a random season
    #[arg(long, global = true)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a regular-season schedule and print per-team counts
    Schedule {
        /// League JSON file
        #[arg(long)]
        league: PathBuf,

        /// First calendar year of the season
        #[arg(long, default_value = "2025")]
        year: i32,

        /// Write the game list as JSON
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Create a season from a league and simulate it
    Simulate {
        /// League JSON file
        #[arg(long)]
        league: PathBuf,

        #[arg(long, default_value = "2025")]
        year: i32,

        /// Days to simulate; default runs through the regular season
        #[arg(long)]
        days: Option<u32>,

        /// Write the resulting franchise state as JSON
        #[arg(long)]
        save: Option<PathBuf>,
    },

    /// Advance a saved franchise state
    Advance {
        /// Franchise state JSON file
        #[arg(long)]
        state: PathBuf,

        #[arg(long, default_value = "1")]
        days: u32,

        /// Where to write the advanced state (defaults to --state)
        #[arg(long)]
        save: Option<PathBuf>,

        /// Print per-day progress
        #[arg(long)]
        verbose: bool,
    },
}

fn main() -> Result<()> {
    sensible_env_logger::init!();
    let cli = Cli::parse();
    let config = config_env::load_sim_config(cli.config.as_deref())?;
    let seed = cli.seed.unwrap_or_else(|| rand::thread_rng().gen());
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    log::info!("using seed {}", seed);

    match cli.command {
        Commands::Schedule { league, year, out } => {
            let league = load_league(&league)?;
            let games = build_season_schedule(&league, year, &config.schedule, &mut rng)?;
            let counts = team_game_counts(&games);

            println!("📅 {} schedule: {} games", year, games.len());
            if let (Some(first), Some(last)) = (games.first(), games.last()) {
                println!("   {} → {}", first.date, last.date);
            }
            for team in &league.teams {
                println!(
                    "   {:<28} {:>3} games",
                    team.full_name(),
                    counts.get(&team.id).copied().unwrap_or(0)
                );
            }
            if let Some(out) = out {
                write_json(&out, &serde_json::to_string_pretty(&games)?)?;
            }
        }

        Commands::Simulate {
            league,
            year,
            days,
            save,
        } => {
            let league = load_league(&league)?;
            let mut state = FranchiseState::new(league, year, &config, &mut rng)?;
            // skip the empty preseason days
            if let Some(first) = state.season.first_game_date() {
                if first > state.calendar.current_date {
                    state.calendar.advance_to_date(first)?;
                }
            }

            let state = match days {
                Some(days) => run_days(state, days, &config, &mut rng, false)?,
                None => run_regular_season(state, &config, &mut rng)?,
            };
            print_standings(&state);
            if let Some(save) = save {
                write_json(&save, &state.to_json()?)?;
            }
        }

        Commands::Advance {
            state,
            days,
            save,
            verbose,
        } => {
            let content = fs::read_to_string(&state)
                .with_context(|| format!("failed to read state '{}'", state.display()))?;
            let loaded = FranchiseState::from_json(&content)?;
            let advanced = run_days(loaded, days, &config, &mut rng, verbose)?;
            print_standings(&advanced);
            write_json(save.as_ref().unwrap_or(&state), &advanced.to_json()?)?;
        }
    }

    Ok(())
}

fn load_league(path: &Path) -> Result<League> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read league '{}'", path.display()))?;
    let league: League = serde_json::from_str(&content)
        .with_context(|| format!("failed to parse league '{}'", path.display()))?;
    Ok(league)
}

fn run_days(
    mut state: FranchiseState,
    days: u32,
    config: &SimConfig,
    rng: &mut ChaCha8Rng,
    verbose: bool,
) -> Result<FranchiseState> {
    for _ in 0..days {
        let (next, report) = if verbose {
            let mut sink = |p: SimulationProgress| log::info!("[{:>3.0}%] {}", p.fraction * 100.0, p.label);
            advance_one_day(&state, config, rng, &mut sink)?
        } else {
            advance_one_day(&state, config, rng, &mut NoProgress)?
        };
        print_day(&next, &report);
        state = next;
    }
    Ok(state)
}

fn run_regular_season(
    mut state: FranchiseState,
    config: &SimConfig,
    rng: &mut ChaCha8Rng,
) -> Result<FranchiseState> {
    let end: NaiveDate = state.calendar.dates()?.regular_season_end;
    while state.calendar.current_date < end && state.calendar.phase != SeasonPhase::Playoffs {
        let (next, report) = advance_one_day(&state, config, rng, &mut NoProgress)?;
        print_day(&next, &report);
        state = next;
    }
    Ok(state)
}

fn print_day(state: &FranchiseState, report: &fm_core::DayReport) {
    if report.results.is_empty() && report.skipped_teams.is_empty() {
        return;
    }
    println!("🏒 {}", report.date);
    for result in &report.results {
        let name = |id| {
            state
                .league
                .team(id)
                .map(|t| t.abbreviation.clone())
                .unwrap_or_else(|| "???".to_string())
        };
        println!(
            "   {} {} - {} {} {:?}",
            name(result.away_team_id),
            result.away_score,
            result.home_score,
            name(result.home_team_id),
            result.decision
        );
    }
    for skipped in &report.skipped_teams {
        println!("   ⚠️  {} skipped: {}", skipped.team_name, skipped.reason);
    }
}

fn print_standings(state: &FranchiseState) {
    println!(
        "\n📊 {} standings ({}, {})",
        state.calendar.season_display_string(),
        state.calendar.phase,
        state.calendar.formatted_date()
    );
    println!("   {:<28} {:>3} {:>3} {:>3} {:>3} {:>4}", "Team", "GP", "W", "L", "OTL", "PTS");
    for row in state.league.standings_for_phase(state.calendar.phase) {
        println!(
            "   {:<28} {:>3} {:>3} {:>3} {:>3} {:>4}",
            row.team_name,
            row.record.games_played(),
            row.record.wins,
            row.record.losses,
            row.record.overtime_losses,
            row.points
        );
    }
}

fn write_json(path: &Path, json: &str) -> Result<()> {
    fs::write(path, json).with_context(|| format!("failed to write '{}'", path.display()))?;
    println!("\n📄 Saved to: {}", path.display());
    Ok(())
}
