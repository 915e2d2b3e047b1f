use super::progress::{emit, ProgressSink};
use super::state::FranchiseState;
use crate::calendar::{EventPriority, EventType, SimulationEvent};
use crate::config::SimConfig;
use crate::error::Result;
use crate::lineup::lineup_for_today;
use crate::models::{
    GameDecision, GameId, League, PlayerGameStats, PlayerId, Season, Team, TeamId, TeamLineup,
};
use crate::schedule::build_season_schedule;
use crate::simulation::{simulate_game, SimulationGameResult};
use chrono::NaiveDate;
use log::{debug, info, warn};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkippedTeam {
    pub team_id: TeamId,
    pub team_name: String,
    pub reason: String,
}

/// What happened during one day advance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayReport {
    /// The day that was played, before the calendar moved on
    pub date: NaiveDate,
    pub results: Vec<SimulationGameResult>,
    /// Teams that could not dress a lineup today
    pub skipped_teams: Vec<SkippedTeam>,
    /// Today's games left incomplete because a side had no lineup
    pub skipped_games: Vec<GameId>,
    pub recovered_players: Vec<PlayerId>,
    pub events: Vec<SimulationEvent>,
    pub season_rolled_over: bool,
}

impl DayReport {
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            results: Vec::new(),
            skipped_teams: Vec::new(),
            skipped_games: Vec::new(),
            recovered_players: Vec::new(),
            events: Vec::new(),
            season_rolled_over: false,
        }
    }

    pub fn games_played(&self) -> usize {
        self.results.len()
    }
}

/// A game cleared for simulation today, with its own RNG seed.
struct Fixture {
    index: usize,
    home: TeamId,
    away: TeamId,
    seed: u64,
}

/// Advance the franchise by one day.
///
/// Lineups are settled for every team first, then today's games are
/// simulated and folded into records and player stats, injuries count down
/// and finally the calendar moves one day. Lineup failures skip the team
/// for today; anything else is returned as an error and `state` is left
/// untouched.
pub fn advance_one_day(
    state: &FranchiseState,
    config: &SimConfig,
    rng: &mut impl Rng,
    progress: &mut impl ProgressSink,
) -> Result<(FranchiseState, DayReport)> {
    config.validate()?;
    let mut next = state.clone();
    let today = next.calendar.current_date;
    let mut report = DayReport::new(today);

    // 1. lineups
    emit(progress, 0.0, "Setting lineups");
    let mut lineups: HashMap<TeamId, TeamLineup> = HashMap::new();
    for team in &mut next.league.teams {
        match lineup_for_today(team, &config.lineup) {
            Ok(lineup) => {
                team.lineup = Some(lineup.clone());
                lineups.insert(team.id, lineup);
            }
            Err(err) if err.is_recoverable() => {
                warn!("{} skipped on {}: {}", team.full_name(), today, err);
                team.lineup = None;
                report.skipped_teams.push(SkippedTeam {
                    team_id: team.id,
                    team_name: team.full_name(),
                    reason: err.to_string(),
                });
            }
            Err(err) => return Err(err),
        }
    }
    emit(progress, 0.1, "Lineups set");

    // 2. today's games
    let mut fixtures = Vec::new();
    for (index, game) in next.season.games.iter().enumerate() {
        if game.date != today || game.completed {
            continue;
        }
        if lineups.contains_key(&game.home_team_id) && lineups.contains_key(&game.away_team_id) {
            fixtures.push(Fixture {
                index,
                home: game.home_team_id,
                away: game.away_team_id,
                seed: rng.gen(),
            });
        } else {
            warn!("game {} on {} skipped: a team has no lineup", game.id, today);
            report.skipped_games.push(game.id);
        }
    }
    debug!("{}: {} games to simulate", today, fixtures.len());
    emit(progress, 0.2, format!("Found {} games", fixtures.len()));

    // 3. simulate
    let results = simulate_fixtures(&next.league, &lineups, &fixtures, today, config, progress);
    emit(progress, 0.8, "Updating statistics");

    // 4. fold
    for (fixture, result) in fixtures.iter().zip(results) {
        let game = &mut next.season.games[fixture.index];
        let Some(mut result) = result else {
            warn!("game {} on {} skipped: team missing from league", game.id, today);
            report.skipped_games.push(game.id);
            continue;
        };
        result.game_id = Some(game.id);
        if !game.complete(result.game_result()) {
            continue;
        }
        fold_result(&mut next.league, &result);
        report.results.push(result);
    }
    emit(progress, 0.9, "Processing injuries");

    // 5. injuries
    for team in &mut next.league.teams {
        for player in &mut team.roster {
            if player.injury.advance_day() {
                info!("{} recovered from injury", player.full_name());
                let event = SimulationEvent::new(
                    today,
                    EventType::InjuryRecovery,
                    EventPriority::Low,
                    format!("{} ({}) returns from injury", player.full_name(), team.abbreviation),
                );
                next.calendar.schedule_event(event.clone());
                report.events.push(event);
                report.recovered_players.push(player.id);
            }
        }
    }

    // 6. calendar
    report.events.extend(next.calendar.advance(1)?);
    if next.calendar.season > next.season.year {
        roll_over_season(&mut next, config, rng)?;
        report.season_rolled_over = true;
    }
    emit(progress, 1.0, "Day complete");
    Ok((next, report))
}

fn simulate_fixtures(
    league: &League,
    lineups: &HashMap<TeamId, TeamLineup>,
    fixtures: &[Fixture],
    date: NaiveDate,
    config: &SimConfig,
    progress: &mut impl ProgressSink,
) -> Vec<Option<SimulationGameResult>> {
    let play = |fixture: &Fixture| -> Option<SimulationGameResult> {
        let home = league.team(fixture.home)?;
        let away = league.team(fixture.away)?;
        let mut rng = ChaCha8Rng::seed_from_u64(fixture.seed);
        Some(simulate_game(
            home,
            away,
            lineups.get(&fixture.home)?,
            lineups.get(&fixture.away)?,
            date,
            &config.outcome,
            &mut rng,
        ))
    };

    let total = fixtures.len().max(1) as f64;
    if config.parallel_games {
        let results = fixtures.par_iter().map(play).collect();
        emit(progress, 0.8, format!("Simulated {} games", fixtures.len()));
        results
    } else {
        let mut results = Vec::with_capacity(fixtures.len());
        for (i, fixture) in fixtures.iter().enumerate() {
            results.push(play(fixture));
            emit(progress, 0.2 + (i + 1) as f64 / total * 0.6, "Simulating games");
        }
        results
    }
}

/// Fold one result into both teams' records and every listed player's
/// season and career totals.
fn fold_result(league: &mut League, result: &SimulationGameResult) {
    let beyond_regulation = result.decision != GameDecision::Regulation;
    let home_won = result.home_score > result.away_score;
    let sides = [
        (result.home_team_id, home_won, &result.box_score.home),
        (result.away_team_id, !home_won, &result.box_score.away),
    ];
    for (team_id, won, lines) in sides {
        let Some(team) = league.team_mut(team_id) else {
            warn!("result references unknown team {}", team_id);
            continue;
        };
        team.record.record_game(won, beyond_regulation);
        apply_lines(team, lines);
    }
}

fn apply_lines(team: &mut Team, lines: &BTreeMap<PlayerId, PlayerGameStats>) {
    for (player_id, line) in lines {
        if let Some(player) = team.player_mut(*player_id) {
            player.season_stats.add_game(line);
            player.career_stats.add_game(line);
        }
    }
}

/// Archive the finished season, clear records and season stats, and build
/// the next schedule.
fn roll_over_season(
    state: &mut FranchiseState,
    config: &SimConfig,
    rng: &mut impl Rng,
) -> Result<()> {
    let year = state.calendar.season;
    let standings = state.league.standings();
    state.archived_seasons.push(state.season.archive(standings));
    state.league.reset_for_new_season();

    let games = build_season_schedule(&state.league, year, &config.schedule, rng)?;
    info!(
        "season {} archived; {} schedule built with {} games",
        state.season.display_name(),
        year,
        games.len()
    );
    state.season = Season::new(year, games);
    Ok(())
}

/// Advance `days` days, collecting each day's report.
pub fn advance_days(
    state: &FranchiseState,
    days: u32,
    config: &SimConfig,
    rng: &mut impl Rng,
    progress: &mut impl ProgressSink,
) -> Result<(FranchiseState, Vec<DayReport>)> {
    let mut current = state.clone();
    let mut reports = Vec::with_capacity(days as usize);
    for _ in 0..days {
        let (next, report) = advance_one_day(&current, config, rng, progress)?;
        current = next;
        reports.push(report);
    }
    Ok((current, reports))
}
