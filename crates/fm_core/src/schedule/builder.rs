use super::dates::candidate_dates;
use crate::config::ScheduleConfig;
use crate::error::{Result, SimulationError};
use crate::models::{Game, League, TeamId};
use chrono::NaiveDate;
use log::{debug, info, warn};
use rand::seq::SliceRandom;
use rand::Rng;
use std::cmp::Reverse;
use std::collections::HashMap;

/// Full rebuilds tried before a residual shortfall is reported.
const MAX_SCHEDULE_ATTEMPTS: usize = 16;

/// Home/away pairing by team index
#[derive(Debug, Clone, Copy)]
struct Matchup {
    home: usize,
    away: usize,
}

/// Placement bookkeeping shared by the greedy and backfill passes.
struct Slate {
    dates: Vec<NaiveDate>,
    target: usize,
    per_date_cap: usize,
    games_on_date: Vec<usize>,
    /// `plays[team][date_idx]`
    plays: Vec<Vec<bool>>,
    game_count: Vec<usize>,
    last_played: Vec<Option<NaiveDate>>,
    placed: Vec<(usize, Matchup)>,
}

impl Slate {
    fn new(dates: Vec<NaiveDate>, teams: usize, target: usize) -> Self {
        let n_dates = dates.len();
        Self {
            dates,
            target,
            per_date_cap: teams / 2,
            games_on_date: vec![0; n_dates],
            plays: vec![vec![false; n_dates]; teams],
            game_count: vec![0; teams],
            last_played: vec![None; teams],
            placed: Vec::new(),
        }
    }

    fn date_has_room(&self, date_idx: usize) -> bool {
        self.games_on_date[date_idx] < self.per_date_cap
    }

    fn both_free(&self, a: usize, b: usize, date_idx: usize) -> bool {
        !self.plays[a][date_idx] && !self.plays[b][date_idx]
    }

    fn rested(&self, team: usize, date: NaiveDate, min_gap: i64) -> bool {
        self.last_played[team].map_or(true, |last| (date - last).num_days() >= min_gap)
    }

    fn place(&mut self, date_idx: usize, matchup: Matchup) {
        let date = self.dates[date_idx];
        for team in [matchup.home, matchup.away] {
            self.plays[team][date_idx] = true;
            self.game_count[team] += 1;
            self.last_played[team] = Some(self.last_played[team].map_or(date, |d| d.max(date)));
        }
        self.games_on_date[date_idx] += 1;
        self.placed.push((date_idx, matchup));
    }

    /// Move one placed game to another date with room so that `a` and `b`
    /// are both free on the date it left. Returns that date.
    fn relocate_for(&mut self, a: usize, b: usize) -> Option<usize> {
        for i in 0..self.placed.len() {
            let (from, m) = self.placed[i];
            let blocks = |team: usize| {
                self.plays[team][from] && team != m.home && team != m.away
            };
            if blocks(a) || blocks(b) {
                continue;
            }
            let to = (0..self.dates.len()).find(|&d| {
                d != from && self.date_has_room(d) && self.both_free(m.home, m.away, d)
            });
            if let Some(to) = to {
                for team in [m.home, m.away] {
                    self.plays[team][from] = false;
                    self.plays[team][to] = true;
                }
                self.games_on_date[from] -= 1;
                self.games_on_date[to] += 1;
                self.placed[i].0 = to;
                return Some(from);
            }
        }
        None
    }

    fn short_teams(&self) -> Vec<usize> {
        (0..self.game_count.len())
            .filter(|&t| self.game_count[t] < self.target)
            .collect()
    }

    fn deficit(&self, team: usize) -> usize {
        self.target.saturating_sub(self.game_count[team])
    }
}

/// Build a full regular-season schedule for `league` in season `year`.
///
/// Every team plays exactly `games_per_team` games, never more than one a
/// day, and no date carries more than `teams / 2` games. A plan that still
/// leaves teams short is rebuilt with the advancing `rng`. Returns
/// `ScheduleConflict` when the calendar cannot hold that many games or no
/// attempt closes every team's shortfall.
pub fn build_season_schedule(
    league: &League,
    year: i32,
    config: &ScheduleConfig,
    rng: &mut impl Rng,
) -> Result<Vec<Game>> {
    let team_ids: Vec<TeamId> = league.team_ids();
    let n = team_ids.len();
    if n < 2 {
        return Err(SimulationError::ScheduleConflict(format!(
            "need at least two teams to build a schedule, found {n}"
        )));
    }

    let target = config.games_per_team as usize;
    let dates = candidate_dates(year, config)?;
    let capacity = dates.len() * (n / 2);
    let required = n * target / 2;
    if (n * target) % 2 != 0 || required > capacity || target > dates.len() {
        return Err(SimulationError::ScheduleConflict(format!(
            "{n} teams x {target} games do not fit in {} game dates (capacity {capacity} games)",
            dates.len()
        )));
    }

    let mut short = Vec::new();
    for attempt in 1..=MAX_SCHEDULE_ATTEMPTS {
        let slate = plan_slate(n, target, dates.clone(), config, rng);
        short = slate.short_teams();
        if short.is_empty() {
            let mut games: Vec<Game> = slate
                .placed
                .iter()
                .map(|(date_idx, m)| {
                    Game::new(team_ids[m.home], team_ids[m.away], slate.dates[*date_idx])
                })
                .collect();
            games.sort_by_key(|g| g.date);
            info!(
                "built {} schedule: {} games for {} teams (attempt {})",
                year,
                games.len(),
                n,
                attempt
            );
            return Ok(games);
        }
        debug!(
            "schedule {} attempt {} left {} teams short, rebuilding",
            year,
            attempt,
            short.len()
        );
    }

    let names: Vec<String> = short
        .iter()
        .map(|&t| {
            league
                .team(team_ids[t])
                .map_or_else(|| team_ids[t].to_string(), |team| team.full_name())
        })
        .collect();
    warn!(
        "schedule {} left teams short after {} attempts: {}",
        year,
        MAX_SCHEDULE_ATTEMPTS,
        names.join(", ")
    );
    Err(SimulationError::ScheduleConflict(format!(
        "could not reach {target} games for {} after {MAX_SCHEDULE_ATTEMPTS} attempts",
        names.join(", ")
    )))
}

/// One shuffled greedy pass followed by the backfill.
fn plan_slate(
    n: usize,
    target: usize,
    dates: Vec<NaiveDate>,
    config: &ScheduleConfig,
    rng: &mut impl Rng,
) -> Slate {
    let mut matchups = generate_matchups(n, target);
    matchups.shuffle(rng);

    let mut slate = Slate::new(dates, n, target);
    greedy_pass(&mut slate, matchups, config.min_days_between_games);
    let greedy_games = slate.placed.len();
    backfill_pass(&mut slate, rng);
    debug!(
        "greedy placed {} games, backfill {}",
        greedy_games,
        slate.placed.len() - greedy_games
    );
    slate
}

/// `target / (n - 1)` meetings per pair, home ice alternating.
fn generate_matchups(n: usize, target: usize) -> Vec<Matchup> {
    let per_pair = target / (n - 1);
    let mut matchups = Vec::with_capacity(n * (n - 1) / 2 * per_pair);
    for a in 0..n {
        for b in (a + 1)..n {
            for k in 0..per_pair {
                let (home, away) = if k % 2 == 0 { (a, b) } else { (b, a) };
                matchups.push(Matchup { home, away });
            }
        }
    }
    matchups
}

/// Walk the dates in order and place pending matchups while both teams are
/// free, under target and rested. Unplaced matchups carry over.
fn greedy_pass(slate: &mut Slate, mut pending: Vec<Matchup>, min_gap: i64) {
    for date_idx in 0..slate.dates.len() {
        if pending.is_empty() {
            break;
        }
        let date = slate.dates[date_idx];
        let mut still_pending = Vec::with_capacity(pending.len());
        for m in pending {
            let fits = slate.date_has_room(date_idx)
                && slate.both_free(m.home, m.away, date_idx)
                && slate.game_count[m.home] < slate.target
                && slate.game_count[m.away] < slate.target
                && slate.rested(m.home, date, min_gap)
                && slate.rested(m.away, date, min_gap);
            if fits {
                slate.place(date_idx, m);
            } else {
                still_pending.push(m);
            }
        }
        pending = still_pending;
    }
}

/// Pair short teams, most short first, on the earliest date where both are
/// free and the date has room. When no such date exists one placed game is
/// moved aside to open one. Rest days are ignored here. Stops when fewer
/// than two teams are short or no short pair can be placed.
fn backfill_pass(slate: &mut Slate, rng: &mut impl Rng) {
    loop {
        let mut short = slate.short_teams();
        if short.len() < 2 {
            return;
        }
        short.shuffle(rng);
        short.sort_by_key(|&t| Reverse(slate.deficit(t)));

        let slot = match find_backfill_slot(slate, &short) {
            Some(slot) => Some(slot),
            None => open_backfill_slot(slate, &short),
        };
        let Some((date_idx, a, b)) = slot else {
            return;
        };
        let matchup = if slate.game_count[a] % 2 == 0 {
            Matchup { home: a, away: b }
        } else {
            Matchup { home: b, away: a }
        };
        slate.place(date_idx, matchup);
    }
}

fn find_backfill_slot(slate: &Slate, short: &[usize]) -> Option<(usize, usize, usize)> {
    for (i, &a) in short.iter().enumerate() {
        for &b in &short[i + 1..] {
            let slot = (0..slate.dates.len())
                .find(|&d| slate.date_has_room(d) && slate.both_free(a, b, d));
            if let Some(date_idx) = slot {
                return Some((date_idx, a, b));
            }
        }
    }
    None
}

fn open_backfill_slot(slate: &mut Slate, short: &[usize]) -> Option<(usize, usize, usize)> {
    for (i, &a) in short.iter().enumerate() {
        for &b in &short[i + 1..] {
            if let Some(date_idx) = slate.relocate_for(a, b) {
                return Some((date_idx, a, b));
            }
        }
    }
    None
}

/// Games per team in a schedule.
pub fn team_game_counts(games: &[Game]) -> HashMap<TeamId, usize> {
    let mut counts = HashMap::new();
    for game in games {
        *counts.entry(game.home_team_id).or_insert(0) += 1;
        *counts.entry(game.away_team_id).or_insert(0) += 1;
    }
    counts
}
