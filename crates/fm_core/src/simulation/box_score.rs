//! Per-player box score generation
//!
//! Goals are handed out one at a time so the credited total always equals
//! the team's final score. Each goal gets at most a primary and a secondary
//! assist, which keeps assists within twice the score.

use crate::config::OutcomeConfig;
use crate::lineup::{defense_pair_weight, forward_line_weight};
use crate::models::{
    GameDecision, GoalieDecision, PlayerGameStats, PlayerId, Position, SkaterAttributes, Team,
    TeamLineup,
};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

const CENTER_ASSIST_BONUS: f64 = 1.3;
const PENALTY_MINUTES: [u32; 6] = [2, 2, 2, 4, 5, 10];
const GAME_SECONDS: f64 = 3600.0;

/// Box score of one game, keyed by player id per side.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GameBoxScore {
    pub home: BTreeMap<PlayerId, PlayerGameStats>,
    pub away: BTreeMap<PlayerId, PlayerGameStats>,
}

impl GameBoxScore {
    pub fn home_goals(&self) -> u32 {
        self.home.values().map(|s| s.goals).sum()
    }

    pub fn away_goals(&self) -> u32 {
        self.away.values().map(|s| s.goals).sum()
    }

    pub fn home_assists(&self) -> u32 {
        self.home.values().map(|s| s.assists).sum()
    }

    pub fn away_assists(&self) -> u32 {
        self.away.values().map(|s| s.assists).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&PlayerId, &PlayerGameStats)> {
        self.home.iter().chain(self.away.iter())
    }

    pub fn player(&self, id: PlayerId) -> Option<&PlayerGameStats> {
        self.home.get(&id).or_else(|| self.away.get(&id))
    }
}

/// Skater as deployed: slot order, deployment weight and attributes.
struct Deployed {
    id: PlayerId,
    position: Position,
    weight: f64,
    attributes: SkaterAttributes,
}

impl Deployed {
    fn is_defense(&self) -> bool {
        self.position.is_defense()
    }
}

fn deployed_skaters(team: &Team, lineup: &TeamLineup) -> Vec<Deployed> {
    let forwards = lineup.forward_lines.iter().enumerate().flat_map(|(idx, line)| {
        let weight = forward_line_weight(idx);
        line.iter().map(move |id| (*id, weight))
    });
    let defense = lineup.defense_pairs.iter().enumerate().flat_map(|(idx, pair)| {
        let weight = defense_pair_weight(idx);
        pair.iter().map(move |id| (*id, weight))
    });

    forwards
        .chain(defense)
        .filter_map(|(id, weight)| {
            let player = team.player(id)?;
            Some(Deployed {
                id,
                position: player.position,
                weight,
                attributes: player.skater_attributes().cloned().unwrap_or_default(),
            })
        })
        .collect()
}

/// Index drawn proportionally to `weights`; uniform when every weight is
/// zero or the total is unusable. `None` only for an empty slice.
fn weighted_pick(weights: &[f64], rng: &mut impl Rng) -> Option<usize> {
    if weights.is_empty() {
        return None;
    }
    let total: f64 = weights.iter().filter(|w| w.is_finite() && **w > 0.0).sum();
    if total <= 0.0 || !total.is_finite() {
        return Some(rng.gen_range(0..weights.len()));
    }
    let mut target = rng.gen_range(0.0..total);
    for (idx, w) in weights.iter().enumerate() {
        if !w.is_finite() || *w <= 0.0 {
            continue;
        }
        if target < *w {
            return Some(idx);
        }
        target -= w;
    }
    weights.iter().rposition(|w| w.is_finite() && *w > 0.0)
}

fn scale(base: f64, rng: &mut impl Rng, low: f64, high: f64) -> u32 {
    let value = base * rng.gen_range(low..high);
    if value.is_finite() && value > 0.0 {
        value as u32
    } else {
        0
    }
}

/// Box score lines for one side of a game.
pub fn team_box_score(
    team: &Team,
    lineup: &TeamLineup,
    goals_for: u32,
    goals_against: u32,
    decision: GameDecision,
    config: &OutcomeConfig,
    rng: &mut impl Rng,
) -> BTreeMap<PlayerId, PlayerGameStats> {
    let skaters = deployed_skaters(team, lineup);
    let differential = goals_for as i32 - goals_against as i32;
    let mut lines: Vec<PlayerGameStats> = Vec::with_capacity(skaters.len());

    for skater in &skaters {
        let attrs = &skater.attributes;
        let mut stats = PlayerGameStats {
            time_on_ice: scale(GAME_SECONDS * skater.weight, rng, 0.8, 1.2),
            ..Default::default()
        };

        let shots = scale(skater.weight * config.shot_volume * attrs.shooting_skill(), rng, 0.5, 1.5);
        let hitting = (attrs.body_checking as f64 + attrs.strength as f64) / 200.0;
        let blocking = (attrs.shot_blocking as f64 + attrs.positioning as f64) / 200.0;
        let hits = scale(skater.weight * config.hit_volume * hitting, rng, 0.5, 2.0);
        let blocks = scale(skater.weight * config.block_volume * blocking, rng, 0.3, 1.8);
        if skater.is_defense() {
            stats.shots = shots / 2;
            stats.blocks = blocks * 2;
        } else {
            stats.shots = shots;
            stats.blocks = blocks;
        }
        stats.hits = hits;

        let penalty_chance = (100.0 - attrs.discipline as f64) / 100.0 * config.penalty_base_rate;
        if rng.gen_range(0.0..1.0) < penalty_chance {
            stats.penalty_minutes = PENALTY_MINUTES[rng.gen_range(0..PENALTY_MINUTES.len())];
        }

        stats.plus_minus = differential + rng.gen_range(-1..=1);

        if skater.position == Position::Center {
            stats.faceoff_attempts = rng.gen_range(5..=25);
            let win_rate = (attrs.positioning as f64 / 100.0).min(1.0);
            stats.faceoff_wins = (stats.faceoff_attempts as f64 * win_rate) as u32;
        }
        lines.push(stats);
    }

    credit_goals(&skaters, &mut lines, goals_for, config, rng);

    let mut box_score: BTreeMap<PlayerId, PlayerGameStats> =
        skaters.iter().map(|s| s.id).zip(lines).collect();

    if let Some(goalie_id) = lineup.starting_goalie {
        if team.player(goalie_id).is_some() {
            box_score.insert(
                goalie_id,
                goalie_line(goals_for, goals_against, decision, config, rng),
            );
        }
    }
    box_score
}

fn credit_goals(
    skaters: &[Deployed],
    lines: &mut [PlayerGameStats],
    goals_for: u32,
    config: &OutcomeConfig,
    rng: &mut impl Rng,
) {
    let goal_weights: Vec<f64> = skaters
        .iter()
        .map(|s| {
            let factor = if s.is_defense() { config.defense_goal_factor } else { 1.0 };
            s.attributes.shooting_skill() * s.weight * factor
        })
        .collect();
    let assist_weights: Vec<f64> = skaters
        .iter()
        .map(|s| {
            let bonus = if s.position == Position::Center { CENTER_ASSIST_BONUS } else { 1.0 };
            s.attributes.passing_skill() * s.weight * bonus
        })
        .collect();

    for _ in 0..goals_for {
        let Some(scorer) = weighted_pick(&goal_weights, rng) else {
            return;
        };
        lines[scorer].goals += 1;
        lines[scorer].shots = lines[scorer].shots.max(lines[scorer].goals);

        let mut excluded = vec![scorer];
        for rate in [config.primary_assist_rate, config.secondary_assist_rate] {
            if rng.gen_range(0.0..1.0) >= rate {
                break;
            }
            let weights: Vec<f64> = assist_weights
                .iter()
                .enumerate()
                .map(|(idx, w)| if excluded.contains(&idx) { 0.0 } else { *w })
                .collect();
            if weights.iter().all(|w| *w <= 0.0) {
                break;
            }
            let Some(helper) = weighted_pick(&weights, rng) else {
                break;
            };
            lines[helper].assists += 1;
            excluded.push(helper);
        }
    }
}

fn goalie_line(
    goals_for: u32,
    goals_against: u32,
    decision: GameDecision,
    config: &OutcomeConfig,
    rng: &mut impl Rng,
) -> PlayerGameStats {
    let (low, high) = config.shots_against_range;
    let shots_against = if low <= high { rng.gen_range(low..=high) } else { low };
    let shots_against = shots_against.max(goals_against);

    let goalie_decision = if goals_for > goals_against {
        GoalieDecision::Win
    } else if decision != GameDecision::Regulation {
        GoalieDecision::OvertimeLoss
    } else {
        GoalieDecision::Loss
    };

    PlayerGameStats {
        time_on_ice: GAME_SECONDS as u32,
        goals_against,
        shots_against,
        saves: shots_against - goals_against,
        decision: Some(goalie_decision),
        shutout: goals_against == 0,
        ..Default::default()
    }
}
