use crate::config::{LineupConfig, LineupPolicy};
use crate::error::{Result, SimulationError};
use crate::models::{
    Player, PlayerId, Position, Team, TeamLineup, DEFENSE_PAIRS, FORWARD_LINES, LINE_SIZE,
    PAIR_SIZE,
};
use log::debug;
use std::collections::HashSet;

/// Healthy players of one team grouped by position, best first.
struct DepthChart<'a> {
    centers: Vec<&'a Player>,
    left_wings: Vec<&'a Player>,
    right_wings: Vec<&'a Player>,
    left_defense: Vec<&'a Player>,
    right_defense: Vec<&'a Player>,
    goalies: Vec<&'a Player>,
}

impl<'a> DepthChart<'a> {
    fn from_team(team: &'a Team) -> Self {
        let by_position = |position: Position| -> Vec<&'a Player> {
            let mut group: Vec<&Player> = team
                .roster
                .iter()
                .filter(|p| p.position == position && p.is_available())
                .collect();
            // stable: roster order breaks ties
            group.sort_by(|a, b| b.overall().cmp(&a.overall()));
            group
        };
        Self {
            centers: by_position(Position::Center),
            left_wings: by_position(Position::LeftWing),
            right_wings: by_position(Position::RightWing),
            left_defense: by_position(Position::LeftDefense),
            right_defense: by_position(Position::RightDefense),
            goalies: by_position(Position::Goalie),
        }
    }

    fn forward_count(&self) -> usize {
        self.centers.len() + self.left_wings.len() + self.right_wings.len()
    }

    fn defense_count(&self) -> usize {
        self.left_defense.len() + self.right_defense.len()
    }

    fn forwards_by_overall(&self) -> Vec<&'a Player> {
        merged_by_overall(&[&self.centers, &self.left_wings, &self.right_wings])
    }

    fn defense_by_overall(&self) -> Vec<&'a Player> {
        merged_by_overall(&[&self.left_defense, &self.right_defense])
    }

    fn check_requirements(&self, team: &Team, config: &LineupConfig) -> Result<()> {
        let missing = |unit: &str| SimulationError::InvalidTeamConfiguration {
            team: team.full_name(),
            missing: unit.to_string(),
        };

        let each_forward_position = self.centers.len() >= FORWARD_LINES
            && self.left_wings.len() >= FORWARD_LINES
            && self.right_wings.len() >= FORWARD_LINES;
        if self.forward_count() < FORWARD_LINES * LINE_SIZE && !each_forward_position {
            return Err(missing("forwards"));
        }

        let one_side = self.left_defense.len() >= DEFENSE_PAIRS
            || self.right_defense.len() >= DEFENSE_PAIRS;
        if self.defense_count() < DEFENSE_PAIRS * PAIR_SIZE && !one_side {
            return Err(missing("defensemen"));
        }

        let goalies_needed = if config.allow_single_goalie { 1 } else { 2 };
        if self.goalies.len() < goalies_needed {
            return Err(missing("goalies"));
        }
        Ok(())
    }
}

fn merged_by_overall<'a>(groups: &[&Vec<&'a Player>]) -> Vec<&'a Player> {
    let mut merged: Vec<&Player> = groups.iter().flat_map(|g| g.iter().copied()).collect();
    merged.sort_by(|a, b| b.overall().cmp(&a.overall()));
    merged
}

/// Build a deployment plan from a team's healthy players.
///
/// Line `i` is seeded with the `i`-th best center when there is one, then
/// the remaining slots are filled line by line from the overall-sorted
/// forward pool. Defense pairs take the overall-sorted defense pool in
/// order. A player is never placed twice. Lines that cannot be filled
/// surface as `MalformedLineupData` from the completeness check at the end.
pub fn assemble_lineup(team: &Team, config: &LineupConfig) -> Result<TeamLineup> {
    let chart = DepthChart::from_team(team);
    chart.check_requirements(team, config)?;

    let mut lineup = TeamLineup::new(team.id);
    let mut placed: HashSet<PlayerId> = HashSet::new();

    for (line, center) in lineup.forward_lines.iter_mut().zip(&chart.centers) {
        placed.insert(center.id);
        line.push(center.id);
    }
    let forwards = chart.forwards_by_overall();
    for line in lineup.forward_lines.iter_mut() {
        fill_unit(line, LINE_SIZE, &forwards, &mut placed);
    }

    let defense = chart.defense_by_overall();
    for pair in lineup.defense_pairs.iter_mut() {
        fill_unit(pair, PAIR_SIZE, &defense, &mut placed);
    }

    lineup.starting_goalie = chart.goalies.first().map(|g| g.id);
    lineup.backup_goalie = chart.goalies.get(1).or(chart.goalies.first()).map(|g| g.id);

    lineup.validate(&team.full_name())?;
    debug!(
        "assembled lineup for {} ({} forwards, {} defense, {} goalies available)",
        team.full_name(),
        chart.forward_count(),
        chart.defense_count(),
        chart.goalies.len()
    );
    Ok(lineup)
}

fn fill_unit(
    unit: &mut Vec<PlayerId>,
    size: usize,
    pool: &[&Player],
    placed: &mut HashSet<PlayerId>,
) {
    for player in pool {
        if unit.len() >= size {
            break;
        }
        if placed.insert(player.id) {
            unit.push(player.id);
        }
    }
}

/// Lineup to play today under `config.policy`: the stored one when it is
/// still usable and the policy allows keeping it, otherwise a fresh one.
pub fn lineup_for_today(team: &Team, config: &LineupConfig) -> Result<TeamLineup> {
    if config.policy == LineupPolicy::KeepValid && team.has_usable_lineup() {
        if let Some(lineup) = &team.lineup {
            return Ok(lineup.clone());
        }
    }
    assemble_lineup(team, config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::InjuryStatus;
    use crate::test_support::{build_team, RosterShape};

    #[test]
    fn test_full_roster_produces_valid_lineup() {
        let team = build_team("Hamilton", 60, RosterShape::default());
        let lineup = assemble_lineup(&team, &LineupConfig::default()).unwrap();
        assert!(lineup.is_valid());
        assert_eq!(lineup.team_id, team.id);
        assert_eq!(lineup.all_player_ids().len(), 20);
    }

    #[test]
    fn test_each_line_is_led_by_a_center() {
        let team = build_team("Hamilton", 60, RosterShape::default());
        let lineup = assemble_lineup(&team, &LineupConfig::default()).unwrap();
        for line in &lineup.forward_lines {
            let first = team.player(line[0]).unwrap();
            assert_eq!(first.position, Position::Center);
        }
    }

    #[test]
    fn test_best_goalie_starts() {
        let mut team = build_team("Hamilton", 60, RosterShape::default());
        let backup_id = team.players_at(Position::Goalie).next().unwrap().id;
        let starter_id = team.players_at(Position::Goalie).nth(1).unwrap().id;
        if let Some(crate::models::PlayerRatings::Goalie(attrs)) =
            team.player_mut(starter_id).map(|p| &mut p.ratings)
        {
            *attrs = crate::models::GoalieAttributes::uniform(90);
        }
        let lineup = assemble_lineup(&team, &LineupConfig::default()).unwrap();
        assert_eq!(lineup.starting_goalie, Some(starter_id));
        assert_eq!(lineup.backup_goalie, Some(backup_id));
    }

    #[test]
    fn test_injured_players_are_not_used() {
        let mut team = build_team("Hamilton", 60, RosterShape::default());
        let hurt = team.roster[0].id;
        team.roster[0].injury = InjuryStatus::Injured {
            days_remaining: 5,
            description: "Upper body".to_string(),
        };
        let lineup = assemble_lineup(&team, &LineupConfig::default()).unwrap();
        assert!(!lineup.contains(hurt));
    }

    #[test]
    fn test_missing_goalie_names_team_and_unit() {
        let shape = RosterShape { goalies: 1, ..RosterShape::default() };
        let team = build_team("Hamilton", 60, shape);
        let err = assemble_lineup(&team, &LineupConfig::default()).unwrap_err();
        match &err {
            SimulationError::InvalidTeamConfiguration { team: name, missing } => {
                assert_eq!(name, &team.full_name());
                assert_eq!(missing, "goalies");
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(err.is_recoverable());
    }

    #[test]
    fn test_single_goalie_allowed_by_config() {
        let shape = RosterShape { goalies: 1, ..RosterShape::default() };
        let team = build_team("Hamilton", 60, shape);
        let config = LineupConfig { allow_single_goalie: true, ..LineupConfig::default() };
        let lineup = assemble_lineup(&team, &config).unwrap();
        assert_eq!(lineup.starting_goalie, lineup.backup_goalie);
        assert!(lineup.is_valid());
    }

    #[test]
    fn test_too_few_forwards_is_rejected() {
        let shape = RosterShape { centers: 3, left_wings: 4, right_wings: 4, ..RosterShape::default() };
        let team = build_team("Hamilton", 60, shape);
        assert!(matches!(
            assemble_lineup(&team, &LineupConfig::default()),
            Err(SimulationError::InvalidTeamConfiguration { ref missing, .. }) if missing == "forwards"
        ));
    }

    #[test]
    fn test_one_sided_defense_reports_malformed_lineup() {
        // passes the entry check with three left defensemen but cannot fill three pairs
        let shape = RosterShape { left_defense: 3, right_defense: 1, ..RosterShape::default() };
        let team = build_team("Hamilton", 60, shape);
        assert!(matches!(
            assemble_lineup(&team, &LineupConfig::default()),
            Err(SimulationError::MalformedLineupData { .. })
        ));
    }

    #[test]
    fn test_keep_valid_reuses_stored_lineup() {
        let mut team = build_team("Hamilton", 60, RosterShape::default());
        let mut stored = assemble_lineup(&team, &LineupConfig::default()).unwrap();
        stored.forward_lines.swap(0, 3);
        team.lineup = Some(stored.clone());

        let kept = lineup_for_today(&team, &LineupConfig::default()).unwrap();
        assert_eq!(kept, stored);

        let rebuild = LineupConfig { policy: LineupPolicy::AlwaysRebuild, ..LineupConfig::default() };
        let fresh = lineup_for_today(&team, &rebuild).unwrap();
        assert_ne!(fresh, stored);
    }

    #[test]
    fn test_stored_lineup_with_injured_player_is_rebuilt() {
        let mut team = build_team("Hamilton", 60, RosterShape::default());
        let stored = assemble_lineup(&team, &LineupConfig::default()).unwrap();
        let hurt = stored.forward_lines[0][0];
        team.lineup = Some(stored);
        if let Some(p) = team.player_mut(hurt) {
            p.injury = InjuryStatus::Injured { days_remaining: 3, description: "Knee".to_string() };
        }
        let lineup = lineup_for_today(&team, &LineupConfig::default()).unwrap();
        assert!(!lineup.contains(hurt));
    }
}
