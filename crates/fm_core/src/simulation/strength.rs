//! Team strength and expected goals

use crate::config::OutcomeConfig;
use crate::models::{Team, TeamLineup};

/// Mean offensive rating of the lineup's forwards. Falls back to
/// `default_strength` when no forward carries skater attributes.
pub fn offensive_strength(team: &Team, lineup: &TeamLineup, config: &OutcomeConfig) -> f64 {
    let ratings: Vec<f64> = lineup
        .forwards()
        .filter_map(|id| team.player(*id))
        .filter_map(|p| p.skater_attributes())
        .map(|attrs| attrs.offensive_rating())
        .collect();
    mean_or(&ratings, config.default_strength)
}

/// Mean defensive rating of the lineup's defensemen with the starting
/// goalie's overall folded into the same average.
pub fn defensive_strength(team: &Team, lineup: &TeamLineup, config: &OutcomeConfig) -> f64 {
    let mut ratings: Vec<f64> = lineup
        .defensemen()
        .filter_map(|id| team.player(*id))
        .filter_map(|p| p.skater_attributes())
        .map(|attrs| attrs.defensive_rating())
        .collect();

    let goalie = lineup
        .starting_goalie
        .and_then(|id| team.player(id))
        .and_then(|p| p.goalie_attributes());
    if let Some(attrs) = goalie {
        ratings.push(attrs.overall() as f64);
    }
    mean_or(&ratings, config.default_strength)
}

/// `offense / (opposing_defense + offset) * scale`
pub fn expected_goals(offense: f64, opposing_defense: f64, config: &OutcomeConfig) -> f64 {
    offense / (opposing_defense + config.defense_offset) * config.expected_goals_scale
}

fn mean_or(values: &[f64], default: f64) -> f64 {
    if values.is_empty() {
        default
    } else {
        values.iter().sum::<f64>() / values.len() as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LineupConfig;
    use crate::lineup::assemble_lineup;
    use crate::test_support::{build_team, RosterShape};

    #[test]
    fn test_uniform_team_strengths() {
        let config = OutcomeConfig::default();
        let team = build_team("Albany", 70, RosterShape::default());
        let lineup = assemble_lineup(&team, &LineupConfig::default()).unwrap();

        assert!((offensive_strength(&team, &lineup, &config) - 70.0).abs() < 1e-9);
        assert!((defensive_strength(&team, &lineup, &config) - 70.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_lineup_uses_default_strength() {
        let config = OutcomeConfig::default();
        let team = build_team("Albany", 70, RosterShape::default());
        let lineup = TeamLineup::new(team.id);
        assert_eq!(offensive_strength(&team, &lineup, &config), 50.0);
        assert_eq!(defensive_strength(&team, &lineup, &config), 50.0);
    }

    #[test]
    fn test_balanced_teams_expect_three_halves_goals() {
        let config = OutcomeConfig::default();
        assert!((expected_goals(50.0, 50.0, &config) - 1.5).abs() < 1e-9);
        assert!(expected_goals(90.0, 30.0, &config) > expected_goals(30.0, 90.0, &config));
    }
}
