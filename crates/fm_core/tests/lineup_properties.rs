use fm_core::config::LineupConfig;
use fm_core::lineup::assemble_lineup;
use fm_core::models::{
    GoalieAttributes, InjuryStatus, Player, Position, SkaterAttributes, Team, DEFENSE_PAIRS,
    FORWARD_LINES, LINE_SIZE, PAIR_SIZE,
};
use fm_core::SimulationError;
use proptest::prelude::*;
use std::collections::HashSet;

fn roster_strategy() -> impl Strategy<Value = Vec<(Position, u8, bool)>> {
    let position = prop_oneof![
        Just(Position::Center),
        Just(Position::LeftWing),
        Just(Position::RightWing),
        Just(Position::LeftDefense),
        Just(Position::RightDefense),
        Just(Position::Goalie),
    ];
    proptest::collection::vec((position, 30u8..99, proptest::bool::weighted(0.1)), 10..32)
}

fn team_from(entries: &[(Position, u8, bool)]) -> Team {
    let mut team = Team::new("Props", "Proptown", "PRP");
    for (i, (position, rating, injured)) in entries.iter().enumerate() {
        let mut player = if position.is_goalie() {
            Player::goalie("P", format!("{i}"), i as u8, GoalieAttributes::uniform(*rating))
        } else {
            Player::skater("P", format!("{i}"), i as u8, *position, SkaterAttributes::uniform(*rating))
        };
        if *injured {
            player.injury = InjuryStatus::Injured {
                days_remaining: 4,
                description: "Day-to-day".to_string(),
            };
        }
        team.add_player(player);
    }
    team
}

proptest! {
    #[test]
    fn prop_assembled_lineups_are_complete_and_unique(entries in roster_strategy()) {
        let team = team_from(&entries);
        match assemble_lineup(&team, &LineupConfig::default()) {
            Ok(lineup) => {
                prop_assert_eq!(lineup.forward_lines.len(), FORWARD_LINES);
                prop_assert!(lineup.forward_lines.iter().all(|l| l.len() == LINE_SIZE));
                prop_assert_eq!(lineup.defense_pairs.len(), DEFENSE_PAIRS);
                prop_assert!(lineup.defense_pairs.iter().all(|p| p.len() == PAIR_SIZE));
                prop_assert!(lineup.starting_goalie.is_some());
                prop_assert!(lineup.backup_goalie.is_some());

                let mut seen = HashSet::new();
                for id in lineup.forwards().chain(lineup.defensemen()) {
                    prop_assert!(seen.insert(*id));
                    let player = team.player(*id).unwrap();
                    prop_assert!(player.is_available());
                    prop_assert!(!player.position.is_goalie());
                }
                prop_assert!(lineup.starting_goalie != lineup.backup_goalie);
            }
            Err(SimulationError::InvalidTeamConfiguration { .. })
            | Err(SimulationError::MalformedLineupData { .. }) => {}
            Err(other) => prop_assert!(false, "unexpected error {other}"),
        }
    }
}
