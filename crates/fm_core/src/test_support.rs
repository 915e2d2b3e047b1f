//! Roster and league builders shared by unit tests.

use crate::models::{GoalieAttributes, League, Player, Position, SkaterAttributes, Team};

#[derive(Debug, Clone, Copy)]
pub struct RosterShape {
    pub centers: usize,
    pub left_wings: usize,
    pub right_wings: usize,
    pub left_defense: usize,
    pub right_defense: usize,
    pub goalies: usize,
}

impl Default for RosterShape {
    fn default() -> Self {
        Self {
            centers: 5,
            left_wings: 4,
            right_wings: 4,
            left_defense: 4,
            right_defense: 3,
            goalies: 2,
        }
    }
}

/// Team whose players all carry uniform `rating` attributes.
pub fn build_team(city: &str, rating: u8, shape: RosterShape) -> Team {
    let abbreviation: String = city.chars().take(3).collect::<String>().to_uppercase();
    let mut team = Team::new("Club", city, abbreviation);
    let mut jersey = 1u8;
    let groups = [
        (Position::Center, shape.centers),
        (Position::LeftWing, shape.left_wings),
        (Position::RightWing, shape.right_wings),
        (Position::LeftDefense, shape.left_defense),
        (Position::RightDefense, shape.right_defense),
    ];
    for (position, count) in groups {
        for i in 0..count {
            team.add_player(Player::skater(
                city,
                format!("{}{}", position.code(), i + 1),
                jersey,
                position,
                SkaterAttributes::uniform(rating),
            ));
            jersey += 1;
        }
    }
    for i in 0..shape.goalies {
        team.add_player(Player::goalie(
            city,
            format!("G{}", i + 1),
            jersey,
            GoalieAttributes::uniform(rating),
        ));
        jersey += 1;
    }
    team
}

pub const CITIES: [&str; 12] = [
    "Albany", "Boston", "Calgary", "Denver", "Edmonton", "Fresno", "Halifax", "Irvine",
    "Juneau", "Kelowna", "Laval", "Moncton",
];

/// `n` teams (at most 12) with ratings spread from 50 upward.
pub fn build_league(n: usize) -> League {
    let teams = CITIES
        .iter()
        .take(n)
        .enumerate()
        .map(|(i, city)| build_team(city, 50 + (i as u8) * 3, RosterShape::default()))
        .collect();
    League::new("Test League", teams)
}
