#![allow(dead_code)]

use fm_core::models::{GoalieAttributes, League, Player, Position, SkaterAttributes, Team};

const CITIES: [&str; 12] = [
    "Albany", "Boston", "Calgary", "Denver", "Edmonton", "Fresno", "Halifax", "Irvine",
    "Juneau", "Kelowna", "Laval", "Moncton",
];

const SHAPE: [(Position, usize); 5] = [
    (Position::Center, 5),
    (Position::LeftWing, 4),
    (Position::RightWing, 4),
    (Position::LeftDefense, 4),
    (Position::RightDefense, 3),
];

/// 22-man roster; ratings step down from `top` through the depth chart.
pub fn build_team(city: &str, top: u8) -> Team {
    let abbreviation: String = city.chars().take(3).collect::<String>().to_uppercase();
    let mut team = Team::new("Club", city, abbreviation);
    let mut jersey = 1u8;
    for (position, count) in SHAPE {
        for depth in 0..count {
            let rating = top.saturating_sub(depth as u8 * 4).max(30);
            team.add_player(Player::skater(
                city,
                format!("{}{}", position.code(), depth + 1),
                jersey,
                position,
                SkaterAttributes::uniform(rating),
            ));
            jersey += 1;
        }
    }
    for depth in 0..2u8 {
        team.add_player(Player::goalie(
            city,
            format!("G{}", depth + 1),
            jersey,
            GoalieAttributes::uniform(top.saturating_sub(depth * 6)),
        ));
        jersey += 1;
    }
    team
}

/// Cities repeat with a numeric suffix past the twelfth team.
pub fn build_league(n: usize) -> League {
    let teams = (0..n)
        .map(|i| {
            let city = match i / CITIES.len() {
                0 => CITIES[i].to_string(),
                round => format!("{}{}", CITIES[i % CITIES.len()], round + 1),
            };
            build_team(&city, 60 + (i as u8 % 5) * 5)
        })
        .collect();
    League::new("Integration League", teams)
}
