use super::ids::PlayerId;
use super::stats::PlayerStats;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Position {
    #[serde(rename = "C")]
    Center,
    #[serde(rename = "LW")]
    LeftWing,
    #[serde(rename = "RW")]
    RightWing,
    #[serde(rename = "LD")]
    LeftDefense,
    #[serde(rename = "RD")]
    RightDefense,
    #[serde(rename = "G")]
    Goalie,
}

impl Position {
    pub fn is_forward(&self) -> bool {
        matches!(self, Position::Center | Position::LeftWing | Position::RightWing)
    }

    pub fn is_defense(&self) -> bool {
        matches!(self, Position::LeftDefense | Position::RightDefense)
    }

    pub fn is_goalie(&self) -> bool {
        matches!(self, Position::Goalie)
    }

    pub fn code(&self) -> &'static str {
        match self {
            Position::Center => "C",
            Position::LeftWing => "LW",
            Position::RightWing => "RW",
            Position::LeftDefense => "LD",
            Position::RightDefense => "RD",
            Position::Goalie => "G",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Position::Center => "Center",
            Position::LeftWing => "Left Wing",
            Position::RightWing => "Right Wing",
            Position::LeftDefense => "Left Defense",
            Position::RightDefense => "Right Defense",
            Position::Goalie => "Goalie",
        }
    }
}

// ============================================
// Attributes
// ============================================

fn default_attribute() -> u8 {
    50
}

/// Skater ratings on a 1..=99 scale. Missing fields deserialize to 50.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SkaterAttributes {
    // Passing
    pub passing_accuracy: u8,
    pub passing_vision: u8,
    pub passing_creativity: u8,
    pub passing_under_pressure: u8,
    // Shooting
    pub shooting_accuracy: u8,
    pub shooting_power: u8,
    pub quick_release: u8,
    pub one_timer: u8,
    // Hockey sense
    pub positioning: u8,
    pub anticipation: u8,
    pub decision_making: u8,
    pub game_awareness: u8,
    // Defense
    pub stick_checking: u8,
    pub gap_control: u8,
    pub shot_blocking: u8,
    pub defensive_positioning: u8,
    pub body_checking: u8,
    pub poke_checking: u8,
    pub backchecking: u8,
    // Physical
    pub speed: u8,
    pub acceleration: u8,
    pub agility: u8,
    pub balance: u8,
    pub stamina: u8,
    pub strength: u8,
    // Mental
    pub clutch: u8,
    pub composure: u8,
    pub focus: u8,
    pub discipline: u8,
}

impl Default for SkaterAttributes {
    fn default() -> Self {
        Self::uniform(default_attribute())
    }
}

impl SkaterAttributes {
    pub const MAX: u8 = 99;
    pub const MIN: u8 = 1;

    /// Every attribute set to `value` (clamped to 1..=99).
    pub fn uniform(value: u8) -> Self {
        let v = value.clamp(Self::MIN, Self::MAX);
        Self {
            passing_accuracy: v,
            passing_vision: v,
            passing_creativity: v,
            passing_under_pressure: v,
            shooting_accuracy: v,
            shooting_power: v,
            quick_release: v,
            one_timer: v,
            positioning: v,
            anticipation: v,
            decision_making: v,
            game_awareness: v,
            stick_checking: v,
            gap_control: v,
            shot_blocking: v,
            defensive_positioning: v,
            body_checking: v,
            poke_checking: v,
            backchecking: v,
            speed: v,
            acceleration: v,
            agility: v,
            balance: v,
            stamina: v,
            strength: v,
            clutch: v,
            composure: v,
            focus: v,
            discipline: v,
        }
    }

    /// Position-agnostic overall: mean of the physical, offensive,
    /// defensive and mental group means.
    pub fn overall(&self) -> u8 {
        let physical = avg(&[
            self.speed,
            self.acceleration,
            self.agility,
            self.balance,
            self.stamina,
            self.strength,
        ]);
        let offensive = avg(&[
            self.passing_accuracy,
            self.passing_vision,
            self.shooting_accuracy,
            self.shooting_power,
            self.quick_release,
        ]);
        let defensive = avg(&[
            self.stick_checking,
            self.gap_control,
            self.shot_blocking,
            self.defensive_positioning,
            self.body_checking,
        ]);
        let mental = avg(&[
            self.positioning,
            self.anticipation,
            self.decision_making,
            self.game_awareness,
            self.clutch,
            self.composure,
        ]);
        ((physical + offensive + defensive + mental) / 4) as u8
    }

    /// Mean of the five attacking attributes used for team offense.
    pub fn offensive_rating(&self) -> f64 {
        (self.shooting_accuracy as f64
            + self.shooting_power as f64
            + self.passing_accuracy as f64
            + self.passing_vision as f64
            + self.speed as f64)
            / 5.0
    }

    /// Mean of the five defensive attributes used for team defense.
    pub fn defensive_rating(&self) -> f64 {
        (self.defensive_positioning as f64
            + self.stick_checking as f64
            + self.gap_control as f64
            + self.shot_blocking as f64
            + self.body_checking as f64)
            / 5.0
    }

    /// Shooting skill in 0.0..=1.0
    pub fn shooting_skill(&self) -> f64 {
        (self.shooting_accuracy as f64 + self.shooting_power as f64) / 200.0
    }

    /// Passing skill in 0.0..=1.0
    pub fn passing_skill(&self) -> f64 {
        (self.passing_accuracy as f64 + self.passing_vision as f64) / 200.0
    }

    pub fn position_overall(&self, position: Position) -> u8 {
        let rating = match position {
            Position::Center => {
                let passing = (self.passing_accuracy as u32
                    + self.passing_vision as u32 * 2
                    + self.passing_creativity as u32)
                    / 4;
                let vision = (self.decision_making as u32 * 2
                    + self.game_awareness as u32
                    + self.positioning as u32)
                    / 4;
                let offensive = avg(&[self.shooting_accuracy, self.quick_release, self.one_timer]);
                let physical = avg(&[self.speed, self.acceleration, self.agility, self.balance]);
                let mental = avg(&[self.clutch, self.composure, self.focus]);
                (passing * 3 + vision * 3 + offensive * 2 + physical * 2 + mental) / 11
            }
            Position::LeftWing | Position::RightWing => {
                let shooting = (self.shooting_accuracy as u32 * 2
                    + self.shooting_power as u32
                    + self.quick_release as u32
                    + self.one_timer as u32)
                    / 5;
                let skating =
                    (self.speed as u32 * 2 + self.acceleration as u32 + self.agility as u32) / 4;
                let passing = avg(&[self.passing_accuracy, self.passing_vision]);
                let physical = avg(&[self.strength, self.balance, self.stamina]);
                let mental = avg(&[self.positioning, self.anticipation, self.clutch]);
                (shooting * 3 + skating * 3 + passing * 2 + physical * 2 + mental) / 11
            }
            Position::LeftDefense | Position::RightDefense => {
                let defense = (self.defensive_positioning as u32 * 2
                    + self.stick_checking as u32 * 2
                    + self.gap_control as u32
                    + self.shot_blocking as u32)
                    / 6;
                let physical = (self.strength as u32 * 2 + self.balance as u32) / 3;
                let passing = avg(&[
                    self.passing_accuracy,
                    self.passing_vision,
                    self.passing_under_pressure,
                ]);
                let checking = avg(&[self.body_checking, self.poke_checking, self.backchecking]);
                let mental = avg(&[self.positioning, self.anticipation, self.decision_making]);
                (defense * 4 + physical * 2 + passing * 2 + checking * 2 + mental) / 11
            }
            Position::Goalie => return self.overall(),
        };
        rating as u8
    }
}

/// Goalie ratings on a 1..=99 scale. Missing fields deserialize to 50.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GoalieAttributes {
    // Positioning
    pub angle_play: u8,
    pub depth_management: u8,
    pub net_coverage: u8,
    pub post_play: u8,
    pub screen_management: u8,
    // Reflexes
    pub glove_hand: u8,
    pub blocker: u8,
    pub pad_saves: u8,
    pub reaction_time: u8,
    pub second_saves: u8,
    // Rebound control
    pub rebound_direction: u8,
    pub absorption: u8,
    pub recovery_speed: u8,
    pub scramble_ability: u8,
    pub freeze_timing: u8,
    // Movement
    pub lateral_movement: u8,
    pub post_to_post: u8,
    pub butterfly_technique: u8,
    pub recovery: u8,
    pub flexibility: u8,
    // Puck handling
    pub puck_playing: u8,
    pub passing_accuracy: u8,
    pub decision_making: u8,
    pub behind_net: u8,
    pub breakout_assistance: u8,
    // Mental
    pub focus: u8,
    pub tracking: u8,
    pub anticipation: u8,
    pub clutch: u8,
    pub composure: u8,
}

impl Default for GoalieAttributes {
    fn default() -> Self {
        Self::uniform(default_attribute())
    }
}

impl GoalieAttributes {
    pub fn uniform(value: u8) -> Self {
        let v = value.clamp(SkaterAttributes::MIN, SkaterAttributes::MAX);
        Self {
            angle_play: v,
            depth_management: v,
            net_coverage: v,
            post_play: v,
            screen_management: v,
            glove_hand: v,
            blocker: v,
            pad_saves: v,
            reaction_time: v,
            second_saves: v,
            rebound_direction: v,
            absorption: v,
            recovery_speed: v,
            scramble_ability: v,
            freeze_timing: v,
            lateral_movement: v,
            post_to_post: v,
            butterfly_technique: v,
            recovery: v,
            flexibility: v,
            puck_playing: v,
            passing_accuracy: v,
            decision_making: v,
            behind_net: v,
            breakout_assistance: v,
            focus: v,
            tracking: v,
            anticipation: v,
            clutch: v,
            composure: v,
        }
    }

    pub fn overall(&self) -> u8 {
        let positioning = avg(&[
            self.angle_play,
            self.depth_management,
            self.net_coverage,
            self.post_play,
            self.screen_management,
        ]);
        let reflexes = avg(&[
            self.glove_hand,
            self.blocker,
            self.pad_saves,
            self.reaction_time,
            self.second_saves,
        ]);
        let rebounds = avg(&[
            self.rebound_direction,
            self.absorption,
            self.recovery_speed,
            self.scramble_ability,
            self.freeze_timing,
        ]);
        let movement = avg(&[
            self.lateral_movement,
            self.post_to_post,
            self.butterfly_technique,
            self.recovery,
            self.flexibility,
        ]);
        let puck_handling = avg(&[
            self.puck_playing,
            self.passing_accuracy,
            self.decision_making,
            self.behind_net,
            self.breakout_assistance,
        ]);
        let mental = avg(&[
            self.focus,
            self.tracking,
            self.anticipation,
            self.clutch,
            self.composure,
        ]);
        ((positioning + reflexes + rebounds + movement + puck_handling + mental) / 6) as u8
    }
}

fn avg(values: &[u8]) -> u32 {
    if values.is_empty() {
        return 0;
    }
    values.iter().map(|&v| v as u32).sum::<u32>() / values.len() as u32
}

/// A player carries exactly one attribute set, chosen by position category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PlayerRatings {
    Skater(SkaterAttributes),
    Goalie(GoalieAttributes),
}

// ============================================
// Injury
// ============================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum InjuryStatus {
    #[default]
    Healthy,
    Injured {
        days_remaining: u16,
        description: String,
    },
}

impl InjuryStatus {
    pub fn is_injured(&self) -> bool {
        matches!(self, InjuryStatus::Injured { .. })
    }

    pub fn days_remaining(&self) -> u16 {
        match self {
            InjuryStatus::Healthy => 0,
            InjuryStatus::Injured { days_remaining, .. } => *days_remaining,
        }
    }

    /// Count one day off the injury. Returns `true` when the player just
    /// became healthy.
    pub fn advance_day(&mut self) -> bool {
        match self {
            InjuryStatus::Healthy => false,
            InjuryStatus::Injured { days_remaining, .. } => {
                if *days_remaining <= 1 {
                    *self = InjuryStatus::Healthy;
                    true
                } else {
                    *days_remaining -= 1;
                    false
                }
            }
        }
    }
}

// ============================================
// Player
// ============================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub first_name: String,
    pub last_name: String,
    pub jersey_number: u8,
    pub position: Position,
    pub age: u8,
    pub ratings: PlayerRatings,
    #[serde(default)]
    pub injury: InjuryStatus,
    #[serde(default)]
    pub season_stats: PlayerStats,
    #[serde(default)]
    pub career_stats: PlayerStats,
}

impl Player {
    /// Build a skater. `position` must not be `Goalie`.
    pub fn skater(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        jersey_number: u8,
        position: Position,
        attributes: SkaterAttributes,
    ) -> Self {
        debug_assert!(!position.is_goalie(), "skater built with goalie position");
        Self {
            id: PlayerId::new(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            jersey_number,
            position,
            age: 25,
            ratings: PlayerRatings::Skater(attributes),
            injury: InjuryStatus::Healthy,
            season_stats: PlayerStats::default(),
            career_stats: PlayerStats::default(),
        }
    }

    pub fn goalie(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        jersey_number: u8,
        attributes: GoalieAttributes,
    ) -> Self {
        Self {
            id: PlayerId::new(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            jersey_number,
            position: Position::Goalie,
            age: 27,
            ratings: PlayerRatings::Goalie(attributes),
            injury: InjuryStatus::Healthy,
            season_stats: PlayerStats::default(),
            career_stats: PlayerStats::default(),
        }
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn skater_attributes(&self) -> Option<&SkaterAttributes> {
        match &self.ratings {
            PlayerRatings::Skater(attrs) => Some(attrs),
            PlayerRatings::Goalie(_) => None,
        }
    }

    pub fn goalie_attributes(&self) -> Option<&GoalieAttributes> {
        match &self.ratings {
            PlayerRatings::Goalie(attrs) => Some(attrs),
            PlayerRatings::Skater(_) => None,
        }
    }

    /// Scalar rating used to rank players within a position group.
    pub fn overall(&self) -> u8 {
        match &self.ratings {
            PlayerRatings::Skater(attrs) => attrs.position_overall(self.position),
            PlayerRatings::Goalie(attrs) => attrs.overall(),
        }
    }

    pub fn is_available(&self) -> bool {
        !self.injury.is_injured()
    }

    pub fn is_rookie(&self) -> bool {
        self.career_stats.games_played < 10
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniform_ratings_give_uniform_overall() {
        let attrs = SkaterAttributes::uniform(70);
        assert_eq!(attrs.overall(), 70);
        assert_eq!(attrs.position_overall(Position::Center), 70);
        assert_eq!(attrs.position_overall(Position::LeftWing), 70);
        assert_eq!(attrs.position_overall(Position::RightDefense), 70);
        assert_eq!(GoalieAttributes::uniform(64).overall(), 64);
    }

    #[test]
    fn test_position_overall_rewards_role_skills() {
        let mut sniper = SkaterAttributes::uniform(50);
        sniper.shooting_accuracy = 95;
        sniper.speed = 95;
        let mut shutdown = SkaterAttributes::uniform(50);
        shutdown.defensive_positioning = 95;
        shutdown.stick_checking = 95;

        assert!(
            sniper.position_overall(Position::LeftWing)
                > shutdown.position_overall(Position::LeftWing)
        );
        assert!(
            shutdown.position_overall(Position::LeftDefense)
                > sniper.position_overall(Position::LeftDefense)
        );
    }

    #[test]
    fn test_injury_countdown() {
        let mut status = InjuryStatus::Injured {
            days_remaining: 2,
            description: "Lower body".to_string(),
        };
        assert!(!status.advance_day());
        assert_eq!(status.days_remaining(), 1);
        assert!(status.advance_day());
        assert_eq!(status, InjuryStatus::Healthy);

        // Healthy stays healthy
        for _ in 0..5 {
            assert!(!status.advance_day());
        }
        assert_eq!(status, InjuryStatus::Healthy);
    }

    #[test]
    fn test_tagged_ratings_match_position() {
        let goalie = Player::goalie("Ilya", "Sorokin", 30, GoalieAttributes::uniform(80));
        assert!(goalie.skater_attributes().is_none());
        assert_eq!(goalie.overall(), 80);

        let center = Player::skater("Nico", "Hischier", 13, Position::Center, SkaterAttributes::uniform(75));
        assert!(center.goalie_attributes().is_none());
        assert_eq!(center.overall(), 75);
    }

    #[test]
    fn test_missing_attribute_fields_default_to_fifty() {
        let attrs: SkaterAttributes = serde_json::from_str(r#"{ "speed": 90 }"#).unwrap();
        assert_eq!(attrs.speed, 90);
        assert_eq!(attrs.discipline, 50);
    }
}
