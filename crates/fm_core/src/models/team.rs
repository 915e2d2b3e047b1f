use super::ids::{PlayerId, TeamId};
use super::lineup::TeamLineup;
use super::player::{Player, Position};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamRecord {
    pub wins: u32,
    pub losses: u32,
    pub overtime_losses: u32,
}

impl TeamRecord {
    /// Two points per win, one per overtime/shootout loss
    pub fn points(&self) -> u32 {
        self.wins * 2 + self.overtime_losses
    }

    pub fn games_played(&self) -> u32 {
        self.wins + self.losses + self.overtime_losses
    }

    pub fn win_percentage(&self) -> f64 {
        let gp = self.games_played();
        if gp == 0 {
            0.0
        } else {
            self.wins as f64 / gp as f64
        }
    }

    pub fn record_game(&mut self, won: bool, beyond_regulation: bool) {
        if won {
            self.wins += 1;
        } else if beyond_regulation {
            self.overtime_losses += 1;
        } else {
            self.losses += 1;
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Team {
    pub id: TeamId,
    pub name: String,
    pub city: String,
    pub abbreviation: String,
    pub roster: Vec<Player>,
    /// Last deployment plan; may be stale
    #[serde(default)]
    pub lineup: Option<TeamLineup>,
    #[serde(default)]
    pub record: TeamRecord,
}

impl Team {
    pub fn new(
        name: impl Into<String>,
        city: impl Into<String>,
        abbreviation: impl Into<String>,
    ) -> Self {
        Self {
            id: TeamId::new(),
            name: name.into(),
            city: city.into(),
            abbreviation: abbreviation.into(),
            roster: Vec::new(),
            lineup: None,
            record: TeamRecord::default(),
        }
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.city, self.name)
    }

    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.roster.iter().find(|p| p.id == id)
    }

    pub fn player_mut(&mut self, id: PlayerId) -> Option<&mut Player> {
        self.roster.iter_mut().find(|p| p.id == id)
    }

    pub fn players_at(&self, position: Position) -> impl Iterator<Item = &Player> {
        self.roster.iter().filter(move |p| p.position == position)
    }

    /// Adds a player unless the id is already rostered.
    pub fn add_player(&mut self, player: Player) -> bool {
        if self.player(player.id).is_some() {
            return false;
        }
        self.roster.push(player);
        true
    }

    pub fn remove_player(&mut self, id: PlayerId) -> Option<Player> {
        let idx = self.roster.iter().position(|p| p.id == id)?;
        if self.lineup.as_ref().is_some_and(|l| l.contains(id)) {
            self.lineup = None;
        }
        Some(self.roster.remove(idx))
    }

    /// The stored lineup is complete and every slotted player is rostered
    /// and healthy.
    pub fn has_usable_lineup(&self) -> bool {
        match &self.lineup {
            Some(lineup) => {
                lineup.team_id == self.id
                    && lineup.is_valid()
                    && lineup
                        .all_player_ids()
                        .into_iter()
                        .all(|id| self.player(id).is_some_and(Player::is_available))
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::player::SkaterAttributes;

    #[test]
    fn test_record_points_and_percentage() {
        let mut record = TeamRecord::default();
        record.record_game(true, false);
        record.record_game(false, true);
        record.record_game(false, false);
        record.record_game(true, true);

        assert_eq!(record, TeamRecord { wins: 2, losses: 1, overtime_losses: 1 });
        assert_eq!(record.points(), 5);
        assert_eq!(record.games_played(), 4);
        assert!((record.win_percentage() - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_roster_is_unique_by_id() {
        let mut team = Team::new("Hawks", "Hamilton", "HAM");
        let player = Player::skater("A", "B", 9, Position::Center, SkaterAttributes::default());
        assert!(team.add_player(player.clone()));
        assert!(!team.add_player(player.clone()));
        assert_eq!(team.roster.len(), 1);
        assert!(team.remove_player(player.id).is_some());
        assert!(team.roster.is_empty());
    }
}
