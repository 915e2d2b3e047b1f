use super::ids::{PlayerId, TeamId};
use crate::error::{Result, SimulationError};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

pub const FORWARD_LINES: usize = 4;
pub const LINE_SIZE: usize = 3;
pub const DEFENSE_PAIRS: usize = 3;
pub const PAIR_SIZE: usize = 2;

/// Deployment plan for one game: 4 forward lines, 3 defense pairs and a
/// starting/backup goalie.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamLineup {
    pub team_id: TeamId,
    pub forward_lines: Vec<Vec<PlayerId>>,
    pub defense_pairs: Vec<Vec<PlayerId>>,
    pub starting_goalie: Option<PlayerId>,
    pub backup_goalie: Option<PlayerId>,
}

impl TeamLineup {
    pub fn new(team_id: TeamId) -> Self {
        Self {
            team_id,
            forward_lines: vec![Vec::new(); FORWARD_LINES],
            defense_pairs: vec![Vec::new(); DEFENSE_PAIRS],
            starting_goalie: None,
            backup_goalie: None,
        }
    }

    /// Every line and pair full, both goalie slots set.
    pub fn is_complete(&self) -> bool {
        self.forward_lines.len() == FORWARD_LINES
            && self.forward_lines.iter().all(|line| line.len() == LINE_SIZE)
            && self.defense_pairs.len() == DEFENSE_PAIRS
            && self.defense_pairs.iter().all(|pair| pair.len() == PAIR_SIZE)
            && self.starting_goalie.is_some()
            && self.backup_goalie.is_some()
    }

    pub fn is_valid(&self) -> bool {
        self.is_complete() && self.duplicate_player().is_none()
    }

    /// Completeness + uniqueness check reported as `MalformedLineupData`.
    pub fn validate(&self, team_name: &str) -> Result<()> {
        let malformed = |reason: String| SimulationError::MalformedLineupData {
            team: team_name.to_string(),
            reason,
        };

        if self.forward_lines.len() != FORWARD_LINES {
            return Err(malformed(format!(
                "expected {} forward lines, found {}",
                FORWARD_LINES,
                self.forward_lines.len()
            )));
        }
        for (idx, line) in self.forward_lines.iter().enumerate() {
            if line.len() != LINE_SIZE {
                return Err(malformed(format!(
                    "forward line {} has {} players, expected {}",
                    idx + 1,
                    line.len(),
                    LINE_SIZE
                )));
            }
        }
        if self.defense_pairs.len() != DEFENSE_PAIRS {
            return Err(malformed(format!(
                "expected {} defense pairs, found {}",
                DEFENSE_PAIRS,
                self.defense_pairs.len()
            )));
        }
        for (idx, pair) in self.defense_pairs.iter().enumerate() {
            if pair.len() != PAIR_SIZE {
                return Err(malformed(format!(
                    "defense pair {} has {} players, expected {}",
                    idx + 1,
                    pair.len(),
                    PAIR_SIZE
                )));
            }
        }
        if self.starting_goalie.is_none() || self.backup_goalie.is_none() {
            return Err(malformed("goalie slots are not both set".to_string()));
        }
        if let Some(dup) = self.duplicate_player() {
            return Err(malformed(format!("player {dup} appears in more than one slot")));
        }
        Ok(())
    }

    /// First id that occupies two slots. A backup equal to the starter is
    /// the single-goalie case and does not count.
    pub fn duplicate_player(&self) -> Option<PlayerId> {
        let mut seen = HashSet::new();
        let skaters = self.forward_lines.iter().chain(self.defense_pairs.iter()).flatten();
        for id in skaters.chain(self.starting_goalie.iter()) {
            if !seen.insert(*id) {
                return Some(*id);
            }
        }
        match (self.starting_goalie, self.backup_goalie) {
            (Some(start), Some(backup)) if start != backup && seen.contains(&backup) => Some(backup),
            _ => None,
        }
    }

    pub fn forwards(&self) -> impl Iterator<Item = &PlayerId> {
        self.forward_lines.iter().flatten()
    }

    pub fn defensemen(&self) -> impl Iterator<Item = &PlayerId> {
        self.defense_pairs.iter().flatten()
    }

    /// All slotted ids in slot order (forwards, defense, goalies), deduplicated.
    pub fn all_player_ids(&self) -> Vec<PlayerId> {
        let mut seen = HashSet::new();
        self.forwards()
            .chain(self.defensemen())
            .chain(self.starting_goalie.iter())
            .chain(self.backup_goalie.iter())
            .filter(|id| seen.insert(**id))
            .copied()
            .collect()
    }

    pub fn contains(&self, id: PlayerId) -> bool {
        self.forwards().chain(self.defensemen()).any(|p| *p == id)
            || self.starting_goalie == Some(id)
            || self.backup_goalie == Some(id)
    }
}
