use thiserror::Error;

#[derive(Error, Debug)]
pub enum SimulationError {
    #[error("Invalid team configuration for {team}: not enough {missing}")]
    InvalidTeamConfiguration { team: String, missing: String },

    #[error("Malformed lineup for {team}: {reason}")]
    MalformedLineupData { team: String, reason: String },

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Schedule conflict: {0}")]
    ScheduleConflict(String),

    #[error("Contract calculation error: {0}")]
    ContractCalculationError(String),

    #[error("Corrupted save data: {0}")]
    CorruptedSaveData(String),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl SimulationError {
    /// Whether the day loop can carry on after this error.
    ///
    /// Lineup failures only take one team out of today's slate; everything
    /// else is a precondition violation the caller has to deal with.
    pub fn is_recoverable(&self) -> bool {
        match self {
            SimulationError::InvalidTeamConfiguration { .. } => true,
            SimulationError::MalformedLineupData { .. } => true,
            SimulationError::InvalidDate(_) => false,
            SimulationError::ScheduleConflict(_) => false,
            SimulationError::InvalidConfig(_) => false,
            _ => false,
        }
    }
}

pub type Result<T> = std::result::Result<T, SimulationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lineup_errors_are_recoverable() {
        let err = SimulationError::InvalidTeamConfiguration {
            team: "Hamilton Hawks".to_string(),
            missing: "goalies".to_string(),
        };
        assert!(err.is_recoverable());
        assert_eq!(
            err.to_string(),
            "Invalid team configuration for Hamilton Hawks: not enough goalies"
        );
    }

    #[test]
    fn test_invalid_date_is_not_recoverable() {
        let err = SimulationError::InvalidDate("cannot advance by 0 days".to_string());
        assert!(!err.is_recoverable());
    }
}
