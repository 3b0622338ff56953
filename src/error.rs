//! Error types for construction-time failures.
//!
//! Gameplay mis-plays are never errors: they surface as
//! [`PlayRejection`](crate::rules::PlayRejection) and leave state untouched.
//! `EngineError` is reserved for malformed input handed to constructors
//! (unknown names, bad hit points) and for invariant violations.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("unknown card: {0}")]
    UnknownCard(String),

    #[error("unknown monster type: {0}")]
    UnknownMonster(String),

    #[error("unknown character: {0}")]
    UnknownCharacter(String),

    #[error("max hp must be positive, got {0}")]
    InvalidMaxHp(i64),

    #[error("invalid encounter: {0}")]
    InvalidEncounter(String),

    #[error("invalid card {name}: {reason}")]
    InvalidCard { name: String, reason: String },

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("invariant violated: {0}")]
    Invariant(String),
}

pub type Result<T> = std::result::Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(
            EngineError::UnknownMonster("Slime".to_string()).to_string(),
            "unknown monster type: Slime"
        );
        assert_eq!(
            EngineError::InvalidMaxHp(0).to_string(),
            "max hp must be positive, got 0"
        );
        assert_eq!(
            EngineError::InvalidCard {
                name: "Free".to_string(),
                reason: "cost must not be negative".to_string()
            }
            .to_string(),
            "invalid card Free: cost must not be negative"
        );
    }
}
