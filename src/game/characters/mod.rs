// Character system
//
// This module contains everything related to playable characters:
// - Character entity with validated lives and coins
// - Resource limits and the coin-to-life conversion rule
// - Variant table fixing speed and ability text
// - Liveness state derived from lives
// - Status outcomes returned by coin and damage actions

pub mod ability;
pub mod character;
pub mod outcome;
pub mod state;
pub mod stats;
pub mod variant;

// Re-export commonly used types
pub use ability::Ability;
pub use character::{parse_resource, Character};
pub use outcome::{CoinOutcome, DamageOutcome};
pub use state::CharacterState;
pub use stats::{ResourceLimits, BASE_LIMITS};
pub use variant::Variant;

/// Character construction and action errors
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CharacterError {
    #[error("Cannot set {field} of a Character to a non-{expected} value: {found}")]
    InvalidType {
        field: &'static str,
        expected: &'static str,
        found: String,
    },

    #[error("Lives must be between 0 and 99 (got {0})")]
    InvalidLives(i64),

    #[error("Coins must be between 0 and 999 (got {0})")]
    InvalidCoins(i64),

    #[error("{0} has no lives remaining!")]
    CharacterDead(String),

    #[error("Unknown character variant: {0}")]
    UnknownVariant(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_character_error_display() {
        let err = CharacterError::CharacterDead("Mario".to_string());
        assert_eq!(err.to_string(), "Mario has no lives remaining!");

        let err = CharacterError::InvalidLives(150);
        assert_eq!(err.to_string(), "Lives must be between 0 and 99 (got 150)");

        let err = CharacterError::InvalidCoins(-1);
        assert_eq!(err.to_string(), "Coins must be between 0 and 999 (got -1)");
    }

    #[test]
    fn test_invalid_type_display() {
        let err = CharacterError::InvalidType {
            field: "lives",
            expected: "int",
            found: "2.5".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Cannot set lives of a Character to a non-int value: 2.5"
        );
    }
}
