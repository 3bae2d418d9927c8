// Character liveness state

/// Liveness of a character, derived from its lives on every read
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CharacterState {
    /// At least one life left
    #[default]
    Alive,
    /// No lives left; damage and abilities are rejected
    Dead,
}

impl CharacterState {
    pub fn from_lives(lives: i64) -> Self {
        if lives > 0 {
            Self::Alive
        } else {
            Self::Dead
        }
    }

    /// Check if the character can take damage or use abilities
    pub fn can_act(&self) -> bool {
        matches!(self, Self::Alive)
    }

    pub fn is_dead(&self) -> bool {
        matches!(self, Self::Dead)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_lives() {
        assert_eq!(CharacterState::from_lives(3), CharacterState::Alive);
        assert_eq!(CharacterState::from_lives(1), CharacterState::Alive);
        assert_eq!(CharacterState::from_lives(0), CharacterState::Dead);
    }

    #[test]
    fn test_dead_cannot_act() {
        assert!(CharacterState::Alive.can_act());
        assert!(!CharacterState::Dead.can_act());
        assert!(CharacterState::Dead.is_dead());
    }
}
