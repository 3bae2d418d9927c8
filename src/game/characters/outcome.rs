// Status outcomes reported by coin and damage actions
//
// Callers match on the variant; `Display` gives the player-facing message.

use std::fmt;

/// Result of collecting a single coin
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoinOutcome {
    /// Coin added, no conversion
    Collected { name: String, coins: i64 },
    /// 100 coins converted into one extra life
    ExtraLife { name: String, lives: i64 },
    /// Threshold reached but lives are already at the maximum
    LivesCapped { name: String, coins: i64 },
}

impl CoinOutcome {
    pub fn is_extra_life(&self) -> bool {
        matches!(self, Self::ExtraLife { .. })
    }
}

impl fmt::Display for CoinOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Collected { name, coins } => {
                write!(f, "{name} collected a coin! ({coins}/100)")
            }
            Self::ExtraLife { name, lives } => {
                write!(f, "{name} collected 100 coins! Extra life! ({lives} lives)")
            }
            Self::LivesCapped { name, coins } => write!(
                f,
                "{name} collected a coin but is already at max lives! ({coins} coins)"
            ),
        }
    }
}

/// Result of taking one hit
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DamageOutcome {
    Hit { name: String, lives: i64 },
    /// The hit took the last life
    GameOver { name: String },
}

impl DamageOutcome {
    pub fn is_game_over(&self) -> bool {
        matches!(self, Self::GameOver { .. })
    }
}

impl fmt::Display for DamageOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Hit { name, lives } => write!(f, "{name} was hit! {lives} lives remaining"),
            Self::GameOver { name } => write!(f, "{name} was hit! Game over for {name}!"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coin_messages() {
        let collected = CoinOutcome::Collected {
            name: "Mario".to_string(),
            coins: 51,
        };
        assert_eq!(collected.to_string(), "Mario collected a coin! (51/100)");
        assert!(!collected.is_extra_life());

        let extra = CoinOutcome::ExtraLife {
            name: "Mario".to_string(),
            lives: 4,
        };
        assert_eq!(
            extra.to_string(),
            "Mario collected 100 coins! Extra life! (4 lives)"
        );
        assert!(extra.is_extra_life());
    }

    #[test]
    fn test_damage_messages() {
        let hit = DamageOutcome::Hit {
            name: "Luigi".to_string(),
            lives: 2,
        };
        assert_eq!(hit.to_string(), "Luigi was hit! 2 lives remaining");
        assert!(!hit.is_game_over());

        let over = DamageOutcome::GameOver {
            name: "Luigi".to_string(),
        };
        assert_eq!(over.to_string(), "Luigi was hit! Game over for Luigi!");
        assert!(over.is_game_over());
    }
}
