// Resource limits - ALL CHARACTERS SHARE THE SAME RULES
// Differentiation comes from the VARIANT (speed and ability text), not the limits

use crate::core::Bounds;

/// Fixed resource rules - same for every character
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourceLimits {
    /// Allowed range for lives
    pub lives: Bounds,
    /// Allowed range for coins
    pub coins: Bounds,
    /// Coins converted into one extra life
    pub coins_per_life: i64,
    /// Starting lives when none are given
    pub default_lives: i64,
}

/// The ONE set of limits used by all characters
pub const BASE_LIMITS: ResourceLimits = ResourceLimits {
    lives: Bounds::new(0, 99),
    coins: Bounds::new(0, 999),
    coins_per_life: 100,
    default_lives: 3,
};

impl Default for ResourceLimits {
    fn default() -> Self {
        BASE_LIMITS
    }
}

impl ResourceLimits {
    /// Get the standard limits (same for all characters)
    pub fn standard() -> Self {
        BASE_LIMITS
    }

    pub fn max_lives(&self) -> i64 {
        self.lives.max
    }

    pub fn max_coins(&self) -> i64 {
        self.coins.max
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_limits() {
        let limits = ResourceLimits::default();
        assert_eq!(limits.lives, Bounds::new(0, 99));
        assert_eq!(limits.coins, Bounds::new(0, 999));
        assert_eq!(limits.coins_per_life, 100);
        assert_eq!(limits.default_lives, 3);
    }

    #[test]
    fn test_standard_equals_default() {
        assert_eq!(ResourceLimits::standard(), ResourceLimits::default());
    }

    #[test]
    fn test_default_lives_within_bounds() {
        assert!(BASE_LIMITS.lives.contains(BASE_LIMITS.default_lives));
        assert!(BASE_LIMITS.coins_per_life <= BASE_LIMITS.max_coins());
    }
}
