// Character variants and their fixed behaviour table

use std::fmt;
use std::str::FromStr;

use super::ability::Ability;
use super::CharacterError;

/// The four playable variants
///
/// Each variant fixes the character's speed and the text reported by its
/// abilities. Validation and resource rules are shared by all of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
    /// Fast mover
    Mario,
    /// Slow mover
    Luigi,
    /// Float mover
    Peach,
    /// Quick mover
    Toad,
}

/// One row of the variant table
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VariantProfile {
    pub name: &'static str,
    pub speed: f32,
    pub jump: &'static str,
    pub run: &'static str,
    pub special: &'static str,
}

const MARIO: VariantProfile = VariantProfile {
    name: "Mario",
    speed: 1.0,
    jump: "Mario jumps!",
    run: "Mario runs at normal speed!",
    special: "Mario uses fireball!",
};

const LUIGI: VariantProfile = VariantProfile {
    name: "Luigi",
    speed: 0.9,
    jump: "Luigi jumps higher and floatier!",
    run: "Luigi runs with slippery momentum!",
    special: "Luigi uses Poltergust!",
};

const PEACH: VariantProfile = VariantProfile {
    name: "Peach",
    speed: 0.85,
    jump: "Peach floats gracefully through the air!",
    run: "Peach runs elegantly!",
    special: "Peach uses her parasol!",
};

const TOAD: VariantProfile = VariantProfile {
    name: "Toad",
    speed: 1.2,
    jump: "Toad does a short but quick jump!",
    run: "Toad zooms ahead!",
    special: "Toad uses spore burst!",
};

impl Variant {
    pub const ALL: [Variant; 4] = [Variant::Mario, Variant::Luigi, Variant::Peach, Variant::Toad];

    pub fn profile(&self) -> &'static VariantProfile {
        match self {
            Self::Mario => &MARIO,
            Self::Luigi => &LUIGI,
            Self::Peach => &PEACH,
            Self::Toad => &TOAD,
        }
    }

    /// Display name, also used as the character name for named variants
    pub fn name(&self) -> &'static str {
        self.profile().name
    }

    pub fn speed(&self) -> f32 {
        self.profile().speed
    }

    /// Text reported when this variant uses an ability
    pub fn ability_text(&self, ability: Ability) -> &'static str {
        let profile = self.profile();
        match ability {
            Ability::Jump => profile.jump,
            Ability::Run => profile.run,
            Ability::Special => profile.special,
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Variant {
    type Err = CharacterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|variant| variant.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| CharacterError::UnknownVariant(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_variant_speeds() {
        assert_relative_eq!(Variant::Mario.speed(), 1.0);
        assert_relative_eq!(Variant::Luigi.speed(), 0.9);
        assert_relative_eq!(Variant::Peach.speed(), 0.85);
        assert_relative_eq!(Variant::Toad.speed(), 1.2);
    }

    #[test]
    fn test_ability_text_lookup() {
        assert_eq!(Variant::Mario.ability_text(Ability::Jump), "Mario jumps!");
        assert_eq!(Variant::Luigi.ability_text(Ability::Special), "Luigi uses Poltergust!");
        assert_eq!(Variant::Peach.ability_text(Ability::Run), "Peach runs elegantly!");
        assert_eq!(
            Variant::Toad.ability_text(Ability::Jump),
            "Toad does a short but quick jump!"
        );
    }

    #[test]
    fn test_ability_text_distinct_per_variant() {
        for ability in Ability::ALL {
            for a in Variant::ALL {
                for b in Variant::ALL {
                    if a != b {
                        assert_ne!(a.ability_text(ability), b.ability_text(ability));
                    }
                }
            }
        }
    }

    #[test]
    fn test_from_str() {
        assert_eq!("mario".parse::<Variant>(), Ok(Variant::Mario));
        assert_eq!(" Toad ".parse::<Variant>(), Ok(Variant::Toad));
        assert_eq!(
            "Bowser".parse::<Variant>(),
            Err(CharacterError::UnknownVariant("Bowser".to_string()))
        );
    }

    #[test]
    fn test_display_matches_name() {
        for variant in Variant::ALL {
            assert_eq!(variant.to_string(), variant.name());
        }
    }
}
