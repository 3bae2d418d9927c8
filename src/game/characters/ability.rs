// Ability definitions

use std::fmt;

/// The three abilities every character variant implements
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Ability {
    Jump,
    Run,
    /// Variant-specific special move
    Special,
}

impl Ability {
    pub const ALL: [Ability; 3] = [Ability::Jump, Ability::Run, Ability::Special];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Jump => "jump",
            Self::Run => "run",
            Self::Special => "special_ability",
        }
    }
}

impl fmt::Display for Ability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
