// Character model: bounded lives and coins, coin-to-life conversion,
// per-variant abilities and a process-wide creation counter.

pub mod core;
pub mod game;

pub use game::characters::{
    Ability, Character, CharacterError, CharacterState, CoinOutcome, DamageOutcome,
    ResourceLimits, Variant,
};
