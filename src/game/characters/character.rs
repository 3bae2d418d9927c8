// Character entity with validated resources

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use log::{debug, info, warn};

use super::ability::Ability;
use super::outcome::{CoinOutcome, DamageOutcome};
use super::state::CharacterState;
use super::stats::BASE_LIMITS;
use super::variant::Variant;
use super::CharacterError;

/// Number of characters successfully created since process start
///
/// Starts at zero, only ever incremented, never reset.
static TOTAL_CHARACTERS: AtomicU64 = AtomicU64::new(0);

/// Parse a textual resource value, rejecting anything that is not an integer literal
///
/// Only the type is checked here; range checks belong to the setters.
pub fn parse_resource(field: &'static str, text: &str) -> Result<i64, CharacterError> {
    text.trim()
        .parse::<i64>()
        .map_err(|_| CharacterError::InvalidType {
            field,
            expected: "int",
            found: text.to_string(),
        })
}

fn validate_lives(lives: i64) -> Result<i64, CharacterError> {
    BASE_LIMITS
        .lives
        .check(lives)
        .ok_or(CharacterError::InvalidLives(lives))
}

fn validate_coins(coins: i64) -> Result<i64, CharacterError> {
    BASE_LIMITS
        .coins
        .check(coins)
        .ok_or(CharacterError::InvalidCoins(coins))
}

/// A playable character with bounded lives and coins
///
/// A `Character` is always fully valid: every constructor and setter checks
/// its input before anything is stored.
#[derive(Debug, Clone, PartialEq)]
pub struct Character {
    name: String,
    variant: Variant,
    lives: i64,
    coins: i64,
    speed: f32,
}

impl Character {
    /// Create a named variant, optionally overriding the starting lives (default 3)
    pub fn new(variant: Variant, lives: Option<i64>) -> Result<Self, CharacterError> {
        Self::create(variant.name(), variant, lives, variant.speed())
    }

    /// Create a character with an explicit name and speed
    ///
    /// Fails with `InvalidType` for a non-finite speed and `InvalidLives` for
    /// starting lives outside `[0, 99]`. The creation counter only moves once
    /// every check has passed.
    pub fn create(
        name: impl Into<String>,
        variant: Variant,
        lives: Option<i64>,
        speed: f32,
    ) -> Result<Self, CharacterError> {
        let name = name.into();

        if !speed.is_finite() {
            return Err(CharacterError::InvalidType {
                field: "speed",
                expected: "float",
                found: speed.to_string(),
            });
        }

        let lives = validate_lives(lives.unwrap_or(BASE_LIMITS.default_lives))?;
        let coins = validate_coins(0)?;

        let character = Self {
            name,
            variant,
            lives,
            coins,
            speed,
        };

        let total = TOTAL_CHARACTERS.fetch_add(1, Ordering::SeqCst) + 1;
        debug!(
            "Created {} as {} with {} lives (total characters: {})",
            character.name, variant, lives, total
        );

        Ok(character)
    }

    /// Total number of characters created so far, across all variants
    pub fn total_characters() -> u64 {
        TOTAL_CHARACTERS.load(Ordering::SeqCst)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    pub fn lives(&self) -> i64 {
        self.lives
    }

    pub fn coins(&self) -> i64 {
        self.coins
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    /// Check if character is alive (recomputed from lives on every call)
    pub fn is_alive(&self) -> bool {
        self.lives > 0
    }

    pub fn state(&self) -> CharacterState {
        CharacterState::from_lives(self.lives)
    }

    /// Replace lives; values outside `[0, 99]` are rejected and nothing changes
    pub fn set_lives(&mut self, lives: i64) -> Result<(), CharacterError> {
        self.lives = validate_lives(lives)?;
        Ok(())
    }

    /// Replace coins; values outside `[0, 999]` are rejected and nothing changes
    pub fn set_coins(&mut self, coins: i64) -> Result<(), CharacterError> {
        self.coins = validate_coins(coins)?;
        Ok(())
    }

    /// Set lives from untyped input such as a command-line argument
    pub fn set_lives_text(&mut self, text: &str) -> Result<(), CharacterError> {
        let lives = parse_resource("lives", text)?;
        self.set_lives(lives)
    }

    /// Set coins from untyped input such as a command-line argument
    pub fn set_coins_text(&mut self, text: &str) -> Result<(), CharacterError> {
        let coins = parse_resource("coins", text)?;
        self.set_coins(coins)
    }

    /// Pick up one coin
    ///
    /// Reaching 100 coins trades one 100-coin block for an extra life. This is
    /// not guarded by liveness, so a dead character collecting its 100th coin
    /// comes back with one life.
    pub fn collect_coin(&mut self) -> CoinOutcome {
        let limits = &BASE_LIMITS;
        let coins = self.coins + 1;

        if coins >= limits.coins_per_life {
            if self.lives < limits.max_lives() {
                self.coins = coins - limits.coins_per_life;
                self.lives += 1;
                info!("{} earned an extra life ({} lives)", self.name, self.lives);
                return CoinOutcome::ExtraLife {
                    name: self.name.clone(),
                    lives: self.lives,
                };
            }

            // Lives are capped: bank the coin, dropping it once coins are full too
            self.coins = coins.min(limits.max_coins());
            debug!("{} is at max lives, holding {} coins", self.name, self.coins);
            return CoinOutcome::LivesCapped {
                name: self.name.clone(),
                coins: self.coins,
            };
        }

        self.coins = coins;
        debug!("{} collected a coin ({}/100)", self.name, self.coins);
        CoinOutcome::Collected {
            name: self.name.clone(),
            coins: self.coins,
        }
    }

    /// Lose one life
    pub fn take_damage(&mut self) -> Result<DamageOutcome, CharacterError> {
        self.ensure_alive("take_damage")?;

        self.lives -= 1;
        if self.is_alive() {
            debug!("{} was hit, {} lives remaining", self.name, self.lives);
            Ok(DamageOutcome::Hit {
                name: self.name.clone(),
                lives: self.lives,
            })
        } else {
            info!("Game over for {}", self.name);
            Ok(DamageOutcome::GameOver {
                name: self.name.clone(),
            })
        }
    }

    /// Use an ability, returning the variant's description of it
    pub fn perform(&self, ability: Ability) -> Result<&'static str, CharacterError> {
        self.ensure_alive(ability.name())?;
        Ok(self.variant.ability_text(ability))
    }

    pub fn jump(&self) -> Result<&'static str, CharacterError> {
        self.perform(Ability::Jump)
    }

    pub fn run(&self) -> Result<&'static str, CharacterError> {
        self.perform(Ability::Run)
    }

    pub fn special_ability(&self) -> Result<&'static str, CharacterError> {
        self.perform(Ability::Special)
    }

    fn ensure_alive(&self, action: &str) -> Result<(), CharacterError> {
        if self.state().can_act() {
            return Ok(());
        }
        warn!("{} tried to {} with no lives remaining", self.name, action);
        Err(CharacterError::CharacterDead(self.name.clone()))
    }
}

impl fmt::Display for Character {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({} lives, {} coins)",
            self.name, self.lives, self.coins
        )
    }
}
