use anyhow::{Context, Result};
use log::info;

use character_lives::game::characters::parse_resource;
use character_lives::{Ability, Character, Variant};

/// Coins needed for the demo run to earn one extra life
const DEMO_COINS: usize = 100;

fn main() -> Result<()> {
    // Initialize logger
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    // Usage: character-lives [variant] [lives]
    let mut args = std::env::args().skip(1);
    let variant = match args.next() {
        Some(name) => name.parse::<Variant>()?,
        None => Variant::Mario,
    };
    let lives = args
        .next()
        .map(|text| parse_resource("lives", &text))
        .transpose()?;

    let mut character =
        Character::new(variant, lives).with_context(|| format!("Failed to create {variant}"))?;
    info!("Starting run with {character}");

    for ability in Ability::ALL {
        info!("{}", character.perform(ability)?);
    }

    for _ in 0..DEMO_COINS {
        let outcome = character.collect_coin();
        if outcome.is_extra_life() {
            info!("{outcome}");
        }
    }

    while character.is_alive() {
        info!("{}", character.take_damage()?);
    }

    if let Err(err) = character.jump() {
        info!("Jump rejected: {err}");
    }

    info!(
        "Finished: {character} (characters created: {})",
        Character::total_characters()
    );

    Ok(())
}
