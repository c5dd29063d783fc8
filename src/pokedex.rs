//! Pokedex Module
//!
//! The catch decision and the collection of caught Pokemon.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use rand::Rng;

use crate::models::Pokemon;

/// Base experience assumed when PokeAPI reports none (or zero).
const FALLBACK_BASE_EXPERIENCE: u32 = 60;

/// Numerator of the catch chance; higher base experience means lower odds.
const CATCH_DIFFICULTY: u32 = 6000;

// == Catch Decision ==
/// Returns the catch threshold for a Pokemon with the given base experience.
///
/// The result is compared against a roll in `0..100`, so any value of 100 or
/// more always succeeds.
pub fn catch_chance(base_experience: Option<u32>) -> u32 {
    let experience = match base_experience {
        Some(0) | None => FALLBACK_BASE_EXPERIENCE,
        Some(experience) => experience,
    };
    CATCH_DIFFICULTY / experience
}

/// Decides a catch for a given roll in `0..100`.
pub fn is_caught(base_experience: Option<u32>, roll: u32) -> bool {
    catch_chance(base_experience) >= roll
}

/// Draws a uniform catch roll in `0..100`.
pub fn roll_catch() -> u32 {
    rand::thread_rng().gen_range(0..100)
}

// == Pokedex ==
/// A caught Pokemon and when it was caught.
#[derive(Debug, Clone)]
pub struct CaughtPokemon {
    pub pokemon: Pokemon,
    pub caught_at: DateTime<Utc>,
}

/// Caught Pokemon keyed by name.
#[derive(Debug, Default)]
pub struct Pokedex {
    caught: BTreeMap<String, CaughtPokemon>,
}

impl Pokedex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a catch. Catching the same Pokemon again refreshes the record.
    pub fn insert(&mut self, pokemon: Pokemon) {
        self.caught.insert(
            pokemon.name.clone(),
            CaughtPokemon {
                pokemon,
                caught_at: Utc::now(),
            },
        );
    }

    pub fn get(&self, name: &str) -> Option<&CaughtPokemon> {
        self.caught.get(name)
    }

    /// Names of all caught Pokemon in alphabetical order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.caught.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.caught.len()
    }

    pub fn is_empty(&self) -> bool {
        self.caught.is_empty()
    }
}
