//! PokeAPI payload models
//!
//! Serde views over the JSON documents PokeAPI returns. Only the fields the
//! commands use are modeled; everything else in a payload is ignored.

pub mod location;
pub mod pokemon;

// Re-export commonly used types
pub use location::{LocationArea, LocationAreaPage, PokemonEncounter};
pub use pokemon::{Pokemon, PokemonStat, PokemonType};

use serde::Deserialize;

/// A name plus the URL of the full resource, PokeAPI's standard link shape.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NamedResource {
    pub name: String,
    pub url: String,
}
