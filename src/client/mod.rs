//! Client Module
//!
//! HTTP access to PokeAPI, routed through the response cache.

mod pokeapi;

pub use pokeapi::PokeApiClient;
