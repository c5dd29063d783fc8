//! Pokedex - A command-line client for PokeAPI
//!
//! Browse location areas, explore them, and catch Pokemon. API responses are
//! memoized in a time-expiring cache swept by a background task.

pub mod cache;
pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod pokedex;
pub mod repl;
pub mod tasks;

pub use cache::ResponseCache;
pub use client::PokeApiClient;
pub use config::Config;
pub use error::{PokedexError, Result};
pub use repl::{run, Session};
