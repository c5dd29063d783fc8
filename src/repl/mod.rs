//! REPL Module
//!
//! The interactive front end: input cleaning, command parsing, and the
//! session that executes commands against the PokeAPI client.
//!
//! # Commands
//! - `help` - List commands
//! - `exit` - Quit
//! - `map` / `mapb` - Page forward / back through location areas
//! - `explore <area>` - List Pokemon in an area
//! - `catch <pokemon>` - Try to catch a Pokemon
//! - `inspect <pokemon>` - Show a caught Pokemon
//! - `pokedex` - List caught Pokemon

mod command;
mod session;

pub use command::{clean_input, Command, COMMANDS};
pub use session::{run, Flow, Session};
