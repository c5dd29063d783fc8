//! Error types for the Pokedex client
//!
//! Provides unified error handling using thiserror.

use reqwest::StatusCode;
use thiserror::Error;

// == Pokedex Error Enum ==
/// Unified error type for the Pokedex client.
#[derive(Error, Debug)]
pub enum PokedexError {
    /// Cache constructed with a zero expiration interval
    #[error("Cache interval must be greater than zero")]
    InvalidInterval,

    /// Cache constructed outside a tokio runtime
    #[error("Cache sweep requires a running tokio runtime")]
    NoRuntime,

    /// Transport-level HTTP failure
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// PokeAPI answered with a non-success status
    #[error("Request to {url} failed with status {status}")]
    Status { status: StatusCode, url: String },

    /// Response body was not the expected JSON
    #[error("Malformed response: {0}")]
    Decode(#[from] serde_json::Error),

    /// First word of the input is not a known command
    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    /// Command needs an argument that was not given
    #[error("Usage: {command} <{argument}>")]
    MissingArgument {
        command: &'static str,
        argument: &'static str,
    },

    /// Pokemon is not in the pokedex
    #[error("you have not caught {0}")]
    NotCaught(String),

    /// Reading input or writing output failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl PokedexError {
    /// Returns true when PokeAPI reported the resource does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, PokedexError::Status { status, .. } if *status == StatusCode::NOT_FOUND)
    }
}

// == Result Type Alias ==
/// Convenience Result type for the Pokedex client.
pub type Result<T> = std::result::Result<T, PokedexError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_detection() {
        let missing = PokedexError::Status {
            status: StatusCode::NOT_FOUND,
            url: "https://pokeapi.co/api/v2/pokemon/missingno".to_string(),
        };
        let server = PokedexError::Status {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            url: "https://pokeapi.co/api/v2/pokemon/pikachu".to_string(),
        };

        assert!(missing.is_not_found());
        assert!(!server.is_not_found());
        assert!(!PokedexError::InvalidInterval.is_not_found());
    }

    #[test]
    fn test_missing_argument_message() {
        let err = PokedexError::MissingArgument {
            command: "explore",
            argument: "area",
        };
        assert_eq!(err.to_string(), "Usage: explore <area>");
    }
}
