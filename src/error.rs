//! Error types for the fetch layer and the REPL
//!
//! The cache itself is infallible; everything here originates in the network,
//! in response decoding, or in user input.

use thiserror::Error;

// == Pokedex Error Enum ==
/// Unified error type for fetching and command handling.
#[derive(Error, Debug)]
pub enum PokedexError {
    /// Transport-level failure talking to the API
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-success status
    #[error("Unexpected status {status} from {url}")]
    Status { url: String, status: u16 },

    /// The response body was not the JSON shape we expected
    #[error("Malformed response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    /// The configured API root cannot be used to build request URLs
    #[error("Invalid API base URL {url}: {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    /// A resource name that cannot stand as a single path segment
    #[error("invalid name: {0:?}")]
    InvalidName(String),

    /// Input did not name a registered command
    #[error("Unknown command")]
    UnknownCommand(String),

    /// A command that needs an argument was given none
    #[error("Usage: {0}")]
    MissingArgument(&'static str),

    /// `inspect` on a Pokémon that is not in the Pokédex
    #[error("you have not caught {0}")]
    NotCaught(String),

    /// Reading input or writing output failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

// == Result Type Alias ==
/// Convenience Result type for the Pokedex.
pub type Result<T> = std::result::Result<T, PokedexError>;
