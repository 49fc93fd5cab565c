//! Pokedex - An interactive PokeAPI client
//!
//! Provides a REPL for browsing location areas and catching Pokémon, backed by
//! an expiring in-memory response cache with a background reaper.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod repl;
pub mod tasks;

pub use api::PokeApiClient;
pub use cache::{Cache, ReadMode};
pub use config::Config;
pub use error::{PokedexError, Result};
pub use tasks::ReaperHandle;
