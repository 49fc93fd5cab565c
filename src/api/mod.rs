//! API Module
//!
//! Fetch layer for the remote PokeAPI.
//!
//! # Resources
//! - `GET /location-area/` - Paginated list of location areas
//! - `GET /location-area/{name}` - Pokémon encounters in one area
//! - `GET /pokemon/{name}` - A single Pokémon

pub mod client;

pub use client::PokeApiClient;
