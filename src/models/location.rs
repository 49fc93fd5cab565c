//! Location area response shapes
//!
//! Mirrors the subset of PokeAPI's `location-area` resources the REPL reads.

use serde::Deserialize;

/// A `{ name, url }` reference to another API resource
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NamedResource {
    pub name: String,
    pub url: String,
}

/// One page of `GET /location-area/`
///
/// `next` and `previous` are `null` at either end of the listing.
#[derive(Debug, Clone, Deserialize)]
pub struct LocationAreaPage {
    /// Total number of location areas across all pages
    pub count: u32,
    /// URL of the following page
    pub next: Option<String>,
    /// URL of the preceding page
    pub previous: Option<String>,
    /// Areas on this page
    pub results: Vec<NamedResource>,
}

/// A single location area, `GET /location-area/{name}`
#[derive(Debug, Clone, Deserialize)]
pub struct LocationArea {
    pub name: String,
    #[serde(default)]
    pub pokemon_encounters: Vec<PokemonEncounter>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PokemonEncounter {
    pub pokemon: NamedResource,
}

impl LocationArea {
    /// Names of every Pokémon that can be encountered in the area.
    pub fn pokemon_names(&self) -> impl Iterator<Item = &str> {
        self.pokemon_encounters
            .iter()
            .map(|encounter| encounter.pokemon.name.as_str())
    }
}
