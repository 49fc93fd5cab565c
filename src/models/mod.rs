//! PokeAPI response models
//!
//! Typed views of the JSON bodies the fetch layer decodes. Only the fields the
//! REPL prints are mapped; everything else in the responses is ignored.

pub mod location;
pub mod pokemon;

// Re-export commonly used types
pub use location::{LocationArea, LocationAreaPage, NamedResource, PokemonEncounter};
pub use pokemon::{Pokemon, PokemonStat, PokemonType};
