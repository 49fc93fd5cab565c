//! Pokémon response shape, `GET /pokemon/{name}`

use serde::Deserialize;

use super::NamedResource;

#[derive(Debug, Clone, Deserialize)]
pub struct Pokemon {
    pub name: String,
    /// Experience gained for defeating it; drives the catch roll
    #[serde(default)]
    pub base_experience: Option<u32>,
    /// Height in decimetres
    pub height: u32,
    /// Weight in hectograms
    pub weight: u32,
    #[serde(default)]
    pub stats: Vec<PokemonStat>,
    #[serde(default)]
    pub types: Vec<PokemonType>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PokemonStat {
    pub base_stat: u32,
    pub stat: NamedResource,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PokemonType {
    pub slot: u8,
    #[serde(rename = "type")]
    pub kind: NamedResource,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pokemon_deserialize() {
        let json = r#"{
            "id": 25,
            "name": "pikachu",
            "base_experience": 112,
            "height": 4,
            "weight": 60,
            "stats": [
                {"base_stat": 35, "effort": 0, "stat": {"name": "hp", "url": "s1"}},
                {"base_stat": 55, "effort": 0, "stat": {"name": "attack", "url": "s2"}}
            ],
            "types": [
                {"slot": 1, "type": {"name": "electric", "url": "t1"}}
            ]
        }"#;

        let pokemon: Pokemon = serde_json::from_str(json).unwrap();

        assert_eq!(pokemon.name, "pikachu");
        assert_eq!(pokemon.base_experience, Some(112));
        assert_eq!(pokemon.stats[1].stat.name, "attack");
        assert_eq!(pokemon.stats[1].base_stat, 55);
        assert_eq!(pokemon.types[0].kind.name, "electric");
    }

    #[test]
    fn test_null_base_experience() {
        let json = r#"{"name": "missingno", "base_experience": null, "height": 1, "weight": 1}"#;
        let pokemon: Pokemon = serde_json::from_str(json).unwrap();
        assert_eq!(pokemon.base_experience, None);
        assert!(pokemon.types.is_empty());
    }
}
