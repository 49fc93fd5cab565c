//! Configuration Module
//!
//! Handles loading the Pokedex settings from environment variables.

use std::env;
use std::time::Duration;

use crate::cache::ReadMode;

/// Default PokeAPI root
pub const DEFAULT_API_BASE_URL: &str = "https://pokeapi.co/api/v2";

/// Runtime configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Root URL of the remote API, without a trailing slash
    pub api_base_url: String,
    /// Cache TTL in seconds
    pub cache_ttl: u64,
    /// Reaper sweep interval in seconds
    pub sweep_interval: u64,
    /// Whether cache lookups check entry age themselves
    pub strict_reads: bool,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `POKEDEX_API_BASE_URL` - API root (default: `https://pokeapi.co/api/v2`)
    /// - `POKEDEX_CACHE_TTL` - Cache TTL in seconds (default: 60)
    /// - `POKEDEX_SWEEP_INTERVAL` - Reaper interval in seconds (default: 10)
    /// - `POKEDEX_STRICT_READS` - `true`/`false` (default: false)
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            api_base_url: env::var("POKEDEX_API_BASE_URL")
                .ok()
                .map(|v| v.trim_end_matches('/').to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or(defaults.api_base_url),
            cache_ttl: env::var("POKEDEX_CACHE_TTL")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.cache_ttl),
            sweep_interval: env::var("POKEDEX_SWEEP_INTERVAL")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.sweep_interval),
            strict_reads: env::var("POKEDEX_STRICT_READS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.strict_reads),
        }
    }

    // == Cache TTL ==
    /// Returns the cache TTL as a Duration.
    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl)
    }

    // == Sweep Interval ==
    /// Returns the reaper period as a Duration.
    pub fn sweep_interval(&self) -> Duration {
        Duration::from_secs(self.sweep_interval)
    }

    // == Read Mode ==
    /// Maps `strict_reads` onto the cache's read mode.
    pub fn read_mode(&self) -> ReadMode {
        if self.strict_reads {
            ReadMode::Strict
        } else {
            ReadMode::Lenient
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            cache_ttl: 60,
            sweep_interval: 10,
            strict_reads: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.api_base_url, "https://pokeapi.co/api/v2");
        assert_eq!(config.cache_ttl(), Duration::from_secs(60));
        assert_eq!(config.sweep_interval(), Duration::from_secs(10));
        assert_eq!(config.read_mode(), ReadMode::Lenient);
    }

    #[test]
    fn test_config_from_env() {
        // Single test touches the environment so parallel tests cannot race on it
        env::remove_var("POKEDEX_API_BASE_URL");
        env::remove_var("POKEDEX_CACHE_TTL");
        env::remove_var("POKEDEX_SWEEP_INTERVAL");
        env::remove_var("POKEDEX_STRICT_READS");

        let config = Config::from_env();
        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
        assert_eq!(config.cache_ttl, 60);
        assert_eq!(config.sweep_interval, 10);
        assert!(!config.strict_reads);

        env::set_var("POKEDEX_API_BASE_URL", "http://localhost:8080/api/v2/");
        env::set_var("POKEDEX_CACHE_TTL", "5");
        env::set_var("POKEDEX_SWEEP_INTERVAL", "not-a-number");
        env::set_var("POKEDEX_STRICT_READS", "true");

        let config = Config::from_env();
        assert_eq!(config.api_base_url, "http://localhost:8080/api/v2");
        assert_eq!(config.cache_ttl, 5);
        assert_eq!(config.sweep_interval, 10);
        assert_eq!(config.read_mode(), ReadMode::Strict);

        env::remove_var("POKEDEX_API_BASE_URL");
        env::remove_var("POKEDEX_CACHE_TTL");
        env::remove_var("POKEDEX_SWEEP_INTERVAL");
        env::remove_var("POKEDEX_STRICT_READS");
    }
}
