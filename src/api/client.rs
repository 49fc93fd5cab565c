//! PokeAPI client
//!
//! Every request goes through the response cache first. Cache keys are full
//! request URLs and cached values are raw response bodies; decoding happens
//! here, after the cache, on every call.

use bytes::Bytes;
use reqwest::Url;
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};

use crate::cache::Cache;
use crate::error::{PokedexError, Result};
use crate::models::{LocationArea, LocationAreaPage, Pokemon};

/// HTTP client for PokeAPI backed by an expiring response cache.
#[derive(Debug, Clone)]
pub struct PokeApiClient {
    http: reqwest::Client,
    base_url: Url,
    cache: Cache,
}

impl PokeApiClient {
    /// Creates a client rooted at `base_url` (e.g. `https://pokeapi.co/api/v2`).
    ///
    /// Fails if `base_url` is not an absolute URL that paths can be appended to.
    pub fn new(base_url: impl AsRef<str>, cache: Cache) -> Result<Self> {
        let raw = base_url.as_ref();
        let invalid = |reason: String| PokedexError::InvalidBaseUrl {
            url: raw.to_string(),
            reason,
        };

        let base_url = Url::parse(raw).map_err(|err| invalid(err.to_string()))?;
        if base_url.cannot_be_a_base() {
            return Err(invalid("cannot have path segments".to_string()));
        }

        let http = reqwest::Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            base_url,
            cache,
        })
    }

    /// URL of the first page of location areas.
    pub fn first_page_url(&self) -> String {
        self.join(&["location-area", ""])
    }

    // == Cache ==
    /// The response cache this client reads through.
    pub fn cache(&self) -> &Cache {
        &self.cache
    }

    // == Resource URL ==
    /// URL of the named item of `resource`, e.g. `{base}/pokemon/pidgey`.
    ///
    /// `name` always ends up as exactly one path segment: `/`, `?`, `#` and
    /// `%` are percent-encoded. Empty, `.` and `..` names are rejected.
    pub fn resource_url(&self, resource: &str, name: &str) -> Result<String> {
        if name.is_empty() || name == "." || name == ".." {
            return Err(PokedexError::InvalidName(name.to_string()));
        }
        Ok(self.join(&[resource, name]))
    }

    fn join(&self, segments: &[&str]) -> String {
        let mut url = self.base_url.clone();
        // Checked in `new`: the base URL always has path segments
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url.into()
    }

    // == Fetch Bytes ==
    /// Returns the body at `url`, from the cache when possible.
    ///
    /// On a miss the URL is fetched, and a successful body is cached verbatim
    /// before being returned. Failed requests are never cached.
    #[instrument(level = "debug", skip(self))]
    pub async fn fetch_bytes(&self, url: &str) -> Result<Bytes> {
        if let Some(body) = self.cache.get(url).await {
            debug!(bytes = body.len(), "Cache hit");
            return Ok(body);
        }

        debug!("Cache miss, fetching");
        let response = self.http.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(PokedexError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await?;
        self.cache.add(url, body.clone()).await;
        Ok(body)
    }

    /// Fetches `url` and decodes it as JSON.
    pub async fn fetch_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let body = self.fetch_bytes(url).await?;
        serde_json::from_slice(&body).map_err(|source| PokedexError::Decode {
            url: url.to_string(),
            source,
        })
    }

    // == Resources ==
    /// Fetches one page of the location area listing.
    pub async fn location_areas(&self, page_url: &str) -> Result<LocationAreaPage> {
        self.fetch_json(page_url).await
    }

    /// Fetches a single location area by name.
    pub async fn location_area(&self, name: &str) -> Result<LocationArea> {
        let url = self.resource_url("location-area", name)?;
        self.fetch_json(&url).await
    }

    /// Fetches a Pokémon by name.
    pub async fn pokemon(&self, name: &str) -> Result<Pokemon> {
        let url = self.resource_url("pokemon", name)?;
        self.fetch_json(&url).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn test_first_page_url_strips_trailing_slash() {
        let (cache, reaper) = Cache::new(Duration::from_secs(60), Duration::from_secs(10));
        let client = PokeApiClient::new("https://pokeapi.co/api/v2/", cache).unwrap();

        assert_eq!(
            client.first_page_url(),
            "https://pokeapi.co/api/v2/location-area/"
        );
        reaper.shutdown().await;
    }

    #[tokio::test]
    async fn test_cached_body_skips_network() {
        let (cache, reaper) = Cache::new(Duration::from_secs(60), Duration::from_secs(10));
        // Unroutable host: any real request would fail
        let client = PokeApiClient::new("http://127.0.0.1:9", cache.clone()).unwrap();
        let url = client.first_page_url();

        cache
            .add(
                url.clone(),
                r#"{"count":1,"next":null,"previous":null,"results":[{"name":"a","url":"u"}]}"#,
            )
            .await;

        let page = client.location_areas(&url).await.unwrap();
        assert_eq!(page.results[0].name, "a");
        reaper.shutdown().await;
    }

    #[tokio::test]
    async fn test_malformed_cached_body_is_decode_error() {
        let (cache, reaper) = Cache::new(Duration::from_secs(60), Duration::from_secs(10));
        let client = PokeApiClient::new("http://127.0.0.1:9", cache.clone()).unwrap();
        let url = client.first_page_url();

        cache.add(url.clone(), "not json").await;

        let result = client.location_areas(&url).await;
        assert!(matches!(result, Err(PokedexError::Decode { .. })));
        reaper.shutdown().await;
    }

    #[tokio::test]
    async fn test_resource_url_keeps_name_in_one_segment() {
        let (cache, reaper) = Cache::new(Duration::from_secs(60), Duration::from_secs(10));
        let client = PokeApiClient::new("http://127.0.0.1:9/api/v2", cache).unwrap();

        assert_eq!(
            client.resource_url("pokemon", "pidgey").unwrap(),
            "http://127.0.0.1:9/api/v2/pokemon/pidgey"
        );
        assert_eq!(
            client.resource_url("pokemon", "pidgey?x").unwrap(),
            "http://127.0.0.1:9/api/v2/pokemon/pidgey%3Fx"
        );
        assert_eq!(
            client.resource_url("location-area", "../pokemon/pidgey").unwrap(),
            "http://127.0.0.1:9/api/v2/location-area/..%2Fpokemon%2Fpidgey"
        );
        assert_eq!(
            client.resource_url("pokemon", "100%#1").unwrap(),
            "http://127.0.0.1:9/api/v2/pokemon/100%25%231"
        );
        reaper.shutdown().await;
    }

    #[tokio::test]
    async fn test_dot_names_are_rejected() {
        let (cache, reaper) = Cache::new(Duration::from_secs(60), Duration::from_secs(10));
        let client = PokeApiClient::new("http://127.0.0.1:9/api/v2", cache).unwrap();

        for name in [".", ".."] {
            let result = client.location_area(name).await;
            assert!(matches!(result, Err(PokedexError::InvalidName(n)) if n == name));
        }
        assert!(client.cache().is_empty().await);
        reaper.shutdown().await;
    }

    #[tokio::test]
    async fn test_invalid_base_url() {
        for base in ["not a url", "mailto:ash@example.com"] {
            let (cache, reaper) = Cache::new(Duration::from_secs(60), Duration::from_secs(10));
            let result = PokeApiClient::new(base, cache);
            assert!(
                matches!(result, Err(PokedexError::InvalidBaseUrl { ref url, .. }) if url == base),
                "base: {}",
                base
            );
            reaper.shutdown().await;
        }
    }
}
