//! PokeAPI client
//!
//! Every GET goes through the [`ExpiringCache`]: a hit is decoded straight
//! from the cached body, a miss hits the network and stores the body
//! before decoding.

use std::time::Duration;

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::cache::ExpiringCache;
use crate::config::Config;
use crate::error::{PokedexError, Result};
use crate::models::{LocationAreaDetails, LocationAreaPage, Pokemon};

/// Request timeout used by [`PokeApiClient::with_base_url`].
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Cached PokeAPI client.
#[derive(Debug)]
pub struct PokeApiClient {
    http: reqwest::Client,
    base_url: String,
    cache: ExpiringCache,
}

impl PokeApiClient {
    /// Creates a client from configuration, taking ownership of `cache`.
    pub fn new(config: &Config, cache: ExpiringCache) -> Result<Self> {
        Self::build(&config.api_base_url, config.request_timeout(), cache)
    }

    /// Creates a client against a custom base URL (used by tests with wiremock).
    pub fn with_base_url(base_url: &str, cache: ExpiringCache) -> Result<Self> {
        Self::build(base_url, DEFAULT_TIMEOUT, cache)
    }

    fn build(base_url: &str, timeout: Duration, cache: ExpiringCache) -> Result<Self> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            cache,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn cache(&self) -> &ExpiringCache {
        &self.cache
    }

    /// Gives the cache back, typically to shut its reaper down.
    pub fn into_cache(self) -> ExpiringCache {
        self.cache
    }

    /// URL of the first location area page.
    pub fn location_areas_url(&self) -> String {
        format!("{}/location-area/", self.base_url)
    }

    /// Fetches one page of location areas.
    ///
    /// `page_url` is a `next`/`previous` link from an earlier page; `None`
    /// requests the first page.
    pub async fn location_areas(&self, page_url: Option<&str>) -> Result<LocationAreaPage> {
        match page_url {
            Some(url) => self.fetch(url).await,
            None => self.fetch(&self.location_areas_url()).await,
        }
    }

    /// Fetches a single location area with its encounters.
    pub async fn location_area(&self, name: &str) -> Result<LocationAreaDetails> {
        let url = format!("{}/location-area/{}", self.base_url, name);
        self.fetch(&url).await
    }

    /// Fetches a single pokemon.
    pub async fn pokemon(&self, name: &str) -> Result<Pokemon> {
        let url = format!("{}/pokemon/{}", self.base_url, name);
        self.fetch(&url).await
    }

    /// Fetches `url` through the cache and decodes the JSON body.
    async fn fetch<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let body = self.fetch_bytes(url).await?;
        serde_json::from_slice(&body).map_err(|source| PokedexError::Decode {
            url: url.to_string(),
            source,
        })
    }

    /// Returns the raw body for `url`, from the cache when present.
    ///
    /// Only successful responses are cached.
    async fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>> {
        if let Some(body) = self.cache.get(url).await {
            debug!(url, "Using cached data");
            return Ok(body);
        }

        debug!(url, "Fetching data from API");
        let response = self.http.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(PokedexError::Status {
                status,
                url: url.to_string(),
            });
        }

        let body = response.bytes().await?.to_vec();
        self.cache.add(url, body.clone()).await;
        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_base_url_trailing_slash_trimmed() {
        let cache = ExpiringCache::new(Duration::from_secs(60));
        let client = PokeApiClient::with_base_url("http://localhost:1234/api/v2/", cache).unwrap();

        assert_eq!(client.base_url(), "http://localhost:1234/api/v2");
        assert_eq!(
            client.location_areas_url(),
            "http://localhost:1234/api/v2/location-area/"
        );
        client.into_cache().shutdown().await;
    }

    #[tokio::test]
    async fn test_cached_body_skips_network() {
        // Nothing listens on this port; a network call would fail
        let base = "http://127.0.0.1:9";
        let cache = ExpiringCache::new(Duration::from_secs(60));
        cache
            .add(
                format!("{}/pokemon/ditto", base),
                br#"{"id": 132, "name": "ditto", "base_experience": 101}"#.to_vec(),
            )
            .await;
        let client = PokeApiClient::with_base_url(base, cache).unwrap();

        let pokemon = client.pokemon("ditto").await.unwrap();

        assert_eq!(pokemon.id, 132);
        assert_eq!(pokemon.base_experience, Some(101));
        client.into_cache().shutdown().await;
    }

    #[tokio::test]
    async fn test_cached_body_decode_error() {
        let base = "http://127.0.0.1:9";
        let cache = ExpiringCache::new(Duration::from_secs(60));
        cache
            .add(format!("{}/location-area/broken", base), b"not json".to_vec())
            .await;
        let client = PokeApiClient::with_base_url(base, cache).unwrap();

        let result = client.location_area("broken").await;

        assert!(matches!(result, Err(PokedexError::Decode { .. })));
        client.into_cache().shutdown().await;
    }
}
