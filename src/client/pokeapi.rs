//! PokeAPI Client
//!
//! Cache-through HTTP client. Every request URL is first looked up in the
//! [`ResponseCache`]; only misses reach the network, and successful bodies
//! are stored under their URL before being decoded.

use std::sync::Arc;

use bytes::Bytes;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::cache::ResponseCache;
use crate::config::Config;
use crate::error::{PokedexError, Result};
use crate::models::{LocationArea, LocationAreaPage, Pokemon};

/// Client for the PokeAPI REST endpoints.
///
/// Concurrent misses on the same URL each go to the network; there is no
/// request de-duplication.
#[derive(Debug, Clone)]
pub struct PokeApiClient {
    http: reqwest::Client,
    base_url: String,
    cache: Arc<ResponseCache>,
}

impl PokeApiClient {
    /// Creates a client against `config.base_url` that stores responses in `cache`.
    pub fn new(config: &Config, cache: Arc<ResponseCache>) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.http_timeout())
            .user_agent(concat!("pokedex/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            cache,
        })
    }

    /// Returns the response cache shared with this client.
    pub fn cache(&self) -> &ResponseCache {
        &self.cache
    }

    // == URLs ==
    /// URL of the first page of location areas.
    pub fn first_location_page_url(&self) -> String {
        format!("{}/location-area/", self.base_url)
    }

    /// URL of a single location area by name or id.
    pub fn location_area_url(&self, name: &str) -> String {
        format!("{}/location-area/{}", self.base_url, name)
    }

    /// URL of a single Pokemon by name or id.
    pub fn pokemon_url(&self, name: &str) -> String {
        format!("{}/pokemon/{}", self.base_url, name)
    }

    // == Endpoints ==
    /// Fetches a page of location areas. `None` fetches the first page.
    pub async fn location_areas(&self, page_url: Option<&str>) -> Result<LocationAreaPage> {
        match page_url {
            Some(url) => self.fetch_json(url).await,
            None => self.fetch_json(&self.first_location_page_url()).await,
        }
    }

    /// Fetches one location area with its Pokemon encounters.
    pub async fn location_area(&self, name: &str) -> Result<LocationArea> {
        self.fetch_json(&self.location_area_url(name)).await
    }

    /// Fetches one Pokemon.
    pub async fn pokemon(&self, name: &str) -> Result<Pokemon> {
        self.fetch_json(&self.pokemon_url(name)).await
    }

    // == Fetch ==
    /// Returns the raw body for `url`, from the cache when possible.
    ///
    /// Non-success responses are returned as [`PokedexError::Status`] and are
    /// never cached.
    pub async fn fetch_bytes(&self, url: &str) -> Result<Bytes> {
        if let Some(body) = self.cache.get(url) {
            debug!(url, "Serving response from cache");
            return Ok(body);
        }

        debug!(url, "Fetching from PokeAPI");
        let response = self.http.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            warn!(url, %status, "PokeAPI request failed");
            return Err(PokedexError::Status {
                status,
                url: url.to_string(),
            });
        }

        let body = response.bytes().await?;
        self.cache.add(url, body.clone());
        Ok(body)
    }

    async fn fetch_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let body = self.fetch_bytes(url).await?;
        Ok(serde_json::from_slice(&body)?)
    }
}
