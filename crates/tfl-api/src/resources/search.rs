//! `/Search` - free-text search across the API's entities.

use serde::Deserialize;
use tracing::instrument;

use crate::client::TflClient;
use crate::error::Result;

/// Wrapper for the `/Search` section.
#[derive(Debug, Clone, Copy)]
pub struct Search<'a> {
    client: &'a TflClient,
}

impl<'a> Search<'a> {
    pub(crate) const fn new(client: &'a TflClient) -> Self {
        Self { client }
    }

    /// Searches the public transport network.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request fails, the API reports a
    /// non-success status, or the response cannot be decoded.
    #[instrument(skip_all)]
    pub async fn all(&self, query: &str) -> Result<SearchResponse> {
        self.client
            .get_json("Search", &[("query", String::from(query))])
            .await
    }

    /// Searches bus schedules.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request fails, the API reports a
    /// non-success status, or the response cannot be decoded.
    #[instrument(skip_all)]
    pub async fn bus_schedules(&self, query: &str) -> Result<SearchResponse> {
        self.client
            .get_json("Search/BusSchedules", &[("query", String::from(query))])
            .await
    }

    /// Fetches the names of the configured search providers.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request fails, the API reports a
    /// non-success status, or the response cannot be decoded.
    #[instrument(skip_all)]
    pub async fn meta_search_providers(&self) -> Result<Vec<String>> {
        self.client.get_json("Search/Meta/SearchProviders", &[]).await
    }

    /// Fetches the searchable category names.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request fails, the API reports a
    /// non-success status, or the response cannot be decoded.
    #[instrument(skip_all)]
    pub async fn meta_categories(&self) -> Result<Vec<String>> {
        self.client.get_json("Search/Meta/Categories", &[]).await
    }

    /// Fetches the supported sort orders.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request fails, the API reports a
    /// non-success status, or the response cannot be decoded.
    #[instrument(skip_all)]
    pub async fn meta_sorts(&self) -> Result<Vec<String>> {
        self.client.get_json("Search/Meta/Sorts", &[]).await
    }
}

/// Search response envelope.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    /// The query as understood by the API.
    pub query: Option<String>,
    /// Zero-based page offset.
    pub from: Option<u32>,
    /// Page number.
    pub page: Option<u32>,
    /// Page size.
    pub page_size: Option<u32>,
    /// Search provider that answered.
    pub provider: Option<String>,
    /// Total matches across all pages.
    pub total: Option<u32>,
    /// Highest match score.
    pub max_score: Option<f64>,
    /// The matches on this page.
    #[serde(default)]
    pub matches: Vec<SearchMatch>,
}

/// One search hit.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchMatch {
    /// Entity identifier.
    pub id: Option<String>,
    /// Entity display name.
    pub name: Option<String>,
    /// API URL of the entity.
    pub url: Option<String>,
    /// WGS84 latitude.
    pub lat: Option<f64>,
    /// WGS84 longitude.
    pub lon: Option<f64>,
}
