//! `/BikePoint` - Santander Cycles docking stations.

use tracing::instrument;

use crate::client::TflClient;
use crate::error::Result;
use crate::types::Place;

/// Wrapper for the `/BikePoint` section.
#[derive(Debug, Clone, Copy)]
pub struct BikePoint<'a> {
    client: &'a TflClient,
}

impl<'a> BikePoint<'a> {
    pub(crate) const fn new(client: &'a TflClient) -> Self {
        Self { client }
    }

    /// Fetches all bike point locations.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request fails, the API reports a
    /// non-success status, or the response cannot be decoded.
    #[instrument(skip_all)]
    pub async fn all(&self) -> Result<Vec<Place>> {
        self.client.get_json("BikePoint", &[]).await
    }

    /// Fetches a single bike point by id (e.g. `"BikePoints_785"`).
    ///
    /// # Errors
    ///
    /// Returns [`crate::TflError::NotFound`] for an unknown id, or any
    /// other request/decoding error.
    #[instrument(skip_all)]
    pub async fn get(&self, id: &str) -> Result<Place> {
        let path = format!("BikePoint/{id}");
        self.client.get_json(&path, &[]).await
    }

    /// Searches bike points by name.
    ///
    /// The search matches substrings of the common name; dock/bike counts
    /// are only present in the full [`BikePoint::get`] response.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request fails, the API reports a
    /// non-success status, or the response cannot be decoded.
    #[instrument(skip_all)]
    pub async fn search(&self, query: &str) -> Result<Vec<Place>> {
        self.client
            .get_json("BikePoint/Search", &[("query", String::from(query))])
            .await
    }
}
