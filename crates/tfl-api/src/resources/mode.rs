//! `/Mode` - per-mode arrivals and active service types.

use serde::Deserialize;
use tracing::instrument;

use crate::client::TflClient;
use crate::error::Result;
use crate::types::Prediction;

/// Wrapper for the `/Mode` section.
#[derive(Debug, Clone, Copy)]
pub struct Mode<'a> {
    client: &'a TflClient,
}

impl<'a> Mode<'a> {
    pub(crate) const fn new(client: &'a TflClient) -> Self {
        Self { client }
    }

    /// Fetches the currently active service types (e.g. night service).
    ///
    /// Only supported for the `tube` mode on the live API.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request fails, the API reports a
    /// non-success status, or the response cannot be decoded.
    #[instrument(skip_all)]
    pub async fn active_service_types(&self) -> Result<Vec<ActiveServiceType>> {
        self.client.get_json("Mode/ActiveServiceTypes", &[]).await
    }

    /// Fetches the next arrival predictions for every stop on a mode.
    ///
    /// `count` limits predictions per stop; `None` uses the API default.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request fails, the API reports a
    /// non-success status, or the response cannot be decoded.
    #[instrument(skip_all)]
    pub async fn arrivals(&self, mode: &str, count: Option<u32>) -> Result<Vec<Prediction>> {
        let path = format!("Mode/{mode}/Arrivals");
        let mut query: Vec<(&str, String)> = Vec::new();
        if let Some(count) = count {
            query.push(("count", count.to_string()));
        }
        self.client.get_json(&path, &query).await
    }
}

/// An active service type for a mode.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActiveServiceType {
    /// Transport mode.
    pub mode: Option<String>,
    /// Service type name (`"Regular"`, `"Night"`).
    pub service_type: Option<String>,
}
