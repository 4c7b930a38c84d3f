//! `/Vehicle` - arrival predictions by vehicle id.

use tracing::instrument;

use crate::client::TflClient;
use crate::error::Result;
use crate::types::Prediction;

/// Wrapper for the `/Vehicle` section.
#[derive(Debug, Clone, Copy)]
pub struct Vehicle<'a> {
    client: &'a TflClient,
}

impl<'a> Vehicle<'a> {
    pub(crate) const fn new(client: &'a TflClient) -> Self {
        Self { client }
    }

    /// Fetches arrival predictions for the given vehicle registrations.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request fails, the API reports a
    /// non-success status, or the response cannot be decoded.
    #[instrument(skip_all)]
    pub async fn arrivals(&self, ids: &[&str]) -> Result<Vec<Prediction>> {
        let path = format!("Vehicle/{}/Arrivals", ids.join(","));
        self.client.get_json(&path, &[]).await
    }
}
