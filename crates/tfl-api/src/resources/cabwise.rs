//! `/Cabwise` - licensed taxi and private hire operator search.
//!
//! Cabwise predates the rest of the Unified API; its JSON uses PascalCase
//! keys and a nested `Operators.OperatorList` envelope.

use serde::Deserialize;
use tracing::instrument;

use crate::client::TflClient;
use crate::error::Result;

/// Wrapper for the `/Cabwise` section.
#[derive(Debug, Clone, Copy)]
pub struct Cabwise<'a> {
    client: &'a TflClient,
}

impl<'a> Cabwise<'a> {
    pub(crate) const fn new(client: &'a TflClient) -> Self {
        Self { client }
    }

    /// Searches taxi and private hire operators around a location.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request fails, the API reports a
    /// non-success status, or the response cannot be decoded.
    #[instrument(skip_all)]
    pub async fn search(
        &self,
        lat: f64,
        lon: f64,
        params: &CabwiseSearchParams,
    ) -> Result<CabwiseResponse> {
        let mut query: Vec<(&str, String)> =
            vec![("lat", lat.to_string()), ("lon", lon.to_string())];

        if let Some(ref optype) = params.optype {
            query.push(("optype", optype.clone()));
        }
        if let Some(ref name) = params.name {
            query.push(("name", name.clone()));
        }
        if let Some(radius) = params.radius {
            query.push(("radius", radius.to_string()));
        }
        if let Some(max_results) = params.max_results {
            query.push(("maxResults", max_results.to_string()));
        }
        if let Some(wc) = params.wheelchair_accessible {
            query.push(("wc", wc.to_string()));
        }
        if let Some(around_the_clock) = params.twenty_four_seven_only {
            query.push(("twentyFourSevenOnly", around_the_clock.to_string()));
        }

        self.client.get_json("Cabwise/search", &query).await
    }
}

/// Optional filters for [`Cabwise::search`].
#[derive(Debug, Clone, Default)]
pub struct CabwiseSearchParams {
    /// Operator type (`"Taxi"` or `"Minicab"`).
    pub optype: Option<String>,
    /// Trading-name filter.
    pub name: Option<String>,
    /// Search radius in metres.
    pub radius: Option<f64>,
    /// Maximum number of operators to return.
    pub max_results: Option<u32>,
    /// Only wheelchair-accessible operators.
    pub wheelchair_accessible: Option<bool>,
    /// Only operators open around the clock.
    pub twenty_four_seven_only: Option<bool>,
}

impl CabwiseSearchParams {
    /// Creates empty params (no filters).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the operator type filter.
    #[must_use]
    pub fn optype(mut self, optype: impl Into<String>) -> Self {
        self.optype = Some(optype.into());
        self
    }

    /// Sets the search radius in metres.
    #[must_use]
    pub const fn radius(mut self, radius: f64) -> Self {
        self.radius = Some(radius);
        self
    }

    /// Sets the maximum number of operators returned.
    #[must_use]
    pub const fn max_results(mut self, max_results: u32) -> Self {
        self.max_results = Some(max_results);
        self
    }
}

/// Cabwise search envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct CabwiseResponse {
    /// Operator list wrapper.
    #[serde(rename = "Operators")]
    pub operators: Option<CabwiseOperators>,
}

impl CabwiseResponse {
    /// Flattens the envelope into the operator list.
    #[must_use]
    pub fn into_operators(self) -> Vec<CabOperator> {
        self.operators.map_or_else(Vec::new, |o| o.operator_list)
    }
}

/// Inner `Operators` wrapper.
#[derive(Debug, Clone, Deserialize)]
pub struct CabwiseOperators {
    /// The matched operators.
    #[serde(rename = "OperatorList", default)]
    pub operator_list: Vec<CabOperator>,
}

/// A licensed taxi or private hire operator.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CabOperator {
    /// Licensing centre identifier.
    pub centre_id: Option<u64>,
    /// Registered organisation name.
    pub organisation_name: Option<String>,
    /// Public trading name.
    pub trading_name: Option<String>,
    /// Booking phone number.
    pub bookings_phone_number: Option<String>,
    /// Booking e-mail address.
    pub bookings_email: Option<String>,
    /// First address line.
    pub address_line1: Option<String>,
    /// Postcode.
    pub postcode: Option<String>,
    /// WGS84 latitude of the operating centre.
    pub latitude: Option<f64>,
    /// WGS84 longitude of the operating centre.
    pub longitude: Option<f64>,
    /// Operator categories (`"Taxi"`, `"Minicab"`, ...).
    #[serde(default)]
    pub operator_types: Vec<String>,
    /// Distance in metres from the search origin.
    pub distance: Option<f64>,
}
