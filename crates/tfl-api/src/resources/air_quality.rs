//! `/AirQuality` - London air quality forecast.

use serde::Deserialize;
use tracing::instrument;

use crate::client::TflClient;
use crate::error::Result;

/// Wrapper for the `/AirQuality` section.
#[derive(Debug, Clone, Copy)]
pub struct AirQuality<'a> {
    client: &'a TflClient,
}

impl<'a> AirQuality<'a> {
    pub(crate) const fn new(client: &'a TflClient) -> Self {
        Self { client }
    }

    /// Fetches the current and future air quality forecast.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request fails, the API reports a
    /// non-success status, or the response cannot be decoded.
    #[instrument(skip_all)]
    pub async fn forecast(&self) -> Result<AirQualityReport> {
        self.client.get_json("AirQuality", &[]).await
    }
}

/// Air quality forecast document.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AirQualityReport {
    /// How often the forecast is updated.
    pub update_period: Option<String>,
    /// Update cadence within the period.
    pub update_frequency: Option<String>,
    /// Public forecast page.
    #[serde(rename = "forecastURL")]
    pub forecast_url: Option<String>,
    /// Legal disclaimer.
    pub disclaimer_text: Option<String>,
    /// Current and future forecast bands.
    #[serde(default)]
    pub current_forecast: Vec<AirQualityForecast>,
}

/// One forecast band (current or future).
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AirQualityForecast {
    /// `"Current"` or `"Future"`.
    pub forecast_type: Option<String>,
    /// Forecast identifier.
    #[serde(rename = "forecastID")]
    pub forecast_id: Option<String>,
    /// Overall pollution band (`"Low"`, `"Moderate"`, ...).
    pub forecast_band: Option<String>,
    /// One-line summary.
    pub forecast_summary: Option<String>,
    /// Nitrogen dioxide band.
    #[serde(rename = "nO2Band")]
    pub no2_band: Option<String>,
    /// Ozone band.
    #[serde(rename = "o3Band")]
    pub o3_band: Option<String>,
    /// PM10 particulate band.
    #[serde(rename = "pM10Band")]
    pub pm10_band: Option<String>,
    /// PM2.5 particulate band.
    #[serde(rename = "pM25Band")]
    pub pm25_band: Option<String>,
    /// Sulphur dioxide band.
    #[serde(rename = "sO2Band")]
    pub so2_band: Option<String>,
    /// Full forecast text.
    pub forecast_text: Option<String>,
}
