//! `/crowding` - station crowding relative to a pre-pandemic baseline.

use serde::Deserialize;
use tracing::instrument;

use crate::client::TflClient;
use crate::error::Result;

/// Wrapper for the `/crowding` section.
#[derive(Debug, Clone, Copy)]
pub struct Crowding<'a> {
    client: &'a TflClient,
}

impl<'a> Crowding<'a> {
    pub(crate) const fn new(client: &'a TflClient) -> Self {
        Self { client }
    }

    /// Fetches weekly crowding data for a station by NaPTAN code.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request fails, the API reports a
    /// non-success status, or the response cannot be decoded.
    #[instrument(skip_all)]
    pub async fn naptan(&self, naptan_id: &str) -> Result<CrowdingInfo> {
        let path = format!("crowding/{naptan_id}");
        self.client.get_json(&path, &[]).await
    }

    /// Fetches crowding data for one day of the week (`"Mon"` ... `"Sun"`).
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request fails, the API reports a
    /// non-success status, or the response cannot be decoded.
    #[instrument(skip_all)]
    pub async fn day_of_week(&self, naptan_id: &str, day: &str) -> Result<CrowdingInfo> {
        let path = format!("crowding/{naptan_id}/{day}");
        self.client.get_json(&path, &[]).await
    }

    /// Fetches the live crowding level for a station.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request fails, the API reports a
    /// non-success status, or the response cannot be decoded.
    #[instrument(skip_all)]
    pub async fn live(&self, naptan_id: &str) -> Result<LiveCrowding> {
        let path = format!("crowding/{naptan_id}/Live");
        self.client.get_json(&path, &[]).await
    }
}

/// Weekly crowding profile for a station.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CrowdingInfo {
    /// Per-day crowding profiles.
    #[serde(default)]
    pub days_of_week: Vec<DayOfWeekCrowding>,
}

/// Crowding profile for one day of the week.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayOfWeekCrowding {
    /// Day name (`"MON"` ... `"SUN"`).
    pub day_of_week: Option<String>,
    /// Morning peak window.
    pub am_peak_time_band: Option<String>,
    /// Evening peak window.
    pub pm_peak_time_band: Option<String>,
    /// Quarter-hour crowding bands.
    #[serde(default)]
    pub time_bands: Vec<TimeBandCrowding>,
}

/// Crowding level for one quarter-hour band.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeBandCrowding {
    /// Band window (e.g. `"07:45-08:00"`).
    pub time_band: Option<String>,
    /// Fraction of the baseline (1.0 = typical).
    #[serde(rename = "percentageOfBaseLine")]
    pub percentage_of_base_line: Option<f64>,
}

/// Live crowding level for a station.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LiveCrowding {
    /// Whether live data exists for the station.
    #[serde(default)]
    pub data_available: bool,
    /// Fraction of the baseline right now.
    pub percentage_of_baseline: Option<f64>,
}
