//! `/AccidentStats` - road accident records per calendar year.

use serde::Deserialize;
use tracing::instrument;

use crate::client::TflClient;
use crate::error::Result;

/// Wrapper for the `/AccidentStats` section.
#[derive(Debug, Clone, Copy)]
pub struct AccidentStats<'a> {
    client: &'a TflClient,
}

impl<'a> AccidentStats<'a> {
    pub(crate) const fn new(client: &'a TflClient) -> Self {
        Self { client }
    }

    /// Fetches all accident details recorded in the given year.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request fails, the API reports a
    /// non-success status, or the response cannot be decoded.
    #[instrument(skip_all)]
    pub async fn for_year(&self, year: u16) -> Result<Vec<AccidentDetail>> {
        let path = format!("AccidentStats/{year}");
        self.client.get_json(&path, &[]).await
    }
}

/// A single recorded road accident.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccidentDetail {
    /// Accident identifier.
    pub id: u64,
    /// WGS84 latitude.
    pub lat: f64,
    /// WGS84 longitude.
    pub lon: f64,
    /// Textual location description.
    pub location: Option<String>,
    /// When the accident occurred.
    pub date: Option<String>,
    /// Severity (`"Slight"`, `"Serious"`, `"Fatal"`).
    pub severity: Option<String>,
    /// London borough.
    pub borough: Option<String>,
    /// People involved.
    #[serde(default)]
    pub casualties: Vec<Casualty>,
    /// Vehicles involved.
    #[serde(default)]
    pub vehicles: Vec<AccidentVehicle>,
}

/// A casualty within an [`AccidentDetail`].
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Casualty {
    /// Age, when recorded.
    pub age: Option<i32>,
    /// Casualty class (`"Driver"`, `"Pedestrian"`, ...).
    pub class: Option<String>,
    /// Injury severity.
    pub severity: Option<String>,
    /// Mode of travel.
    pub mode: Option<String>,
    /// Coarse age band.
    pub age_band: Option<String>,
}

/// A vehicle within an [`AccidentDetail`].
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccidentVehicle {
    /// Vehicle type (`"Car"`, `"PedalCycle"`, ...).
    #[serde(rename = "type")]
    pub vehicle_type: Option<String>,
}
