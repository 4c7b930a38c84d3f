//! `/StopPoint` - stops, stations, and their arrivals.

use serde::Deserialize;
use tracing::instrument;

use crate::client::TflClient;
use crate::error::Result;
use crate::types;

use super::crowding::CrowdingInfo;
use super::search::SearchResponse;

/// Wrapper for the `/StopPoint` section.
#[derive(Debug, Clone, Copy)]
pub struct StopPoint<'a> {
    client: &'a TflClient,
}

impl<'a> StopPoint<'a> {
    pub(crate) const fn new(client: &'a TflClient) -> Self {
        Self { client }
    }

    /// Fetches stop points by NaPTAN code.
    ///
    /// # Errors
    ///
    /// Returns [`crate::TflError::NotFound`] for an unknown code, or any
    /// other request/decoding error.
    #[instrument(skip_all)]
    pub async fn get(&self, ids: &[&str]) -> Result<Vec<StopPointInfo>> {
        let path = format!("StopPoint/{}", ids.join(","));
        self.client.get_json(&path, &[]).await
    }

    /// Fetches arrival predictions at a stop.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request fails, the API reports a
    /// non-success status, or the response cannot be decoded.
    #[instrument(skip_all)]
    pub async fn arrivals(&self, id: &str) -> Result<Vec<types::Prediction>> {
        let path = format!("StopPoint/{id}/Arrivals");
        self.client.get_json(&path, &[]).await
    }

    /// Fetches crowding data for a stop on one line.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request fails, the API reports a
    /// non-success status, or the response cannot be decoded.
    #[instrument(skip_all)]
    pub async fn crowding(&self, id: &str, line: &str, direction: &str) -> Result<CrowdingInfo> {
        let path = format!("StopPoint/{id}/Crowding/{line}");
        let query = [("direction", String::from(direction))];
        self.client.get_json(&path, &query).await
    }

    /// Fetches all stop points of the given types (e.g. `["NaptanMetroStation"]`).
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request fails, the API reports a
    /// non-success status, or the response cannot be decoded.
    #[instrument(skip_all)]
    pub async fn by_type(&self, types: &[&str]) -> Result<Vec<StopPointInfo>> {
        let path = format!("StopPoint/Type/{}", types.join(","));
        self.client.get_json(&path, &[]).await
    }

    /// Searches stop points by name, optionally restricted to modes.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request fails, the API reports a
    /// non-success status, or the response cannot be decoded.
    #[instrument(skip_all)]
    pub async fn search(&self, query: &str, modes: Option<&[&str]>) -> Result<SearchResponse> {
        let mut params: Vec<(&str, String)> = vec![("query", String::from(query))];
        if let Some(modes) = modes {
            params.push(("modes", modes.join(",")));
        }
        self.client.get_json("StopPoint/Search", &params).await
    }

    /// Fetches the disruptions affecting the given stops.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request fails, the API reports a
    /// non-success status, or the response cannot be decoded.
    #[instrument(skip_all)]
    pub async fn disruption(&self, ids: &[&str]) -> Result<Vec<types::Disruption>> {
        let path = format!("StopPoint/{}/Disruption", ids.join(","));
        self.client.get_json(&path, &[]).await
    }

    /// Fetches the transport modes stops can serve.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request fails, the API reports a
    /// non-success status, or the response cannot be decoded.
    #[instrument(skip_all)]
    pub async fn meta_modes(&self) -> Result<Vec<types::Mode>> {
        self.client.get_json("StopPoint/Meta/Modes", &[]).await
    }

    /// Fetches the NaPTAN stop type names.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request fails, the API reports a
    /// non-success status, or the response cannot be decoded.
    #[instrument(skip_all)]
    pub async fn meta_stop_types(&self) -> Result<Vec<String>> {
        self.client.get_json("StopPoint/Meta/StopTypes", &[]).await
    }
}

/// A stop point (bus stop, station, pier, ...).
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StopPointInfo {
    /// NaPTAN code of the stop.
    pub naptan_id: String,
    /// Display name.
    pub common_name: String,
    /// ICS code, when assigned.
    pub ics_code: Option<String>,
    /// NaPTAN stop classification (e.g. `"NaptanMetroStation"`).
    pub stop_type: Option<String>,
    /// NaPTAN code of the parent station.
    pub station_naptan: Option<String>,
    /// Modes served by the stop.
    #[serde(default)]
    pub modes: Vec<String>,
    /// Lines serving the stop.
    #[serde(default)]
    pub lines: Vec<types::Identifier>,
    /// Key/value metadata (facilities, accessibility, ...).
    #[serde(default)]
    pub additional_properties: Vec<types::AdditionalProperty>,
    /// Child stops (platforms, entrances).
    #[serde(default)]
    pub children: Vec<StopPointInfo>,
    /// WGS84 latitude.
    pub lat: Option<f64>,
    /// WGS84 longitude.
    pub lon: Option<f64>,
}
