//! Entities shared by more than one TfL API resource.
//!
//! Resource-specific response types live next to their resource module;
//! everything here appears in several unrelated endpoints.

use serde::Deserialize;

/// Standard TfL API error body.
///
/// The API returns this JSON document for every non-success status; its
/// `message` feeds the error variants in [`crate::TflError`].
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Server-side timestamp of the failure.
    pub timestamp_utc: Option<String>,
    /// Vendor exception type (e.g. `"EntityNotFoundException"`).
    pub exception_type: Option<String>,
    /// Numeric HTTP status echoed in the body.
    pub http_status_code: Option<u16>,
    /// Textual HTTP status echoed in the body.
    pub http_status: Option<String>,
    /// The request URI that failed, relative to the API host.
    pub relative_uri: Option<String>,
    /// Human-readable failure description.
    pub message: Option<String>,
}

/// A transport mode known to the API (tube, bus, cycle-hire, ...).
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Mode {
    /// Whether TfL operates the mode.
    #[serde(default)]
    pub is_tfl_service: bool,
    /// Whether journeys on the mode are fare-paying.
    #[serde(default)]
    pub is_fare_paying: bool,
    /// Whether the mode runs to a timetable.
    #[serde(default)]
    pub is_scheduled_service: bool,
    /// Mode identifier (e.g. `"tube"`, `"dlr"`).
    pub mode_name: String,
}

/// A place record (bike point, car park, point of interest).
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Place {
    /// Place identifier (e.g. `"BikePoints_785"`).
    pub id: String,
    /// API URL of this place.
    pub url: Option<String>,
    /// Display name.
    pub common_name: String,
    /// Distance in metres from a search origin, when searching.
    pub distance: Option<f64>,
    /// Place classification (e.g. `"BikePoint"`).
    pub place_type: Option<String>,
    /// Key/value metadata (dock counts, opening hours, ...).
    #[serde(default)]
    pub additional_properties: Vec<AdditionalProperty>,
    /// Child places.
    #[serde(default)]
    pub children: Vec<Place>,
    /// WGS84 latitude.
    pub lat: Option<f64>,
    /// WGS84 longitude.
    pub lon: Option<f64>,
}

impl Place {
    /// Looks up an additional property value by key.
    #[must_use]
    pub fn property(&self, key: &str) -> Option<&str> {
        self.additional_properties
            .iter()
            .find(|p| p.key.as_deref() == Some(key))
            .and_then(|p| p.value.as_deref())
    }
}

/// A single key/value metadata entry attached to a [`Place`].
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdditionalProperty {
    /// Property grouping (e.g. `"Description"`).
    pub category: Option<String>,
    /// Property key (e.g. `"NbBikes"`).
    pub key: Option<String>,
    /// Source system that produced the value.
    pub source_system_key: Option<String>,
    /// Property value.
    pub value: Option<String>,
    /// Last modification timestamp.
    pub modified: Option<String>,
}

/// An arrival prediction for a vehicle at a stop.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Prediction {
    /// Prediction identifier.
    pub id: Option<String>,
    /// Vehicle identifier.
    pub vehicle_id: Option<String>,
    /// NaPTAN code of the stop.
    pub naptan_id: Option<String>,
    /// Stop display name.
    pub station_name: Option<String>,
    /// Line identifier.
    pub line_id: Option<String>,
    /// Line display name.
    pub line_name: Option<String>,
    /// Platform the vehicle arrives at.
    pub platform_name: Option<String>,
    /// Travel direction (`"inbound"` / `"outbound"`).
    pub direction: Option<String>,
    /// Compass bearing of the vehicle.
    pub bearing: Option<String>,
    /// NaPTAN code of the destination stop.
    pub destination_naptan_id: Option<String>,
    /// Destination display name.
    pub destination_name: Option<String>,
    /// When the prediction was made.
    pub timestamp: Option<String>,
    /// Seconds until arrival.
    pub time_to_station: Option<u32>,
    /// Textual vehicle location.
    pub current_location: Option<String>,
    /// Headsign destination.
    pub towards: Option<String>,
    /// Predicted arrival time.
    pub expected_arrival: Option<String>,
    /// When the prediction expires.
    pub time_to_live: Option<String>,
    /// Transport mode of the vehicle.
    pub mode_name: Option<String>,
    /// Source timing detail.
    pub timing: Option<PredictionTiming>,
}

/// Timing metadata attached to a [`Prediction`].
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionTiming {
    /// Offset applied by the countdown server.
    pub countdown_server_adjustment: Option<String>,
    /// Source system timestamp.
    pub source: Option<String>,
    /// Insertion timestamp.
    pub insert: Option<String>,
    /// Read timestamp.
    pub read: Option<String>,
    /// Send timestamp.
    pub sent: Option<String>,
    /// Receive timestamp.
    pub received: Option<String>,
}

/// A reference to another entity (line, route, stop) inside a response.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Identifier {
    /// Entity identifier.
    pub id: Option<String>,
    /// Entity display name.
    pub name: Option<String>,
    /// API URL of the entity.
    pub uri: Option<String>,
    /// Entity type (e.g. `"Line"`).
    #[serde(rename = "type")]
    pub entity_type: Option<String>,
    /// Route classification.
    pub route_type: Option<String>,
    /// Status text.
    pub status: Option<String>,
}

/// A service disruption notice.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Disruption {
    /// Disruption category (e.g. `"PlannedWork"`).
    pub category: Option<String>,
    /// Disruption type.
    #[serde(rename = "type")]
    pub disruption_type: Option<String>,
    /// Human-readable category description.
    pub category_description: Option<String>,
    /// Full description of the disruption.
    pub description: Option<String>,
    /// Short summary.
    pub summary: Option<String>,
    /// Extra guidance for passengers.
    pub additional_info: Option<String>,
    /// Creation timestamp.
    pub created: Option<String>,
    /// Last update timestamp.
    pub last_update: Option<String>,
}

/// A severity level definition for a transport mode.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusSeverity {
    /// Transport mode the level applies to.
    pub mode_name: Option<String>,
    /// Numeric severity (lower is more severe).
    pub severity_level: i32,
    /// Display text (e.g. `"Good Service"`).
    pub description: Option<String>,
}
