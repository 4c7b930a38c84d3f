//! `/Line` - lines, statuses, routes, and arrivals.

use serde::Deserialize;
use tracing::instrument;

use crate::client::TflClient;
use crate::error::Result;
use crate::types;

/// Wrapper for the `/Line` section.
#[derive(Debug, Clone, Copy)]
pub struct Line<'a> {
    client: &'a TflClient,
}

impl<'a> Line<'a> {
    pub(crate) const fn new(client: &'a TflClient) -> Self {
        Self { client }
    }

    /// Fetches the transport modes lines can belong to.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request fails, the API reports a
    /// non-success status, or the response cannot be decoded.
    #[instrument(skip_all)]
    pub async fn meta_modes(&self) -> Result<Vec<types::Mode>> {
        self.client.get_json("Line/Meta/Modes", &[]).await
    }

    /// Fetches the status severity levels per mode.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request fails, the API reports a
    /// non-success status, or the response cannot be decoded.
    #[instrument(skip_all)]
    pub async fn meta_severity(&self) -> Result<Vec<types::StatusSeverity>> {
        self.client.get_json("Line/Meta/Severity", &[]).await
    }

    /// Fetches the disruption category names.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request fails, the API reports a
    /// non-success status, or the response cannot be decoded.
    #[instrument(skip_all)]
    pub async fn meta_disruption_categories(&self) -> Result<Vec<String>> {
        self.client
            .get_json("Line/Meta/DisruptionCategories", &[])
            .await
    }

    /// Fetches lines by id (e.g. `["victoria", "central"]`).
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request fails, the API reports a
    /// non-success status, or the response cannot be decoded.
    #[instrument(skip_all)]
    pub async fn get(&self, ids: &[&str]) -> Result<Vec<LineInfo>> {
        let path = format!("Line/{}", ids.join(","));
        self.client.get_json(&path, &[]).await
    }

    /// Fetches all lines serving the given modes.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request fails, the API reports a
    /// non-success status, or the response cannot be decoded.
    #[instrument(skip_all)]
    pub async fn by_mode(&self, modes: &[&str]) -> Result<Vec<LineInfo>> {
        let path = format!("Line/Mode/{}", modes.join(","));
        self.client.get_json(&path, &[]).await
    }

    /// Fetches the current status of the given lines.
    ///
    /// With `detail` set, the response embeds the full disruption record
    /// for every status entry.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request fails, the API reports a
    /// non-success status, or the response cannot be decoded.
    #[instrument(skip_all)]
    pub async fn status(&self, ids: &[&str], detail: bool) -> Result<Vec<LineInfo>> {
        let path = format!("Line/{}/Status", ids.join(","));
        let query = [("detail", detail.to_string())];
        self.client.get_json(&path, &query).await
    }

    /// Fetches the current status of every line on the given modes.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request fails, the API reports a
    /// non-success status, or the response cannot be decoded.
    #[instrument(skip_all)]
    pub async fn status_by_mode(&self, modes: &[&str]) -> Result<Vec<LineInfo>> {
        let path = format!("Line/Mode/{}/Status", modes.join(","));
        self.client.get_json(&path, &[]).await
    }

    /// Fetches the ordered route sequence of a line in one direction
    /// (`"inbound"` or `"outbound"`).
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request fails, the API reports a
    /// non-success status, or the response cannot be decoded.
    #[instrument(skip_all)]
    pub async fn route_sequence(&self, id: &str, direction: &str) -> Result<RouteSequence> {
        let path = format!("Line/{id}/Route/Sequence/{direction}");
        self.client.get_json(&path, &[]).await
    }

    /// Fetches the stop points served by a line.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request fails, the API reports a
    /// non-success status, or the response cannot be decoded.
    #[instrument(skip_all)]
    pub async fn stop_points(&self, id: &str) -> Result<Vec<super::StopPointInfo>> {
        let path = format!("Line/{id}/StopPoints");
        self.client.get_json(&path, &[]).await
    }

    /// Fetches arrival predictions for the given lines at a stop.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request fails, the API reports a
    /// non-success status, or the response cannot be decoded.
    #[instrument(skip_all)]
    pub async fn arrivals(&self, ids: &[&str], stop_point_id: &str) -> Result<Vec<types::Prediction>> {
        let path = format!("Line/{}/Arrivals/{stop_point_id}", ids.join(","));
        self.client.get_json(&path, &[]).await
    }

    /// Fetches the disruptions currently affecting the given lines.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request fails, the API reports a
    /// non-success status, or the response cannot be decoded.
    #[instrument(skip_all)]
    pub async fn disruption(&self, ids: &[&str]) -> Result<Vec<types::Disruption>> {
        let path = format!("Line/{}/Disruption", ids.join(","));
        self.client.get_json(&path, &[]).await
    }
}

/// A line record.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineInfo {
    /// Line identifier (e.g. `"victoria"`).
    pub id: String,
    /// Display name (e.g. `"Victoria"`).
    pub name: String,
    /// Transport mode of the line.
    pub mode_name: Option<String>,
    /// Current status entries, when requested.
    #[serde(default)]
    pub line_statuses: Vec<LineStatus>,
    /// Marketing route descriptions.
    #[serde(default)]
    pub route_sections: Vec<RouteSection>,
    /// Creation timestamp of the record.
    pub created: Option<String>,
    /// Modification timestamp of the record.
    pub modified: Option<String>,
}

/// One status entry on a [`LineInfo`].
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineStatus {
    /// Line the status belongs to.
    pub line_id: Option<String>,
    /// Numeric severity (lower is more severe).
    pub status_severity: i32,
    /// Display text (e.g. `"Good Service"`).
    pub status_severity_description: Option<String>,
    /// Reason for a degraded status.
    pub reason: Option<String>,
    /// When the status was created.
    pub created: Option<String>,
    /// Full disruption record, when `detail` was requested.
    pub disruption: Option<types::Disruption>,
}

/// A marketed route on a [`LineInfo`].
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteSection {
    /// Route display name.
    pub name: Option<String>,
    /// Travel direction.
    pub direction: Option<String>,
    /// Origin display name.
    pub origination_name: Option<String>,
    /// Destination display name.
    pub destination_name: Option<String>,
    /// Origin NaPTAN code.
    pub originator: Option<String>,
    /// Destination NaPTAN code.
    pub destination: Option<String>,
}

/// Ordered route of a line in one direction.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteSequence {
    /// Line identifier.
    pub line_id: Option<String>,
    /// Line display name.
    pub line_name: Option<String>,
    /// Requested direction.
    pub direction: Option<String>,
    /// Whether the line only runs outbound.
    #[serde(default)]
    pub is_outbound_only: bool,
    /// Transport mode.
    pub mode: Option<String>,
    /// Stop sequences, one per route variant.
    #[serde(default)]
    pub ordered_line_routes: Vec<OrderedRoute>,
}

/// One stop sequence within a [`RouteSequence`].
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderedRoute {
    /// Route variant name.
    pub name: Option<String>,
    /// NaPTAN codes in travel order.
    #[serde(default)]
    pub naptan_ids: Vec<String>,
    /// Service type of the variant.
    pub service_type: Option<String>,
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::indexing_slicing)]

    use super::*;

    #[test]
    fn test_parse_line_status_fixture() {
        // Arrange
        let json = include_str!("../../../../fixtures/tfl/line_status_victoria.json");

        // Act
        let lines: Vec<LineInfo> = serde_json::from_str(json).unwrap();

        // Assert
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].id, "victoria");
        assert_eq!(lines[0].mode_name.as_deref(), Some("tube"));
        assert_eq!(lines[0].line_statuses.len(), 1);
        let status = &lines[0].line_statuses[0];
        assert_eq!(status.status_severity, 10);
        assert_eq!(status.status_severity_description.as_deref(), Some("Good Service"));
        assert!(status.reason.is_none());
    }

    #[test]
    fn test_parse_degraded_status() {
        // Arrange
        let json = r#"[{
            "id": "district",
            "name": "District",
            "modeName": "tube",
            "lineStatuses": [{
                "lineId": "district",
                "statusSeverity": 6,
                "statusSeverityDescription": "Severe Delays",
                "reason": "District Line: Severe delays due to an earlier signal failure at Earls Court."
            }]
        }]"#;

        // Act
        let lines: Vec<LineInfo> = serde_json::from_str(json).unwrap();

        // Assert
        let status = &lines[0].line_statuses[0];
        assert_eq!(status.status_severity, 6);
        assert!(status.reason.as_deref().unwrap().contains("signal failure"));
    }

    #[tokio::test]
    async fn test_status_joins_ids_and_sends_detail() {
        // Arrange
        let mock_server = wiremock::MockServer::start().await;
        let json_body = include_str!("../../../../fixtures/tfl/line_status_victoria.json");

        wiremock::Mock::given(wiremock::matchers::method("GET"))
            .and(wiremock::matchers::path("/Line/victoria,central/Status"))
            .and(wiremock::matchers::query_param("detail", "true"))
            .respond_with(wiremock::ResponseTemplate::new(200).set_body_string(json_body))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = TflClient::builder()
            .base_url(mock_server.uri().parse().unwrap())
            .user_agent("test/0.0.0")
            .build()
            .unwrap();

        // Act
        let lines = client.line().status(&["victoria", "central"], true).await.unwrap();

        // Assert
        assert_eq!(lines.len(), 1);
    }

    #[tokio::test]
    async fn test_route_sequence_via_http() {
        // Arrange
        let mock_server = wiremock::MockServer::start().await;
        let json_body = include_str!("../../../../fixtures/tfl/route_sequence_victoria.json");

        wiremock::Mock::given(wiremock::matchers::method("GET"))
            .and(wiremock::matchers::path("/Line/victoria/Route/Sequence/outbound"))
            .respond_with(wiremock::ResponseTemplate::new(200).set_body_string(json_body))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = TflClient::builder()
            .base_url(mock_server.uri().parse().unwrap())
            .user_agent("test/0.0.0")
            .build()
            .unwrap();

        // Act
        let sequence = client.line().route_sequence("victoria", "outbound").await.unwrap();

        // Assert
        assert_eq!(sequence.line_id.as_deref(), Some("victoria"));
        assert_eq!(sequence.ordered_line_routes.len(), 1);
        assert_eq!(sequence.ordered_line_routes[0].naptan_ids.len(), 3);
    }

    #[tokio::test]
    async fn test_arrivals_builds_joined_path() {
        // Arrange
        let mock_server = wiremock::MockServer::start().await;

        wiremock::Mock::given(wiremock::matchers::method("GET"))
            .and(wiremock::matchers::path("/Line/victoria/Arrivals/940GZZLUVIC"))
            .respond_with(wiremock::ResponseTemplate::new(200).set_body_string("[]"))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = TflClient::builder()
            .base_url(mock_server.uri().parse().unwrap())
            .user_agent("test/0.0.0")
            .build()
            .unwrap();

        // Act
        let predictions = client.line().arrivals(&["victoria"], "940GZZLUVIC").await.unwrap();

        // Assert
        assert!(predictions.is_empty());
    }

    #[tokio::test]
    async fn test_meta_disruption_categories_via_http() {
        // Arrange
        let mock_server = wiremock::MockServer::start().await;
        let json_body = r#"["Undefined", "RealTime", "PlannedWork", "Information"]"#;

        wiremock::Mock::given(wiremock::matchers::method("GET"))
            .and(wiremock::matchers::path("/Line/Meta/DisruptionCategories"))
            .respond_with(wiremock::ResponseTemplate::new(200).set_body_string(json_body))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = TflClient::builder()
            .base_url(mock_server.uri().parse().unwrap())
            .user_agent("test/0.0.0")
            .build()
            .unwrap();

        // Act
        let categories = client.line().meta_disruption_categories().await.unwrap();

        // Assert
        assert_eq!(categories.len(), 4);
        assert!(categories.contains(&String::from("PlannedWork")));
    }
}
