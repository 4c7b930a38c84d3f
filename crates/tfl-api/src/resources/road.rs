//! `/Road` - road corridors, statuses, and street disruptions.

use chrono::NaiveDate;
use serde::Deserialize;
use tracing::instrument;

use crate::client::TflClient;
use crate::error::Result;
use crate::types::StatusSeverity;

/// Wrapper for the `/Road` section.
#[derive(Debug, Clone, Copy)]
pub struct Road<'a> {
    client: &'a TflClient,
}

impl<'a> Road<'a> {
    pub(crate) const fn new(client: &'a TflClient) -> Self {
        Self { client }
    }

    /// Fetches all road corridors managed by TfL.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request fails, the API reports a
    /// non-success status, or the response cannot be decoded.
    #[instrument(skip_all)]
    pub async fn all(&self) -> Result<Vec<RoadCorridor>> {
        self.client.get_json("Road", &[]).await
    }

    /// Fetches the given road corridors by id (e.g. `["A2", "A406"]`).
    ///
    /// # Errors
    ///
    /// Returns [`crate::TflError::NotFound`] for an unknown id, or any
    /// other request/decoding error.
    #[instrument(skip_all)]
    pub async fn get(&self, ids: &[&str]) -> Result<Vec<RoadCorridor>> {
        let path = format!("Road/{}", ids.join(","));
        self.client.get_json(&path, &[]).await
    }

    /// Fetches the status of the given roads, optionally over a date range.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request fails, the API reports a
    /// non-success status, or the response cannot be decoded.
    #[instrument(skip_all)]
    pub async fn status(&self, ids: &[&str], date_range: Option<&DateRange>) -> Result<Vec<RoadCorridor>> {
        let path = format!("Road/{}/Status", ids.join(","));
        let mut query: Vec<(&str, String)> = Vec::new();
        if let Some(range) = date_range {
            query.push(("startDate", range.start.format("%Y-%m-%d").to_string()));
            query.push(("endDate", range.end.format("%Y-%m-%d").to_string()));
        }
        self.client.get_json(&path, &query).await
    }

    /// Fetches active street disruptions on the given roads.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request fails, the API reports a
    /// non-success status, or the response cannot be decoded.
    #[instrument(skip_all)]
    pub async fn disruption(
        &self,
        ids: &[&str],
        params: &RoadDisruptionParams,
    ) -> Result<Vec<RoadDisruption>> {
        let path = format!("Road/{}/Disruption", ids.join(","));
        let mut query: Vec<(&str, String)> = Vec::new();
        if let Some(strip_content) = params.strip_content {
            query.push(("stripContent", strip_content.to_string()));
        }
        if let Some(ref severities) = params.severities {
            query.push(("severities", severities.join(",")));
        }
        if let Some(ref categories) = params.categories {
            query.push(("categories", categories.join(",")));
        }
        self.client.get_json(&path, &query).await
    }

    /// Fetches the street disruption category names.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request fails, the API reports a
    /// non-success status, or the response cannot be decoded.
    #[instrument(skip_all)]
    pub async fn meta_categories(&self) -> Result<Vec<String>> {
        self.client.get_json("Road/Meta/Categories", &[]).await
    }

    /// Fetches the road severity level definitions.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request fails, the API reports a
    /// non-success status, or the response cannot be decoded.
    #[instrument(skip_all)]
    pub async fn meta_severities(&self) -> Result<Vec<StatusSeverity>> {
        self.client.get_json("Road/Meta/Severities", &[]).await
    }
}

/// Inclusive date range for [`Road::status`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    /// First day of the range.
    pub start: NaiveDate,
    /// Last day of the range.
    pub end: NaiveDate,
}

impl DateRange {
    /// Creates a new range.
    #[must_use]
    pub const fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }
}

/// Optional filters for [`Road::disruption`].
#[derive(Debug, Clone, Default)]
pub struct RoadDisruptionParams {
    /// Drop the full-text fields from each disruption.
    pub strip_content: Option<bool>,
    /// Only these severity names.
    pub severities: Option<Vec<String>>,
    /// Only these category names.
    pub categories: Option<Vec<String>>,
}

/// A TfL-managed road corridor.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoadCorridor {
    /// Corridor identifier (e.g. `"a2"`).
    pub id: String,
    /// Display name (e.g. `"A2"`).
    pub display_name: Option<String>,
    /// Overall status name (e.g. `"Good"`).
    pub status_severity: Option<String>,
    /// Overall status description.
    pub status_severity_description: Option<String>,
    /// Bounding box as a GeoJSON coordinate string.
    pub bounds: Option<String>,
    /// Envelope as a GeoJSON coordinate string.
    pub envelope: Option<String>,
    /// API URL of the corridor.
    pub url: Option<String>,
}

/// A street-level disruption on a road corridor.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoadDisruption {
    /// Disruption identifier.
    pub id: String,
    /// API URL of the disruption.
    pub url: Option<String>,
    /// Severity name (e.g. `"Serious"`).
    pub severity: Option<String>,
    /// Category (e.g. `"Works"`).
    pub category: Option<String>,
    /// Sub-category (e.g. `"Utility Works"`).
    pub sub_category: Option<String>,
    /// Full description.
    pub comments: Option<String>,
    /// Latest update text.
    pub current_update: Option<String>,
    /// When the disruption started.
    pub start_date_time: Option<String>,
    /// When the disruption is expected to end.
    pub end_date_time: Option<String>,
    /// Affected location description.
    pub location: Option<String>,
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::indexing_slicing)]

    use super::*;

    #[test]
    fn test_parse_road_fixture() {
        // Arrange
        let json = include_str!("../../../../fixtures/tfl/road_all.json");

        // Act
        let roads: Vec<RoadCorridor> = serde_json::from_str(json).unwrap();

        // Assert
        assert_eq!(roads.len(), 2);
        assert_eq!(roads[0].id, "a1");
        assert_eq!(roads[0].status_severity.as_deref(), Some("Good"));
        assert_eq!(roads[1].display_name.as_deref(), Some("A2"));
    }

    #[tokio::test]
    async fn test_status_sends_date_range() {
        // Arrange
        let mock_server = wiremock::MockServer::start().await;
        let json_body = include_str!("../../../../fixtures/tfl/road_all.json");

        wiremock::Mock::given(wiremock::matchers::method("GET"))
            .and(wiremock::matchers::path("/Road/a1,a2/Status"))
            .and(wiremock::matchers::query_param("startDate", "2024-03-01"))
            .and(wiremock::matchers::query_param("endDate", "2024-03-08"))
            .respond_with(wiremock::ResponseTemplate::new(200).set_body_string(json_body))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = TflClient::builder()
            .base_url(mock_server.uri().parse().unwrap())
            .user_agent("test/0.0.0")
            .build()
            .unwrap();

        let range = DateRange::new(
            NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            NaiveDate::from_ymd_opt(2024, 3, 8).unwrap(),
        );

        // Act
        let roads = client.road().status(&["a1", "a2"], Some(&range)).await.unwrap();

        // Assert
        assert_eq!(roads.len(), 2);
    }

    #[tokio::test]
    async fn test_disruption_filters_are_optional() {
        // Arrange
        let mock_server = wiremock::MockServer::start().await;

        wiremock::Mock::given(wiremock::matchers::method("GET"))
            .and(wiremock::matchers::path("/Road/a2/Disruption"))
            .and(wiremock::matchers::query_param_is_missing("stripContent"))
            .and(wiremock::matchers::query_param_is_missing("severities"))
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
        let disruptions = client
            .road()
            .disruption(&["a2"], &RoadDisruptionParams::default())
            .await
            .unwrap();

        // Assert
        assert!(disruptions.is_empty());
    }

    #[tokio::test]
    async fn test_unknown_road_maps_to_not_found() {
        // Arrange
        let mock_server = wiremock::MockServer::start().await;
        let error_body = r#"{
            "exceptionType": "EntityNotFoundException",
            "httpStatusCode": 404,
            "httpStatus": "NotFound",
            "message": "The following road id is not recognised: zz9"
        }"#;

        wiremock::Mock::given(wiremock::matchers::method("GET"))
            .and(wiremock::matchers::path("/Road/zz9"))
            .respond_with(wiremock::ResponseTemplate::new(404).set_body_string(error_body))
            .mount(&mock_server)
            .await;

        let client = TflClient::builder()
            .base_url(mock_server.uri().parse().unwrap())
            .user_agent("test/0.0.0")
            .build()
            .unwrap();

        // Act
        let result = client.road().get(&["zz9"]).await;

        // Assert
        assert!(matches!(
            result.unwrap_err(),
            crate::TflError::NotFound { .. }
        ));
    }
}
