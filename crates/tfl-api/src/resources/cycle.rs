//! `/CycleSuperhighway` - cycleway route records.

use serde::Deserialize;
use tracing::instrument;

use crate::client::TflClient;
use crate::error::Result;

/// Wrapper for the `/CycleSuperhighway` section.
#[derive(Debug, Clone, Copy)]
pub struct Cycle<'a> {
    client: &'a TflClient,
}

impl<'a> Cycle<'a> {
    pub(crate) const fn new(client: &'a TflClient) -> Self {
        Self { client }
    }

    /// Fetches all cycle superhighway routes.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request fails, the API reports a
    /// non-success status, or the response cannot be decoded.
    #[instrument(skip_all)]
    pub async fn superhighways(&self) -> Result<Vec<CycleSuperhighway>> {
        self.client.get_json("CycleSuperhighway", &[]).await
    }

    /// Fetches a single cycle superhighway by id (e.g. `"CS-7"`).
    ///
    /// # Errors
    ///
    /// Returns [`crate::TflError::NotFound`] for an unknown id, or any
    /// other request/decoding error.
    #[instrument(skip_all)]
    pub async fn superhighway(&self, id: &str) -> Result<CycleSuperhighway> {
        let path = format!("CycleSuperhighway/{id}");
        self.client.get_json(&path, &[]).await
    }
}

/// A cycle superhighway route.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CycleSuperhighway {
    /// Route identifier (e.g. `"CS-7"`).
    pub id: String,
    /// Full display label.
    pub label: Option<String>,
    /// Short display label (e.g. `"CS7"`).
    pub label_short: Option<String>,
    /// Route geography as GeoJSON-in-a-string, when present.
    pub geography: Option<serde_json::Value>,
    /// Whether the route is segregated from motor traffic.
    #[serde(default)]
    pub segregated: bool,
    /// Last modification timestamp.
    pub modified: Option<String>,
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::indexing_slicing)]

    use super::*;

    #[test]
    fn test_parse_superhighways_fixture() {
        // Arrange
        let json = include_str!("../../../../fixtures/tfl/cycle_superhighways.json");

        // Act
        let routes: Vec<CycleSuperhighway> = serde_json::from_str(json).unwrap();

        // Assert
        assert_eq!(routes.len(), 2);
        assert_eq!(routes[0].id, "CS-7");
        assert_eq!(routes[0].label_short.as_deref(), Some("CS7"));
        assert!(!routes[0].segregated);
        assert!(routes[1].segregated);
    }

    #[tokio::test]
    async fn test_superhighway_by_id_via_http() {
        // Arrange
        let mock_server = wiremock::MockServer::start().await;
        let json_body = r#"{"id": "CS-3", "label": "Cycle Superhighway 3", "labelShort": "CS3", "segregated": true}"#;

        wiremock::Mock::given(wiremock::matchers::method("GET"))
            .and(wiremock::matchers::path("/CycleSuperhighway/CS-3"))
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
        let route = client.cycle().superhighway("CS-3").await.unwrap();

        // Assert
        assert_eq!(route.id, "CS-3");
        assert!(route.segregated);
    }
}
