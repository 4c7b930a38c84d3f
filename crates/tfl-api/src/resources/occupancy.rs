//! `/Occupancy` - car park, charge connector, and bike point occupancy.

use serde::Deserialize;
use tracing::instrument;

use crate::client::TflClient;
use crate::error::Result;

/// Wrapper for the `/Occupancy` section.
#[derive(Debug, Clone, Copy)]
pub struct Occupancy<'a> {
    client: &'a TflClient,
}

impl<'a> Occupancy<'a> {
    pub(crate) const fn new(client: &'a TflClient) -> Self {
        Self { client }
    }

    /// Fetches the occupancy of all monitored car parks.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request fails, the API reports a
    /// non-success status, or the response cannot be decoded.
    #[instrument(skip_all)]
    pub async fn car_parks(&self) -> Result<Vec<CarPark>> {
        self.client.get_json("Occupancy/CarPark", &[]).await
    }

    /// Fetches the occupancy of one car park (e.g. `"CarParks_800491"`).
    ///
    /// # Errors
    ///
    /// Returns [`crate::TflError::NotFound`] for an unknown id, or any
    /// other request/decoding error.
    #[instrument(skip_all)]
    pub async fn car_park(&self, id: &str) -> Result<CarPark> {
        let path = format!("Occupancy/CarPark/{id}");
        self.client.get_json(&path, &[]).await
    }

    /// Fetches the occupancy of the given charge connectors.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request fails, the API reports a
    /// non-success status, or the response cannot be decoded.
    #[instrument(skip_all)]
    pub async fn charge_connector(&self, ids: &[&str]) -> Result<Vec<ChargeConnectorOccupancy>> {
        let path = format!("Occupancy/ChargeConnector/{}", ids.join(","));
        self.client.get_json(&path, &[]).await
    }

    /// Fetches bike dock occupancy for the given bike point ids.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request fails, the API reports a
    /// non-success status, or the response cannot be decoded.
    #[instrument(skip_all)]
    pub async fn bike_points(&self, ids: &[&str]) -> Result<Vec<BikePointOccupancy>> {
        let path = format!("Occupancy/BikePoints/{}", ids.join(","));
        self.client.get_json(&path, &[]).await
    }
}

/// Occupancy of one car park.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarPark {
    /// Car park identifier.
    pub id: String,
    /// Per-bay-type occupancy.
    #[serde(default)]
    pub bays: Vec<Bay>,
    /// Car park display name.
    pub name: Option<String>,
    /// Public detail page.
    pub car_park_details_url: Option<String>,
}

/// Occupancy of one bay type within a [`CarPark`].
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bay {
    /// Bay classification (`"Disabled"`, `"Pay and Display Parking"`).
    pub bay_type: Option<String>,
    /// Number of bays of this type.
    pub bay_count: u32,
    /// Free bays.
    pub free: u32,
    /// Occupied bays.
    pub occupied: u32,
}

/// Occupancy of one electric vehicle charge connector.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChargeConnectorOccupancy {
    /// Connector identifier.
    pub id: Option<u64>,
    /// Identifier of the source system place.
    pub source_system_place_id: Option<String>,
    /// Connector status (`"Available"`, `"Charging"`).
    pub status: Option<String>,
}

/// Dock occupancy of one bike point.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BikePointOccupancy {
    /// Bike point identifier.
    pub id: String,
    /// Bike point display name.
    pub name: Option<String>,
    /// Docked conventional bikes.
    pub bikes_count: Option<u32>,
    /// Empty docks.
    pub empty_docks: Option<u32>,
    /// Total docks at the station.
    pub total_docks: Option<u32>,
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::indexing_slicing)]

    use super::*;

    #[test]
    fn test_parse_car_park_fixture() {
        // Arrange
        let json = include_str!("../../../../fixtures/tfl/occupancy_car_parks.json");

        // Act
        let car_parks: Vec<CarPark> = serde_json::from_str(json).unwrap();

        // Assert
        assert_eq!(car_parks.len(), 1);
        assert_eq!(car_parks[0].id, "CarParks_800491");
        assert_eq!(car_parks[0].bays.len(), 2);
        assert_eq!(car_parks[0].bays[0].bay_type.as_deref(), Some("Disabled"));
        assert_eq!(car_parks[0].bays[1].free, 84);
    }

    #[tokio::test]
    async fn test_car_park_by_id_via_http() {
        // Arrange
        let mock_server = wiremock::MockServer::start().await;
        let json_body = r#"{
            "id": "CarParks_800491",
            "name": "Barkingside Stn (LUL)",
            "bays": [{"bayType": "Pay and Display Parking", "bayCount": 44, "free": 29, "occupied": 15}]
        }"#;

        wiremock::Mock::given(wiremock::matchers::method("GET"))
            .and(wiremock::matchers::path("/Occupancy/CarPark/CarParks_800491"))
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
        let car_park = client.occupancy().car_park("CarParks_800491").await.unwrap();

        // Assert
        assert_eq!(car_park.bays[0].occupied, 15);
    }

    #[tokio::test]
    async fn test_bike_points_joins_ids() {
        // Arrange
        let mock_server = wiremock::MockServer::start().await;
        let json_body = r#"[
            {"id": "BikePoints_1", "name": "River Street , Clerkenwell", "bikesCount": 9, "emptyDocks": 9, "totalDocks": 19},
            {"id": "BikePoints_2", "name": "Phillimore Gardens, Kensington", "bikesCount": 20, "emptyDocks": 17, "totalDocks": 37}
        ]"#;

        wiremock::Mock::given(wiremock::matchers::method("GET"))
            .and(wiremock::matchers::path(
                "/Occupancy/BikePoints/BikePoints_1,BikePoints_2",
            ))
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
        let occupancy = client
            .occupancy()
            .bike_points(&["BikePoints_1", "BikePoints_2"])
            .await
            .unwrap();

        // Assert
        assert_eq!(occupancy.len(), 2);
        assert_eq!(occupancy[0].bikes_count, Some(9));
    }
}
