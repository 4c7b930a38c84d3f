#![allow(clippy::unwrap_used)]
#![allow(missing_docs)]

use tfl_api::{TflClient, TflError};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Standard API error body with the given status echoed inside.
fn api_error_body(status: u16, message: &str) -> String {
    format!(
        r#"{{
            "timestampUtc": "2024-03-02T10:11:39Z",
            "exceptionType": "ApiException",
            "httpStatusCode": {status},
            "httpStatus": "Error",
            "relativeUri": "/Line/victoria/Status",
            "message": "{message}"
        }}"#
    )
}

fn client_for(mock_server: &MockServer) -> TflClient {
    TflClient::builder()
        .base_url(mock_server.uri().parse().unwrap())
        .app_key("test-key")
        .user_agent("test/0.0.0")
        .build()
        .unwrap()
}

async fn status_error(status: u16) -> TflError {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/Line/victoria/Status"))
        .respond_with(
            ResponseTemplate::new(status).set_body_string(api_error_body(status, "boom")),
        )
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    client
        .line()
        .status(&["victoria"], false)
        .await
        .unwrap_err()
}

#[tokio::test]
async fn test_400_maps_to_bad_request() {
    // Arrange & Act
    let err = status_error(400).await;

    // Assert
    assert!(matches!(err, TflError::BadRequest { .. }));
    assert_eq!(err.status(), Some(400));
}

#[tokio::test]
async fn test_401_maps_to_unauthorized() {
    // Arrange & Act
    let err = status_error(401).await;

    // Assert
    assert!(matches!(err, TflError::Unauthorized { .. }));
    assert_eq!(err.status(), Some(401));
}

#[tokio::test]
async fn test_403_maps_to_forbidden() {
    // Arrange & Act
    let err = status_error(403).await;

    // Assert
    assert!(matches!(err, TflError::Forbidden { .. }));
    assert_eq!(err.status(), Some(403));
}

#[tokio::test]
async fn test_404_maps_to_not_found() {
    // Arrange & Act
    let err = status_error(404).await;

    // Assert
    assert!(matches!(err, TflError::NotFound { .. }));
    assert_eq!(err.status(), Some(404));
}

#[tokio::test]
async fn test_429_maps_to_too_many_requests() {
    // Arrange & Act
    let err = status_error(429).await;

    // Assert
    assert!(matches!(err, TflError::TooManyRequests { .. }));
    assert_eq!(err.status(), Some(429));
}

#[tokio::test]
async fn test_500_and_503_map_to_server() {
    // Arrange & Act
    let internal = status_error(500).await;
    let unavailable = status_error(503).await;

    // Assert
    assert!(matches!(internal, TflError::Server { status: 500, .. }));
    assert!(matches!(unavailable, TflError::Server { status: 503, .. }));
}

#[tokio::test]
async fn test_other_status_maps_to_unexpected() {
    // Arrange & Act
    let err = status_error(418).await;

    // Assert
    assert!(matches!(err, TflError::Unexpected { status: 418, .. }));
}

#[tokio::test]
async fn test_error_carries_api_message() {
    // Arrange
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/Line/victoria/Status"))
        .respond_with(
            ResponseTemplate::new(401)
                .set_body_string(api_error_body(401, "Invalid app_key is provided")),
        )
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);

    // Act
    let err = client
        .line()
        .status(&["victoria"], false)
        .await
        .unwrap_err();

    // Assert
    assert!(err.to_string().contains("Invalid app_key is provided"));
}

#[tokio::test]
async fn test_connection_failure_maps_to_http() {
    // Arrange: a server that is immediately dropped leaves a closed port.
    let mock_server = MockServer::start().await;
    let uri = mock_server.uri();
    drop(mock_server);

    let client = TflClient::builder()
        .base_url(uri.parse().unwrap())
        .user_agent("test/0.0.0")
        .build()
        .unwrap();

    // Act
    let err = client.bike_point().all().await.unwrap_err();

    // Assert
    assert!(matches!(err, TflError::Http(_)));
    assert_eq!(err.status(), None);
}
