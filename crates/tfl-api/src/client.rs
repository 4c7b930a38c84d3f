//! `TflClient` - shared HTTP core for the TfL Unified API.

use reqwest::Client;
use tracing::instrument;
use url::Url;

use crate::error::{Result, TflError};
use crate::resources::{
    AccidentStats, AirQuality, BikePoint, Cabwise, Crowding, Cycle, Journey, Line, Mode, Occupancy,
    Road, Search, StopPoint, Vehicle,
};
use crate::types::ApiError;

/// Default base URL for the TfL Unified API.
const DEFAULT_BASE_URL: &str = "https://api.tfl.gov.uk/";

/// TfL Unified API client.
///
/// Holds the HTTP client and the registered credentials. All resource
/// wrappers delegate to [`TflClient::get_json`], the single shared verb.
#[derive(Debug)]
#[allow(clippy::module_name_repetitions)]
pub struct TflClient {
    /// HTTP client (reqwest, gzip enabled).
    http_client: Client,
    /// Base URL for API requests.
    base_url: Url,
    /// Application identifier, injected as the `app_id` query parameter.
    app_id: Option<String>,
    /// Application key, injected as the `app_key` query parameter.
    app_key: Option<String>,
}

/// Builder for `TflClient`.
#[derive(Debug)]
#[allow(clippy::module_name_repetitions)]
pub struct TflClientBuilder {
    base_url: Option<Url>,
    app_id: Option<String>,
    app_key: Option<String>,
    user_agent: Option<String>,
}

impl TflClientBuilder {
    /// Creates a new builder.
    const fn new() -> Self {
        Self {
            base_url: None,
            app_id: None,
            app_key: None,
            user_agent: None,
        }
    }

    /// Overrides the base URL (for wiremock in tests).
    #[must_use]
    pub fn base_url(mut self, url: Url) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Sets the application identifier (optional; legacy registrations only).
    #[must_use]
    pub fn app_id(mut self, id: impl Into<String>) -> Self {
        self.app_id = Some(id.into());
        self
    }

    /// Sets the application key (optional; anonymous access is rate-capped).
    #[must_use]
    pub fn app_key(mut self, key: impl Into<String>) -> Self {
        self.app_key = Some(key.into());
        self
    }

    /// Sets the User-Agent (required).
    #[must_use]
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Builds the client.
    ///
    /// # Errors
    ///
    /// - `user_agent` is not set.
    /// - `reqwest::Client` build fails.
    pub fn build(self) -> Result<TflClient> {
        let user_agent = self
            .user_agent
            .ok_or_else(|| TflError::Config(String::from("user_agent is required")))?;

        let base_url = if let Some(url) = self.base_url {
            url
        } else {
            Url::parse(DEFAULT_BASE_URL)
                .map_err(|e| TflError::Config(format!("invalid default base URL: {e}")))?
        };

        let http_client = Client::builder()
            .user_agent(&user_agent)
            .gzip(true)
            .build()
            .map_err(TflError::Http)?;

        Ok(TflClient {
            http_client,
            base_url,
            app_id: self.app_id,
            app_key: self.app_key,
        })
    }
}

impl TflClient {
    /// Creates a new builder.
    #[must_use]
    pub const fn builder() -> TflClientBuilder {
        TflClientBuilder::new()
    }

    /// Sends a GET request with credential injection and decodes the JSON body.
    ///
    /// Caller query parameters come first; `app_id` / `app_key` are appended
    /// when configured. Non-success statuses are mapped through
    /// [`TflError::from_status`] after extracting the message from the
    /// standard API error body.
    #[instrument(skip_all)]
    pub(crate) async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T> {
        let url = self
            .base_url
            .join(path)
            .map_err(|e| TflError::Config(format!("failed to join URL path {path}: {e}")))?;

        // Logged before credential injection so keys never reach log output.
        tracing::debug!(url = %url, "TfL API request");

        let mut request = self.http_client.get(url).query(query);
        if let Some(ref app_id) = self.app_id {
            request = request.query(&[("app_id", app_id.as_str())]);
        }
        if let Some(ref app_key) = self.app_key {
            request = request.query(&[("app_key", app_key.as_str())]);
        }

        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| String::from("<failed to read body>"));
            let message = serde_json::from_str::<ApiError>(&body)
                .ok()
                .and_then(|api_error| api_error.message)
                .unwrap_or(body);
            return Err(TflError::from_status(status, message));
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|source| TflError::Decode {
            path: String::from(path),
            source,
        })
    }
}

/// Resource accessors. Each returns a borrowed wrapper over one API section.
impl TflClient {
    /// `/AccidentStats` wrapper.
    #[must_use]
    pub const fn accident_stats(&self) -> AccidentStats<'_> {
        AccidentStats::new(self)
    }

    /// `/AirQuality` wrapper.
    #[must_use]
    pub const fn air_quality(&self) -> AirQuality<'_> {
        AirQuality::new(self)
    }

    /// `/BikePoint` wrapper.
    #[must_use]
    pub const fn bike_point(&self) -> BikePoint<'_> {
        BikePoint::new(self)
    }

    /// `/Cabwise` wrapper.
    #[must_use]
    pub const fn cabwise(&self) -> Cabwise<'_> {
        Cabwise::new(self)
    }

    /// `/crowding` wrapper.
    #[must_use]
    pub const fn crowding(&self) -> Crowding<'_> {
        Crowding::new(self)
    }

    /// `/CycleSuperhighway` wrapper.
    #[must_use]
    pub const fn cycle(&self) -> Cycle<'_> {
        Cycle::new(self)
    }

    /// `/Journey` wrapper.
    #[must_use]
    pub const fn journey(&self) -> Journey<'_> {
        Journey::new(self)
    }

    /// `/Line` wrapper.
    #[must_use]
    pub const fn line(&self) -> Line<'_> {
        Line::new(self)
    }

    /// `/Mode` wrapper.
    #[must_use]
    pub const fn mode(&self) -> Mode<'_> {
        Mode::new(self)
    }

    /// `/Occupancy` wrapper.
    #[must_use]
    pub const fn occupancy(&self) -> Occupancy<'_> {
        Occupancy::new(self)
    }

    /// `/Road` wrapper.
    #[must_use]
    pub const fn road(&self) -> Road<'_> {
        Road::new(self)
    }

    /// `/Search` wrapper.
    #[must_use]
    pub const fn search(&self) -> Search<'_> {
        Search::new(self)
    }

    /// `/StopPoint` wrapper.
    #[must_use]
    pub const fn stop_point(&self) -> StopPoint<'_> {
        StopPoint::new(self)
    }

    /// `/Vehicle` wrapper.
    #[must_use]
    pub const fn vehicle(&self) -> Vehicle<'_> {
        Vehicle::new(self)
    }
}
