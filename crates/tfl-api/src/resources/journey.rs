//! `/Journey` - point-to-point journey planning.

use chrono::{NaiveDate, NaiveTime};
use serde::Deserialize;
use tracing::instrument;

use crate::client::TflClient;
use crate::error::Result;
use crate::types;

/// Wrapper for the `/Journey` section.
#[derive(Debug, Clone, Copy)]
pub struct Journey<'a> {
    client: &'a TflClient,
}

impl<'a> Journey<'a> {
    pub(crate) const fn new(client: &'a TflClient) -> Self {
        Self { client }
    }

    /// Plans a journey between two locations.
    ///
    /// `from` and `to` accept NaPTAN codes, postcodes, or `lat,lon` pairs.
    /// An ambiguous endpoint makes the API answer HTTP 300, which surfaces
    /// as [`crate::TflError::Unexpected`] with status 300.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request fails, the API reports a
    /// non-success status, or the response cannot be decoded.
    #[instrument(skip_all)]
    pub async fn plan(
        &self,
        from: &str,
        to: &str,
        params: &JourneyPlanParams,
    ) -> Result<ItineraryResult> {
        let path = format!("Journey/JourneyResults/{from}/to/{to}");
        let query = Self::build_plan_query(params);
        self.client.get_json(&path, &query).await
    }

    /// Fetches the transport modes available to the journey planner.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request fails, the API reports a
    /// non-success status, or the response cannot be decoded.
    #[instrument(skip_all)]
    pub async fn meta_modes(&self) -> Result<Vec<types::Mode>> {
        self.client.get_json("Journey/Meta/Modes", &[]).await
    }

    /// Builds query parameters for [`Journey::plan`].
    fn build_plan_query(params: &JourneyPlanParams) -> Vec<(&'static str, String)> {
        let mut query: Vec<(&str, String)> = Vec::new();

        if let Some(ref via) = params.via {
            query.push(("via", via.clone()));
        }
        if let Some(date) = params.date {
            query.push(("date", date.format("%Y%m%d").to_string()));
        }
        if let Some(time) = params.time {
            query.push(("time", time.format("%H%M").to_string()));
        }
        if let Some(time_is) = params.time_is {
            query.push(("timeIs", String::from(time_is.as_str())));
        }
        if let Some(ref modes) = params.modes {
            query.push(("mode", modes.join(",")));
        }
        if let Some(national_search) = params.national_search {
            query.push(("nationalSearch", national_search.to_string()));
        }
        if let Some(ref preference) = params.journey_preference {
            query.push(("journeyPreference", preference.clone()));
        }

        query
    }
}

/// Whether the requested time is a departure or an arrival.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeIs {
    /// Leave at the given time.
    Departing,
    /// Arrive by the given time.
    Arriving,
}

impl TimeIs {
    /// API query value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Departing => "Departing",
            Self::Arriving => "Arriving",
        }
    }
}

/// Request parameters for [`Journey::plan`].
#[derive(Debug, Clone, Default)]
pub struct JourneyPlanParams {
    /// Intermediate location to travel via.
    pub via: Option<String>,
    /// Travel date.
    pub date: Option<NaiveDate>,
    /// Travel time.
    pub time: Option<NaiveTime>,
    /// Whether `time` is a departure or arrival time.
    pub time_is: Option<TimeIs>,
    /// Restrict to these modes (e.g. `["tube", "bus"]`).
    pub modes: Option<Vec<String>>,
    /// Search the national rail network beyond London.
    pub national_search: Option<bool>,
    /// Routing preference (`"LeastTime"`, `"LeastInterchange"`, `"LeastWalking"`).
    pub journey_preference: Option<String>,
}

impl JourneyPlanParams {
    /// Creates empty params (API defaults apply).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the via location.
    #[must_use]
    pub fn via(mut self, via: impl Into<String>) -> Self {
        self.via = Some(via.into());
        self
    }

    /// Sets the travel date.
    #[must_use]
    pub const fn date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    /// Sets the travel time and its interpretation.
    #[must_use]
    pub const fn time(mut self, time: NaiveTime, time_is: TimeIs) -> Self {
        self.time = Some(time);
        self.time_is = Some(time_is);
        self
    }

    /// Restricts the plan to the given modes.
    #[must_use]
    pub fn modes(mut self, modes: &[&str]) -> Self {
        self.modes = Some(modes.iter().map(ToString::to_string).collect());
        self
    }
}

/// Journey planner response.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItineraryResult {
    /// Planned journey options.
    #[serde(default)]
    pub journeys: Vec<PlannedJourney>,
    /// Lines referenced by the journeys.
    #[serde(default)]
    pub lines: Vec<types::Identifier>,
    /// Mode the planner searched with.
    pub search_criteria: Option<SearchCriteria>,
}

/// Echo of the request criteria.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchCriteria {
    /// Requested date/time.
    pub date_time: Option<String>,
    /// Whether the time was departing or arriving.
    pub date_time_type: Option<String>,
}

/// One planned journey option.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlannedJourney {
    /// Departure timestamp.
    pub start_date_time: Option<String>,
    /// Total duration in minutes.
    pub duration: Option<u32>,
    /// Arrival timestamp.
    pub arrival_date_time: Option<String>,
    /// The legs making up the journey.
    #[serde(default)]
    pub legs: Vec<JourneyLeg>,
}

/// One leg of a [`PlannedJourney`].
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JourneyLeg {
    /// Leg duration in minutes.
    pub duration: Option<u32>,
    /// Rider instruction.
    pub instruction: Option<Instruction>,
    /// Leg departure timestamp.
    pub departure_time: Option<String>,
    /// Leg arrival timestamp.
    pub arrival_time: Option<String>,
    /// Transport mode of the leg.
    pub mode: Option<types::Identifier>,
    /// Leg distance in metres.
    pub distance: Option<f64>,
    /// Whether the leg is disrupted.
    #[serde(default)]
    pub is_disrupted: bool,
}

/// Instruction text for a [`JourneyLeg`].
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Instruction {
    /// One-line summary.
    pub summary: Option<String>,
    /// Full instruction text.
    pub detailed: Option<String>,
}
