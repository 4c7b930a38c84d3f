//! Resource wrappers for the TfL Unified API.
//!
//! Each wrapper borrows the shared [`TflClient`](crate::TflClient) and maps
//! one API section: its methods build a path plus query parameters and
//! delegate to the client's GET core. Response types specific to a section
//! live next to their wrapper.
#![allow(clippy::module_name_repetitions)]

mod accident_stats;
mod air_quality;
mod bike_point;
mod cabwise;
mod crowding;
mod cycle;
mod journey;
mod line;
mod mode;
mod occupancy;
mod road;
mod search;
mod stop_point;
mod vehicle;

pub use accident_stats::{AccidentDetail, AccidentStats, AccidentVehicle, Casualty};
pub use air_quality::{AirQuality, AirQualityForecast, AirQualityReport};
pub use bike_point::BikePoint;
pub use cabwise::{CabOperator, Cabwise, CabwiseOperators, CabwiseResponse, CabwiseSearchParams};
pub use crowding::{Crowding, CrowdingInfo, DayOfWeekCrowding, LiveCrowding, TimeBandCrowding};
pub use cycle::{Cycle, CycleSuperhighway};
pub use journey::{
    Instruction, ItineraryResult, Journey, JourneyLeg, JourneyPlanParams, PlannedJourney,
    SearchCriteria, TimeIs,
};
pub use line::{Line, LineInfo, LineStatus, OrderedRoute, RouteSection, RouteSequence};
pub use mode::{ActiveServiceType, Mode};
pub use occupancy::{Bay, BikePointOccupancy, CarPark, ChargeConnectorOccupancy, Occupancy};
pub use road::{DateRange, Road, RoadCorridor, RoadDisruption, RoadDisruptionParams};
pub use search::{Search, SearchMatch, SearchResponse};
pub use stop_point::{StopPoint, StopPointInfo};
pub use vehicle::Vehicle;
