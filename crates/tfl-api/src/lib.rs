//! Typed client for the Transport for London (TfL) Unified API.
//!
//! Wraps HTTP GET requests against `api.tfl.gov.uk` with credential
//! injection, JSON decoding, and an error type keyed by HTTP status.
//! Each API section is exposed through a small resource wrapper reached
//! from [`TflClient`].
//!
//! ```no_run
//! # async fn run() -> tfl_api::Result<()> {
//! let client = tfl_api::TflClient::builder()
//!     .app_key("your-app-key")
//!     .user_agent("my-app/0.1.0")
//!     .build()?;
//!
//! let bike_points = client.bike_point().all().await?;
//! let status = client.line().status(&["victoria"], false).await?;
//! # let _ = (bike_points, status);
//! # Ok(())
//! # }
//! ```

mod client;
mod error;

/// Resource wrappers, one per API section.
pub mod resources;

/// Entities shared across API sections.
pub mod types;

pub use client::{TflClient, TflClientBuilder};
pub use error::{Result, TflError};
